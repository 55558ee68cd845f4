use super::widgets::{HeroSection, ProductGrid, QuoteForm, Window};

use std::rc::{Rc, Weak};

pub struct UiWeak {
    window: Weak<Window>
}

impl UiWeak {
    pub fn upgrade(&self) -> Option<Ui> {
        self.window.upgrade().map(|window| Ui { window })
    }
}

#[derive(Clone)]
pub struct Ui {
    window: Rc<Window>
}

impl Ui {

    pub fn new(window: Window) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn hero(&self) -> &HeroSection {
        self.window.hero()
    }

    pub fn product_grid(&self) -> &ProductGrid {
        self.window.product_grid()
    }

    pub fn quote_form(&self) -> &QuoteForm {
        self.window.quote_form()
    }

    pub fn scrolled_window(&self) -> &gtk::ScrolledWindow {
        self.window.scrolled_window()
    }

    pub fn support_button(&self) -> &gtk::Button {
        self.window.support_button()
    }

    pub fn downgrade(&self) -> UiWeak {
        UiWeak { window: Rc::downgrade(&self.window) }
    }

}
