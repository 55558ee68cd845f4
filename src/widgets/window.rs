use super::super::prelude::*;
use super::hero_section::HeroSection;
use super::product_grid::ProductGrid;
use super::quote_form::QuoteForm;
use super::site_footer::SiteFooter;

use gtk::gio::{ActionGroup, ActionMap};

const NOTICE_RESPONSE: &str = "ok";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/in/zunera/storefront/window.ui")]
    pub struct Window {
        #[template_child(id = "window-toast-overlay")]
        pub toast_overlay: TemplateChild<adw::ToastOverlay>,
        #[template_child(id = "window-menu-button")]
        pub menu_button: TemplateChild<gtk::MenuButton>,
        #[template_child(id = "window-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,
        #[template_child(id = "window-hero")]
        pub hero: TemplateChild<HeroSection>,
        #[template_child(id = "window-product-grid")]
        pub product_grid: TemplateChild<ProductGrid>,
        #[template_child(id = "window-quote-form")]
        pub quote_form: TemplateChild<QuoteForm>,
        #[template_child(id = "window-support-button")]
        pub support_button: TemplateChild<gtk::Button>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "Window";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            HeroSection::ensure_type();
            ProductGrid::ensure_type();
            QuoteForm::ensure_type();
            SiteFooter::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_menu();
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    fn setup_menu(&self) {
        let menu = gtk::gio::Menu::new();
        menu.append(Some("About"), Some("app.about"));
        menu.append(Some("Quit"), Some("app.quit"));
        self.imp().menu_button.set_menu_model(Some(&menu));
    }

    pub fn hero(&self) -> &HeroSection {
        &self.imp().hero
    }

    pub fn product_grid(&self) -> &ProductGrid {
        &self.imp().product_grid
    }

    pub fn quote_form(&self) -> &QuoteForm {
        &self.imp().quote_form
    }

    pub fn scrolled_window(&self) -> &gtk::ScrolledWindow {
        &self.imp().scrolled_window
    }

    pub fn support_button(&self) -> &gtk::Button {
        &self.imp().support_button
    }

    pub fn show_toast(&self, message: &str) {
        self.imp().toast_overlay.add_toast(adw::Toast::new(message));
    }

    /// Modal notice with a single acknowledge button.
    pub fn show_notice(&self, heading: &str, body: &str) {
        let dialog = adw::AlertDialog::new(Some(heading), Some(body));
        dialog.add_response(NOTICE_RESPONSE, "OK");
        dialog.set_default_response(Some(NOTICE_RESPONSE));
        dialog.set_close_response(NOTICE_RESPONSE);
        dialog.present(Some(self));
    }

}
