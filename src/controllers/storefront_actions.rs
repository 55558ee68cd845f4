use super::super::prelude::*;
use super::super::ui::Ui;
use super::super::storefront::{Interaction, Storefront, StorefrontAction};
use super::products_scroll::ProductsScroll;

use std::rc::{Rc, Weak};

const NOTICE_HEADING: &str = "Buy Now";

struct State {
    ui: Ui,
    storefront: Storefront,
    products_scroll: ProductsScroll
}

struct WeakStorefrontActions {
    state: Weak<State>
}

impl WeakStorefrontActions {
    fn upgrade(&self) -> Option<StorefrontActions> {
        self.state.upgrade().map(|state| StorefrontActions { state })
    }
}

/// Routes every button on the page through [`Storefront::handle`] and
/// carries out the resulting [`Interaction`].
pub struct StorefrontActions {
    state: Rc<State>
}

impl StorefrontActions {

    pub fn new(ui: Ui, storefront: Storefront) -> Self {
        let products_scroll = ProductsScroll::new(ui.scrolled_window().clone());
        let state = State { ui, storefront, products_scroll };
        let this = Self { state: Rc::new(state) };
        this.setup_card_actions();
        this.setup_hero_actions();
        this.setup_support_action();
        this.setup_quote_form_actions();
        this
    }

    fn setup_card_actions(&self) {
        for card in self.state.ui.product_grid().cards().iter() {
            let this_weak = self.downgrade();
            card.connect_buy_now(move |card| {
                if let Some(this) = this_weak.upgrade() {
                    this.dispatch(StorefrontAction::BuyNow(card.index() as usize));
                }
            });

            let this_weak = self.downgrade();
            card.connect_contact(move |card| {
                if let Some(this) = this_weak.upgrade() {
                    this.dispatch(StorefrontAction::ContactProduct(card.index() as usize));
                }
            });
        }
    }

    fn setup_hero_actions(&self) {
        let hero = self.state.ui.hero();

        let this_weak = self.downgrade();
        hero.connect_quick_quote(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.dispatch(StorefrontAction::QuickQuote);
            }
        });

        let this_weak = self.downgrade();
        hero.connect_view_products(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.dispatch(StorefrontAction::ViewProducts);
            }
        });
    }

    fn setup_support_action(&self) {
        let this_weak = self.downgrade();
        self.state.ui.support_button().connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.dispatch(StorefrontAction::Support);
            }
        });
    }

    fn setup_quote_form_actions(&self) {
        let quote_form = self.state.ui.quote_form();

        let this_weak = self.downgrade();
        quote_form.connect_send_quote(move |form| {
            if let Some(this) = this_weak.upgrade() {
                let request = form.request();
                this.dispatch(StorefrontAction::SendQuote(&request));
            }
        });

        let this_weak = self.downgrade();
        quote_form.connect_email_quote(move |form| {
            if let Some(this) = this_weak.upgrade() {
                let request = form.request();
                this.dispatch(StorefrontAction::EmailQuote(&request));
            }
        });
    }

    fn dispatch(&self, action: StorefrontAction<'_>) {
        let product = action
            .product_index()
            .and_then(|index| self.state.storefront.repository().product_by_index(index))
            .map(|product| product.id);
        tracing::info!(action = action.name(), product, "storefront action");

        match self.state.storefront.handle(action) {
            Ok(interaction) => self.perform(interaction),
            Err(error) => self.handle_err(&error),
        }
    }

    fn perform(&self, interaction: Interaction) {
        match interaction {
            Interaction::OpenUri(uri) => self.launch_uri(uri),
            Interaction::Notice(notice) => self.state.ui.window().show_notice(NOTICE_HEADING, &notice),
            Interaction::ScrollTo(offset) => {
                if !self.state.products_scroll.scroll_to(offset) {
                    tracing::debug!(offset, "page already at products");
                }
            }
        }
    }

    fn launch_uri(&self, uri: String) {
        tracing::debug!(%uri, "opening contact link");
        let window = self.state.ui.window();
        let this_weak = self.downgrade();
        gtk::UriLauncher::new(&uri).launch(Some(window), None::<&gtk::gio::Cancellable>, move |result| {
            if
                let Err(e) = result
                && let Some(this) = this_weak.upgrade()
            {
                let error = anyhow::Error::new(e).context(format!("Failed to open contact link: {uri}"));
                this.handle_err(&error);
            }
        });
    }

    fn handle_err(&self, error: &anyhow::Error) {
        tracing::warn!("{error:#}");
        self.state.ui.window().show_toast(&error.to_string());
    }

    fn downgrade(&self) -> WeakStorefrontActions {
        let state = Rc::downgrade(&self.state);
        WeakStorefrontActions { state }
    }

}
