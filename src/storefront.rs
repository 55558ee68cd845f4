use super::prelude::*;
use super::constants;
use super::checkout::CheckoutHandler;
use super::contact::{ContactLinkBuilder, ContactMessage};
use super::models::Product;
use super::pricing::PriceFormatter;
use super::quote::QuoteRequest;
use super::repository::Repository;

use std::rc::Rc;

pub const TAG_SEPARATOR: &str = " • ";
pub const PRODUCTS_SCROLL_OFFSET: f64 = 600.0;

/// Everything a product card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardModel {
    pub index: usize,
    pub product: &'static Product,
    pub price_label: String,
    pub tags_label: String,
}

impl ProductCardModel {
    fn new(index: usize, product: &'static Product) -> Self {
        Self {
            index,
            product,
            price_label: PriceFormatter::format(product.price),
            tags_label: product.tags.join(TAG_SEPARATOR),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum StorefrontAction<'a> {
    BuyNow(usize),
    ContactProduct(usize),
    QuickQuote,
    Support,
    SendQuote(&'a QuoteRequest),
    EmailQuote(&'a QuoteRequest),
    ViewProducts,
}

impl StorefrontAction<'_> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BuyNow(_) => "buy-now",
            Self::ContactProduct(_) => "contact-product",
            Self::QuickQuote => "quick-quote",
            Self::Support => "support",
            Self::SendQuote(_) => "send-quote",
            Self::EmailQuote(_) => "email-quote",
            Self::ViewProducts => "view-products",
        }
    }

    pub const fn product_index(&self) -> Option<usize> {
        match self {
            Self::BuyNow(index) | Self::ContactProduct(index) => Some(*index),
            _ => None,
        }
    }
}

/// What the host environment has to do in response to an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    OpenUri(String),
    Notice(String),
    ScrollTo(f64),
}

struct StorefrontState {
    repository: Repository,
    links: ContactLinkBuilder,
    checkout: Box<dyn CheckoutHandler>,
}

#[derive(Clone)]
pub struct Storefront {
    state: Rc<StorefrontState>
}

impl Storefront {

    pub fn new<C>(repository: Repository, links: ContactLinkBuilder, checkout: C) -> Self
    where
        C: CheckoutHandler + 'static
    {
        let state = StorefrontState {
            repository,
            links,
            checkout: Box::new(checkout),
        };

        Self { state: Rc::new(state) }
    }

    pub fn repository(&self) -> Repository {
        self.state.repository
    }

    pub fn hero(&self) -> Option<ProductCardModel> {
        self.state
            .repository
            .featured(constants::FEATURED_PRODUCT_ID)
            .map(|(index, product)| ProductCardModel::new(index, product))
    }

    pub fn cards(&self) -> Vec<ProductCardModel> {
        self.state
            .repository
            .products()
            .iter()
            .enumerate()
            .map(|(index, product)| ProductCardModel::new(index, product))
            .collect()
    }

    fn product(&self, index: usize) -> Result<&'static Product> {
        self.state
            .repository
            .product_by_index(index)
            .with_context(|| format!("No product at catalog position {index}"))
    }

    fn open(&self, message: ContactMessage<'_>) -> Interaction {
        Interaction::OpenUri(self.state.links.build_for(message))
    }

    pub fn handle(&self, action: StorefrontAction<'_>) -> Result<Interaction> {
        let interaction = match action {
            StorefrontAction::BuyNow(index) => {
                let product = self.product(index)?;
                Interaction::Notice(self.state.checkout.buy_now(product)?)
            }
            StorefrontAction::ContactProduct(index) => {
                let product = self.product(index)?;
                self.open(ContactMessage::ProductQuote(product))
            }
            StorefrontAction::QuickQuote => self.open(ContactMessage::BulkQuote),
            StorefrontAction::Support => self.open(ContactMessage::Support),
            StorefrontAction::SendQuote(request) => self.open(ContactMessage::TailoredQuote(request)),
            StorefrontAction::EmailQuote(request) => self.open(ContactMessage::EmailQuote(request)),
            StorefrontAction::ViewProducts => Interaction::ScrollTo(PRODUCTS_SCROLL_OFFSET),
        };

        Ok(interaction)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::PlaceholderCheckout;
    use crate::constants::APP_CATALOG;
    use crate::quote::QuoteField;

    use std::cell::Cell;

    const DESTINATION: &str = "919999999999";

    fn storefront() -> Storefront {
        Storefront::new(
            Repository::new(&APP_CATALOG),
            ContactLinkBuilder::new(DESTINATION),
            PlaceholderCheckout,
        )
    }

    fn decoded_message(interaction: &Interaction) -> String {
        let Interaction::OpenUri(url) = interaction else {
            panic!("expected a link, got {interaction:?}");
        };
        let (_, query) = url.split_once("?text=").unwrap();
        percent_encoding::percent_decode_str(query).decode_utf8().unwrap().into_owned()
    }

    struct CountingCheckout(Rc<Cell<usize>>);

    impl CheckoutHandler for CountingCheckout {
        fn buy_now(&self, product: &Product) -> Result<String> {
            self.0.set(self.0.get() + 1);
            Ok(product.id.to_string())
        }
    }

    #[test]
    fn cards_follow_catalog_order() {
        let cards = storefront().cards();
        let names: Vec<&str> = cards.iter().map(|card| card.product.name).collect();
        assert_eq!(names, ["AeroFlow Turbo 3000", "VentiPro XX Industrial", "EcoBreeze In-Wall"]);
        assert_eq!(cards, storefront().cards());
    }

    #[test]
    fn cards_carry_formatted_price_and_tags() {
        let cards = storefront().cards();
        assert_eq!(cards[0].price_label, "₹34,999");
        assert_eq!(cards[0].tags_label, "Home • Ceiling • BLDC");
        assert_eq!(cards[1].price_label, "₹1,29,999");
        assert_eq!(cards[1].tags_label, "Industrial • Axial");
    }

    #[test]
    fn hero_shows_first_product() {
        let hero = storefront().hero().unwrap();
        assert_eq!(hero.index, 0);
        assert_eq!(hero.product.id, "turbine-3000");
        assert_eq!(hero.price_label, "₹34,999");
    }

    #[test]
    fn contact_product_message_names_product() {
        let storefront = storefront();
        for card in storefront.cards() {
            let interaction = storefront.handle(StorefrontAction::ContactProduct(card.index)).unwrap();
            let message = decoded_message(&interaction);
            assert!(message.contains(card.product.name));
            assert!(message.contains(card.product.id));
        }
    }

    #[test]
    fn support_opens_default_destination() {
        let interaction = storefront().handle(StorefrontAction::Support).unwrap();
        let Interaction::OpenUri(url) = &interaction else { panic!("expected a link") };

        assert!(url.starts_with("https://wa.me/919999999999?text="));
        assert_eq!(decoded_message(&interaction), "Hello — I need product & installation support.");
    }

    #[test]
    fn quick_quote_asks_for_bulk_turbines() {
        let interaction = storefront().handle(StorefrontAction::QuickQuote).unwrap();
        assert_eq!(decoded_message(&interaction), "Hello, I want a quote for bulk industrial turbines.");
    }

    #[test]
    fn quote_form_buttons_include_captured_fields() {
        let request = QuoteRequest::new()
            .with(QuoteField::Company, "Acme Mills")
            .with(QuoteField::Details, "4 x VentiPro XX");

        let sent = storefront().handle(StorefrontAction::SendQuote(&request)).unwrap();
        let message = decoded_message(&sent);
        assert!(message.starts_with("Hi, I need a tailored quote. Here are my details:"));
        assert!(message.contains("Company / Name: Acme Mills"));
        assert!(message.contains("Project details & quantity: 4 x VentiPro XX"));

        let emailed = storefront().handle(StorefrontAction::EmailQuote(&request)).unwrap();
        assert!(decoded_message(&emailed).starts_with("Hi, I would like a quote by email."));
    }

    #[test]
    fn buy_now_shows_notice_without_link() {
        let storefront = storefront();
        let before = storefront.cards();

        let interaction = storefront.handle(StorefrontAction::BuyNow(1)).unwrap();
        let Interaction::Notice(notice) = interaction else { panic!("expected a notice") };
        assert!(notice.contains("VentiPro XX Industrial"));
        assert!(!notice.contains("wa.me"));

        assert_eq!(before, storefront.cards());
    }

    #[test]
    fn buy_now_is_delegated_to_checkout_handler() {
        let calls = Rc::new(Cell::new(0));
        let storefront = Storefront::new(
            Repository::new(&APP_CATALOG),
            ContactLinkBuilder::new(DESTINATION),
            CountingCheckout(Rc::clone(&calls)),
        );

        let interaction = storefront.handle(StorefrontAction::BuyNow(2)).unwrap();
        assert_eq!(interaction, Interaction::Notice("eco-breeze".to_string()));
        assert_eq!(calls.get(), 1);

        storefront.handle(StorefrontAction::ContactProduct(2)).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn only_card_actions_name_a_product() {
        assert_eq!(StorefrontAction::BuyNow(1).product_index(), Some(1));
        assert_eq!(StorefrontAction::ContactProduct(2).product_index(), Some(2));
        assert_eq!(StorefrontAction::Support.product_index(), None);
        assert_eq!(StorefrontAction::ViewProducts.name(), "view-products");
    }

    #[test]
    fn view_products_scrolls_to_fixed_offset() {
        let interaction = storefront().handle(StorefrontAction::ViewProducts).unwrap();
        assert_eq!(interaction, Interaction::ScrollTo(PRODUCTS_SCROLL_OFFSET));
    }

    #[test]
    fn unknown_product_is_an_error() {
        assert!(storefront().handle(StorefrontAction::BuyNow(42)).is_err());
        assert!(storefront().handle(StorefrontAction::ContactProduct(42)).is_err());
    }
}
