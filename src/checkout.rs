use super::prelude::*;
use super::models::Product;

/// Handles the "Buy Now" action of a product card.
///
/// Returns the notice shown to the customer. Implementations must not
/// modify the catalog.
pub trait CheckoutHandler {
    fn buy_now(&self, product: &Product) -> Result<String>;
}

/// Stands in until a payment provider is integrated: every purchase attempt
/// ends in a notice pointing the customer to a quote request instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderCheckout;

impl CheckoutHandler for PlaceholderCheckout {
    fn buy_now(&self, product: &Product) -> Result<String> {
        Ok(format!(
            "Buy now clicked for {name}.\nOnline payment is not available yet, please request a quote on WhatsApp.",
            name = product.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_notice_names_the_product() {
        let product = Product {
            id: "turbine-3000",
            name: "AeroFlow Turbo 3000",
            description: "",
            price: 34999,
            image: "turbine-3000.png",
            tags: &[],
        };

        let notice = PlaceholderCheckout.buy_now(&product).unwrap();
        assert!(notice.starts_with("Buy now clicked for AeroFlow Turbo 3000."));
    }
}
