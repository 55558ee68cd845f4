use super::storefront::Storefront;
use super::ui::Ui;
use super::widgets::ProductCard;

pub struct Populator {}

impl Populator {

    pub fn populate(ui: &Ui, storefront: &Storefront) {
        Self::populate_hero(ui, storefront);
        Self::populate_product_grid(ui, storefront);
    }

    fn populate_hero(ui: &Ui, storefront: &Storefront) {
        match storefront.hero() {
            Some(model) => ui.hero().set_featured(&model),
            None => tracing::warn!("catalog is empty, hero card stays blank"),
        }
    }

    fn populate_product_grid(ui: &Ui, storefront: &Storefront) {
        let product_grid = ui.product_grid();
        for model in storefront.cards() {
            product_grid.append_card(ProductCard::new(&model));
        }
        tracing::debug!(cards = product_grid.cards().len(), "product grid populated");
    }
}
