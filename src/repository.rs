use super::models::{Catalog, Product};

/// Read-only access to the catalog compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct Repository {
    catalog: &'static Catalog
}

impl Repository {

    pub const fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    /// Products in declaration order.
    pub const fn products(&self) -> &'static [Product] {
        self.catalog.products
    }

    pub fn product_by_index(&self, index: usize) -> Option<&'static Product> {
        self.catalog.products.get(index)
    }

    pub fn product_by_id(&self, id: &str) -> Option<(usize, &'static Product)> {
        self.catalog
            .products_map
            .get(id)
            .and_then(|&index| self.product_by_index(index).map(|product| (index, product)))
    }

    /// The product shown in the hero section, falling back to the first
    /// product when `id` is unknown.
    pub fn featured(&self, id: &str) -> Option<(usize, &'static Product)> {
        self.product_by_id(id)
            .or_else(|| self.catalog.products.first().map(|product| (0, product)))
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::APP_CATALOG;

    fn repository() -> Repository {
        Repository::new(&APP_CATALOG)
    }

    #[test]
    fn products_keep_declaration_order() {
        let ids: Vec<&str> = repository().products().iter().map(|product| product.id).collect();
        assert_eq!(ids, ["turbine-3000", "venti-pro-xx", "eco-breeze"]);

        let again: Vec<&str> = repository().products().iter().map(|product| product.id).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn lookup_by_id_returns_declaration_index() {
        let repository = repository();
        for (index, product) in repository.products().iter().enumerate() {
            let (found_index, found) = repository.product_by_id(product.id).unwrap();
            assert_eq!(found_index, index);
            assert_eq!(found, product);
        }
        assert!(repository.product_by_id("missing").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let products = repository().products();
        for (index, product) in products.iter().enumerate() {
            assert!(products[index + 1..].iter().all(|other| other.id != product.id));
        }
    }

    #[test]
    fn featured_falls_back_to_first_product() {
        let (index, product) = repository().featured("no-such-product").unwrap();
        assert_eq!(index, 0);
        assert_eq!(product.name, "AeroFlow Turbo 3000");
        assert_eq!(product.price, 34999);
        assert_eq!(product.tags, ["Home", "Ceiling", "BLDC"]);
    }

    #[test]
    fn featured_product_is_looked_up_by_id() {
        let (index, product) = repository().featured("eco-breeze").unwrap();
        assert_eq!(index, 2);
        assert_eq!(product.name, "EcoBreeze In-Wall");
    }

    #[test]
    fn every_product_image_is_shipped() {
        let images_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/images");
        for product in repository().products() {
            assert!(images_dir.join(product.image).is_file(), "missing image {}", product.image);
        }
    }
}
