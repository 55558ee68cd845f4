use super::product::Product;

#[derive(Debug)]
pub struct Catalog {
    pub products: &'static [Product],
    pub products_map: phf::Map<&'static str, usize>,
}
