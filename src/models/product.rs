use super::{String, Tags};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image: String,
    pub tags: Tags,
}
