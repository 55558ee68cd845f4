mod product;
mod catalog;

#[cfg(runtime)]
type String = &'static str;
#[cfg(not(runtime))]
type String = std::string::String;

#[cfg(runtime)]
type Tags = &'static [&'static str];
#[cfg(not(runtime))]
type Tags = Vec<String>;

pub use self::product::Product;
pub use self::catalog::Catalog;
