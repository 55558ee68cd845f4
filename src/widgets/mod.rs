mod hero_section;
mod product_card;
mod product_grid;
mod quote_form;
mod site_footer;
mod window;

use super::constants;

pub use hero_section::HeroSection;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use quote_form::QuoteForm;
pub use window::Window;

/// Points `picture` at a bundled product image. Images that were not
/// bundled leave the picture empty.
fn load_product_image(picture: &gtk::Picture, image: &str) {
    let path = format!("{prefix}/{image}", prefix = constants::APP_IMAGES_PREFIX);
    if gtk::gio::resources_get_info(&path, gtk::gio::ResourceLookupFlags::NONE).is_ok() {
        picture.set_resource(Some(&path));
    } else {
        tracing::debug!(image, "product image is not bundled");
    }
}
