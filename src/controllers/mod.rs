mod actions;
mod products_scroll;
mod storefront_actions;

pub use self::actions::Actions as ActionsController;
pub use self::storefront_actions::StorefrontActions as StorefrontActionsController;
