pub use adw::prelude::*;
pub use adw::subclass::prelude::*;
pub use anyhow::{Result, Context, anyhow, bail};
