//! Menu data: the normalized domain model, the upstream wire schema and the
//! one-shot loader that turns one into the other.

mod error;
pub mod loader;
mod types;
pub mod wire;

pub use error::LoadError;
pub use loader::{spawn_load, MenuLoader};
pub use types::{AddonCategory, Category, Dish, DishKind, Menu};
