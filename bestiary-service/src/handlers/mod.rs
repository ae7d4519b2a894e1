pub mod creatures;
pub mod health;
pub mod items;
pub mod root;

pub use creatures::create_amphibian;
pub use health::{health_check, readiness_check};
pub use items::read_item;
pub use root::read_root;
