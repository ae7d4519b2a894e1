pub mod bestiary;
pub mod registry;

pub use bestiary::BestiaryService;
pub use registry::CreatureRegistry;
