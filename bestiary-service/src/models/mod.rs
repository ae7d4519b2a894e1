use serde::{Deserialize, Serialize};

/// A creature registered in the bestiary.
///
/// `id` is caller-supplied and not required to be unique; once a creature
/// is in the registry it is never validated or mutated again.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Creature {
    pub id: i64,
    pub family: String,
    pub common_name: String,
}
