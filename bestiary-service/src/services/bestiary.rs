//! Creature-creation business rules.
//!
//! The checks run in a fixed order and short-circuit on the first failure;
//! nothing is appended to the registry until every check has passed.

use crate::models::Creature;
use crate::services::CreatureRegistry;
use anyhow::anyhow;
use service_core::error::AppError;

/// The only family accepted by `create_amphibian`.
pub const AMPHIBIAN_FAMILY: &str = "Amphibian";

/// Minimum permission level allowed to create creatures.
const ADMIN_LEVEL: i64 = 2;

#[derive(Debug, Clone)]
pub struct BestiaryService {
    registry: CreatureRegistry,
}

impl BestiaryService {
    pub fn new(registry: CreatureRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CreatureRegistry {
        &self.registry
    }

    /// Register a new amphibian.
    ///
    /// Check order matters: a forced failure wins over everything, a wrong
    /// family wins over an insufficient permission level.
    ///
    /// `throws` simulates an unexpected runtime failure and exists so the
    /// unclassified-error path can be exercised end to end.
    pub async fn create_amphibian(
        &self,
        creature: Creature,
        user_level: i64,
        throws: bool,
    ) -> Result<bool, AppError> {
        if throws {
            return Err(AppError::InternalError(anyhow!(
                "This is an unexpected exception"
            )));
        }

        if creature.family != AMPHIBIAN_FAMILY {
            return Err(AppError::BadRequest(anyhow!("Only amphibians allowed")));
        }

        if user_level < ADMIN_LEVEL {
            return Err(AppError::Unauthorized {
                level: user_level,
                detail: "You are not admin".to_string(),
            });
        }

        self.registry.add(creature).await;
        Ok(true)
    }
}
