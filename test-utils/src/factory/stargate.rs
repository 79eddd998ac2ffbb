//! Stargate factory for creating test stargate entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a stargate in one system pointing at another.
pub struct StargateFactory<'a> {
    db: &'a DatabaseConnection,
    stargate_id: i32,
    name: String,
    system_id: i32,
    destination_stargate_id: i32,
    destination_system_id: i32,
}

impl<'a> StargateFactory<'a> {
    /// Creates a new StargateFactory with default values.
    ///
    /// Defaults:
    /// - stargate_id: auto-incremented
    /// - name: `"Stargate ({destination_system_id})"`
    /// - destination_stargate_id: `0`
    pub fn new(db: &'a DatabaseConnection, system_id: i32, destination_system_id: i32) -> Self {
        Self {
            db,
            stargate_id: next_id(),
            name: format!("Stargate ({})", destination_system_id),
            system_id,
            destination_stargate_id: 0,
            destination_system_id,
        }
    }

    /// Sets the stargate name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stargate on the other end of the jump.
    pub fn destination_stargate_id(mut self, destination_stargate_id: i32) -> Self {
        self.destination_stargate_id = destination_stargate_id;
        self
    }

    /// Builds and inserts the stargate entity into the database.
    pub async fn build(self) -> Result<entity::stargate::Model, DbErr> {
        entity::stargate::ActiveModel {
            stargate_id: ActiveValue::Set(self.stargate_id),
            stargate_name: ActiveValue::Set(self.name),
            system_id: ActiveValue::Set(self.system_id),
            destination_stargate_id: ActiveValue::Set(self.destination_stargate_id),
            destination_system_id: ActiveValue::Set(self.destination_system_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a stargate from `system_id` to `destination_system_id` with default values.
pub async fn create_stargate(
    db: &DatabaseConnection,
    system_id: i32,
    destination_system_id: i32,
) -> Result<entity::stargate::Model, DbErr> {
    StargateFactory::new(db, system_id, destination_system_id)
        .build()
        .await
}
