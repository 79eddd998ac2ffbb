//! Killmail factory for creating test killmail entities.
//!
//! Killmails are the only time-based rows in the schema, so most aggregate tests
//! pin `killmail_time` explicitly relative to a fixed "now".

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test killmails with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let kill = KillmailFactory::new(&db, system.system_id)
///     .killmail_time(now - Duration::minutes(5))
///     .values(1_000_000.0, 250_000.0)
///     .build()
///     .await?;
/// ```
pub struct KillmailFactory<'a> {
    db: &'a DatabaseConnection,
    killmail_id: i32,
    killmail_hash: Option<String>,
    solar_system_id: Option<i32>,
    killmail_time: DateTime<Utc>,
    destroyed_value: Option<f64>,
    dropped_value: Option<f64>,
    total_value: Option<f64>,
    fitted_value: Option<f64>,
    victim_ship: Option<i32>,
    kill_ship: Option<i32>,
}

impl<'a> KillmailFactory<'a> {
    /// Creates a new KillmailFactory with default values.
    ///
    /// Defaults:
    /// - killmail_id: auto-incremented
    /// - killmail_hash: `"hash{id}"`
    /// - killmail_time: now
    /// - destroyed_value: `100.0`, dropped_value: `50.0`
    /// - total_value: `150.0`, fitted_value: `120.0`
    /// - victim_ship: `587` (Rifter), kill_ship: `24690` (Drake)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `system_id` - System the kill happened in
    pub fn new(db: &'a DatabaseConnection, system_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            killmail_id: id,
            killmail_hash: Some(format!("hash{}", id)),
            solar_system_id: Some(system_id),
            killmail_time: Utc::now(),
            destroyed_value: Some(100.0),
            dropped_value: Some(50.0),
            total_value: Some(150.0),
            fitted_value: Some(120.0),
            victim_ship: Some(587),
            kill_ship: Some(24690),
        }
    }

    /// Sets the time of the kill.
    pub fn killmail_time(mut self, killmail_time: DateTime<Utc>) -> Self {
        self.killmail_time = killmail_time;
        self
    }

    /// Sets the destroyed and dropped ISK values.
    pub fn values(mut self, destroyed_value: f64, dropped_value: f64) -> Self {
        self.destroyed_value = Some(destroyed_value);
        self.dropped_value = Some(dropped_value);
        self
    }

    /// Clears every nullable column, mimicking a partially ingested killmail.
    pub fn without_details(mut self) -> Self {
        self.killmail_hash = None;
        self.destroyed_value = None;
        self.dropped_value = None;
        self.total_value = None;
        self.fitted_value = None;
        self.victim_ship = None;
        self.kill_ship = None;
        self
    }

    /// Builds and inserts the killmail entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::killmail::Model)` - Created killmail entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::killmail::Model, DbErr> {
        entity::killmail::ActiveModel {
            killmail_id: ActiveValue::Set(self.killmail_id),
            killmail_hash: ActiveValue::Set(self.killmail_hash),
            solar_system_id: ActiveValue::Set(self.solar_system_id),
            killmail_time: ActiveValue::Set(self.killmail_time),
            destroyed_value: ActiveValue::Set(self.destroyed_value),
            dropped_value: ActiveValue::Set(self.dropped_value),
            total_value: ActiveValue::Set(self.total_value),
            fitted_value: ActiveValue::Set(self.fitted_value),
            victim_ship: ActiveValue::Set(self.victim_ship),
            kill_ship: ActiveValue::Set(self.kill_ship),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a killmail in the given system at the given time with default values.
pub async fn create_killmail(
    db: &DatabaseConnection,
    system_id: i32,
    killmail_time: DateTime<Utc>,
) -> Result<entity::killmail::Model, DbErr> {
    KillmailFactory::new(db, system_id)
        .killmail_time(killmail_time)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::create_system_with_dependencies;

    #[tokio::test]
    async fn creates_killmail_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .with_killmail_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, system) = create_system_with_dependencies(db).await?;
        let kill = KillmailFactory::new(db, system.system_id).build().await?;

        assert_eq!(kill.solar_system_id, Some(system.system_id));
        assert_eq!(kill.destroyed_value, Some(100.0));
        assert!(kill.killmail_hash.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn creates_killmail_without_details() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .with_killmail_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, system) = create_system_with_dependencies(db).await?;
        let kill = KillmailFactory::new(db, system.system_id)
            .without_details()
            .build()
            .await?;

        assert!(kill.killmail_hash.is_none());
        assert!(kill.total_value.is_none());
        assert!(kill.kill_ship.is_none());

        Ok(())
    }
}
