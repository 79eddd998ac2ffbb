//! Fixture for killmail test data.
//!
//! Provides in-memory killmail entity models without database insertion.

use chrono::{DateTime, TimeZone, Utc};
use entity::killmail;

/// Default test killmail ID.
pub const DEFAULT_KILLMAIL_ID: i32 = 120_000_001;

/// Default test system ID (Jita).
pub const DEFAULT_SYSTEM_ID: i32 = 30_000_142;

/// Default killmail time, a fixed instant so assertions stay stable.
pub fn default_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 30, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a fully populated killmail entity model with default values.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::killmail::entity();
/// assert_eq!(entity.killmail_id, 120_000_001);
/// ```
pub fn entity() -> killmail::Model {
    entity_builder().build()
}

/// Creates a customizable killmail entity builder.
pub fn entity_builder() -> KillmailEntityBuilder {
    KillmailEntityBuilder::default()
}

/// Builder for killmail entity models.
pub struct KillmailEntityBuilder {
    model: killmail::Model,
}

impl Default for KillmailEntityBuilder {
    fn default() -> Self {
        Self {
            model: killmail::Model {
                killmail_id: DEFAULT_KILLMAIL_ID,
                killmail_hash: Some("0a1b2c3d".to_string()),
                solar_system_id: Some(DEFAULT_SYSTEM_ID),
                killmail_time: default_time(),
                destroyed_value: Some(1_500_000.0),
                dropped_value: Some(500_000.0),
                total_value: Some(2_000_000.0),
                fitted_value: Some(1_800_000.0),
                victim_ship: Some(587),
                kill_ship: Some(24690),
            },
        }
    }
}

impl KillmailEntityBuilder {
    /// Sets the killmail ID.
    pub fn killmail_id(mut self, killmail_id: i32) -> Self {
        self.model.killmail_id = killmail_id;
        self
    }

    /// Sets the system the kill happened in.
    pub fn solar_system_id(mut self, solar_system_id: Option<i32>) -> Self {
        self.model.solar_system_id = solar_system_id;
        self
    }

    /// Clears the hash and every value and ship column.
    pub fn without_details(mut self) -> Self {
        self.model.killmail_hash = None;
        self.model.destroyed_value = None;
        self.model.dropped_value = None;
        self.model.total_value = None;
        self.model.fitted_value = None;
        self.model.victim_ship = None;
        self.model.kill_ship = None;
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> killmail::Model {
        self.model
    }
}
