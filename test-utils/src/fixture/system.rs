//! Fixture for solar system test data.

use entity::system;

/// Default test system ID (Jita).
pub const DEFAULT_SYSTEM_ID: i32 = 30_000_142;

/// Default test constellation ID (Kimotoro).
pub const DEFAULT_CONSTELLATION_ID: i32 = 20_000_020;

/// Creates a system entity model with default values.
pub fn entity() -> system::Model {
    entity_builder().build()
}

/// Creates a customizable system entity builder.
pub fn entity_builder() -> SystemEntityBuilder {
    SystemEntityBuilder::default()
}

/// Builder for system entity models.
pub struct SystemEntityBuilder {
    model: system::Model,
}

impl Default for SystemEntityBuilder {
    fn default() -> Self {
        Self {
            model: system::Model {
                system_id: DEFAULT_SYSTEM_ID,
                system_name: "Jita".to_string(),
                security_status: 0.946,
                security_class: Some("B".to_string()),
                x_pos: -1.29e17,
                y_pos: 6.08e16,
                z_pos: 1.17e17,
                constellation_id: DEFAULT_CONSTELLATION_ID,
                spectral_class: Some("K7 V".to_string()),
            },
        }
    }
}

impl SystemEntityBuilder {
    /// Sets the system ID.
    pub fn system_id(mut self, system_id: i32) -> Self {
        self.model.system_id = system_id;
        self
    }

    /// Clears the optional classification columns.
    pub fn unclassified(mut self) -> Self {
        self.model.security_class = None;
        self.model.spectral_class = None;
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> system::Model {
        self.model
    }
}
