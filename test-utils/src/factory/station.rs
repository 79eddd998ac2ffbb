//! Station factory for creating test station entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stations with customizable fields.
pub struct StationFactory<'a> {
    db: &'a DatabaseConnection,
    station_id: i32,
    name: String,
    system_id: i32,
}

impl<'a> StationFactory<'a> {
    /// Creates a new StationFactory with an auto-incremented ID and `"Station {id}"` name.
    pub fn new(db: &'a DatabaseConnection, system_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            station_id: id,
            name: format!("Station {}", id),
            system_id,
        }
    }

    /// Sets the station ID.
    pub fn station_id(mut self, station_id: i32) -> Self {
        self.station_id = station_id;
        self
    }

    /// Sets the station name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the station entity into the database.
    pub async fn build(self) -> Result<entity::station::Model, DbErr> {
        entity::station::ActiveModel {
            station_id: ActiveValue::Set(self.station_id),
            station_name: ActiveValue::Set(self.name),
            system_id: ActiveValue::Set(self.system_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a station with default values inside the given system.
pub async fn create_station(
    db: &DatabaseConnection,
    system_id: i32,
) -> Result<entity::station::Model, DbErr> {
    StationFactory::new(db, system_id).build().await
}
