use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::station::Station;

pub struct StationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all stations ordered by name
    pub async fn get_all(&self) -> Result<Vec<Station>, DbErr> {
        let stations = entity::prelude::Station::find()
            .order_by_asc(entity::station::Column::StationName)
            .order_by_asc(entity::station::Column::StationId)
            .all(self.db)
            .await?;

        Ok(stations.into_iter().map(Station::from_entity).collect())
    }

    pub async fn get_by_id(&self, station_id: i32) -> Result<Option<Station>, DbErr> {
        let station = entity::prelude::Station::find_by_id(station_id)
            .one(self.db)
            .await?;

        Ok(station.map(Station::from_entity))
    }

    /// Gets a station by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Station>, DbErr> {
        let station = entity::prelude::Station::find()
            .filter(entity::station::Column::StationName.eq(name))
            .order_by_asc(entity::station::Column::StationId)
            .one(self.db)
            .await?;

        Ok(station.map(Station::from_entity))
    }

    /// Gets the stations in a system ordered by name
    pub async fn get_by_system(&self, system_id: i32) -> Result<Vec<Station>, DbErr> {
        let stations = entity::prelude::Station::find()
            .filter(entity::station::Column::SystemId.eq(system_id))
            .order_by_asc(entity::station::Column::StationName)
            .order_by_asc(entity::station::Column::StationId)
            .all(self.db)
            .await?;

        Ok(stations.into_iter().map(Station::from_entity).collect())
    }
}
