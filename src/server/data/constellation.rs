use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::constellation::Constellation;

pub struct ConstellationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConstellationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all constellations ordered by name
    pub async fn get_all(&self) -> Result<Vec<Constellation>, DbErr> {
        let constellations = entity::prelude::Constellation::find()
            .order_by_asc(entity::constellation::Column::ConstellationName)
            .all(self.db)
            .await?;

        Ok(constellations
            .into_iter()
            .map(Constellation::from_entity)
            .collect())
    }

    /// Gets a single constellation by ID
    pub async fn get_by_id(&self, constellation_id: i32) -> Result<Option<Constellation>, DbErr> {
        let constellation = entity::prelude::Constellation::find_by_id(constellation_id)
            .one(self.db)
            .await?;

        Ok(constellation.map(Constellation::from_entity))
    }

    /// Gets a constellation by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Constellation>, DbErr> {
        let constellation = entity::prelude::Constellation::find()
            .filter(entity::constellation::Column::ConstellationName.eq(name))
            .order_by_asc(entity::constellation::Column::ConstellationId)
            .one(self.db)
            .await?;

        Ok(constellation.map(Constellation::from_entity))
    }

    /// Gets constellations whose own ID or region ID equals `id`
    ///
    /// One call serves both a single-constellation lookup and a region listing, so the
    /// result may hold zero, one, or many constellations.
    pub async fn get_by_id_or_region(&self, id: i32) -> Result<Vec<Constellation>, DbErr> {
        let constellations = entity::prelude::Constellation::find()
            .filter(
                Condition::any()
                    .add(entity::constellation::Column::ConstellationId.eq(id))
                    .add(entity::constellation::Column::RegionId.eq(id)),
            )
            .order_by_asc(entity::constellation::Column::ConstellationName)
            .all(self.db)
            .await?;

        Ok(constellations
            .into_iter()
            .map(Constellation::from_entity)
            .collect())
    }

    /// Gets the constellations of a region ordered by name
    pub async fn get_by_region(&self, region_id: i32) -> Result<Vec<Constellation>, DbErr> {
        let constellations = entity::prelude::Constellation::find()
            .filter(entity::constellation::Column::RegionId.eq(region_id))
            .order_by_asc(entity::constellation::Column::ConstellationName)
            .all(self.db)
            .await?;

        Ok(constellations
            .into_iter()
            .map(Constellation::from_entity)
            .collect())
    }
}
