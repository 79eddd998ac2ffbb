use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::region::Region;

pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all regions ordered by name
    pub async fn get_all(&self) -> Result<Vec<Region>, DbErr> {
        let regions = entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::RegionName)
            .all(self.db)
            .await?;

        Ok(regions.into_iter().map(Region::from_entity).collect())
    }

    /// Gets a region by ID
    pub async fn get_by_id(&self, region_id: i32) -> Result<Option<Region>, DbErr> {
        let region = entity::prelude::Region::find_by_id(region_id)
            .one(self.db)
            .await?;

        Ok(region.map(Region::from_entity))
    }

    /// Gets a region by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Region>, DbErr> {
        let region = entity::prelude::Region::find()
            .filter(entity::region::Column::RegionName.eq(name))
            .order_by_asc(entity::region::Column::RegionId)
            .one(self.db)
            .await?;

        Ok(region.map(Region::from_entity))
    }
}
