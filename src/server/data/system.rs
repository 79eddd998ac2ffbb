use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select,
};

use crate::server::model::system::System;

pub struct SystemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all systems ordered by name
    pub async fn get_all(&self) -> Result<Vec<System>, DbErr> {
        self.fetch(entity::prelude::System::find()).await
    }

    /// Gets a single system by ID
    pub async fn get_by_id(&self, system_id: i32) -> Result<Option<System>, DbErr> {
        let systems = self
            .fetch(
                entity::prelude::System::find()
                    .filter(entity::system::Column::SystemId.eq(system_id)),
            )
            .await?;

        Ok(systems.into_iter().next())
    }

    /// Gets a system by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<System>, DbErr> {
        let systems = self
            .fetch(
                entity::prelude::System::find()
                    .filter(entity::system::Column::SystemName.eq(name)),
            )
            .await?;

        Ok(systems.into_iter().next())
    }

    /// Gets systems whose own ID or constellation ID equals `id`
    ///
    /// One call serves both a single-system lookup and a constellation listing, so the
    /// result may hold zero, one, or many systems.
    pub async fn get_by_id_or_constellation(&self, id: i32) -> Result<Vec<System>, DbErr> {
        self.fetch(
            entity::prelude::System::find().filter(
                Condition::any()
                    .add(entity::system::Column::SystemId.eq(id))
                    .add(entity::system::Column::ConstellationId.eq(id)),
            ),
        )
        .await
    }

    /// Gets the systems of a constellation ordered by name
    pub async fn get_by_constellation(&self, constellation_id: i32) -> Result<Vec<System>, DbErr> {
        self.fetch(
            entity::prelude::System::find()
                .filter(entity::system::Column::ConstellationId.eq(constellation_id)),
        )
        .await
    }

    /// Gets the systems of every constellation in a region ordered by name
    pub async fn get_by_region(&self, region_id: i32) -> Result<Vec<System>, DbErr> {
        self.fetch(
            entity::prelude::System::find()
                .filter(entity::constellation::Column::RegionId.eq(region_id)),
        )
        .await
    }

    /// Runs a system query joined with the owning constellation.
    ///
    /// Systems without a constellation row are dropped since their region is unknown.
    async fn fetch(&self, query: Select<entity::system::Entity>) -> Result<Vec<System>, DbErr> {
        let rows = query
            .find_also_related(entity::prelude::Constellation)
            .order_by_asc(entity::system::Column::SystemName)
            .order_by_asc(entity::system::Column::SystemId)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(system, constellation)| {
                constellation.map(|constellation| System::from_entity(system, constellation))
            })
            .collect())
    }
}
