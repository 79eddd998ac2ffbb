use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

use crate::server::model::stargate::Stargate;

pub struct StargateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StargateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every stargate ordered by name
    pub async fn get_all(&self) -> Result<Vec<Stargate>, DbErr> {
        self.fetch(entity::prelude::Stargate::find()).await
    }

    /// Gets the stargates located in a system
    pub async fn get_by_system(&self, system_id: i32) -> Result<Vec<Stargate>, DbErr> {
        self.fetch(
            entity::prelude::Stargate::find()
                .filter(entity::stargate::Column::SystemId.eq(system_id)),
        )
        .await
    }

    /// Gets the stargates located in any system of a constellation
    pub async fn get_by_constellation(
        &self,
        constellation_id: i32,
    ) -> Result<Vec<Stargate>, DbErr> {
        self.fetch(
            entity::prelude::Stargate::find()
                .join(JoinType::InnerJoin, entity::stargate::Relation::System.def())
                .filter(entity::system::Column::ConstellationId.eq(constellation_id)),
        )
        .await
    }

    /// Gets the stargates located in any system of a region
    pub async fn get_by_region(&self, region_id: i32) -> Result<Vec<Stargate>, DbErr> {
        self.fetch(
            entity::prelude::Stargate::find()
                .join(JoinType::InnerJoin, entity::stargate::Relation::System.def())
                .join(
                    JoinType::InnerJoin,
                    entity::system::Relation::Constellation.def(),
                )
                .filter(entity::constellation::Column::RegionId.eq(region_id)),
        )
        .await
    }

    async fn fetch(
        &self,
        query: Select<entity::stargate::Entity>,
    ) -> Result<Vec<Stargate>, DbErr> {
        let stargates = query
            .order_by_asc(entity::stargate::Column::StargateName)
            .order_by_asc(entity::stargate::Column::StargateId)
            .all(self.db)
            .await?;

        Ok(stargates.into_iter().map(Stargate::from_entity).collect())
    }
}
