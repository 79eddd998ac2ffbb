//! Domain models for killmails and the aggregates derived from them.
//!
//! Aggregate rows come straight out of raw SQL via `FromQueryResult`; totals that must
//! agree with their buckets are computed here rather than by the database.

use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::FromQueryResult;

use crate::{
    model::kill::{
        ConstellationKillCountDto, ConstellationKillsDto, HeatPointDto, HeatmapReportDto,
        KillStatsDto, KillmailDto, PeriodCountDto, RegionKillCountDto, RegionKillsDto,
        SystemKillCountDto, SystemKillsDto,
    },
    server::model::mode::Mode,
};

/// Level of the universe hierarchy a kill aggregate is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillScope {
    System,
    Constellation,
    Region,
}

impl KillScope {
    /// Resource name used in error messages, e.g. `failed to retrieve system kills`.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::System => "system kills",
            Self::Constellation => "constellation kills",
            Self::Region => "region kills",
        }
    }

    /// Resource name for the top-10 ranking of this scope.
    pub fn ranking_resource(&self) -> &'static str {
        match self {
            Self::System => "top systems",
            Self::Constellation => "top constellations",
            Self::Region => "top regions",
        }
    }
}

/// A single killmail with nullable columns replaced by zero values.
#[derive(Debug, Clone, PartialEq)]
pub struct Killmail {
    pub killmail_id: i32,
    pub killmail_hash: String,
    pub solar_system_id: i32,
    pub killmail_time: DateTime<Utc>,
    pub destroyed_value: f64,
    pub dropped_value: f64,
    pub total_value: f64,
    pub fitted_value: f64,
    pub victim_ship: i32,
    pub kill_ship: i32,
}

impl Killmail {
    /// Converts an entity model to a killmail domain model at the repository boundary.
    ///
    /// Missing numbers become `0` and a missing hash becomes an empty string.
    pub fn from_entity(entity: entity::killmail::Model) -> Self {
        Self {
            killmail_id: entity.killmail_id,
            killmail_hash: entity.killmail_hash.unwrap_or_default(),
            solar_system_id: entity.solar_system_id.unwrap_or_default(),
            killmail_time: entity.killmail_time,
            destroyed_value: entity.destroyed_value.unwrap_or_default(),
            dropped_value: entity.dropped_value.unwrap_or_default(),
            total_value: entity.total_value.unwrap_or_default(),
            fitted_value: entity.fitted_value.unwrap_or_default(),
            victim_ship: entity.victim_ship.unwrap_or_default(),
            kill_ship: entity.kill_ship.unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> KillmailDto {
        KillmailDto {
            killmail_id: self.killmail_id,
            killmail_hash: self.killmail_hash,
            solar_system_id: self.solar_system_id,
            killmail_time: self.killmail_time,
            destroyed_value: self.destroyed_value,
            dropped_value: self.dropped_value,
            total_value: self.total_value,
            fitted_value: self.fitted_value,
            victim_ship: self.victim_ship,
            kill_ship: self.kill_ship,
        }
    }
}

/// Kill activity for one truncated period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodCount {
    /// Start of the period in UTC.
    pub period: DateTime<Utc>,
    pub count: i64,
    pub destroyed_value: f64,
    pub dropped_value: f64,
}

impl PeriodCount {
    fn into_dto(self) -> PeriodCountDto {
        PeriodCountDto {
            period: self.period,
            count: self.count,
            destroyed_value: self.destroyed_value,
            dropped_value: self.dropped_value,
        }
    }
}

/// Time-bucketed kill activity for one system, constellation, or region.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeKills {
    pub scope: KillScope,
    pub id: i32,
    /// Empty when the id does not match any row of the scope's table.
    pub name: String,
    pub mode: Mode,
    /// Sum of `buckets[].count`.
    pub total: i64,
    /// Most recent period first.
    pub buckets: Vec<PeriodCount>,
}

impl ScopeKills {
    /// Assembles a summary, deriving `total` from the buckets.
    pub fn new(
        scope: KillScope,
        id: i32,
        name: String,
        mode: Mode,
        buckets: Vec<PeriodCount>,
    ) -> Self {
        let total = buckets.iter().map(|bucket| bucket.count).sum();

        Self {
            scope,
            id,
            name,
            mode,
            total,
            buckets,
        }
    }

    fn into_stats_dto(self) -> KillStatsDto {
        KillStatsDto {
            mode: self.mode.to_string(),
            total: self.total,
            buckets: self
                .buckets
                .into_iter()
                .map(PeriodCount::into_dto)
                .collect(),
        }
    }

    pub fn into_system_dto(self) -> SystemKillsDto {
        SystemKillsDto {
            system_id: self.id,
            system_name: self.name.clone(),
            kill_stats: self.into_stats_dto(),
        }
    }

    pub fn into_constellation_dto(self) -> ConstellationKillsDto {
        ConstellationKillsDto {
            constellation_id: self.id,
            constellation_name: self.name.clone(),
            kill_stats: self.into_stats_dto(),
        }
    }

    pub fn into_region_dto(self) -> RegionKillsDto {
        RegionKillsDto {
            region_id: self.id,
            region_name: self.name.clone(),
            kill_stats: self.into_stats_dto(),
        }
    }
}

/// Kill activity of one system within a heatmap window.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct HeatPoint {
    pub system_id: i32,
    pub system_name: String,
    pub kills: i64,
    pub destroyed_value: f64,
    pub dropped_value: f64,
}

impl HeatPoint {
    fn into_dto(self) -> HeatPointDto {
        HeatPointDto {
            system_id: self.system_id,
            system_name: self.system_name,
            kills: self.kills,
            destroyed_value: self.destroyed_value,
            dropped_value: self.dropped_value,
        }
    }
}

/// Every system of a region annotated with its kills in `[window_start, window_end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub mode: Mode,
    pub region_id: i32,
    pub region_name: String,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub total_kills: i64,
    /// Busiest system first.
    pub points: Vec<HeatPoint>,
}

impl Heatmap {
    /// Assembles a heatmap, deriving `total_kills` from the points.
    pub fn new(
        mode: Mode,
        region_id: i32,
        region_name: String,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
        points: Vec<HeatPoint>,
    ) -> Self {
        let total_kills = points.iter().map(|point| point.kills).sum();

        Self {
            mode,
            region_id,
            region_name,
            window_start,
            window_end,
            total_kills,
            points,
        }
    }

    pub fn into_dto(self) -> HeatmapReportDto {
        HeatmapReportDto {
            mode: self.mode.to_string(),
            region_id: self.region_id,
            region_name: self.region_name,
            window_start: self.window_start.to_rfc3339_opts(SecondsFormat::Secs, true),
            window_end: self.window_end.to_rfc3339_opts(SecondsFormat::Secs, true),
            total_kills: self.total_kills,
            buckets: self.points.into_iter().map(HeatPoint::into_dto).collect(),
        }
    }
}

/// One row of a top-10 ranking.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct KillCount {
    pub id: i32,
    pub name: String,
    pub kill_count: i64,
}

impl KillCount {
    pub fn into_region_dto(self) -> RegionKillCountDto {
        RegionKillCountDto {
            region_id: self.id,
            region_name: self.name,
            kill_count: self.kill_count,
        }
    }

    pub fn into_constellation_dto(self) -> ConstellationKillCountDto {
        ConstellationKillCountDto {
            constellation_id: self.id,
            constellation_name: self.name,
            kill_count: self.kill_count,
        }
    }

    pub fn into_system_dto(self) -> SystemKillCountDto {
        SystemKillCountDto {
            system_id: self.id,
            system_name: self.name,
            kill_count: self.kill_count,
        }
    }
}
