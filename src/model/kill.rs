use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct KillmailDto {
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

/// One truncated period of kill activity.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct PeriodCountDto {
    /// Start of the period in UTC.
    pub period: DateTime<Utc>,
    pub count: i64,
    pub destroyed_value: f64,
    pub dropped_value: f64,
}

/// Kill buckets shared by every summary scope. `total` is the sum of `buckets[].count`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct KillStatsDto {
    pub mode: String,
    pub total: i64,
    pub buckets: Vec<PeriodCountDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SystemKillsDto {
    pub system_id: i32,
    pub system_name: String,
    #[serde(flatten)]
    pub kill_stats: KillStatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ConstellationKillsDto {
    pub constellation_id: i32,
    pub constellation_name: String,
    #[serde(flatten)]
    pub kill_stats: KillStatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegionKillsDto {
    pub region_id: i32,
    pub region_name: String,
    #[serde(flatten)]
    pub kill_stats: KillStatsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HeatPointDto {
    pub system_id: i32,
    pub system_name: String,
    pub kills: i64,
    pub destroyed_value: f64,
    pub dropped_value: f64,
}

/// Per-system activity in a region over a sliding window ending at `window_end`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct HeatmapReportDto {
    pub mode: String,
    pub region_id: i32,
    pub region_name: String,
    /// RFC 3339, second precision.
    pub window_start: String,
    /// RFC 3339, second precision.
    pub window_end: String,
    pub total_kills: i64,
    pub buckets: Vec<HeatPointDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegionKillCountDto {
    pub region_id: i32,
    pub region_name: String,
    pub kill_count: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ConstellationKillCountDto {
    pub constellation_id: i32,
    pub constellation_name: String,
    pub kill_count: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct SystemKillCountDto {
    pub system_id: i32,
    pub system_name: String,
    pub kill_count: i64,
}
