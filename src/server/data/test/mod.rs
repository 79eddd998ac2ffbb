use crate::server::{
    data::{
        constellation::ConstellationRepository, killmail::KillmailRepository,
        planet::PlanetRepository, region::RegionRepository, report::ReportRepository,
        stargate::StargateRepository, station::StationRepository, system::SystemRepository,
    },
    model::{kill::KillScope, mode::Mode},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod killmail;
mod system;

/// Fixed "now" shared by the killmail tests so windows do not drift.
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
}
