//! Kill analytics: per-scope summaries, regional heatmaps, rankings, and recent kills.
//!
//! Every operation taking a mode validates it before touching the database, so an
//! unsupported mode is always a client error.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        constellation::ConstellationRepository, killmail::KillmailRepository,
        region::RegionRepository, system::SystemRepository,
    },
    error::AppError,
    model::{
        kill::{Heatmap, KillCount, KillScope, Killmail, ScopeKills},
        mode::Mode,
    },
};

/// Number of killmails returned by the recent activity feed.
pub const RECENT_KILLMAIL_LIMIT: u64 = 15;

/// Number of rows in each top ranking.
pub const RANKING_LIMIT: u64 = 10;

pub struct KillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KillService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the time-bucketed kill summary of a system, constellation, or region.
    ///
    /// An unknown scope ID is not an error: the summary comes back with an empty name,
    /// no buckets, and a total of zero.
    ///
    /// # Arguments
    /// - `scope` - Hierarchy level `id` refers to
    /// - `id` - System, constellation, or region ID
    /// - `mode` - Raw mode token selecting the bucket size
    ///
    /// # Returns
    /// - `Ok(ScopeKills)` - Summary whose `total` equals the sum of its bucket counts
    /// - `Err(AppError::InvalidMode)` - Unsupported mode, no query executed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_summary(
        &self,
        scope: KillScope,
        id: i32,
        mode: &str,
    ) -> Result<ScopeKills, AppError> {
        let mode: Mode = mode.parse()?;

        let name = self.scope_name(scope, id).await?.unwrap_or_default();
        let buckets = KillmailRepository::new(self.db)
            .get_period_counts(scope, id, mode)
            .await?;

        Ok(ScopeKills::new(scope, id, name, mode, buckets))
    }

    /// Builds the heatmap of a region for the window of `mode` ending at `now`.
    ///
    /// Every system of the region is present, including those without kills. An unknown
    /// region yields an empty name and no points.
    ///
    /// # Returns
    /// - `Ok(Heatmap)` - Points ordered by kills descending with the window bounds used
    /// - `Err(AppError::InvalidMode)` - Unsupported mode, no query executed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_region_heatmap(
        &self,
        region_id: i32,
        mode: &str,
        now: DateTime<Utc>,
    ) -> Result<Heatmap, AppError> {
        let mode: Mode = mode.parse()?;
        let window_start = mode.window_start(now);

        tracing::debug!(
            "Building heatmap for region {} over the last {}",
            region_id,
            mode.interval()
        );

        let region_name = RegionRepository::new(self.db)
            .get_by_id(region_id)
            .await?
            .map(|region| region.name)
            .unwrap_or_default();
        let points = KillmailRepository::new(self.db)
            .get_region_heatmap(region_id, window_start, now)
            .await?;

        Ok(Heatmap::new(
            mode,
            region_id,
            region_name,
            window_start,
            now,
            points,
        ))
    }

    /// Ranks the ten busiest systems, constellations, or regions over the window of
    /// `mode` ending at `now`.
    ///
    /// # Returns
    /// - `Ok(Vec<KillCount>)` - At most ten rows, busiest first, ties by ascending ID
    /// - `Err(AppError::InvalidMode)` - Unsupported mode, no query executed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_top(
        &self,
        scope: KillScope,
        mode: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<KillCount>, AppError> {
        let mode: Mode = mode.parse()?;

        tracing::debug!("Ranking {:?} kills over the last {}", scope, mode.interval());

        Ok(KillmailRepository::new(self.db)
            .get_top(scope, mode.window_start(now), now, RANKING_LIMIT)
            .await?)
    }

    /// Gets the latest killmails of a system, newest first
    pub async fn get_recent_by_system(&self, system_id: i32) -> Result<Vec<Killmail>, AppError> {
        Ok(KillmailRepository::new(self.db)
            .get_recent_by_system(system_id, RECENT_KILLMAIL_LIMIT)
            .await?)
    }

    async fn scope_name(&self, scope: KillScope, id: i32) -> Result<Option<String>, AppError> {
        let name = match scope {
            KillScope::System => SystemRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|system| system.name),
            KillScope::Constellation => ConstellationRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|constellation| constellation.name),
            KillScope::Region => RegionRepository::new(self.db)
                .get_by_id(id)
                .await?
                .map(|region| region.name),
        };

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use sea_orm::DbErr;
    use test_utils::{builder::TestBuilder, factory};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    /// Tests that an invalid mode is rejected before any query.
    ///
    /// The database has no tables, so any executed query would fail with a database
    /// error instead of the mode error.
    ///
    /// Expected: Err(AppError::InvalidMode) for every operation
    #[tokio::test]
    async fn rejects_invalid_mode_without_querying() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let service = KillService::new(db);

        let summary = service.get_summary(KillScope::System, 1, "bogus").await;
        assert!(matches!(summary, Err(AppError::InvalidMode(_))));

        let heatmap = service.get_region_heatmap(1, "year", fixed_now()).await;
        assert!(matches!(heatmap, Err(AppError::InvalidMode(_))));

        for scope in [KillScope::System, KillScope::Constellation, KillScope::Region] {
            let top = service.get_top(scope, "HOUR", fixed_now()).await;
            assert!(matches!(top, Err(AppError::InvalidMode(_))));
        }
    }

    /// Tests the summary of a system with kills over several days.
    ///
    /// Expected: Ok(ScopeKills) whose total equals the sum of bucket counts
    #[tokio::test]
    async fn summary_total_matches_buckets() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .with_killmail_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
        for hours in [0, 1, 26, 50, 51, 52] {
            factory::create_killmail(db, jita.system_id, fixed_now() - Duration::hours(hours))
                .await?;
        }

        let service = KillService::new(db);

        for mode in ["hour", "day", "week", "month"] {
            let summary = service
                .get_summary(KillScope::System, jita.system_id, mode)
                .await
                .unwrap();

            assert_eq!(summary.name, jita.system_name);
            assert_eq!(summary.mode.as_str(), mode);
            assert_eq!(summary.total, 6);
            assert_eq!(
                summary.total,
                summary.buckets.iter().map(|b| b.count).sum::<i64>()
            );
        }

        Ok(())
    }

    /// Tests summaries for IDs that match nothing.
    ///
    /// Expected: Ok(ScopeKills) with empty name, zero total, and no buckets
    #[tokio::test]
    async fn unknown_scope_yields_empty_summary() {
        let test = TestBuilder::new()
            .with_universe_tables()
            .with_killmail_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = KillService::new(db);

        for scope in [KillScope::System, KillScope::Constellation, KillScope::Region] {
            let summary = service.get_summary(scope, 999999999, "week").await.unwrap();

            assert_eq!(summary.name, "");
            assert_eq!(summary.total, 0);
            assert!(summary.buckets.is_empty());
        }
    }

    /// Tests that the heatmap reports the window it used.
    ///
    /// Expected: Ok(Heatmap) spanning one mode interval ending at `now`
    #[tokio::test]
    async fn heatmap_reports_window_bounds() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .with_killmail_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (forge, _, jita) = factory::helpers::create_system_with_dependencies(db).await?;
        factory::create_killmail(db, jita.system_id, fixed_now() - Duration::minutes(10)).await?;
        factory::create_killmail(db, jita.system_id, fixed_now() - Duration::hours(3)).await?;

        let heatmap = KillService::new(db)
            .get_region_heatmap(forge.region_id, "hour", fixed_now())
            .await
            .unwrap();

        assert_eq!(heatmap.region_name, forge.region_name);
        assert_eq!(heatmap.window_end, fixed_now());
        assert_eq!(heatmap.window_start, fixed_now() - Duration::hours(1));
        assert_eq!(heatmap.total_kills, 1);
        assert_eq!(heatmap.points.len(), 1);

        Ok(())
    }

    /// Tests that rankings never exceed ten rows.
    ///
    /// Expected: Ok(Vec) of ten rows in non-increasing kill order
    #[tokio::test]
    async fn ranking_is_capped_at_ten() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .with_killmail_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        for kills in 1..=12 {
            let (_, _, system) = factory::helpers::create_system_with_dependencies(db).await?;
            for _ in 0..kills {
                factory::create_killmail(db, system.system_id, fixed_now() - Duration::hours(2))
                    .await?;
            }
        }

        let ranking = KillService::new(db)
            .get_top(KillScope::System, "day", fixed_now())
            .await
            .unwrap();

        assert_eq!(ranking.len(), 10);
        assert_eq!(ranking[0].kill_count, 12);
        assert!(ranking
            .windows(2)
            .all(|pair| pair[0].kill_count >= pair[1].kill_count));

        Ok(())
    }
}
