//! Killmail reads and time-windowed kill aggregates.
//!
//! Aggregates are issued as raw parameterized statements. Period truncation is the only
//! part that differs between PostgreSQL and SQLite and is chosen from the validated
//! `Mode`, never from request text. Weeks start on Monday on both backends.

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Statement,
};

use crate::server::model::{
    kill::{HeatPoint, KillCount, KillScope, Killmail, PeriodCount},
    mode::Mode,
};

/// Raw bucket row; `period` is an RFC 3339 string rendered by the database.
#[derive(Debug, FromQueryResult)]
struct PeriodCountRow {
    period: String,
    count: i64,
    destroyed_value: f64,
    dropped_value: f64,
}

impl PeriodCountRow {
    fn into_period_count(self) -> Result<PeriodCount, DbErr> {
        let period = DateTime::parse_from_rfc3339(&self.period)
            .map_err(|e| DbErr::Type(format!("invalid period '{}': {}", self.period, e)))?
            .with_timezone(&Utc);

        Ok(PeriodCount {
            period,
            count: self.count,
            destroyed_value: self.destroyed_value,
            dropped_value: self.dropped_value,
        })
    }
}

/// SQL expression truncating `k.killmail_time` to the start of its period.
fn period_expr(backend: DbBackend, mode: Mode) -> String {
    match backend {
        DbBackend::Sqlite => match mode {
            Mode::Hour => "strftime('%Y-%m-%dT%H:00:00Z', k.killmail_time)".to_string(),
            Mode::Day => "strftime('%Y-%m-%dT00:00:00Z', k.killmail_time)".to_string(),
            Mode::Week => {
                "strftime('%Y-%m-%dT00:00:00Z', k.killmail_time, 'weekday 0', '-6 days')"
                    .to_string()
            }
            Mode::Month => "strftime('%Y-%m-01T00:00:00Z', k.killmail_time)".to_string(),
        },
        _ => format!(
            "to_char(date_trunc('{}', k.killmail_time AT TIME ZONE 'UTC'), \
             'YYYY-MM-DD\"T\"HH24:MI:SS\"Z\"')",
            mode.as_str()
        ),
    }
}

/// Join and filter restricting killmails to one scope, bound to `$1`.
fn scope_filter(scope: KillScope) -> (&'static str, &'static str) {
    match scope {
        KillScope::System => ("", "k.solar_system_id = $1"),
        KillScope::Constellation => (
            "JOIN systems s ON s.system_id = k.solar_system_id",
            "s.constellation_id = $1",
        ),
        KillScope::Region => (
            "JOIN systems s ON s.system_id = k.solar_system_id \
             JOIN constellations c ON c.constellation_id = s.constellation_id",
            "c.region_id = $1",
        ),
    }
}

pub struct KillmailRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> KillmailRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent killmails of a system, newest first
    pub async fn get_recent_by_system(
        &self,
        system_id: i32,
        limit: u64,
    ) -> Result<Vec<Killmail>, DbErr> {
        let killmails = entity::prelude::Killmail::find()
            .filter(entity::killmail::Column::SolarSystemId.eq(system_id))
            .order_by_desc(entity::killmail::Column::KillmailTime)
            .order_by_desc(entity::killmail::Column::KillmailId)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(killmails.into_iter().map(Killmail::from_entity).collect())
    }

    /// Counts kills and sums ISK values per period for one scope, most recent period first
    ///
    /// Covers every killmail of the scope regardless of age; only the bucket size
    /// depends on `mode`.
    pub async fn get_period_counts(
        &self,
        scope: KillScope,
        id: i32,
        mode: Mode,
    ) -> Result<Vec<PeriodCount>, DbErr> {
        let backend = self.db.get_database_backend();
        let (join, filter) = scope_filter(scope);

        let sql = format!(
            "SELECT {period} AS period, \
                    COUNT(k.killmail_id) AS count, \
                    CAST(COALESCE(SUM(k.destroyed_value), 0) AS DOUBLE PRECISION) AS destroyed_value, \
                    CAST(COALESCE(SUM(k.dropped_value), 0) AS DOUBLE PRECISION) AS dropped_value \
             FROM killmails k {join} \
             WHERE {filter} \
             GROUP BY period \
             ORDER BY period DESC",
            period = period_expr(backend, mode),
        );

        let rows = PeriodCountRow::find_by_statement(Statement::from_sql_and_values(
            backend,
            sql,
            [id.into()],
        ))
        .all(self.db)
        .await?;

        rows.into_iter()
            .map(PeriodCountRow::into_period_count)
            .collect()
    }

    /// Annotates every system of a region with its kills in `[start, end]`
    ///
    /// Systems without kills in the window are included with zero counts. Ordered by
    /// kill count descending, then system ID.
    pub async fn get_region_heatmap(
        &self,
        region_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<HeatPoint>, DbErr> {
        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            "SELECT s.system_id AS system_id, \
                    s.system_name AS system_name, \
                    COUNT(k.killmail_id) AS kills, \
                    CAST(COALESCE(SUM(k.destroyed_value), 0) AS DOUBLE PRECISION) AS destroyed_value, \
                    CAST(COALESCE(SUM(k.dropped_value), 0) AS DOUBLE PRECISION) AS dropped_value \
             FROM systems s \
             JOIN constellations c ON c.constellation_id = s.constellation_id \
             LEFT JOIN killmails k ON k.solar_system_id = s.system_id \
                  AND k.killmail_time >= $2 \
                  AND k.killmail_time <= $3 \
             WHERE c.region_id = $1 \
             GROUP BY s.system_id, s.system_name \
             ORDER BY kills DESC, s.system_id ASC",
            [region_id.into(), start.into(), end.into()],
        );

        HeatPoint::find_by_statement(stmt).all(self.db).await
    }

    /// Ranks a scope by kills in `(start, end]`, busiest first, ties by ascending ID
    pub async fn get_top(
        &self,
        scope: KillScope,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<KillCount>, DbErr> {
        let (select, joins, group) = match scope {
            KillScope::System => (
                "s.system_id AS id, s.system_name AS name",
                "JOIN systems s ON s.system_id = k.solar_system_id",
                "s.system_id, s.system_name",
            ),
            KillScope::Constellation => (
                "c.constellation_id AS id, c.constellation_name AS name",
                "JOIN systems s ON s.system_id = k.solar_system_id \
                 JOIN constellations c ON c.constellation_id = s.constellation_id",
                "c.constellation_id, c.constellation_name",
            ),
            KillScope::Region => (
                "r.region_id AS id, r.region_name AS name",
                "JOIN systems s ON s.system_id = k.solar_system_id \
                 JOIN constellations c ON c.constellation_id = s.constellation_id \
                 JOIN regions r ON r.region_id = c.region_id",
                "r.region_id, r.region_name",
            ),
        };

        let sql = format!(
            "SELECT {select}, COUNT(k.killmail_id) AS kill_count \
             FROM killmails k {joins} \
             WHERE k.killmail_time > $1 AND k.killmail_time <= $2 \
             GROUP BY {group} \
             ORDER BY kill_count DESC, id ASC \
             LIMIT $3"
        );

        let stmt = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [start.into(), end.into(), (limit as i64).into()],
        );

        KillCount::find_by_statement(stmt).all(self.db).await
    }
}
