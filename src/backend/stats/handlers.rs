/**
 * Admin Statistics Handler
 *
 * Serves GET /api/admin/stats: per-collection totals, counts of records
 * created in the last seven days, and a seven-day per-day timeseries
 * (oldest day first, ending today). Everything is computed from the
 * `createdAt` timestamps of one document load; nothing is cached.
 */

use axum::{extract::State, response::Json};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::backend::collections::Record;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::store::document::Document;

/// Days covered by the `recent` counts and the timeseries
const WINDOW_DAYS: i64 = 7;

/// One count per collection
#[derive(Debug, Serialize, PartialEq)]
pub struct CollectionCounts {
    pub projects: usize,
    pub codes: usize,
    pub users: usize,
}

/// Records created on one calendar day
#[derive(Debug, Serialize)]
pub struct DayBucket {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    pub projects: usize,
    pub codes: usize,
    pub users: usize,
}

/// Response for GET /api/admin/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// All-time totals
    pub totals: CollectionCounts,
    /// Records created in the last seven days
    pub recent: CollectionCounts,
    /// Per-day creation counts, oldest day first, ending today
    pub timeseries: Vec<DayBucket>,
}

fn count_since<T: Record>(seq: &[T], since: DateTime<Utc>) -> usize {
    seq.iter().filter(|r| r.created_at() >= since).count()
}

fn count_on<T: Record>(seq: &[T], day: NaiveDate) -> usize {
    seq.iter()
        .filter(|r| r.created_at().date_naive() == day)
        .count()
}

fn build_stats(doc: &Document, now: DateTime<Utc>) -> StatsResponse {
    let since = now - Duration::days(WINDOW_DAYS);

    let timeseries = (0..WINDOW_DAYS)
        .map(|offset| {
            let date = (now - Duration::days(WINDOW_DAYS - 1 - offset)).date_naive();
            DayBucket {
                date,
                projects: count_on(&doc.projects, date),
                codes: count_on(&doc.codes, date),
                users: count_on(&doc.users, date),
            }
        })
        .collect();

    StatsResponse {
        totals: CollectionCounts {
            projects: doc.projects.len(),
            codes: doc.codes.len(),
            users: doc.users.len(),
        },
        recent: CollectionCounts {
            projects: count_since(&doc.projects, since),
            codes: count_since(&doc.codes, since),
            users: count_since(&doc.users, since),
        },
        timeseries,
    }
}

/// Admin statistics (admin)
pub async fn admin_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state
        .coordinator
        .read(|doc| build_stats(doc, Utc::now()))
        .await?;
    Ok(Json(stats))
}
