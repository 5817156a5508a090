use crate::models::{VisitLedger, VisitSnapshot};
use chrono::NaiveDate;

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn record_visit_at(ledger: &mut VisitLedger, day: &str, path: &str) -> VisitSnapshot {
    let record = ledger.days.entry(day.to_string()).or_default();
    let views = record.pages.entry(path.to_string()).or_default();
    *views = views.saturating_add(1);
    let page_views = *views;
    record.total = record.total.saturating_add(1);

    VisitSnapshot {
        page_views,
        total_views: all_time_views(ledger),
    }
}

pub fn snapshot_at(ledger: &VisitLedger, day: &str, path: &str) -> VisitSnapshot {
    let page_views = ledger
        .days
        .get(day)
        .and_then(|record| record.pages.get(path))
        .copied()
        .unwrap_or(0);

    VisitSnapshot {
        page_views,
        total_views: all_time_views(ledger),
    }
}

pub fn all_time_views(ledger: &VisitLedger) -> u64 {
    ledger
        .days
        .values()
        .fold(0, |sum, record| sum.saturating_add(record.total))
}
