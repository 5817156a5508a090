use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayRecord {
    pub total: u64,
    pub pages: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VisitLedger {
    pub days: BTreeMap<String, DayRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitSnapshot {
    pub page_views: u64,
    pub total_views: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub date: String,
    pub path: String,
    pub page_views: u64,
    pub total_views: u64,
}
