use crate::analytics::ActivitySeries;
use crate::content::DayContent;
use crate::trackers::FormField;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category under which every tracker journal stores its days.
pub const TRACKER_CATEGORY: &str = "tracker";

/// Identity and timestamps shared by every journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntryMeta {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default, alias = "created_at", alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, alias = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

/// One logged record of a tracker: the shared metadata plus the tracker's own fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry<F> {
    #[serde(flatten)]
    pub meta: EntryMeta,
    #[serde(flatten)]
    pub fields: F,
}

/// What a form submits: the tracker fields without identity or timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Draft<F> {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Draft<F> {
    pub fn new(fields: F) -> Self {
        Self { time: None, fields }
    }

    pub fn at(time: impl Into<String>, fields: F) -> Self {
        Self {
            time: Some(time.into()),
            fields,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u32,
}

/// One stored partition: everything a category/subcategory holds for a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub category: String,
    pub subcategory: String,
    pub content: DayContent,
    #[serde(default)]
    pub tags: Vec<String>,
    pub metadata: RecordMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrackerDescriptor {
    pub slug: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub remote_analytics: bool,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse<F> {
    pub tracker: &'static str,
    pub days: u32,
    pub total: usize,
    pub entries: Vec<Entry<F>>,
}

#[derive(Debug, Serialize)]
pub struct DayResponse<F> {
    pub tracker: &'static str,
    pub date: NaiveDate,
    pub entries: Vec<Entry<F>>,
}

#[derive(Debug, Serialize)]
pub struct SavedResponse<F> {
    pub message: String,
    pub entry: Entry<F>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: String,
    pub date: NaiveDate,
    pub remaining: usize,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub total: usize,
    pub records: Vec<DailyRecord>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse<S> {
    pub tracker: &'static str,
    pub days: u32,
    pub total: usize,
    /// `None` when the window holds no entries.
    pub summary: Option<S>,
    pub activity: ActivitySeries,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub tracker: TrackerDescriptor,
    pub form: Vec<FormField>,
}
