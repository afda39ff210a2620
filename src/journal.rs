use crate::content::entry_id;
use crate::models::{Draft, Entry, EntryMeta, TRACKER_CATEGORY};
use crate::storage::{DailyStore, StoreError};
use crate::trackers::Tracker;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde_json::Value;
use std::marker::PhantomData;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("{0}")]
    Invalid(String),
    #[error("no entry {id} on {date}")]
    NotFound { date: NaiveDate, id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to encode entry: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Typed view of one tracker's entries inside the daily store.
///
/// Each tracker keeps one record per day (category `tracker`, subcategory =
/// the tracker slug) holding that day's entry array.
pub struct Journal<'a, T> {
    store: &'a DailyStore,
    _tracker: PhantomData<T>,
}

impl<'a, T: Tracker> Journal<'a, T> {
    pub fn new(store: &'a DailyStore) -> Self {
        Self {
            store,
            _tracker: PhantomData,
        }
    }

    /// Entries of the last `days` calendar days (today included), newest first.
    pub async fn window(&self, today: NaiveDate, days: u32) -> Vec<Entry<T::Fields>> {
        let start = today - Duration::days(i64::from(days.max(1)) - 1);
        let records = self
            .store
            .get_date_range(start, today, Some(TRACKER_CATEGORY))
            .await;

        let mut entries: Vec<Entry<T::Fields>> = records
            .iter()
            .filter(|record| record.subcategory == T::SLUG)
            .flat_map(|record| decode_all::<T>(&record.content.entries))
            .collect();
        sort_newest_first(&mut entries);
        entries
    }

    pub async fn day(&self, date: NaiveDate) -> Vec<Entry<T::Fields>> {
        let mut entries = self
            .store
            .get_specific_data(date, TRACKER_CATEGORY, T::SLUG)
            .await
            .map(|record| decode_all::<T>(&record.content.entries))
            .unwrap_or_default();
        sort_newest_first(&mut entries);
        entries
    }

    pub async fn get(&self, date: NaiveDate, id: &str) -> Option<Entry<T::Fields>> {
        self.day(date)
            .await
            .into_iter()
            .find(|entry| entry.meta.id == id)
    }

    /// Case-insensitive match against any field of the entries in the window.
    pub async fn search(&self, today: NaiveDate, days: u32, query: &str) -> Vec<Entry<T::Fields>> {
        let needle = query.trim().to_lowercase();
        let entries = self.window(today, days).await;
        if needle.is_empty() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|entry| {
                serde_json::to_string(&entry.fields)
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub async fn create(
        &self,
        date: NaiveDate,
        draft: Draft<T::Fields>,
    ) -> Result<Entry<T::Fields>, JournalError> {
        self.create_at(date, draft, Utc::now()).await
    }

    pub async fn create_at(
        &self,
        date: NaiveDate,
        draft: Draft<T::Fields>,
        now: DateTime<Utc>,
    ) -> Result<Entry<T::Fields>, JournalError> {
        let fields = prepare::<T>(draft.fields)?;
        let time = draft
            .time
            .map(|time| time.trim().to_string())
            .unwrap_or_else(|| now.format("%H:%M").to_string());

        let entry = self
            .store
            .modify_day(date, TRACKER_CATEGORY, T::SLUG, |entries| {
                let entry = Entry {
                    meta: EntryMeta {
                        id: next_id(T::ID_PREFIX, now, entries),
                        date,
                        time,
                        created_at: now,
                        updated_at: now,
                    },
                    fields,
                };
                entries.push(serde_json::to_value(&entry)?);
                Ok::<_, JournalError>(entry)
            })
            .await?;

        info!(tracker = T::SLUG, id = %entry.meta.id, "created entry on {date}");
        Ok(entry)
    }

    pub async fn update(
        &self,
        date: NaiveDate,
        id: &str,
        draft: Draft<T::Fields>,
    ) -> Result<Entry<T::Fields>, JournalError> {
        self.update_at(date, id, draft, Utc::now()).await
    }

    /// Overwrites every field of an entry. Identity, date and creation time
    /// are kept; `updatedAt` always moves forward.
    pub async fn update_at(
        &self,
        date: NaiveDate,
        id: &str,
        draft: Draft<T::Fields>,
        now: DateTime<Utc>,
    ) -> Result<Entry<T::Fields>, JournalError> {
        let fields = prepare::<T>(draft.fields)?;

        let entry = self
            .store
            .modify_day(date, TRACKER_CATEGORY, T::SLUG, |entries| {
                let slot = entries
                    .iter_mut()
                    .find(|value| entry_id(value) == Some(id))
                    .ok_or_else(|| not_found(date, id))?;

                let previous: EntryMeta = serde_json::from_value(slot.clone())?;
                let entry = Entry {
                    meta: EntryMeta {
                        time: draft
                            .time
                            .map(|time| time.trim().to_string())
                            .unwrap_or(previous.time),
                        updated_at: advance(previous.updated_at, now),
                        ..previous
                    },
                    fields,
                };
                *slot = serde_json::to_value(&entry)?;
                Ok::<_, JournalError>(entry)
            })
            .await?;

        info!(tracker = T::SLUG, id = %entry.meta.id, "updated entry on {date}");
        Ok(entry)
    }

    /// Removes one entry and returns how many remain on that day.
    pub async fn delete(&self, date: NaiveDate, id: &str) -> Result<usize, JournalError> {
        let remaining = self
            .store
            .modify_day(date, TRACKER_CATEGORY, T::SLUG, |entries| {
                let before = entries.len();
                entries.retain(|value| entry_id(value) != Some(id));
                if entries.len() == before {
                    return Err(not_found(date, id));
                }
                Ok::<_, JournalError>(entries.len())
            })
            .await?;

        info!(tracker = T::SLUG, id, "deleted entry on {date}");
        Ok(remaining)
    }
}

fn prepare<T: Tracker>(mut fields: T::Fields) -> Result<T::Fields, JournalError> {
    T::normalize(&mut fields);
    T::validate(&fields).map_err(JournalError::Invalid)?;
    Ok(fields)
}

fn not_found(date: NaiveDate, id: &str) -> JournalError {
    JournalError::NotFound {
        date,
        id: id.to_string(),
    }
}

fn decode_all<T: Tracker>(values: &[Value]) -> Vec<Entry<T::Fields>> {
    values
        .iter()
        .filter_map(|value| match serde_json::from_value(value.clone()) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(
                    tracker = T::SLUG,
                    id = entry_id(value).unwrap_or("?"),
                    "skipping unreadable entry: {err}"
                );
                None
            }
        })
        .collect()
}

fn sort_newest_first<F>(entries: &mut [Entry<F>]) {
    entries.sort_by(|a, b| {
        (b.meta.date, &b.meta.time, b.meta.created_at).cmp(&(a.meta.date, &a.meta.time, a.meta.created_at))
    });
}

/// `<prefix>-<epoch millis>`, bumped past any id already used that day.
fn next_id(prefix: &str, now: DateTime<Utc>, existing: &[Value]) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = format!("{prefix}-{millis}");
        if !existing.iter().any(|value| entry_id(value) == Some(candidate.as_str())) {
            return candidate;
        }
        millis += 1;
    }
}

fn advance(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::tests::unique_data_path;
    use crate::trackers::anxiety::{Anxiety, AnxietyFields};
    use chrono::TimeZone;
    use serde_json::json;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, h, m, 0).unwrap()
    }

    fn fields(level: u8, kind: &str, triggers: &[&str]) -> AnxietyFields {
        AnxietyFields {
            anxiety_level: level,
            anxiety_type: kind.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
            ..AnxietyFields::default()
        }
    }

    async fn open(label: &str) -> (DailyStore, std::path::PathBuf) {
        let path = unique_data_path(label);
        (DailyStore::open(path.clone()).await.unwrap(), path)
    }

    #[tokio::test]
    async fn saved_entry_reloads_with_same_fields() {
        let (store, path) = open("journal_roundtrip").await;
        let journal = Journal::<Anxiety>::new(&store);

        let saved = journal
            .create_at(day(10), Draft::at("08:15", fields(6, "social", &["Crowds"])), at(8, 15))
            .await
            .unwrap();
        assert_eq!(saved.meta.id, format!("anxiety-{}", at(8, 15).timestamp_millis()));

        let reopened = DailyStore::open(path.clone()).await.unwrap();
        let day_entries = Journal::<Anxiety>::new(&reopened).day(day(10)).await;
        assert_eq!(day_entries.len(), 1);
        assert_eq!(day_entries[0], saved);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn edit_keeps_identity_and_advances_updated_at() {
        let (store, path) = open("journal_edit").await;
        let journal = Journal::<Anxiety>::new(&store);

        let created = journal
            .create_at(day(10), Draft::at("09:00", fields(4, "generalized", &[])), at(9, 0))
            .await
            .unwrap();

        // Same clock reading as creation: updatedAt must still move forward.
        let edited = journal
            .update_at(day(10), &created.meta.id, Draft::new(fields(8, "panic-attack", &["Work"])), at(9, 0))
            .await
            .unwrap();

        assert_eq!(edited.meta.id, created.meta.id);
        assert_eq!(edited.meta.created_at, created.meta.created_at);
        assert_eq!(edited.meta.time, "09:00");
        assert!(edited.meta.updated_at > created.meta.updated_at);
        assert_eq!(edited.fields.anxiety_level, 8);

        let later = journal
            .update_at(day(10), &created.meta.id, Draft::new(fields(2, "generalized", &[])), at(11, 30))
            .await
            .unwrap();
        assert_eq!(later.meta.updated_at, at(11, 30));

        let missing = journal
            .update_at(day(10), "anxiety-0", Draft::new(fields(2, "generalized", &[])), at(12, 0))
            .await;
        assert!(matches!(missing, Err(JournalError::NotFound { .. })));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_entry() {
        let (store, path) = open("journal_delete").await;
        let journal = Journal::<Anxiety>::new(&store);

        let mut ids = Vec::new();
        for (minute, level) in [(0, 3), (1, 5), (2, 7)] {
            let entry = journal
                .create_at(day(11), Draft::new(fields(level, "social", &[])), at(10, minute))
                .await
                .unwrap();
            ids.push(entry.meta.id);
        }

        let remaining = journal.delete(day(11), &ids[1]).await.unwrap();
        assert_eq!(remaining, 2);

        let left: Vec<_> = journal.day(day(11)).await.into_iter().map(|e| e.meta.id).collect();
        assert_eq!(left.len(), 2);
        assert!(left.contains(&ids[0]));
        assert!(left.contains(&ids[2]));

        assert!(matches!(
            journal.delete(day(11), &ids[1]).await,
            Err(JournalError::NotFound { .. })
        ));

        journal.delete(day(11), &ids[0]).await.unwrap();
        journal.delete(day(11), &ids[2]).await.unwrap();
        assert!(store
            .get_specific_data(day(11), TRACKER_CATEGORY, "anxiety")
            .await
            .is_none());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn window_is_sorted_newest_first_and_bounded() {
        let (store, path) = open("journal_window").await;
        let journal = Journal::<Anxiety>::new(&store);

        for (d, time) in [(1, "10:00"), (20, "07:30"), (20, "21:45"), (25, "12:00")] {
            journal
                .create_at(day(d), Draft::at(time, fields(5, "social", &[])), at(1, 0))
                .await
                .unwrap();
        }

        let window = journal.window(day(25), 10).await;
        let order: Vec<_> = window
            .iter()
            .map(|e| (e.meta.date.to_string(), e.meta.time.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2026-02-25".to_string(), "12:00".to_string()),
                ("2026-02-20".to_string(), "21:45".to_string()),
                ("2026-02-20".to_string(), "07:30".to_string()),
            ]
        );

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn ids_stay_unique_within_a_day() {
        let (store, path) = open("journal_ids").await;
        let journal = Journal::<Anxiety>::new(&store);

        let first = journal
            .create_at(day(12), Draft::new(fields(5, "social", &[])), at(9, 0))
            .await
            .unwrap();
        let second = journal
            .create_at(day(12), Draft::new(fields(5, "social", &[])), at(9, 0))
            .await
            .unwrap();
        assert_ne!(first.meta.id, second.meta.id);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn invalid_draft_is_rejected_without_writing() {
        let (store, path) = open("journal_invalid").await;
        let journal = Journal::<Anxiety>::new(&store);

        let result = journal
            .create_at(day(13), Draft::new(fields(5, "  ", &[])), at(9, 0))
            .await;
        assert!(matches!(result, Err(JournalError::Invalid(_))));
        assert!(journal.day(day(13)).await.is_empty());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn unreadable_entries_are_skipped() {
        let (store, path) = open("journal_skip").await;
        store
            .save_data(
                day(14),
                TRACKER_CATEGORY,
                "anxiety",
                vec![
                    json!({ "id": "anxiety-1", "date": "2026-02-14", "time": "10:00",
                            "anxietyType": "social", "anxietyLevel": 4 }),
                    json!({ "id": "anxiety-2", "date": "not a date" }),
                    json!({ "id": "anxiety-3", "date": "2026-02-14", "anxietyLevel": "high" }),
                ],
                vec![],
            )
            .await
            .unwrap();

        let journal = Journal::<Anxiety>::new(&store);
        let entries = journal.day(day(14)).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].meta.id, "anxiety-1");
        assert!(entries[0].fields.triggers.is_empty());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn search_matches_any_field() {
        let (store, path) = open("journal_search").await;
        let journal = Journal::<Anxiety>::new(&store);
        journal
            .create_at(day(15), Draft::new(fields(5, "social", &["Crowded train"])), at(9, 0))
            .await
            .unwrap();
        journal
            .create_at(day(15), Draft::new(fields(5, "health", &["Test results"])), at(9, 5))
            .await
            .unwrap();

        assert_eq!(journal.search(day(15), 30, "TRAIN").await.len(), 1);
        assert_eq!(journal.search(day(15), 30, "").await.len(), 2);
        assert!(journal.search(day(15), 30, "nothing").await.is_empty());

        let _ = std::fs::remove_file(path);
    }
}
