use crate::content::{self, ContentShape, DayContent};
use crate::models::{DailyRecord, RecordMetadata};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::{fs, sync::Mutex};
use tracing::{error, info, warn};

pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode journal data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write journal data: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordKey {
    pub date: NaiveDate,
    pub category: String,
    pub subcategory: String,
}

impl RecordKey {
    pub fn new(date: NaiveDate, category: &str, subcategory: &str) -> Self {
        Self {
            date,
            category: category.to_string(),
            subcategory: subcategory.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub records: BTreeMap<RecordKey, DailyRecord>,
    /// Stored records whose content could not be read, kept verbatim and
    /// written back until their partition is overwritten.
    pub unreadable: BTreeMap<RecordKey, Value>,
    /// Stored records that do not decode at all (e.g. a non-date key).
    pub preserved: Vec<Value>,
}

#[derive(Serialize)]
struct StoreFile {
    schema_version: u32,
    records: Vec<Value>,
}

#[derive(Deserialize)]
struct RawStoreFile {
    #[serde(default)]
    records: Vec<Value>,
}

#[derive(Deserialize)]
struct RawRecord {
    date: NaiveDate,
    category: String,
    subcategory: String,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
}

#[derive(Deserialize)]
struct RawMetadata {
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    version: Option<u32>,
}

/// Result of reading the data file. `migrated` is set when any record had to
/// be rewritten into the current content shape.
#[derive(Debug, Default)]
pub struct LoadedData {
    pub data: AppData,
    pub migrated: bool,
}

pub async fn load_data(path: &Path) -> LoadedData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<RawStoreFile>(&bytes) {
            Ok(raw) => migrate_records(raw.records, Utc::now()),
            Err(err) => {
                error!("failed to parse data file: {err}");
                LoadedData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LoadedData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            LoadedData::default()
        }
    }
}

fn migrate_records(raw_records: Vec<Value>, now: DateTime<Utc>) -> LoadedData {
    let mut loaded = LoadedData::default();

    for stored in raw_records {
        let raw: RawRecord = match serde_json::from_value(stored.clone()) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("keeping undecodable record as stored: {err}");
                loaded.data.preserved.push(stored);
                continue;
            }
        };

        let (content, shape) = content::migrate_content(raw.content);
        match shape {
            ContentShape::Current => {}
            ContentShape::Legacy => loaded.migrated = true,
            ContentShape::Unreadable => warn!(
                date = %raw.date,
                subcategory = %raw.subcategory,
                "unreadable record content, treating day as empty"
            ),
        }
        let unreadable = shape == ContentShape::Unreadable;

        let metadata = raw.metadata.unwrap_or(RawMetadata {
            created_at: None,
            updated_at: None,
            version: None,
        });
        let created_at = metadata.created_at.unwrap_or(now);
        let metadata = RecordMetadata {
            created_at,
            updated_at: metadata.updated_at.unwrap_or(created_at),
            version: metadata.version.unwrap_or(1),
        };

        let partition = content::legacy_partition(&raw.subcategory, &content.entries);
        let subcategory = partition.clone().unwrap_or(raw.subcategory);
        let key = RecordKey::new(raw.date, &raw.category, &subcategory);

        match loaded.data.records.get_mut(&key) {
            Some(_) if unreadable => loaded.data.preserved.push(stored),
            Some(existing) => {
                // Folding into a partition kept verbatim would hide these entries.
                if let Some(kept) = loaded.data.unreadable.remove(&key) {
                    loaded.data.preserved.push(kept);
                }
                existing.content.entries.extend(content.entries);
                existing.tags = content::collect_tags(&existing.content.entries);
                existing.metadata.created_at = existing.metadata.created_at.min(metadata.created_at);
                existing.metadata.updated_at = existing.metadata.updated_at.max(metadata.updated_at);
                loaded.migrated = true;
            }
            None => {
                if partition.is_some() {
                    loaded.migrated = true;
                }
                let tags = if partition.is_some() {
                    content::collect_tags(&content.entries)
                } else {
                    raw.tags
                };
                let record = DailyRecord {
                    date: raw.date,
                    category: raw.category,
                    subcategory,
                    content,
                    tags,
                    metadata,
                };
                if unreadable {
                    loaded.data.unreadable.insert(key.clone(), stored);
                }
                loaded.data.records.insert(key, record);
            }
        }
    }

    loaded
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), StoreError> {
    let mut records = Vec::with_capacity(data.records.len() + data.preserved.len());
    for (key, record) in &data.records {
        match data.unreadable.get(key) {
            Some(stored) => records.push(stored.clone()),
            None => records.push(serde_json::to_value(record)?),
        }
    }
    records.extend(data.preserved.iter().cloned());

    let file = StoreFile {
        schema_version: SCHEMA_VERSION,
        records,
    };
    let payload = serde_json::to_vec_pretty(&file)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

/// Day-partitioned record store backed by one JSON file.
///
/// All mutations go through the in-memory map under a single lock and are
/// written to disk before the lock is released.
#[derive(Debug)]
pub struct DailyStore {
    path: PathBuf,
    data: Mutex<AppData>,
}

impl DailyStore {
    pub fn new(path: PathBuf, data: AppData) -> Self {
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    /// Loads the data file, rewriting it when older content shapes were found.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let loaded = load_data(&path).await;
        if loaded.migrated {
            persist_data(&path, &loaded.data).await?;
            info!(
                records = loaded.data.records.len(),
                "migrated journal data to schema v{SCHEMA_VERSION}"
            );
        }
        Ok(Self::new(path, loaded.data))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_date_data(&self, date: NaiveDate) -> Vec<DailyRecord> {
        let data = self.data.lock().await;
        data.records
            .values()
            .filter(|record| record.date == date)
            .cloned()
            .collect()
    }

    pub async fn get_category_data(&self, date: NaiveDate, category: &str) -> Vec<DailyRecord> {
        let data = self.data.lock().await;
        data.records
            .values()
            .filter(|record| record.date == date && record.category == category)
            .cloned()
            .collect()
    }

    pub async fn get_specific_data(
        &self,
        date: NaiveDate,
        category: &str,
        subcategory: &str,
    ) -> Option<DailyRecord> {
        let data = self.data.lock().await;
        data.records
            .get(&RecordKey::new(date, category, subcategory))
            .cloned()
    }

    pub async fn get_all_category_data(&self, category: &str) -> Vec<DailyRecord> {
        let data = self.data.lock().await;
        data.records
            .values()
            .filter(|record| record.category == category)
            .cloned()
            .collect()
    }

    /// Records dated within `start..=end`, optionally limited to one category.
    pub async fn get_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        category: Option<&str>,
    ) -> Vec<DailyRecord> {
        let data = self.data.lock().await;
        data.records
            .values()
            .filter(|record| record.date >= start && record.date <= end)
            .filter(|record| category.is_none_or(|category| record.category == category))
            .cloned()
            .collect()
    }

    pub async fn search_by_content(&self, query: &str, category: Option<&str>) -> Vec<DailyRecord> {
        let needle = query.trim().to_lowercase();
        let data = self.data.lock().await;
        data.records
            .values()
            .filter(|record| category.is_none_or(|category| record.category == category))
            .filter(|record| {
                serde_json::to_string(&record.content.entries)
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Records carrying any of `tags`, optionally limited to an inclusive date range.
    pub async fn search_by_tags(
        &self,
        tags: &[String],
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<DailyRecord> {
        let data = self.data.lock().await;
        data.records
            .values()
            .filter(|record| record.tags.iter().any(|tag| tags.contains(tag)))
            .filter(|record| {
                range.is_none_or(|(start, end)| record.date >= start && record.date <= end)
            })
            .cloned()
            .collect()
    }

    /// Replaces the whole content of one partition.
    pub async fn save_data(
        &self,
        date: NaiveDate,
        category: &str,
        subcategory: &str,
        entries: Vec<Value>,
        tags: Vec<String>,
    ) -> Result<DailyRecord, StoreError> {
        let key = RecordKey::new(date, category, subcategory);
        let mut data = self.data.lock().await;
        let previous = Snapshot::take(&data, &key);

        let record = upsert(&mut data, key.clone(), entries, tags, Utc::now());
        if let Err(err) = persist_data(&self.path, &data).await {
            previous.restore(&mut data, key);
            error!("failed to persist {date}/{category}/{subcategory}: {err}");
            return Err(err);
        }

        info!("saved {date}/{category}/{subcategory}");
        Ok(record)
    }

    /// Removes one partition. Returns whether anything was deleted.
    pub async fn delete_data(
        &self,
        date: NaiveDate,
        category: &str,
        subcategory: &str,
    ) -> Result<bool, StoreError> {
        let key = RecordKey::new(date, category, subcategory);
        let mut data = self.data.lock().await;
        let previous = Snapshot::take(&data, &key);
        if data.records.remove(&key).is_none() {
            return Ok(false);
        }
        data.unreadable.remove(&key);

        if let Err(err) = persist_data(&self.path, &data).await {
            previous.restore(&mut data, key);
            error!("failed to persist deletion of {date}/{category}/{subcategory}: {err}");
            return Err(err);
        }

        info!("deleted {date}/{category}/{subcategory}");
        Ok(true)
    }

    /// Read-modify-write of one day's entry array.
    ///
    /// `apply` sees the current entries. When it fails nothing is written;
    /// when persisting fails the previous record is put back. An emptied day
    /// removes the record.
    pub async fn modify_day<R, E>(
        &self,
        date: NaiveDate,
        category: &str,
        subcategory: &str,
        apply: impl FnOnce(&mut Vec<Value>) -> Result<R, E>,
    ) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let key = RecordKey::new(date, category, subcategory);
        let mut data = self.data.lock().await;
        let previous = Snapshot::take(&data, &key);

        let mut entries = previous
            .record
            .as_ref()
            .map(|record| record.content.entries.clone())
            .unwrap_or_default();
        let outcome = apply(&mut entries)?;

        if entries.is_empty() {
            data.records.remove(&key);
            data.unreadable.remove(&key);
        } else {
            let tags = content::collect_tags(&entries);
            upsert(&mut data, key.clone(), entries, tags, Utc::now());
        }

        if let Err(err) = persist_data(&self.path, &data).await {
            previous.restore(&mut data, key);
            error!("failed to persist {date}/{category}/{subcategory}: {err}");
            return Err(E::from(err));
        }

        Ok(outcome)
    }
}

fn upsert(
    data: &mut AppData,
    key: RecordKey,
    entries: Vec<Value>,
    tags: Vec<String>,
    now: DateTime<Utc>,
) -> DailyRecord {
    data.unreadable.remove(&key);
    let record = match data.records.remove(&key) {
        Some(mut existing) => {
            existing.content = DayContent::new(entries);
            existing.tags = tags;
            existing.metadata.updated_at = now.max(existing.metadata.updated_at);
            existing.metadata.version = existing.metadata.version.saturating_add(1);
            existing
        }
        None => DailyRecord {
            date: key.date,
            category: key.category.clone(),
            subcategory: key.subcategory.clone(),
            content: DayContent::new(entries),
            tags,
            metadata: RecordMetadata {
                created_at: now,
                updated_at: now,
                version: 1,
            },
        },
    };
    data.records.insert(key, record.clone());
    record
}

/// What one partition held before a write, for rolling back a failed persist.
struct Snapshot {
    record: Option<DailyRecord>,
    stored: Option<Value>,
}

impl Snapshot {
    fn take(data: &AppData, key: &RecordKey) -> Self {
        Self {
            record: data.records.get(key).cloned(),
            stored: data.unreadable.get(key).cloned(),
        }
    }

    fn restore(self, data: &mut AppData, key: RecordKey) {
        match self.stored {
            Some(stored) => data.unreadable.insert(key.clone(), stored),
            None => data.unreadable.remove(&key),
        };
        match self.record {
            Some(record) => data.records.insert(key, record),
            None => data.records.remove(&key),
        };
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::TRACKER_CATEGORY;
    use serde_json::json;

    pub(crate) fn unique_data_path(label: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "symptom_journal_{label}_{}_{}.json",
            std::process::id(),
            nanos
        ));
        path
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[tokio::test]
    async fn save_then_read_back_partition() {
        let path = unique_data_path("save");
        let store = DailyStore::open(path.clone()).await.unwrap();

        let saved = store
            .save_data(
                day(4),
                TRACKER_CATEGORY,
                "pain",
                vec![json!({ "id": "pain-1", "tags": ["flare"] })],
                vec!["flare".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(saved.metadata.version, 1);

        let again = store
            .save_data(day(4), TRACKER_CATEGORY, "pain", vec![json!({ "id": "pain-2" })], vec![])
            .await
            .unwrap();
        assert_eq!(again.metadata.version, 2);
        assert_eq!(again.metadata.created_at, saved.metadata.created_at);

        let record = store
            .get_specific_data(day(4), TRACKER_CATEGORY, "pain")
            .await
            .expect("record");
        assert_eq!(record.content.entries, vec![json!({ "id": "pain-2" })]);

        let reopened = DailyStore::open(path.clone()).await.unwrap();
        assert_eq!(reopened.get_category_data(day(4), TRACKER_CATEGORY).await.len(), 1);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn range_search_and_tag_queries() {
        let path = unique_data_path("queries");
        let store = DailyStore::open(path.clone()).await.unwrap();
        for (d, sub, note, tag) in [
            (1, "pain", "migraine behind the eyes", "head"),
            (5, "pain", "knee after stairs", "joints"),
            (9, "anxiety", "crowded train", "commute"),
        ] {
            store
                .save_data(
                    day(d),
                    TRACKER_CATEGORY,
                    sub,
                    vec![json!({ "id": format!("{sub}-{d}"), "notes": note, "tags": [tag] })],
                    vec![tag.to_string()],
                )
                .await
                .unwrap();
        }
        store
            .save_data(day(5), "journal", "daily", vec![json!({ "id": "j-1", "notes": "Knee" })], vec![])
            .await
            .unwrap();

        assert_eq!(store.get_date_range(day(1), day(5), None).await.len(), 3);
        assert_eq!(
            store.get_date_range(day(1), day(5), Some(TRACKER_CATEGORY)).await.len(),
            2
        );
        assert_eq!(store.get_date_data(day(5)).await.len(), 2);
        assert_eq!(store.get_all_category_data(TRACKER_CATEGORY).await.len(), 3);
        assert_eq!(store.search_by_content("KNEE", None).await.len(), 2);
        assert_eq!(store.search_by_content("knee", Some(TRACKER_CATEGORY)).await.len(), 1);

        let tagged = store
            .search_by_tags(&["head".to_string(), "commute".to_string()], None)
            .await;
        assert_eq!(tagged.len(), 2);
        let bounded = store
            .search_by_tags(&["head".to_string(), "commute".to_string()], Some((day(2), day(30))))
            .await;
        assert_eq!(bounded.len(), 1);

        assert!(store.delete_data(day(9), TRACKER_CATEGORY, "anxiety").await.unwrap());
        assert!(!store.delete_data(day(9), TRACKER_CATEGORY, "anxiety").await.unwrap());

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn failed_persist_leaves_state_unchanged() {
        let dir = unique_data_path("dir");
        std::fs::create_dir_all(&dir).unwrap();
        // Renaming a file onto a directory fails, so every write fails.
        let store = DailyStore::new(dir.clone(), AppData::default());

        let result = store
            .modify_day::<(), StoreError>(day(2), TRACKER_CATEGORY, "pain", |entries| {
                entries.push(json!({ "id": "pain-1" }));
                Ok(())
            })
            .await;
        assert!(result.is_err());
        assert!(store.get_specific_data(day(2), TRACKER_CATEGORY, "pain").await.is_none());

        let _ = std::fs::remove_file(dir.with_extension("json.tmp"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn legacy_file_is_migrated_on_open() {
        let path = unique_data_path("legacy");
        let legacy = json!({
            "records": [
                {
                    "date": "2026-03-02",
                    "category": "tracker",
                    "subcategory": "pain",
                    "content": { "entries": "[{\"id\":\"pain-1\",\"painLevel\":6}]" }
                },
                {
                    "date": "2026-03-02",
                    "category": "tracker",
                    "subcategory": "anxiety-anxiety-100",
                    "content": "{\"id\":\"anxiety-100\",\"anxietyLevel\":4,\"tags\":[\"work\"]}"
                },
                {
                    "date": "2026-03-02",
                    "category": "tracker",
                    "subcategory": "anxiety-anxiety-200",
                    "content": "{\"id\":\"anxiety-200\",\"anxietyLevel\":7}"
                },
                {
                    "date": "2026-03-03",
                    "category": "tracker",
                    "subcategory": "mental-health",
                    "content": "{broken"
                }
            ]
        });
        std::fs::write(&path, serde_json::to_vec(&legacy).unwrap()).unwrap();

        let store = DailyStore::open(path.clone()).await.unwrap();
        let pain = store
            .get_specific_data(day(2), TRACKER_CATEGORY, "pain")
            .await
            .expect("pain record");
        assert_eq!(pain.content.entries.len(), 1);

        let anxiety = store
            .get_specific_data(day(2), TRACKER_CATEGORY, "anxiety")
            .await
            .expect("folded anxiety record");
        assert_eq!(anxiety.content.entries.len(), 2);
        assert_eq!(anxiety.tags, vec!["work"]);

        let broken = store
            .get_specific_data(day(3), TRACKER_CATEGORY, "mental-health")
            .await
            .expect("record kept");
        assert!(broken.content.entries.is_empty());

        let rewritten: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(rewritten["schema_version"], json!(SCHEMA_VERSION));
        assert_eq!(rewritten["records"][0]["content"]["version"], json!(2));
        assert_eq!(rewritten["records"][2]["content"], json!("{broken"));

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn foreign_records_survive_open_and_save() {
        let path = unique_data_path("foreign");
        let file = json!({
            "schema_version": 2,
            "records": [
                {
                    "date": "2026-03-04",
                    "category": "tracker",
                    "subcategory": "pain",
                    "content": { "version": 2, "entries": [{ "id": "pain-1", "painLevel": 5 }] },
                    "tags": []
                },
                {
                    "date": "allergen-registry",
                    "category": "user",
                    "subcategory": "known-allergens",
                    "content": { "allergens": ["peanuts"] }
                },
                { "date": "2026-03-04", "category": "tracker" }
            ]
        });
        std::fs::write(&path, serde_json::to_vec(&file).unwrap()).unwrap();

        let store = DailyStore::open(path.clone()).await.unwrap();
        let pain = store
            .get_specific_data(day(4), TRACKER_CATEGORY, "pain")
            .await
            .expect("pain record");
        assert_eq!(pain.content.entries.len(), 1);

        store
            .save_data(day(4), TRACKER_CATEGORY, "anxiety", vec![json!({ "id": "anxiety-1" })], vec![])
            .await
            .unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("pain-1"));
        assert!(on_disk.contains("anxiety-1"));
        assert!(on_disk.contains("allergen-registry"));
        assert!(on_disk.contains("peanuts"));
        let written: Value = serde_json::from_str(&on_disk).unwrap();
        assert_eq!(written["records"].as_array().unwrap().len(), 4);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn unreadable_content_is_kept_until_overwritten() {
        let path = unique_data_path("truncated");
        let truncated = "{\"version\":2,\"entries\":[{\"id\":\"pain-7\",\"painLe";
        let file = json!({
            "schema_version": 2,
            "records": [{
                "date": "2026-03-05",
                "category": "tracker",
                "subcategory": "pain",
                "content": truncated,
                "tags": ["kept"]
            }]
        });
        let original = serde_json::to_vec(&file).unwrap();
        std::fs::write(&path, &original).unwrap();

        let store = DailyStore::open(path.clone()).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), original);

        store
            .save_data(day(6), TRACKER_CATEGORY, "pain", vec![json!({ "id": "pain-8" })], vec![])
            .await
            .unwrap();
        let written: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["records"][0]["content"], json!(truncated));
        assert_eq!(written["records"][0]["tags"], json!(["kept"]));

        store
            .modify_day::<(), StoreError>(day(5), TRACKER_CATEGORY, "pain", |entries| {
                entries.push(json!({ "id": "pain-9" }));
                Ok(())
            })
            .await
            .unwrap();
        let written: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(written["records"][0]["content"]["entries"][0]["id"], json!("pain-9"));

        let _ = std::fs::remove_file(path);
    }
}
