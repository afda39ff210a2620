use crate::analytics::build_activity;
use crate::errors::AppError;
use crate::journal::{Journal, JournalError};
use crate::models::{
    AnalyticsResponse, CatalogResponse, DayResponse, DeletedResponse, Draft, Entry,
    HistoryResponse, RecordsResponse, SavedResponse, TrackerDescriptor,
};
use crate::remote::{RemoteAnalytics, RemoteReport};
use crate::state::AppState;
use crate::storage::DailyStore;
use crate::trackers::{
    self, pick_message, Anxiety, Dysautonomia, FieldKind, FoodAllergens, MentalHealth, Pain,
    SelfCare, Tracker,
};
use crate::ui::{self, PageContext, RemoteSection, Tab};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::{Duration, Local, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Weekly activity looks back eight weeks whatever the summary window.
const ACTIVITY_DAYS: u32 = 56;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_date(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{text}', expected YYYY-MM-DD")))
}

#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    pub days: Option<u32>,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub tab: Option<String>,
    pub date: Option<String>,
    pub edit: Option<String>,
    pub days: Option<u32>,
    #[serde(default)]
    pub q: String,
    pub saved: Option<u8>,
    pub deleted: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TagQuery {
    #[serde(default)]
    pub tags: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

pub async fn list_trackers() -> Json<Vec<TrackerDescriptor>> {
    Json(trackers::descriptors())
}

pub async fn catalog<T: Tracker>() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        tracker: T::descriptor(),
        form: T::form(),
    })
}

pub async fn list_entries<T: Tracker>(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Json<HistoryResponse<T::Fields>> {
    let days = state.days(query.days);
    let entries = Journal::<T>::new(&state.store)
        .search(today(), days, &query.q)
        .await;
    Json(HistoryResponse {
        tracker: T::SLUG,
        days,
        total: entries.len(),
        entries,
    })
}

pub async fn day_entries<T: Tracker>(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse<T::Fields>>, AppError> {
    let date = parse_date(&date)?;
    let entries = Journal::<T>::new(&state.store).day(date).await;
    Ok(Json(DayResponse {
        tracker: T::SLUG,
        date,
        entries,
    }))
}

pub async fn create_entry<T: Tracker>(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(draft): Json<Draft<T::Fields>>,
) -> Result<(StatusCode, Json<SavedResponse<T::Fields>>), AppError> {
    let date = parse_date(&date)?;
    let entry = Journal::<T>::new(&state.store).create(date, draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(SavedResponse {
            message: pick_message(T::saved_messages()),
            entry,
        }),
    ))
}

pub async fn get_entry<T: Tracker>(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<Entry<T::Fields>>, AppError> {
    let date = parse_date(&date)?;
    Journal::<T>::new(&state.store)
        .get(date, &id)
        .await
        .map(Json)
        .ok_or_else(|| JournalError::NotFound { date, id }.into())
}

pub async fn update_entry<T: Tracker>(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
    Json(draft): Json<Draft<T::Fields>>,
) -> Result<Json<SavedResponse<T::Fields>>, AppError> {
    let date = parse_date(&date)?;
    let entry = Journal::<T>::new(&state.store).update(date, &id, draft).await?;
    Ok(Json(SavedResponse {
        message: pick_message(T::saved_messages()),
        entry,
    }))
}

pub async fn delete_entry<T: Tracker>(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<DeletedResponse>, AppError> {
    let date = parse_date(&date)?;
    let remaining = Journal::<T>::new(&state.store).delete(date, &id).await?;
    Ok(Json(DeletedResponse {
        id,
        date,
        remaining,
    }))
}

pub async fn analytics<T: Tracker>(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Json<AnalyticsResponse<T::Summary>> {
    let days = state.days(query.days);
    let (_, report) = load_analytics::<T>(&state, days).await;
    Json(report)
}

pub async fn remote_analytics<T: RemoteAnalytics>(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<RemoteReport>, AppError> {
    let days = state.days(query.days);
    let entries = Journal::<T>::new(&state.store).window(today(), days).await;
    let report = state.remote.analyze::<T>(&entries, days).await?;
    Ok(Json(report))
}

/// Entries of the window plus their summary and the activity series.
async fn load_analytics<T: Tracker>(
    state: &AppState,
    days: u32,
) -> (Vec<Entry<T::Fields>>, AnalyticsResponse<T::Summary>) {
    let today = today();
    let recent = Journal::<T>::new(&state.store)
        .window(today, days.max(ACTIVITY_DAYS))
        .await;
    let activity = build_activity(today, recent.iter().map(|entry| entry.meta.date));

    let start = today - Duration::days(i64::from(days) - 1);
    let entries: Vec<_> = recent
        .into_iter()
        .filter(|entry| entry.meta.date >= start)
        .collect();
    let report = AnalyticsResponse {
        tracker: T::SLUG,
        days,
        total: entries.len(),
        summary: T::summarize(&entries),
        activity,
    };
    (entries, report)
}

pub async fn data_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RecordsResponse>, AppError> {
    let start = parse_date(&query.start)?;
    let end = parse_date(&query.end)?;
    if start > end {
        return Err(AppError::bad_request("start must not be after end"));
    }
    let records = state
        .store
        .get_date_range(start, end, query.category.as_deref())
        .await;
    Ok(Json(records_response(records)))
}

pub async fn data_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<RecordsResponse>, AppError> {
    if query.q.trim().is_empty() {
        return Err(AppError::bad_request("q is required"));
    }
    let records = state
        .store
        .search_by_content(&query.q, query.category.as_deref())
        .await;
    Ok(Json(records_response(records)))
}

pub async fn data_tags(
    State(state): State<AppState>,
    Query(query): Query<TagQuery>,
) -> Result<Json<RecordsResponse>, AppError> {
    let tags: Vec<String> = query
        .tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect();
    if tags.is_empty() {
        return Err(AppError::bad_request("tags is required"));
    }
    let range = match (query.start.as_deref(), query.end.as_deref()) {
        (Some(start), Some(end)) => Some((parse_date(start)?, parse_date(end)?)),
        (None, None) => None,
        _ => return Err(AppError::bad_request("start and end go together")),
    };
    let records = state.store.search_by_tags(&tags, range).await;
    Ok(Json(records_response(records)))
}

pub async fn data_for_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<RecordsResponse>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(records_response(state.store.get_date_data(date).await)))
}

fn records_response(records: Vec<crate::models::DailyRecord>) -> RecordsResponse {
    RecordsResponse {
        total: records.len(),
        records,
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let store = &state.store;
    let trackers = vec![
        logged_today::<Anxiety>(store, today).await,
        logged_today::<MentalHealth>(store, today).await,
        logged_today::<Pain>(store, today).await,
        logged_today::<Dysautonomia>(store, today).await,
        logged_today::<SelfCare>(store, today).await,
        logged_today::<FoodAllergens>(store, today).await,
    ];
    Html(ui::render_index(&trackers, today))
}

/// Entries of `T` on `date` that decode, as shown on the tracker's own page.
async fn logged_today<T: Tracker>(store: &DailyStore, date: NaiveDate) -> (TrackerDescriptor, usize) {
    let count = Journal::<T>::new(store).day(date).await.len();
    (T::descriptor(), count)
}

pub async fn tracker_page<T: Tracker>(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, AppError> {
    let days = state.days(query.days);
    let date = match query.date.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => parse_date(text)?,
        _ => today(),
    };
    let notice = if query.saved.is_some() {
        Some(pick_message(T::saved_messages()))
    } else if query.deleted.is_some() {
        Some("Entry deleted.".to_string())
    } else {
        None
    };
    let mut page = PageContext {
        date,
        days,
        notice,
        error: None,
    };
    let journal = Journal::<T>::new(&state.store);

    let html = match Tab::parse(query.tab.as_deref()) {
        Tab::Track => {
            let editing = query.edit.as_deref().filter(|id| !id.trim().is_empty());
            match editing {
                Some(id) => match journal.get(date, id).await {
                    Some(entry) => ui::render_track::<T>(&page, &entry_values::<T>(&entry)?, Some(id)),
                    None => {
                        page.error = Some(format!("No entry {id} on {date}"));
                        ui::render_track::<T>(&page, &default_values::<T>()?, None)
                    }
                },
                None => ui::render_track::<T>(&page, &default_values::<T>()?, None),
            }
        }
        Tab::History => {
            let entries = journal.search(today(), days, &query.q).await;
            ui::render_history::<T>(&page, &entries, &query.q)
        }
        Tab::Analytics => {
            let (_, report) = load_analytics::<T>(&state, days).await;
            ui::render_analytics::<T>(&page, report.summary.as_ref(), RemoteSection::NotRequested)
        }
    };
    Ok(Html(html))
}

/// HTML form bridge: creates an entry, or updates the one named by `editId`.
pub async fn submit_form<T: Tracker>(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let days = state.days(None);
    let journal = Journal::<T>::new(&state.store);
    let edit_id = form_value(&pairs, "editId").filter(|id| !id.is_empty());

    let (date, date_error) = match form_value(&pairs, "date").filter(|text| !text.is_empty()) {
        Some(text) => match parse_date(&text) {
            Ok(date) => (date, None),
            Err(err) => (today(), Some(err.message)),
        },
        None => (today(), None),
    };

    let mut values = match edit_id.as_deref() {
        Some(id) => {
            let existing = journal.get(date, id).await.ok_or_else(|| JournalError::NotFound {
                date,
                id: id.to_string(),
            })?;
            field_map::<T>(&existing.fields)?
        }
        None => field_map::<T>(&T::Fields::default())?,
    };
    apply_form::<T>(&mut values, &pairs);
    if let Some(time) = form_value(&pairs, "time").filter(|time| !time.is_empty()) {
        values.insert("time".to_string(), Value::String(time));
    }
    let values = Value::Object(values);

    let page = |error: String| PageContext {
        date,
        days,
        notice: None,
        error: Some(error),
    };
    if let Some(error) = date_error {
        return Ok(rejected::<T>(&page(error), &values, edit_id.as_deref()));
    }
    let draft: Draft<T::Fields> = match serde_json::from_value(values.clone()) {
        Ok(draft) => draft,
        Err(err) => {
            let error = format!("Could not read the form: {err}");
            return Ok(rejected::<T>(&page(error), &values, edit_id.as_deref()));
        }
    };

    let saved = match edit_id.as_deref() {
        Some(id) => journal.update(date, id, draft).await,
        None => journal.create(date, draft).await,
    };
    match saved {
        Ok(_) => Ok(Redirect::to(&format!(
            "/trackers/{}?tab=history&saved=1&days={days}",
            T::SLUG
        ))
        .into_response()),
        Err(JournalError::Invalid(message)) => {
            Ok(rejected::<T>(&page(message), &values, edit_id.as_deref()))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn delete_form<T: Tracker>(
    State(state): State<AppState>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let date = parse_date(&date)?;
    Journal::<T>::new(&state.store).delete(date, &id).await?;
    Ok(Redirect::to(&format!(
        "/trackers/{}?tab=history&deleted=1",
        T::SLUG
    )))
}

pub async fn remote_page<T: RemoteAnalytics>(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Response {
    let days = state.days(query.days);
    let (entries, report) = load_analytics::<T>(&state, days).await;
    let page = PageContext {
        date: today(),
        days,
        notice: None,
        error: None,
    };
    let outcome = state.remote.analyze::<T>(&entries, days).await;
    let summary = report.summary.as_ref();

    match outcome {
        Ok(remote) => Html(ui::render_analytics::<T>(
            &page,
            summary,
            RemoteSection::Report(&remote),
        ))
        .into_response(),
        Err(err) => {
            let message = err.to_string();
            let html = ui::render_analytics::<T>(&page, summary, RemoteSection::Failed(&message));
            (StatusCode::BAD_GATEWAY, Html(html)).into_response()
        }
    }
}

pub async fn not_found() -> AppError {
    AppError::not_found("no such page")
}

fn rejected<T: Tracker>(page: &PageContext, values: &Value, editing: Option<&str>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(ui::render_track::<T>(page, values, editing)),
    )
        .into_response()
}

fn form_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.trim().to_string())
}

fn field_map<T: Tracker>(fields: &T::Fields) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(fields).map_err(AppError::internal)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn default_values<T: Tracker>() -> Result<Value, AppError> {
    field_map::<T>(&T::Fields::default()).map(Value::Object)
}

fn entry_values<T: Tracker>(entry: &Entry<T::Fields>) -> Result<Value, AppError> {
    let mut map = field_map::<T>(&entry.fields)?;
    map.insert("time".to_string(), Value::String(entry.meta.time.clone()));
    Ok(Value::Object(map))
}

/// Overlays submitted form pairs on `values`, typed by each field's kind.
/// Unchecked boxes arrive as nothing, so flags and multi-selects are always
/// rewritten; a level left blank keeps its previous value.
pub fn apply_form<T: Tracker>(values: &mut Map<String, Value>, pairs: &[(String, String)]) {
    for field in T::form() {
        let submitted: Vec<&str> = pairs
            .iter()
            .filter(|(key, _)| key == field.name)
            .map(|(_, value)| value.trim())
            .collect();
        let value = match field.kind {
            FieldKind::MultiChoice { .. } => Value::from(
                submitted
                    .iter()
                    .filter(|value| !value.is_empty())
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>(),
            ),
            FieldKind::Flag => Value::Bool(
                submitted
                    .iter()
                    .any(|value| matches!(*value, "on" | "true" | "1")),
            ),
            FieldKind::Level { .. } => match submitted.last().and_then(|v| v.parse::<u64>().ok()) {
                Some(level) => Value::from(level),
                None => continue,
            },
            FieldKind::Number => submitted
                .last()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Value::from)
                .unwrap_or(Value::Null),
            FieldKind::Choice { .. } | FieldKind::Text | FieldKind::LongText => {
                Value::String(submitted.last().map(|value| value.to_string()).unwrap_or_default())
            }
        };
        values.insert(field.name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackers::anxiety::AnxietyFields;
    use crate::trackers::dysautonomia::DysautonomiaFields;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn form_pairs_become_typed_fields() {
        let Value::Object(mut values) = serde_json::to_value(AnxietyFields::default()).unwrap() else {
            panic!("fields serialize to an object");
        };
        apply_form::<Anxiety>(
            &mut values,
            &pairs(&[
                ("anxietyLevel", "8"),
                ("anxietyType", "social"),
                ("triggers", "Crowds"),
                ("triggers", ""),
                ("triggers", "Work"),
                ("shutdownAfter", "on"),
                ("notes", "  busy day "),
            ]),
        );
        let fields: AnxietyFields = serde_json::from_value(Value::Object(values)).unwrap();
        assert_eq!(fields.anxiety_level, 8);
        assert_eq!(fields.anxiety_type, "social");
        assert_eq!(fields.triggers, vec!["Crowds", "Work"]);
        assert!(fields.shutdown_after);
        assert_eq!(fields.notes, "busy day");
    }

    #[test]
    fn blank_numbers_clear_and_blank_levels_keep() {
        let previous = DysautonomiaFields {
            resting_heart_rate: Some(70),
            severity: 7,
            symptoms: vec!["Dizziness".to_string()],
            ..DysautonomiaFields::default()
        };
        let Value::Object(mut values) = serde_json::to_value(&previous).unwrap() else {
            panic!("fields serialize to an object");
        };
        apply_form::<Dysautonomia>(
            &mut values,
            &pairs(&[("restingHeartRate", ""), ("severity", ""), ("symptoms", "Fatigue")]),
        );
        let fields: DysautonomiaFields = serde_json::from_value(Value::Object(values)).unwrap();
        assert_eq!(fields.resting_heart_rate, None);
        assert_eq!(fields.severity, 7);
        assert_eq!(fields.symptoms, vec!["Fatigue"]);
    }

    #[test]
    fn dates_must_be_iso() {
        assert_eq!(
            parse_date(" 2026-03-04 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
        );
        let err = parse_date("04/03/2026").unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn home_counts_only_readable_entries() {
        let path = crate::storage::tests::unique_data_path("home");
        let store = DailyStore::open(path.clone()).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        store
            .save_data(
                date,
                crate::models::TRACKER_CATEGORY,
                "anxiety",
                vec![
                    serde_json::json!({ "id": "anxiety-1", "date": "2026-03-09", "anxietyLevel": 4 }),
                    serde_json::json!({ "notes": "no id" }),
                    serde_json::json!("stray text"),
                ],
                vec![],
            )
            .await
            .unwrap();

        let (tracker, count) = logged_today::<Anxiety>(&store, date).await;
        assert_eq!(tracker.slug, "anxiety");
        assert_eq!(count, 1);
        assert_eq!(logged_today::<Pain>(&store, date).await.1, 0);

        let _ = std::fs::remove_file(path);
    }
}
