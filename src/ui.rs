use crate::models::{Entry, TrackerDescriptor};
use crate::remote::RemoteReport;
use crate::trackers::{FieldKind, FormField, PicklistOption, Preview, Tracker};
use chrono::NaiveDate;
use serde_json::Value;

/// Chips shown per group on a history card before collapsing into "+N more".
const CHIP_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Track,
    History,
    Analytics,
}

impl Tab {
    /// Unknown or missing tab names land on the form.
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("history") => Self::History,
            Some("analytics") => Self::Analytics,
            _ => Self::Track,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::History => "history",
            Self::Analytics => "analytics",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Track => "Track",
            Self::History => "History",
            Self::Analytics => "Analytics",
        }
    }
}

/// What every tracker page needs besides the tab body.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub date: NaiveDate,
    pub days: u32,
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// The analytics service result shown under the summary.
pub enum RemoteSection<'a> {
    NotRequested,
    Report(&'a RemoteReport),
    Failed(&'a str),
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `avg_heart_rate_increase` -> `Avg heart rate increase`.
pub fn humanize(key: &str) -> String {
    let words = key.replace('_', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First `limit` items, then a "+N more" marker for the rest.
pub fn truncate_chips(items: &[String], limit: usize) -> Vec<String> {
    let mut shown: Vec<String> = items.iter().take(limit).cloned().collect();
    if items.len() > limit {
        shown.push(format!("+{} more", items.len() - limit));
    }
    shown
}

pub fn render_index(trackers: &[(TrackerDescriptor, usize)], today: NaiveDate) -> String {
    let cards: String = trackers
        .iter()
        .map(|(tracker, today_count)| {
            let count = match today_count {
                0 => "Nothing logged today".to_string(),
                1 => "1 entry today".to_string(),
                n => format!("{n} entries today"),
            };
            format!(
                r#"<a class="card tracker-card" href="/trackers/{slug}">
  <span class="emoji">{emoji}</span>
  <span class="name">{label}</span>
  <span class="hint">{count}</span>
</a>"#,
                slug = tracker.slug,
                emoji = tracker.emoji,
                label = escape(tracker.label),
            )
        })
        .collect();

    let body = format!(
        r#"<header>
  <h1>Symptom Journal</h1>
  <p class="subtitle">{today}. Pick a tracker to log how things are going.</p>
</header>
<section class="grid">{cards}</section>"#
    );
    shell("Symptom Journal", &body, "")
}

pub fn render_track<T: Tracker>(page: &PageContext, values: &Value, editing: Option<&str>) -> String {
    let fields: String = T::form().iter().map(|field| render_field(field, values)).collect();
    let time = values.get("time").and_then(Value::as_str).unwrap_or("");
    let (heading, button, edit_input) = match editing {
        Some(id) => (
            "Edit entry",
            "Save changes",
            format!(r#"<input type="hidden" name="editId" value="{}">"#, escape(id)),
        ),
        None => ("New entry", "Save entry", String::new()),
    };
    let cancel = if editing.is_some() {
        format!(
            r#"<a class="link" href="/trackers/{}?tab=history&date={}">Cancel</a>"#,
            T::SLUG,
            page.date
        )
    } else {
        String::new()
    };

    let body = format!(
        r#"<h2>{heading}</h2>
<form class="entry-form" method="post" action="/trackers/{slug}/entries">
  {edit_input}
  <div class="row">
    <label class="field"><span class="label">Date</span><input type="date" name="date" value="{date}" required{date_lock}></label>
    <label class="field"><span class="label">Time</span><input type="time" name="time" value="{time}"></label>
  </div>
  {fields}
  <div class="actions"><button class="btn-primary" type="submit">{button}</button>{cancel}</div>
</form>"#,
        slug = T::SLUG,
        date = page.date,
        time = escape(time),
        date_lock = if editing.is_some() { " readonly" } else { "" },
    );
    tracker_shell::<T>(page, Tab::Track, &body, SLIDER_SCRIPT)
}

pub fn render_history<T: Tracker>(page: &PageContext, entries: &[Entry<T::Fields>], query: &str) -> String {
    let search = format!(
        r#"<form class="search" method="get" action="/trackers/{slug}">
  <input type="hidden" name="tab" value="history">
  <input type="search" name="q" value="{query}" placeholder="Search entries">
  <select name="days">{days}</select>
  <button class="btn-secondary" type="submit">Filter</button>
</form>"#,
        slug = T::SLUG,
        query = escape(query),
        days = day_options(page.days),
    );

    let list = if entries.is_empty() {
        let message = if query.trim().is_empty() {
            format!("No entries in the last {} days yet.", page.days)
        } else {
            format!("No entries match \u{201c}{}\u{201d}.", escape(query.trim()))
        };
        format!(r#"<p class="empty">{message}</p>"#)
    } else {
        entries
            .iter()
            .map(|entry| history_card::<T>(entry))
            .collect::<String>()
    };

    let body = format!(
        r#"{search}<p class="hint">{count} entries over the last {days} days.</p><section class="history">{list}</section>"#,
        count = entries.len(),
        days = page.days,
    );
    tracker_shell::<T>(page, Tab::History, &body, "")
}

pub fn render_analytics<T: Tracker>(
    page: &PageContext,
    summary: Option<&T::Summary>,
    remote: RemoteSection<'_>,
) -> String {
    let summary_html = match summary.map(serde_json::to_value) {
        Some(Ok(value)) => render_summary(&value),
        Some(Err(err)) => format!(r#"<p class="error">Summary unavailable: {}</p>"#, escape(&err.to_string())),
        None => format!(
            r#"<p class="empty">No data yet. Log a few entries and the last {} days will show up here.</p>"#,
            page.days
        ),
    };

    let remote_html = if T::REMOTE_ANALYTICS {
        render_remote::<T>(page, remote)
    } else {
        String::new()
    };

    let body = format!(
        r#"<form class="search" method="get" action="/trackers/{slug}">
  <input type="hidden" name="tab" value="analytics">
  <select name="days">{days}</select>
  <button class="btn-secondary" type="submit">Update</button>
</form>
<section class="chart-area" data-activity-url="/api/trackers/{slug}/analytics?days={window}">
  <div class="chart-header">
    <h2 id="chart-title">Last 7 days</h2>
    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="daily">Last 7 days</button>
      <button class="tab" type="button" data-tab="weekly">Weekly totals</button>
      <button class="tab" type="button" data-tab="average">Weekly averages</button>
    </div>
  </div>
  <div class="chart-card"><svg id="chart" viewBox="0 0 600 260" role="img" aria-label="Entries over time"></svg></div>
</section>
<section class="summary">{summary_html}</section>
{remote_html}"#,
        slug = T::SLUG,
        days = day_options(page.days),
        window = page.days,
    );
    tracker_shell::<T>(page, Tab::Analytics, &body, CHART_SCRIPT)
}

fn render_remote<T: Tracker>(page: &PageContext, remote: RemoteSection<'_>) -> String {
    let action = format!("/trackers/{}/remote?days={}", T::SLUG, page.days);
    let content = match remote {
        RemoteSection::NotRequested => String::new(),
        RemoteSection::Report(report) => {
            let insights: String = report
                .insights
                .iter()
                .map(|insight| format!("<li>{}</li>", escape(insight)))
                .collect();
            let details = serde_json::to_value(&report.analysis)
                .map(|value| render_summary(&value))
                .unwrap_or_default();
            format!(
                r#"<p class="hint">{total} entries analysed.</p><ul class="insights">{insights}</ul>{details}"#,
                total = report.total_entries,
            )
        }
        RemoteSection::Failed(message) => format!(
            r#"<div class="error-panel"><p>Advanced analytics failed: {}</p><form method="post" action="{action}"><button class="link" type="submit">Retry</button></form></div>"#,
            escape(message)
        ),
    };
    format!(
        r#"<section class="remote">
  <div class="chart-header"><h2>Advanced analytics</h2>
  <form method="post" action="{action}"><button class="btn-secondary" type="submit">Run analysis</button></form></div>
  {content}
</section>"#
    )
}

/// Lays out any summary object: scalars as stat tiles, ranked lists as bars,
/// frequency maps as tables.
pub fn render_summary(value: &Value) -> String {
    let Some(object) = value.as_object() else {
        return String::new();
    };
    let mut tiles = String::new();
    let mut lists = String::new();
    for (key, item) in object {
        match item {
            Value::Array(rows) => lists.push_str(&render_ranked(key, rows)),
            Value::Object(map) if map.contains_key("count") => {
                tiles.push_str(&stat_tile(&humanize(key), &row_name(map)));
            }
            Value::Object(map) => lists.push_str(&render_table(key, map)),
            scalar => tiles.push_str(&stat_tile(&humanize(key), &format_scalar(scalar))),
        }
    }
    format!(r#"<div class="panel">{tiles}</div>{lists}"#)
}

fn render_ranked(key: &str, rows: &[Value]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let items: String = rows
        .iter()
        .map(|row| match row {
            Value::Object(map) => {
                let metrics: Vec<String> = map
                    .iter()
                    .filter(|(_, value)| value.is_number())
                    .map(|(name, value)| format!("{}: {}", humanize(name), format_scalar(value)))
                    .collect();
                format!(
                    r#"<li><span>{}</span><span class="metric">{}</span></li>"#,
                    escape(&row_name(map)),
                    escape(&metrics.join(" · "))
                )
            }
            other => format!("<li>{}</li>", escape(&format_scalar(other))),
        })
        .collect();
    format!(r#"<div class="card"><h3>{}</h3><ul class="ranked">{items}</ul></div>"#, humanize(key))
}

fn render_table(key: &str, map: &serde_json::Map<String, Value>) -> String {
    if map.is_empty() {
        return String::new();
    }
    let rows: String = map
        .iter()
        .map(|(name, value)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(name),
                escape(&format_scalar(value))
            )
        })
        .collect();
    format!(r#"<div class="card"><h3>{}</h3><table>{rows}</table></div>"#, humanize(key))
}

fn row_name(map: &serde_json::Map<String, Value>) -> String {
    let name = ["label", "value", "activity", "strategy"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .unwrap_or("?");
    match map.get("emoji").and_then(Value::as_str) {
        Some(emoji) if !emoji.is_empty() => format!("{emoji} {name}"),
        _ => name.to_string(),
    }
}

fn format_scalar(value: &Value) -> String {
    match value {
        Value::Null => "n/a".to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn stat_tile(label: &str, value: &str) -> String {
    format!(
        r#"<div class="stat"><span class="label">{}</span><span class="value">{}</span></div>"#,
        escape(label),
        escape(value)
    )
}

fn history_card<T: Tracker>(entry: &Entry<T::Fields>) -> String {
    let Preview {
        headline,
        level,
        chips,
        notes,
    } = T::preview(&entry.fields);
    let level = level
        .map(|(label, value)| format!(r#"<span class="badge">{label} {value}/10</span>"#))
        .unwrap_or_default();
    let chips: String = chips
        .iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| {
            let shown: String = truncate_chips(items, CHIP_LIMIT)
                .iter()
                .map(|item| format!(r#"<span class="chip">{}</span>"#, escape(item)))
                .collect();
            format!(r#"<div class="chips"><span class="label">{label}</span>{shown}</div>"#)
        })
        .collect();
    let notes = if notes.trim().is_empty() {
        String::new()
    } else {
        format!(r#"<p class="notes">{}</p>"#, escape(&notes))
    };
    let meta = &entry.meta;

    format!(
        r#"<article class="card entry">
  <div class="entry-head"><h3>{headline}</h3>{level}</div>
  <p class="hint">{date} {time}</p>
  {chips}{notes}
  <div class="entry-actions">
    <a class="link" href="/trackers/{slug}?tab=track&date={date}&edit={id}">Edit</a>
    <form method="post" action="/trackers/{slug}/entries/{date}/{id}/delete"><button class="link danger" type="submit">Delete</button></form>
  </div>
</article>"#,
        headline = escape(&headline),
        date = meta.date,
        time = escape(&meta.time),
        slug = T::SLUG,
        id = escape(&urlencoding::encode(&meta.id)),
    )
}

fn render_field(field: &FormField, values: &Value) -> String {
    let current = values.get(field.name);
    let required = if field.required { " required" } else { "" };
    let marker = if field.required { " *" } else { "" };
    let label = format!(r#"<span class="label">{}{marker}</span>"#, escape(field.label));
    let name = field.name;

    match &field.kind {
        FieldKind::Level { min, max } => {
            let value = current.and_then(Value::as_u64).unwrap_or(u64::from(*min));
            format!(
                r#"<label class="field">{label}<span class="slider"><input type="range" name="{name}" min="{min}" max="{max}" value="{value}"><output>{value}</output></span></label>"#
            )
        }
        FieldKind::Choice { options } => {
            let selected = current.and_then(Value::as_str).unwrap_or("");
            let mut html = format!(r#"<label class="field">{label}<select name="{name}"{required}><option value="">Choose…</option>"#);
            for option in *options {
                html.push_str(&format!(
                    r#"<option value="{}"{}>{}</option>"#,
                    escape(option.value),
                    if option.value == selected { " selected" } else { "" },
                    escape(&option_text(option))
                ));
            }
            if !selected.is_empty() && !options.iter().any(|option| option.value == selected) {
                let selected = escape(selected);
                html.push_str(&format!(r#"<option value="{selected}" selected>{selected}</option>"#));
            }
            html.push_str("</select></label>");
            html
        }
        FieldKind::MultiChoice { options } => {
            let chosen: Vec<&str> = current
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            let mut boxes: String = options
                .iter()
                .map(|option| checkbox(name, option.value, &option_text(option), chosen.contains(&option.value)))
                .collect();
            for extra in chosen.iter().filter(|value| !options.iter().any(|o| o.value == **value)) {
                boxes.push_str(&checkbox(name, extra, extra, true));
            }
            format!(r#"<fieldset class="field"><legend>{}{marker}</legend><div class="choices">{boxes}</div></fieldset>"#, escape(field.label))
        }
        FieldKind::Text => {
            let value = current.and_then(Value::as_str).unwrap_or("");
            format!(r#"<label class="field">{label}<input type="text" name="{name}" value="{}"{required}></label>"#, escape(value))
        }
        FieldKind::LongText => {
            let value = current.and_then(Value::as_str).unwrap_or("");
            format!(r#"<label class="field">{label}<textarea name="{name}" rows="3">{}</textarea></label>"#, escape(value))
        }
        FieldKind::Flag => {
            let checked = current.and_then(Value::as_bool).unwrap_or(false);
            format!(
                r#"<label class="field flag"><input type="checkbox" name="{name}" value="true"{}>{}</label>"#,
                if checked { " checked" } else { "" },
                escape(field.label)
            )
        }
        FieldKind::Number => {
            let value = current.and_then(Value::as_u64).map(|n| n.to_string()).unwrap_or_default();
            format!(r#"<label class="field">{label}<input type="number" min="0" name="{name}" value="{value}"></label>"#)
        }
    }
}

fn option_text(option: &PicklistOption) -> String {
    if option.emoji.is_empty() {
        option.label.to_string()
    } else {
        format!("{} {}", option.emoji, option.label)
    }
}

fn checkbox(name: &str, value: &str, text: &str, checked: bool) -> String {
    format!(
        r#"<label class="choice"><input type="checkbox" name="{name}" value="{}"{}>{}</label>"#,
        escape(value),
        if checked { " checked" } else { "" },
        escape(text)
    )
}

fn day_options(selected: u32) -> String {
    let mut windows = vec![7, 14, 30, 90, 365];
    if !windows.contains(&selected) {
        windows.push(selected);
        windows.sort_unstable();
    }
    windows
        .into_iter()
        .map(|days| {
            format!(
                r#"<option value="{days}"{}>Last {days} days</option>"#,
                if days == selected { " selected" } else { "" }
            )
        })
        .collect()
}

fn tracker_shell<T: Tracker>(page: &PageContext, active: Tab, content: &str, script: &str) -> String {
    let tabs: String = [Tab::Track, Tab::History, Tab::Analytics]
        .into_iter()
        .map(|tab| {
            format!(
                r#"<a class="tab{}" href="/trackers/{}?tab={}&date={}&days={}">{}</a>"#,
                if tab == active { " active" } else { "" },
                T::SLUG,
                tab.as_str(),
                page.date,
                page.days,
                tab.title()
            )
        })
        .collect();
    let notice = page
        .notice
        .as_deref()
        .map(|notice| format!(r#"<div class="status" data-type="ok">{}</div>"#, escape(notice)))
        .unwrap_or_default();
    let error = page
        .error
        .as_deref()
        .map(|error| format!(r#"<div class="status" data-type="error">{}</div>"#, escape(error)))
        .unwrap_or_default();

    let body = format!(
        r#"<header>
  <a class="link" href="/">&larr; All trackers</a>
  <h1>{emoji} {label}</h1>
</header>
<nav class="tabs" role="tablist">{tabs}</nav>
{notice}{error}
{content}"#,
        emoji = T::EMOJI,
        label = escape(T::LABEL),
    );
    shell(T::LABEL, &body, script)
}

fn shell(title: &str, body: &str, script: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", &escape(title))
        .replace("{{STYLES}}", STYLES)
        .replace("{{BODY}}", body)
        .replace("{{SCRIPT}}", script)
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLES}}</style>
</head>
<body>
  <main class="app">
{{BODY}}
  </main>
  {{SCRIPT}}
</body>
</html>
"#;

const STYLES: &str = r#"
    :root {
      --bg-1: #f3eef8;
      --bg-2: #d9c8f0;
      --ink: #2b2a28;
      --accent: #8b5cf6;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }
    * { box-sizing: border-box; }
    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #efe4fb 60%, #f9f5fd 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }
    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }
    header { display: flex; flex-direction: column; gap: 6px; }
    h1 { font-family: "Fraunces", "Georgia", serif; font-size: clamp(1.8rem, 4vw, 2.6rem); margin: 0; }
    h2 { margin: 0; font-size: 1.3rem; }
    h3 { margin: 0 0 8px; font-size: 1.05rem; }
    .subtitle, .hint { margin: 0; color: #6f6a65; font-size: 0.92rem; }
    .grid, .panel { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
    .card, .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }
    .tracker-card { display: grid; gap: 6px; text-decoration: none; color: inherit; }
    .tracker-card .emoji { font-size: 2rem; }
    .tracker-card .name { font-weight: 600; }
    .stat { display: grid; gap: 8px; }
    .label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.1em; color: #8b857d; }
    .stat .value { font-size: 1.5rem; font-weight: 600; color: var(--accent-2); }
    .tabs { display: flex; gap: 6px; padding: 6px; background: rgba(47, 72, 88, 0.08); border-radius: 999px; width: fit-content; }
    .tab {
      background: transparent; border: none; border-radius: 999px; padding: 8px 14px;
      font-weight: 600; color: #6b645d; text-decoration: none; cursor: pointer; font-size: 0.9rem;
    }
    .tab.active { background: white; color: var(--accent-2); box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12); }
    .entry-form, .history, .summary, .remote, .chart-area { display: grid; gap: 16px; }
    .row { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
    .field { display: grid; gap: 6px; border: none; padding: 0; margin: 0; }
    .field.flag { display: flex; align-items: center; gap: 8px; }
    input, select, textarea { font: inherit; padding: 10px 12px; border-radius: 12px; border: 1px solid rgba(47, 72, 88, 0.2); background: white; }
    .slider { display: flex; align-items: center; gap: 12px; }
    .slider input { flex: 1; }
    .choices { display: flex; flex-wrap: wrap; gap: 8px; }
    .choice { display: inline-flex; gap: 6px; align-items: center; padding: 6px 10px; border-radius: 999px; background: rgba(139, 92, 246, 0.08); font-size: 0.9rem; }
    .actions, .entry-actions, .search, .entry-head, .chart-header { display: flex; flex-wrap: wrap; gap: 12px; align-items: center; }
    .entry-head, .chart-header { justify-content: space-between; }
    button { appearance: none; border: none; border-radius: 999px; padding: 12px 18px; font: inherit; font-weight: 600; cursor: pointer; }
    .btn-primary { background: var(--accent); color: white; box-shadow: 0 10px 24px rgba(139, 92, 246, 0.3); }
    .btn-secondary { background: var(--accent-2); color: white; }
    .link { background: none; padding: 0; color: var(--accent-2); text-decoration: underline; font-weight: 500; }
    .link.danger { color: #c63b2b; }
    .entry-actions form { margin: 0; }
    .badge { background: rgba(139, 92, 246, 0.12); color: var(--accent); border-radius: 999px; padding: 4px 10px; font-weight: 600; font-size: 0.85rem; }
    .chips { display: flex; flex-wrap: wrap; gap: 6px; align-items: center; margin-top: 8px; }
    .chip { background: #f4f1ee; border-radius: 999px; padding: 3px 10px; font-size: 0.85rem; }
    .notes { margin: 10px 0 0; white-space: pre-wrap; }
    .ranked { list-style: none; padding: 0; margin: 0; display: grid; gap: 6px; }
    .ranked li { display: flex; justify-content: space-between; gap: 12px; }
    .metric { color: #6f6a65; font-size: 0.9rem; }
    table { width: 100%; border-collapse: collapse; }
    td { padding: 4px 0; border-bottom: 1px solid rgba(47, 72, 88, 0.08); }
    .empty { color: #6f6a65; font-style: italic; }
    .status { font-size: 0.95rem; padding: 10px 14px; border-radius: 12px; }
    .status[data-type="error"], .error-panel { color: #c63b2b; background: rgba(198, 59, 43, 0.08); }
    .status[data-type="ok"] { color: #2d7a4b; background: rgba(45, 122, 75, 0.08); }
    .error-panel { padding: 14px; border-radius: 14px; }
    .chart-card { background: white; border-radius: 20px; padding: 16px; border: 1px solid rgba(47, 72, 88, 0.08); }
    #chart { width: 100%; height: 260px; display: block; }
    .chart-line { fill: none; stroke: var(--accent); stroke-width: 3; }
    .chart-point { fill: white; stroke: var(--accent); stroke-width: 2; }
    .chart-grid { stroke: rgba(47, 72, 88, 0.12); }
    .chart-label { fill: #7a746d; font-size: 11px; }
    @media (max-width: 600px) { .app { padding: 28px 20px; } }
"#;

const SLIDER_SCRIPT: &str = r#"<script>
  document.querySelectorAll('.slider input[type=range]').forEach((input) => {
    const output = input.nextElementSibling;
    input.addEventListener('input', () => { output.textContent = input.value; });
  });
</script>"#;

const CHART_SCRIPT: &str = r#"<script>
  const area = document.querySelector('[data-activity-url]');
  const chartEl = document.getElementById('chart');
  const titleEl = document.getElementById('chart-title');
  const tabs = Array.from(document.querySelectorAll('.chart-area .tab'));
  let activity = null;
  let activeTab = 'daily';

  const renderLineChart = (points) => {
    if (!points.length) {
      chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
      return;
    }
    const width = 600, height = 260, paddingX = 44, paddingY = 34, top = 24;
    const values = points.map((point) => point.value);
    let min = Math.min(0, ...values);
    let max = Math.max(0, ...values);
    if (min === max) { max += 1; }
    const range = max - min;
    const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
    const scaleY = (height - top - paddingY) / range;
    const x = (index) => paddingX + index * xStep;
    const y = (value) => height - paddingY - (value - min) * scaleY;
    const path = points.map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`).join(' ');
    let grid = '';
    for (let i = 0; i <= 4; i += 1) {
      const value = min + (range * i) / 4;
      grid += `<line class="chart-grid" x1="${paddingX}" y1="${y(value)}" x2="${width - paddingX}" y2="${y(value)}" />`;
      grid += `<text class="chart-label" x="${paddingX - 10}" y="${y(value) + 4}" text-anchor="end">${Math.round(value * 10) / 10}</text>`;
    }
    const labels = points.map((point, index) => `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${point.label}</text>`).join('');
    const circles = points.map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="4" />`).join('');
    chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${labels}`;
  };

  const render = () => {
    if (!activity) { return; }
    if (activeTab === 'weekly') {
      titleEl.textContent = 'Weekly totals';
      renderLineChart(activity.weekly_totals.map((week) => ({ label: week.week, value: week.entries })));
    } else if (activeTab === 'average') {
      titleEl.textContent = 'Weekly averages';
      renderLineChart(activity.weekly_totals.map((week) => ({ label: week.week, value: week.avg_per_day })));
    } else {
      titleEl.textContent = 'Last 7 days';
      renderLineChart(activity.last_7_days.map((day) => ({ label: day.date.slice(5), value: day.entries })));
    }
  };

  tabs.forEach((button) => button.addEventListener('click', () => {
    activeTab = button.dataset.tab;
    tabs.forEach((other) => other.classList.toggle('active', other === button));
    render();
  }));

  fetch(area.dataset.activityUrl)
    .then((res) => res.ok ? res.json() : Promise.reject(new Error('Unable to load activity')))
    .then((data) => { activity = data.activity; render(); })
    .catch(() => { chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">Chart unavailable</text>'; });
</script>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trackers::anxiety::{Anxiety, AnxietyFields};
    use crate::models::EntryMeta;
    use chrono::Utc;
    use serde_json::json;

    fn page() -> PageContext {
        PageContext {
            date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            days: 30,
            notice: None,
            error: None,
        }
    }

    #[test]
    fn tabs_fall_back_to_track() {
        assert_eq!(Tab::parse(Some("history")), Tab::History);
        assert_eq!(Tab::parse(Some("analytics")), Tab::Analytics);
        assert_eq!(Tab::parse(Some("settings")), Tab::Track);
        assert_eq!(Tab::parse(None), Tab::Track);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn long_chip_lists_collapse() {
        let items: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        assert_eq!(truncate_chips(&items, 3), vec!["a", "b", "c", "+2 more"]);
        assert_eq!(truncate_chips(&items[..2], 3), vec!["a", "b"]);
    }

    #[test]
    fn humanizes_keys() {
        assert_eq!(humanize("avg_heart_rate_increase"), "Avg heart rate increase");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn track_form_is_seeded_from_values() {
        let mut values = serde_json::to_value(AnxietyFields::default()).unwrap();
        values["anxietyType"] = json!("social");
        values["triggers"] = json!(["Crowds", "My own trigger"]);
        let html = render_track::<Anxiety>(&page(), &values, Some("anxiety-1"));

        assert!(html.contains(r#"<option value="social" selected>"#));
        assert!(html.contains(r#"name="triggers" value="Crowds" checked"#));
        assert!(html.contains(r#"name="triggers" value="My own trigger" checked"#));
        assert!(html.contains(r#"name="editId" value="anxiety-1""#));
        assert!(html.contains(r#"name="anxietyLevel" min="0" max="10" value="5""#));
    }

    #[test]
    fn history_cards_escape_notes() {
        let entry = Entry {
            meta: EntryMeta {
                id: "anxiety-9".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                time: "08:15".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            fields: AnxietyFields {
                anxiety_type: "panic-attack".to_string(),
                notes: "<script>alert(1)</script>".to_string(),
                ..AnxietyFields::default()
            },
        };
        let html = render_history::<Anxiety>(&page(), &[entry], "");
        assert!(html.contains("Panic Attack"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("/trackers/anxiety/entries/2026-04-01/anxiety-9/delete"));
    }

    #[test]
    fn entry_ids_are_encoded_in_links() {
        let entry = Entry {
            meta: EntryMeta {
                id: "legacy/1 2?x&y".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
                time: String::new(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            fields: AnxietyFields::default(),
        };
        let html = render_history::<Anxiety>(&page(), &[entry], "");
        assert!(html.contains(
            r#"action="/trackers/anxiety/entries/2026-04-02/legacy%2F1%202%3Fx%26y/delete""#
        ));
        assert!(html.contains("&edit=legacy%2F1%202%3Fx%26y\""));
        assert!(!html.contains("legacy/1"));
    }

    #[test]
    fn empty_analytics_shows_no_data() {
        let html = render_analytics::<Anxiety>(&page(), None, RemoteSection::NotRequested);
        assert!(html.contains("No data yet"));
        assert!(!html.contains("Advanced analytics"));
    }

    #[test]
    fn summary_layout_handles_every_shape() {
        let html = render_summary(&json!({
            "avg_anxiety": 6.0,
            "most_common_type": { "value": "social", "label": "Social Anxiety", "emoji": "😳", "count": 3 },
            "top_triggers": [{ "value": "Work", "count": 2 }],
            "trigger_frequency": { "Work": 2 },
            "avg_effectiveness": null
        }));
        assert!(html.contains("Avg anxiety"));
        assert!(html.contains("😳 Social Anxiety"));
        assert!(html.contains("Count: 2"));
        assert!(html.contains("<td>Work</td><td>2</td>"));
        assert!(html.contains("n/a"));
    }
}
