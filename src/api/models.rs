use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A backend-owned record shown read-only in a listing
pub trait RemoteEntity: DeserializeOwned + Send + 'static {
    fn id(&self) -> u64;

    /// Cell values in the order of the section's columns
    fn cells(&self) -> Vec<String>;
}

/// Section-independent rendering of an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub cells: Vec<String>,
}

impl Row {
    pub fn from_entity<E: RemoteEntity>(entity: &E) -> Self {
        Self {
            id: entity.id().to_string(),
            cells: entity.cells(),
        }
    }
}

/// One page of a remote collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX).max(1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Detail view of a single record: top-level fields as display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<(String, String)>,
}

impl Record {
    pub fn from_value(value: &Value) -> Self {
        let fields = match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect(),
            other => vec![("value".to_string(), display_value(other))],
        };
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Counters for the chapter report side panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStats {
    pub total: u64,
    pub pending: u64,
    pub resolved: u64,
}

// Timestamps arrive either as RFC 3339 or as plain "YYYY-MM-DD[ HH:MM:SS]"
mod lenient_time {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };
        parse(raw.trim())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp: {raw}")))
    }

    fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(dt.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

// Backend rows may carry null where a value is expected; treat it like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn label(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn text(value: &Option<String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.clone(),
        _ => "-".to_string(),
    }
}

fn number(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}

fn active(is_active: bool) -> String {
    if is_active { "Active" } else { "Inactive" }.to_string()
}

fn date(value: &Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || "-".to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn excerpt(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let cut: String = value.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Manga {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, with = "lenient_time")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Manga {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.author_name),
            text(&self.status),
            number(self.views),
            active(self.is_active),
            date(&self.updated_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Chapter {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub manga_name: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default, with = "lenient_time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Chapter {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.manga_name),
            number(self.views),
            date(&self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub manga_count: Option<u64>,
    #[serde(default, with = "lenient_time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Author {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            number(self.manga_count),
            date(&self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub manga_count: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RemoteEntity for Genre {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.slug),
            number(self.manga_count),
            self.description
                .as_deref()
                .map_or_else(|| "-".to_string(), |d| excerpt(d, 60)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub member_count: Option<u64>,
    #[serde(default, with = "lenient_time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Group {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.owner_name),
            number(self.member_count),
            date(&self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, with = "lenient_time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Member {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.email),
            text(&self.role),
            active(self.is_active),
            date(&self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub manga_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_hidden: bool,
    #[serde(default, with = "lenient_time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Comment {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            excerpt(&self.content, 80),
            text(&self.user_name),
            text(&self.manga_name),
            if self.is_hidden { "Hidden" } else { "Visible" }.to_string(),
            date(&self.created_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ad {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default, with = "lenient_time")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "lenient_time")]
    pub end_date: Option<DateTime<Utc>>,
}

impl RemoteEntity for Ad {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.position),
            active(self.is_active),
            date(&self.start_date),
            date(&self.end_date),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Achievement {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl RemoteEntity for Achievement {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            self.description
                .as_deref()
                .map_or_else(|| "-".to_string(), |d| excerpt(d, 60)),
            number(self.points),
            active(self.is_active),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Doujinshi {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub parody: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default, with = "lenient_time")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for Doujinshi {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.parody),
            text(&self.status),
            number(self.views),
            date(&self.updated_at),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pet {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl RemoteEntity for Pet {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            label(&self.name),
            text(&self.rarity),
            number(self.price),
            active(self.is_active),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChapterReport {
    pub id: u64,
    #[serde(default)]
    pub manga_name: Option<String>,
    #[serde(default)]
    pub chapter_name: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reporter_name: Option<String>,
    #[serde(default, with = "lenient_time")]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteEntity for ChapterReport {
    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        vec![
            text(&self.manga_name),
            text(&self.chapter_name),
            self.reason
                .as_deref()
                .map_or_else(|| "-".to_string(), |r| excerpt(r, 60)),
            text(&self.status),
            text(&self.reporter_name),
            date(&self.created_at),
        ]
    }
}
