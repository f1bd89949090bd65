//! Field projection: reduces verbose Jellyfin items to compact objects.
//!
//! Every output field is a small extraction rule over the raw item. A field
//! whose source is missing, `null` or an empty list is left out of the
//! projected object entirely; `null` is never emitted. Output keys follow the
//! order in which fields were requested.

use serde_json::{Map, Value};

use crate::core::config::JellyfinConfig;

/// Hundred-nanosecond ticks per second.
const TICKS_PER_SECOND: i64 = 10_000_000;

/// Output field vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Artist,
    AlbumArtist,
    Album,
    Year,
    Genre,
    Index,
    Duration,
    Overview,
    ChildCount,
    Type,
    Path,
    Container,
    StreamUrl,
    ApiStream,
}

impl Field {
    /// Look up a field by its output key. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        let field = match name {
            "id" => Self::Id,
            "name" => Self::Name,
            "artist" => Self::Artist,
            "album_artist" => Self::AlbumArtist,
            "album" => Self::Album,
            "year" => Self::Year,
            "genre" => Self::Genre,
            "index" => Self::Index,
            "duration" => Self::Duration,
            "overview" => Self::Overview,
            "child_count" => Self::ChildCount,
            "type" => Self::Type,
            "path" => Self::Path,
            "container" => Self::Container,
            "stream_url" => Self::StreamUrl,
            "api_stream" => Self::ApiStream,
            _ => return None,
        };
        Some(field)
    }

    /// Output key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Artist => "artist",
            Self::AlbumArtist => "album_artist",
            Self::Album => "album",
            Self::Year => "year",
            Self::Genre => "genre",
            Self::Index => "index",
            Self::Duration => "duration",
            Self::Overview => "overview",
            Self::ChildCount => "child_count",
            Self::Type => "type",
            Self::Path => "path",
            Self::Container => "container",
            Self::StreamUrl => "stream_url",
            Self::ApiStream => "api_stream",
        }
    }

    /// Extract this field from a raw item, or `None` when it should be omitted.
    pub fn extract(self, raw: &Value, jellyfin: &JellyfinConfig) -> Option<Value> {
        match self {
            Self::Id => scalar(raw, "Id"),
            Self::Name => scalar(raw, "Name"),
            Self::Artist => first_of(raw, "Artists"),
            Self::AlbumArtist => scalar(raw, "AlbumArtist"),
            Self::Album => scalar(raw, "Album"),
            Self::Year => scalar(raw, "ProductionYear"),
            Self::Genre => first_of(raw, "Genres"),
            Self::Index => scalar(raw, "IndexNumber"),
            Self::Duration => raw
                .get("RunTimeTicks")
                .and_then(Value::as_i64)
                .and_then(format_duration)
                .map(Value::String),
            Self::Overview => scalar(raw, "Overview"),
            Self::ChildCount => scalar(raw, "ChildCount"),
            Self::Type => scalar(raw, "Type"),
            Self::Path => scalar(raw, "Path"),
            Self::Container => first_media_source(raw, "Container"),
            Self::StreamUrl => first_media_source(raw, "Path"),
            Self::ApiStream => raw
                .get("Id")
                .filter(|id| is_truthy(id))
                .map(|id| Value::String(api_stream_url(jellyfin, &plain_text(id)))),
        }
    }
}

/// Project a raw item onto the given fields.
pub fn project(raw: &Value, fields: &[Field], jellyfin: &JellyfinConfig) -> Map<String, Value> {
    fields
        .iter()
        .filter_map(|field| field.extract(raw, jellyfin).map(|v| (field.key().to_string(), v)))
        .collect()
}

/// Project a raw item onto fields named by their output keys.
///
/// Names outside the vocabulary are ignored.
pub fn format_item(raw: &Value, names: &[&str], jellyfin: &JellyfinConfig) -> Map<String, Value> {
    let fields: Vec<Field> = names.iter().filter_map(|name| Field::parse(name)).collect();
    project(raw, &fields, jellyfin)
}

/// Project every raw item onto the same field set.
pub fn project_all(raw_items: &[Value], fields: &[Field], jellyfin: &JellyfinConfig) -> Vec<Value> {
    raw_items
        .iter()
        .map(|raw| Value::Object(project(raw, fields, jellyfin)))
        .collect()
}

/// Convert `RunTimeTicks` to `M:SS`.
///
/// Zero ticks yield `None`. Minutes are not rolled over into hours.
pub fn format_duration(ticks: i64) -> Option<String> {
    if ticks == 0 {
        return None;
    }
    // Floor semantics so negative tick counts still produce a stable string.
    let total_seconds = ticks.div_euclid(TICKS_PER_SECOND);
    let minutes = total_seconds.div_euclid(60);
    let seconds = total_seconds.rem_euclid(60);
    Some(format!("{}:{:02}", minutes, seconds))
}

/// Direct streaming URL served by Jellyfin's universal audio endpoint.
pub fn api_stream_url(jellyfin: &JellyfinConfig, item_id: &str) -> String {
    format!(
        "{}/Audio/{}/universal?api_key={}",
        jellyfin.url, item_id, jellyfin.api_key
    )
}

// ============================================================================
// Extraction helpers
// ============================================================================

fn scalar(raw: &Value, key: &str) -> Option<Value> {
    raw.get(key).filter(|v| !v.is_null()).cloned()
}

fn first_of(raw: &Value, key: &str) -> Option<Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .filter(|v| !v.is_null())
        .cloned()
}

fn first_media_source(raw: &Value, key: &str) -> Option<Value> {
    raw.get("MediaSources")
        .and_then(Value::as_array)
        .and_then(|sources| sources.first())
        .and_then(|source| source.get(key))
        .filter(|v| !v.is_null())
        .cloned()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
