//! Jellyfin response envelopes and the closed vocabularies used to talk to it.

use serde::Deserialize;
use serde_json::Value;

// ============================================================================
// Item kinds
// ============================================================================

/// Item types the tools know how to present.
///
/// Any other `IncludeItemTypes` value is still forwarded to Jellyfin verbatim;
/// it just gets the generic field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Audio,
    MusicAlbum,
    MusicArtist,
    Movie,
    Series,
}

impl ItemKind {
    /// Parse a Jellyfin item type name (case-sensitive, as the API expects).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Audio" => Some(Self::Audio),
            "MusicAlbum" => Some(Self::MusicAlbum),
            "MusicArtist" => Some(Self::MusicArtist),
            "Movie" => Some(Self::Movie),
            "Series" => Some(Self::Series),
            _ => None,
        }
    }

    /// The name Jellyfin uses for this item type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::MusicAlbum => "MusicAlbum",
            Self::MusicArtist => "MusicArtist",
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }
}

// ============================================================================
// Sorting
// ============================================================================

/// Tool-level sort names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Added,
    Year,
    Rating,
    Random,
}

impl SortKey {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "added" => Some(Self::Added),
            "year" => Some(Self::Year),
            "rating" => Some(Self::Rating),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Jellyfin `SortBy` value for this key.
    pub fn sort_field(self) -> &'static str {
        match self {
            Self::Name => "SortName",
            Self::Added => "DateCreated",
            Self::Year => "PremiereDate",
            Self::Rating => "CommunityRating",
            Self::Random => "Random",
        }
    }
}

/// Jellyfin `SortOrder` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

/// The `{Items, TotalRecordCount}` envelope returned by most list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsPage {
    #[serde(default)]
    pub items: Option<Vec<Value>>,

    #[serde(default)]
    pub total_record_count: Option<u64>,
}

impl ItemsPage {
    pub fn items(&self) -> &[Value] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Server-reported total, 0 when missing.
    pub fn total(&self) -> u64 {
        self.total_record_count.unwrap_or(0)
    }
}

/// Payload of `/Users/{id}/Items/Latest`.
///
/// Jellyfin answers with a bare array here; an envelope is tolerated too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LatestItems {
    List(Vec<Value>),
    Page(ItemsPage),
}

impl LatestItems {
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::List(items) => items,
            Self::Page(page) => page.items.unwrap_or_default(),
        }
    }
}

/// Payload of `/Items/Counts` (only the fields we report).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCounts {
    #[serde(default)]
    pub song_count: Option<u64>,
    #[serde(default)]
    pub album_count: Option<u64>,
    #[serde(default)]
    pub artist_count: Option<u64>,
    #[serde(default)]
    pub movie_count: Option<u64>,
    #[serde(default)]
    pub series_count: Option<u64>,
    #[serde(default)]
    pub episode_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_kind_parse() {
        assert_eq!(ItemKind::parse("MusicAlbum"), Some(ItemKind::MusicAlbum));
        assert_eq!(ItemKind::parse("musicalbum"), None);
        assert_eq!(ItemKind::parse("Playlist"), None);
        assert_eq!(ItemKind::Series.as_str(), "Series");
    }

    #[test]
    fn test_sort_fields() {
        assert_eq!(SortKey::parse("name").map(SortKey::sort_field), Some("SortName"));
        assert_eq!(SortKey::parse("added").map(SortKey::sort_field), Some("DateCreated"));
        assert_eq!(SortKey::parse("year").map(SortKey::sort_field), Some("PremiereDate"));
        assert_eq!(SortKey::parse("rating").map(SortKey::sort_field), Some("CommunityRating"));
        assert_eq!(SortKey::parse("random").map(SortKey::sort_field), Some("Random"));
        assert_eq!(SortKey::parse("popularity"), None);
    }

    #[test]
    fn test_items_page_defaults() {
        let page: ItemsPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.items().is_empty());
        assert_eq!(page.total(), 0);

        let page: ItemsPage =
            serde_json::from_value(json!({"TotalRecordCount": null, "Items": null})).unwrap();
        assert_eq!(page.total(), 0);
    }

    #[test]
    fn test_latest_items_accepts_both_shapes() {
        let bare: LatestItems = serde_json::from_value(json!([{"Id": "a"}, {"Id": "b"}])).unwrap();
        assert_eq!(bare.into_items().len(), 2);

        let wrapped: LatestItems =
            serde_json::from_value(json!({"Items": [{"Id": "a"}], "TotalRecordCount": 40}))
                .unwrap();
        assert_eq!(wrapped.into_items().len(), 1);
    }

    #[test]
    fn test_latest_items_rejects_scalars() {
        assert!(serde_json::from_value::<LatestItems>(json!("nope")).is_err());
    }
}
