use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Shown when a game has no genre, platform, release date or rating
pub const UNKNOWN: &str = "Unknown";

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Release dates come as `YYYY-MM-DD`; anything else counts as unknown
fn deserialize_released<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()))
}

/// `{id, name}` reference as embedded in RAWG game records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// RAWG nests the platform one level deeper than genres
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlatformEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: NamedRef,
}

/// A game as returned by the `games` resource.
///
/// Every field tolerates being absent or `null`; obscure titles often lack
/// platforms, genres or a rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    /// RAWG game ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,

    /// Game name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Genre(s), only the first is displayed
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<NamedRef>,

    /// Platform(s), only the first is displayed
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<PlatformEntry>,

    /// Release date (null for unreleased titles)
    #[serde(default, deserialize_with = "deserialize_released")]
    pub released: Option<NaiveDate>,

    /// User rating (0-5), kept as the service sent it
    #[serde(default)]
    pub rating: Option<Number>,
}

impl Game {
    pub fn primary_genre(&self) -> &str {
        self.genres
            .first()
            .map(|g| g.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN)
    }

    pub fn primary_platform(&self) -> &str {
        self.platforms
            .first()
            .map(|p| p.platform.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN)
    }

    /// Release date as `YYYY-MM-DD`
    pub fn release_date(&self) -> String {
        self.released
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Numeric rating for ordering; unrated games sort last
    pub fn rating_value(&self) -> f64 {
        self.rating
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(f64::NEG_INFINITY)
    }

    /// Rating exactly as received, e.g. `4.0/5`
    pub fn rating_label(&self) -> String {
        match &self.rating {
            Some(rating) => format!("{}/5", rating),
            None => UNKNOWN.to_string(),
        }
    }
}

/// A genre as returned by the `genres` resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}
