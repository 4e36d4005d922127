//! Input dataset schema.
//!
//! Mirrors the JSON document we read:
//!
//! ```json
//! {
//!   "distances": { "5K": 5, "Half Marathon": 21.0975 },
//!   "races": [
//!     { "name": "Parkrun", "date": "2016-05-14", "type": "5K",
//!       "chip_time": "0:21:30", "position": 12, "participants": 240,
//!       "url": "https://...", "strava": "https://..." }
//!   ]
//! }
//! ```

use chrono::NaiveDate;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole dataset as loaded from disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    /// Race categories, in the key order of the `distances` object
    #[serde(rename = "distances", deserialize_with = "deserialize_categories")]
    pub categories: Vec<Category>,

    /// Races, in file order
    pub races: Vec<Race>,
}

impl Dataset {
    /// Distance in km for a category name, if the category is known
    pub fn distance_for(&self, category: &str) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.distance_km)
    }

    /// Races whose category is missing from `distances`
    pub fn unknown_category_races(&self) -> impl Iterator<Item = &Race> {
        self.races
            .iter()
            .filter(move |r| self.distance_for(&r.category).is_none())
    }
}

/// A named race-distance class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub distance_km: f64,
}

impl Category {
    pub fn new(name: impl Into<String>, distance_km: f64) -> Self {
        Self {
            name: name.into(),
            distance_km,
        }
    }
}

/// One race result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub name: String,

    /// Calendar date (`YYYY-MM-DD`)
    pub date: NaiveDate,

    /// Category name, looked up in `distances`
    #[serde(rename = "type")]
    pub category: String,

    /// Elapsed time as `H:MM:SS`
    pub chip_time: String,

    /// Finishing position (1-based)
    pub position: u32,

    /// Number of finishers
    pub participants: u32,

    /// Result page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Activity tracking page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strava: Option<String>,
}

/// Deserialize the `distances` object keeping document order.
///
/// A repeated key keeps its first position and takes the last value.
fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CategoriesVisitor;

    impl<'de> Visitor<'de> for CategoriesVisitor {
        type Value = Vec<Category>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of category name to distance in km")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut categories: Vec<Category> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, distance_km)) = map.next_entry::<String, f64>()? {
                match categories.iter_mut().find(|c| c.name == name) {
                    Some(existing) => existing.distance_km = distance_km,
                    None => categories.push(Category { name, distance_km }),
                }
            }
            Ok(categories)
        }
    }

    deserializer.deserialize_map(CategoriesVisitor)
}
