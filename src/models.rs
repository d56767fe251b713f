use std::fmt;

use jiff::civil::Date;
use serde::Deserialize;

/// Display/selection key assigned by position in the fetched sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct FilmId(pub u32);

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    pub director: String,
    pub producer: String,
    pub release_date: Date,
}

impl Film {
    pub fn release_year(&self) -> i16 {
        self.release_date.year()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortMode {
    #[default]
    None,
    Episode,
    Year,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Episode, SortMode::Year];

    /// Form value of the sort select.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "",
            SortMode::Episode => "episode",
            SortMode::Year => "year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" => Some(SortMode::None),
            "episode" => Some(SortMode::Episode),
            "year" => Some(SortMode::Year),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "Sort by",
            SortMode::Episode => "Sort by Episode",
            SortMode::Year => "Sort by Release Year",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SortForm {
    #[serde(default)]
    pub sort: String,
}
