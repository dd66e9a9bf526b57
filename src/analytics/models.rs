use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenreFrequencyEntry {
    pub genre: String,
    pub frequency: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GenreScoreEntry {
    pub genre: String,
    pub average_score: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudioScoreEntry {
    pub studio: String,
    pub average_score: f64,
    /// Number of titles the average was computed over.
    pub count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct YearDistributionEntry {
    pub year: i32,
    pub count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PopularityEntry {
    pub name: String,
    pub members: u64,
    pub score: f64,
}
