mod models;
mod store;
mod tables;

pub use models::{
    GenreFrequencyEntry, GenreScoreEntry, PopularityEntry, StudioScoreEntry,
    YearDistributionEntry,
};
pub use store::AnalyticsStore;
pub use tables::StaticAnalyticsStore;
