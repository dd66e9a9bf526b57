use super::models::*;

/// Read-only source of the precomputed dataset aggregates.
///
/// Every getter returns the whole table in its presentation order. The
/// implementations are expected to be immutable once constructed, so callers
/// can share them across request handlers without any locking.
pub trait AnalyticsStore: Send + Sync {
    /// Genres ordered by descending number of titles.
    fn get_genre_frequencies(&self) -> Vec<GenreFrequencyEntry>;

    fn get_genre_scores(&self) -> Vec<GenreScoreEntry>;

    fn get_studio_scores(&self) -> Vec<StudioScoreEntry>;

    fn get_year_distribution(&self) -> Vec<YearDistributionEntry>;

    fn get_popularity_vs_rating(&self) -> Vec<PopularityEntry>;

    /// The genre vocabulary understood by the score estimator.
    ///
    /// The position of each genre is its feature column, so the order must
    /// never change while a model trained on it is alive.
    fn get_available_genres(&self) -> Vec<String>;
}
