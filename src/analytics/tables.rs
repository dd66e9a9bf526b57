//! Precomputed aggregates of the Kaggle anime dataset.

use super::models::*;
use super::store::AnalyticsStore;

const GENRE_FREQUENCIES: &[(&str, u32)] = &[
    ("Comedy", 2847),
    ("Action", 2456),
    ("Drama", 2234),
    ("Adventure", 1876),
    ("Fantasy", 1654),
    ("Romance", 1432),
    ("Sci-Fi", 1234),
    ("Slice of Life", 1123),
    ("Supernatural", 987),
    ("Thriller", 876),
];

const GENRE_SCORES: &[(&str, f64)] = &[
    ("Music", 7.89),
    ("Drama", 7.45),
    ("Romance", 7.23),
    ("Adventure", 7.12),
    ("Fantasy", 7.08),
    ("Action", 6.98),
    ("Comedy", 6.87),
    ("Sci-Fi", 6.76),
    ("Slice of Life", 6.65),
    ("Supernatural", 6.54),
];

const STUDIO_SCORES: &[(&str, f64, u32)] = &[
    ("Studio Ghibli", 8.45, 12),
    ("Madhouse", 7.89, 156),
    ("Bones", 7.67, 89),
    ("Mappa", 7.56, 45),
    ("Ufotable", 7.45, 23),
    ("Pierrot", 7.23, 134),
    ("Toei Animation", 7.12, 234),
    ("A-1 Pictures", 7.01, 167),
];

const YEAR_DISTRIBUTION: &[(i32, u32)] = &[
    (2000, 45),
    (2005, 78),
    (2010, 156),
    (2015, 234),
    (2020, 189),
    (2023, 123),
];

const POPULARITY_VS_RATING: &[(&str, u64, f64)] = &[
    ("Attack on Titan", 2_500_000, 9.0),
    ("Death Note", 2_200_000, 9.0),
    ("One Piece", 1_800_000, 8.9),
    ("Naruto", 1_600_000, 8.4),
    ("Dragon Ball Z", 1_500_000, 8.8),
    ("My Hero Academia", 1_400_000, 8.6),
    ("Demon Slayer", 1_300_000, 8.7),
    ("One Punch Man", 1_200_000, 8.8),
];

const AVAILABLE_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Supernatural",
    "Thriller",
    "Horror",
    "Mystery",
    "Sports",
    "Music",
    "School",
    "Military",
    "Historical",
    "Mecha",
    "Psychological",
    "Adult Content",
];

/// In-memory [`AnalyticsStore`] holding the fixed dashboard tables.
///
/// Tables are materialized once in [`StaticAnalyticsStore::new`] and cloned
/// out on every read.
#[derive(Clone, Debug)]
pub struct StaticAnalyticsStore {
    genre_frequencies: Vec<GenreFrequencyEntry>,
    genre_scores: Vec<GenreScoreEntry>,
    studio_scores: Vec<StudioScoreEntry>,
    year_distribution: Vec<YearDistributionEntry>,
    popularity_vs_rating: Vec<PopularityEntry>,
    available_genres: Vec<String>,
}

impl StaticAnalyticsStore {
    pub fn new() -> Self {
        StaticAnalyticsStore {
            genre_frequencies: GENRE_FREQUENCIES
                .iter()
                .map(|(genre, frequency)| GenreFrequencyEntry {
                    genre: genre.to_string(),
                    frequency: *frequency,
                })
                .collect(),
            genre_scores: GENRE_SCORES
                .iter()
                .map(|(genre, average_score)| GenreScoreEntry {
                    genre: genre.to_string(),
                    average_score: *average_score,
                })
                .collect(),
            studio_scores: STUDIO_SCORES
                .iter()
                .map(|(studio, average_score, count)| StudioScoreEntry {
                    studio: studio.to_string(),
                    average_score: *average_score,
                    count: *count,
                })
                .collect(),
            year_distribution: YEAR_DISTRIBUTION
                .iter()
                .map(|(year, count)| YearDistributionEntry {
                    year: *year,
                    count: *count,
                })
                .collect(),
            popularity_vs_rating: POPULARITY_VS_RATING
                .iter()
                .map(|(name, members, score)| PopularityEntry {
                    name: name.to_string(),
                    members: *members,
                    score: *score,
                })
                .collect(),
            available_genres: AVAILABLE_GENRES.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl Default for StaticAnalyticsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsStore for StaticAnalyticsStore {
    fn get_genre_frequencies(&self) -> Vec<GenreFrequencyEntry> {
        self.genre_frequencies.clone()
    }

    fn get_genre_scores(&self) -> Vec<GenreScoreEntry> {
        self.genre_scores.clone()
    }

    fn get_studio_scores(&self) -> Vec<StudioScoreEntry> {
        self.studio_scores.clone()
    }

    fn get_year_distribution(&self) -> Vec<YearDistributionEntry> {
        self.year_distribution.clone()
    }

    fn get_popularity_vs_rating(&self) -> Vec<PopularityEntry> {
        self.popularity_vs_rating.clone()
    }

    fn get_available_genres(&self) -> Vec<String> {
        self.available_genres.clone()
    }
}
