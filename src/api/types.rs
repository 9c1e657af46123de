use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A movie record from the catalog API
///
/// Movies are immutable value objects; the client only ever stores copies
/// (for example in the favorites list), never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub summary: String,
    /// ISO 8601 duration, e.g. "PT2H8M"
    pub duration: String,
    #[serde(default)]
    pub directors: Vec<String>,
    #[serde(default)]
    pub main_actors: Vec<String>,
    /// Genre tags without their embedded movie lists (the API omits those
    /// here to avoid circular payloads). May be null.
    #[serde(default)]
    pub genres: Option<Vec<GenreTag>>,
    pub date_published: NaiveDate,
    /// MPAA rating, e.g. "PG-13"
    pub rating: String,
    /// User score within [worst_rating, best_rating]
    pub rating_value: f64,
    pub best_rating: f64,
    pub worst_rating: f64,
    #[serde(default)]
    pub writers: Vec<String>,
}

impl Movie {
    /// Returns the runtime in minutes parsed from the ISO 8601 duration
    pub fn runtime_minutes(&self) -> u32 {
        duration_minutes(&self.duration)
    }

    /// Returns a human-readable runtime string, e.g. "128 min"
    pub fn format_duration(&self) -> String {
        parse_duration(&self.duration)
    }
}

/// Converts an ISO 8601 duration like "PT2H8M" into "128 min"
pub fn parse_duration(duration: &str) -> String {
    format!("{} min", duration_minutes(duration))
}

fn duration_minutes(duration: &str) -> u32 {
    let hours = number_before(duration, 'H');
    let minutes = number_before(duration, 'M');
    hours * 60 + minutes
}

/// Extracts the digits immediately preceding `marker`, or 0 if absent
fn number_before(s: &str, marker: char) -> u32 {
    let Some(end) = s.find(marker) else {
        return 0;
    };
    let start = s[..end]
        .rfind(|c: char| !c.is_ascii_digit())
        .map_or(0, |i| i + 1);
    s[start..end].parse().unwrap_or(0)
}

/// The partial movie shape embedded in genre listings
///
/// The API sends only a subset of fields here; anything missing defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub rating: String,
}

/// A genre tag attached to a movie record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreTag {
    pub id: String,
    pub title: Option<String>,
}

/// A genre with its (possibly partial) embedded movie list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub movies: Vec<MovieSummary>,
}

/// A page of records with the total page count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_pages: u32,
}

/// Query parameters for movie listings
///
/// Unset fields are omitted from the request; `page` and `limit` fall back
/// to the configured defaults when not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::fixtures;

    // === parse_duration tests ===

    #[test]
    fn duration_hours_and_minutes() {
        assert_eq!(parse_duration("PT2H8M"), "128 min");
    }

    #[test]
    fn duration_ninety_minutes() {
        assert_eq!(parse_duration("PT1H30M"), "90 min");
    }

    #[test]
    fn duration_minutes_only() {
        assert_eq!(parse_duration("PT45M"), "45 min");
    }

    #[test]
    fn duration_zero() {
        assert_eq!(parse_duration("PT0M"), "0 min");
    }

    #[test]
    fn duration_hours_only() {
        assert_eq!(parse_duration("PT2H"), "120 min");
    }

    #[test]
    fn duration_garbage_is_zero() {
        assert_eq!(parse_duration("not a duration"), "0 min");
        assert_eq!(parse_duration(""), "0 min");
    }

    #[test]
    fn movie_format_duration() {
        let movie = crate::testutil::builders::make_movie_with_duration("1", "Inception", "PT2H28M");
        assert_eq!(movie.format_duration(), "148 min");
        assert_eq!(movie.runtime_minutes(), 148);
    }

    // === deserialization tests ===

    #[test]
    fn movie_parses_from_api_payload() {
        let movie: Movie = serde_json::from_str(fixtures::MOVIE_JSON).unwrap();

        assert_eq!(movie.id, "7GQMaTpw7B0MInjOHis5yu");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.duration, "PT2H28M");
        assert_eq!(movie.directors, vec!["Christopher Nolan"]);
        assert_eq!(movie.rating, "PG-13");
        assert!((movie.rating_value - 8.8).abs() < f64::EPSILON);
        assert_eq!(
            movie.date_published,
            NaiveDate::from_ymd_opt(2010, 7, 16).unwrap()
        );

        let genres = movie.genres.unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[0].title.as_deref(), Some("Action"));
    }

    #[test]
    fn movie_tolerates_null_genres() {
        let movie: Movie = serde_json::from_str(fixtures::MOVIE_JSON_NULL_GENRES).unwrap();
        assert!(movie.genres.is_none());
    }

    #[test]
    fn genre_parses_with_partial_movies() {
        let genre: Genre = serde_json::from_str(fixtures::GENRE_JSON).unwrap();

        assert_eq!(genre.id, "genre-action");
        assert_eq!(genre.title.as_deref(), Some("Action"));
        assert_eq!(genre.movies.len(), 2);
        // The second entry carries only an id; the rest defaults
        assert_eq!(genre.movies[1].id, "m2");
        assert!(genre.movies[1].title.is_empty());
    }

    #[test]
    fn genre_title_may_be_null() {
        let genre: Genre =
            serde_json::from_str(r#"{"id": "g1", "title": null, "movies": []}"#).unwrap();
        assert!(genre.title.is_none());
    }

    #[test]
    fn page_maps_total_pages() {
        let page: Page<MovieSummary> =
            serde_json::from_str(r#"{"data": [], "totalPages": 14}"#).unwrap();
        assert_eq!(page.total_pages, 14);
        assert!(page.data.is_empty());
    }

    #[test]
    fn movie_serialization_roundtrip() {
        let movie = crate::testutil::builders::make_movie("42", "Heat");
        let json = serde_json::to_string(&movie).unwrap();

        // Persisted favorites use the same camelCase shape as the API
        assert!(json.contains("\"posterUrl\""));
        assert!(json.contains("\"datePublished\""));

        let parsed: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, movie);
    }
}
