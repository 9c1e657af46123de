//! Test data builders
//!
//! Provides builder patterns for creating test data with sensible defaults.

use chrono::NaiveDate;

use crate::api::{GenreTag, Movie, Page};

/// Builder for creating test Movie objects
#[derive(Debug, Clone)]
pub struct MovieBuilder {
    id: String,
    title: String,
    poster_url: String,
    summary: String,
    duration: String,
    directors: Vec<String>,
    main_actors: Vec<String>,
    genres: Option<Vec<GenreTag>>,
    date_published: NaiveDate,
    rating: String,
    rating_value: f64,
    writers: Vec<String>,
}

impl Default for MovieBuilder {
    fn default() -> Self {
        Self {
            id: "movie_123".to_string(),
            title: "Test Movie".to_string(),
            poster_url: "https://example.com/poster.jpg".to_string(),
            summary: "A test movie.".to_string(),
            duration: "PT1H30M".to_string(),
            directors: vec!["Test Director".to_string()],
            main_actors: vec!["Test Actor".to_string()],
            genres: None,
            date_published: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            rating: "PG-13".to_string(),
            rating_value: 7.0,
            writers: vec![],
        }
    }
}

impl MovieBuilder {
    /// Creates a new movie builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the movie ID
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the ISO 8601 duration, e.g. "PT2H8M"
    pub fn duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the summary text
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Adds a genre tag
    pub fn genre(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.genres.get_or_insert_with(Vec::new).push(GenreTag {
            id: id.into(),
            title: Some(title.into()),
        });
        self
    }

    /// Sets the MPAA rating and user score
    pub fn rated(mut self, rating: impl Into<String>, value: f64) -> Self {
        self.rating = rating.into();
        self.rating_value = value;
        self
    }

    /// Sets the publication date
    pub fn published(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date_published = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    /// Builds the Movie
    pub fn build(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title,
            poster_url: self.poster_url,
            summary: self.summary,
            duration: self.duration,
            directors: self.directors,
            main_actors: self.main_actors,
            genres: self.genres,
            date_published: self.date_published,
            rating: self.rating,
            rating_value: self.rating_value,
            best_rating: 10.0,
            worst_rating: 1.0,
            writers: self.writers,
        }
    }
}

/// Creates a test movie with the given id and title
pub fn make_movie(id: &str, title: &str) -> Movie {
    MovieBuilder::new().id(id).title(title).build()
}

/// Creates a test movie with a specific ISO 8601 duration
pub fn make_movie_with_duration(id: &str, title: &str, duration: &str) -> Movie {
    MovieBuilder::new()
        .id(id)
        .title(title)
        .duration(duration)
        .build()
}

/// Creates a page of records with the given total page count
pub fn make_page<T>(data: Vec<T>, total_pages: u32) -> Page<T> {
    Page { data, total_pages }
}
