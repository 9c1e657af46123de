//! Common test utilities for integration tests

use chrono::NaiveDate;
use marquee_backend::api::Movie;

/// Initializes log output for a test; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a test movie
pub fn make_movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        poster_url: "https://example.com/poster.jpg".to_string(),
        summary: "A test movie.".to_string(),
        duration: "PT1H30M".to_string(),
        directors: vec!["Test Director".to_string()],
        main_actors: vec!["Test Actor".to_string()],
        genres: None,
        date_published: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        rating: "PG-13".to_string(),
        rating_value: 7.0,
        best_rating: 10.0,
        worst_rating: 1.0,
        writers: vec![],
    }
}

/// Creates many test movies for bulk testing
pub fn make_many_movies(count: usize) -> Vec<Movie> {
    (0..count)
        .map(|i| make_movie(&i.to_string(), &format!("Movie {}", i)))
        .collect()
}
