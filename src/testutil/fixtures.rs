//! Test fixtures
//!
//! Raw API payloads for deserialization tests, captured in the shapes the
//! catalog service actually sends.

/// A full movie record as returned by `GET /movies/{id}`
pub const MOVIE_JSON: &str = r#"{
    "id": "7GQMaTpw7B0MInjOHis5yu",
    "title": "Inception",
    "posterUrl": "https://images.example.com/inception.jpg",
    "summary": "A thief who steals corporate secrets through dream-sharing technology is given the inverse task of planting an idea.",
    "duration": "PT2H28M",
    "directors": ["Christopher Nolan"],
    "mainActors": ["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page"],
    "genres": [
        {"id": "genre-action", "title": "Action"},
        {"id": "genre-scifi", "title": "Sci-Fi"}
    ],
    "datePublished": "2010-07-16",
    "rating": "PG-13",
    "ratingValue": 8.8,
    "bestRating": 10,
    "worstRating": 1,
    "writers": ["Christopher Nolan"]
}"#;

/// A movie record whose genres field is null rather than a list
pub const MOVIE_JSON_NULL_GENRES: &str = r#"{
    "id": "movie-no-genres",
    "title": "Untagged",
    "posterUrl": "https://images.example.com/untagged.jpg",
    "summary": "No genre tags on this one.",
    "duration": "PT1H40M",
    "directors": [],
    "mainActors": [],
    "genres": null,
    "datePublished": "2019-03-01",
    "rating": "R",
    "ratingValue": 6.1,
    "bestRating": 10,
    "worstRating": 1,
    "writers": []
}"#;

/// A genre with embedded partial movie records, as returned by
/// `GET /genres/movies`
pub const GENRE_JSON: &str = r#"{
    "id": "genre-action",
    "title": "Action",
    "movies": [
        {"id": "m1", "title": "Heat", "posterUrl": "https://images.example.com/heat.jpg", "rating": "R"},
        {"id": "m2"}
    ]
}"#;
