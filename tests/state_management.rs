//! Integration tests for filter state management

use marquee_backend::state::{FilterStore, GenreFilter};

#[tokio::test]
async fn searching_resets_pagination() {
    let store = FilterStore::new();
    store.set_current_page(5).await;

    store.set_search_term("blade runner").await;

    let filters = store.get().await;
    assert_eq!(filters.search_term, "blade runner");
    assert_eq!(filters.current_page, 1);
}

#[tokio::test]
async fn selecting_a_genre_resets_pagination() {
    let store = FilterStore::new();
    store.set_search_term("alien").await;
    store.set_current_page(4).await;

    store
        .set_selected_genre(Some(GenreFilter::Genre("Horror".to_string())))
        .await;

    let filters = store.get().await;
    assert_eq!(filters.current_page, 1);
    // Search survives a genre change
    assert_eq!(filters.search_term, "alien");
}

#[tokio::test]
async fn paging_preserves_search_and_genre() {
    let store = FilterStore::new();
    store.set_search_term("alien").await;
    store
        .set_selected_genre(Some(GenreFilter::Genre("Horror".to_string())))
        .await;

    store.set_current_page(3).await;

    let filters = store.get().await;
    assert_eq!(filters.current_page, 3);
    assert_eq!(filters.search_term, "alien");
    assert_eq!(
        filters.selected_genre,
        Some(GenreFilter::Genre("Horror".to_string()))
    );
}

#[tokio::test]
async fn favorites_view_builds_local_only_query() {
    let store = FilterStore::new();
    store.set_selected_genre(Some(GenreFilter::Favorites)).await;

    let filters = store.get().await;
    assert!(filters.showing_favorites());

    // The favorites view filters locally; nothing is sent upstream for it
    let query = filters.movie_query();
    assert_eq!(query.genre, None);
    assert_eq!(query.search, None);
}

#[tokio::test]
async fn filter_changes_notify_subscribers() {
    let store = FilterStore::new();
    let mut rx = store.subscribe();

    store.set_search_term("dune").await;

    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().search_term, "dune");
}

#[tokio::test]
async fn reset_restores_default_selection() {
    let store = FilterStore::new();
    store.set_search_term("dune").await;
    store.set_selected_genre(Some(GenreFilter::Favorites)).await;
    store.set_current_page(9).await;

    store.reset().await;

    let filters = store.get().await;
    assert_eq!(filters.search_term, "");
    assert_eq!(filters.selected_genre, None);
    assert_eq!(filters.current_page, 1);
}
