use game_browser::{Catalog, FavoritesStore, MenuController, StaticSource};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

fn source() -> StaticSource {
    StaticSource::new()
        .with_response(
            "games",
            json!({"count": 1, "results": [{
                "id": 58175,
                "name": "Celeste",
                "released": "2018-01-25",
                "rating": 4.33,
                "genres": [{"id": 51, "name": "Indie"}],
                "platforms": [{"platform": {"id": 4, "name": "PC"}}]
            }]}),
        )
        .with_response("genres", json!({"results": [{"id": 51, "name": "Indie"}]}))
}

async fn run_session(store: FavoritesStore, input: &str) -> String {
    let mut menu = MenuController::new(
        Catalog::new(Arc::new(source())),
        store,
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    );
    menu.run().await.unwrap();
    String::from_utf8(menu.output().clone()).unwrap()
}

#[tokio::test]
async fn test_full_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = FavoritesStore::new(dir.path().join("favorite_games.txt"));

    // search + save, top games, view favorites, quit
    let input = "1\nceleste\nyes\nno\n2\n1\nno\n3\n\n4\n";
    let out = run_session(store.clone(), input).await;

    assert!(out.contains("Title: Celeste"));
    assert!(out.contains("Celeste has been added to your favorite list."));
    assert!(out.contains("Top 10 games in Indie"));
    assert!(out.contains("1. Celeste (rating: 4.33/5)"));
    assert!(out.contains("Your favorite games:\n1. Celeste\n"));
    assert!(out.trim_end().ends_with("Have a nice day!"));

    assert_eq!(store.list().unwrap(), vec!["Celeste"]);
}

#[tokio::test]
async fn test_favorites_survive_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let store = FavoritesStore::new(dir.path().join("favorite_games.txt"));

    run_session(store.clone(), "1\nceleste\nyes\nno\n4\n").await;
    let out = run_session(store.clone(), "1\nceleste\nyes\nno\n4\n").await;

    assert!(out.contains("Celeste is already in your favorite list."));
    assert_eq!(
        std::fs::read_to_string(store.path()).unwrap(),
        "Celeste\n"
    );
}

#[tokio::test]
async fn test_invalid_menu_choice_has_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let store = FavoritesStore::new(dir.path().join("favorite_games.txt"));

    let out = run_session(store.clone(), "9\n4\n").await;

    assert_eq!(out.matches("Invalid input, please enter a valid input").count(), 1);
    assert!(!store.path().exists());
}
