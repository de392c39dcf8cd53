//! Integration tests for favorites persistence.
//!
//! These go through the real filesystem using nonce-named temp directories.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::DateTime;
use gitscope::store::{FavoriteCommit, FavoritesList, FavoritesStore};

fn temp_dir() -> std::path::PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("gitscope-favorites-test-{nonce}"))
}

fn favorite(sha: &str) -> FavoriteCommit {
    FavoriteCommit {
        sha: sha.to_string(),
        message: "Initial commit".to_string(),
        author: "Monalisa Octocat".to_string(),
        date: DateTime::from_timestamp(1302796849, 0).unwrap(),
        repo_name: "Hello-World".to_string(),
        username: "octocat".to_string(),
        avatar_url: Some("https://avatars.example/u/583231".to_string()),
    }
}

#[test]
fn save_and_load_round_trips_through_the_file() {
    let dir = temp_dir();
    let store = FavoritesStore::new(dir.join("favorites.json"));

    let mut list = FavoritesList::default();
    list.add(favorite("6dcb09b5b57875f334f61aebed695e2e4193db5e"));
    list.add(favorite("762941318ee16e59dabbacb1b4049eec22f0d303"));
    store.save(&list).expect("save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.len(), 2);
    assert!(loaded.contains("6dcb09b5b57875f334f61aebed695e2e4193db5e"));

    let first = &loaded.as_slice()[0];
    assert_eq!(first.author, "Monalisa Octocat");
    assert_eq!(first.date.timestamp(), 1302796849);

    std::fs::remove_dir_all(&dir).expect("test directory should be removable");
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = temp_dir();
    let store = FavoritesStore::new(dir.join("deeply").join("nested").join("favorites.json"));

    let mut list = FavoritesList::default();
    list.add(favorite("6dcb09b5b57875f334f61aebed695e2e4193db5e"));
    store.save(&list).expect("save should create parents");

    assert!(store.path().exists());
    std::fs::remove_dir_all(&dir).expect("test directory should be removable");
}

#[test]
fn loads_the_persisted_browser_format() {
    // The on-disk shape matches what the browser build of the explorer kept
    // in localStorage: a bare array of camelCase snapshots.
    let dir = temp_dir();
    let path = dir.join("favorites.json");
    std::fs::create_dir_all(&dir).expect("create test dir");
    std::fs::write(
        &path,
        r#"[{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "message": "Fix all the bugs",
            "author": "Monalisa Octocat",
            "date": "2011-04-14T16:00:49Z",
            "repoName": "Hello-World",
            "username": "octocat",
            "avatarUrl": "https://avatars.example/u/583231"
        }]"#,
    )
    .expect("write fixture");

    let loaded = FavoritesStore::new(&path).load().expect("load should succeed");
    assert_eq!(loaded.len(), 1);
    let fav = &loaded.as_slice()[0];
    assert_eq!(fav.repo_name, "Hello-World");
    assert_eq!(fav.avatar_url.as_deref(), Some("https://avatars.example/u/583231"));

    std::fs::remove_dir_all(&dir).expect("test directory should be removable");
}

#[test]
fn corrupt_file_is_an_error_not_an_empty_list() {
    let dir = temp_dir();
    let path = dir.join("favorites.json");
    std::fs::create_dir_all(&dir).expect("create test dir");
    std::fs::write(&path, "{\"definitely\": \"not an array\"").expect("write fixture");

    let err = FavoritesStore::new(&path).load().expect_err("corrupt content should error");
    assert!(err.to_string().contains("corrupt"));

    std::fs::remove_dir_all(&dir).expect("test directory should be removable");
}

#[test]
fn duplicate_shas_in_one_session_persist_once() {
    let dir = temp_dir();
    let store = FavoritesStore::new(dir.join("favorites.json"));

    let mut list = FavoritesList::default();
    assert!(list.add(favorite("6dcb09b5b57875f334f61aebed695e2e4193db5e")));
    assert!(!list.add(favorite("6dcb09b5b57875f334f61aebed695e2e4193db5e")));
    store.save(&list).expect("save should succeed");

    let loaded = store.load().expect("load should succeed");
    assert_eq!(loaded.len(), 1);

    std::fs::remove_dir_all(&dir).expect("test directory should be removable");
}
