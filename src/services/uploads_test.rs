use super::*;

fn temp_store(label: &str) -> AssetStore {
    let root = std::env::temp_dir().join(format!("folio-uploads-{label}-{}", std::process::id()));
    AssetStore::new(root, "http://localhost:3000")
}

#[test]
fn public_base_trailing_slashes_are_trimmed() {
    let store = AssetStore::new("/tmp/x", "https://example.com//");
    assert_eq!(store.public_url("profile/me.png"), "https://example.com/assets/profile/me.png");
}

#[tokio::test]
async fn save_writes_file_and_returns_public_url() {
    let store = temp_store("save");
    let url = store.save("profile", "me.png", b"png bytes").await.unwrap();
    assert_eq!(url, "http://localhost:3000/assets/profile/me.png");
    let on_disk = tokio::fs::read(store.root().join("profile/me.png")).await.unwrap();
    assert_eq!(on_disk, b"png bytes");
}

#[tokio::test]
async fn save_overwrites_existing_file_in_place() {
    let store = temp_store("overwrite");
    store.save("resume", "cv.pdf", b"v1").await.unwrap();
    let url = store.save("resume", "cv.pdf", b"v2").await.unwrap();
    assert_eq!(url, "http://localhost:3000/assets/resume/cv.pdf");
    let on_disk = tokio::fs::read(store.root().join("resume/cv.pdf")).await.unwrap();
    assert_eq!(on_disk, b"v2");
}

#[tokio::test]
async fn save_rejects_names_that_escape_the_root() {
    let store = temp_store("sanitize");
    for name in ["", "   ", ".", "..", "../evil", "a/b", "a\\b", "a\0b"] {
        let result = store.save("profile", name, b"x").await;
        assert!(matches!(result, Err(UploadError::InvalidName(_))), "accepted {name:?}");
    }
}

#[tokio::test]
async fn save_trims_surrounding_whitespace_from_name() {
    let store = temp_store("trim");
    let url = store.save("profile", "  me.png  ", b"x").await.unwrap();
    assert_eq!(url, "http://localhost:3000/assets/profile/me.png");
}
