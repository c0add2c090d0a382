use super::test_helpers::test_app_state;

#[tokio::test]
async fn clones_share_the_same_asset_root() {
    let state = test_app_state();
    let clone = state.clone();
    assert_eq!(state.assets.root(), clone.assets.root());
}

#[tokio::test]
async fn content_store_is_constructible_from_state() {
    let state = test_app_state();
    let _store = state.content();
}
