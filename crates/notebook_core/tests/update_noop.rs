use notebook_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn page_load_requests_one_notebook_refresh() {
    let (mut next, effects) = update(AppState::new(), Msg::PageLoaded);

    assert_eq!(effects, vec![notebook_core::Effect::RefreshNotebooks]);
    assert!(!next.consume_dirty());
}
