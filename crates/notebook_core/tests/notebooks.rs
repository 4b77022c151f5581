use notebook_core::{update, AppState, Msg, NotebookSummary, NOTEBOOK_LIST_LIMIT};

fn notebook(index: usize) -> NotebookSummary {
    NotebookSummary {
        filename: format!("eda_notebook_{index}.ipynb"),
        created: format!("2024-05-0{}T10:00:00", index % 9 + 1),
        size_bytes: 1024 * index as u64,
        download_url: format!("/api/download/eda_notebook_{index}.ipynb"),
    }
}

#[test]
fn refresh_renders_at_most_five_in_source_order() {
    let entries: Vec<_> = (0..8).map(notebook).collect();
    let (mut state, effects) = update(AppState::new(), Msg::NotebooksLoaded(entries.clone()));

    let shown = state.view().notebooks.expect("list rendered");
    assert_eq!(shown.len(), NOTEBOOK_LIST_LIMIT);
    assert_eq!(shown, entries[..5].to_vec());
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn shorter_lists_are_kept_whole() {
    let entries = vec![notebook(3), notebook(1)];
    let (state, _) = update(AppState::new(), Msg::NotebooksLoaded(entries.clone()));

    assert_eq!(state.view().notebooks, Some(entries));
}

#[test]
fn empty_refresh_leaves_the_list_untouched() {
    let (mut state, _) = update(AppState::new(), Msg::NotebooksLoaded(vec![notebook(1)]));
    state.consume_dirty();
    let before = state.view();

    let (mut state, effects) = update(state, Msg::NotebooksLoaded(Vec::new()));

    assert_eq!(state.view(), before);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn empty_refresh_before_any_load_renders_nothing() {
    let (mut state, _) = update(AppState::new(), Msg::NotebooksLoaded(Vec::new()));

    assert_eq!(state.view().notebooks, None);
    assert!(!state.consume_dirty());
}

#[test]
fn failed_refresh_is_silent() {
    engine_logging::initialize_for_tests();
    let (mut state, _) = update(AppState::new(), Msg::NotebooksLoaded(vec![notebook(2)]));
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::NotebooksFailed("connection refused".into()));

    assert_eq!(state, before);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}
