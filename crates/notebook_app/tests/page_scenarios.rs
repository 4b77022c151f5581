use std::path::PathBuf;
use std::time::Duration;

use notebook_app::platform::ui::{MemorySurface, NotebookRow, PageCommand, Region};
use notebook_app::platform::{EffectRunner, Page};
use notebook_core::{FormField, Msg, SelectedFile, SubmissionState};
use notebook_engine::{ClientSettings, EngineHandle, EngineSettings, TimerSettings};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn fast_settings(base_url: String) -> EngineSettings {
    EngineSettings {
        client: ClientSettings {
            base_url,
            ..ClientSettings::default()
        },
        timers: TimerSettings {
            progress_interval: Duration::from_millis(10),
            settle_delay: Duration::from_millis(20),
        },
    }
}

fn write_csv(dir: &tempfile::TempDir, name: &str, size: usize) -> SelectedFile {
    let path: PathBuf = dir.path().join(name);
    let mut content = b"region,revenue\n".to_vec();
    content.resize(size, b'1');
    std::fs::write(&path, &content).unwrap();
    SelectedFile::from_path(&path, size as u64)
}

/// Loads the page, selects `file`, submits and waits for every request and
/// timer to report back. Runs off the async test thread because the page
/// loop blocks.
async fn submit_and_wait(
    server: &MockServer,
    surface: MemorySurface,
    file: SelectedFile,
) -> Page<MemorySurface> {
    let settings = fast_settings(server.uri());
    tokio::task::spawn_blocking(move || {
        let engine = EngineHandle::new(settings).expect("engine");
        let mut page = Page::new(EffectRunner::new(engine), surface);
        page.dispatch(Msg::PageLoaded);
        page.dispatch(Msg::FileChosen(file));
        page.dispatch(Msg::SubmitClicked {
            fields: vec![FormField::new("task_description", "Explore revenue")],
        });
        page.run_until_quiet();
        page
    })
    .await
    .expect("page loop")
}

async fn notebook_fetches(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == "/api/notebooks")
        .count()
}

fn mount_notebooks(body: serde_json::Value) -> Mock {
    Mock::given(method("GET"))
        .and(path("/api/notebooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
}

fn notebook_json(index: usize) -> serde_json::Value {
    serde_json::json!({
        "filename": format!("eda_notebook_{index}.ipynb"),
        "created": "2024-05-01T09:00:00",
        "size": 1024,
        "download_url": format!("/api/download/eda_notebook_{index}.ipynb"),
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_generation_reaches_complete_and_refreshes_the_list() {
    init_logging();
    let server = MockServer::start().await;
    mount_notebooks(serde_json::json!({
        "notebooks": (0..7).map(notebook_json).collect::<Vec<_>>()
    }))
    .mount(&server)
    .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(60))
                .set_body_json(serde_json::json!({
                    "sections_generated": 7,
                    "notebook_filename": "sales_analysis.ipynb",
                    "download_url": "/download/abc"
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_csv(&dir, "sales.csv", 2_621_440);
    let page = submit_and_wait(&server, MemorySurface::new(), file).await;
    let surface = page.surface();

    assert_eq!(page.view().submission, SubmissionState::Succeeded);
    assert_eq!(surface.region(Region::FileInfo).text, "sales.csv (2.50 MB)");
    assert!(surface.region(Region::FileInfo).visible);

    // The bar reaches 100% and no late tick drags it back afterwards.
    let widths: Vec<u8> = surface
        .history()
        .iter()
        .filter_map(|cmd| match cmd {
            PageCommand::SetWidthPercent { percent, .. } => Some(*percent),
            _ => None,
        })
        .collect();
    let complete_at = widths.iter().position(|w| *w == 100).expect("reached 100%");
    assert!(widths[complete_at..].iter().all(|w| *w == 100), "{widths:?}");

    assert!(surface.region(Region::ResultSection).visible);
    assert_eq!(
        surface.region(Region::ResultMessage).text,
        "Generated 7 sections in sales_analysis.ipynb"
    );
    assert_eq!(
        surface.region(Region::DownloadLink).href.as_deref(),
        Some("/download/abc")
    );
    assert!(!surface.region(Region::ProgressSection).visible);
    assert!(!surface.region(Region::ErrorSection).visible);
    assert!(surface.region(Region::GenerateButton).enabled);

    assert_eq!(surface.region(Region::NotebooksList).rows.len(), 5);
    assert_eq!(notebook_fetches(&server).await, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_generation_shows_the_detail() {
    init_logging();
    let server = MockServer::start().await;
    mount_notebooks(serde_json::json!({ "notebooks": [] }))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({ "detail": "Missing target column" })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_csv(&dir, "sales.csv", 64);
    let page = submit_and_wait(&server, MemorySurface::new(), file).await;
    let surface = page.surface();

    assert_eq!(page.view().submission, SubmissionState::Failed);
    assert!(surface.region(Region::ErrorSection).visible);
    assert_eq!(surface.region(Region::ErrorMessage).text, "Missing target column");
    assert!(!surface.region(Region::ProgressSection).visible);
    assert!(!surface.region(Region::ResultSection).visible);
    assert!(surface.region(Region::GenerateButton).enabled);
    assert_eq!(notebook_fetches(&server).await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn submit_is_disabled_while_the_request_is_in_flight() {
    init_logging();
    let server = MockServer::start().await;
    mount_notebooks(serde_json::json!({})).mount(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_delay(Duration::from_millis(40))
                .set_body_string("Internal Server Error"),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = write_csv(&dir, "sales.csv", 64);
    let page = submit_and_wait(&server, MemorySurface::new(), file).await;
    let surface = page.surface();

    let toggles: Vec<bool> = surface
        .history()
        .iter()
        .filter_map(|cmd| match cmd {
            PageCommand::SetEnabled {
                region: Region::GenerateButton,
                enabled,
            } => Some(*enabled),
            _ => None,
        })
        .collect();
    assert_eq!(toggles.first(), Some(&true));
    assert!(toggles.contains(&false));
    assert_eq!(toggles.last(), Some(&true));
    assert_eq!(
        surface.region(Region::ErrorMessage).text,
        "Notebook generation failed (HTTP 500)"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_notebook_index_leaves_the_list_as_it_was() {
    init_logging();
    let server = MockServer::start().await;
    mount_notebooks(serde_json::json!({ "notebooks": [] }))
        .mount(&server)
        .await;

    let placeholder = vec![NotebookRow {
        title: "No notebooks yet".into(),
        meta: String::new(),
        href: String::new(),
    }];
    let surface = MemorySurface::new().with_rows(placeholder.clone());
    let settings = fast_settings(server.uri());

    let page = tokio::task::spawn_blocking(move || {
        let engine = EngineHandle::new(settings).expect("engine");
        let mut page = Page::new(EffectRunner::new(engine), surface);
        page.dispatch(Msg::PageLoaded);
        page.run_until_quiet();
        page
    })
    .await
    .expect("page loop");

    let surface = page.surface();
    assert_eq!(surface.region(Region::NotebooksList).rows, placeholder);
    assert!(!surface
        .history()
        .iter()
        .any(|cmd| matches!(cmd, PageCommand::ReplaceList { .. })));
    assert_eq!(notebook_fetches(&server).await, 1);
}
