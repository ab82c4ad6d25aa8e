//! Integration tests for the full fetch-and-save pipeline.
//!
//! Each test points the pipeline at a mock image service and saves into a
//! temporary directory.

use std::io::Cursor;
use std::path::PathBuf;

use picsum_core::{FetchError, HttpClient, ImageOptions, PicsumError, SaveError, process_image};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JPEG: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg-body";

async fn mock_image(path_str: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG.to_vec()))
        .mount(&mock_server)
        .await;

    mock_server
}

async fn run(
    args: &[&str],
    options: ImageOptions,
    stdin: &[u8],
) -> (Result<PathBuf, PicsumError>, String) {
    let client = HttpClient::new().expect("client should build");
    let mut input = Cursor::new(stdin.to_vec());
    let mut output = Vec::new();
    let result = process_image(args, options, &client, &mut input, &mut output).await;
    (result, String::from_utf8(output).expect("utf-8"))
}

fn options_for(server: &MockServer, output: PathBuf) -> ImageOptions {
    ImageOptions {
        base_url: server.uri(),
        output: Some(output),
        ..ImageOptions::default()
    }
}

#[tokio::test]
async fn test_pipeline_seed_gray_blur_level_saves_image() {
    let mock_server = mock_image("/seed/picsum/300/200").await;
    let temp = TempDir::new().expect("failed to create temp dir");
    let destination = temp.path().join("seed_picsum_300x200_gray_blur8.jpg");

    let options = ImageOptions {
        seed: Some("picsum".to_string()),
        grayscale: true,
        blur_level: 8,
        ..options_for(&mock_server, destination.clone())
    };
    let (result, printed) = run(&["300", "200"], options, b"").await;
    let saved = result.expect("pipeline should succeed");

    assert_eq!(saved, destination);
    assert_eq!(std::fs::read(&saved).expect("read saved"), JPEG);

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("grayscale&blur=8"));

    assert!(printed.contains("Downloading from"), "got: {printed}");
    assert!(
        printed.ends_with(&format!("Image saved as {}\n", destination.display())),
        "got: {printed}"
    );
}

#[tokio::test]
async fn test_pipeline_blur_flag_with_level_uses_level_only() {
    let mock_server = mock_image("/300").await;
    let temp = TempDir::new().expect("failed to create temp dir");

    let options = ImageOptions {
        blur: true,
        blur_level: 5,
        quiet: true,
        ..options_for(&mock_server, temp.path().join("out.jpg"))
    };
    let (result, printed) = run(&["300"], options, b"").await;
    result.expect("pipeline should succeed");

    let requests = mock_server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert_eq!(requests[0].url.query(), Some("blur=5"));
    assert!(printed.is_empty(), "quiet run must print nothing");
}

#[tokio::test]
async fn test_pipeline_declined_overwrite_keeps_existing_file() {
    let mock_server = mock_image("/id/237/300").await;
    let temp = TempDir::new().expect("failed to create temp dir");
    let destination = temp.path().join("id_237_300.jpg");
    std::fs::write(&destination, b"keep me").expect("seed existing file");

    let options = ImageOptions {
        image_id: Some("237".to_string()),
        ..options_for(&mock_server, destination.clone())
    };
    let (result, printed) = run(&["300"], options, b"n\n").await;
    let err = result.expect_err("declined overwrite must fail");

    assert!(
        matches!(err, PicsumError::Save(SaveError::Cancelled { .. })),
        "got: {err}"
    );
    assert_eq!(std::fs::read(&destination).expect("read"), b"keep me");
    assert!(printed.contains("already exists. Overwrite? [y/N]: "), "got: {printed}");
}

#[tokio::test]
async fn test_pipeline_force_overwrites_existing_file() {
    let mock_server = mock_image("/300").await;
    let temp = TempDir::new().expect("failed to create temp dir");
    let destination = temp.path().join("300.jpg");
    std::fs::write(&destination, b"stale").expect("seed existing file");

    let options = ImageOptions {
        force: true,
        ..options_for(&mock_server, destination.clone())
    };
    let (result, printed) = run(&["300"], options, b"n\n").await;
    result.expect("pipeline should succeed");

    assert_eq!(std::fs::read(&destination).expect("read"), JPEG);
    assert!(!printed.contains("Overwrite?"), "force must not prompt: {printed}");
}

#[tokio::test]
async fn test_pipeline_server_error_writes_nothing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().expect("failed to create temp dir");
    let destination = temp.path().join("300.jpg");
    let options = options_for(&mock_server, destination.clone());
    let (result, _) = run(&["300"], options, b"").await;
    let err = result.expect_err("404 must fail");

    assert!(
        matches!(err, PicsumError::Fetch(FetchError::ServerStatus { status: 404, .. })),
        "got: {err}"
    );
    assert!(!destination.exists(), "no file is created on a failed fetch");
}
