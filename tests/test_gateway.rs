// Integration tests for Gateway module
// This file should be run with cargo test --test test_gateway

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;
use toolgate::{
    ActionOutcome, ActionRequest, Gateway, GatewayError, RunRequest, RunnerConfig, SandboxRunner,
    SearchClient, SearchConfig, SearchError, SitemapFetcher, SitemapSource, StorageConfig,
    OutputWriter,
};

const MANUAL_URL: &str = "https://docs.test/sitemap.xml";

struct CannedFetcher;

#[async_trait]
impl SitemapFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> toolgate::search::Result<String> {
        if url == MANUAL_URL {
            Ok(concat!(
                "<urlset>",
                "<url><loc>https://docs.test/guides/install-guide</loc></url>",
                "</urlset>"
            )
            .to_string())
        } else {
            Err(SearchError::FetchFailed("HTTP 503".to_string()))
        }
    }
}

fn gateway() -> (Gateway, TempDir) {
    let dir = tempfile::tempdir().unwrap();

    let runner = SandboxRunner::new(RunnerConfig::default());
    let writer = OutputWriter::new(StorageConfig {
        output_root: dir.path().join("out"),
    })
    .unwrap();

    let mut search_config = SearchConfig::default();
    search_config.manual = SitemapSource {
        name: "manual".to_string(),
        url: MANUAL_URL.to_string(),
    };
    let search = SearchClient::with_fetcher(search_config, Arc::new(CannedFetcher));

    (Gateway::new(runner, writer, search), dir)
}

/// /action with mode=run matches a direct run call exactly
#[tokio::test]
async fn test_dispatcher_transparency_for_run() {
    let (gateway, _dir) = gateway();

    let body = json!({
        "mode": "run",
        "language": "python",
        "code": "print('via dispatch')"
    });

    // Direct handler call; the unknown `mode` field is ignored
    let direct: RunRequest = serde_json::from_value(body.clone()).unwrap();
    let direct = gateway.run(direct).await.unwrap();

    let dispatched = gateway
        .dispatch(ActionRequest::from_value(body).unwrap())
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&dispatched).unwrap(),
        serde_json::to_value(&direct).unwrap(),
        "Dispatch must be transparent"
    );
}

/// Unknown and missing modes are rejected before any handler runs
#[tokio::test]
async fn test_invalid_mode_is_rejected() {
    for body in [json!({"mode": "explode"}), json!({"code": "print(1)"})] {
        let result = ActionRequest::from_value(body);
        assert!(
            matches!(result, Err(GatewayError::InvalidMode(_))),
            "Should reject bad mode, got: {result:?}"
        );
    }
}

/// Missing mode fields default leniently and fail in the handler
#[tokio::test]
async fn test_lenient_defaults_reach_handler() {
    let (gateway, _dir) = gateway();

    let action = ActionRequest::from_value(json!({"mode": "run"})).unwrap();
    let err = gateway.dispatch(action).await.unwrap_err();
    assert_eq!(
        err.kind(),
        "unsupported_language",
        "Empty language should fail in the runner, not the decoder"
    );
}

/// Fields with the wrong JSON type fail as malformed requests
#[tokio::test]
async fn test_wrong_field_type_is_malformed() {
    let result = ActionRequest::from_value(json!({"mode": "run", "timeoutMs": "soon"}));
    assert!(
        matches!(&result, Err(e) if e.kind() == "malformed_request"),
        "Got: {result:?}"
    );
}

/// Write errors pass through dispatch unchanged
#[tokio::test]
async fn test_dispatch_write_conflict_passthrough() {
    let (gateway, _dir) = gateway();

    let body = json!({"mode": "write", "path": "a.txt", "content": "one"});
    gateway
        .dispatch(ActionRequest::from_value(body).unwrap())
        .await
        .unwrap();

    let body = json!({"mode": "write", "path": "a.txt", "content": "two", "overwrite": false});
    let err = gateway
        .dispatch(ActionRequest::from_value(body).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "already_exists");
}

/// Conflict messages name the caller's path, not the server root
#[tokio::test]
async fn test_errors_do_not_leak_the_root() {
    let (gateway, dir) = gateway();

    let body = json!({"mode": "write", "path": "a.txt", "content": "one"});
    gateway
        .dispatch(ActionRequest::from_value(body.clone()).unwrap())
        .await
        .unwrap();

    let mut conflict = body;
    conflict["overwrite"] = json!(false);
    let err = gateway
        .dispatch(ActionRequest::from_value(conflict).unwrap())
        .await
        .unwrap_err();

    let detail = err.to_string();
    assert!(detail.contains("a.txt"));
    assert!(
        !detail.contains(&dir.path().display().to_string()),
        "Detail should not leak the server-side root: {detail}"
    );
}

/// Dispatch routes search actions and returns its hits
#[tokio::test]
async fn test_dispatch_search() {
    let (gateway, _dir) = gateway();

    let body = json!({"mode": "search", "query": "install", "scope": "manual"});
    let outcome = gateway
        .dispatch(ActionRequest::from_value(body).unwrap())
        .await
        .unwrap();

    match outcome {
        ActionOutcome::Search(outcome) => {
            assert_eq!(outcome.results.len(), 1);
            assert_eq!(outcome.results[0].title, "Install Guide");
        }
        other => panic!("Expected search outcome, got: {other:?}"),
    }
}

/// Search defaults apply through the dispatcher (scope=manual, max=5)
#[tokio::test]
async fn test_search_defaults_through_dispatch() {
    let (gateway, _dir) = gateway();

    let body = json!({"mode": "search", "query": "guide"});
    let outcome = gateway
        .dispatch(ActionRequest::from_value(body).unwrap())
        .await
        .unwrap();

    match outcome {
        ActionOutcome::Search(outcome) => assert_eq!(outcome.results.len(), 1),
        other => panic!("Expected search outcome, got: {other:?}"),
    }
}
