use pretty_assertions::assert_eq;
use serde_json::json;
use syncdash_client::{poll, ClientSettings, HttpStatusApi};
use syncdash_core::{CollectionView, Snapshot};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpStatusApi {
    let settings = ClientSettings {
        base_url: format!("{}/api", server.uri()),
        ..ClientSettings::default()
    };
    HttpStatusApi::new(settings).expect("client")
}

async fn mount_healthy_triad(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "systemd": {
                "media-sync-worker.service": "active",
                "media-sync-reconcile.service": "inactive"
            }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "counts": { "pending": 2, "in_progress": 1, "failed": 0, "done": 40 },
            "current_job": {
                "filename": "deadbeef.job",
                "content": "https://example.com/album/one",
                "mtime": 1700000000.0
            }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logs": {
                "worker.log": ["picked job", "download done"],
                "reconcile.log": ["scan complete"]
            }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn healthy_cycle_produces_a_fully_populated_snapshot() {
    let server = MockServer::start().await;
    mount_healthy_triad(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "items": [
                { "status": "PENDING", "artist": "Ana", "title": "First" }
            ]
        })))
        .mount(&server)
        .await;

    let snapshot = poll(&api_for(&server)).await;

    assert!(snapshot.alive);
    assert_eq!(snapshot.units.len(), 2);
    assert_eq!(snapshot.queue_counts.pending, Some(2));
    assert_eq!(snapshot.queue_counts.done, Some(40));
    assert_eq!(
        snapshot.current_job.as_ref().map(|job| job.filename.as_str()),
        Some("deadbeef.job")
    );
    assert_eq!(snapshot.logs["worker.log"].len(), 2);
    match snapshot.collection {
        Some(CollectionView::Items(ref items)) => assert_eq!(items.len(), 1),
        ref other => panic!("expected inventory items, got {other:?}"),
    }
}

#[tokio::test]
async fn any_triad_failure_classifies_the_cycle_offline() {
    let server = MockServer::start().await;
    // Logs endpoint breaks; the whole cycle goes offline even though status
    // and queue succeed.
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "systemd": {} })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "counts": {}, "current_job": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    // The collection fetch must not be attempted on an offline cycle.
    Mock::given(method("GET"))
        .and(path("/api/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok", "items": []
        })))
        .expect(0)
        .mount(&server)
        .await;

    let snapshot = poll(&api_for(&server)).await;

    assert_eq!(snapshot, Snapshot::offline());
    server.verify().await;
}

#[tokio::test]
async fn malformed_triad_body_is_treated_like_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "counts": {}, "current_job": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "logs": {} })))
        .mount(&server)
        .await;

    let snapshot = poll(&api_for(&server)).await;

    assert!(!snapshot.alive);
    assert!(snapshot.units.is_empty());
}

#[tokio::test]
async fn collection_failure_does_not_demote_liveness() {
    let server = MockServer::start().await;
    mount_healthy_triad(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/collection"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let snapshot = poll(&api_for(&server)).await;

    // Best-effort: the triad stays fresh, only the inventory is unset.
    assert!(snapshot.alive);
    assert_eq!(snapshot.units.len(), 2);
    assert!(snapshot.current_job.is_some());
    assert!(!snapshot.logs.is_empty());
    assert_eq!(snapshot.collection, None);
}

#[tokio::test]
async fn missing_inventory_file_surfaces_as_missing_view() {
    let server = MockServer::start().await;
    mount_healthy_triad(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/collection"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "missing_file", "items": []
        })))
        .mount(&server)
        .await;

    let snapshot = poll(&api_for(&server)).await;

    assert!(snapshot.alive);
    assert_eq!(snapshot.collection, Some(CollectionView::MissingFile));
}
