use clipper_client::{plan_retention_sweep, sweep_excess, ClientSettings, HttpBackend, RemoteFile};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn file(name: &str, modified: Option<&str>) -> RemoteFile {
    RemoteFile {
        name: name.to_string(),
        size: 100,
        modified: modified.map(str::to_string),
    }
}

fn listing_json(files: &[RemoteFile]) -> serde_json::Value {
    serde_json::json!({
        "arquivos": files
            .iter()
            .map(|f| {
                serde_json::json!({
                    "nome": f.name,
                    "tamanho": f.size,
                    "data_modificacao": f.modified,
                })
            })
            .collect::<Vec<_>>()
    })
}

fn backend(server: &MockServer) -> HttpBackend {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    HttpBackend::new(settings).expect("backend")
}

#[test]
fn plan_keeps_listings_under_the_ceiling_untouched() {
    let files: Vec<RemoteFile> = (0..10)
        .map(|i| file(&format!("f{i}.txt"), Some("2024-05-01T10:00:00")))
        .collect();
    assert!(plan_retention_sweep(&files, 10).is_empty());
    assert!(plan_retention_sweep(&[], 10).is_empty());
}

#[test]
fn plan_picks_the_oldest_files_first() {
    let mut files: Vec<RemoteFile> = (0..10)
        .map(|i| file(&format!("new{i}.txt"), Some("2024-05-20T10:00:00")))
        .collect();
    files.push(file("old.txt", Some("2024-05-01T08:00:00")));
    files.push(file("older.txt", Some("2024-04-30T23:59:59.500000")));

    let victims = plan_retention_sweep(&files, 10);
    assert_eq!(victims, vec!["older.txt".to_string(), "old.txt".to_string()]);
}

#[test]
fn plan_treats_missing_timestamps_as_earliest() {
    let mut files: Vec<RemoteFile> = (0..10)
        .map(|i| file(&format!("f{i}.txt"), Some("2024-05-20T10:00:00")))
        .collect();
    files.push(file("undated.txt", None));
    files.push(file("garbled.txt", Some("yesterday-ish")));

    let victims = plan_retention_sweep(&files, 10);
    assert_eq!(
        victims,
        vec!["undated.txt".to_string(), "garbled.txt".to_string()]
    );
}

#[test]
fn plan_breaks_timestamp_ties_by_listing_order() {
    let mut files = vec![
        file("first.txt", Some("2024-05-01T10:00:00")),
        file("second.txt", Some("2024-05-01T10:00:00")),
    ];
    files.extend((0..3).map(|i| file(&format!("new{i}.txt"), Some("2024-05-20T10:00:00"))));

    let victims = plan_retention_sweep(&files, 3);
    assert_eq!(
        victims,
        vec!["first.txt".to_string(), "second.txt".to_string()]
    );
}

#[tokio::test]
async fn sweep_deletes_exactly_the_excess_and_reports_the_final_listing() {
    let server = MockServer::start().await;

    let mut files: Vec<RemoteFile> = (0..10)
        .map(|i| file(&format!("keep{i}.txt"), Some("2024-05-20T10:00:00")))
        .collect();
    files.push(file("old1.txt", Some("2024-05-01T10:00:00")));
    files.push(file("old2.txt", Some("2024-05-02T10:00:00")));
    let after: Vec<RemoteFile> = files[..10].to_vec();

    // First fetch sees 12 files, the refresh afterwards sees 10.
    Mock::given(method("GET"))
        .and(path("/arquivos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(&files)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/arquivos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(&after)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/old1.txt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/old2.txt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let report = sweep_excess(&backend(&server), 10).await.expect("sweep");
    assert_eq!(report.removed, 2);
    assert_eq!(report.files.len(), 10);
}

#[tokio::test]
async fn sweep_skips_files_that_fail_to_delete() {
    let server = MockServer::start().await;

    let mut files: Vec<RemoteFile> = (0..10)
        .map(|i| file(&format!("keep{i}.txt"), Some("2024-05-20T10:00:00")))
        .collect();
    files.push(file("stuck.txt", Some("2024-05-01T10:00:00")));
    files.push(file("old.txt", Some("2024-05-02T10:00:00")));

    Mock::given(method("GET"))
        .and(path("/arquivos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(&files)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/stuck.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/delete/old.txt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let report = sweep_excess(&backend(&server), 10).await.expect("sweep");
    // The failed delete is skipped, the sweep carries on.
    assert_eq!(report.removed, 1);
}

#[tokio::test]
async fn sweep_under_the_ceiling_deletes_nothing() {
    let server = MockServer::start().await;

    let files: Vec<RemoteFile> = (0..3)
        .map(|i| file(&format!("f{i}.txt"), Some("2024-05-20T10:00:00")))
        .collect();

    Mock::given(method("GET"))
        .and(path("/arquivos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(&files)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let report = sweep_excess(&backend(&server), 10).await.expect("sweep");
    assert_eq!(report.removed, 0);
    assert_eq!(report.files.len(), 3);
}
