//! Provider operations against the live mock server.

use mangopay_provider::types::HookResourceModel;
use mangopay_provider::{ClientsDataSource, HookResource, HooksDataSource, MangopayProvider, ProviderConfig};

fn start_mock_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/v2.01")
}

fn config(host: &str, secret: &str) -> ProviderConfig {
    ProviderConfig {
        client_id: "acme".into(),
        client_secret: secret.into(),
        environment: "sandbox".into(),
        api_url: host.into(),
    }
}

#[test]
fn configure_connects_with_valid_credentials() {
    let host = start_mock_server();
    let session = MangopayProvider::new("test").configure(&config(&host, "s3cret")).unwrap();
    assert_eq!(session.token(), "mock-access-token");
    assert_eq!(session.host(), host);
}

#[test]
fn configure_reports_rejected_credentials() {
    let host = start_mock_server();
    let diags = MangopayProvider::new("test").configure(&config(&host, "wrong")).unwrap_err();
    assert!(diags.has_error());
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.summary, "Unable to Create Mangopay API Client");
    assert!(diag.detail.contains("status: 401"));
}

#[test]
fn clients_data_source_reads_profile() {
    let host = start_mock_server();
    let session = MangopayProvider::new("test").configure(&config(&host, "s3cret")).unwrap();
    let model = ClientsDataSource::new(&session).read().unwrap();
    assert_eq!(model.client_id, "acme");
    assert_eq!(model.mcc, "7299");
    assert_eq!(model.headquarters_address.country, "FR");
}

#[test]
fn hook_resource_lifecycle() {
    let host = start_mock_server();
    let session = MangopayProvider::new("test").configure(&config(&host, "s3cret")).unwrap();
    let resource = HookResource::new(&session);

    let plan = HookResourceModel {
        url: "https://example.com/notify".to_string(),
        event_type: "PAYIN_NORMAL_SUCCEEDED".to_string(),
        tag: Some("payins".to_string()),
        ..Default::default()
    };
    let created = resource.create(&plan).unwrap();
    let id = created.id.clone().unwrap();
    assert_eq!(created.status.as_deref(), Some("ENABLED"));
    assert_eq!(created.validity.as_deref(), Some("VALID"));
    assert!(created.creation_date.is_some());
    assert!(created.last_updated.is_some());

    let listed = HooksDataSource::new(&session).read().unwrap();
    assert_eq!(listed.hooks.len(), 1);
    assert_eq!(listed.hooks[0].id, id);
    assert_eq!(listed.hooks[0].tag.as_deref(), Some("payins"));

    let imported = resource.import_state(&id).unwrap();
    let read = resource.read(&imported).unwrap();
    assert_eq!(read.url, "https://example.com/notify");
    assert_eq!(read.event_type, "PAYIN_NORMAL_SUCCEEDED");
    assert_eq!(read.last_updated, None);

    let changed = HookResourceModel {
        url: "https://example.com/notify-v2".to_string(),
        status: Some("DISABLED".to_string()),
        tag: None,
        ..created.clone()
    };
    let updated = resource.update(&changed).unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.url, "https://example.com/notify-v2");
    assert_eq!(updated.status.as_deref(), Some("DISABLED"));
    assert_eq!(updated.tag, None);
    assert_eq!(resource.read(&updated).unwrap().tag, None);

    resource.delete(&updated).unwrap();
    assert_eq!(HooksDataSource::new(&session).read().unwrap().hooks.len(), 1);
}

#[test]
fn update_keeps_plan_tag() {
    let host = start_mock_server();
    let session = MangopayProvider::new("test").configure(&config(&host, "s3cret")).unwrap();
    let resource = HookResource::new(&session);
    let created = resource
        .create(&HookResourceModel {
            url: "https://example.com/payouts".to_string(),
            event_type: "PAYOUT_NORMAL_SUCCEEDED".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(created.tag, None);

    let tagged = resource
        .update(&HookResourceModel {
            tag: Some("payouts".to_string()),
            ..created.clone()
        })
        .unwrap();
    assert_eq!(tagged.tag.as_deref(), Some("payouts"));

    let untagged = resource.update(&HookResourceModel { tag: None, ..tagged }).unwrap();
    assert_eq!(untagged.tag, None);
    let read = resource.read(&untagged).unwrap();
    assert_eq!(read.tag, None);
    assert_eq!(read.url, "https://example.com/payouts");
}

#[test]
fn duplicate_hook_is_a_create_diagnostic() {
    let host = start_mock_server();
    let session = MangopayProvider::new("test").configure(&config(&host, "s3cret")).unwrap();
    let resource = HookResource::new(&session);
    let plan = HookResourceModel {
        url: "https://example.com/kyc".to_string(),
        event_type: "KYC_FAILED".to_string(),
        ..Default::default()
    };
    resource.create(&plan).unwrap();

    let diags = resource.create(&plan).unwrap_err();
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.summary, "Error creating hook");
    assert!(diag.detail.contains("already been registered"));
}

#[test]
fn reading_a_missing_hook_fails() {
    let host = start_mock_server();
    let session = MangopayProvider::new("test").configure(&config(&host, "s3cret")).unwrap();
    let state = HookResource::new(&session).import_state("nope").unwrap();
    let diags = HookResource::new(&session).read(&state).unwrap_err();
    assert!(diags.iter().next().unwrap().detail.contains("status: 404"));
}
