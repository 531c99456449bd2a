use httpmock::prelude::*;
use tempfile::TempDir;
use vendaa_cms::core::catalogue;
use vendaa_cms::domain::model::{CatalogItem, SettingsPatch, ALL_CATEGORY};
use vendaa_cms::{ContentStore, LocalSnapshots, RemoteSync, RestBackend};

fn sample_item(id: &str, name: &str, category: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        price_from: 15.0,
        image: String::new(),
        before_image: None,
        after_image: None,
        branding_options: vec![],
        pricing_tiers: vec![],
    }
}

#[tokio::test]
async fn test_local_mode_initializes_without_network() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalSnapshots::new(temp_dir.path().to_str().unwrap().to_string());

    // A live server that nothing should ever call.
    let server = MockServer::start();
    let catch_all = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });

    let mut store = ContentStore::<_, RestBackend>::local_only(storage);
    store.load().await;
    assert!(!store.items().is_empty());

    let sync = store
        .upsert_item(sample_item("p1", "Canvas Tote", "bags"))
        .await
        .unwrap();
    assert!(matches!(sync, RemoteSync::Skipped));

    catch_all.assert_hits(0);
}

#[tokio::test]
async fn test_remote_load_then_edit_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalSnapshots::new(temp_dir.path().to_str().unwrap().to_string());
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/items");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "p1", "name": "Journal", "category": "notebooks", "price_from": 18.0}
            ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/testimonials");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{"id": "t1", "quote": "Great"}]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/case_studies");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/settings");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": "global", "currency_code": "KES", "currency_symbol": "KSh "}
            ]));
    });
    let upsert_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/items")
            .header("Prefer", "resolution=merge-duplicates");
        then.status(201);
    });

    let backend = RestBackend::new(&server.base_url(), "anon-key");
    let mut store = ContentStore::with_remote(storage, backend);
    store.load().await;

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.testimonials().len(), 1);
    assert!(store.case_studies().is_empty());
    assert_eq!(store.settings().currency_code, "KES");
    assert_eq!(store.format_price(18.0), "KSh 18");

    let sync = store
        .upsert_item(sample_item("p2", "Thermal Tumbler", "drinkware"))
        .await
        .unwrap();
    assert!(matches!(sync, RemoteSync::Synced));
    upsert_mock.assert();

    // The local snapshot mirrors memory even in remote mode.
    let snapshot = std::fs::read(temp_dir.path().join("items.json")).unwrap();
    let persisted: Vec<CatalogItem> = serde_json::from_slice(&snapshot).unwrap();
    assert_eq!(persisted.len(), 2);

    let filtered = catalogue::filter_items(store.items(), "drinkware", "tumbler");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "p2");
}

#[tokio::test]
async fn test_remote_outage_degrades_to_local_writes() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalSnapshots::new(temp_dir.path().to_str().unwrap().to_string());
    let server = MockServer::start();

    server.mock(|when, then| {
        when.any_request();
        then.status(503);
    });

    let backend = RestBackend::new(&server.base_url(), "anon-key");
    let mut store = ContentStore::with_remote(storage, backend);

    // Load degrades to empty collections rather than failing.
    store.load().await;
    assert!(store.items().is_empty());
    assert_eq!(store.settings().currency_code, "USD");

    // Writes stay local-first; the failed remote leg is reported, not raised.
    let sync = store
        .upsert_item(sample_item("p1", "Journal", "notebooks"))
        .await
        .unwrap();
    assert!(sync.failed());
    assert_eq!(store.items().len(), 1);

    let snapshot = std::fs::read(temp_dir.path().join("items.json")).unwrap();
    let persisted: Vec<CatalogItem> = serde_json::from_slice(&snapshot).unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].name, "Journal");
}

#[tokio::test]
async fn test_settings_update_survives_restart_in_local_mode() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_str().unwrap().to_string();

    let mut store =
        ContentStore::<_, RestBackend>::local_only(LocalSnapshots::new(data_dir.clone()));
    store.load().await;
    store
        .update_settings(SettingsPatch {
            currency_code: Some("EUR".to_string()),
            currency_symbol: Some("€".to_string()),
            hero_image: Some("/images/hero-alt.jpg".to_string()),
        })
        .await;

    let mut reopened =
        ContentStore::<_, RestBackend>::local_only(LocalSnapshots::new(data_dir));
    reopened.load().await;

    assert_eq!(reopened.settings().currency_code, "EUR");
    assert_eq!(reopened.settings().symbol(), "€");
    assert_eq!(
        reopened.settings().hero_image.as_deref(),
        Some("/images/hero-alt.jpg")
    );
    assert_eq!(reopened.format_price(40.0), "€40");
}

#[tokio::test]
async fn test_filter_page_bound_over_persisted_catalogue() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalSnapshots::new(temp_dir.path().to_str().unwrap().to_string());

    let mut store = ContentStore::<_, RestBackend>::local_only(storage);
    store
        .set_items(|_| {
            (0..40)
                .map(|i| sample_item(&format!("p{}", i), &format!("Tote {}", i), "bags"))
                .collect()
        })
        .await;

    let all = catalogue::filter_items(store.items(), ALL_CATEGORY, "");
    assert_eq!(all.len(), catalogue::PAGE_SIZE);

    let searched = catalogue::filter_items(store.items(), "bags", "tote");
    assert_eq!(searched.len(), catalogue::PAGE_SIZE);
}
