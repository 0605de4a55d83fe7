//! Integration tests for item operations.
//!
//! These tests verify the verbs on `DirectusClient` against a mock server:
//! request shape, envelope handling, decoding onto the caller's value, and
//! the upsert dispatch.

use directus_api::{
    get_item, AccessToken, BaseUrl, CollectionItem, DirectusClient, DirectusConfig, ItemError,
    ItemMeta, Resource, SingletonItem,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Article {
    #[serde(flatten)]
    meta: ItemMeta,
    #[serde(default)]
    title: String,
    #[serde(default)]
    status: String,
}

impl Resource for Article {
    const COLLECTION: &'static str = "articles";
    const FIELDS: &'static str = "id,title,status";
}

impl CollectionItem for Article {
    type Id = u64;

    fn id(&self) -> Option<u64> {
        self.meta.id
    }

    fn set_id(&mut self, id: u64) {
        self.meta.id = Some(id);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Settings {
    #[serde(default)]
    site_name: String,
    #[serde(default)]
    maintenance: bool,
}

impl Resource for Settings {
    const COLLECTION: &'static str = "settings";
}

impl SingletonItem for Settings {}

fn article(id: Option<u64>, title: &str) -> Article {
    Article {
        meta: ItemMeta {
            id,
            ..ItemMeta::default()
        },
        title: title.to_string(),
        status: "draft".to_string(),
    }
}

fn data(payload: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": payload }))
}

fn create_client(server: &MockServer) -> DirectusClient {
    DirectusClient::new(&server.uri(), "static-token").unwrap()
}

// ============================================================================
// Get Tests
// ============================================================================

#[tokio::test]
async fn test_get_requests_projection_and_decodes_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles/42"))
        .and(query_param("fields", "id,title,status"))
        .respond_with(data(json!({"id": 42, "title": "Remote", "status": "published"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let fetched = client.get(&article(Some(42), "Local")).await.unwrap();

    assert_eq!(fetched.meta.id, Some(42));
    assert_eq!(fetched.title, "Remote");
    assert_eq!(fetched.status, "published");
}

#[tokio::test]
async fn test_get_keeps_fields_absent_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles/42"))
        .respond_with(data(json!({"id": 42, "title": "Remote"})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let fetched = client.get(&article(Some(42), "Local")).await.unwrap();

    assert_eq!(fetched.title, "Remote");
    assert_eq!(fetched.status, "draft");
}

#[tokio::test]
async fn test_get_without_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.get(&article(None, "Local")).await;

    assert!(matches!(
        result,
        Err(ItemError::MissingId { operation: "get", .. })
    ));
}

#[tokio::test]
async fn test_get_item_by_id_with_config() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles/7"))
        .respond_with(data(json!({"id": 7, "title": "Seven", "status": "published"})))
        .expect(1)
        .mount(&server)
        .await;

    let config = DirectusConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .access_token(AccessToken::new("static-token"))
        .build()
        .unwrap();

    let fetched: Article = get_item(&config, &7).await.unwrap();
    assert_eq!(fetched.title, "Seven");

    let result = get_item::<Article>(&config, &0).await;
    assert!(matches!(result, Err(ItemError::MissingId { .. })));
}

#[tokio::test]
async fn test_error_status_surfaces_through_item_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.get(&article(Some(1), "x")).await.unwrap_err();

    assert_eq!(error.status(), Some(403));
    assert_eq!(error.to_string(), "forbidden");
}

#[tokio::test]
async fn test_malformed_envelope_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"errors":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = client.get(&article(Some(1), "x")).await;

    assert!(matches!(result, Err(ItemError::MalformedEnvelope { .. })));
}

// ============================================================================
// Find Tests
// ============================================================================

#[tokio::test]
async fn test_find_sends_fields_and_filter_and_merges_first_match() {
    let filter = r#"{"title":{"_eq":"Hello"}}"#;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles"))
        .and(query_param("fields", "id,title,status"))
        .and(query_param("filter", filter))
        .respond_with(data(json!([
            {"id": 3, "title": "Hello", "status": "published"},
            {"id": 4, "title": "Hello", "status": "archived"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let found = client.find(&article(None, ""), filter).await.unwrap();

    assert_eq!(found.meta.id, Some(3));
    assert_eq!(found.status, "published");
}

#[tokio::test]
async fn test_find_without_match_returns_input_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles"))
        .respond_with(data(json!([])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let prototype = article(None, "Nobody");
    let found = client.find(&prototype, "{}").await.unwrap();

    assert_eq!(found, prototype);
    assert!(!found.exists());
}

#[tokio::test]
async fn test_find_items_returns_raw_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[{"id":1},{"id":2}]}"#))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let raw = client.find_items(&Article::default(), "").await.unwrap();

    assert_eq!(raw, br#"[{"id":1},{"id":2}]"#);
    let articles: Vec<Article> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(articles.len(), 2);
}

#[tokio::test]
async fn test_find_id_requests_only_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/articles"))
        .and(query_param("fields", "id"))
        .respond_with(data(json!([{"id": 11}])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/items/articles"))
        .respond_with(data(json!([])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let prototype = Article::default();

    assert_eq!(client.find_id(&prototype, "{}").await.unwrap(), Some(11));
    assert_eq!(client.find_id(&prototype, "{}").await.unwrap(), None);
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_create_posts_raw_body_and_assigns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items/articles"))
        .and(body_json(json!({"title": "New", "status": "draft"})))
        .respond_with(data(json!({"id": 99, "title": "New", "status": "draft"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let created = client.create(&article(None, "New")).await.unwrap();

    assert_eq!(created.id(), Some(99));
    assert!(created.exists());
}

#[tokio::test]
async fn test_update_patches_item_path() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/items/articles/42"))
        .and(body_json(json!({"id": 42, "title": "Edited", "status": "draft"})))
        .respond_with(data(json!({"id": 42, "title": "Edited", "status": "review"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let updated = client.update(&article(Some(42), "Edited")).await.unwrap();

    assert_eq!(updated.status, "review");
}

#[tokio::test]
async fn test_update_without_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    assert!(matches!(
        client.update(&article(None, "x")).await,
        Err(ItemError::MissingId { operation: "update", .. })
    ));
}

#[tokio::test]
async fn test_upsert_dispatches_on_existence() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items/articles"))
        .respond_with(data(json!({"id": 42})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/items/articles/42"))
        .respond_with(data(json!({"id": 42, "title": "Second"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let mut item = client.upsert(&article(None, "First")).await.unwrap();
    assert_eq!(item.id(), Some(42));
    assert_eq!(item.title, "First");

    item.title = "Second".to_string();
    let item = client.upsert(&item).await.unwrap();
    assert_eq!(item.title, "Second");
}

#[tokio::test]
async fn test_upsert_with_zero_id_creates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/items/articles"))
        .respond_with(data(json!({"id": 5})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let item = client.upsert(&article(Some(0), "Zero")).await.unwrap();

    assert_eq!(item.id(), Some(5));
}

// ============================================================================
// Singleton Tests
// ============================================================================

#[tokio::test]
async fn test_singleton_get_and_update_use_collection_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/settings"))
        .respond_with(data(json!({"site_name": "Docs"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/items/settings"))
        .and(body_json(json!({"site_name": "Docs", "maintenance": true})))
        .respond_with(data(json!({"site_name": "Docs", "maintenance": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    let mut settings = client.get_singleton(&Settings::default()).await.unwrap();
    assert_eq!(settings.site_name, "Docs");
    assert!(!settings.maintenance);

    settings.maintenance = true;
    let settings = client.update_singleton(&settings).await.unwrap();
    assert!(settings.maintenance);
}

// ============================================================================
// Decode Hook Tests
// ============================================================================

/// Resource whose decode step upper-cases the title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Headline {
    #[serde(flatten)]
    meta: ItemMeta,
    #[serde(default)]
    title: String,
}

impl Resource for Headline {
    const COLLECTION: &'static str = "headlines";

    fn deserialize_item(data: &[u8]) -> Result<Self, ItemError> {
        let mut headline: Self = serde_json::from_slice(data).map_err(ItemError::Decode)?;
        headline.title = headline.title.to_uppercase();
        Ok(headline)
    }
}

impl CollectionItem for Headline {
    type Id = u64;

    fn id(&self) -> Option<u64> {
        self.meta.id
    }

    fn set_id(&mut self, id: u64) {
        self.meta.id = Some(id);
    }
}

#[tokio::test]
async fn test_overridden_decode_hook_applies_to_every_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/headlines/1"))
        .respond_with(data(json!({"id": 1, "title": "hi"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/items/headlines"))
        .respond_with(data(json!([{"id": 1, "title": "hi"}])))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let prototype = Headline {
        meta: ItemMeta {
            id: Some(1),
            ..ItemMeta::default()
        },
        title: String::new(),
    };

    let by_id: Headline = client.get_by_id(&1).await.unwrap();
    assert_eq!(by_id.title, "HI");

    let fetched = client.get(&prototype).await.unwrap();
    assert_eq!(fetched.title, "HI");

    let found = client.find(&Headline::default(), "{}").await.unwrap();
    assert_eq!(found.title, "HI");
}
