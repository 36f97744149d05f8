//! Provider client against an in-process HTTP server

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use folio_browser::domains::catalog::FetchError;
use folio_browser::infra::ApiClient;
use folio_browser::infra::services::CatalogService;
use folio_browser::infra::testing::synthetic_page;
use folio_model::{Language, PageRequest, QueryParameters};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Clone, Copy)]
enum Reply {
    Books,
    ServerError,
    Malformed,
}

#[derive(Clone)]
struct ProviderState {
    reply: Reply,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn books(
    State(state): State<ProviderState>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().unwrap().push(query.clone());
    match state.reply {
        Reply::Books => {
            let request = PageRequest {
                seed: query["seed"].parse().unwrap(),
                language: query["language"].parse().unwrap(),
                count: query["count"].parse().unwrap(),
                offset: query["offset"].parse().unwrap(),
                ..PageRequest::cold(&QueryParameters::default(), 0)
            };
            axum::Json(books_json(&request)).into_response()
        }
        Reply::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "provider exploded")
                .into_response()
        }
        Reply::Malformed => "[{\"index\": \"not a number\"".into_response(),
    }
}

fn books_json(request: &PageRequest) -> serde_json::Value {
    serde_json::to_value(synthetic_page(request, None)).unwrap()
}

async fn spawn_provider(
    reply: Reply,
) -> (String, Arc<Mutex<Vec<HashMap<String, String>>>>) {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let state = ProviderState {
        reply,
        queries: queries.clone(),
    };
    let app = Router::new().route("/books", get(books)).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), queries)
}

fn params() -> QueryParameters {
    QueryParameters {
        language: Language::DeDe,
        seed: 42,
        likes: 7.5,
        reviews: 2.0,
    }
}

#[tokio::test]
async fn sends_parameters_as_query_string() {
    let (url, queries) = spawn_provider(Reply::Books).await;
    let client = ApiClient::new(url).unwrap();

    let request = PageRequest::append(&params(), 10, 20);
    let books = client.fetch_page(&request).await.unwrap();

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query["seed"], "42");
    assert_eq!(query["language"], "de_DE");
    assert_eq!(query["count"], "10");
    assert_eq!(query["offset"], "20");
    assert_eq!(query["likes"].parse::<f32>().unwrap(), 7.5);
    assert_eq!(query["reviews"].parse::<f32>().unwrap(), 2.0);
    assert!(!query.contains_key("mode"));

    assert_eq!(books.len(), 10);
    assert_eq!(books[0].index, 21);
    assert!(books[0].isbn.contains("de_DE"));
}

#[tokio::test]
async fn decodes_reviews_and_cover_fields() {
    let (url, _) = spawn_provider(Reply::Books).await;
    let client = ApiClient::new(format!("{url}/")).unwrap();

    let request = PageRequest::cold(&QueryParameters::default(), 20);
    let books = client.fetch_page(&request).await.unwrap();

    assert_eq!(books.len(), 20);
    assert_eq!(books, synthetic_page(&request, None));
    assert_eq!(books[0].reviews.len(), 3);
    assert!(!books[0].cover_image.is_empty());
}

#[tokio::test]
async fn server_error_is_a_transport_failure() {
    let (url, _) = spawn_provider(Reply::ServerError).await;
    let client = ApiClient::new(url).unwrap();

    let request = PageRequest::cold(&params(), 20);
    match client.fetch_page(&request).await {
        Err(FetchError::Transport(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("provider exploded"));
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let (url, _) = spawn_provider(Reply::Malformed).await;
    let client = ApiClient::new(url).unwrap();

    let request = PageRequest::cold(&params(), 20);
    let err = client.fetch_page(&request).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_failure() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = ApiClient::new(format!("http://{addr}")).unwrap();

    let request = PageRequest::cold(&params(), 20);
    let err = client.fetch_page(&request).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
}
