//! Integration tests for the REST catalog adapter
//!
//! Each test starts a small axum server on a random local port that mimics
//! the backend's REST endpoints, then points a `RestCatalog` at it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use vitrine_domain::catalog::{CatalogDataSource, FetchError, GenreId, UserId};
use vitrine_rest::{RestCatalog, RestCatalogConfig};

const API_KEY: &str = "anon-test-key";

type Params = HashMap<String, String>;

fn content_row(id: u32, title: &str) -> Value {
    json!({
        "id": id,
        "tipo": "filme",
        "titulo": title,
        "descricao": "",
        "ano_lancamento": 2019,
        "classificacao_etaria": "14",
        "gratuito": false,
        "avaliacao": 7.5,
        "genero_id": 1
    })
}

/// Serve `router` on 127.0.0.1 and return its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn catalog(base_url: &str) -> RestCatalog {
    RestCatalog::new(RestCatalogConfig::new(base_url, API_KEY)).unwrap()
}

fn authorized(headers: &HeaderMap) -> bool {
    let bearer = format!("Bearer {API_KEY}");
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(API_KEY)
        && headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(bearer.as_str())
}

#[tokio::test]
async fn test_trending_query_and_decoding() {
    let seen = Arc::new(Mutex::new(Vec::<Params>::new()));
    let recorder = seen.clone();
    let router = Router::new().route(
        "/rest/v1/conteudos",
        get(move |headers: HeaderMap, Query(params): Query<Params>| {
            let recorder = recorder.clone();
            async move {
                if !authorized(&headers) {
                    return (StatusCode::UNAUTHORIZED, Json(json!({"message": "no key"})));
                }
                recorder.lock().unwrap().push(params);
                (
                    StatusCode::OK,
                    Json(json!([content_row(1, "Tropa de Elite"), content_row(2, "Bacurau")])),
                )
            }
        }),
    );
    let base_url = serve(router).await;

    let items = catalog(&base_url).get_trending_content(20).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Tropa de Elite");
    assert_eq!(items[1].id.as_str(), "2");

    let params = seen.lock().unwrap()[0].clone();
    assert_eq!(params["order"], "visualizacoes.desc");
    assert_eq!(params["limit"], "20");
}

#[tokio::test]
async fn test_featured_without_rows_is_not_found() {
    let router = Router::new().route(
        "/rest/v1/conteudos",
        get(|Query(params): Query<Params>| async move {
            assert_eq!(params["destaque"], "eq.true");
            assert_eq!(params["limit"], "1");
            Json(json!([]))
        }),
    );
    let base_url = serve(router).await;

    let result = catalog(&base_url).get_featured_content().await;

    assert!(matches!(result, Err(FetchError::NotFound(_))));
}

#[tokio::test]
async fn test_featured_returns_first_row() {
    let router = Router::new().route(
        "/rest/v1/conteudos",
        get(|| async { Json(json!([content_row(9, "Central do Brasil")])) }),
    );
    let base_url = serve(router).await;

    let featured = catalog(&base_url).get_featured_content().await.unwrap();

    assert_eq!(featured.title, "Central do Brasil");
}

#[tokio::test]
async fn test_backend_error_carries_status_and_message() {
    let router = Router::new().route(
        "/rest/v1/generos",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"message": "database is starting up", "code": "PGRST000"})),
            )
        }),
    );
    let base_url = serve(router).await;

    let result = catalog(&base_url).get_all_genres().await;

    assert_eq!(
        result,
        Err(FetchError::backend(503, "database is starting up"))
    );
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let router = Router::new().route(
        "/rest/v1/conteudos",
        get(|| async { "definitely not json" }),
    );
    let base_url = serve(router).await;

    let result = catalog(&base_url)
        .get_content_by_genre(&GenreId::new("3"), 10)
        .await;

    assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_genres_and_genre_filter() {
    let router = Router::new()
        .route(
            "/rest/v1/generos",
            get(|| async { Json(json!([{"id": 1, "nome": "Ação"}, {"id": 2, "nome": "Comédia"}])) }),
        )
        .route(
            "/rest/v1/conteudos",
            get(|Query(params): Query<Params>| async move {
                if params.get("genero_id").map(String::as_str) == Some("eq.2") {
                    Json(json!([content_row(5, "O Auto da Compadecida")]))
                } else {
                    Json(json!([]))
                }
            }),
        );
    let base_url = serve(router).await;
    let catalog = catalog(&base_url);

    let genres = catalog.get_all_genres().await.unwrap();
    let comedy = catalog
        .get_content_by_genre(&genres[1].id, 10)
        .await
        .unwrap();

    assert_eq!(genres[0].name, "Ação");
    assert_eq!(genres[1].id, GenreId::new("2"));
    assert_eq!(comedy.len(), 1);
    assert_eq!(comedy[0].title, "O Auto da Compadecida");
}

#[tokio::test]
async fn test_continue_watching_unwraps_joined_rows() {
    let router = Router::new().route(
        "/rest/v1/historico",
        get(|Query(params): Query<Params>| async move {
            assert_eq!(params["usuario_id"], "eq.u-1");
            assert_eq!(params["concluido"], "eq.false");
            Json(json!([
                {"conteudo": content_row(1, "Cidade de Deus")},
                {"conteudo": null},
                {"conteudo": content_row(2, "Carandiru")}
            ]))
        }),
    );
    let base_url = serve(router).await;

    let items = catalog(&base_url)
        .get_continue_watching(&UserId::new("u-1"))
        .await
        .unwrap();

    let titles: Vec<_> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["Cidade de Deus", "Carandiru"]);
}

#[tokio::test]
async fn test_recommended_posts_user_to_rpc() {
    let bodies = Arc::new(Mutex::new(Vec::<Value>::new()));
    let recorder = bodies.clone();
    let router = Router::new().route(
        "/rest/v1/rpc/conteudos_recomendados",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                recorder.lock().unwrap().push(body);
                Json(json!([content_row(3, "Aquarius")]))
            }
        }),
    );
    let base_url = serve(router).await;

    let items = catalog(&base_url)
        .get_recommended_content(&UserId::anonymous())
        .await
        .unwrap();

    assert_eq!(items[0].title, "Aquarius");
    assert_eq!(
        bodies.lock().unwrap()[0],
        json!({"usuario_id": "anonymous"})
    );
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = catalog(&format!("http://{addr}"))
        .get_recent_content(15)
        .await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
}
