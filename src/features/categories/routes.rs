use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::DefaultBodyLimit;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use fake::faker::lorem::en::{Sentence, Word};
    use fake::Fake;
    use serde_json::{json, Value};

    use crate::features::categories::dtos::CategoryResponseDto;
    use crate::shared::test_helpers::{
        category_app, InMemoryCategoryRepository, UnavailableCategoryRepository,
    };

    fn server() -> (TestServer, Arc<InMemoryCategoryRepository>) {
        let repository = Arc::new(InMemoryCategoryRepository::new());
        let server = TestServer::new(category_app(repository.clone())).unwrap();
        (server, repository)
    }

    fn valid_body() -> Value {
        let name: String = Word().fake();
        let description: String = Sentence(3..8).fake();
        json!({ "name": name, "description": description })
    }

    async fn create(server: &TestServer, body: &Value) -> CategoryResponseDto {
        let response = server.post("/api/categories").json(body).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<CategoryResponseDto>()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_entity_fields() {
        let (server, repository) = server();
        let body = valid_body();

        let created = create(&server, &body).await;

        assert_eq!(created.name, body["name"].as_str().unwrap());
        assert_eq!(
            created.description.as_deref(),
            body["description"].as_str()
        );
        assert_eq!(repository.len(), 1);
    }

    #[tokio::test]
    async fn test_create_invalid_body_returns_400_without_mutation() {
        let (server, repository) = server();

        let cases = [
            json!({}),
            json!({ "name": "" }),
            json!({ "description": "no name" }),
            json!({ "name": 42 }),
            json!({ "name": "x".repeat(256) }),
        ];

        for body in cases {
            let response = server.post("/api/categories").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let errors = response.json::<Value>()["errors"].clone();
            assert!(
                errors.as_array().is_some_and(|e| !e.is_empty()),
                "expected field errors for {}",
                body
            );
        }

        assert_eq!(repository.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_create_malformed_json_returns_400() {
        let (server, repository) = server();

        let response = server
            .post("/api/categories")
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["errors"][0]["field"], "body");
        assert_eq!(repository.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_find_round_trip() {
        let (server, _) = server();
        let created = create(&server, &valid_body()).await;

        let response = server.get(&format!("/api/categories/{}", created.id)).await;
        response.assert_status_ok();
        assert_eq!(response.json::<CategoryResponseDto>(), created);
    }

    #[tokio::test]
    async fn test_find_unknown_id_returns_404() {
        let (server, _) = server();

        let response = server.get("/api/categories/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Category not found" }));
    }

    #[tokio::test]
    async fn test_find_non_integer_id_returns_400() {
        let (server, _) = server();

        let response = server.get("/api/categories/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["message"].is_string());
    }

    #[tokio::test]
    async fn test_update_replaces_category() {
        let (server, _) = server();
        let created = create(&server, &valid_body()).await;

        let response = server
            .put(&format!("/api/categories/{}", created.id))
            .json(&json!({ "name": "Renamed" }))
            .await;
        response.assert_status_ok();

        let updated = response.json::<CategoryResponseDto>();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, None);

        let fetched = server
            .get(&format!("/api/categories/{}", created.id))
            .await
            .json::<CategoryResponseDto>();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let (server, _) = server();

        let response = server
            .put("/api/categories/999")
            .json(&valid_body())
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Category not found" }));
    }

    #[tokio::test]
    async fn test_update_invalid_body_returns_400_without_mutation() {
        let (server, repository) = server();
        let created = create(&server, &valid_body()).await;
        let mutations = repository.mutation_count();

        let response = server
            .put(&format!("/api/categories/{}", created.id))
            .json(&json!({ "name": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        assert_eq!(repository.mutation_count(), mutations);
        let fetched = server
            .get(&format!("/api/categories/{}", created.id))
            .await
            .json::<CategoryResponseDto>();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_delete_existing_returns_204() {
        let (server, repository) = server();
        let created = create(&server, &valid_body()).await;

        let response = server
            .delete(&format!("/api/categories/{}", created.id))
            .await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());
        assert_eq!(repository.len(), 0);

        server
            .get(&format!("/api/categories/{}", created.id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_returns_404() {
        let (server, _) = server();

        let response = server.delete("/api/categories/999").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Category not found" }));
    }

    #[tokio::test]
    async fn test_list_returns_every_category() {
        let (server, _) = server();
        let mut created = Vec::new();
        for _ in 0..3 {
            created.push(create(&server, &valid_body()).await);
        }

        let response = server.get("/api/categories").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Vec<CategoryResponseDto>>(), created);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (server, _) = server();

        let response = server.get("/api/categories").await;
        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500() {
        let server = TestServer::new(category_app(Arc::new(UnavailableCategoryRepository))).unwrap();

        let response = server.get("/api/categories").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "message": "Database error occurred" }));

        server
            .put("/api/categories/1")
            .json(&json!({ "name": "Books" }))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        server
            .delete("/api/categories/1")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        server
            .post("/api/categories")
            .json(&json!({ "name": "Books" }))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let response = server.get("/api/categories/1").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "message": "Database error occurred" }));
    }

    #[tokio::test]
    async fn test_oversized_body_returns_413() {
        let repository = Arc::new(InMemoryCategoryRepository::new());
        let app = category_app(repository.clone()).layer(DefaultBodyLimit::max(64));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/categories")
            .json(&json!({ "name": "Books", "description": "d".repeat(512) }))
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(response.json::<Value>()["message"].is_string());
        assert_eq!(repository.mutation_count(), 0);
    }
}
