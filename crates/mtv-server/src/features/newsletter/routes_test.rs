//! Integration tests for the subscribe route

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::features::newsletter::newsletter_routes;
    use crate::store::models::NewUser;
    use crate::store::ContentStore;

    fn create_test_router(store: Arc<ContentStore>) -> Router {
        newsletter_routes().with_state(store)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/subscribe")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_subscribe_success() {
        let app = create_test_router(Arc::new(ContentStore::seeded()));

        let response = app
            .oneshot(post_json(json!({ "email": "viewer@example.com" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["subscription"]["email"], "viewer@example.com");
        assert_eq!(body["message"], "Successfully subscribed to newsletter");
    }

    #[tokio::test]
    async fn test_subscribe_registered_email_rejected() {
        let store = Arc::new(ContentStore::seeded());
        store
            .create_user(NewUser {
                username: "viewer".to_string(),
                password: "hunter2".to_string(),
                email: "member@example.com".to_string(),
            })
            .await;
        let app = create_test_router(store);

        let response = app
            .oneshot(post_json(json!({ "email": "member@example.com" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email already subscribed");
        assert!(body.get("errors").is_none() || body["errors"].is_null());
    }

    #[tokio::test]
    async fn test_subscribe_invalid_email() {
        let app = create_test_router(Arc::new(ContentStore::seeded()));

        let response = app
            .oneshot(post_json(json!({ "email": "nonsense" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid subscription data");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[tokio::test]
    async fn test_subscribe_unparseable_json() {
        let app = create_test_router(Arc::new(ContentStore::seeded()));

        let request = Request::builder()
            .method("POST")
            .uri("/subscribe")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid subscription data");
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn test_subscribe_missing_email() {
        let app = create_test_router(Arc::new(ContentStore::seeded()));

        let response = app.oneshot(post_json(json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid subscription data");
        assert_eq!(body["errors"][0]["field"], "body");
    }
}
