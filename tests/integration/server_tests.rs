//! HTTP surface tests

#[cfg(test)]
mod tests {
    use crate::common::{FakeProvider, FakeReply, generate_body, registry_with};
    use actix_web::{http::StatusCode, test, web};
    use llm_gateway::config::Config;
    use llm_gateway::server::{AppState, create_app};
    use llm_gateway::{MessageRole, ProviderError, ProviderRegistry};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn app_state(registry: ProviderRegistry) -> web::Data<AppState> {
        web::Data::new(AppState::new(Config::default(), registry))
    }

    macro_rules! post_json {
        ($app:expr, $uri:expr, $body:expr) => {{
            let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
            test::call_service(&$app, req).await
        }};
    }

    macro_rules! get {
        ($app:expr, $uri:expr) => {{
            let req = test::TestRequest::get().uri($uri).to_request();
            test::call_service(&$app, req).await
        }};
    }

    #[actix_web::test]
    async fn test_generate_routes_to_provider() {
        let fake = FakeProvider::text("fake", "pong");
        let app = test::init_service(create_app(app_state(registry_with(vec![fake.clone()])))).await;

        let mut body = generate_body("fake", "fake-large");
        body["messages"] = json!([
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "ping"}
        ]);
        body["options"] = json!({"temperature": 0.3, "unknown": true});

        let resp = post_json!(app, "/generate", &body);
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["provider"], "fake");
        assert_eq!(json["model"], "fake-large");
        assert_eq!(json["response"], "pong");

        assert_eq!(fake.call_count(), 1);
        let (model, messages, options) = fake.last_call().unwrap();
        assert_eq!(model, "fake-large");
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].content, "ping");
        assert_eq!(options.f64("temperature"), Some(0.3));
    }

    #[actix_web::test]
    async fn test_generate_missing_provider() {
        let fake = FakeProvider::text("fake", "pong");
        let app = test::init_service(create_app(app_state(registry_with(vec![fake.clone()])))).await;

        let resp = post_json!(app, "/generate", &generate_body("missing", "x"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, json!({"error": "Provider 'missing' not configured"}));
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_generate_messages_not_a_list() {
        let app = test::init_service(create_app(app_state(ProviderRegistry::new()))).await;

        let mut body = generate_body("openai", "gpt-4o");
        body["messages"] = json!("not-a-list");

        let resp = post_json!(app, "/generate", &body);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, json!({"errors": ["'messages' must be a list"]}));
    }

    #[actix_web::test]
    async fn test_generate_non_object_body() {
        let app = test::init_service(create_app(app_state(ProviderRegistry::new()))).await;

        let resp = post_json!(app, "/generate", &json!(["provider", "openai"]));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, json!({"errors": ["Request body must be a JSON object"]}));
    }

    #[actix_web::test]
    async fn test_adapter_failure_is_500() {
        let failing = Arc::new(FakeProvider::new(
            "flaky",
            FakeReply::Fail(ProviderError::api_error("openai", 503, "overloaded")),
        ));
        let app = test::init_service(create_app(app_state(registry_with(vec![failing])))).await;

        let resp = post_json!(app, "/generate", &generate_body("flaky", "flaky-large"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: Value = test::read_body_json(resp).await;
        let error = json["error"].as_str().unwrap();
        assert!(error.starts_with("Failed to generate response: "));
        assert!(error.contains("overloaded"));
    }

    #[actix_web::test]
    async fn test_in_band_error_is_200() {
        let provider = Arc::new(FakeProvider::new(
            "soft",
            FakeReply::InBandError("quota exceeded".to_string()),
        ));
        let app = test::init_service(create_app(app_state(registry_with(vec![provider])))).await;

        let resp = post_json!(app, "/generate", &generate_body("soft", "soft-small"));
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"], "quota exceeded");
        assert_eq!(json["response"], "Error generating response: quota exceeded");
        assert_eq!(json["usage"], Value::Null);
    }

    #[actix_web::test]
    async fn test_providers_and_models_agree() {
        let registry = registry_with(vec![
            FakeProvider::text("beta", "x"),
            FakeProvider::text("alpha", "x"),
        ]);
        let app = test::init_service(create_app(app_state(registry))).await;

        let resp = get!(app, "/providers");
        assert_eq!(resp.status(), StatusCode::OK);
        let providers: Value = test::read_body_json(resp).await;
        assert_eq!(providers, json!({"providers": ["alpha", "beta"]}));

        let resp = get!(app, "/models");
        let models: Value = test::read_body_json(resp).await;
        let mut keys: Vec<_> = models.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["alpha", "beta"]);
        assert_eq!(
            models["alpha"],
            json!([
                {"id": "alpha-large", "name": "Large"},
                {"id": "alpha-small", "name": "Small"}
            ])
        );
    }

    #[actix_web::test]
    async fn test_models_for_one_provider() {
        let app = test::init_service(create_app(app_state(registry_with(vec![
            FakeProvider::text("alpha", "x"),
        ]))))
        .await;

        let resp = get!(app, "/models/alpha");
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["provider"], "alpha");
        assert_eq!(json["models"].as_array().unwrap().len(), 2);

        let resp = get!(app, "/models/zeta");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, json!({"error": "Provider 'zeta' not configured"}));
    }

    #[actix_web::test]
    async fn test_empty_registry_lists_nothing() {
        let app = test::init_service(create_app(app_state(ProviderRegistry::new()))).await;

        let providers: Value = test::read_body_json(get!(app, "/providers")).await;
        assert_eq!(providers, json!({"providers": []}));
        let models: Value = test::read_body_json(get!(app, "/models")).await;
        assert_eq!(models, json!({}));
    }

    #[actix_web::test]
    async fn test_fallback_handlers() {
        let app = test::init_service(create_app(app_state(ProviderRegistry::new()))).await;

        let resp = get!(app, "/v1/chat/completions");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = post_json!(app, "/providers", &json!({}));
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json, json!({"error": "Method not allowed"}));
    }

    #[actix_web::test]
    async fn test_registry_changes_visible_to_running_app() {
        let state = app_state(ProviderRegistry::new());
        let app = test::init_service(create_app(state.clone())).await;

        state.registry.register(FakeProvider::text("late", "hello"));
        let resp = post_json!(app, "/generate", &generate_body("late", "late-large"));
        assert_eq!(resp.status(), StatusCode::OK);

        state.registry.unregister("late");
        let resp = post_json!(app, "/generate", &generate_body("late", "late-large"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
