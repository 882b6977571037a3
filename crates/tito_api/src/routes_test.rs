#[cfg(test)]
mod tests {
    use crate::client::{TitoClient, TitoConfig};
    use crate::handlers::TitoState;
    use crate::routes::routes;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tito_common::{MessageQueue, TracingLogger};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app(base_url: &str, token: &str) -> Router {
        let messages = Arc::new(MessageQueue::new());
        let client = TitoClient::new(
            TitoConfig::new(base_url, token),
            Arc::new(TracingLogger),
            messages.clone(),
        );
        routes(Arc::new(TitoState::new(Arc::new(client), messages)))
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_event_route_returns_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/acme/conf-2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"event": {"slug": "conf-2024"}})))
            .mount(&server)
            .await;

        let app = app(&format!("{}/", server.uri()), "abc123");
        let (status, body) = get(&app, "/tito/acme/conf-2024").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["event"]["slug"], "conf-2024");
    }

    #[tokio::test]
    async fn test_tickets_route_returns_tickets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/acme/conf-2024/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tickets": [{"id": 1}]})))
            .mount(&server)
            .await;

        let app = app(&format!("{}/", server.uri()), "abc123");
        let (status, body) = get(&app, "/tito/acme/conf-2024/tickets").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tickets"][0]["id"], 1);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let app = app(&format!("{}/", server.uri()), "abc123");
        let (status, body) = get(&app, "/tito/acme/missing").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], 502);
    }

    #[tokio::test]
    async fn test_missing_token_queues_message() {
        let app = app("http://127.0.0.1:9/", "");

        let (status, _) = get(&app, "/tito/acme/conf-2024/tickets").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, messages) = get(&app, "/tito/messages").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(messages.as_array().map(Vec::len), Some(1));
        assert_eq!(messages[0]["severity"], "error");

        // Draining empties the queue
        let (_, messages) = get(&app, "/tito/messages").await;
        assert_eq!(messages, json!([]));
    }

    #[tokio::test]
    async fn test_state_from_settings_shares_queue() {
        let mut settings = HashMap::new();
        settings.insert("tito_api_url".to_string(), "https://api.tito.io/v3/".to_string());
        settings.insert("tito_settings_path".to_string(), "/settings/tito".to_string());

        let state = Arc::new(TitoState::from_settings(&settings, Arc::new(TracingLogger)));
        let app = routes(state.clone());

        let (status, _) = get(&app, "/tito/acme/conf-2024").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let pending = state.messages.drain();
        assert_eq!(pending.len(), 1);
        assert!(pending[0].text.ends_with("/settings/tito"));
    }
}
