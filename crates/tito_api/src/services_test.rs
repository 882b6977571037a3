#[cfg(test)]
mod tests {
    use crate::client_test::tests::{base_url, client, recording_logger, silent_logger, silent_notifier};
    use crate::error::TitoError;
    use crate::event_service::EventService;
    use crate::ticket_service::TicketService;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_event_returns_document_unchanged() {
        let server = MockServer::start().await;
        let event = json!({"event": {"slug": "conf-2024", "title": "Conf 2024", "live": true}});
        Mock::given(method("GET"))
            .and(path("/acme/conf-2024"))
            .and(header("Authorization", "Token token=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(event.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(client(&base_url(&server), "abc123", silent_logger(), silent_notifier()));
        let value = EventService::new(client)
            .get_event("acme", "conf-2024")
            .await
            .unwrap();

        assert_eq!(value, event);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_get_tickets_uses_tickets_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/myaccount/myevent/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tickets": [{"reference": "ABCD-1"}]})))
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(client(&base_url(&server), "abc123", silent_logger(), silent_notifier()));
        let value = TicketService::new(client)
            .get_tickets("myaccount", "myevent")
            .await
            .unwrap();

        assert_eq!(value["tickets"][0]["reference"], "ABCD-1");
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_empty_document_is_reported_as_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = Arc::new(client(&base_url(&server), "abc123", silent_logger(), silent_notifier()));
        let err = EventService::new(client)
            .get_event("acme", "conf-2024")
            .await
            .unwrap_err();

        assert!(matches!(err, TitoError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_client_failure_propagates_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let (logger, entries) = recording_logger(1);
        let client = Arc::new(client(&base_url(&server), "abc123", logger, silent_notifier()));
        let err = TicketService::new(client)
            .get_tickets("acme", "conf-2024")
            .await
            .unwrap_err();

        assert!(matches!(err, TitoError::UnexpectedStatus { status: 403 }));
        assert_eq!(entries.lock().unwrap().len(), 1);
    }
}
