//! HTTP transport tests against a local mock server

#[cfg(test)]
mod tests {
    use crate::common::DocumentFactory;
    use bytes::Bytes;
    use regdoc_gateway::config::{RateLimitConfig, TransportConfig, WindowUnit};
    use regdoc_gateway::{
        Config, Encoder, GatewayError, HttpTransport, JsonEncoder, RateLimitedGateway, Signature,
        Transport, TransportError,
    };
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CREATE_PATH: &str = "/api/v3/lk/documents/create";

    fn transport_config(server: &MockServer) -> TransportConfig {
        TransportConfig {
            timeout_secs: 2,
            connect_timeout_secs: 1,
            ..TransportConfig::default()
        }
        .with_endpoint(format!("{}{}", server.uri(), CREATE_PATH))
    }

    #[tokio::test]
    async fn test_post_carries_body_and_credential() {
        let server = MockServer::start().await;
        let document = DocumentFactory::create("doc-1");

        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .and(header("content-type", "application/json"))
            .and(header("authorization", "Bearer c2lnbmF0dXJl"))
            .and(body_json(&document))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"value":"7a1b"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&transport_config(&server)).unwrap();
        let body = JsonEncoder.encode(&document).unwrap();
        let signature = Signature::new("c2lnbmF0dXJl").unwrap();

        let response = transport.send(body, &signature).await.unwrap();
        assert_eq!(response, Bytes::from_static(br#"{"value":"7a1b"}"#));
    }

    #[tokio::test]
    async fn test_raw_token_in_custom_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("x-signature", "raw-token"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let config = TransportConfig {
            auth_header: "X-Signature".to_string(),
            auth_scheme: None,
            ..transport_config(&server)
        };
        let transport = HttpTransport::new(&config).unwrap();

        let response = transport
            .send(Bytes::from_static(b"{}"), &Signature::new("raw-token").unwrap())
            .await
            .unwrap();
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_becomes_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpTransport::new(&transport_config(&server)).unwrap();
        let err = transport
            .send(Bytes::from_static(b"{}"), &DocumentFactory::signature())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TransportError::Status {
                status: 500,
                body: "internal failure".to_string()
            }
        );
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = TransportConfig {
            timeout_secs: 1,
            ..transport_config(&server)
        };
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .send(Bytes::from_static(b"{}"), &DocumentFactory::signature())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Timeout(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Bind then release a port so nothing is listening on it
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = TransportConfig {
            connect_timeout_secs: 1,
            ..TransportConfig::default()
        }
        .with_endpoint(format!("http://127.0.0.1:{}{}", port, CREATE_PATH));
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .send(Bytes::from_static(b"{}"), &DocumentFactory::signature())
            .await
            .unwrap_err();

        assert!(
            matches!(err, TransportError::Network(_) | TransportError::Timeout(_)),
            "got {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_gateway_from_config_end_to_end() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(CREATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": "doc-id-1"})))
            .expect(2)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.gateway.transport = transport_config(&server);
        config.gateway.rate_limit = RateLimitConfig::per(WindowUnit::Second, 5);

        let gateway = RateLimitedGateway::from_config(&config).unwrap();
        let signature = DocumentFactory::signature();

        for id in ["doc-1", "doc-2"] {
            let response = gateway
                .submit(&DocumentFactory::create(id), &signature)
                .await
                .unwrap();
            let body: serde_json::Value = response.json().unwrap();
            assert_eq!(body["value"], "doc-id-1");
        }

        assert_eq!(gateway.stats().snapshot().completed, 2);
    }

    #[tokio::test]
    async fn test_gateway_surfaces_http_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad signature"))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.gateway.transport = transport_config(&server);

        let gateway = RateLimitedGateway::from_config(&config).unwrap();
        let err = gateway
            .submit(&DocumentFactory::create("doc"), &DocumentFactory::signature())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GatewayError::TransportFailure(TransportError::Status { status: 401, .. })
        ));
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let mut config = Config::default();
        config.gateway.rate_limit.capacity = 0;

        let result = RateLimitedGateway::from_config(&config);
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }
}
