//! Configuration loading tests

#[cfg(test)]
mod tests {
    use regdoc_gateway::config::{GatewayConfig, RateLimitStrategy};
    use regdoc_gateway::{AdmissionController, Config};
    use std::collections::HashMap;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn example_path() -> String {
        format!("{}/config/gateway.yaml.example", env!("CARGO_MANIFEST_DIR"))
    }

    #[tokio::test]
    async fn test_example_config_loads() {
        let config = Config::from_file(example_path()).await.unwrap();

        assert!(config.rate_limit().enabled);
        assert_eq!(config.rate_limit().capacity, 2);
        assert_eq!(config.rate_limit().window(), Duration::from_secs(60));
        assert_eq!(config.rate_limit().strategy, RateLimitStrategy::SlidingWindow);
        assert_eq!(config.transport().auth_scheme.as_deref(), Some("Bearer"));
    }

    #[tokio::test]
    async fn test_example_config_builds_limiter() {
        let config = Config::from_file(example_path()).await.unwrap();
        let limiter = AdmissionController::new(config.rate_limit()).unwrap();

        assert_eq!(limiter.capacity(), 2);
        assert_eq!(limiter.window().await, Some(Duration::from_secs(60)));
    }

    #[tokio::test]
    async fn test_zero_window_rejected_unless_disabled() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"rate_limit:\n  capacity: 1\n  window_ms: 0\n")
            .unwrap();
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.is_config());

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"rate_limit:\n  enabled: false\n  capacity: 1\n  window_ms: 0\n")
            .unwrap();
        let config = Config::from_file(file.path()).await.unwrap();
        let limiter = AdmissionController::new(config.rate_limit()).unwrap();
        assert_eq!(limiter.window().await, None);
    }

    #[test]
    fn test_environment_overrides() {
        let vars: HashMap<&str, &str> = [
            ("REGDOC_RATE_LIMIT_CAPACITY", "4"),
            ("REGDOC_RATE_LIMIT_WINDOW_MS", "1000"),
            ("REGDOC_RATE_LIMIT_STRATEGY", "fixed_interval"),
            ("REGDOC_ENDPOINT", "http://localhost:8080/create"),
            ("REGDOC_AUTH_SCHEME", ""),
        ]
        .into_iter()
        .collect();

        let gateway = GatewayConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(gateway.rate_limit.capacity, 4);
        assert_eq!(gateway.rate_limit.strategy, RateLimitStrategy::FixedInterval);
        assert_eq!(gateway.transport.endpoint, "http://localhost:8080/create");
        assert_eq!(gateway.transport.auth_scheme, None);

        let config = Config { gateway };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_rejects_garbage() {
        let err = GatewayConfig::from_lookup(|key| {
            (key == "REGDOC_RATE_LIMIT_CAPACITY").then(|| "many".to_string())
        })
        .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("REGDOC_RATE_LIMIT_CAPACITY"));
    }
}
