//! Error handling integration tests
//!
//! Verify that errors keep their meaning as they cross module boundaries.

#[cfg(test)]
mod tests {
    use regdoc_gateway::{CallState, GatewayError, Signature, TransportError};

    #[test]
    fn test_transport_error_flow() {
        let err: GatewayError = TransportError::timeout("no answer in 30s").into();

        assert!(err.is_transport_failure());
        assert!(!err.is_interrupted());
        assert_eq!(err.kind(), "transport_failure");
        assert!(err.to_string().starts_with("Transport failure"));
    }

    #[test]
    fn test_interrupted_wait_names_stage() {
        let err = GatewayError::interrupted(CallState::AwaitingWindow);

        assert!(err.is_interrupted());
        assert_eq!(err.to_string(), "Wait interrupted while awaiting window");
    }

    #[test]
    fn test_blank_signature_rejected() {
        let err = Signature::new("   ").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }

    #[test]
    fn test_signature_never_printed() {
        let signature = Signature::new("secret-token").unwrap();

        assert!(!format!("{:?}", signature).contains("secret-token"));
        assert!(!signature.to_string().contains("secret-token"));
    }
}
