//! Tests for the error system.

use roastline::error::*;

#[test]
fn error_api_creation() {
    let err = RoastError::api(404, "Not found");
    assert!(matches!(&err, RoastError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "API error (status 404): Not found");
}

#[test]
fn error_helper_mappings_are_stable_for_major_variants() {
    struct Case {
        error: RoastError,
        expected_category: ErrorCategory,
        expected_transport: bool,
        expected_recovery: RecoverySuggestion,
    }

    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();

    let cases = vec![
        Case {
            error: RoastError::InvalidInput("speaker.name must not be empty".into()),
            expected_category: ErrorCategory::InvalidInput,
            expected_transport: false,
            expected_recovery: RecoverySuggestion::FixCallerInput,
        },
        Case {
            error: RoastError::Configuration("missing token".into()),
            expected_category: ErrorCategory::Configuration,
            expected_transport: false,
            expected_recovery: RecoverySuggestion::CheckConfiguration,
        },
        Case {
            error: RoastError::Timeout(5000),
            expected_category: ErrorCategory::Timeout,
            expected_transport: true,
            expected_recovery: RecoverySuggestion::IncreaseTimeout,
        },
        Case {
            error: RoastError::api(403, "forbidden"),
            expected_category: ErrorCategory::Authentication,
            expected_transport: true,
            expected_recovery: RecoverySuggestion::CheckCredentials,
        },
        Case {
            error: RoastError::api(502, "bad gateway"),
            expected_category: ErrorCategory::Transport,
            expected_transport: true,
            expected_recovery: RecoverySuggestion::UseFallback,
        },
        Case {
            error: RoastError::RateLimited {
                retry_after_ms: Some(1000),
            },
            expected_category: ErrorCategory::RateLimit,
            expected_transport: true,
            expected_recovery: RecoverySuggestion::UseFallback,
        },
        Case {
            error: RoastError::Network(network_error),
            expected_category: ErrorCategory::Transport,
            expected_transport: true,
            expected_recovery: RecoverySuggestion::UseFallback,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.expected_category, "{}", case.error);
        assert_eq!(case.error.is_transport(), case.expected_transport, "{}", case.error);
        assert_eq!(
            case.error.recovery_suggestion(),
            case.expected_recovery,
            "{}",
            case.error
        );
    }
}

#[test]
fn fallback_reason_round_trips_through_strings() {
    assert_eq!(FallbackReason::RefusalDetected.to_string(), "refusal_detected");
    assert_eq!(
        "transport_failure".parse::<FallbackReason>().unwrap(),
        FallbackReason::TransportFailure
    );
}
