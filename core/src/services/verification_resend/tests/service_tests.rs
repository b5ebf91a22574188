//! Unit tests for the resend service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::ResendRequest;
use crate::errors::ResendError;
use crate::services::verification_resend::{ResendServiceConfig, VerificationResendService};

use super::mocks::{
    FixedClock, MockCooldownStore, MockIdentityProvider, TokenBehavior, TriggerBehavior,
};

const NOW: i64 = 1_723_000_000_000;
const EMAIL: &str = "a@example.com";
const USER_ID: &str = "auth0|123";
const CLIENT_ID: &str = "c1";
const RETURN_TO: &str = "https://app/cb";

fn service(
    provider: Arc<MockIdentityProvider>,
    store: Arc<MockCooldownStore>,
) -> VerificationResendService<MockIdentityProvider, MockCooldownStore> {
    VerificationResendService::new(provider, store, ResendServiceConfig::default())
        .with_clock(Arc::new(FixedClock::at(NOW)))
}

fn request() -> ResendRequest {
    ResendRequest::new(Some(EMAIL), Some(CLIENT_ID), Some(RETURN_TO)).unwrap()
}

#[tokio::test]
async fn test_missing_parameters_make_no_remote_calls() {
    let cases = [
        (None, Some(CLIENT_ID), Some(RETURN_TO)),
        (Some(EMAIL), None, Some(RETURN_TO)),
        (Some(EMAIL), Some(CLIENT_ID), None),
        (Some(" "), Some(CLIENT_ID), Some(RETURN_TO)),
        (Some(EMAIL), Some(""), Some(RETURN_TO)),
    ];

    for (email, client_id, return_to) in cases {
        let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
        let store = Arc::new(MockCooldownStore::new());
        let service = service(provider.clone(), store.clone());

        let result = service.resend_from_parts(email, client_id, return_to).await;

        assert!(matches!(result, Err(ResendError::BadRequest { .. })));
        assert_eq!(provider.remote_calls(), 0);
        assert_eq!(store.read_calls(), 0);
        assert_eq!(store.write_calls(), 0);
    }
}

#[tokio::test]
async fn test_first_resend_creates_cooldown_entry() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let store = Arc::new(MockCooldownStore::new());
    let service = service(provider.clone(), store.clone());

    let receipt = service.resend(&request()).await.unwrap();

    assert_eq!(receipt.user_id, USER_ID);
    assert_eq!(receipt.sent_at_millis, NOW);
    assert!(receipt.cooldown_recorded);
    assert_eq!(store.entry(USER_ID), Some(NOW));
    assert_eq!(provider.trigger_calls(), 1);
}

#[tokio::test]
async fn test_end_to_end_passes_client_and_redirect() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let store = Arc::new(MockCooldownStore::new());
    let service = service(provider.clone(), store.clone());

    let receipt = service
        .resend_from_parts(Some(EMAIL), Some(CLIENT_ID), Some(RETURN_TO))
        .await
        .unwrap();

    assert_eq!(receipt.user_id, USER_ID);
    let triggered = provider.triggered.lock().unwrap().clone();
    assert_eq!(
        triggered,
        vec![(USER_ID.to_string(), CLIENT_ID.to_string(), RETURN_TO.to_string())]
    );
    assert_eq!(store.entry(USER_ID), Some(NOW));
}

#[tokio::test]
async fn test_cooldown_active_one_ms_before_window_closes() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let store = Arc::new(MockCooldownStore::new().with_entry(USER_ID, NOW - 59_999));
    let service = service(provider.clone(), store.clone());

    let result = service.resend(&request()).await;

    assert_eq!(result, Err(ResendError::CooldownActive { retry_after_ms: 1 }));
    assert_eq!(provider.trigger_calls(), 0);
    assert_eq!(store.write_calls(), 0);
    assert_eq!(store.entry(USER_ID), Some(NOW - 59_999));
}

#[tokio::test]
async fn test_cooldown_expired_exactly_at_window() {
    for last_sent in [NOW - 60_000, NOW - 60_001, NOW - 86_400_000] {
        let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
        let store = Arc::new(MockCooldownStore::new().with_entry(USER_ID, last_sent));
        let service = service(provider.clone(), store.clone());

        let receipt = service.resend(&request()).await.unwrap();

        assert_eq!(receipt.sent_at_millis, NOW);
        assert_eq!(provider.trigger_calls(), 1);
        assert_eq!(store.entry(USER_ID), Some(NOW));
    }
}

#[tokio::test]
async fn test_repeat_request_waits_out_the_window() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let store = Arc::new(MockCooldownStore::new());
    let clock = Arc::new(FixedClock::at(NOW));
    let service = VerificationResendService::new(
        provider.clone(),
        store.clone(),
        ResendServiceConfig::default(),
    )
    .with_clock(clock.clone());

    service.resend(&request()).await.unwrap();

    clock.advance(30_000);
    assert_eq!(
        service.resend(&request()).await,
        Err(ResendError::CooldownActive {
            retry_after_ms: 30_000
        })
    );

    clock.advance(30_000);
    let receipt = service.resend(&request()).await.unwrap();
    assert_eq!(receipt.sent_at_millis, NOW + 60_000);
    assert_eq!(provider.trigger_calls(), 2);
    assert_eq!(store.entry(USER_ID), Some(NOW + 60_000));
}

#[tokio::test]
async fn test_rejected_resend_leaves_cooldown_untouched() {
    let detail = serde_json::json!({
        "statusCode": 400,
        "error": "Bad Request",
        "message": "Payload validation error"
    });
    let provider = Arc::new(
        MockIdentityProvider::new()
            .with_user(EMAIL, USER_ID)
            .with_trigger_behavior(TriggerBehavior::Reject(400, detail.clone())),
    );
    let store = Arc::new(MockCooldownStore::new().with_entry(USER_ID, NOW - 120_000));
    let service = service(provider.clone(), store.clone());

    let result = service.resend(&request()).await;

    assert_eq!(
        result,
        Err(ResendError::ResendRejected {
            status: 400,
            detail
        })
    );
    assert_eq!(store.write_calls(), 0);
    assert_eq!(store.entry(USER_ID), Some(NOW - 120_000));
}

#[tokio::test]
async fn test_trigger_transport_failure_leaves_cooldown_untouched() {
    let provider = Arc::new(
        MockIdentityProvider::new()
            .with_user(EMAIL, USER_ID)
            .with_trigger_behavior(TriggerBehavior::Unavailable),
    );
    let store = Arc::new(MockCooldownStore::new());
    let service = service(provider.clone(), store.clone());

    let result = service.resend(&request()).await;

    assert!(matches!(
        result,
        Err(ResendError::AuthBackendUnavailable { .. })
    ));
    assert_eq!(store.write_calls(), 0);
    assert_eq!(store.entry(USER_ID), None);
}

#[tokio::test]
async fn test_unknown_email_skips_cooldown_and_resend() {
    let provider = Arc::new(MockIdentityProvider::new().with_user("other@example.com", USER_ID));
    let store = Arc::new(MockCooldownStore::new());
    let service = service(provider.clone(), store.clone());

    let result = service.resend(&request()).await;

    assert_eq!(result, Err(ResendError::UserNotFound));
    assert_eq!(provider.lookup_calls(), 1);
    assert_eq!(store.read_calls(), 0);
    assert_eq!(provider.trigger_calls(), 0);
}

#[tokio::test]
async fn test_store_read_failure_does_not_block_resend() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let mut store = MockCooldownStore::new().with_entry(USER_ID, NOW - 1_000);
    store.read_fails = true;
    let store = Arc::new(store);
    let service = service(provider.clone(), store.clone());

    let receipt = service.resend(&request()).await.unwrap();

    assert_eq!(receipt.user_id, USER_ID);
    assert_eq!(provider.trigger_calls(), 1);
    assert_eq!(store.entry(USER_ID), Some(NOW));
}

#[tokio::test]
async fn test_store_write_failure_still_reports_success() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let mut store = MockCooldownStore::new();
    store.write_fails = true;
    let store = Arc::new(store);
    let service = service(provider.clone(), store.clone());

    let receipt = service.resend(&request()).await.unwrap();

    assert!(!receipt.cooldown_recorded);
    assert_eq!(store.write_calls(), 1);
    assert_eq!(store.entry(USER_ID), None);
}

#[tokio::test]
async fn test_token_failures_map_to_backend_unavailable() {
    for behavior in [TokenBehavior::Unavailable, TokenBehavior::NoToken] {
        let provider = Arc::new(
            MockIdentityProvider::new()
                .with_user(EMAIL, USER_ID)
                .with_token_behavior(behavior),
        );
        let store = Arc::new(MockCooldownStore::new());
        let service = service(provider.clone(), store.clone());

        let result = service.resend(&request()).await;

        assert!(matches!(
            result,
            Err(ResendError::AuthBackendUnavailable { .. })
        ));
        assert_eq!(provider.token_calls(), 1);
        assert_eq!(provider.lookup_calls(), 0);
        assert_eq!(store.read_calls(), 0);
    }
}

#[tokio::test]
async fn test_lookup_failure_maps_to_backend_unavailable() {
    let provider = Arc::new(
        MockIdentityProvider::new()
            .with_user(EMAIL, USER_ID)
            .failing_lookup(),
    );
    let store = Arc::new(MockCooldownStore::new());
    let service = service(provider.clone(), store.clone());

    let result = service.resend(&request()).await;

    assert!(matches!(
        result,
        Err(ResendError::AuthBackendUnavailable { .. })
    ));
    assert_eq!(store.read_calls(), 0);
    assert_eq!(provider.trigger_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_token_timeout_maps_to_backend_unavailable() {
    let provider = Arc::new(
        MockIdentityProvider::new()
            .with_user(EMAIL, USER_ID)
            .with_token_behavior(TokenBehavior::Hang),
    );
    let store = Arc::new(MockCooldownStore::new());
    let config = ResendServiceConfig {
        call_timeout: Duration::from_millis(2_000),
        ..Default::default()
    };
    let service = VerificationResendService::new(provider.clone(), store.clone(), config)
        .with_clock(Arc::new(FixedClock::at(NOW)));

    match service.resend(&request()).await {
        Err(ResendError::AuthBackendUnavailable { message }) => {
            assert!(message.contains("timed out"));
        }
        other => panic!("Expected AuthBackendUnavailable, got {:?}", other),
    }
    assert_eq!(provider.lookup_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_store_read_timeout_does_not_block_resend() {
    let provider = Arc::new(MockIdentityProvider::new().with_user(EMAIL, USER_ID));
    let mut store = MockCooldownStore::new().with_entry(USER_ID, NOW - 1_000);
    store.read_hangs = true;
    let store = Arc::new(store);
    let service = service(provider.clone(), store.clone());

    let receipt = service.resend(&request()).await.unwrap();

    assert!(receipt.cooldown_recorded);
    assert_eq!(provider.trigger_calls(), 1);
}
