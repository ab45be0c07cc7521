use payloads::{
    AuthState, Cancellation, ClientError, InMemorySession, SessionContext,
    requests,
};
use reqwest::StatusCode;

use test_helpers::{
    alice_account, alice_credentials, assert_status_code, bob_account,
    spawn_app, unreachable_client,
};

#[tokio::test]
async fn sign_up_establishes_session() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let session = app.create_alice_user().await?;

    assert_eq!(session.user.email, "alice@example.com");
    assert_eq!(session.user.full_name, "Alice Moreno");
    let state = app.session.snapshot();
    assert_eq!(state.token.as_deref(), Some(session.token.as_str()));
    assert_eq!(state.session, Some(session.user));

    Ok(())
}

#[tokio::test]
async fn sign_in_returns_user_and_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let registered = app.create_alice_user().await?;
    app.session.update(|state| state.clear_session());

    let session = app.login_alice().await?;

    assert_eq!(session.user, registered.user);
    assert!(!session.token.is_empty());
    assert_ne!(session.token, registered.token);
    assert_eq!(
        app.session.snapshot(),
        AuthState {
            session: Some(session.user.clone()),
            token: Some(session.token.clone()),
        }
    );

    Ok(())
}

#[tokio::test]
async fn sign_in_refused() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let body = requests::Credentials {
        email: "alice@example.com".into(),
        password: "wrong-password".into(),
    };
    let result = app.client.sign_in(&body, &app.session, &app.cancel).await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert_eq!(error.status_code, Some(401));
            assert_eq!(error.message.as_deref(), Some("Unauthorized"));
        }
        _ => panic!("Expected APIError"),
    }

    // credential failure tears down the existing session
    assert_eq!(app.session.snapshot(), AuthState::default());

    Ok(())
}

#[tokio::test]
async fn sign_in_does_not_send_bearer_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    // a bogus token in the store must not interfere with signing in
    let session = InMemorySession::with_token("stale-token");
    let result = app
        .client
        .sign_in(&alice_credentials(), &session, &Cancellation::new())
        .await?;

    assert_eq!(result.user.email, "alice@example.com");

    Ok(())
}

#[tokio::test]
async fn sign_up_reports_field_errors() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = requests::NewAccount {
        email: "not-an-email".into(),
        password: "123".into(),
        full_name: "".into(),
    };
    let result = app.client.sign_up(&body, &app.session, &app.cancel).await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(error.field("email"), Some("email must be an email"));
            assert!(error.field("password").is_some());
            assert_eq!(
                error.field("full_name"),
                Some("full_name should not be empty")
            );
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn duplicate_sign_up_conflicts() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let result = app
        .client
        .sign_up(&alice_account(), &app.session, &app.cancel)
        .await;
    assert_status_code(result, StatusCode::CONFLICT);

    // a non-401 failure leaves the session alone
    assert!(app.session.snapshot().is_authenticated());

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_reported_as_http_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/auth/sign-in", app.address()))
        .json(&serde_json::json!({ "email": "alice@example.com" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: payloads::HttpError = response.json().await?;
    assert_eq!(error.status_code, Some(400));
    assert!(error.message.is_some());

    Ok(())
}

#[tokio::test]
async fn unauthorized_sign_in_clears_any_context() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let session = InMemorySession::with_token("abc");
    let result = app
        .client
        .sign_in(&alice_credentials(), &session, &Cancellation::new())
        .await;

    assert_status_code(result, StatusCode::UNAUTHORIZED);
    assert_eq!(session.token(), None);

    Ok(())
}

#[tokio::test]
async fn rejected_login_clears_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    assert!(app.session.snapshot().is_authenticated());

    let body = requests::Credentials {
        email: "alice@example.com".into(),
        password: "".into(),
    };
    let result = app.client.login(&body, &app.session, &app.cancel).await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert!(error.field("password").is_some());
        }
        _ => panic!("Expected APIError"),
    }
    assert_eq!(app.session.snapshot(), AuthState::default());

    Ok(())
}

#[tokio::test]
async fn unreachable_login_clears_session() -> anyhow::Result<()> {
    let session = InMemorySession::with_token("t1");

    let result = unreachable_client()
        .login(&alice_credentials(), &session, &Cancellation::new())
        .await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(session.snapshot(), AuthState::default());

    Ok(())
}

#[tokio::test]
async fn cancelled_login_keeps_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let before = app.session.snapshot();

    let cancel = Cancellation::new();
    cancel.cancel();
    let result = app
        .client
        .login(&alice_credentials(), &app.session, &cancel)
        .await;

    assert!(matches!(result, Err(ClientError::Cancelled)));
    assert_eq!(app.session.snapshot(), before);

    Ok(())
}

#[tokio::test]
async fn rejected_register_keeps_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let alice = app.create_alice_user().await?;

    let body = requests::NewAccount {
        password: "".into(),
        ..bob_account()
    };
    let result = app.client.register(&body, &app.session, &app.cancel).await;
    assert_status_code(result, StatusCode::BAD_REQUEST);

    let result = app
        .client
        .register(&alice_account(), &app.session, &app.cancel)
        .await;
    assert_status_code(result, StatusCode::CONFLICT);

    let state = app.session.snapshot();
    assert_eq!(state.token, Some(alice.token));
    assert_eq!(state.session, Some(alice.user));

    Ok(())
}

#[tokio::test]
async fn register_replaces_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let bob = app
        .client
        .register(&bob_account(), &app.session, &app.cancel)
        .await?;

    assert_eq!(app.session.snapshot().user(), Some(&bob.user));

    Ok(())
}
