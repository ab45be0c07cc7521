use payloads::{
    AuthState, Cancellation, ClientError, HttpError, InMemorySession,
    Resource, SessionContext, responses,
};
use reqwest::StatusCode;

use test_helpers::{
    TestApp, assert_status_code, campaign_details_a, spawn_app,
    unreachable_client,
};

async fn signed_in_app() -> anyhow::Result<TestApp> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    Ok(app)
}

#[tokio::test]
async fn bearer_token_is_sent() -> anyhow::Result<()> {
    let app = signed_in_app().await?;

    // would be a 401 without the header
    app.client.campaigns().find(&app.session, &app.cancel).await?;
    assert!(app.session.snapshot().is_authenticated());

    Ok(())
}

async fn expired_find_clears<R: Resource>() -> anyhow::Result<()> {
    let app = signed_in_app().await?;
    app.expire_sessions();

    let result = app
        .client
        .resource::<R>()
        .find(&app.session, &app.cancel)
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::UNAUTHORIZED);
            assert!(error.is_unauthorized());
        }
        _ => panic!("Expected APIError"),
    }
    assert_eq!(app.session.snapshot(), AuthState::default());

    Ok(())
}

#[tokio::test]
async fn unauthorized_campaigns_clear_session() -> anyhow::Result<()> {
    expired_find_clears::<responses::Campaign>().await
}

#[tokio::test]
async fn unauthorized_candidates_clear_session() -> anyhow::Result<()> {
    expired_find_clears::<responses::Candidate>().await
}

#[tokio::test]
async fn unauthorized_parties_clear_session() -> anyhow::Result<()> {
    expired_find_clears::<responses::PoliticalParty>().await
}

#[tokio::test]
async fn unauthorized_mutation_clears_session() -> anyhow::Result<()> {
    let app = signed_in_app().await?;
    let campaign = app.create_test_campaign().await?;
    app.expire_sessions();

    let result = app
        .client
        .campaigns()
        .remove(campaign.id, &app.session, &app.cancel)
        .await;

    assert_status_code(result, StatusCode::UNAUTHORIZED);
    assert_eq!(app.session.token(), None);
    assert!(app.store.get::<responses::Campaign>(campaign.id.0).is_ok());

    Ok(())
}

#[tokio::test]
async fn session_is_usable_again_after_sign_in() -> anyhow::Result<()> {
    let app = signed_in_app().await?;
    app.expire_sessions();
    let _ = app.client.campaigns().find(&app.session, &app.cancel).await;
    assert!(!app.session.snapshot().is_authenticated());

    app.login_alice().await?;

    let campaigns =
        app.client.campaigns().find(&app.session, &app.cancel).await?;
    assert!(campaigns.is_empty());

    Ok(())
}

#[tokio::test]
async fn other_errors_leave_session_alone() -> anyhow::Result<()> {
    let app = signed_in_app().await?;
    let before = app.session.snapshot();

    let mut details = campaign_details_a();
    details.description = "".into();
    let result = app
        .client
        .campaigns()
        .create(&details, &app.session, &app.cancel)
        .await;

    assert_status_code(result, StatusCode::BAD_REQUEST);
    assert_eq!(app.session.snapshot(), before);

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_unexpected_error() -> anyhow::Result<()> {
    let client = unreachable_client();
    let session = InMemorySession::with_token("abc");

    let result = client
        .political_parties()
        .find(&session, &Cancellation::new())
        .await;

    let error = match result {
        Err(error @ ClientError::Network(_)) => error,
        _ => panic!("Expected a network error"),
    };
    assert_eq!(error.status(), None);
    assert_eq!(error.into_http_error(), HttpError::unexpected());
    // no response, so nothing to tear down
    assert_eq!(session.token().as_deref(), Some("abc"));

    Ok(())
}

#[tokio::test]
async fn cancelled_request_never_reaches_backend() -> anyhow::Result<()> {
    let app = signed_in_app().await?;
    let cancel = Cancellation::new();
    cancel.cancel();

    let result = app
        .client
        .campaigns()
        .create(&campaign_details_a(), &app.session, &cancel)
        .await;

    assert!(matches!(result, Err(ClientError::Cancelled)));
    assert!(app.store.list::<responses::Campaign>()?.is_empty());
    // the shared token is untouched
    assert!(app.session.snapshot().is_authenticated());

    Ok(())
}

#[tokio::test]
async fn cancelling_one_owner_spares_others() -> anyhow::Result<()> {
    let app = signed_in_app().await?;
    let unmounted = Cancellation::new();
    unmounted.cancel();

    let result = app
        .client
        .campaigns()
        .find(&app.session, &unmounted)
        .await;
    assert!(matches!(result, Err(ClientError::Cancelled)));

    let campaigns =
        app.client.campaigns().find(&app.session, &app.cancel).await?;
    assert!(campaigns.is_empty());

    Ok(())
}
