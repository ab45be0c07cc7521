use payloads::{PoliticalPartyId, Resource, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, party_details_a, spawn_app};

#[tokio::test]
async fn create_and_find_one() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let created = app.create_test_party().await?;

    let fetched = app
        .client
        .political_parties()
        .find_one(created.id, &app.session, &app.cancel)
        .await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.title(), "Civic Renewal Party (CRP)");

    Ok(())
}

#[tokio::test]
async fn ids_are_not_reused_after_remove() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let parties = app.client.political_parties();

    let first = app.create_test_party().await?;
    parties.remove(first.id, &app.session, &app.cancel).await?;
    let second = app.create_test_party().await?;

    assert_eq!(first.id, PoliticalPartyId(1));
    assert_eq!(second.id, PoliticalPartyId(2));
    let listed = parties.find(&app.session, &app.cancel).await?;
    assert_eq!(listed, vec![second]);

    Ok(())
}

#[tokio::test]
async fn partial_update_keeps_other_fields() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let created = app.create_test_party().await?;
    let parties = app.client.political_parties();

    let patch = requests::UpdatePoliticalParty {
        ideology: Some("Liberalism".into()),
        ..Default::default()
    };
    parties
        .update(created.id, &patch, &app.session, &app.cancel)
        .await?;

    let fetched = parties
        .find_one(created.id, &app.session, &app.cancel)
        .await?;
    let expected = payloads::PoliticalParty {
        ideology: "Liberalism".into(),
        ..party_details_a()
    };
    assert_eq!(fetched.party_details, expected);

    Ok(())
}

#[tokio::test]
async fn other_users_see_the_same_parties() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let created = app.create_test_party().await?;

    app.create_bob_user().await?;
    let listed = app
        .client
        .political_parties()
        .find(&app.session, &app.cancel)
        .await?;

    assert_eq!(listed, vec![created]);

    Ok(())
}

#[tokio::test]
async fn remove_without_session_is_unauthorized() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let created = app.create_test_party().await?;
    app.session.update(|state| state.clear_session());

    let result = app
        .client
        .political_parties()
        .remove(created.id, &app.session, &app.cancel)
        .await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    // still present for a signed-in user
    app.login_alice().await?;
    let listed = app
        .client
        .political_parties()
        .find(&app.session, &app.cancel)
        .await?;
    assert_eq!(listed, vec![created]);

    Ok(())
}
