use payloads::{CandidateId, ClientError, requests};
use reqwest::StatusCode;

use test_helpers::{assert_status_code, candidate_details_a, spawn_app};

#[tokio::test]
async fn create_and_find() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let party = app.create_test_party().await?;

    let candidate = app.create_test_candidate(party.id).await?;

    assert_eq!(candidate.full_name(), "Lucia Fernandez");
    assert_eq!(candidate.candidate_details.political_party_id, party.id);
    let listed = app
        .client
        .candidates()
        .find(&app.session, &app.cancel)
        .await?;
    assert_eq!(listed, vec![candidate]);

    Ok(())
}

#[tokio::test]
async fn update_moves_candidate_to_other_party() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let first = app.create_test_party().await?;
    let second = app.create_test_party().await?;
    let candidate = app.create_test_candidate(first.id).await?;
    let candidates = app.client.candidates();

    let patch = requests::UpdateCandidate {
        political_party_id: Some(second.id),
        position: Some("Governor".into()),
        ..Default::default()
    };
    candidates
        .update(candidate.id, &patch, &app.session, &app.cancel)
        .await?;

    let fetched = candidates
        .find_one(candidate.id, &app.session, &app.cancel)
        .await?;
    assert_eq!(fetched.candidate_details.political_party_id, second.id);
    assert_eq!(fetched.candidate_details.position, "Governor");
    assert_eq!(
        fetched.candidate_details.biography,
        candidate_details_a(first.id).biography
    );

    Ok(())
}

#[tokio::test]
async fn update_missing_candidate_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let patch = requests::UpdateCandidate {
        name: Some("Nobody".into()),
        ..Default::default()
    };
    let result = app
        .client
        .candidates()
        .update(CandidateId(7), &patch, &app.session, &app.cancel)
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::NOT_FOUND);
            assert_eq!(
                error.message.as_deref(),
                Some("Candidate 7 not found")
            );
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn blank_patch_field_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let party = app.create_test_party().await?;
    let candidate = app.create_test_candidate(party.id).await?;

    let patch = requests::UpdateCandidate {
        last_name: Some("  ".into()),
        ..Default::default()
    };
    let result = app
        .client
        .candidates()
        .update(candidate.id, &patch, &app.session, &app.cancel)
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(
                error.field("last_name"),
                Some("last_name should not be empty")
            );
            assert_eq!(error.field("name"), None);
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn remove_candidate() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let party = app.create_test_party().await?;
    let candidate = app.create_test_candidate(party.id).await?;
    let candidates = app.client.candidates();

    candidates
        .remove(candidate.id, &app.session, &app.cancel)
        .await?;

    let result = candidates
        .find_one(candidate.id, &app.session, &app.cancel)
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    Ok(())
}
