use anyhow::Context;
use payloads::{CampaignId, CandidateId, ClientError, HttpError, requests};
use reqwest::StatusCode;

use test_helpers::{
    assert_status_code, campaign_details_a, campaign_details_b, spawn_app,
};

#[tokio::test]
async fn find_returns_empty_list_initially() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let campaigns =
        app.client.campaigns().find(&app.session, &app.cancel).await?;
    assert!(campaigns.is_empty());

    Ok(())
}

#[tokio::test]
async fn create_is_visible_after_refetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let campaigns = app.client.campaigns();

    campaigns
        .create(&campaign_details_a(), &app.session, &app.cancel)
        .await?;
    campaigns
        .create(&campaign_details_b(), &app.session, &app.cancel)
        .await?;

    let listed = campaigns.find(&app.session, &app.cancel).await?;
    let names: Vec<_> = listed
        .iter()
        .map(|c| c.campaign_details.name.as_str())
        .collect();
    assert_eq!(names, ["Municipal Elections 2026", "Regional Referendum"]);
    assert!(listed.iter().all(|c| c.candidates.is_empty()));

    Ok(())
}

#[tokio::test]
async fn find_one_and_update() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let created = app.create_test_campaign().await?;
    let campaigns = app.client.campaigns();

    let patch = requests::UpdateCampaign {
        end_date: Some("2026-11-01".into()),
        ..Default::default()
    };
    campaigns
        .update(created.id, &patch, &app.session, &app.cancel)
        .await?;

    let fetched = campaigns
        .find_one(created.id, &app.session, &app.cancel)
        .await?;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.campaign_details.end_date, "2026-11-01");
    assert_eq!(
        fetched.campaign_details.name,
        created.campaign_details.name
    );

    Ok(())
}

#[tokio::test]
async fn find_one_missing_is_not_found() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let result = app
        .client
        .campaigns()
        .find_one(CampaignId(42), &app.session, &app.cancel)
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::NOT_FOUND);
            assert_eq!(
                error.message.as_deref(),
                Some("Campaign 42 not found")
            );
        }
        _ => panic!("Expected APIError"),
    }
    // a 404 does not touch the session
    assert!(app.session.snapshot().is_authenticated());

    Ok(())
}

#[tokio::test]
async fn create_with_blank_fields_is_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let mut details = campaign_details_a();
    details.name = "".into();
    let result = app
        .client
        .campaigns()
        .create(&details, &app.session, &app.cancel)
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(error.field("name"), Some("name should not be empty"));
        }
        _ => panic!("Expected APIError"),
    }

    let listed =
        app.client.campaigns().find(&app.session, &app.cancel).await?;
    assert!(listed.is_empty());

    Ok(())
}

#[tokio::test]
async fn removing_twice_surfaces_backend_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let created = app.create_test_campaign().await?;
    let campaigns = app.client.campaigns();

    campaigns
        .remove(created.id, &app.session, &app.cancel)
        .await?;
    assert!(campaigns.find(&app.session, &app.cancel).await?.is_empty());

    let result =
        campaigns.remove(created.id, &app.session, &app.cancel).await;
    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::NOT_FOUND);
            assert_eq!(
                error,
                HttpError::with_message(
                    404,
                    "Not Found",
                    format!("Campaign {} not found", created.id)
                )
            );
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.campaigns().find(&app.session, &app.cancel).await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    let result = app
        .client
        .campaigns()
        .create(&campaign_details_a(), &app.session, &app.cancel)
        .await;
    assert_status_code(result, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn campaign_created_with_candidates() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let party = app.create_test_party().await?;
    let candidate = app.create_test_candidate(party.id).await?;

    let details = payloads::Campaign {
        candidate_ids: vec![candidate.id],
        ..campaign_details_a()
    };
    let campaigns = app.client.campaigns();
    campaigns
        .create(&details, &app.session, &app.cancel)
        .await?;
    let created = campaigns
        .find(&app.session, &app.cancel)
        .await?
        .pop()
        .context("created campaign missing from list")?;

    let fetched = campaigns
        .find_one(created.id, &app.session, &app.cancel)
        .await?;
    assert_eq!(fetched.campaign_details, details);
    assert_eq!(fetched.candidates, vec![candidate]);

    Ok(())
}

#[tokio::test]
async fn candidate_list_is_replaced_by_update() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;
    let party = app.create_test_party().await?;
    let first = app.create_test_candidate(party.id).await?;
    let second = app.create_test_candidate(party.id).await?;
    let campaign = app.create_test_campaign().await?;
    let campaigns = app.client.campaigns();

    let patch = requests::UpdateCampaign {
        candidate_ids: Some(vec![second.id, first.id]),
        ..Default::default()
    };
    campaigns
        .update(campaign.id, &patch, &app.session, &app.cancel)
        .await?;
    let fetched = campaigns
        .find_one(campaign.id, &app.session, &app.cancel)
        .await?;
    assert_eq!(fetched.candidates, vec![second.clone(), first]);
    assert_eq!(fetched.campaign_details.name, campaign_details_a().name);

    // a patch without the list leaves it alone
    let patch = requests::UpdateCampaign {
        description: Some("Council races only".into()),
        ..Default::default()
    };
    campaigns
        .update(campaign.id, &patch, &app.session, &app.cancel)
        .await?;
    let fetched = campaigns
        .find_one(campaign.id, &app.session, &app.cancel)
        .await?;
    assert_eq!(fetched.candidates.len(), 2);

    let patch = requests::UpdateCampaign {
        candidate_ids: Some(Vec::new()),
        ..Default::default()
    };
    campaigns
        .update(campaign.id, &patch, &app.session, &app.cancel)
        .await?;
    let fetched = campaigns
        .find_one(campaign.id, &app.session, &app.cancel)
        .await?;
    assert!(fetched.candidates.is_empty());

    Ok(())
}

#[tokio::test]
async fn unknown_candidate_is_a_field_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_alice_user().await?;

    let details = payloads::Campaign {
        candidate_ids: vec![CandidateId(404)],
        ..campaign_details_a()
    };
    let result = app
        .client
        .campaigns()
        .create(&details, &app.session, &app.cancel)
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(
                error.field("candidate_ids"),
                Some("Candidate 404 does not exist")
            );
        }
        _ => panic!("Expected APIError"),
    }

    Ok(())
}
