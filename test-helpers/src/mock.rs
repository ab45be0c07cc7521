//! Demo data for UI development and manual testing
//!
//! Populates a running backend with:
//! - A demo account whose credentials are printed at startup
//! - Three political parties
//! - Candidates spread across those parties
//! - Campaigns, one of them with its candidate list filled in

use anyhow::{Context, Result};
use payloads::{
    CandidateId, PoliticalPartyId, Resource, requests, responses,
};
use tracing::info;

use crate::TestApp;

pub fn demo_account() -> requests::NewAccount {
    requests::NewAccount {
        email: "demo@example.com".into(),
        password: "demo-password".into(),
        full_name: "Demo Organizer".into(),
    }
}

pub struct DevDataset {
    pub account: responses::Session,
    pub parties: Vec<responses::PoliticalParty>,
    pub candidates: Vec<responses::Candidate>,
    pub campaigns: Vec<responses::Campaign>,
}

impl DevDataset {
    /// Creates the dataset through the public API, as a user would.
    pub async fn create(app: &TestApp) -> Result<Self> {
        info!("👤 Creating demo account");
        let account = app.sign_up(&demo_account()).await?;

        info!("🏛️ Creating political parties");
        for party in parties() {
            app.client
                .political_parties()
                .create(&party, &app.session, &app.cancel)
                .await?;
        }
        let parties = app
            .client
            .political_parties()
            .find(&app.session, &app.cancel)
            .await?;

        info!("🧑 Creating candidates");
        let party_ids: Vec<_> = parties.iter().map(|p| p.id).collect();
        for candidate in candidates(&party_ids)? {
            app.client
                .candidates()
                .create(&candidate, &app.session, &app.cancel)
                .await?;
        }
        let candidates = app
            .client
            .candidates()
            .find(&app.session, &app.cancel)
            .await?;

        info!("🗳️ Creating campaigns");
        let candidate_ids: Vec<_> = candidates.iter().map(|c| c.id).collect();
        for campaign in campaigns(&candidate_ids) {
            app.client
                .campaigns()
                .create(&campaign, &app.session, &app.cancel)
                .await?;
        }
        let campaigns = app
            .client
            .campaigns()
            .find(&app.session, &app.cancel)
            .await?;

        Ok(Self {
            account,
            parties,
            candidates,
            campaigns,
        })
    }

    pub fn print_summary(&self) {
        let demo = demo_account();
        info!("📋 Dataset summary");
        info!("   Sign in as {} / {}", demo.email, demo.password);
        info!("   Token: {}", self.account.token);
        summarize(&self.parties);
        summarize(&self.candidates);
        summarize(&self.campaigns);
    }
}

fn summarize<R: Resource>(records: &[R]) {
    info!("   {} ({}):", R::PATH, records.len());
    for record in records {
        info!("     #{} {}", record.id(), record.title());
    }
}

fn parties() -> Vec<payloads::PoliticalParty> {
    vec![
        payloads::PoliticalParty {
            name: "Civic Renewal Party".into(),
            abbreviation: "CRP".into(),
            foundation_date: "2004-09-21".into(),
            ideology: "Centrism".into(),
            description: "Reform-minded centrist party".into(),
            logo: "https://placehold.co/96x96?text=CRP".into(),
        },
        payloads::PoliticalParty {
            name: "Workers' Union Front".into(),
            abbreviation: "WUF".into(),
            foundation_date: "1987-05-01".into(),
            ideology: "Social democracy".into(),
            description: "Labour movement coalition".into(),
            logo: "https://placehold.co/96x96?text=WUF".into(),
        },
        payloads::PoliticalParty {
            name: "Green Horizon".into(),
            abbreviation: "GH".into(),
            foundation_date: "2011-04-22".into(),
            ideology: "Green politics".into(),
            description: "Climate and conservation platform".into(),
            logo: "https://placehold.co/96x96?text=GH".into(),
        },
    ]
}

fn candidates(
    party_ids: &[PoliticalPartyId],
) -> Result<Vec<payloads::Candidate>> {
    let party = |index: usize| {
        party_ids
            .get(index)
            .copied()
            .context("seeded party missing")
    };
    Ok(vec![
        payloads::Candidate {
            name: "Lucia".into(),
            last_name: "Fernandez".into(),
            identification: "CC-10293847".into(),
            contact_info: "lucia.fernandez@example.com".into(),
            photo: "https://placehold.co/128x128?text=LF".into(),
            political_party_id: party(0)?,
            position: "Mayor".into(),
            experience: "Two terms as city councillor".into(),
            biography: "Civil engineer and neighbourhood organiser".into(),
            education: "MSc Urban Planning".into(),
            campaign_platform: "Public transit and housing".into(),
        },
        payloads::Candidate {
            name: "Mateo".into(),
            last_name: "Salazar".into(),
            identification: "CC-55501234".into(),
            contact_info: "mateo.salazar@example.com".into(),
            photo: "https://placehold.co/128x128?text=MS".into(),
            political_party_id: party(1)?,
            position: "Mayor".into(),
            experience: "Union negotiator for twelve years".into(),
            biography: "Grew up in the port district".into(),
            education: "BA Economics".into(),
            campaign_platform: "Fair wages and public services".into(),
        },
        payloads::Candidate {
            name: "Ines".into(),
            last_name: "Quintero".into(),
            identification: "CC-77789012".into(),
            contact_info: "ines.quintero@example.com".into(),
            photo: "https://placehold.co/128x128?text=IQ".into(),
            political_party_id: party(2)?,
            position: "Council member".into(),
            experience: "Environmental NGO director".into(),
            biography: "Biologist focused on river restoration".into(),
            education: "PhD Ecology".into(),
            campaign_platform: "Clean rivers and urban parks".into(),
        },
    ])
}

/// The first campaign runs every seeded candidate.
fn campaigns(candidate_ids: &[CandidateId]) -> Vec<payloads::Campaign> {
    vec![
        payloads::Campaign {
            name: "Municipal Elections 2026".into(),
            description: "Mayoral and council races".into(),
            start_date: "2026-02-01".into(),
            end_date: "2026-10-04".into(),
            candidate_ids: candidate_ids.to_vec(),
        },
        payloads::Campaign {
            name: "Regional Referendum".into(),
            description: "Autonomy statute vote".into(),
            start_date: "2026-03-15".into(),
            end_date: "2026-05-30".into(),
            candidate_ids: Vec::new(),
        },
    ]
}
