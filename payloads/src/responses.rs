use crate::{CampaignId, CandidateId, PoliticalPartyId, UserId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Issued by the backend on every successful sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    #[serde(flatten)]
    pub campaign_details: crate::Campaign,
    /// The records behind `campaign_details.candidate_ids`. Empty when the
    /// backend leaves it out.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(flatten)]
    pub candidate_details: crate::Candidate,
}

impl Candidate {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.candidate_details.name, self.candidate_details.last_name
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticalParty {
    pub id: PoliticalPartyId,
    #[serde(flatten)]
    pub party_details: crate::PoliticalParty,
}
