use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Display;

use crate::{
    CampaignId, CandidateId, PoliticalPartyId, requests, responses,
};

/// A backend-managed entity exposed through the standard CRUD endpoints
/// under `/api/{PATH}`.
pub trait Resource:
    Clone + PartialEq + Serialize + DeserializeOwned + 'static
{
    type Id: Copy
        + Ord
        + Display
        + Serialize
        + DeserializeOwned
        + From<i64>
        + Into<i64>
        + 'static;
    /// The entity without its id, as submitted on creation.
    type Draft: Clone + PartialEq + Serialize + DeserializeOwned + 'static;
    /// Partial update; unset fields are left alone by the backend.
    type Patch: Clone
        + PartialEq
        + Default
        + Serialize
        + DeserializeOwned
        + 'static;

    /// Collection path below `/api`.
    const PATH: &'static str;
    /// Human readable singular name, e.g. for "Campaign 3 not found".
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    /// Short label for lists and logs.
    fn title(&self) -> String;

    /// Whether a list search for `term` keeps this record. Case-insensitive
    /// substring match on the title; a blank term keeps everything.
    fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.title().to_lowercase().contains(&term)
    }
}

impl Resource for responses::Campaign {
    type Id = CampaignId;
    type Draft = crate::Campaign;
    type Patch = requests::UpdateCampaign;

    const PATH: &'static str = "campaigns";
    const NAME: &'static str = "Campaign";

    fn id(&self) -> CampaignId {
        self.id
    }

    fn title(&self) -> String {
        self.campaign_details.name.clone()
    }
}

impl Resource for responses::Candidate {
    type Id = CandidateId;
    type Draft = crate::Candidate;
    type Patch = requests::UpdateCandidate;

    const PATH: &'static str = "candidates";
    const NAME: &'static str = "Candidate";

    fn id(&self) -> CandidateId {
        self.id
    }

    fn title(&self) -> String {
        self.full_name()
    }
}

impl Resource for responses::PoliticalParty {
    type Id = PoliticalPartyId;
    type Draft = crate::PoliticalParty;
    type Patch = requests::UpdatePoliticalParty;

    const PATH: &'static str = "political-parties";
    const NAME: &'static str = "Political party";

    fn id(&self) -> PoliticalPartyId {
        self.id
    }

    fn title(&self) -> String {
        format!(
            "{} ({})",
            self.party_details.name, self.party_details.abbreviation
        )
    }
}
