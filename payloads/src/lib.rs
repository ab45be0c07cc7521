pub mod api_client;
pub mod cancel;
pub mod error;
pub mod interceptor;
pub mod requests;
pub mod resource;
pub mod responses;
pub mod session;

pub use api_client::{APIClient, ClientError, ResourceClient};
pub use cancel::Cancellation;
pub use error::HttpError;
pub use resource::Resource;
pub use session::{
    AuthState, InMemorySession, SessionContext, SessionStore,
};

use serde::{Deserialize, Serialize};

/// Declares an integer identifier assigned by the backend.
macro_rules! backend_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

backend_id!(UserId);
backend_id!(CampaignId);
backend_id!(CandidateId);
backend_id!(PoliticalPartyId);

/// Campaign fields as submitted on creation. Dates are passed through
/// verbatim in whatever format the backend issued them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    /// Candidates running in the campaign. The backend answers with the
    /// full records under `candidates`.
    #[serde(default)]
    pub candidate_ids: Vec<CandidateId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub last_name: String,
    pub identification: String,
    pub contact_info: String,
    /// URL of the candidate's photo
    pub photo: String,
    pub political_party_id: PoliticalPartyId,
    pub position: String,
    pub experience: String,
    pub biography: String,
    pub education: String,
    pub campaign_platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliticalParty {
    pub name: String,
    pub abbreviation: String,
    pub foundation_date: String,
    pub ideology: String,
    pub description: String,
    /// URL of the party logo
    pub logo: String,
}
