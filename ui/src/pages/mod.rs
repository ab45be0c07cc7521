pub mod auth;
pub mod campaign_detail;
pub mod dashboard;
pub mod not_found;
pub mod record_detail;

pub use auth::{SignInPage, SignUpPage};
pub use campaign_detail::CampaignDetailPage;
pub use dashboard::{
    CampaignsPage, CandidatesPage, HomePage, PoliticalPartiesPage,
};
pub use not_found::NotFoundPage;
pub use record_detail::RecordDetailPage;
