pub mod auth_form;
pub mod campaign_form;
pub mod candidate_picker;
pub mod error_banner;
pub mod form_field;
pub mod layout;
pub mod require_auth;
pub mod resource_form;
pub mod resource_list;

pub use auth_form::{SignInForm, SignUpForm};
pub use campaign_form::{EditCampaignForm, NewCampaignForm};
pub use error_banner::ErrorBanner;
pub use require_auth::RequireAuth;
pub use resource_form::{
    CANDIDATE_FIELDS, FieldDef, PARTY_FIELDS, ResourceForm,
};
pub use resource_list::ResourceList;
