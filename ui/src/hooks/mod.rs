pub mod request_state;
pub mod use_auth;
pub mod use_cancellation;
pub mod use_logout;
pub mod use_request;
pub mod use_require_auth;
pub mod use_resource;

pub use use_auth::{use_login, use_register};
pub use use_cancellation::use_cancellation;
pub use use_logout::use_logout;
pub use use_require_auth::use_require_auth;
pub use use_resource::{
    use_create, use_find, use_find_one, use_remove, use_update,
};
