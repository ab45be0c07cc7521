use actix_web::{HttpResponse, post, web};
use payloads::{HttpError, requests};

use super::APIError;
use super::store::Store;

pub const PASSWORD_MIN_LEN: usize = 6;

#[tracing::instrument(
    skip(credentials, store),
    fields(email = %credentials.email),
    ret,
)]
#[post("/auth/sign-in")]
pub async fn sign_in(
    credentials: web::Json<requests::Credentials>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let mut errors =
        HttpError::with_message(400, "Bad Request", "Validation failed");
    if credentials.email.trim().is_empty() {
        errors = errors.field_message("email", "email should not be empty");
    }
    if credentials.password.is_empty() {
        errors =
            errors.field_message("password", "password should not be empty");
    }
    if errors.has_field_errors() {
        return Err(APIError::BadRequest(errors));
    }

    let session = store.sign_in(&credentials)?;
    Ok(HttpResponse::Ok().json(session))
}

#[tracing::instrument(
    skip(details, store),
    fields(email = %details.email),
    ret,
)]
#[post("/auth/sign-up")]
pub async fn sign_up(
    details: web::Json<requests::NewAccount>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    let errors = validate_new_account(&details);
    if errors.has_field_errors() {
        return Err(APIError::BadRequest(errors));
    }

    let session = store.create_account(&details)?;
    Ok(HttpResponse::Ok().json(session))
}

fn validate_new_account(details: &requests::NewAccount) -> HttpError {
    let mut errors =
        HttpError::with_message(400, "Bad Request", "Validation failed");
    if !details.email.contains('@') {
        errors = errors.field_message("email", "email must be an email");
    }
    if details.password.chars().count() < PASSWORD_MIN_LEN {
        errors = errors.field_message(
            "password",
            format!(
                "password must be longer than or equal to \
                 {PASSWORD_MIN_LEN} characters"
            ),
        );
    }
    if details.full_name.trim().is_empty() {
        errors =
            errors.field_message("full_name", "full_name should not be empty");
    }
    errors
}
