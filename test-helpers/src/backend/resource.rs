//! CRUD routes shared by every resource.

use actix_web::{HttpRequest, HttpResponse, Scope, web};
use payloads::{HttpError, Resource};
use serde::Serialize;
use serde_json::Value;

use super::store::Store;
use super::{APIError, get_user_id};

/// Routes for `R` mounted under `/{R::PATH}`.
pub fn scope<R: Resource>() -> Scope {
    web::scope(&format!("/{}", R::PATH))
        .route("", web::get().to(list::<R>))
        .route("", web::post().to(create::<R>))
        .route("/{id}", web::get().to(get_one::<R>))
        .route("/{id}", web::put().to(update::<R>))
        .route("/{id}", web::delete().to(remove::<R>))
}

#[tracing::instrument(
    skip(request, store),
    fields(resource = R::PATH, user_id = tracing::field::Empty),
)]
async fn list<R: Resource>(
    request: HttpRequest,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    get_user_id(&request, &store)?;
    let records = store.list::<R>()?;
    Ok(HttpResponse::Ok().json(records))
}

#[tracing::instrument(
    skip(request, store),
    fields(resource = R::PATH, user_id = tracing::field::Empty),
)]
async fn get_one<R: Resource>(
    request: HttpRequest,
    id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    get_user_id(&request, &store)?;
    let record = store.get::<R>(id.into_inner())?;
    Ok(HttpResponse::Ok().json(record))
}

#[tracing::instrument(
    skip(request, draft, store),
    fields(resource = R::PATH, user_id = tracing::field::Empty),
)]
async fn create<R: Resource>(
    request: HttpRequest,
    draft: web::Json<R::Draft>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    get_user_id(&request, &store)?;
    reject_empty_fields(&draft.0)?;
    let record = store.insert::<R>(&draft)?;
    tracing::info!(id = %record.id(), "Created {}", R::NAME);
    Ok(HttpResponse::Ok().json(record))
}

#[tracing::instrument(
    skip(request, patch, store),
    fields(resource = R::PATH, user_id = tracing::field::Empty),
)]
async fn update<R: Resource>(
    request: HttpRequest,
    id: web::Path<i64>,
    patch: web::Json<R::Patch>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    get_user_id(&request, &store)?;
    reject_empty_fields(&patch.0)?;
    let record = store.update::<R>(id.into_inner(), &patch)?;
    Ok(HttpResponse::Ok().json(record))
}

#[tracing::instrument(
    skip(request, store),
    fields(resource = R::PATH, user_id = tracing::field::Empty),
)]
async fn remove<R: Resource>(
    request: HttpRequest,
    id: web::Path<i64>,
    store: web::Data<Store>,
) -> Result<HttpResponse, APIError> {
    get_user_id(&request, &store)?;
    let record = store.delete::<R>(id.into_inner())?;
    Ok(HttpResponse::Ok().json(record))
}

/// Every text field that is present must be non-blank.
fn reject_empty_fields(body: &impl Serialize) -> Result<(), APIError> {
    let Value::Object(fields) =
        serde_json::to_value(body).map_err(anyhow::Error::from)?
    else {
        return Ok(());
    };

    let mut errors =
        HttpError::with_message(400, "Bad Request", "Validation failed");
    for (field, value) in fields {
        if value.as_str().is_some_and(|text| text.trim().is_empty()) {
            let message = format!("{field} should not be empty");
            errors = errors.field_message(field, message);
        }
    }

    if errors.has_field_errors() {
        return Err(APIError::BadRequest(errors));
    }
    Ok(())
}
