//! Stand-in for the external campaign backend.
//!
//! Implements the REST contract the client expects: bearer-token auth,
//! CRUD under `/api/{resource}`, and `HttpError` JSON bodies on every
//! failure, including malformed requests.

pub mod auth;
pub mod resource;
pub mod store;

use actix_cors::Cors;
use actix_web::dev::{HttpServiceFactory, Server};
use actix_web::http::{StatusCode, header};
use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError,
    body::BoxBody, get, web,
};
use payloads::{HttpError, UserId, responses};
use std::net::TcpListener;

use store::{Store, StoreError};

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Read `IP_ADDRESS`, `PORT` and `ALLOWED_ORIGINS`, defaulting to a
    /// loopback listener on an OS-assigned port open to any origin.
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port: match var("PORT") {
                Ok(port) => port.parse()?,
                Err(_) => 0,
            },
            allowed_origins,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".into(),
            port: 0,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: web::Data<Store>,
) -> std::io::Result<Server> {
    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allow_any_method().allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .app_data(web::JsonConfig::default().error_handler(|e, _| {
                APIError::BadRequest(HttpError::with_message(
                    400,
                    "Bad Request",
                    e.to_string(),
                ))
                .into()
            }))
            .app_data(web::PathConfig::default().error_handler(|e, _| {
                APIError::BadRequest(HttpError::with_message(
                    400,
                    "Bad Request",
                    e.to_string(),
                ))
                .into()
            }))
            .app_data(store.clone())
            .service(api_services())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(auth::sign_in)
        .service(auth::sign_up)
        .service(resource::scope::<responses::Campaign>())
        .service(resource::scope::<responses::Candidate>())
        .service(resource::scope::<responses::PoliticalParty>())
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Unauthorized")]
    AuthError,
    /// Validation failures, carrying the per-field messages.
    #[error("Bad Request")]
    BadRequest(HttpError),
    #[error("Not Found")]
    NotFound(#[source] StoreError),
    #[error("Conflict")]
    Conflict(#[source] StoreError),
    #[error("Internal Server Error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthError => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        let body = match self {
            Self::BadRequest(body) => body.clone(),
            Self::NotFound(e) | Self::Conflict(e) => HttpError::with_message(
                status.as_u16(),
                self.to_string(),
                e.to_string(),
            ),
            Self::AuthError | Self::UnexpectedError(_) => {
                HttpError::with_message(
                    status.as_u16(),
                    self.to_string(),
                    self.to_string(),
                )
            }
        };
        HttpResponse::build(status).json(body)
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidCredentials => APIError::AuthError,
            StoreError::EmailTaken => APIError::Conflict(e),
            StoreError::NotFound(..) => APIError::NotFound(e),
            StoreError::UnknownReference(field, ..) => {
                APIError::BadRequest(
                    HttpError::with_message(
                        400,
                        "Bad Request",
                        "Validation failed",
                    )
                    .field_message(field, e.to_string()),
                )
            }
            StoreError::Malformed(_) => APIError::UnexpectedError(e.into()),
        }
    }
}

/// Resolve the bearer token on the request to a signed-in user.
fn get_user_id(
    request: &HttpRequest,
    store: &Store,
) -> Result<UserId, APIError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(APIError::AuthError)?;
    let user_id = store.user_for_token(token).ok_or(APIError::AuthError)?;
    tracing::Span::current()
        .record("user_id", tracing::field::display(&user_id));
    Ok(user_id)
}
