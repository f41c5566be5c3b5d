//! HTTP Transport
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | `POST` | `/api/submit` | `{"refactored_code": ...}` | 502 analysis failure |
//! | `POST` | `/api/similar` | `{"snippets": [...]}` | 502 embedding or store failure |
//! | `GET` | `/health` | `{"status": "ok"}` | |
//!
//! The snippet is forwarded as-is, including empty text. Malformed JSON
//! bodies are refused by Rocket's `Json` guard (400 or 422).

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket, State, get, options, post, routes};
use snipdex_domain::error::Error;
use snipdex_infrastructure::bootstrap::AppContext;
use tracing::{info, warn};

use super::types::{
    CodeRequest, ErrorResponse, HealthResponse, SimilarCodeResponse, SubmitCodeResponse,
};
use crate::constants::{CORS_ALLOWED_HEADERS, CORS_ALLOWED_METHODS, CORS_ANY_ORIGIN};

/// Error half of every endpoint result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Map a domain error to its HTTP status and body
///
/// Failures of the external collaborators are gateway errors; the body
/// carries the error's display form, which for a service-reported analysis
/// failure is exactly the service's message.
pub fn api_error(error: &Error) -> ApiError {
    let status = if error.is_upstream() {
        Status::BadGateway
    } else if matches!(error, Error::InvalidArgument { .. }) {
        Status::BadRequest
    } else {
        Status::InternalServerError
    };
    (status, Json(ErrorResponse::new(error.to_string())))
}

/// HTTP transport server
pub struct HttpTransport {
    context: AppContext,
}

impl HttpTransport {
    /// Create a transport serving `context`
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let cors = Cors::new(self.context.config.server.cors_origins.clone());
        rocket::build()
            .manage(self.context.clone())
            .mount("/", routes![submit_code, similar_code, health, preflight])
            .attach(cors)
    }

    /// Serve until Rocket's shutdown (Ctrl+C by default)
    pub async fn start(self) -> Result<(), rocket::Error> {
        let server = &self.context.config.server;
        info!(host = %server.host, port = server.port, "HTTP transport listening");

        let figment = rocket::Config::figment()
            .merge(("address", server.host.clone()))
            .merge(("port", server.port));

        self.rocket().configure(figment).launch().await?;
        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Echoes the request origin when it is one of the configured origins.
/// A `*` entry allows any origin. Credentials are only allowed for origins
/// listed explicitly.
pub struct Cors {
    origins: Vec<String>,
}

impl Cors {
    /// Allow the given origins
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    fn allows(&self, origin: &str) -> bool {
        self.origins
            .iter()
            .any(|allowed| allowed == CORS_ANY_ORIGIN || allowed == origin)
    }

    fn lists(&self, origin: &str) -> bool {
        origin != CORS_ANY_ORIGIN && self.origins.iter().any(|allowed| allowed == origin)
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let Some(origin) = request.headers().get_one("Origin") else {
            return;
        };
        if !self.allows(origin) {
            return;
        }
        response.set_header(Header::new(
            "Access-Control-Allow-Origin",
            origin.to_string(),
        ));
        response.set_header(Header::new("Vary", "Origin"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            CORS_ALLOWED_METHODS,
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            CORS_ALLOWED_HEADERS,
        ));
        if self.lists(origin) {
            response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        }
    }
}

/// Submit a snippet
///
/// POST /api/submit
#[post("/api/submit", format = "json", data = "<request>")]
pub async fn submit_code(
    context: &State<AppContext>,
    request: Json<CodeRequest>,
) -> Result<Json<SubmitCodeResponse>, ApiError> {
    let code = request.into_inner().code;

    match context.ingestion.submit(&code).await {
        Ok(refactored_code) => Ok(Json(SubmitCodeResponse { refactored_code })),
        Err(e) => {
            warn!(error = %e, "Submit failed");
            Err(api_error(&e))
        }
    }
}

/// Find previously submitted snippets similar to the given one
///
/// POST /api/similar
#[post("/api/similar", format = "json", data = "<request>")]
pub async fn similar_code(
    context: &State<AppContext>,
    request: Json<CodeRequest>,
) -> Result<Json<SimilarCodeResponse>, ApiError> {
    let code = request.into_inner().code;

    match context.similarity.similar(&code).await {
        Ok(snippets) => Ok(Json(SimilarCodeResponse { snippets })),
        Err(e) => {
            warn!(error = %e, "Similarity lookup failed");
            Err(api_error(&e))
        }
    }
}

/// Liveness probe
///
/// GET /health
#[get("/health")]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Answer CORS preflight requests; headers come from the [`Cors`] fairing
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}
