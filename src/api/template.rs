//! Template endpoints: create, list and compose.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use url::Url;

use crate::error::is_production;
use crate::server::AppState;
use crate::template::{CreateTemplateRequest, Parameters, RenderedMessage, Template, TemplateError};

/// Error body returned for every failed template request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl IntoResponse for TemplateError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TemplateError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TemplateError::Duplicate(_) => (
                StatusCode::BAD_REQUEST,
                "Template id existed. Please choose another template id.".to_string(),
            ),
            TemplateError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Template ID not found.".to_string())
            }
            TemplateError::Unavailable(msg) => {
                let client_msg = if is_production() {
                    "Service temporarily unavailable".to_string()
                } else {
                    msg.clone()
                };
                (StatusCode::SERVICE_UNAVAILABLE, client_msg)
            }
        };

        if status.is_server_error() {
            tracing::error!(code = self.code(), status = status.as_u16(), error = %self, "API error");
        } else {
            tracing::warn!(code = self.code(), status = status.as_u16(), error = %self, "API error");
        }

        let body = ErrorResponse {
            code: self.code().to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// POST /templates - Create a new template
#[tracing::instrument(name = "http.create_template", skip(state, payload))]
pub async fn create_template(
    State(state): State<AppState>,
    payload: Result<Json<CreateTemplateRequest>, JsonRejection>,
) -> Result<(StatusCode, HeaderMap, Json<Template>), TemplateError> {
    let Json(request) = payload.map_err(|rejection| {
        TemplateError::InvalidInput(format!("Malformed request body: {}", rejection.body_text()))
    })?;

    let created = state.templates.create(request).await?;

    let mut headers = HeaderMap::new();
    match template_location(&created.id) {
        Some(location) => {
            headers.insert(header::LOCATION, location);
        }
        None => {
            tracing::warn!(template_id = %created.id, "Could not build Location header");
        }
    }

    Ok((StatusCode::CREATED, headers, Json(created)))
}

/// Path of a stored template with the ID percent-encoded as one segment
fn template_location(id: &str) -> Option<HeaderValue> {
    let mut url = Url::parse("http://localhost/templates").ok()?;
    url.path_segments_mut().ok()?.push(id);
    HeaderValue::from_str(url.path()).ok()
}

/// GET /templates - List all templates
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Template>>, TemplateError> {
    let templates = state.templates.list().await?;
    Ok(Json(templates))
}

/// GET /templates/{id}/compose - Render a template with query parameters
#[tracing::instrument(name = "http.compose_template", skip(state, params), fields(param_count = params.len()))]
pub async fn compose_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<Parameters>,
) -> Result<Json<RenderedMessage>, TemplateError> {
    let rendered = state.templates.render(&id, &params).await?;
    Ok(Json(rendered))
}
