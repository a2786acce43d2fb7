//! Axum route handlers for the Resume Parsing API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::parsing::export::{export_filename, to_export_json};
use crate::parsing::pipeline::parse_resume;
use crate::state::AppState;

/// Multipart field carrying the uploaded document.
const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResumeResponse {
    pub parse_id: Uuid,
    pub parsed_at: DateTime<Utc>,
    pub export_filename: String,
    pub resume: ParsedResume,
}

impl ParseResumeResponse {
    fn new(resume: ParsedResume) -> Self {
        Self {
            parse_id: Uuid::new_v4(),
            parsed_at: Utc::now(),
            export_filename: export_filename(&resume),
            resume,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Extracts text from an uploaded PDF (multipart field `file`) and returns the
/// parsed record, `raw_text` included.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let raw_text = extract_upload(&state, multipart).await?;
    let response = ParseResumeResponse::new(parse_resume(&raw_text));
    info!(parse_id = %response.parse_id, "Parsed uploaded resume");
    Ok(Json(response))
}

/// POST /api/v1/resumes/parse-text
///
/// Parses text that was already extracted by the caller. Empty text is valid and
/// yields an all-empty record.
pub async fn handle_parse_text(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let response = ParseResumeResponse::new(parse_resume(&request.raw_text));
    info!(parse_id = %response.parse_id, "Parsed resume text");
    Ok(Json(response))
}

/// POST /api/v1/resumes/export
///
/// Same input as `/parse`, but answers with the export form as a JSON file download.
pub async fn handle_export_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let raw_text = extract_upload(&state, multipart).await?;
    let resume = parse_resume(&raw_text);

    let body = to_export_json(&resume).map_err(anyhow::Error::from)?;
    let filename = export_filename(&resume);
    info!(%filename, "Exported resume");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// Pulls the `file` field out of the multipart body and runs it through the extractor.
async fn extract_upload(state: &AppState, mut multipart: Multipart) -> Result<String, AppError> {
    let document = read_upload_field(&mut multipart).await?;
    let raw_text = state.extractor.extract(document).await?;
    Ok(raw_text)
}

async fn read_upload_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if let Some(file_name) = field.file_name() {
            if !file_name.to_ascii_lowercase().ends_with(".pdf") {
                return Err(AppError::Validation(format!(
                    "Only PDF uploads are supported, got '{file_name}'"
                )));
            }
        }
        return field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{UPLOAD_FIELD}' is required"
    )))
}
