//! Axum route handlers for the career-analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::analysis::{run_answer_generator, run_selected_tasks, AnalysisReport, QuestionRef, TaskSelection};
use crate::errors::AppError;
use crate::pdf;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAnswersRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
    pub questions: Vec<QuestionRef>,
}

/// POST /analyze
///
/// Multipart form: `resumeText` (optional), `jobDescription` (optional),
/// `tasks` (required JSON object of task selectors), `resumeFile`
/// (optional PDF upload). Extracted file text takes precedence over
/// `resumeText`. Requested agents run sequentially; the response always
/// carries all three task slots, null where a task was not requested or
/// its completion failed.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut job_description: Option<String> = None;
    let mut tasks_raw: Option<String> = None;
    let mut extracted_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("resumeText") => resume_text = Some(read_text_field(field).await?),
            Some("jobDescription") => job_description = Some(read_text_field(field).await?),
            Some("tasks") => tasks_raw = Some(read_text_field(field).await?),
            Some("resumeFile") => {
                if field.content_type() != Some("application/pdf") {
                    return Err(AppError::Validation(
                        "Only PDF files are supported for upload.".to_string(),
                    ));
                }
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read uploaded file: {e}"))
                })?;
                info!(file = %file_name, bytes = data.len(), "Received resume upload");

                let text = pdf::extract_text(&data)
                    .map_err(|e| AppError::Validation(format!("Error reading PDF: {e}")))?;
                debug!(chars = text.len(), "Extracted PDF text");
                extracted_text = Some(text);
            }
            _ => {}
        }
    }

    let tasks_raw =
        tasks_raw.ok_or_else(|| AppError::Validation("Missing tasks field".to_string()))?;
    let tasks: TaskSelection = serde_json::from_str(&tasks_raw)
        .map_err(|_| AppError::Validation("Invalid JSON for tasks".to_string()))?;

    // File text wins over the raw text field when both are present.
    let resume = extracted_text.or(resume_text).unwrap_or_default();
    if resume.trim().is_empty() {
        return Err(AppError::Validation(
            "No resume text provided (either via file or text input).".to_string(),
        ));
    }

    let job_description = job_description.filter(|jd| !jd.trim().is_empty());

    let report =
        run_selected_tasks(state.llm.as_ref(), &resume, job_description.as_deref(), &tasks).await;

    Ok(Json(report))
}

/// POST /generate-answers
///
/// JSON body with the resume, optional job description, and the questions
/// to answer. Question records are reduced to {id, question} before prompt
/// construction. A failed completion yields a JSON null body, not an error:
/// the caller already treats the answer set as best-effort.
pub async fn handle_generate_answers(
    State(state): State<AppState>,
    Json(request): Json<GenerateAnswersRequest>,
) -> Result<Json<Value>, AppError> {
    info!(question_count = request.questions.len(), "Generating interview answers");

    let job_description = request
        .job_description
        .as_deref()
        .filter(|jd| !jd.trim().is_empty());

    let result = run_answer_generator(
        state.llm.as_ref(),
        &request.resume_text,
        job_description,
        &request.questions,
    )
    .await;

    Ok(Json(result.unwrap_or(Value::Null)))
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}
