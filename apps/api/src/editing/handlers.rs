//! Axum route handlers for the Edit API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::editing::commands::EditCommand;
use crate::errors::AppError;
use crate::layout::handlers::{run_layout, validate_layout_input};
use crate::layout::planner::{DesignOptions, ResumeLayout};
use crate::layout::templates::TemplateId;
use crate::models::resume::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub resume: ResumeData,
    #[serde(default)]
    pub template: Option<TemplateId>,
    #[serde(default)]
    pub design: DesignOptions,
    pub edit: EditCommand,
}

#[derive(Debug, Serialize)]
pub struct EditResponse {
    pub resume: ResumeData,
    pub layout: ResumeLayout,
}

/// POST /api/v1/layout/edit
///
/// Applies one typed edit to the résumé and returns it with a fresh page plan.
pub async fn handle_edit(
    State(state): State<AppState>,
    Json(request): Json<EditRequest>,
) -> Result<Json<EditResponse>, AppError> {
    let EditRequest {
        mut resume,
        template,
        design,
        edit,
    } = request;
    let template = template.unwrap_or(state.config.default_template);

    validate_layout_input(&resume, &design, &state)?;
    edit.apply(&mut resume)?;

    let layout = run_layout(resume.clone(), template, design).await?;
    info!(
        template = %template,
        pages = layout.page_count(),
        "Edit applied and layout recomputed"
    );

    Ok(Json(EditResponse { resume, layout }))
}
