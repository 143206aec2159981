//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::layout::planner::{plan_layout, DesignOptions, ResumeLayout};
use crate::layout::templates::{all_templates, get_template, TemplateConfig, TemplateId};
use crate::models::resume::ResumeData;
use crate::state::AppState;

const FONT_SIZE_RANGE_PT: (f64, f64) = (6.0, 24.0);
const LINE_HEIGHT_RANGE: (f64, f64) = (0.8, 3.0);

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub resume: ResumeData,
    #[serde(default)]
    pub template: Option<TemplateId>,
    #[serde(default)]
    pub design: DesignOptions,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
///
/// Lists every template with its weight and capacity constants.
pub async fn handle_list_templates() -> Json<Vec<&'static TemplateConfig>> {
    Json(all_templates().collect())
}

/// POST /api/v1/layout
///
/// Paginates the résumé for the requested (or default) template.
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Result<Json<ResumeLayout>, AppError> {
    let template = request.template.unwrap_or(state.config.default_template);
    validate_layout_input(&request.resume, &request.design, &state)?;

    let layout = run_layout(request.resume, template, request.design).await?;
    Ok(Json(layout))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Rejects design values outside the supported range and oversized résumés.
pub fn validate_layout_input(
    resume: &ResumeData,
    design: &DesignOptions,
    state: &AppState,
) -> Result<(), AppError> {
    let (min_font, max_font) = FONT_SIZE_RANGE_PT;
    if !(min_font..=max_font).contains(&design.font_size_pt) {
        return Err(AppError::Validation(format!(
            "font_size_pt must be between {min_font} and {max_font}"
        )));
    }

    let (min_lh, max_lh) = LINE_HEIGHT_RANGE;
    if !(min_lh..=max_lh).contains(&design.line_height) {
        return Err(AppError::Validation(format!(
            "line_height must be between {min_lh} and {max_lh}"
        )));
    }

    let max_entries = state.config.max_experience_entries;
    if resume.experience.len() > max_entries {
        return Err(AppError::Validation(format!(
            "experience may contain at most {max_entries} entries"
        )));
    }

    Ok(())
}

/// Runs the planner off the async executor.
pub async fn run_layout(
    resume: ResumeData,
    template: TemplateId,
    design: DesignOptions,
) -> Result<ResumeLayout, AppError> {
    tokio::task::spawn_blocking(move || plan_layout(&resume, get_template(template), &design))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn make_state() -> AppState {
        AppState {
            config: Config {
                max_experience_entries: 2,
                ..Config::default()
            },
        }
    }

    #[test]
    fn test_default_design_is_valid() {
        let result =
            validate_layout_input(&ResumeData::default(), &DesignOptions::default(), &make_state());
        assert!(result.is_ok());
    }

    #[test]
    fn test_font_size_out_of_range() {
        let design = DesignOptions {
            font_size_pt: 40.0,
            ..Default::default()
        };
        let result = validate_layout_input(&ResumeData::default(), &design, &make_state());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_nan_line_height_rejected() {
        let design = DesignOptions {
            line_height: f64::NAN,
            ..Default::default()
        };
        let result = validate_layout_input(&ResumeData::default(), &design, &make_state());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_too_many_entries_rejected() {
        let resume = ResumeData {
            experience: vec![Default::default(); 3],
            ..Default::default()
        };
        let result = validate_layout_input(&resume, &DesignOptions::default(), &make_state());
        assert!(matches!(result, Err(AppError::Validation(msg)) if msg.contains("at most 2")));
    }

    #[tokio::test]
    async fn test_run_layout_off_executor() {
        let layout = run_layout(
            ResumeData::default(),
            TemplateId::Sidebar,
            DesignOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(layout.template, TemplateId::Sidebar);
        assert!(layout.pages.is_empty());
    }
}
