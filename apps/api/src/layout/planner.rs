//! Layout Planner: turns résumé data and a template into a page plan.
//!
//! # Steps
//! 1. Weigh the sections pinned to page 1 (main column and sidebar).
//! 2. Resolve first-page / normal-page capacity for the template and design.
//! 3. Build the flow sequence: experience entries in order, then the template's
//!    flowing sections (absent sections are skipped).
//! 4. Run the pagination engine and attach items to pages.
//!
//! Experience items keep their index into `ResumeData::experience`, so edits can
//! address an entry regardless of which page currently shows it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::layout::capacity::{
    Capacity, DesignScale, StaticWeight, BASE_FONT_SIZE_PT, BASE_LINE_HEIGHT,
};
use crate::layout::engine::paginate;
use crate::layout::templates::{TemplateConfig, TemplateId};
use crate::layout::weight::{Density, SectionKind};
use crate::models::resume::{ResumeData, WorkEntry};

// ────────────────────────────────────────────────────────────────────────────
// Input / output types
// ────────────────────────────────────────────────────────────────────────────

/// User-selected design parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignOptions {
    pub font_size_pt: f64,
    pub line_height: f64,
    /// Only honoured by AI-generated templates.
    pub density: Density,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            font_size_pt: BASE_FONT_SIZE_PT,
            line_height: BASE_LINE_HEIGHT,
            density: Density::default(),
        }
    }
}

impl DesignOptions {
    pub fn scale(&self) -> DesignScale {
        DesignScale {
            font_size_pt: self.font_size_pt,
            line_height: self.line_height,
        }
    }
}

/// One renderable unit placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageItem {
    /// `index` points into `ResumeData::experience`.
    Experience { index: usize, entry: WorkEntry },
    Section { section: SectionKind },
}

#[derive(Debug, Clone, Serialize)]
pub struct PageLayout {
    /// 1-based page number.
    pub number: usize,
    pub items: Vec<PageItem>,
    pub weight: f64,
    pub capacity: f64,
    /// Pages after the first carry a continuation heading.
    pub continuation: bool,
    /// Predicted overflow: a single entry larger than the page budget.
    pub overflows: bool,
}

/// Content drawn on page 1 independently of pagination.
#[derive(Debug, Clone, Serialize)]
pub struct StaticContent {
    pub main: Vec<SectionKind>,
    pub sidebar: Vec<SectionKind>,
    pub weight: StaticWeight,
}

/// The complete page plan handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeLayout {
    pub template: TemplateId,
    pub capacity: Capacity,
    pub static_content: StaticContent,
    /// Total weight of the paginated flow.
    pub total_weight: f64,
    pub pages: Vec<PageLayout>,
}

impl ResumeLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Planning
// ────────────────────────────────────────────────────────────────────────────

/// Computes the page plan for `resume` under `template` and `design`.
///
/// Pure and deterministic; recomputed from scratch on every call.
pub fn plan_layout(
    resume: &ResumeData,
    template: &TemplateConfig,
    design: &DesignOptions,
) -> ResumeLayout {
    let factor = template.density_factor(design.density);
    let section_weight =
        |section: SectionKind| template.weights.section_weight(section, resume) * factor;

    // Pinned content.
    let (main, main_weight) = present_sections(template.main_pinned, &section_weight);
    let (sidebar, sidebar_weight) = present_sections(template.sidebar, &section_weight);
    let static_weight = StaticWeight {
        main: main_weight,
        sidebar: sidebar_weight,
    };
    let capacity = template.capacity.resolve(static_weight, design.scale());

    // Flow sequence.
    let mut items = Vec::with_capacity(resume.experience.len() + template.flowing.len());
    let mut weights = Vec::with_capacity(items.capacity());

    for (index, entry) in resume.experience.iter().enumerate() {
        weights.push(template.weights.entry_weight(entry) * factor);
        items.push(PageItem::Experience {
            index,
            entry: entry.clone(),
        });
    }
    for &section in template.flowing {
        let weight = section_weight(section);
        if weight > 0.0 {
            weights.push(weight);
            items.push(PageItem::Section { section });
        }
    }

    let total_weight: f64 = weights.iter().sum();
    let spans = paginate(&weights, &capacity);

    let mut items = items.into_iter();
    let pages: Vec<PageLayout> = spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let page_capacity = capacity.for_page(i);
            PageLayout {
                number: i + 1,
                items: items.by_ref().take(span.len()).collect(),
                weight: span.weight,
                capacity: page_capacity,
                continuation: i > 0,
                overflows: span.weight > page_capacity,
            }
        })
        .collect();

    for page in pages.iter().filter(|p| p.overflows) {
        warn!(
            template = %template.id,
            page = page.number,
            weight = page.weight,
            capacity = page.capacity,
            "Layout: page content exceeds its capacity"
        );
    }

    debug!(
        template = %template.id,
        entries = resume.experience.len(),
        total_weight,
        first_page = capacity.first_page,
        normal_page = capacity.normal_page,
        pages = pages.len(),
        "Layout planned"
    );

    ResumeLayout {
        template: template.id,
        capacity,
        static_content: StaticContent {
            main,
            sidebar,
            weight: static_weight,
        },
        total_weight,
        pages,
    }
}

/// Sections with non-zero weight, and their summed weight.
fn present_sections(
    sections: &[SectionKind],
    weigh: impl Fn(SectionKind) -> f64,
) -> (Vec<SectionKind>, f64) {
    sections
        .iter()
        .map(|&section| (section, weigh(section)))
        .filter(|(_, weight)| *weight > 0.0)
        .fold((Vec::new(), 0.0), |(mut present, total), (section, weight)| {
            present.push(section);
            (present, total + weight)
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
