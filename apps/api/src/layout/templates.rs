//! Static template tables: per-template weight and capacity tuning.
//!
//! Units are roughly points of vertical space at 11pt / 1.4 line height on a
//! US-letter page. Two-column templates have a narrower main column, so their
//! per-character costs are higher and their sidebar sections are costed per
//! stacked line.
//!
//! Section placement:
//! - `main_pinned` / `sidebar` are drawn on page 1 regardless of pagination.
//! - `flowing` sections follow the experience list as atomic blocks and are
//!   paginated with it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::capacity::CapacityModel;
use crate::layout::weight::{BlockCost, Density, SectionKind, WeightModel};

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
    Minimal,
    Executive,
    Sidebar,
    Creative,
    /// AI-generated single-column design.
    Generated,
    /// AI-generated design with a sidebar.
    GeneratedSidebar,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Minimal,
        TemplateId::Executive,
        TemplateId::Sidebar,
        TemplateId::Creative,
        TemplateId::Generated,
        TemplateId::GeneratedSidebar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Minimal => "minimal",
            TemplateId::Executive => "executive",
            TemplateId::Sidebar => "sidebar",
            TemplateId::Creative => "creative",
            TemplateId::Generated => "generated",
            TemplateId::GeneratedSidebar => "generated_sidebar",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown template '{0}'")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template configuration
// ────────────────────────────────────────────────────────────────────────────

/// Layout tuning for one visual template.
#[derive(Debug, Serialize)]
pub struct TemplateConfig {
    pub id: TemplateId,
    pub name: &'static str,
    pub weights: WeightModel,
    pub capacity: CapacityModel,
    /// Pinned to page 1 in the main column, above the experience list.
    pub main_pinned: &'static [SectionKind],
    /// Pinned to page 1 in the sidebar. Empty for single-column templates.
    pub sidebar: &'static [SectionKind],
    /// Paginated after the experience list, in this order.
    pub flowing: &'static [SectionKind],
    /// Density only applies to AI-generated templates.
    pub ai_generated: bool,
}

impl TemplateConfig {
    pub fn is_two_column(&self) -> bool {
        !self.sidebar.is_empty()
    }

    /// Weight multiplier for the requested density.
    pub fn density_factor(&self, density: Density) -> f64 {
        if self.ai_generated {
            density.factor()
        } else {
            1.0
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static tables
// ────────────────────────────────────────────────────────────────────────────

#[rustfmt::skip]
static CLASSIC: TemplateConfig = TemplateConfig {
    id: TemplateId::Classic,
    name: "Classic",
    weights: WeightModel {
        entry_base: 42.0,
        char_cost: 0.09,
        line_cost: 6.0,
        summary: BlockCost { base: 24.0, per_unit: 0.10 },
        skills: BlockCost { base: 28.0, per_unit: 3.5 },
        education: BlockCost { base: 26.0, per_unit: 30.0 },
        photo: 0.0,
    },
    capacity: CapacityModel {
        page_capacity: 700.0,
        header: 90.0,
        continuation_margin: 30.0,
    },
    main_pinned: &[SectionKind::Summary],
    sidebar: &[],
    flowing: &[SectionKind::Education, SectionKind::Skills],
    ai_generated: false,
};

#[rustfmt::skip]
static MODERN: TemplateConfig = TemplateConfig {
    id: TemplateId::Modern,
    name: "Modern",
    weights: WeightModel {
        entry_base: 46.0,
        char_cost: 0.095,
        line_cost: 7.0,
        summary: BlockCost { base: 28.0, per_unit: 0.105 },
        skills: BlockCost { base: 30.0, per_unit: 4.0 },
        education: BlockCost { base: 28.0, per_unit: 32.0 },
        photo: 0.0,
    },
    capacity: CapacityModel {
        page_capacity: 700.0,
        header: 110.0,
        continuation_margin: 34.0,
    },
    main_pinned: &[SectionKind::Summary, SectionKind::Skills],
    sidebar: &[],
    flowing: &[SectionKind::Education],
    ai_generated: false,
};

#[rustfmt::skip]
static MINIMAL: TemplateConfig = TemplateConfig {
    id: TemplateId::Minimal,
    name: "Minimal",
    weights: WeightModel {
        entry_base: 36.0,
        char_cost: 0.085,
        line_cost: 5.5,
        summary: BlockCost { base: 20.0, per_unit: 0.095 },
        skills: BlockCost { base: 22.0, per_unit: 3.0 },
        education: BlockCost { base: 22.0, per_unit: 26.0 },
        photo: 0.0,
    },
    capacity: CapacityModel {
        page_capacity: 720.0,
        header: 70.0,
        continuation_margin: 24.0,
    },
    main_pinned: &[SectionKind::Summary],
    sidebar: &[],
    flowing: &[SectionKind::Education, SectionKind::Skills],
    ai_generated: false,
};

#[rustfmt::skip]
static EXECUTIVE: TemplateConfig = TemplateConfig {
    id: TemplateId::Executive,
    name: "Executive",
    weights: WeightModel {
        entry_base: 52.0,
        char_cost: 0.10,
        line_cost: 7.5,
        summary: BlockCost { base: 32.0, per_unit: 0.11 },
        skills: BlockCost { base: 30.0, per_unit: 3.8 },
        education: BlockCost { base: 30.0, per_unit: 34.0 },
        photo: 0.0,
    },
    capacity: CapacityModel {
        page_capacity: 690.0,
        header: 120.0,
        continuation_margin: 36.0,
    },
    main_pinned: &[SectionKind::Summary],
    sidebar: &[],
    flowing: &[SectionKind::Education, SectionKind::Skills],
    ai_generated: false,
};

#[rustfmt::skip]
static SIDEBAR: TemplateConfig = TemplateConfig {
    id: TemplateId::Sidebar,
    name: "Sidebar",
    weights: WeightModel {
        entry_base: 44.0,
        char_cost: 0.12,
        line_cost: 6.5,
        summary: BlockCost { base: 26.0, per_unit: 0.13 },
        skills: BlockCost { base: 30.0, per_unit: 9.0 },
        education: BlockCost { base: 30.0, per_unit: 48.0 },
        photo: 150.0,
    },
    capacity: CapacityModel {
        page_capacity: 700.0,
        header: 100.0,
        continuation_margin: 30.0,
    },
    main_pinned: &[SectionKind::Summary],
    sidebar: &[SectionKind::Photo, SectionKind::Skills, SectionKind::Education],
    flowing: &[],
    ai_generated: false,
};

#[rustfmt::skip]
static CREATIVE: TemplateConfig = TemplateConfig {
    id: TemplateId::Creative,
    name: "Creative",
    weights: WeightModel {
        entry_base: 48.0,
        char_cost: 0.115,
        line_cost: 7.0,
        summary: BlockCost { base: 30.0, per_unit: 0.125 },
        skills: BlockCost { base: 34.0, per_unit: 8.5 },
        education: BlockCost { base: 32.0, per_unit: 36.0 },
        photo: 140.0,
    },
    capacity: CapacityModel {
        page_capacity: 700.0,
        header: 130.0,
        continuation_margin: 40.0,
    },
    main_pinned: &[SectionKind::Summary],
    sidebar: &[SectionKind::Photo, SectionKind::Skills],
    flowing: &[SectionKind::Education],
    ai_generated: false,
};

#[rustfmt::skip]
static GENERATED: TemplateConfig = TemplateConfig {
    id: TemplateId::Generated,
    name: "Generated",
    weights: WeightModel {
        entry_base: 44.0,
        char_cost: 0.095,
        line_cost: 6.5,
        summary: BlockCost { base: 26.0, per_unit: 0.10 },
        skills: BlockCost { base: 28.0, per_unit: 3.6 },
        education: BlockCost { base: 28.0, per_unit: 30.0 },
        photo: 0.0,
    },
    capacity: CapacityModel {
        page_capacity: 700.0,
        header: 96.0,
        continuation_margin: 30.0,
    },
    main_pinned: &[SectionKind::Summary, SectionKind::Skills],
    sidebar: &[],
    flowing: &[SectionKind::Education],
    ai_generated: true,
};

#[rustfmt::skip]
static GENERATED_SIDEBAR: TemplateConfig = TemplateConfig {
    id: TemplateId::GeneratedSidebar,
    name: "Generated (sidebar)",
    weights: WeightModel {
        entry_base: 46.0,
        char_cost: 0.12,
        line_cost: 6.5,
        summary: BlockCost { base: 26.0, per_unit: 0.125 },
        skills: BlockCost { base: 30.0, per_unit: 8.8 },
        education: BlockCost { base: 30.0, per_unit: 46.0 },
        photo: 145.0,
    },
    capacity: CapacityModel {
        page_capacity: 700.0,
        header: 100.0,
        continuation_margin: 32.0,
    },
    main_pinned: &[SectionKind::Summary],
    sidebar: &[SectionKind::Photo, SectionKind::Skills, SectionKind::Education],
    flowing: &[],
    ai_generated: true,
};

/// Returns the static configuration for a template.
pub fn get_template(id: TemplateId) -> &'static TemplateConfig {
    match id {
        TemplateId::Classic => &CLASSIC,
        TemplateId::Modern => &MODERN,
        TemplateId::Minimal => &MINIMAL,
        TemplateId::Executive => &EXECUTIVE,
        TemplateId::Sidebar => &SIDEBAR,
        TemplateId::Creative => &CREATIVE,
        TemplateId::Generated => &GENERATED,
        TemplateId::GeneratedSidebar => &GENERATED_SIDEBAR,
    }
}

/// All templates in catalog order.
pub fn all_templates() -> impl Iterator<Item = &'static TemplateConfig> {
    TemplateId::ALL.into_iter().map(get_template)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
