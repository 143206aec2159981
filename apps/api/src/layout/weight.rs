//! Content weights: the vertical space a renderable unit is expected to occupy.
//!
//! Weights are abstract units shared with the capacity model. A work entry costs
//! a fixed heading block, plus a per-line overhead for each bullet (marker, line
//! height, spacing), plus a per-character cost for wrapped text. Whole sections
//! (summary, skills, education) are costed as blocks; an absent section weighs 0.

use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeData, WorkEntry};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A résumé section that is laid out as a single atomic block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Skills,
    Education,
    Photo,
}

/// Content density of AI-generated templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
    Spacious,
}

impl Density {
    /// Multiplier applied to raw weights. Compact layouts fit more per page.
    pub fn factor(self) -> f64 {
        match self {
            Density::Compact => 0.9,
            Density::Comfortable => 1.0,
            Density::Spacious => 1.15,
        }
    }
}

/// Cost of a block-style section: `base + per_unit × units`, or 0 when empty.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlockCost {
    pub base: f64,
    pub per_unit: f64,
}

impl BlockCost {
    pub fn weight(&self, units: usize) -> f64 {
        if units == 0 {
            return 0.0;
        }
        sanitize(self.base + self.per_unit * units as f64)
    }
}

/// Per-template weight constants.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeightModel {
    /// Heading block of a work entry (role, company, period, location).
    pub entry_base: f64,
    pub char_cost: f64,
    pub line_cost: f64,
    /// Summary is costed per character.
    pub summary: BlockCost,
    /// Skills are costed per item.
    pub skills: BlockCost,
    /// Education is costed per entry.
    pub education: BlockCost,
    /// Fixed cost of the profile picture, when shown.
    pub photo: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Weight functions
// ────────────────────────────────────────────────────────────────────────────

impl WeightModel {
    /// `entry_base + char_cost × description chars + line_cost × description lines`.
    ///
    /// Blank bullet lines are ignored. Characters are counted on trimmed text.
    pub fn entry_weight(&self, entry: &WorkEntry) -> f64 {
        let (chars, lines) = entry
            .description_lines()
            .fold((0usize, 0usize), |(chars, lines), line| {
                (chars + line.chars().count(), lines + 1)
            });

        sanitize(self.entry_base + self.char_cost * chars as f64 + self.line_cost * lines as f64)
    }

    /// Block weight of a whole section. Absent sections weigh 0.
    pub fn section_weight(&self, section: SectionKind, resume: &ResumeData) -> f64 {
        match section {
            SectionKind::Summary => {
                let chars = resume.summary_text().map_or(0, |s| s.chars().count());
                self.summary.weight(chars)
            }
            SectionKind::Skills => self.skills.weight(resume.skill_count()),
            SectionKind::Education => self.education.weight(resume.education.len()),
            SectionKind::Photo => {
                if resume.has_photo {
                    sanitize(self.photo)
                } else {
                    0.0
                }
            }
        }
    }
}

/// Weights are non-negative; NaN and negatives collapse to 0.
fn sanitize(weight: f64) -> f64 {
    weight.max(0.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
