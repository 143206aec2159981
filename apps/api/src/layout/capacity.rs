//! Page capacities: how much weight fits on the first page and on every page after it.
//!
//! The first page loses the résumé header and whatever static content is pinned
//! to it. With two columns, page height is bounded by the taller column, so the
//! larger of the two static costs is charged.

use serde::{Deserialize, Serialize};

/// Reference design the capacity constants were tuned against.
pub const BASE_FONT_SIZE_PT: f64 = 11.0;
pub const BASE_LINE_HEIGHT: f64 = 1.4;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Resolved budgets consumed by the pagination engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub first_page: f64,
    pub normal_page: f64,
}

impl Capacity {
    /// Budget of the page at `page_index` (0-based).
    pub fn for_page(&self, page_index: usize) -> f64 {
        if page_index == 0 {
            self.first_page
        } else {
            self.normal_page
        }
    }
}

/// Per-template capacity constants, in weight units at the reference design.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CapacityModel {
    pub page_capacity: f64,
    /// Name, title and contact block at the top of page 1.
    pub header: f64,
    /// Repeated continuation heading on pages after the first.
    pub continuation_margin: f64,
}

/// Weight of content pinned to page 1, per column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticWeight {
    pub main: f64,
    pub sidebar: f64,
}

impl StaticWeight {
    /// The taller column bounds the page.
    pub fn binding(&self) -> f64 {
        self.main.max(self.sidebar)
    }
}

/// Font size and line height chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignScale {
    pub font_size_pt: f64,
    pub line_height: f64,
}

impl Default for DesignScale {
    fn default() -> Self {
        Self {
            font_size_pt: BASE_FONT_SIZE_PT,
            line_height: BASE_LINE_HEIGHT,
        }
    }
}

impl DesignScale {
    /// Ratio of the chosen design's line pitch to the reference design's.
    /// Non-positive or non-finite inputs fall back to 1.0.
    pub fn factor(&self) -> f64 {
        let factor =
            (self.font_size_pt / BASE_FONT_SIZE_PT) * (self.line_height / BASE_LINE_HEIGHT);
        if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            1.0
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

impl CapacityModel {
    /// Resolves first-page and normal-page budgets for the given static content and design.
    pub fn resolve(&self, static_weight: StaticWeight, design: DesignScale) -> Capacity {
        let usable = self.page_capacity / design.factor();

        Capacity {
            first_page: usable - self.header - static_weight.binding(),
            normal_page: usable - self.continuation_margin,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
