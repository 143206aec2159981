//! Pagination Engine: splits an ordered list of weights into page spans.
//!
//! # Algorithm
//! - Total fits the first page → one page.
//! - Total fits first + one normal page → *balanced* split of page 1: among the
//!   prefixes that fit the first page, take the greedy (largest) one and the one
//!   closest to half the total, then pick the prefix closest to the mean of the
//!   two. The remainder goes to page 2.
//! - Otherwise → greedy page 1, then greedy chunking of the remainder into
//!   normal pages.
//! - An entry that alone exceeds its page budget is still placed, alone.
//!
//! The engine is a total function: any input (empty, oversized, NaN weights or
//! capacities) yields a partition covering every index exactly once, in order.
//! Comparisons are non-strict: a page may be filled to exactly its capacity.

use serde::Serialize;

use crate::layout::capacity::Capacity;

/// A contiguous run of entries assigned to one page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageSpan {
    pub start: usize,
    /// Exclusive.
    pub end: usize,
    pub weight: f64,
}

impl PageSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Partitions `weights` into pages under `capacity`.
///
/// Returns an empty vector iff `weights` is empty. Negative and NaN weights are
/// treated as 0.
pub fn paginate(weights: &[f64], capacity: &Capacity) -> Vec<PageSpan> {
    if weights.is_empty() {
        return Vec::new();
    }

    let weights: Vec<f64> = weights.iter().map(|w| w.max(0.0)).collect();
    let total: f64 = weights.iter().sum();
    let first = capacity.first_page;
    let normal = capacity.normal_page;

    let mut spans = Vec::new();

    if total <= first {
        spans.push(make_span(&weights, 0, weights.len()));
    } else {
        let first_end = if total <= first + normal {
            balanced_split(&weights, total, first)
        } else {
            greedy_split(&weights, first)
        };
        spans.push(make_span(&weights, 0, first_end));
        chunk_greedy(&weights, first_end, normal, &mut spans);
    }

    spans.retain(|span| !span.is_empty());
    if spans.is_empty() {
        spans.push(make_span(&weights, 0, weights.len()));
    }
    spans
}

// ────────────────────────────────────────────────────────────────────────────
// Split strategies
// ────────────────────────────────────────────────────────────────────────────

/// End (exclusive) of page 1 when the content spans exactly two pages' budget.
fn balanced_split(weights: &[f64], total: f64, first: f64) -> usize {
    let fitting = fitting_prefixes(weights, first);
    let Some(&greedy_weight) = fitting.last() else {
        return 1;
    };

    let balanced = nearest(&fitting, total / 2.0);
    let target = (greedy_weight + fitting[balanced]) / 2.0;

    nearest(&fitting, target) + 1
}

/// End (exclusive) of the largest prefix fitting `first`, at least one entry.
fn greedy_split(weights: &[f64], first: f64) -> usize {
    fitting_prefixes(weights, first).len().max(1)
}

/// Appends greedy pages covering `weights[start..]`.
///
/// A page is closed when the next entry would push it past `normal` and it
/// already holds at least one entry.
fn chunk_greedy(weights: &[f64], start: usize, normal: f64, spans: &mut Vec<PageSpan>) {
    let mut page_start = start;
    let mut page_weight = 0.0_f64;

    for (i, &weight) in weights.iter().enumerate().skip(start) {
        if i > page_start && page_weight + weight > normal {
            spans.push(PageSpan {
                start: page_start,
                end: i,
                weight: page_weight,
            });
            page_start = i;
            page_weight = 0.0;
        }
        page_weight += weight;
    }

    if page_start < weights.len() {
        spans.push(PageSpan {
            start: page_start,
            end: weights.len(),
            weight: page_weight,
        });
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Cumulative weights of every prefix that fits within `limit`.
/// `result[i]` is the weight of `weights[..=i]`.
fn fitting_prefixes(weights: &[f64], limit: f64) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0_f64, |sum, &weight| {
            *sum += weight;
            Some(*sum)
        })
        .take_while(|&sum| sum <= limit)
        .collect()
}

/// Index of the value closest to `target`; earliest wins ties.
fn nearest(values: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, value) in values.iter().enumerate() {
        let distance = (value - target).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

fn make_span(weights: &[f64], start: usize, end: usize) -> PageSpan {
    PageSpan {
        start,
        end,
        weight: weights[start..end].iter().sum(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
