// Layout: content-to-page pagination.
// Weights and capacities come from static per-template tables; one engine serves every template.
// Planning is pure CPU work; HTTP handlers run it inside tokio::task::spawn_blocking.

pub mod capacity;
pub mod engine;
pub mod handlers;
pub mod planner;
pub mod templates;
pub mod weight;

pub use templates::get_template;
