//! campaign-prs: close or rewrite every pull request raised by a multi-repository campaign.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{UpdatePrsOptions, UpdatePrsOutcome, update_prs, update_prs_at};
pub use domain::{ActionKind, AppError, RunStatus, RunSummary};
