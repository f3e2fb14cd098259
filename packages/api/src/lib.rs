//! # API crate — the simulated network boundary for ScholarMatch
//!
//! The views never reach into the catalog for anything that a real deployment
//! would fetch from a server. They call a [`Backend`] instead, and today that is
//! always the [`MockBackend`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait and the [`ApplicationSubmission`] input type |
//! | [`error`] | [`ApiError`], the one failure type every boundary call returns |
//! | [`delay`] | Platform-aware sleep used to fake latency (`gloo-timers` on wasm, `tokio` natively) |
//!
//! ## Boundary calls
//!
//! - **Auth**: `authenticate`
//! - **Matching**: `submit_profile`, `fetch_results`, `extract_resume`
//! - **Application**: `submit_application`
//! - **Templates**: `list_templates`, `download_template`
//! - **Billing**: `subscribe`
//!
//! Latencies and the returning-user email list come from
//! [`store::ScholarMatchConfig`]. With [`store::ScholarMatchConfig::instant`]
//! every call resolves immediately, which is what the tests use.

pub mod backend;
pub mod delay;
pub mod error;
mod mock;

pub use backend::{ApplicationSubmission, Backend};
pub use error::ApiError;
pub use mock::MockBackend;
