//! Service layer for entityinfo
//!
//! Business logic between the HTTP handlers and the upstream clients and
//! storage. The statistics aggregator lives here.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Services hold trait objects")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod manifest_service;
mod metrics_service;
mod statistics_service;
mod user_service;

#[cfg(test)]
mod test_doubles;

pub use error::ServiceError;
pub use manifest_service::ManifestService;
pub use metrics_service::MetricsService;
pub use statistics_service::StatisticsService;
pub use user_service::UserService;
