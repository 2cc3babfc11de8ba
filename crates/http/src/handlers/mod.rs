#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod manifests;
pub mod metrics;
pub mod statistics;
pub mod users;
