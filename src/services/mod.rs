//! Application service layer.
//!
//! Services hold the reconciliation logic and sit between the binary and the
//! repository layer.

mod bounce_service;

pub use bounce_service::{BounceService, ReconcileOptions, RunSummary};
