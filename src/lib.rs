//! Retention sweeper for time-partitioned search indices.
//!
//! One sweep lists the index catalog of a remote cluster, keeps the names
//! carrying the configured partition prefix, derives each survivor's
//! creation date from the date suffix embedded in its name, and deletes
//! every index older than the retention window. Requests can optionally be
//! signed with AWS SigV4 for clusters fronted by IAM authentication.
//!
//! The sweep is idempotent: aborting on the first failure is safe because a
//! later invocation re-derives the same plan minus whatever was already
//! deleted.

pub mod aws;
pub mod catalog;
pub mod config;
pub mod report;
pub mod retention;

#[cfg(test)]
mod tests;

pub use config::{RawOptions, RunConfig};
pub use retention::{SweepError, SweepRunResult, run_sweep};
