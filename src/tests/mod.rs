//! In-crate end-to-end tests driving full sweeps against a mock catalog
//! server.

mod sweep_e2e;
