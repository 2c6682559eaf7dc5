//! Networking modules for the analysis service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single upload request and `types` defines the response
//! schema plus the shaped result the page renders.

pub mod api;
pub mod types;
