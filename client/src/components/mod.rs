//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload flow and its results while reading shared
//! state from Leptos context providers or props handed down by the page.

pub mod analysis_results;
pub mod feature_cards;
pub mod image_upload;
pub mod toaster;
