//! Session service for technology selection
//!
//! Holds the user's selections and project settings for one session and
//! mediates the calls to the accelerator API.

pub mod catalog;
pub mod selection;

pub use selection::SelectionService;
