//! Command-line support for rendering and checking OpenBSD hostname.if(5)
//! files from a declarative interface document.
//!
//! - [`input`] — TOML/JSON input document loading
//! - [`host`] — platform release detection
//! - [`generate`] — per-interface rendering
//! - [`drift`] — comparison of installed files against generated content
//! - [`report`] — terminal-friendly colored output
//! - [`write_plan`] — output file planning and writing
//!
//! The formatting rules themselves live in the `hostname-if` crate.

pub mod drift;
pub mod generate;
pub mod host;
pub mod input;
pub mod report;
pub mod write_plan;
