//! Core library for commitgen
//!
//! This crate implements the **Functional Core** of the commitgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The commitgen project uses a two-crate architecture:
//!
//! - **`commitgen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`commitgen`**: The HTTP server, the Gemini client and the CLI (the Imperative Shell)
//!
//! Everything that decides *what* a commit message looks like lives here:
//! validating the incoming diff, building the prompt, shaping the Gemini
//! request, pulling text out of the Gemini response and sanitizing it.
//! The shell only moves bytes between the network and these functions.
//!
//! # Module Organization
//!
//! - [`types`]: Request, result and error body models shared with the HTTP layer
//! - [`diff`]: Validation of the incoming diff payload
//! - [`prompt`]: Prompt template for the upstream model
//! - [`sanitize`]: Removal of markdown fences and formatting markers from model output
//! - [`gemini`]: Gemini `generateContent` wire types and response extraction
//!
//! # Example Usage
//!
//! ```rust
//! use commitgen_core::{build_prompt, sanitize_message};
//!
//! let prompt = build_prompt("+console.log('hi')");
//! assert!(prompt.contains("+console.log('hi')"));
//!
//! // Pretend this came back from the model
//! let message = sanitize_message("```Add log statement```");
//! assert_eq!(message, "Add log statement");
//! ```

pub mod diff;
pub mod gemini;
pub mod prompt;
pub mod sanitize;
pub mod types;

pub use diff::{validate_diff, InputError};
pub use prompt::build_prompt;
pub use sanitize::sanitize_message;
pub use types::{ErrorBody, GenerationRequest, GenerationResult};
