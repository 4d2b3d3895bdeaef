//! # intake-core
//!
//! Core types and pure logic for the client intake form.
//!
//! This crate provides everything that does not touch the network:
//! - The service enumeration a client can choose from
//! - The raw [`OnboardingInput`] captured from a form, with lenient decoding
//! - The validated [`OnboardingSubmission`] that goes on the wire
//! - The declarative field validator
//! - The query-string pre-fill reader for the services field
//! - The [`SubmissionResult`] shape rendered back to the user

pub mod errors;
pub mod input;
pub mod prefill;
pub mod result;
pub mod service;
pub mod submission;
pub mod validation;

pub use errors::CoreError;
pub use input::OnboardingInput;
pub use result::SubmissionResult;
pub use service::Service;
pub use submission::OnboardingSubmission;
pub use validation::{Field, ValidationErrors, Violation};
