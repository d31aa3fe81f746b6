// src/lib.rs

//! formpost
//!
//! Submit url-encoded form data to a fixed HTTP endpoint and classify the
//! outcome. The core contract is two-valued: a submission either lands
//! with a 2xx status (`Success`) or it does not (`Error`); transport
//! faults never escape the submit boundary. A tagged outcome is available
//! for callers that need to distinguish causes.
//!
//! Also ships a local capture endpoint used as a development stand-in for
//! the remote server.

pub mod capture;
pub mod cli;
pub mod config;
pub mod form;
pub mod runner;
pub mod submission_id;
pub mod submit;
pub mod util;

pub use form::FormData;
pub use submit::{FormSubmitter, SubmissionResult, SubmitOutcome};
