//! Conformance harness for HKDF (RFC 5869) implementations, driven by
//! Wycheproof-format test vector documents.
//!
//! One document per hash algorithm is loaded, every vector is derived with
//! the `hkdf` crate, and the actual outcome is reconciled against what the
//! injected [`Policy`] expects. Per-vector disagreements accumulate in a
//! [`Report`]; a broken corpus or harness misconfiguration aborts the run
//! with a [`HarnessError`] instead.

pub mod error;
pub mod hash;
pub mod policy;
pub mod report;
pub mod runner;
pub mod schema;

pub use error::HarnessError;
pub use hash::{HashAlgorithm, OutputTooLong};
pub use policy::{FlagAllowList, Policy, PolicyFn};
pub use report::{Failure, FailureKind, Report};
pub use runner::{VECTOR_FILES, run_corpus, run_document, run_file, run_vector};
pub use schema::{ResultLabel, Root, TestGroup, TestVector};
