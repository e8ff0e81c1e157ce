use std::fmt;

use log::warn;

use crate::hash::HashAlgorithm;
use crate::schema::ResultLabel;

/// What went wrong with a single vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The derivation outcome disagreed with what the policy expected.
    Classification {
        expected_success: bool,
        /// Primitive error text, present when derivation failed unexpectedly.
        error: Option<String>,
    },
    /// Both sides expected success, but the derived bytes differ.
    Output {
        /// Expected output keying material, hex.
        expected: String,
        /// Derived output keying material, hex.
        actual: String,
    },
}

/// Diagnostic record for one failing vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub algorithm: HashAlgorithm,
    pub tc_id: u32,
    pub result: ResultLabel,
    pub comment: String,
    pub kind: FailureKind,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: tcid: {}, type: {}, comment: {:?}, ",
            self.algorithm, self.tc_id, self.result, self.comment
        )?;
        match &self.kind {
            FailureKind::Classification {
                expected_success,
                error,
            } => {
                write!(f, "wanted success: {expected_success}, got: ")?;
                match error {
                    Some(error) => f.write_str(error),
                    None => f.write_str("success"),
                }
            }
            FailureKind::Output { expected, actual } => {
                write!(f, "output bytes don't match: expected {expected}, got {actual}")
            }
        }
    }
}

/// Accumulated outcome of a conformance run.
///
/// Failure records never abort the run; they are collected so every vector
/// in every group and file gets evaluated, then surfaced together.
#[derive(Debug, Default)]
pub struct Report {
    vectors_run: usize,
    failures: Vec<Failure>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_pass(&mut self) {
        self.vectors_run += 1;
    }

    pub(crate) fn record_failure(&mut self, failure: Failure) {
        self.vectors_run += 1;
        warn!("{failure}");
        self.failures.push(failure);
    }

    /// Folds another report into this one. Callers sharding vectors across
    /// workers keep a report per worker and merge the buffers afterwards.
    pub fn merge(&mut self, other: Report) {
        self.vectors_run += other.vectors_run;
        self.failures.extend(other.failures);
    }

    pub fn vectors_run(&self) -> usize {
        self.vectors_run
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// A run succeeds iff no failure record exists.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            write!(f, "all {} vectors passed", self.vectors_run)
        } else {
            writeln!(
                f,
                "{} of {} vectors failed:",
                self.failures.len(),
                self.vectors_run
            )?;
            for failure in &self.failures {
                writeln!(f, "  {failure}")?;
            }
            Ok(())
        }
    }
}
