use std::path::Path;

use log::{debug, info};

use crate::error::{HarnessError, Result};
use crate::hash::HashAlgorithm;
use crate::policy::Policy;
use crate::report::{Failure, FailureKind, Report};
use crate::schema::{Root, TestVector};

/// Static mapping from corpus file name to the hash algorithm it covers.
///
/// This is configuration, not data derived from the documents themselves;
/// iteration order is immaterial as long as every file is visited once.
pub const VECTOR_FILES: &[(&str, &str)] = &[
    ("hkdf_sha1_test.json", "SHA-1"),
    ("hkdf_sha256_test.json", "SHA-256"),
    ("hkdf_sha384_test.json", "SHA-384"),
    ("hkdf_sha512_test.json", "SHA-512"),
];

/// Vectors are assumed to be well-formed hex; a decode failure means the
/// corpus is corrupt and aborts the run.
fn decode_field(field: &'static str, tc_id: u32, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| HarnessError::Hex {
        field,
        tc_id,
        source,
    })
}

/// Judges a single vector, returning the failure record if any.
///
/// Each invocation is pure and stateless relative to other vectors.
pub fn run_vector<P: Policy>(
    algorithm: HashAlgorithm,
    vector: &TestVector,
    policy: &P,
) -> Result<Option<Failure>> {
    let ikm = decode_field("ikm", vector.tc_id, &vector.ikm)?;
    let salt = decode_field("salt", vector.tc_id, &vector.salt)?;
    let info = decode_field("info", vector.tc_id, &vector.info)?;

    let want_pass = policy.should_pass(vector.result, &vector.flags);
    let derived = algorithm.derive(&ikm, &salt, &info, vector.size);

    let failure = |kind| {
        Some(Failure {
            algorithm,
            tc_id: vector.tc_id,
            result: vector.result,
            comment: vector.comment.clone(),
            kind,
        })
    };

    match derived {
        Ok(okm) if want_pass => {
            let expected = decode_field("okm", vector.tc_id, &vector.okm)?;
            if okm == expected {
                Ok(None)
            } else {
                Ok(failure(FailureKind::Output {
                    expected: vector.okm.clone(),
                    actual: hex::encode(okm),
                }))
            }
        }
        // Expected a failure; whatever was derived is never inspected.
        Ok(_) => Ok(failure(FailureKind::Classification {
            expected_success: false,
            error: None,
        })),
        Err(_) if !want_pass => Ok(None),
        Err(err) => Ok(failure(FailureKind::Classification {
            expected_success: true,
            error: Some(err.to_string()),
        })),
    }
}

/// Runs every vector in a document against `algorithm`, recording outcomes
/// into `report`.
pub fn run_document<P: Policy>(
    algorithm: HashAlgorithm,
    root: &Root,
    policy: &P,
    report: &mut Report,
) -> Result<()> {
    for group in &root.test_groups {
        debug!(
            "{algorithm}: group keySize={} with {} vectors",
            group.key_size,
            group.tests.len()
        );
        for vector in &group.tests {
            match run_vector(algorithm, vector, policy)? {
                None => report.record_pass(),
                Some(failure) => report.record_failure(failure),
            }
        }
    }
    Ok(())
}

/// Loads and runs one vector file from `dir`.
///
/// The algorithm name is resolved before the file is touched, so a
/// misconfigured table aborts without producing any per-vector records.
pub fn run_file<P: Policy>(
    dir: &Path,
    file: &str,
    algorithm_name: &str,
    policy: &P,
    report: &mut Report,
) -> Result<()> {
    let algorithm = HashAlgorithm::from_name(algorithm_name)?;
    let root = Root::load(&dir.join(file))?;

    let run_before = report.vectors_run();
    let failures_before = report.failures().len();
    run_document(algorithm, &root, policy, report)?;
    info!(
        "{file}: {} vectors, {} failures",
        report.vectors_run() - run_before,
        report.failures().len() - failures_before
    );
    Ok(())
}

/// Runs the whole corpus from `dir` using [`VECTOR_FILES`].
pub fn run_corpus<P: Policy>(dir: &Path, policy: &P) -> Result<Report> {
    let mut report = Report::new();
    for (file, algorithm) in VECTOR_FILES {
        run_file(dir, file, algorithm, policy, &mut report)?;
    }
    Ok(report)
}
