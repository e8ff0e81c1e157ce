use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HarnessError, Result};

/// One Wycheproof vector document, covering a single hash algorithm.
///
/// Loaded once per run and treated as immutable. Fields the harness does not
/// consume (`notes`, `schema`, group `type`) are ignored during parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub algorithm: String,
    #[serde(default)]
    pub generator_version: String,
    #[serde(default)]
    pub header: Vec<String>,
    #[serde(default)]
    pub number_of_tests: usize,
    pub test_groups: Vec<TestGroup>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    /// Size of the input keying material in bits. Informational only.
    #[serde(default)]
    pub key_size: u32,
    pub tests: Vec<TestVector>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestVector {
    pub tc_id: u32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub flags: Vec<String>,
    /// Input keying material, hex.
    #[serde(default)]
    pub ikm: String,
    /// Salt, hex.
    #[serde(default)]
    pub salt: String,
    /// Context info, hex.
    #[serde(default)]
    pub info: String,
    /// Expected output keying material, hex.
    #[serde(default)]
    pub okm: String,
    pub result: ResultLabel,
    /// Requested output length in bytes. May exceed the HKDF maximum; that
    /// is itself part of what the corpus tests.
    pub size: usize,
}

/// Expected-outcome label attached to every vector by the corpus generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultLabel {
    Valid,
    Invalid,
    Acceptable,
}

impl fmt::Display for ResultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Acceptable => "acceptable",
        })
    }
}

impl Root {
    /// Parses a vector document from JSON text.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Reads and parses one algorithm's vector file.
    ///
    /// A missing or malformed file is a setup defect and fails the run;
    /// it is never reported as a test-vector result.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| HarnessError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }
}
