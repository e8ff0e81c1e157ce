use std::fmt;

use hkdf::Hkdf;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use thiserror::Error;

use crate::error::{HarnessError, Result};

/// The fixed set of hash algorithms the vector corpus covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

/// Derivation refused by the primitive.
///
/// This is a per-vector outcome, not a harness error: some vectors
/// intentionally request more output than HKDF can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requested {requested} bytes of output, HKDF-{algorithm} allows at most {limit}")]
pub struct OutputTooLong {
    pub algorithm: HashAlgorithm,
    pub requested: usize,
    pub limit: usize,
}

impl HashAlgorithm {
    /// Resolves a canonical algorithm name from the corpus configuration.
    ///
    /// An unrecognized name means the harness is misconfigured, so this is
    /// fatal rather than a per-vector result.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "SHA-1" => Ok(Self::Sha1),
            "SHA-256" => Ok(Self::Sha256),
            "SHA-384" => Ok(Self::Sha384),
            "SHA-512" => Ok(Self::Sha512),
            _ => Err(HarnessError::UnknownHashAlgorithm(name.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest size in bytes.
    pub const fn output_size(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// RFC 5869 caps the output at 255 blocks of the underlying hash.
    pub const fn max_okm_len(self) -> usize {
        255 * self.output_size()
    }

    /// Runs HKDF extract-and-expand and returns exactly `size` bytes.
    pub fn derive(
        self,
        ikm: &[u8],
        salt: &[u8],
        info: &[u8],
        size: usize,
    ) -> std::result::Result<Vec<u8>, OutputTooLong> {
        let mut okm = vec![0u8; size];
        let expanded = match self {
            Self::Sha1 => Hkdf::<Sha1>::new(Some(salt), ikm).expand(info, &mut okm),
            Self::Sha256 => Hkdf::<Sha256>::new(Some(salt), ikm).expand(info, &mut okm),
            Self::Sha384 => Hkdf::<Sha384>::new(Some(salt), ikm).expand(info, &mut okm),
            Self::Sha512 => Hkdf::<Sha512>::new(Some(salt), ikm).expand(info, &mut okm),
        };
        match expanded {
            Ok(()) => Ok(okm),
            Err(_) => Err(OutputTooLong {
                algorithm: self,
                requested: size,
                limit: self.max_okm_len(),
            }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    #[test]
    fn resolves_canonical_names() {
        for algorithm in ALL {
            assert_eq!(
                HashAlgorithm::from_name(algorithm.name()).expect("canonical name"),
                algorithm
            );
        }
    }

    #[test]
    fn rejects_unknown_name() {
        let err = HashAlgorithm::from_name("SHA-3-256").unwrap_err();
        assert!(matches!(err, HarnessError::UnknownHashAlgorithm(name) if name == "SHA-3-256"));
    }

    #[test]
    fn max_output_length_is_a_hard_boundary() {
        for algorithm in ALL {
            let max = algorithm.max_okm_len();
            assert_eq!(max, 255 * algorithm.output_size());

            let okm = algorithm
                .derive(b"ikm", b"salt", b"info", max)
                .expect("maximal output size should derive");
            assert_eq!(okm.len(), max);

            let err = algorithm.derive(b"ikm", b"salt", b"info", max + 1).unwrap_err();
            assert_eq!(err.requested, max + 1);
            assert_eq!(err.limit, max);
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        for algorithm in ALL {
            let first = algorithm.derive(b"input", b"salt", b"context", 64).unwrap();
            let second = algorithm.derive(b"input", b"salt", b"context", 64).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.len(), 64);
        }
    }

    #[test]
    fn zero_length_output_is_allowed() {
        let okm = HashAlgorithm::Sha256.derive(b"ikm", b"", b"", 0).unwrap();
        assert!(okm.is_empty());
    }
}
