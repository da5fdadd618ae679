//! Digest Computer: reduce a canonical string to a hex digest.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::error::{CanonError, Result};

/// Named digest algorithm.
///
/// `None` is the identity: the canonical string is returned unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    None,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in the order they are listed to users.
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::None,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::None => "none",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length of the hex digest, or `None` for the identity.
    pub fn hex_len(self) -> Option<usize> {
        match self {
            HashAlgorithm::None => None,
            HashAlgorithm::Sha224 => Some(56),
            HashAlgorithm::Sha256 => Some(64),
            HashAlgorithm::Sha384 => Some(96),
            HashAlgorithm::Sha512 => Some(128),
        }
    }

    /// Digest `canonical`'s UTF-8 bytes as lower-case hex.
    pub fn digest(self, canonical: &str) -> String {
        match self {
            HashAlgorithm::None => canonical.to_string(),
            HashAlgorithm::Sha224 => hex_digest::<Sha224>(canonical),
            HashAlgorithm::Sha256 => hex_digest::<Sha256>(canonical),
            HashAlgorithm::Sha384 => hex_digest::<Sha384>(canonical),
            HashAlgorithm::Sha512 => hex_digest::<Sha512>(canonical),
        }
    }
}

fn hex_digest<D: Digest>(data: &str) -> String {
    hex::encode(D::digest(data.as_bytes()))
}

impl FromStr for HashAlgorithm {
    type Err = CanonError;

    /// Case-insensitive; `-` and `_` separators are ignored (`SHA-256`).
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.name() == key)
            .ok_or_else(|| CanonError::unsupported_algorithm(s))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Digest `canonical` with the algorithm called `algorithm`.
///
/// `"none"` returns the input unchanged; unknown names fail with
/// `UnsupportedAlgorithm`.
pub fn digest(canonical: &str, algorithm: &str) -> Result<String> {
    Ok(algorithm.parse::<HashAlgorithm>()?.digest(canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        assert_eq!(digest("{ex:a(ex:p[ex:b])}", "none").unwrap(), "{ex:a(ex:p[ex:b])}");
        assert_eq!(digest("", "none").unwrap(), "");
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            digest("", "sha256").unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest("abc", "sha256").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest("abc", "sha224").unwrap(),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn test_hex_lengths() {
        for alg in HashAlgorithm::ALL {
            let out = alg.digest("{*(ex:p[\"v\"])}");
            match alg.hex_len() {
                Some(len) => {
                    assert_eq!(out.len(), len, "{alg}");
                    assert!(out.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
                }
                None => assert_eq!(out, "{*(ex:p[\"v\"])}"),
            }
        }
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("sha_512".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha512);
        assert_eq!("None".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::None);
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
    }

    #[test]
    fn test_unsupported_algorithm() {
        let err = digest("x", "md5").unwrap_err();
        assert_eq!(
            err,
            CanonError::UnsupportedAlgorithm {
                name: "md5".to_string()
            }
        );
        assert!(err.to_string().contains("sha256"));
    }
}
