use indexmap::IndexMap;
use std::cmp::Ordering;

use super::Comparable;

/// Hash algorithms known to the CycloneDX schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b256,
    Blake2b384,
    Blake2b512,
    Blake3,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
            HashAlgorithm::Blake2b256 => "BLAKE2b-256",
            HashAlgorithm::Blake2b384 => "BLAKE2b-384",
            HashAlgorithm::Blake2b512 => "BLAKE2b-512",
            HashAlgorithm::Blake3 => "BLAKE3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One hash entry: algorithm and hex content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hash {
    pub algorithm: HashAlgorithm,
    pub content: String,
}

impl Hash {
    pub fn new(algorithm: HashAlgorithm, content: impl Into<String>) -> Self {
        Self {
            algorithm,
            content: content.into(),
        }
    }
}

impl Comparable for Hash {
    fn compare(&self, other: &Self) -> Ordering {
        self.algorithm
            .as_str()
            .cmp(other.algorithm.as_str())
            .then_with(|| self.content.cmp(&other.content))
    }
}

/// At most one content per algorithm, insertion ordered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HashRepository(IndexMap<HashAlgorithm, String>);

impl HashRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content for an algorithm, replacing any previous value
    pub fn set(&mut self, algorithm: HashAlgorithm, content: impl Into<String>) {
        self.0.insert(algorithm, content.into());
    }

    pub fn get(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.0.get(&algorithm).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Hash> + '_ {
        self.0
            .iter()
            .map(|(algorithm, content)| Hash::new(*algorithm, content.clone()))
    }
}

impl FromIterator<(HashAlgorithm, String)> for HashRepository {
    fn from_iter<I: IntoIterator<Item = (HashAlgorithm, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
