//! Data model: test vectors, algorithm descriptors, status codes, and the
//! per-vector result rows produced by the runner.
//!
//! Byte-valued fields are plain `Vec<u8>` with the length carried by the
//! vector itself; the only explicit size fields are `input_length` and
//! `output_size`, which are call arguments rather than buffer facts and may
//! deliberately disagree with the real data to exercise error paths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::RunError;

/// Hex-string (de)serialization for byte fields in vector files.
pub(crate) mod serde_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(v: &[u8], s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&hex::encode(v))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        hex::decode(s.trim()).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Aes,
}

/// Permitted operations for an imported key. The builtin table only uses
/// decrypt-capable keys; encrypt-only keys exist so providers can be checked
/// for usage enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyUsage {
    Decrypt,
    Encrypt,
    EncryptDecrypt,
}

impl KeyUsage {
    pub fn allows_decrypt(self) -> bool {
        matches!(self, KeyUsage::Decrypt | KeyUsage::EncryptDecrypt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Ccm,
    Gcm,
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmFamily::Ccm => write!(f, "CCM"),
            AlgorithmFamily::Gcm => write!(f, "GCM"),
        }
    }
}

fn default_tag_length() -> usize {
    16
}

/// AEAD algorithm variant. A shortened tag is expressed through
/// `tag_length`; 16 is the full-length default for both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum AeadAlgorithm {
    Ccm {
        #[serde(default = "default_tag_length")]
        tag_length: usize,
    },
    Gcm {
        #[serde(default = "default_tag_length")]
        tag_length: usize,
    },
}

impl AeadAlgorithm {
    pub fn ccm() -> Self {
        AeadAlgorithm::Ccm { tag_length: 16 }
    }

    pub fn gcm() -> Self {
        AeadAlgorithm::Gcm { tag_length: 16 }
    }

    pub fn with_tag_length(self, tag_length: usize) -> Self {
        match self {
            AeadAlgorithm::Ccm { .. } => AeadAlgorithm::Ccm { tag_length },
            AeadAlgorithm::Gcm { .. } => AeadAlgorithm::Gcm { tag_length },
        }
    }

    pub fn family(&self) -> AlgorithmFamily {
        match self {
            AeadAlgorithm::Ccm { .. } => AlgorithmFamily::Ccm,
            AeadAlgorithm::Gcm { .. } => AlgorithmFamily::Gcm,
        }
    }

    pub fn tag_length(&self) -> usize {
        match self {
            AeadAlgorithm::Ccm { tag_length } | AeadAlgorithm::Gcm { tag_length } => *tag_length,
        }
    }

    pub fn is_shortened_tag(&self) -> bool {
        self.tag_length() != 16
    }

    /// Tag lengths the algorithm family admits at all, independent of what a
    /// concrete provider supports. CCM requires an even tag of 4..=16; GCM
    /// admits 4..=16.
    pub fn tag_length_is_legal(&self) -> bool {
        let t = self.tag_length();
        match self.family() {
            AlgorithmFamily::Ccm => (4..=16).contains(&t) && t % 2 == 0,
            AlgorithmFamily::Gcm => (4..=16).contains(&t),
        }
    }

    /// Nonce lengths the family admits: CCM 7..=13, GCM any non-empty nonce.
    pub fn nonce_length_is_legal(&self, len: usize) -> bool {
        match self.family() {
            AlgorithmFamily::Ccm => (7..=13).contains(&len),
            AlgorithmFamily::Gcm => len > 0,
        }
    }
}

impl fmt::Display for AeadAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_shortened_tag() {
            write!(f, "AES-{} ({}-byte tag)", self.family(), self.tag_length())
        } else {
            write!(f, "AES-{}", self.family())
        }
    }
}

/// Output buffer capacity handed to the provider. `Adequate` stands for a
/// buffer the provider may size itself; `Exact(n)` is a deliberately bounded
/// capacity (possibly zero) used to provoke `BufferTooSmall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSize {
    Adequate,
    Exact(usize),
}

/// Status codes a provider's verify operation can report, as asserted by
/// the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyStatus {
    Success,
    InvalidArgument,
    BufferTooSmall,
    AuthenticationFailed,
    NotPermitted,
    NotSupported,
}

impl VerifyStatus {
    pub fn is_failure(self) -> bool {
        self != VerifyStatus::Success
    }
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerifyStatus::Success => "success",
            VerifyStatus::InvalidArgument => "invalid_argument",
            VerifyStatus::BufferTooSmall => "buffer_too_small",
            VerifyStatus::AuthenticationFailed => "authentication_failed",
            VerifyStatus::NotPermitted => "not_permitted",
            VerifyStatus::NotSupported => "not_supported",
        };
        write!(f, "{}", s)
    }
}

/// One fixture: everything needed to import a key, call verify twice, and
/// assert the outcome of both phases. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestVector {
    pub id: String,
    pub description: String,

    pub key_type: KeyType,
    #[serde(with = "serde_hex")]
    pub key_data: Vec<u8>,
    pub usage: KeyUsage,
    pub key_algorithm: AeadAlgorithm,

    pub algorithm: AeadAlgorithm,

    /// Expected cleartext on success; never passed to the provider.
    #[serde(default, with = "serde_hex")]
    pub plaintext: Vec<u8>,
    #[serde(default, with = "serde_hex")]
    pub additional_data: Vec<u8>,
    #[serde(with = "serde_hex")]
    pub nonce: Vec<u8>,
    #[serde(default, with = "serde_hex")]
    pub ciphertext: Vec<u8>,
    #[serde(with = "serde_hex")]
    pub tag: Vec<u8>,

    /// Declared ciphertext length for phase 1; may disagree with
    /// `ciphertext.len()` on purpose.
    pub input_length: usize,
    /// Output capacity for phase 1. Phase 2 always runs with `Adequate`.
    pub output_size: OutputSize,

    pub expected_status_phase1: VerifyStatus,
    pub expected_status_phase2: VerifyStatus,
}

impl TestVector {
    /// Structural validation of the static data. A failure here is a
    /// configuration defect and halts the whole run.
    pub fn validate(&self) -> Result<(), RunError> {
        if self.id.trim().is_empty() {
            return Err(RunError::malformed_vector("<unnamed>", "empty vector id"));
        }
        if self.key_data.is_empty() {
            return Err(RunError::malformed_vector(&self.id, "empty key material"));
        }
        if !self.algorithm.tag_length_is_legal() {
            return Err(RunError::malformed_vector(
                &self.id,
                format!(
                    "tag length {} is not legal for {}",
                    self.algorithm.tag_length(),
                    self.algorithm.family()
                ),
            ));
        }
        if self.tag.len() != self.algorithm.tag_length() {
            return Err(RunError::malformed_vector(
                &self.id,
                format!(
                    "tag is {} bytes but algorithm declares a {}-byte tag",
                    self.tag.len(),
                    self.algorithm.tag_length()
                ),
            ));
        }
        if !self.algorithm.nonce_length_is_legal(self.nonce.len()) {
            return Err(RunError::malformed_vector(
                &self.id,
                format!(
                    "nonce length {} is not legal for {}",
                    self.nonce.len(),
                    self.algorithm.family()
                ),
            ));
        }
        Ok(())
    }
}

/// Outcome classification for one vector in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorStatus {
    Pass,
    Fail,
    Skipped,
    Error,
}

/// One row of run output, mirroring a single vector. A mismatch between the
/// provider's status (or plaintext) and the fixture's expectation is a
/// `Fail`; provider errors and timeouts are `Error`; vectors excluded by the
/// feature set are reported as `Skipped` rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorResultRow {
    pub id: String,
    pub description: String,
    pub status: VectorStatus,
    pub message: String,
    pub details: serde_json::Value,
    pub duration_ms: Option<u64>,
}

impl VectorResultRow {
    pub fn pass(vector: &TestVector, details: serde_json::Value) -> Self {
        Self {
            id: vector.id.clone(),
            description: vector.description.clone(),
            status: VectorStatus::Pass,
            message: "ok".into(),
            details,
            duration_ms: None,
        }
    }

    pub fn fail(vector: &TestVector, message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            id: vector.id.clone(),
            description: vector.description.clone(),
            status: VectorStatus::Fail,
            message: message.into(),
            details,
            duration_ms: None,
        }
    }

    pub fn skipped(vector: &TestVector, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            id: vector.id.clone(),
            description: vector.description.clone(),
            status: VectorStatus::Skipped,
            message: format!("skipped: {}", reason),
            details: serde_json::json!({ "skip": { "reason": reason } }),
            duration_ms: None,
        }
    }

    pub fn error(vector: &TestVector, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            id: vector.id.clone(),
            description: vector.description.clone(),
            status: VectorStatus::Error,
            message: message.clone(),
            details: serde_json::json!({ "error": message }),
            duration_ms: None,
        }
    }
}
