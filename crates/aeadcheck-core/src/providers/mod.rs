//! The external AEAD capability the runner drives.
//!
//! A provider owns the cryptography; the runner only builds requests from
//! vectors and asserts statuses. Key material is imported fresh for every
//! call: the two phases of a vector are fully independent provider calls
//! with no shared handle or state.

pub mod rustcrypto;
pub mod scripted;

use async_trait::async_trait;

use crate::model::{AeadAlgorithm, KeyType, KeyUsage, OutputSize, TestVector, VerifyStatus};

/// Parameters needed to import a key for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySpec {
    pub key_type: KeyType,
    pub data: Vec<u8>,
    pub usage: KeyUsage,
    /// The algorithm the key is bound to at import; a verify call with a
    /// different algorithm is a permission error, not a crypto error.
    pub algorithm: AeadAlgorithm,
}

impl KeySpec {
    pub fn from_vector(vector: &TestVector) -> Self {
        Self {
            key_type: vector.key_type,
            data: vector.key_data.clone(),
            usage: vector.usage,
            algorithm: vector.key_algorithm,
        }
    }
}

/// One decrypt-and-verify call. `input_length` is the caller's claim about
/// the ciphertext length and may disagree with `ciphertext.len()`;
/// providers must reject the inconsistency before doing any cryptographic
/// work.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyRequest {
    pub key: KeySpec,
    pub algorithm: AeadAlgorithm,
    pub nonce: Vec<u8>,
    pub additional_data: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
    pub input_length: usize,
    pub output_capacity: OutputSize,
}

impl VerifyRequest {
    /// Phase-1 request: the vector's declared input length and output
    /// capacity exactly as given.
    pub fn bounded(vector: &TestVector) -> Self {
        Self {
            key: KeySpec::from_vector(vector),
            algorithm: vector.algorithm,
            nonce: vector.nonce.clone(),
            additional_data: vector.additional_data.clone(),
            ciphertext: vector.ciphertext.clone(),
            tag: vector.tag.clone(),
            input_length: vector.input_length,
            output_capacity: vector.output_size,
        }
    }

    /// Phase-2 request: identical to phase 1 except the output buffer is
    /// provider-sized. The declared input length stays, because it is a
    /// property of the vector rather than of the buffer.
    pub fn full(vector: &TestVector) -> Self {
        Self {
            output_capacity: OutputSize::Adequate,
            ..Self::bounded(vector)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub status: VerifyStatus,
    /// Decrypted bytes; empty unless `status` is `Success`.
    pub plaintext: Vec<u8>,
}

impl VerifyOutcome {
    pub fn status(status: VerifyStatus) -> Self {
        Self {
            status,
            plaintext: Vec::new(),
        }
    }

    pub fn success(plaintext: Vec<u8>) -> Self {
        Self {
            status: VerifyStatus::Success,
            plaintext,
        }
    }
}

/// The decrypt-and-verify capability under test.
#[async_trait]
pub trait AeadProvider: Send + Sync {
    /// Returns `Ok` with a status outcome for every well-understood input,
    /// including rejections; `Err` means the provider itself broke.
    async fn verify(&self, req: &VerifyRequest) -> anyhow::Result<VerifyOutcome>;

    fn provider_name(&self) -> &'static str;
}
