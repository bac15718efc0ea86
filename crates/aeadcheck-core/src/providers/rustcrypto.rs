//! Reference provider backed by the RustCrypto `aes-gcm` and `ccm` crates.
//!
//! Validation happens strictly before any cryptographic work, in this
//! order: key import (length, usage, key/algorithm binding), declared input
//! length consistency, output capacity. Only then is the cipher invoked,
//! so an undersized buffer can never observe a partial plaintext and a
//! malformed length is rejected without touching the key schedule.
//!
//! Supported shapes: AES-128/192/256 with CCM (13-byte nonce, even tag
//! 4..=16) and GCM (12-byte nonce, tag 12..=16). Legal-but-unimplemented
//! shapes report `NotSupported`; illegal shapes report `InvalidArgument`.

use aes::{Aes128, Aes192, Aes256};
use aes_gcm::AesGcm;
use async_trait::async_trait;
use ccm::aead::generic_array::GenericArray;
use ccm::aead::{Aead, KeyInit, Payload};
use ccm::consts::{U10, U12, U13, U14, U15, U16, U4, U6, U8};
use ccm::Ccm;

use super::{AeadProvider, VerifyOutcome, VerifyRequest};
use crate::model::{AeadAlgorithm, KeyType, OutputSize, VerifyStatus};

#[derive(Debug, Default, Clone, Copy)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn new() -> Self {
        Self
    }

    fn verify_sync(req: &VerifyRequest) -> VerifyOutcome {
        // Key import.
        match req.key.key_type {
            KeyType::Aes => {}
        }
        if !matches!(req.key.data.len(), 16 | 24 | 32) {
            return VerifyOutcome::status(VerifyStatus::InvalidArgument);
        }
        if !req.key.usage.allows_decrypt() {
            return VerifyOutcome::status(VerifyStatus::NotPermitted);
        }
        if req.key.algorithm != req.algorithm {
            return VerifyOutcome::status(VerifyStatus::NotPermitted);
        }
        if !req.algorithm.tag_length_is_legal() || req.tag.len() != req.algorithm.tag_length() {
            return VerifyOutcome::status(VerifyStatus::InvalidArgument);
        }

        // Declared length consistency, before any cryptographic work.
        if req.input_length != req.ciphertext.len() {
            return VerifyOutcome::status(VerifyStatus::InvalidArgument);
        }

        // Output capacity, before any partial write can happen.
        if let OutputSize::Exact(cap) = req.output_capacity {
            if cap < req.input_length {
                return VerifyOutcome::status(VerifyStatus::BufferTooSmall);
            }
        }

        let key = req.key.data.as_slice();
        let nonce = req.nonce.as_slice();
        let aad = req.additional_data.as_slice();
        let mut combined = Vec::with_capacity(req.ciphertext.len() + req.tag.len());
        combined.extend_from_slice(&req.ciphertext);
        combined.extend_from_slice(&req.tag);
        let msg = combined.as_slice();

        let result = match req.algorithm {
            AeadAlgorithm::Ccm { tag_length } => {
                if nonce.len() != 13 {
                    return VerifyOutcome::status(VerifyStatus::NotSupported);
                }
                macro_rules! ccm {
                    ($aes:ty, $tag:ty) => {{
                        type Cipher = Ccm<$aes, $tag, U13>;
                        Cipher::new(GenericArray::from_slice(key))
                            .decrypt(GenericArray::from_slice(nonce), Payload { msg, aad })
                    }};
                }
                match (key.len(), tag_length) {
                    (16, 4) => ccm!(Aes128, U4),
                    (16, 6) => ccm!(Aes128, U6),
                    (16, 8) => ccm!(Aes128, U8),
                    (16, 10) => ccm!(Aes128, U10),
                    (16, 12) => ccm!(Aes128, U12),
                    (16, 14) => ccm!(Aes128, U14),
                    (16, 16) => ccm!(Aes128, U16),
                    (24, 4) => ccm!(Aes192, U4),
                    (24, 6) => ccm!(Aes192, U6),
                    (24, 8) => ccm!(Aes192, U8),
                    (24, 10) => ccm!(Aes192, U10),
                    (24, 12) => ccm!(Aes192, U12),
                    (24, 14) => ccm!(Aes192, U14),
                    (24, 16) => ccm!(Aes192, U16),
                    (32, 4) => ccm!(Aes256, U4),
                    (32, 6) => ccm!(Aes256, U6),
                    (32, 8) => ccm!(Aes256, U8),
                    (32, 10) => ccm!(Aes256, U10),
                    (32, 12) => ccm!(Aes256, U12),
                    (32, 14) => ccm!(Aes256, U14),
                    (32, 16) => ccm!(Aes256, U16),
                    _ => return VerifyOutcome::status(VerifyStatus::NotSupported),
                }
            }
            AeadAlgorithm::Gcm { tag_length } => {
                if nonce.len() != 12 {
                    return VerifyOutcome::status(VerifyStatus::NotSupported);
                }
                macro_rules! gcm {
                    ($aes:ty, $tag:ty) => {{
                        type Cipher = AesGcm<$aes, U12, $tag>;
                        Cipher::new(GenericArray::from_slice(key))
                            .decrypt(GenericArray::from_slice(nonce), Payload { msg, aad })
                    }};
                }
                match (key.len(), tag_length) {
                    (16, 12) => gcm!(Aes128, U12),
                    (16, 13) => gcm!(Aes128, U13),
                    (16, 14) => gcm!(Aes128, U14),
                    (16, 15) => gcm!(Aes128, U15),
                    (16, 16) => gcm!(Aes128, U16),
                    (24, 12) => gcm!(Aes192, U12),
                    (24, 13) => gcm!(Aes192, U13),
                    (24, 14) => gcm!(Aes192, U14),
                    (24, 15) => gcm!(Aes192, U15),
                    (24, 16) => gcm!(Aes192, U16),
                    (32, 12) => gcm!(Aes256, U12),
                    (32, 13) => gcm!(Aes256, U13),
                    (32, 14) => gcm!(Aes256, U14),
                    (32, 15) => gcm!(Aes256, U15),
                    (32, 16) => gcm!(Aes256, U16),
                    _ => return VerifyOutcome::status(VerifyStatus::NotSupported),
                }
            }
        };

        match result {
            Ok(plaintext) => VerifyOutcome::success(plaintext),
            Err(_) => VerifyOutcome::status(VerifyStatus::AuthenticationFailed),
        }
    }
}

#[async_trait]
impl AeadProvider for RustCryptoProvider {
    async fn verify(&self, req: &VerifyRequest) -> anyhow::Result<VerifyOutcome> {
        Ok(Self::verify_sync(req))
    }

    fn provider_name(&self) -> &'static str {
        "rustcrypto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::KeyUsage;
    use crate::store::builtin;

    fn vector(id: &str) -> crate::model::TestVector {
        builtin::vectors()
            .into_iter()
            .find(|v| v.id == id)
            .unwrap_or_else(|| panic!("no builtin vector {}", id))
    }

    #[test]
    fn ccm_known_answer_verifies() {
        let v = vector("ccm_aes128_basic");
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::Success);
        assert_eq!(out.plaintext, v.plaintext);
    }

    #[test]
    fn ccm_shortened_tag_verifies() {
        let v = vector("ccm_aes128_tag4");
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::Success);
        assert_eq!(out.plaintext, v.plaintext);
    }

    #[test]
    fn gcm_known_answer_verifies() {
        let v = vector("gcm_aes128_basic");
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::Success);
        assert_eq!(out.plaintext, v.plaintext);
    }

    #[test]
    fn corrupted_tag_fails_authentication() {
        let mut v = vector("ccm_aes128_basic");
        v.tag[0] ^= 0x01;
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::AuthenticationFailed);
        assert!(out.plaintext.is_empty());
    }

    #[test]
    fn corrupted_additional_data_fails_authentication() {
        let mut v = vector("gcm_aes128_basic");
        v.additional_data[0] ^= 0xff;
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::AuthenticationFailed);
    }

    #[test]
    fn inconsistent_input_length_is_rejected_before_crypto() {
        let v = vector("ccm_aes128_short_input");
        // Both phase shapes must reject the declared length.
        let bounded = RustCryptoProvider::verify_sync(&VerifyRequest::bounded(&v));
        let full = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(bounded.status, VerifyStatus::InvalidArgument);
        assert_eq!(full.status, VerifyStatus::InvalidArgument);
    }

    #[test]
    fn zero_capacity_buffer_reports_buffer_too_small() {
        let v = vector("ccm_aes128_small_buffer");
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::bounded(&v));
        assert_eq!(out.status, VerifyStatus::BufferTooSmall);
        assert!(out.plaintext.is_empty());
    }

    #[test]
    fn exact_capacity_matching_length_succeeds() {
        let mut v = vector("ccm_aes128_basic");
        v.output_size = OutputSize::Exact(v.ciphertext.len());
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::bounded(&v));
        assert_eq!(out.status, VerifyStatus::Success);
        assert_eq!(out.plaintext, v.plaintext);
    }

    #[test]
    fn wrong_key_length_is_invalid_argument() {
        let mut v = vector("ccm_aes128_basic");
        v.key_data.truncate(10);
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::InvalidArgument);
    }

    #[test]
    fn encrypt_only_key_is_not_permitted() {
        let mut v = vector("ccm_aes128_basic");
        v.usage = KeyUsage::Encrypt;
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::NotPermitted);
    }

    #[test]
    fn key_bound_to_other_algorithm_is_not_permitted() {
        let mut v = vector("ccm_aes128_basic");
        v.key_algorithm = AeadAlgorithm::gcm();
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::NotPermitted);
    }

    #[test]
    fn unsupported_nonce_lengths_report_not_supported() {
        let mut ccm = vector("ccm_aes128_basic");
        ccm.nonce = vec![0u8; 12];
        assert_eq!(
            RustCryptoProvider::verify_sync(&VerifyRequest::full(&ccm)).status,
            VerifyStatus::NotSupported
        );

        let mut gcm = vector("gcm_aes128_basic");
        gcm.nonce = vec![0u8; 8];
        assert_eq!(
            RustCryptoProvider::verify_sync(&VerifyRequest::full(&gcm)).status,
            VerifyStatus::NotSupported
        );
    }

    #[test]
    fn short_gcm_tag_is_legal_but_unsupported() {
        let mut v = vector("gcm_aes128_basic");
        v.algorithm = AeadAlgorithm::gcm().with_tag_length(4);
        v.key_algorithm = v.algorithm;
        v.tag.truncate(4);
        let out = RustCryptoProvider::verify_sync(&VerifyRequest::full(&v));
        assert_eq!(out.status, VerifyStatus::NotSupported);
    }
}
