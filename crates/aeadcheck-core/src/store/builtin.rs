//! The embedded vector table.
//!
//! The fixtures are the classic AEAD verify scenarios: a baseline AES-128-CCM
//! decrypt, the same message under a 4-byte shortened tag, an undersized
//! output buffer, a deliberately inconsistent declared input length, and a
//! baseline AES-128-GCM decrypt. The byte material is standard published
//! test-vector data for these modes.

use crate::model::{
    AeadAlgorithm, KeyType, KeyUsage, OutputSize, TestVector, VerifyStatus,
};

fn hx(s: &str) -> Vec<u8> {
    hex::decode(s).expect("builtin vector hex is well-formed")
}

const CCM_KEY: &str = "4189351b5caea375a0299e81c621bf43";
const CCM_PLAINTEXT: &str = "4535d12b4377928a7c0a61c9f825a48671ea05910748c8ef";
const CCM_AD: &str = "40a27c1d1e23ea3dbe8056b2774861a4a201cce49f19997d19206d8c8a343951";
const CCM_NONCE: &str = "48c0906930561e0ab0ef4cd972";
const CCM_CIPHERTEXT: &str = "26c56961c035a7e452cce61bc6ee220d77b3f94d18fd10b6";
const CCM_TAG: &str = "d80e8bf80f4a46cab06d4313f0db9be9";
const CCM_TAG_4: &str = "643b4f39";

const GCM_KEY: &str = "3de09874b388e6491988d0c3607eae1f";
const GCM_PLAINTEXT: &str = "4500001c42a200008001441f406793b6e00000020a00f5ff01020201";
const GCM_AD: &str = "42f67e3f1010101010101010";
const GCM_NONCE: &str = "57690e434e280000a2fca1a3";
const GCM_CIPHERTEXT: &str = "fba2ca845e5df9f0f22c3e6e86dd831e1fc65792cd1af9130e1379ed";
const GCM_TAG: &str = "369f071f35e034be95f112e4e7d05d35";

fn ccm_base(id: &str, description: &str) -> TestVector {
    TestVector {
        id: id.into(),
        description: description.into(),
        key_type: KeyType::Aes,
        key_data: hx(CCM_KEY),
        usage: KeyUsage::Decrypt,
        key_algorithm: AeadAlgorithm::ccm(),
        algorithm: AeadAlgorithm::ccm(),
        plaintext: hx(CCM_PLAINTEXT),
        additional_data: hx(CCM_AD),
        nonce: hx(CCM_NONCE),
        ciphertext: hx(CCM_CIPHERTEXT),
        tag: hx(CCM_TAG),
        input_length: 24,
        output_size: OutputSize::Adequate,
        expected_status_phase1: VerifyStatus::Success,
        expected_status_phase2: VerifyStatus::Success,
    }
}

/// The builtin table, in run order.
pub fn vectors() -> Vec<TestVector> {
    let mut out = Vec::new();

    out.push(ccm_base("ccm_aes128_basic", "AES-CCM decrypt and verify"));

    let mut short_tag = ccm_base("ccm_aes128_tag4", "AES-CCM with 4-byte shortened tag");
    short_tag.key_algorithm = AeadAlgorithm::ccm().with_tag_length(4);
    short_tag.algorithm = AeadAlgorithm::ccm().with_tag_length(4);
    short_tag.tag = hx(CCM_TAG_4);
    out.push(short_tag);

    let mut small_buffer = ccm_base(
        "ccm_aes128_small_buffer",
        "AES-CCM with zero-capacity output buffer",
    );
    small_buffer.output_size = OutputSize::Exact(0);
    small_buffer.expected_status_phase1 = VerifyStatus::BufferTooSmall;
    out.push(small_buffer);

    let mut short_input = ccm_base(
        "ccm_aes128_short_input",
        "AES-CCM with declared input length inconsistent with the ciphertext",
    );
    short_input.plaintext = Vec::new();
    short_input.input_length = 30;
    short_input.expected_status_phase1 = VerifyStatus::InvalidArgument;
    short_input.expected_status_phase2 = VerifyStatus::InvalidArgument;
    out.push(short_input);

    out.push(TestVector {
        id: "gcm_aes128_basic".into(),
        description: "AES-GCM decrypt and verify (12-byte nonce, 12-byte additional data)".into(),
        key_type: KeyType::Aes,
        key_data: hx(GCM_KEY),
        usage: KeyUsage::Decrypt,
        key_algorithm: AeadAlgorithm::gcm(),
        algorithm: AeadAlgorithm::gcm(),
        plaintext: hx(GCM_PLAINTEXT),
        additional_data: hx(GCM_AD),
        nonce: hx(GCM_NONCE),
        ciphertext: hx(GCM_CIPHERTEXT),
        tag: hx(GCM_TAG),
        input_length: 28,
        output_size: OutputSize::Adequate,
        expected_status_phase1: VerifyStatus::Success,
        expected_status_phase2: VerifyStatus::Success,
    });

    out
}
