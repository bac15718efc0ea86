//! Conformance checking for the decrypt-and-verify path of AEAD providers.
//!
//! The crate is organized as a one-way pipeline: the [`store`] yields an
//! ordered, feature-filtered table of [`model::TestVector`] fixtures, the
//! [`engine`] drives each vector through an [`providers::AeadProvider`] in a
//! two-phase verify protocol, and [`report`] aggregates and emits the
//! per-vector outcomes. The cryptographic primitives themselves always live
//! behind the provider trait; this crate never implements CCM or GCM.

pub mod config;
pub mod engine;
pub mod errors;
pub mod model;
pub mod providers;
pub mod report;
pub mod store;
