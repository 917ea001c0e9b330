//! # ldpc-core
//!
//! Core LDPC construction, cycle counting, and belief-propagation decoding
//! kernels: Gallager regular parity-check matrices, a systematic generator
//! reducer, length-4 cycle counting, a GF(2) encoder, a Sum-Product
//! decoder, and the LLR helper that turns symbol-conditional probabilities
//! into per-bit channel LLRs.

pub mod cycles;
pub mod decoder;
pub mod dims;
pub mod encode;
pub mod gallager;
pub mod gf2;
pub mod llr;
pub mod primitives;
pub mod rand;
pub mod systematic;
