//! This library implements cryptographic gadgets: building blocks that
//! express primitives as R1CS constraints for zero-knowledge proof systems.
//!
//! The core pair is a MiMC permutation hash (built from repeated field
//! inversions) and cofactored EdDSA signature verification over a twisted
//! Edwards curve, both written against the
//! [`bellpepper_core::ConstraintSystem`] abstraction rather than executed as
//! plain arithmetic. Plain reference counterparts (curve arithmetic, the MiMC
//! permutation, a signer) live beside the gadgets and supply witnesses and
//! test vectors; the two worlds are required to agree bit for bit.
#![deny(
  warnings,
  unused,
  future_incompatible,
  nonstandard_style,
  rust_2018_idioms,
  missing_docs
)]
#![forbid(unsafe_code)]

// public modules
pub mod curve;
pub mod eddsa;
pub mod errors;
pub mod field;
pub mod gadgets;
pub mod mimc;
pub mod provider;
