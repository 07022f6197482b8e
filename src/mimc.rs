// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! MiMC round constants and the plain (non-constrained) permutation.
//!
//! The permutation is the inversion variant of MiMC: each round computes
//! `m <- (m + k + c_i)^{-1}` over the field, and the final output is `m + k`.
//! Repeated inversion is the cheapest nonlinear operation expressible in the
//! constraint model (one multiplication constraint per round), which is what
//! makes the permutation circuit-friendly.
//!
//! Round constants are public: they are derived once from a seed string by a
//! Keccak-256 chain and reduced into the field, and the resulting table is an
//! immutable value passed explicitly to the gadgets.

use crate::{errors::GadgetError, field};
use ff::PrimeField;
use sha3::{Digest, Keccak256};

/// Number of rounds of the permutation for this profile.
pub const MIMC_ROUNDS: usize = 91;

/// The immutable per-seed round-constant table.
#[derive(Clone, Debug)]
pub struct MimcParams<F: PrimeField> {
  seed: String,
  constants: Vec<F>,
}

impl<F: PrimeField> MimcParams<F> {
  /// Derives the [`MIMC_ROUNDS`] round constants for `seed`.
  ///
  /// The seed is pre-hashed once; each constant is the running Keccak-256
  /// digest re-hashed and reduced modulo the field (big-endian `SetBytes`
  /// semantics). The same seed always yields the same table.
  pub fn new(seed: &str) -> Self {
    let mut state: [u8; 32] = Keccak256::digest(seed.as_bytes()).into();
    let mut constants = Vec::with_capacity(MIMC_ROUNDS);
    for _ in 0..MIMC_ROUNDS {
      state = Keccak256::digest(state).into();
      constants.push(field::from_be_bytes_reduced::<F>(&state));
    }
    MimcParams {
      seed: seed.to_string(),
      constants,
    }
  }

  /// The seed this table was derived from.
  pub fn seed(&self) -> &str {
    &self.seed
  }

  /// The ordered round constants.
  pub fn constants(&self) -> &[F] {
    &self.constants
  }

  /// Plain execution of the keyed permutation: `m` is the message, `k` the
  /// encryption key.
  ///
  /// Fails with [`GadgetError::DivisionByZero`] if any round input
  /// `m + k + c_i` is the additive identity; no default is substituted.
  pub fn encrypt(&self, m: &F, k: &F) -> Result<F, GadgetError> {
    let mut m = *m;
    for c in &self.constants {
      // m = (m + k + c)^{-1}
      let t = field::add(&field::add(&m, k), c);
      m = field::invert(&t)?;
    }
    Ok(field::add(&m, k))
  }

  /// Hashes an ordered sequence of field elements by folding them through the
  /// permutation: Miyaguchi–Preneel with the XOR replaced by field addition,
  /// starting from a zero digest.
  ///
  /// The input order is significant; permuting it changes the digest.
  pub fn hash(&self, inputs: &[F]) -> Result<F, GadgetError> {
    let mut digest = F::ZERO;
    for m in inputs {
      let enc = self.encrypt(m, &digest)?;
      digest = field::add(&enc, m);
    }
    Ok(digest)
  }
}
