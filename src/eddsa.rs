// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Reference EdDSA keys and signer over a twisted Edwards curve, with the
//! MiMC permutation as the challenge hash.
//!
//! This is the plain counterpart of [`crate::gadgets::eddsa`]: it produces the
//! honest witnesses the circuit gadget is checked against. The scheme is the
//! cofactored variant: a signature `(R, S)` on message `M` under public key
//! `A` satisfies `[h]·[S]B = [h]·(R + [e]A)` with
//! `e = H(R.x, R.y, A.x, A.y, M)`.

use crate::{
  curve::{CurveParams, EdwardsPoint},
  errors::GadgetError,
  field::{self, Canonical},
  mimc::MimcParams,
};
use ff::PrimeField;
use num_bigint::BigUint;
use rand_core::RngCore;

/// An EdDSA secret key: a subgroup scalar and a secret prefix element used to
/// derive the per-signature nonce deterministically.
#[derive(Clone, Debug)]
pub struct SecretKey<F: PrimeField> {
  scalar: BigUint,
  prefix: F,
}

/// An EdDSA public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey<F: PrimeField> {
  /// the point `A = [s]B`
  pub a: EdwardsPoint<F>,
}

/// An EdDSA signature.
///
/// The scalar component is kept in canonical form; it is converted to the
/// engine representation at the gadget boundary.
#[derive(Clone, Copy, Debug)]
pub struct Signature<F: PrimeField> {
  /// the nonce commitment `R = [r]B`
  pub r: EdwardsPoint<F>,
  /// the response scalar `S = r + e·s mod l`, canonically encoded
  pub s: Canonical<F>,
}

impl<F: PrimeField> SecretKey<F> {
  /// Samples a fresh secret key.
  pub fn random<R: RngCore>(params: &CurveParams<F>, rng: &mut R) -> Self {
    let mut wide = [0u8; 64];
    rng.fill_bytes(&mut wide);
    let scalar = BigUint::from_bytes_le(&wide) % &params.order;
    SecretKey {
      scalar,
      prefix: F::random(rng),
    }
  }

  /// The corresponding public key `A = [s]B`.
  pub fn public_key(&self, params: &CurveParams<F>) -> Result<PublicKey<F>, GadgetError> {
    Ok(PublicKey {
      a: params.base.scalar_mul(&self.scalar, params)?,
    })
  }

  /// Signs a message already reduced to a single field element.
  ///
  /// The nonce is derived as `r = H(prefix, M) mod l`, so signing is
  /// deterministic per key and message.
  pub fn sign(
    &self,
    params: &CurveParams<F>,
    mimc: &MimcParams<F>,
    message: F,
  ) -> Result<Signature<F>, GadgetError> {
    let r = field::to_biguint(&mimc.hash(&[self.prefix, message])?) % &params.order;
    let r_point = params.base.scalar_mul(&r, params)?;
    let a = self.public_key(params)?.a;

    let e = challenge(mimc, &r_point, &a, message)? % &params.order;
    let s = (r + e * &self.scalar) % &params.order;

    Ok(Signature {
      r: r_point,
      s: Canonical::from_biguint(&s),
    })
  }
}

/// The challenge integer `H(R.x, R.y, A.x, A.y, M)`, over exactly that input
/// order; the constrained verifier hashes the same sequence.
fn challenge<F: PrimeField>(
  mimc: &MimcParams<F>,
  r: &EdwardsPoint<F>,
  a: &EdwardsPoint<F>,
  message: F,
) -> Result<BigUint, GadgetError> {
  let e = mimc.hash(&[r.x, r.y, a.x, a.y, message])?;
  Ok(field::to_biguint(&e))
}

/// Plain cofactored verification: `[h]·[S]B == [h]·(R + [e]A)`.
///
/// Used by tests as the oracle for the circuit gadget; the gadget itself
/// records constraints instead of returning a boolean.
pub fn verify<F: PrimeField>(
  params: &CurveParams<F>,
  mimc: &MimcParams<F>,
  pubkey: &PublicKey<F>,
  sig: &Signature<F>,
  message: F,
) -> Result<bool, GadgetError> {
  let s = BigUint::from_bytes_le(sig.s.as_bytes());
  let e = challenge(mimc, &sig.r, &pubkey.a, message)?;
  let h = BigUint::from(params.cofactor);

  let lhs = params.base.scalar_mul(&s, params)?.scalar_mul(&h, params)?;
  let rhs = pubkey
    .a
    .scalar_mul(&e, params)?
    .add(&sig.r, params)?
    .scalar_mul(&h, params)?;
  Ok(lhs == rhs)
}
