// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Field arithmetic adapter.
//!
//! Gadgets compute over "engine" elements (the `ff::PrimeField` type, whose
//! internal representation is the multiplicative Montgomery encoding), while
//! signatures, cofactors, and round-constant seeds arrive as canonical reduced
//! byte encodings. [`Canonical`] tags the latter so the two representations
//! cannot be mixed without an explicit conversion; a canonical encoding that
//! does not decode to a residue is rejected with
//! [`GadgetError::RepresentationMismatch`].
//!
//! Throughout the crate, `F::Repr` is assumed to be the little-endian byte
//! encoding of the residue, which holds for the `halo2curves` fields this
//! library is instantiated with.

use crate::errors::GadgetError;
use ff::{Field, PrimeField};
use num_bigint::BigUint;
use num_traits::Num;

/// A field residue in its canonical (reduced, little-endian) byte encoding.
///
/// This is the representation external inputs arrive in; convert with
/// [`Canonical::to_engine`] before any arithmetic.
#[derive(Clone, Copy)]
pub struct Canonical<F: PrimeField>(F::Repr);

impl<F: PrimeField> core::fmt::Debug for Canonical<F> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Canonical(")?;
    for b in self.0.as_ref() {
      write!(f, "{b:02x}")?;
    }
    write!(f, ")")
  }
}

impl<F: PrimeField> Canonical<F> {
  /// Wraps raw canonical bytes.
  pub fn from_repr(repr: F::Repr) -> Self {
    Canonical(repr)
  }

  /// Encodes a small integer, e.g. a curve cofactor.
  pub fn from_u64(v: u64) -> Self {
    Canonical(F::from(v).to_repr())
  }

  /// Encodes an integer already reduced below the field modulus.
  pub fn from_biguint(v: &BigUint) -> Self {
    let mut repr = F::Repr::default();
    let bytes = v.to_bytes_le();
    repr.as_mut()[..bytes.len()].copy_from_slice(&bytes);
    Canonical(repr)
  }

  /// Captures the canonical encoding of an engine element.
  pub fn of(a: &F) -> Self {
    Canonical(a.to_repr())
  }

  /// Exposes the underlying bytes.
  pub fn as_bytes(&self) -> &[u8] {
    self.0.as_ref()
  }

  /// Decodes into the engine representation the gadgets compute in.
  ///
  /// Fails with [`GadgetError::RepresentationMismatch`] when the bytes do not
  /// encode a reduced residue.
  pub fn to_engine(&self) -> Result<F, GadgetError> {
    Option::<F>::from(F::from_repr(self.0)).ok_or(GadgetError::RepresentationMismatch)
  }
}

/// Field addition; total.
pub fn add<F: Field>(a: &F, b: &F) -> F {
  *a + *b
}

/// Field multiplication; total.
pub fn mul<F: Field>(a: &F, b: &F) -> F {
  *a * *b
}

/// Field inversion.
///
/// Fails with [`GadgetError::DivisionByZero`] when `a` is the additive
/// identity; the caller must propagate the failure, not substitute a default.
pub fn invert<F: Field>(a: &F) -> Result<F, GadgetError> {
  Option::<F>::from(a.invert()).ok_or(GadgetError::DivisionByZero)
}

/// The field modulus as an integer.
pub fn modulus<F: PrimeField>() -> BigUint {
  BigUint::from_str_radix(F::MODULUS.trim_start_matches("0x"), 16)
    .expect("PrimeField::MODULUS is well-formed hex")
}

/// The integer value of an engine element.
pub fn to_biguint<F: PrimeField>(a: &F) -> BigUint {
  BigUint::from_bytes_le(a.to_repr().as_ref())
}

/// Maps an arbitrary integer into the field by reduction modulo the prime.
pub fn from_biguint<F: PrimeField>(v: &BigUint) -> F {
  let reduced = v % modulus::<F>();
  Canonical::from_biguint(&reduced)
    .to_engine()
    .expect("reduced integer is a canonical residue")
}

/// Maps big-endian bytes into the field by reduction, matching the
/// `SetBytes` semantics round-constant seeds are specified with.
pub fn from_be_bytes_reduced<F: PrimeField>(bytes: &[u8]) -> F {
  from_biguint(&BigUint::from_bytes_be(bytes))
}

#[cfg(test)]
mod tests {
  use super::*;
  use halo2curves::bn256::Fr;
  use proptest::prelude::*;

  #[test]
  fn test_invert_zero_fails() {
    assert_eq!(invert(&Fr::ZERO), Err(crate::errors::GadgetError::DivisionByZero));
  }

  #[test]
  fn test_invert_nonzero() {
    let a = Fr::from(42u64);
    let inv = invert(&a).unwrap();
    assert_eq!(mul(&a, &inv), Fr::ONE);
  }

  #[test]
  fn test_canonical_round_trip() {
    let a = Fr::from(0xdead_beefu64);
    assert_eq!(Canonical::of(&a).to_engine().unwrap(), a);
  }

  #[test]
  fn test_non_canonical_bytes_rejected() {
    // the all-ones encoding exceeds the BN254 scalar modulus
    let repr = [0xffu8; 32];
    let c = Canonical::<Fr>::from_repr(repr.into());
    assert_eq!(c.to_engine(), Err(crate::errors::GadgetError::RepresentationMismatch));
  }

  #[test]
  fn test_biguint_round_trip() {
    let a = Fr::from(123_456_789u64);
    assert_eq!(from_biguint::<Fr>(&to_biguint(&a)), a);
  }

  proptest! {
    #[test]
    fn prop_conversions_are_mutually_inverse(v in any::<u64>()) {
      let a = Fr::from(v);
      prop_assert_eq!(Canonical::of(&a).to_engine().unwrap(), a);
    }

    #[test]
    fn prop_invert_is_multiplicative_inverse(v in 1u64..) {
      let a = Fr::from(v);
      prop_assert_eq!(mul(&a, &invert(&a).unwrap()), Fr::ONE);
    }
  }
}
