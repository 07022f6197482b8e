// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Plain (non-constrained) twisted Edwards arithmetic.
//!
//! The curve is `a·x² + y² = 1 + d·x²·y²` over the circuit field. This module
//! is the reference side of the curve gadget: it produces witnesses and test
//! vectors, and backs the reference signer in [`crate::eddsa`]. The addition
//! law is the standard complete twisted-Edwards one, so the identity needs no
//! special casing.

use crate::{errors::GadgetError, field};
use ff::PrimeField;
use num_bigint::BigUint;

/// Public domain parameters of a twisted Edwards curve, shared read-only by
/// every gadget operating on that curve.
#[derive(Clone, Debug)]
pub struct CurveParams<F: PrimeField> {
  /// coefficient `a` of the curve equation
  pub a: F,
  /// coefficient `d` of the curve equation
  pub d: F,
  /// generator of the prime-order subgroup
  pub base: EdwardsPoint<F>,
  /// cofactor of the subgroup; small, fits the 4-bit cofactor ladder
  pub cofactor: u64,
  /// order of the prime subgroup
  pub order: BigUint,
  /// declared bit width of signature scalars; bounds the ladder length
  pub scalar_bits: usize,
}

/// An affine point on the curve, in plain (non-constrained) form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdwardsPoint<F: PrimeField> {
  /// x coordinate
  pub x: F,
  /// y coordinate
  pub y: F,
}

impl<F: PrimeField> EdwardsPoint<F> {
  /// The neutral element `(0, 1)`.
  pub fn identity() -> Self {
    EdwardsPoint {
      x: F::ZERO,
      y: F::ONE,
    }
  }

  /// Whether the point satisfies the curve equation.
  pub fn is_on_curve(&self, params: &CurveParams<F>) -> bool {
    let x2 = self.x.square();
    let y2 = self.y.square();
    params.a * x2 + y2 == F::ONE + params.d * x2 * y2
  }

  /// Twisted Edwards addition:
  ///
  /// `x3 = (x1·y2 + y1·x2) / (1 + d·x1·x2·y1·y2)`
  /// `y3 = (y1·y2 − a·x1·x2) / (1 − d·x1·x2·y1·y2)`
  pub fn add(&self, other: &Self, params: &CurveParams<F>) -> Result<Self, GadgetError> {
    let xy = self.x * other.x * self.y * other.y;
    let x_num = self.x * other.y + self.y * other.x;
    let y_num = self.y * other.y - params.a * self.x * other.x;
    let x = x_num * field::invert(&(F::ONE + params.d * xy))?;
    let y = y_num * field::invert(&(F::ONE - params.d * xy))?;
    Ok(EdwardsPoint { x, y })
  }

  /// Point doubling, via the complete addition law.
  pub fn double(&self, params: &CurveParams<F>) -> Result<Self, GadgetError> {
    self.add(self, params)
  }

  /// Computes `[scalar]·self` by MSB-first double-and-add.
  pub fn scalar_mul(&self, scalar: &BigUint, params: &CurveParams<F>) -> Result<Self, GadgetError> {
    let mut acc = EdwardsPoint::identity();
    for i in (0..scalar.bits()).rev() {
      acc = acc.double(params)?;
      if scalar.bit(i) {
        acc = acc.add(self, params)?;
      }
    }
    Ok(acc)
  }
}
