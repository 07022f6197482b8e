// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Twisted Edwards curve points as constraints.
//!
//! A constrained point is a pair of allocated coordinates. The addition law
//! is the complete twisted-Edwards one, so every point these operations
//! produce satisfies the curve equation whenever the recorded constraints are
//! satisfiable; there is no separate on-curve check.
//!
//! Scalar multiplication is a double-and-add ladder over an explicit bit
//! length. The bit length is always a caller-supplied parameter and never
//! inferred from the scalar's runtime value: the ladder performs exactly
//! `nbits` doublings, additions, and selections, so the circuit shape is a
//! function of the declared width alone.

use crate::{
  curve::{CurveParams, EdwardsPoint},
  gadgets::util,
};
use bellpepper_core::{
  ConstraintSystem, LinearCombination, SynthesisError, boolean::AllocatedBit, num::AllocatedNum,
};
use ff::PrimeField;

/// A curve point inside the circuit: either a placeholder awaiting
/// computation, or a pair of allocated coordinates.
#[derive(Clone)]
pub enum Point<F: PrimeField> {
  /// no coordinates yet; a legal state for outputs that a later operation
  /// fills in
  Unallocated,
  /// allocated coordinates
  Allocated(AllocatedPoint<F>),
}

impl<F: PrimeField> Point<F> {
  /// The allocated coordinates, if any.
  pub fn coords(&self) -> Option<&AllocatedPoint<F>> {
    match self {
      Point::Unallocated => None,
      Point::Allocated(p) => Some(p),
    }
  }
}

impl<F: PrimeField> From<AllocatedPoint<F>> for Point<F> {
  fn from(p: AllocatedPoint<F>) -> Self {
    Point::Allocated(p)
  }
}

/// A twisted Edwards point with both coordinates allocated.
#[derive(Clone)]
pub struct AllocatedPoint<F: PrimeField> {
  /// x coordinate variable
  pub x: AllocatedNum<F>,
  /// y coordinate variable
  pub y: AllocatedNum<F>,
}

impl<F: PrimeField> AllocatedPoint<F> {
  /// Allocates the coordinates of a plain point as witnesses.
  pub fn alloc<CS>(mut cs: CS, p: &EdwardsPoint<F>) -> Result<Self, SynthesisError>
  where
    CS: ConstraintSystem<F>,
  {
    let x = AllocatedNum::alloc(cs.namespace(|| "x"), || Ok(p.x))?;
    let y = AllocatedNum::alloc(cs.namespace(|| "y"), || Ok(p.y))?;
    Ok(AllocatedPoint { x, y })
  }

  /// Allocates a point pinned to constant coordinates; used for the base
  /// point and for the ladder's identity start.
  pub fn alloc_constant<CS>(mut cs: CS, p: &EdwardsPoint<F>) -> Result<Self, SynthesisError>
  where
    CS: ConstraintSystem<F>,
  {
    let x = util::alloc_constant(cs.namespace(|| "x"), p.x)?;
    let y = util::alloc_constant(cs.namespace(|| "y"), p.y)?;
    Ok(AllocatedPoint { x, y })
  }

  /// The witness values, when the constraint system carries an assignment.
  pub fn get_value(&self) -> Option<EdwardsPoint<F>> {
    let x = self.x.get_value()?;
    let y = self.y.get_value()?;
    Some(EdwardsPoint { x, y })
  }

  /// Constrained twisted Edwards addition.
  ///
  /// With `t = x1·x2·y1·y2`, allocates the quotients and enforces
  ///
  /// `(1 + d·t) · x3 = x1·y2 + y1·x2`
  /// `(1 − d·t) · y3 = y1·y2 − a·x1·x2`
  ///
  /// which is valid for any two curve points, the identity included.
  pub fn add<CS>(
    &self,
    mut cs: CS,
    other: &Self,
    params: &CurveParams<F>,
  ) -> Result<Self, SynthesisError>
  where
    CS: ConstraintSystem<F>,
  {
    let x1y2 = self.x.mul(cs.namespace(|| "x1*y2"), &other.y)?;
    let y1x2 = self.y.mul(cs.namespace(|| "y1*x2"), &other.x)?;
    let x1x2 = self.x.mul(cs.namespace(|| "x1*x2"), &other.x)?;
    let y1y2 = self.y.mul(cs.namespace(|| "y1*y2"), &other.y)?;
    let t = x1x2.mul(cs.namespace(|| "x1*x2*y1*y2"), &y1y2)?;

    let a = params.a;
    let d = params.d;

    let x3 = AllocatedNum::alloc(cs.namespace(|| "x3"), || {
      let t = t.get_value().ok_or(SynthesisError::AssignmentMissing)?;
      let num = x1y2.get_value().ok_or(SynthesisError::AssignmentMissing)?
        + y1x2.get_value().ok_or(SynthesisError::AssignmentMissing)?;
      let den: F = Option::from((F::ONE + d * t).invert()).ok_or(SynthesisError::DivisionByZero)?;
      Ok(num * den)
    })?;
    cs.enforce(
      || "x3 denominator",
      |lc| lc + CS::one() + (d, t.get_variable()),
      |lc| lc + x3.get_variable(),
      |lc| lc + x1y2.get_variable() + y1x2.get_variable(),
    );

    let y3 = AllocatedNum::alloc(cs.namespace(|| "y3"), || {
      let t = t.get_value().ok_or(SynthesisError::AssignmentMissing)?;
      let num = y1y2.get_value().ok_or(SynthesisError::AssignmentMissing)?
        - a * x1x2.get_value().ok_or(SynthesisError::AssignmentMissing)?;
      let den: F = Option::from((F::ONE - d * t).invert()).ok_or(SynthesisError::DivisionByZero)?;
      Ok(num * den)
    })?;
    cs.enforce(
      || "y3 denominator",
      |lc| lc + CS::one() - (d, t.get_variable()),
      |lc| lc + y3.get_variable(),
      |lc| lc + y1y2.get_variable() - (a, x1x2.get_variable()),
    );

    Ok(AllocatedPoint { x: x3, y: y3 })
  }

  /// Constrained doubling, via the complete addition law.
  pub fn double<CS>(&self, cs: CS, params: &CurveParams<F>) -> Result<Self, SynthesisError>
  where
    CS: ConstraintSystem<F>,
  {
    self.add(cs, self, params)
  }

  /// Constrained scalar multiplication `[scalar]·self` over exactly `nbits`
  /// bits of the scalar variable.
  ///
  /// MSB-first ladder: each step doubles the accumulator, adds the base, and
  /// selects between the two by the current bit, so the number of recorded
  /// constraints depends only on `nbits`. Pass the field's bit size for
  /// signature scalars and 4 for cofactors.
  pub fn scalar_mul<CS>(
    &self,
    mut cs: CS,
    params: &CurveParams<F>,
    scalar: &AllocatedNum<F>,
    nbits: usize,
  ) -> Result<Self, SynthesisError>
  where
    CS: ConstraintSystem<F>,
  {
    let bits = to_bits_le(cs.namespace(|| "scalar bits"), scalar, nbits)?;

    let mut acc =
      AllocatedPoint::alloc_constant(cs.namespace(|| "identity"), &EdwardsPoint::identity())?;
    for (step, i) in (0..nbits).rev().enumerate() {
      let mut cs = cs.namespace(|| format!("ladder step {step}"));
      acc = acc.double(cs.namespace(|| "double"), params)?;
      let sum = acc.add(cs.namespace(|| "add base"), self, params)?;
      acc = select(cs.namespace(|| "select"), &bits[i], &sum, &acc)?;
    }
    Ok(acc)
  }
}

/// Decomposes `num` into exactly `nbits` allocated bits, little-endian.
///
/// Booleanity comes from [`AllocatedBit::alloc`]; a single packing constraint
/// binds `Σ 2^i·b_i` to the scalar variable.
fn to_bits_le<F, CS>(
  mut cs: CS,
  num: &AllocatedNum<F>,
  nbits: usize,
) -> Result<Vec<AllocatedBit>, SynthesisError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  let bit_values: Vec<Option<bool>> = match num.get_value() {
    Some(v) => {
      let repr = v.to_repr();
      let bytes = repr.as_ref();
      (0..nbits)
        .map(|i| Some((bytes[i / 8] >> (i % 8)) & 1 == 1))
        .collect()
    }
    None => vec![None; nbits],
  };

  let bits = bit_values
    .into_iter()
    .enumerate()
    .map(|(i, b)| AllocatedBit::alloc(cs.namespace(|| format!("bit {i}")), b))
    .collect::<Result<Vec<_>, _>>()?;

  let mut packed = LinearCombination::zero();
  let mut coeff = F::ONE;
  for bit in &bits {
    packed = packed + (coeff, bit.get_variable());
    coeff = coeff.double();
  }
  cs.enforce(
    || "packing",
    |lc| lc + &packed,
    |lc| lc + CS::one(),
    |lc| lc + num.get_variable(),
  );

  Ok(bits)
}

/// `r = if bit { a } else { b }`, one constraint per coordinate:
/// `bit · (a − b) = r − b`.
fn select<F, CS>(
  mut cs: CS,
  bit: &AllocatedBit,
  a: &AllocatedPoint<F>,
  b: &AllocatedPoint<F>,
) -> Result<AllocatedPoint<F>, SynthesisError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  let mut coord = |name: &str,
                   a: &AllocatedNum<F>,
                   b: &AllocatedNum<F>|
   -> Result<AllocatedNum<F>, SynthesisError> {
    let r = AllocatedNum::alloc(cs.namespace(|| format!("{name} selected")), || {
      let picked = if bit.get_value().ok_or(SynthesisError::AssignmentMissing)? {
        a.get_value()
      } else {
        b.get_value()
      };
      picked.ok_or(SynthesisError::AssignmentMissing)
    })?;
    cs.enforce(
      || format!("{name} select"),
      |lc| lc + bit.get_variable(),
      |lc| lc + a.get_variable() - b.get_variable(),
      |lc| lc + r.get_variable() - b.get_variable(),
    );
    Ok(r)
  };

  let x = coord("x", &a.x, &b.x)?;
  let y = coord("y", &a.y, &b.y)?;
  Ok(AllocatedPoint { x, y })
}
