// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Shared allocation helpers for the gadgets in this module.

use bellpepper_core::{ConstraintSystem, SynthesisError, num::AllocatedNum};
use ff::PrimeField;

/// Allocates a variable pinned to a constant value with an `x · 1 = value`
/// constraint, so the circuit shape does not depend on the witness.
pub(crate) fn alloc_constant<F, CS>(mut cs: CS, value: F) -> Result<AllocatedNum<F>, SynthesisError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  let num = AllocatedNum::alloc(cs.namespace(|| "const"), || Ok(value))?;
  cs.enforce(
    || "pin to constant",
    |lc| lc + num.get_variable(),
    |lc| lc + CS::one(),
    |lc| lc + (value, CS::one()),
  );
  Ok(num)
}

/// Allocates `a + b` as a fresh variable bound by a linear constraint; every
/// arithmetic step yields a new single-assignment variable.
pub(crate) fn add<F, CS>(
  mut cs: CS,
  a: &AllocatedNum<F>,
  b: &AllocatedNum<F>,
) -> Result<AllocatedNum<F>, SynthesisError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  let sum = AllocatedNum::alloc(cs.namespace(|| "sum"), || {
    let a = a.get_value().ok_or(SynthesisError::AssignmentMissing)?;
    let b = b.get_value().ok_or(SynthesisError::AssignmentMissing)?;
    Ok(a + b)
  })?;
  cs.enforce(
    || "sum = a + b",
    |lc| lc + a.get_variable() + b.get_variable(),
    |lc| lc + CS::one(),
    |lc| lc + sum.get_variable(),
  );
  Ok(sum)
}

#[cfg(test)]
mod tests {
  use super::*;
  use bellpepper_core::test_cs::TestConstraintSystem;
  use halo2curves::bn256::Fr;

  #[test]
  fn test_alloc_constant_is_pinned() {
    let mut cs = TestConstraintSystem::<Fr>::new();
    let c = alloc_constant(cs.namespace(|| "c"), Fr::from(5u64)).unwrap();
    assert_eq!(c.get_value(), Some(Fr::from(5u64)));
    assert!(cs.is_satisfied());
    assert_eq!(cs.num_constraints(), 1);
  }

  #[test]
  fn test_add_enforces_sum() {
    let mut cs = TestConstraintSystem::<Fr>::new();
    let a = AllocatedNum::alloc(cs.namespace(|| "a"), || Ok(Fr::from(2u64))).unwrap();
    let b = AllocatedNum::alloc(cs.namespace(|| "b"), || Ok(Fr::from(3u64))).unwrap();
    let sum = add(cs.namespace(|| "add"), &a, &b).unwrap();
    assert_eq!(sum.get_value(), Some(Fr::from(5u64)));
    assert!(cs.is_satisfied());
  }
}
