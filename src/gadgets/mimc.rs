// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! The MiMC permutation hash as constraints.
//!
//! Each round of the plain permutation computes `m <- (m + k + c_i)^{-1}`;
//! in the circuit the inversion costs a single multiplication constraint
//! `(m + k + c_i) · m' = 1` over a freshly allocated `m'`. The round inputs
//! `m + k + c_i` stay linear combinations, so one round is exactly one
//! constraint and the whole permutation has a fixed shape of
//! [`MIMC_ROUNDS`](crate::mimc::MIMC_ROUNDS) + 1 constraints.

use crate::{gadgets::util, mimc::MimcParams};
use bellpepper_core::{ConstraintSystem, SynthesisError, num::AllocatedNum};
use ff::PrimeField;

/// The keyed permutation over allocated variables; mirrors
/// [`MimcParams::encrypt`] round for round.
///
/// Fails with [`SynthesisError::DivisionByZero`] if any round input is the
/// additive identity; the failure is propagated, never papered over.
pub fn encrypt<F, CS>(
  mut cs: CS,
  params: &MimcParams<F>,
  m: &AllocatedNum<F>,
  k: &AllocatedNum<F>,
) -> Result<AllocatedNum<F>, SynthesisError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  let mut state = m.clone();
  for (i, c) in params.constants().iter().enumerate() {
    let c = *c;
    // m' = (m + k + c)^{-1}, enforced as (m + k + c) · m' = 1
    let next = AllocatedNum::alloc(cs.namespace(|| format!("round {i} state")), || {
      let m = state.get_value().ok_or(SynthesisError::AssignmentMissing)?;
      let k = k.get_value().ok_or(SynthesisError::AssignmentMissing)?;
      Option::from((m + k + c).invert()).ok_or(SynthesisError::DivisionByZero)
    })?;
    cs.enforce(
      || format!("round {i}"),
      |lc| lc + state.get_variable() + k.get_variable() + (c, CS::one()),
      |lc| lc + next.get_variable(),
      |lc| lc + CS::one(),
    );
    state = next;
  }
  // final key addition
  util::add(cs.namespace(|| "output"), &state, k)
}

/// Hashes an ordered sequence of allocated values: the Miyaguchi–Preneel fold
/// of [`MimcParams::hash`], with the running digest as the permutation key.
///
/// The input order is part of the contract; the EdDSA gadget relies on
/// hashing `[R.x, R.y, A.x, A.y, message]` in exactly that order.
pub fn hash<F, CS>(
  mut cs: CS,
  params: &MimcParams<F>,
  inputs: &[AllocatedNum<F>],
) -> Result<AllocatedNum<F>, SynthesisError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  let mut digest = util::alloc_constant(cs.namespace(|| "digest init"), F::ZERO)?;
  for (i, input) in inputs.iter().enumerate() {
    let enc = encrypt(cs.namespace(|| format!("block {i}")), params, input, &digest)?;
    digest = util::add(cs.namespace(|| format!("fold {i}")), &enc, input)?;
  }
  Ok(digest)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mimc::MIMC_ROUNDS;
  use bellpepper_core::test_cs::TestConstraintSystem;
  use ff::Field;
  use halo2curves::bn256::Fr;

  fn alloc(cs: &mut TestConstraintSystem<Fr>, name: &str, v: Fr) -> AllocatedNum<Fr> {
    AllocatedNum::alloc(cs.namespace(|| name.to_string()), || Ok(v)).unwrap()
  }

  #[test]
  fn test_encrypt_matches_plain() {
    let params = MimcParams::<Fr>::new("seed");
    let mut cs = TestConstraintSystem::<Fr>::new();

    let m = alloc(&mut cs, "m", Fr::from(7u64));
    let k = alloc(&mut cs, "k", Fr::from(11u64));
    let out = encrypt(cs.namespace(|| "encrypt"), &params, &m, &k).unwrap();

    let plain = params.encrypt(&Fr::from(7u64), &Fr::from(11u64)).unwrap();
    assert_eq!(out.get_value(), Some(plain));
    assert!(cs.is_satisfied());
  }

  #[test]
  fn test_encrypt_constraint_count_is_fixed() {
    let params = MimcParams::<Fr>::new("seed");
    let mut cs = TestConstraintSystem::<Fr>::new();

    let m = alloc(&mut cs, "m", Fr::from(3u64));
    let k = alloc(&mut cs, "k", Fr::from(4u64));
    encrypt(cs.namespace(|| "encrypt"), &params, &m, &k).unwrap();

    // one constraint per round plus the final key addition
    assert_eq!(cs.num_constraints(), MIMC_ROUNDS + 1);
  }

  #[test]
  fn test_encrypt_zero_round_input_fails() {
    let params = MimcParams::<Fr>::new("seed");
    let mut cs = TestConstraintSystem::<Fr>::new();

    // m + k + c_0 = 0 makes the first round inversion undefined
    let m = alloc(&mut cs, "m", -params.constants()[0]);
    let k = alloc(&mut cs, "k", Fr::ZERO);
    let res = encrypt(cs.namespace(|| "encrypt"), &params, &m, &k);
    assert!(matches!(res, Err(SynthesisError::DivisionByZero)));
  }

  #[test]
  fn test_hash_matches_plain() {
    let params = MimcParams::<Fr>::new("seed");
    let mut cs = TestConstraintSystem::<Fr>::new();

    let values = [Fr::from(1u64), Fr::from(2u64), Fr::from(3u64), Fr::from(4u64), Fr::from(5u64)];
    let inputs: Vec<_> = values
      .iter()
      .enumerate()
      .map(|(i, v)| alloc(&mut cs, &format!("in {i}"), *v))
      .collect();

    let out = hash(cs.namespace(|| "hash"), &params, &inputs).unwrap();
    assert_eq!(out.get_value(), Some(params.hash(&values).unwrap()));
    assert!(cs.is_satisfied());
  }

  #[test]
  fn test_hash_input_order_sensitivity() {
    let params = MimcParams::<Fr>::new("seed");

    let digest_of = |values: &[Fr]| {
      let mut cs = TestConstraintSystem::<Fr>::new();
      let inputs: Vec<_> = values
        .iter()
        .enumerate()
        .map(|(i, v)| alloc(&mut cs, &format!("in {i}"), *v))
        .collect();
      let out = hash(cs.namespace(|| "hash"), &params, &inputs).unwrap();
      assert!(cs.is_satisfied());
      out.get_value().unwrap()
    };

    let ordered = [Fr::from(10u64), Fr::from(20u64), Fr::from(30u64)];
    let swapped = [Fr::from(20u64), Fr::from(10u64), Fr::from(30u64)];
    assert_ne!(digest_of(&ordered), digest_of(&swapped));
  }
}
