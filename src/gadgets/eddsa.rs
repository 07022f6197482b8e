// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Cofactored EdDSA signature verification as constraints.
//!
//! The gadget records the constraint set for `[h]·[S]B = [h]·(R + [e]A)`,
//! where `e = H(R.x, R.y, A.x, A.y, M)` is the MiMC challenge. It never
//! evaluates the check to a boolean: satisfiability of the recorded
//! constraints, decided by whatever consumes the constraint system, is the
//! accept/reject signal. Construction either records the full set or fails
//! fatally on an upstream allocation or inversion error.

use crate::{
  curve::CurveParams,
  eddsa::{PublicKey, Signature},
  errors::GadgetError,
  field::Canonical,
  gadgets::{edwards::AllocatedPoint, mimc},
  mimc::MimcParams,
};
use bellpepper_core::{ConstraintSystem, num::AllocatedNum};
use ff::PrimeField;
use tracing::debug;

/// Bit width of the cofactor ladders; cofactors are small, four bits suffice.
const COFACTOR_BITS: usize = 4;

/// Records the verification constraints for `sig` on `message` under
/// `pubkey`.
///
/// The message must already be reduced to a single allocated field element.
/// The scalar component `S` and the cofactor originate in canonical form and
/// are converted to the engine representation before allocation; everything
/// downstream computes over that representation.
#[tracing::instrument(skip_all, name = "eddsa::verify")]
pub fn verify<F, CS>(
  cs: &mut CS,
  params: &CurveParams<F>,
  mimc_params: &MimcParams<F>,
  pubkey: &PublicKey<F>,
  sig: &Signature<F>,
  message: &AllocatedNum<F>,
) -> Result<(), GadgetError>
where
  F: PrimeField,
  CS: ConstraintSystem<F>,
{
  // normalize the canonical-form inputs before any allocation
  let s = sig.s.to_engine()?;
  let cofactor = Canonical::<F>::from_u64(params.cofactor).to_engine()?;

  // put the signature data and public key in the circuit
  let r = AllocatedPoint::alloc(cs.namespace(|| "R"), &sig.r)?;
  let s = AllocatedNum::alloc(cs.namespace(|| "S"), || Ok(s))?;
  let cofactor = AllocatedNum::alloc(cs.namespace(|| "cofactor"), || Ok(cofactor))?;
  let a = AllocatedPoint::alloc(cs.namespace(|| "A"), &pubkey.a)?;

  // e = H(R.x, R.y, A.x, A.y, M); the order is load-bearing
  let challenge = [
    r.x.clone(),
    r.y.clone(),
    a.x.clone(),
    a.y.clone(),
    message.clone(),
  ];
  let e = mimc::hash(cs.namespace(|| "challenge"), mimc_params, &challenge)?;

  // lhs = [cofactor]·([S]·B)
  let base = AllocatedPoint::alloc_constant(cs.namespace(|| "base"), &params.base)?;
  let sb = base.scalar_mul(cs.namespace(|| "S*B"), params, &s, params.scalar_bits)?;
  let lhs = sb.scalar_mul(cs.namespace(|| "clear lhs"), params, &cofactor, COFACTOR_BITS)?;

  // rhs = [cofactor]·(R + [e]·A)
  let ea = a.scalar_mul(cs.namespace(|| "e*A"), params, &e, params.scalar_bits)?;
  let r_ea = ea.add(cs.namespace(|| "R + e*A"), &r, params)?;
  let rhs = r_ea.scalar_mul(cs.namespace(|| "clear rhs"), params, &cofactor, COFACTOR_BITS)?;

  // the verification equation, coordinate by coordinate
  cs.enforce(
    || "lhs.x = rhs.x",
    |lc| lc + lhs.x.get_variable(),
    |lc| lc + CS::one(),
    |lc| lc + rhs.x.get_variable(),
  );
  cs.enforce(
    || "lhs.y = rhs.y",
    |lc| lc + lhs.y.get_variable(),
    |lc| lc + CS::one(),
    |lc| lc + rhs.y.get_variable(),
  );

  debug!(scalar_bits = params.scalar_bits, "recorded verification constraints");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{eddsa::SecretKey, provider::bn254::baby_jubjub};
  use bellpepper_core::test_cs::TestConstraintSystem;
  use halo2curves::bn256::Fr;

  fn setup() -> (TestConstraintSystem<Fr>, MimcParams<Fr>, SecretKey<Fr>) {
    let mimc_params = MimcParams::new("seed");
    let sk = SecretKey::random(baby_jubjub(), &mut rand::thread_rng());
    (TestConstraintSystem::new(), mimc_params, sk)
  }

  #[test]
  fn test_honest_signature_satisfies() {
    let params = baby_jubjub();
    let (mut cs, mimc_params, sk) = setup();

    let message = Fr::from(0xabcdefu64);
    let pk = sk.public_key(params).unwrap();
    let sig = sk.sign(params, &mimc_params, message).unwrap();

    let m = AllocatedNum::alloc(cs.namespace(|| "m"), || Ok(message)).unwrap();
    verify(&mut cs, params, &mimc_params, &pk, &sig, &m).unwrap();
    assert!(cs.is_satisfied());
  }

  #[test]
  fn test_circuit_shape_is_message_independent() {
    let params = baby_jubjub();

    let constraints_for = |message: Fr| {
      let (mut cs, mimc_params, sk) = setup();
      let pk = sk.public_key(params).unwrap();
      let sig = sk.sign(params, &mimc_params, message).unwrap();
      let m = AllocatedNum::alloc(cs.namespace(|| "m"), || Ok(message)).unwrap();
      verify(&mut cs, params, &mimc_params, &pk, &sig, &m).unwrap();
      cs.num_constraints()
    };

    assert_eq!(constraints_for(Fr::from(7u64)), constraints_for(Fr::from(1u64) - Fr::from(2u64)));
  }

  #[test]
  fn test_wrong_message_unsatisfiable() {
    let params = baby_jubjub();
    let (mut cs, mimc_params, sk) = setup();

    let pk = sk.public_key(params).unwrap();
    let sig = sk.sign(params, &mimc_params, Fr::from(1u64)).unwrap();

    // constraints build fine; they are just not satisfiable by this witness
    let m = AllocatedNum::alloc(cs.namespace(|| "m"), || Ok(Fr::from(2u64))).unwrap();
    verify(&mut cs, params, &mimc_params, &pk, &sig, &m).unwrap();
    assert!(!cs.is_satisfied());
  }
}
