// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! The Baby Jubjub profile: a twisted Edwards curve whose base field is the
//! BN254 scalar field, so its points live natively inside BN254 circuits.
//!
//! Parameters (public domain constants): `a = 168700`, `d = 168696`,
//! cofactor `8`, and the generator of the prime-order subgroup. Signature
//! scalars use the full 254-bit field width.

use crate::curve::{CurveParams, EdwardsPoint};
use ff::PrimeField;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Re-exports that give access to the standard aliases used in the code base,
/// for the BN254 scalar field.
#[allow(clippy::module_inception)]
pub mod bn254 {
  pub use halo2curves::bn256::Fr as Scalar;
}

/// Order of Baby Jubjub's prime subgroup.
const SUBGROUP_ORDER: &str =
  "2736030358979909402780800718157159386076813972158567259200215660948447373041";

/// x coordinate of the subgroup generator.
const BASE_X: &str =
  "5299619240641551281634865583518297030282874472190772894086521144482721001553";

/// y coordinate of the subgroup generator.
const BASE_Y: &str =
  "16950150798460657717958625567821834550301663161624707787222815936182638968203";

static BABY_JUBJUB: Lazy<CurveParams<bn254::Scalar>> = Lazy::new(|| {
  let coord = |s: &str| bn254::Scalar::from_str_vartime(s).expect("curve constant is in-field");
  CurveParams {
    a: bn254::Scalar::from(168700u64),
    d: bn254::Scalar::from(168696u64),
    base: EdwardsPoint {
      x: coord(BASE_X),
      y: coord(BASE_Y),
    },
    cofactor: 8,
    order: BigUint::parse_bytes(SUBGROUP_ORDER.as_bytes(), 10)
      .expect("subgroup order is well-formed decimal"),
    scalar_bits: bn254::Scalar::NUM_BITS as usize,
  }
});

/// The Baby Jubjub curve parameters, built once per process.
pub fn baby_jubjub() -> &'static CurveParams<bn254::Scalar> {
  &BABY_JUBJUB
}
