// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Circuit gadgets: cryptographic primitives expressed as R1CS constraints.
//!
//! A gadget never returns an accept/reject value; its result is the set of
//! constraints it records against the caller's
//! [`ConstraintSystem`](bellpepper_core::ConstraintSystem). Construction
//! either succeeds and yields a well-formed constraint subgraph, or fails
//! fatally (e.g. on inversion of the additive identity) and yields nothing.
//!
//! # Available gadgets
//!
//! - [`mimc`]: the MiMC permutation hash (inversion variant, 91 rounds)
//! - [`edwards`]: twisted Edwards points with constrained addition and
//!   fixed-shape scalar multiplication
//! - [`eddsa`]: cofactored EdDSA signature verification, composing the two

pub mod eddsa;
pub mod edwards;
pub mod mimc;

mod util;
