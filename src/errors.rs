// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! This module defines errors returned by the library.
use bellpepper_core::SynthesisError;
use thiserror::Error;

/// Errors returned during gadget construction
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GadgetError {
  /// returned when attempting to invert the additive identity; fatal to the
  /// in-progress construction and never retried
  #[error("DivisionByZero")]
  DivisionByZero,
  /// returned when a canonical byte encoding does not decode to a field
  /// residue, i.e. the caller supplied unreduced or foreign bytes
  #[error("RepresentationMismatch")]
  RepresentationMismatch,
  /// an error raised by the constraint-system backend, propagated unchanged
  #[error("SynthesisError: {reason}")]
  Synthesis {
    /// the backend's description of the failure
    reason: String,
  },
}

impl From<SynthesisError> for GadgetError {
  fn from(e: SynthesisError) -> Self {
    match e {
      SynthesisError::DivisionByZero => GadgetError::DivisionByZero,
      e => GadgetError::Synthesis {
        reason: e.to_string(),
      },
    }
  }
}
