// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT

//! Concrete curve profiles the gadgets can be instantiated with.

pub mod bn254;
