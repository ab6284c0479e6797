// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits implemented by external-model adapters.
//!
//! Both capabilities are optional at runtime: the detector and reply
//! generator always carry a deterministic local fallback, and every error
//! returned through these traits is treated as "capability unavailable,
//! use the fallback" -- never as a request failure.

pub mod classifier;
pub mod generator;

pub use classifier::ScamClassifier;
pub use generator::TextGenerator;
