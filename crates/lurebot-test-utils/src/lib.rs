// SPDX-FileCopyrightText: 2026 Lurebot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for lurebot integration tests.
//!
//! Deterministic mock implementations of both capability traits, plus a
//! harness for assembling engines with custom knobs. Everything here is
//! CI-runnable with no network access.

pub mod harness;
pub mod mock_classifier;
pub mod mock_generator;

pub use harness::{EngineOptions, engine_with, template_engine};
pub use mock_classifier::MockClassifier;
pub use mock_generator::MockGenerator;
