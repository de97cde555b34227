// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration validation errors.

/// Reasons a [`RateConfig`](crate::RateConfig) can be rejected by
/// [`RateConfig::validate`](crate::RateConfig::validate).
///
/// Interaction paths never produce errors; these only surface when a host
/// explicitly asks for validation (for example through
/// [`Rate::try_new`](crate::Rate::try_new)).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The star count must be at least one.
    #[error("star count must be positive")]
    ZeroCount,
    /// A tooltip list was supplied whose length differs from the star count.
    #[error("expected {expected} tooltips, found {found}")]
    TooltipCount {
        /// The configured star count.
        expected: usize,
        /// The number of tooltips supplied.
        found: usize,
    },
    /// The initial value lies outside `[0, count]`.
    #[error("value {value} is outside the range 0..={count}")]
    ValueOutOfRange {
        /// The rejected value.
        value: f64,
        /// The configured star count.
        count: usize,
    },
    /// The initial value is not a multiple of the configured step.
    #[error("value {value} is not a multiple of the step (half stars allowed: {allow_half})")]
    ValueOffStep {
        /// The rejected value.
        value: f64,
        /// Whether half steps were allowed.
        allow_half: bool,
    },
}
