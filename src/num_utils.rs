// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared numeric helpers.

/// Round to one decimal place, half away from zero.
///
/// Used for every distance figure shown to the user so aggregation and
/// progress agree on the same value.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
