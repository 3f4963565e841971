// SPDX-FileCopyrightText: 2026 Expensify contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Ordering of child keys, matching how the Realtime Database orders children by key.
//!
//! Keys that parse as 32-bit integers come first in numeric order, followed by
//! all other keys in lexicographic order.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// Compares two child keys.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse_int_key(a), parse_int_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.len().cmp(&b.len())),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Consumes an object node and returns its children in key order.
#[must_use]
pub fn ordered_children(node: Map<String, Value>) -> Vec<(String, Value)> {
    let mut children: Vec<_> = node.into_iter().collect();
    children.sort_by(|(a, _), (b, _)| compare(a, b));
    children
}

fn parse_int_key(key: &str) -> Option<i32> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() && !digits.is_empty() {
        "0"
    } else {
        significant
    };

    if significant.is_empty()
        || significant.len() > 10
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    key.parse::<i64>()
        .ok()
        .and_then(|v| i32::try_from(v).ok())
}
