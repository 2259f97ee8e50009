//! Two Sum: find two positions in a sequence whose values add up to a target.
//!
//! The finder walks the sequence once, remembering the earliest index of every
//! value it has seen. For each element it looks up the complement
//! (`target - value`); a hit yields the pair immediately, so the result is the
//! first pair completed in scan order, with the earlier index first.
//!
//! [`find_pair_sum_brute_force`] is the quadratic pairwise scan the hash-map
//! approach replaces. It returns the same pair for every input and is kept as
//! a reference for tests and benchmarks.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Outcome of a pair-sum search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PairSum {
    /// Two distinct positions, `first < second`, whose values sum to the target
    Found { first: usize, second: usize },
    /// No two distinct positions sum to the target
    NotFound,
}

impl PairSum {
    pub fn indices(&self) -> Option<(usize, usize)> {
        match *self {
            PairSum::Found { first, second } => Some((first, second)),
            PairSum::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PairSum::Found { .. })
    }
}

impl fmt::Display for PairSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSum::Found { first, second } => write!(f, "[{}, {}]", first, second),
            PairSum::NotFound => write!(f, "not found"),
        }
    }
}

/// Find two distinct positions in `nums` whose values sum to `target`.
///
/// Runs in O(n) time and O(n) extra space.
pub fn find_pair_sum(nums: &[i64], target: i64) -> PairSum {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());

    for (i, &value) in nums.iter().enumerate() {
        // An overflowing complement is outside i64, so nothing seen can match it
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = seen.get(&complement) {
                trace!(first = j, second = i, "pair found");
                return PairSum::Found { first: j, second: i };
            }
        }
        seen.entry(value).or_insert(i);
    }

    trace!(len = nums.len(), target, "no pair found");
    PairSum::NotFound
}

/// Human-readable result line printed by the CLI
pub fn render(nums: &[i64], result: PairSum) -> String {
    match result {
        PairSum::Found { first, second } => {
            debug!(a = nums[first], b = nums[second], "pair values");
            format!("TwoSum => indices: {}", result)
        }
        PairSum::NotFound => "TwoSum => no solution found".to_string(),
    }
}

/// Pretty-printed JSON form of `result`
pub fn render_json(result: PairSum) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Quadratic pairwise scan with the same result ordering as [`find_pair_sum`].
pub fn find_pair_sum_brute_force(nums: &[i64], target: i64) -> PairSum {
    for second in 0..nums.len() {
        for first in 0..second {
            let sum = (nums[first] as i128) + (nums[second] as i128);
            if sum == target as i128 {
                return PairSum::Found { first, second };
            }
        }
    }
    PairSum::NotFound
}
