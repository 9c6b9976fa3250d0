use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::stable::{rust_bubble, rust_insertion, rust_mergesort};
use crate::unstable::{rust_quicksort, rust_selection, rust_shell};

/// Runtime handle for picking one of the six sorts by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Shell,
    Merge,
    Quick,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort algorithm {0:?}, expected one of selection, insertion, bubble, shell, merge, quick")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Shell => "shell",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Insertion | Algorithm::Bubble | Algorithm::Merge
        )
    }

    pub fn sort<T>(self, v: &mut [T])
    where
        T: Ord,
    {
        match self {
            Algorithm::Selection => rust_selection::sort(v),
            Algorithm::Insertion => rust_insertion::sort(v),
            Algorithm::Bubble => rust_bubble::sort(v),
            Algorithm::Shell => rust_shell::sort(v),
            Algorithm::Merge => rust_mergesort::sort(v),
            Algorithm::Quick => rust_quicksort::sort(v),
        }
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Selection => rust_selection::sort_by(v, compare),
            Algorithm::Insertion => rust_insertion::sort_by(v, compare),
            Algorithm::Bubble => rust_bubble::sort_by(v, compare),
            Algorithm::Shell => rust_shell::sort_by(v, compare),
            Algorithm::Merge => rust_mergesort::sort_by(v, compare),
            Algorithm::Quick => rust_quicksort::sort_by(v, compare),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == s || format!("{}sort", algo.name()) == s)
            .ok_or(UnknownAlgorithm(s))
    }
}
