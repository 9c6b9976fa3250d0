// Shifts only strictly greater elements.
pub mod rust_insertion;

// Swaps only strictly decreasing neighbours, stops after a pass without swaps.
pub mod rust_bubble;

// Top-down merge sort, ties in a merge take the left run.
pub mod rust_mergesort;
