pub mod rust_selection;

// Insertion sort over the halving gap sequence len/2, len/4, ..., 1.
pub mod rust_shell;

// Lomuto partition, last element as pivot.
pub mod rust_quicksort;
