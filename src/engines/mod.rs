// Adjacent-pair passes, no early exit.
pub mod bubble;

// Minimum scan, one exchange per pass.
pub mod selection;

// Backward walk with adjacent exchange.
pub mod insertion_standard;

// Forward search phase, then copy-based shift.
pub mod insertion_textbook;
