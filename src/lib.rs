//! # bitspark
//!
//! Reactive bit-manipulation engine for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The engine is a caller-owned state record over reactive signals: two
//! bounded 8-bit operands, an operator selection, a shift amount, and the
//! derived result, recomputed synchronously on every mutation. A timed,
//! single-flight reveal animation discloses the result's bits one position at
//! a time for visual pacing:
//!
//! ```text
//! setters → clamp → signals → compute_result → result signal
//! animate_calculation → timer thread → atomics → animating accessors
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (BitOp, OpInputs, word width)
//! - [`bits`] - Numeric encoding helpers (binary strings, bit extraction)
//! - [`engine`] - BitEngine state, result computation, reveal animation
//! - [`renderer`] - Bit-grid presentation (styled rows, equations)

pub mod bits;
pub mod engine;
pub mod renderer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use bits::{get_bit, to_binary_string};

pub use engine::{
    compute_result, revealed_positions, BitEngine, DEFAULT_SHIFT_AMOUNT,
    DEFAULT_VALUE_A, DEFAULT_VALUE_B, REVEAL_HOLD_DELAY, REVEAL_STEPS,
    REVEAL_STEP_DELAY,
};

pub use renderer::{
    equation, equation_derived, operand_row, render, result_row, row_chars,
    HIDDEN_BIT_CHAR,
};
