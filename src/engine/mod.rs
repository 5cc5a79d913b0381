//! Bit Engine - Reactive bit-manipulation state
//!
//! Owns the operand/operator/result state behind reactive signals, enforces
//! input bounds, recomputes the result on every mutation, and drives the
//! timed bit-reveal animation with a single-flight guard.
//!
//! The engine is an explicit value owned by the caller. Create one per
//! session, mutate it through the setters, read it through the accessors:
//!
//! ```ignore
//! use bitspark::{BitEngine, BitOp};
//!
//! let engine = BitEngine::new();
//! engine.set_value_a(170);
//! engine.set_operation(BitOp::Xor);
//! assert_eq!(engine.result(), 170 ^ 6);
//!
//! engine.animate_calculation(); // reveal bits 7 down to 0 on a timer
//! ```
//!
//! Setters clamp rather than fail: operands to `[0, 255]`, the shift amount
//! to `[0, 7]`. The result is never settable directly.

mod animate;
mod compute;

pub use animate::{
    revealed_positions, REVEAL_HOLD_DELAY, REVEAL_STEPS, REVEAL_STEP_DELAY,
};
pub use compute::compute_result;

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

use spark_signals::{signal, Signal};

use crate::types::BitOp;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Initial operand A.
pub const DEFAULT_VALUE_A: u8 = 10;
/// Initial operand B.
pub const DEFAULT_VALUE_B: u8 = 6;
/// Initial shift amount.
pub const DEFAULT_SHIFT_AMOUNT: u8 = 1;

// =============================================================================
// BIT ENGINE
// =============================================================================

/// Reactive bit-manipulation engine.
///
/// Holds two 8-bit operands, an operator selection, a shift amount, and the
/// derived 8-bit result. Every field lives in a signal so derived values and
/// effects track reads. The reveal animation runs on a background timer
/// thread publishing through atomics; the accessors sync those into signals.
pub struct BitEngine {
    value_a: Signal<u8>,
    value_b: Signal<u8>,
    operation: Signal<BitOp>,
    shift_amount: Signal<u8>,
    result: Signal<u8>,

    /// Revealed bit positions, synced from `revealed_atomic` on read
    animating_bits: Signal<Vec<u8>>,
    /// Whether a reveal run is in progress, synced from `running` on read
    animating: Signal<bool>,

    /// Step counter written by the reveal thread (0 = nothing revealed)
    revealed_atomic: Arc<AtomicU8>,
    /// Single-flight flag: set from false to true to win a run
    running: Arc<AtomicBool>,
    /// Handle of the most recent reveal thread
    reveal_handle: RefCell<Option<JoinHandle<()>>>,
}

impl BitEngine {
    /// Create an engine with the fixed defaults: `10 & 6`, shift amount 1.
    ///
    /// The result is computed immediately (`10 & 6 = 2`).
    pub fn new() -> Self {
        let engine = Self {
            value_a: signal(DEFAULT_VALUE_A),
            value_b: signal(DEFAULT_VALUE_B),
            operation: signal(BitOp::default()),
            shift_amount: signal(DEFAULT_SHIFT_AMOUNT),
            result: signal(0),
            animating_bits: signal(Vec::new()),
            animating: signal(false),
            revealed_atomic: Arc::new(AtomicU8::new(0)),
            running: Arc::new(AtomicBool::new(false)),
            reveal_handle: RefCell::new(None),
        };
        engine.recompute();
        engine
    }

    // =========================================================================
    // SETTERS
    // =========================================================================

    /// Set operand A, clamped to `[0, 255]`. Recomputes the result.
    pub fn set_value_a(&self, value: i32) {
        self.value_a.set(value.clamp(0, 255) as u8);
        self.recompute();
    }

    /// Set operand B, clamped to `[0, 255]`. Recomputes the result.
    pub fn set_value_b(&self, value: i32) {
        self.value_b.set(value.clamp(0, 255) as u8);
        self.recompute();
    }

    /// Select the operator. Recomputes the result.
    pub fn set_operation(&self, op: BitOp) {
        self.operation.set(op);
        self.recompute();
    }

    /// Set the shift amount, clamped to `[0, 7]`. Recomputes the result.
    pub fn set_shift_amount(&self, amount: i32) {
        self.shift_amount.set(amount.clamp(0, 7) as u8);
        self.recompute();
    }

    /// Recompute the result from the current inputs.
    ///
    /// Every setter already does this; calling it again with unchanged
    /// inputs is a no-op on the observable state.
    pub fn calculate(&self) {
        self.recompute();
    }

    /// Restore the fixed defaults and recompute the result.
    ///
    /// Does not touch an in-flight reveal; the animation is presentation
    /// state layered on top of the result, not part of the inputs.
    pub fn reset(&self) {
        self.value_a.set(DEFAULT_VALUE_A);
        self.value_b.set(DEFAULT_VALUE_B);
        self.operation.set(BitOp::default());
        self.shift_amount.set(DEFAULT_SHIFT_AMOUNT);
        self.recompute();
    }

    fn recompute(&self) {
        let result = compute_result(
            self.value_a.get(),
            self.value_b.get(),
            self.operation.get(),
            self.shift_amount.get(),
        );
        if self.result.get() != result {
            self.result.set(result);
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Current operand A.
    pub fn value_a(&self) -> u8 {
        self.value_a.get()
    }

    /// Current operand B.
    pub fn value_b(&self) -> u8 {
        self.value_b.get()
    }

    /// Current operator.
    pub fn operation(&self) -> BitOp {
        self.operation.get()
    }

    /// Current shift amount.
    pub fn shift_amount(&self) -> u8 {
        self.shift_amount.get()
    }

    /// Current result. Always the pure function of the four inputs.
    pub fn result(&self) -> u8 {
        self.result.get()
    }

    /// Bit positions currently revealed by the animation, most significant
    /// first. Empty whenever no reveal is running.
    ///
    /// Syncs the reveal thread's progress into the signal, so reading from a
    /// tracking context re-runs on the next read after the state moved.
    pub fn animating_bits(&self) -> Vec<u8> {
        let positions = revealed_positions(self.revealed_atomic.load(Ordering::SeqCst));
        if self.animating_bits.get() != positions {
            self.animating_bits.set(positions.clone());
        }
        positions
    }

    /// Whether a reveal run is in progress. Syncs the flag into the signal.
    pub fn is_animating(&self) -> bool {
        let running = self.running.load(Ordering::SeqCst);
        if self.animating.get() != running {
            self.animating.set(running);
        }
        running
    }

    // =========================================================================
    // SIGNAL ACCESSORS
    // =========================================================================

    /// Signal behind operand A, for reactive consumers.
    pub fn value_a_signal(&self) -> Signal<u8> {
        self.value_a.clone()
    }

    /// Signal behind operand B, for reactive consumers.
    pub fn value_b_signal(&self) -> Signal<u8> {
        self.value_b.clone()
    }

    /// Signal behind the operator selection, for reactive consumers.
    pub fn operation_signal(&self) -> Signal<BitOp> {
        self.operation.clone()
    }

    /// Signal behind the shift amount, for reactive consumers.
    pub fn shift_amount_signal(&self) -> Signal<u8> {
        self.shift_amount.clone()
    }

    /// Signal behind the result, for reactive consumers.
    pub fn result_signal(&self) -> Signal<u8> {
        self.result.clone()
    }

    // =========================================================================
    // ANIMATION
    // =========================================================================

    /// Start the bit-reveal animation.
    ///
    /// Reveals positions 7 down to 0, one every
    /// [`REVEAL_STEP_DELAY`], holds the full word for
    /// [`REVEAL_HOLD_DELAY`], then clears back to idle.
    ///
    /// Single-flight: if a run is already in progress the call is ignored and
    /// returns `false`. The reveal is idempotent per full state, so a second
    /// overlapping run would add nothing.
    ///
    /// The run never touches the operands, operator, shift amount, or result.
    /// Setters invoked mid-run take effect on the result immediately while
    /// the reveal continues on its own schedule.
    pub fn animate_calculation(&self) -> bool {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        self.revealed_atomic.store(0, Ordering::SeqCst);
        self.animating_bits.set(Vec::new());
        self.animating.set(true);

        let handle = animate::spawn_reveal(
            Arc::clone(&self.running),
            Arc::clone(&self.revealed_atomic),
        );
        *self.reveal_handle.borrow_mut() = Some(handle);
        true
    }

    /// Block until the in-flight reveal run finishes, if there is one.
    ///
    /// Joins the timer thread and syncs the animation signals back to idle.
    /// Intended for tests and teardown; normal consumers just poll the
    /// accessors.
    pub fn wait_for_idle(&self) {
        if let Some(handle) = self.reveal_handle.borrow_mut().take() {
            // A finished thread joins immediately, so this is safe to call
            // whether or not the run is still going
            let _ = handle.join();
        }
        self.is_animating();
        self.animating_bits();
    }
}

impl Default for BitEngine {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
