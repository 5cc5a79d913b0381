//! End-to-end test for the bit-reveal animation.
//!
//! Exercises the real timer thread:
//! - Full reveal sequence observed through the accessors
//! - Wall-clock lower bound from the schedule
//! - Single-flight re-entry guard
//! - Setters taking effect mid-reveal
//!
//! Run with: cargo test --test reveal_flow

use std::thread;
use std::time::{Duration, Instant};

use bitspark::{BitEngine, BitOp, REVEAL_HOLD_DELAY, REVEAL_STEPS, REVEAL_STEP_DELAY};

/// Poll the engine until the run finishes, recording each distinct non-empty
/// state of `animating_bits` in order of appearance.
fn observe_reveal(engine: &BitEngine) -> Vec<Vec<u8>> {
    let mut seen: Vec<Vec<u8>> = Vec::new();
    while engine.is_animating() {
        let bits = engine.animating_bits();
        if !bits.is_empty() && seen.last() != Some(&bits) {
            seen.push(bits);
        }
        thread::sleep(Duration::from_millis(5));
    }
    seen
}

// =============================================================================
// FULL SEQUENCE
// =============================================================================

#[test]
fn reveal_discloses_all_bits_in_order() {
    let engine = BitEngine::new();

    let start = Instant::now();
    assert!(engine.animate_calculation());

    let seen = observe_reveal(&engine);
    engine.wait_for_idle();
    let elapsed = start.elapsed();

    // Exactly 8 incremental states, lengths 1..=8, most significant first
    assert_eq!(seen.len(), REVEAL_STEPS as usize, "states: {:?}", seen);
    for (i, bits) in seen.iter().enumerate() {
        let expected: Vec<u8> = (0..=i).map(|step| 7 - step as u8).collect();
        assert_eq!(*bits, expected, "state {} mismatch", i);
    }

    // Idle and cleared at the end
    assert!(!engine.is_animating());
    assert!(engine.animating_bits().is_empty());

    // Total suspension: 8 step holds plus the trailing hold
    let floor = REVEAL_STEP_DELAY * u32::from(REVEAL_STEPS) + REVEAL_HOLD_DELAY;
    assert!(
        elapsed >= floor,
        "run took {:?}, schedule requires at least {:?}",
        elapsed,
        floor
    );
}

// =============================================================================
// SINGLE FLIGHT
// =============================================================================

#[test]
fn reentry_does_not_restart_the_sequence() {
    let engine = BitEngine::new();
    assert!(engine.animate_calculation());

    let mut seen: Vec<Vec<u8>> = Vec::new();
    let mut retriggered = false;
    while engine.is_animating() {
        let bits = engine.animating_bits();
        if !bits.is_empty() && seen.last() != Some(&bits) {
            seen.push(bits);
        }
        // Fire a second trigger partway through the run
        if !retriggered && seen.len() >= 3 {
            assert!(!engine.animate_calculation());
            retriggered = true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    engine.wait_for_idle();

    assert!(retriggered, "run finished before the re-entry attempt");

    // One uninterrupted sequence: every state extends the previous one
    for pair in seen.windows(2) {
        assert_eq!(pair[0][..], pair[1][..pair[0].len()], "sequence restarted");
        assert_eq!(pair[0].len() + 1, pair[1].len());
    }
    assert_eq!(seen.last().map(Vec::len), Some(REVEAL_STEPS as usize));
}

// =============================================================================
// MUTATION MID-REVEAL
// =============================================================================

#[test]
fn setters_take_effect_while_revealing() {
    let engine = BitEngine::new();
    assert!(engine.animate_calculation());

    // Result updates synchronously, run continues undisturbed
    engine.set_value_a(0b1111_0000);
    engine.set_operation(BitOp::Xor);
    assert_eq!(engine.result(), 0b1111_0000 ^ 6);
    assert!(engine.is_animating());

    engine.set_operation(BitOp::ShiftRight);
    engine.set_shift_amount(4);
    assert_eq!(engine.result(), 0b0000_1111);

    engine.wait_for_idle();
    assert!(!engine.is_animating());
    assert!(engine.animating_bits().is_empty());
    assert_eq!(engine.result(), 0b0000_1111);
}
