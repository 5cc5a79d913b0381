//! Bit Reveal Animation - Timed disclosure of result bits
//!
//! Drives the reveal sequence for a computed result: bit positions are
//! disclosed one at a time from most significant to least significant, each
//! step held for a fixed delay, with a longer hold after the last bit before
//! the engine returns to idle.
//!
//! # Pattern
//!
//! - The engine owns two atomics: a running flag and a revealed-step counter
//! - One background thread per run advances the counter on a fixed schedule
//! - Read accessors sync the atomics into signals for reactive consumers
//!
//! The reveal publishes positions, not digits. Renderers read the live result
//! at the revealed positions, so mutating the engine mid-run changes what the
//! revealed cells show without disturbing the run itself.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::types::WORD_BITS;

// =============================================================================
// SCHEDULE
// =============================================================================

/// Number of reveal steps in a run, one per bit of the word.
pub const REVEAL_STEPS: u8 = WORD_BITS;

/// Hold between consecutive bit disclosures.
pub const REVEAL_STEP_DELAY: Duration = Duration::from_millis(150);

/// Trailing hold after the last bit, before the engine returns to idle.
pub const REVEAL_HOLD_DELAY: Duration = Duration::from_millis(500);

/// The bit positions revealed after `count` steps, most significant first.
///
/// Counts above the word width saturate at the full word.
///
/// ```ignore
/// assert_eq!(revealed_positions(1), vec![7]);
/// assert_eq!(revealed_positions(3), vec![7, 6, 5]);
/// ```
pub fn revealed_positions(count: u8) -> Vec<u8> {
    (0..count.min(WORD_BITS))
        .map(|step| WORD_BITS - 1 - step)
        .collect()
}

// =============================================================================
// TIMER THREAD
// =============================================================================

/// Spawn the timer thread for one reveal run.
///
/// The caller must have won the running flag (set it from false to true)
/// and zeroed the counter before spawning. The thread publishes step counts
/// 1..=[`REVEAL_STEPS`] on the schedule above, then clears the counter and
/// the running flag, in that order, so a reader never observes leftover bits
/// on an idle engine.
pub(crate) fn spawn_reveal(
    running: Arc<AtomicBool>,
    revealed: Arc<AtomicU8>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for step in 1..=REVEAL_STEPS {
            revealed.store(step, Ordering::SeqCst);
            thread::sleep(REVEAL_STEP_DELAY);
        }

        thread::sleep(REVEAL_HOLD_DELAY);

        revealed.store(0, Ordering::SeqCst);
        running.store(false, Ordering::SeqCst);
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_revealed_positions_empty_when_idle() {
        assert!(revealed_positions(0).is_empty());
    }

    #[test]
    fn test_revealed_positions_most_significant_first() {
        assert_eq!(revealed_positions(1), vec![7]);
        assert_eq!(revealed_positions(2), vec![7, 6]);
        assert_eq!(revealed_positions(8), vec![7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_revealed_positions_every_length() {
        for count in 0..=REVEAL_STEPS {
            let positions = revealed_positions(count);
            assert_eq!(positions.len(), count as usize);
            // Each step extends the previous sequence
            assert_eq!(positions, revealed_positions(count.saturating_sub(1))
                .into_iter()
                .chain((count > 0).then(|| WORD_BITS - count))
                .collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_revealed_positions_saturates() {
        assert_eq!(revealed_positions(9), revealed_positions(8));
        assert_eq!(revealed_positions(255), revealed_positions(8));
    }

    #[test]
    fn test_schedule_contract() {
        assert_eq!(REVEAL_STEPS, 8);
        assert_eq!(REVEAL_STEP_DELAY, Duration::from_millis(150));
        assert_eq!(REVEAL_HOLD_DELAY, Duration::from_millis(500));
    }

    #[test]
    fn test_reveal_thread_runs_full_schedule() {
        let running = Arc::new(AtomicBool::new(true));
        let revealed = Arc::new(AtomicU8::new(0));

        let start = Instant::now();
        let handle = spawn_reveal(running.clone(), revealed.clone());
        handle.join().unwrap();
        let elapsed = start.elapsed();

        // Counter and flag both cleared at the end
        assert_eq!(revealed.load(Ordering::SeqCst), 0);
        assert!(!running.load(Ordering::SeqCst));

        // 8 step holds plus the trailing hold
        let expected = REVEAL_STEP_DELAY * u32::from(REVEAL_STEPS) + REVEAL_HOLD_DELAY;
        assert!(
            elapsed >= expected,
            "Run took {:?}, schedule requires at least {:?}",
            elapsed,
            expected
        );
    }
}
