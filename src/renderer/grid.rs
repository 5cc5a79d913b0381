//! Bit Grid Rendering - Operand and result rows
//!
//! Renders 8-bit words as rows of digits, most significant bit first:
//! ones bright, zeros dim, unrevealed result cells as placeholders, whole
//! rows dimmed when the current operator ignores that operand.
//!
//! # Example
//!
//! ```ignore
//! use bitspark::{BitEngine, renderer};
//!
//! let engine = BitEngine::new();
//! for line in renderer::render(&engine) {
//!     println!("{line}");
//! }
//! ```

use crossterm::style::{Color, Stylize};
use spark_signals::{derived, Derived};

use crate::bits::{get_bit, to_binary_string};
use crate::engine::BitEngine;
use crate::types::{BitOp, OpInputs, WORD_BITS};

/// Placeholder shown for result cells the reveal has not reached yet.
pub const HIDDEN_BIT_CHAR: char = '·';

// =============================================================================
// Row Characters
// =============================================================================

/// The characters of one grid row, most significant bit first.
///
/// With `Some(revealed)` only the listed positions show their digit and the
/// rest show [`HIDDEN_BIT_CHAR`]; with `None` every digit is shown.
pub fn row_chars(value: u8, revealed: Option<&[u8]>) -> [char; WORD_BITS as usize] {
    let mut chars = [HIDDEN_BIT_CHAR; WORD_BITS as usize];
    for (cell, position) in chars.iter_mut().zip((0..WORD_BITS).rev()) {
        let shown = match revealed {
            Some(positions) => positions.contains(&position),
            None => true,
        };
        if shown {
            *cell = if get_bit(value, position) == 1 { '1' } else { '0' };
        }
    }
    chars
}

fn styled_row(value: u8, revealed: Option<&[u8]>, dimmed: bool) -> String {
    let mut row = String::new();
    for (i, c) in row_chars(value, revealed).iter().enumerate() {
        if i > 0 {
            row.push(' ');
        }
        let cell = match (*c, dimmed) {
            (_, true) => c.to_string().with(Color::DarkGrey),
            ('1', _) => c.to_string().with(Color::Green).bold(),
            ('0', _) => c.to_string().with(Color::DarkGrey),
            (_, _) => c.to_string().with(Color::Grey),
        };
        row.push_str(&cell.to_string());
    }
    row
}

// =============================================================================
// Rows
// =============================================================================

/// Styled row for an operand. Pass `active = false` to dim the whole row
/// when the current operator ignores this operand.
pub fn operand_row(value: u8, active: bool) -> String {
    styled_row(value, None, !active)
}

/// Styled row for the result, honoring the reveal: only positions listed in
/// `revealed` show their digit while a reveal is in progress.
pub fn result_row(value: u8, revealed: &[u8]) -> String {
    styled_row(value, Some(revealed), false)
}

// =============================================================================
// Equation
// =============================================================================

fn format_equation(a: u8, b: u8, op: BitOp, shift: u8, result: u8) -> String {
    let width = WORD_BITS as usize;
    let a = to_binary_string(a, width);
    let result = to_binary_string(result, width);

    match op {
        BitOp::And | BitOp::Or | BitOp::Xor => {
            let b = to_binary_string(b, width);
            format!("{a} {} {b} = {result}", op.symbol())
        }
        BitOp::Not => format!("{}{a} = {result}", op.symbol()),
        BitOp::ShiftLeft | BitOp::ShiftRight => {
            format!("{a} {} {shift} = {result}", op.symbol())
        }
    }
}

/// Plain-text equation for the current engine state.
///
/// Binary operators render as `a op b = result`, the complement as
/// `~a = result`, shifts as `a op amount = result`.
pub fn equation(engine: &BitEngine) -> String {
    format_equation(
        engine.value_a(),
        engine.value_b(),
        engine.operation(),
        engine.shift_amount(),
        engine.result(),
    )
}

/// Reactive equation that recomputes when any engine input changes.
///
/// Use `.get()` to read the current text.
pub fn equation_derived(
    engine: &BitEngine,
) -> Derived<String> {
    let value_a = engine.value_a_signal();
    let value_b = engine.value_b_signal();
    let operation = engine.operation_signal();
    let shift_amount = engine.shift_amount_signal();
    let result = engine.result_signal();

    derived(move || {
        format_equation(
            value_a.get(),
            value_b.get(),
            operation.get(),
            shift_amount.get(),
            result.get(),
        )
    })
}

// =============================================================================
// Full Grid
// =============================================================================

/// Render the full grid for the current engine state.
///
/// Operand A row, operator line, operand B row when the operator consumes it,
/// a rule, then the result row. While a reveal is running the result row only
/// shows the revealed positions.
pub fn render(engine: &BitEngine) -> Vec<String> {
    let inputs = engine.operation().inputs();
    let op = engine.operation();
    let mut lines = Vec::new();

    lines.push(format!(
        "  {}   {:>3}",
        operand_row(engine.value_a(), inputs.contains(OpInputs::OPERAND_A)),
        engine.value_a()
    ));

    let op_line = if inputs.contains(OpInputs::SHIFT) {
        format!("{} {}", op.symbol(), engine.shift_amount())
    } else {
        op.symbol().to_string()
    };
    lines.push(op_line);

    if inputs.contains(OpInputs::OPERAND_B) {
        lines.push(format!(
            "  {}   {:>3}",
            operand_row(engine.value_b(), true),
            engine.value_b()
        ));
    }

    lines.push("-".repeat(2 + 2 * WORD_BITS as usize + 4));

    let revealed = if engine.is_animating() {
        engine.animating_bits()
    } else {
        (0..WORD_BITS).rev().collect()
    };
    lines.push(format!(
        "= {}   {:>3}",
        result_row(engine.result(), &revealed),
        engine.result()
    ));

    lines
}

// =============================================================================
// Tests
// =============================================================================
