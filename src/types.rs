//! Core types for bitspark.
//!
//! These types define the foundation everything builds on.
//! They flow through the engine and define what the renderer understands.

// =============================================================================
// Word width
// =============================================================================

/// Fixed operand width in bits.
///
/// Every operand and result is an 8-bit unsigned word. Wider arithmetic is
/// out of scope; anything shifted past bit 7 is discarded.
pub const WORD_BITS: u8 = 8;

// =============================================================================
// OpInputs (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which engine inputs an operator consumes, as a bitfield.
    ///
    /// Combine with bitwise OR: `OpInputs::OPERAND_A | OpInputs::SHIFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OpInputs: u8 {
        const OPERAND_A = 1 << 0;
        const OPERAND_B = 1 << 1;
        const SHIFT = 1 << 2;
    }
}

// =============================================================================
// BitOp
// =============================================================================

/// Bitwise operators the engine can apply to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOp {
    /// Bitwise AND of both operands
    #[default]
    And,
    /// Bitwise OR of both operands
    Or,
    /// Bitwise XOR of both operands
    Xor,
    /// Complement of operand A (operand B ignored)
    Not,
    /// Operand A shifted left by the shift amount
    ShiftLeft,
    /// Operand A shifted right by the shift amount (zero-fill)
    ShiftRight,
}

impl BitOp {
    /// Parse from string (case-insensitive). Accepts names and symbols.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "and" | "&" => Some(Self::And),
            "or" | "|" => Some(Self::Or),
            "xor" | "^" => Some(Self::Xor),
            "not" | "~" => Some(Self::Not),
            "shiftleft" | "shl" | "<<" => Some(Self::ShiftLeft),
            "shiftright" | "shr" | ">>" => Some(Self::ShiftRight),
            _ => None,
        }
    }

    /// Get all operators as a slice.
    pub const fn all() -> &'static [BitOp] {
        &[
            Self::And,
            Self::Or,
            Self::Xor,
            Self::Not,
            Self::ShiftLeft,
            Self::ShiftRight,
        ]
    }

    /// Display symbol for the operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Not => "~",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
        }
    }

    /// Which inputs this operator reads.
    ///
    /// Lets presentation code dim or hide the operand B row and the shift
    /// selector when the current operator ignores them.
    pub const fn inputs(self) -> OpInputs {
        match self {
            Self::And | Self::Or | Self::Xor => {
                OpInputs::OPERAND_A.union(OpInputs::OPERAND_B)
            }
            Self::Not => OpInputs::OPERAND_A,
            Self::ShiftLeft | Self::ShiftRight => {
                OpInputs::OPERAND_A.union(OpInputs::SHIFT)
            }
        }
    }

    /// The next operator in display order, wrapping around.
    pub fn next(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|op| *op == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }
}

// =============================================================================
// Tests
// =============================================================================
