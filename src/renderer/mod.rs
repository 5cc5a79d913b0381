//! Renderer Module - Bit-grid presentation
//!
//! Turns engine state into styled terminal lines. The renderer consumes the
//! engine only through its read accessors and returns strings; callers decide
//! where and when to print them.

mod grid;

pub use grid::*;
