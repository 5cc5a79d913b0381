//! Basic Example - Operator table and a single reveal
//!
//! Walks the operator table for the default operands, then runs one reveal
//! and prints the result row as it fills in.
//!
//! Run with: cargo run --example basic

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use bitspark::{renderer, BitEngine, BitOp};

fn main() {
    let engine = BitEngine::new();

    println!(
        "Operator table for a = {} and b = {}:",
        engine.value_a(),
        engine.value_b()
    );
    for op in BitOp::all() {
        engine.set_operation(*op);
        println!("  {:>2}  {}", op.symbol(), renderer::equation(&engine));
    }

    engine.reset();
    println!();
    println!("Revealing {}:", renderer::equation(&engine));

    engine.animate_calculation();
    while engine.is_animating() {
        let bits = engine.animating_bits();
        let row: String = renderer::row_chars(engine.result(), Some(&bits))
            .iter()
            .collect();
        print!("\r  = {row}");
        let _ = io::stdout().flush();
        thread::sleep(Duration::from_millis(50));
    }

    let row: String = renderer::row_chars(engine.result(), None).iter().collect();
    println!("\r  = {row}  ({})", engine.result());
}
