//! Interactive Example - Drive the engine from the keyboard
//!
//! This example demonstrates everything working together:
//! - Operand nudging and clamping
//! - Operator cycling with the input flags dimming unused rows
//! - Shift amount selection
//! - The timed bit reveal redrawing as it advances
//!
//! Run with: cargo run --example interactive

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use bitspark::{renderer, BitEngine, OpInputs};

fn main() -> io::Result<()> {
    let engine = BitEngine::new();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    let result = run(&engine);

    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(engine: &BitEngine) -> io::Result<()> {
    loop {
        draw(engine)?;

        // Short timeout so the reveal redraws while no keys arrive
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Up => engine.set_value_a(i32::from(engine.value_a()) + 1),
            KeyCode::Down => engine.set_value_a(i32::from(engine.value_a()) - 1),
            KeyCode::Right => engine.set_value_b(i32::from(engine.value_b()) + 1),
            KeyCode::Left => engine.set_value_b(i32::from(engine.value_b()) - 1),
            KeyCode::Tab | KeyCode::Char('o') => {
                engine.set_operation(engine.operation().next())
            }
            KeyCode::Char(c @ '0'..='7') => {
                engine.set_shift_amount(c as i32 - '0' as i32)
            }
            KeyCode::Char(' ') => {
                engine.animate_calculation();
            }
            KeyCode::Char('r') => engine.reset(),
            _ => {}
        }
    }
}

fn draw(engine: &BitEngine) -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print("bitspark interactive")
    )?;

    let mut y = 2u16;
    for line in renderer::render(engine) {
        queue!(stdout, MoveTo(2, y), Print(line))?;
        y += 1;
    }

    queue!(stdout, MoveTo(2, y + 1), Print(renderer::equation(engine)))?;

    let shift_hint = if engine.operation().inputs().contains(OpInputs::SHIFT) {
        ", 0-7 shift amount"
    } else {
        ""
    };
    queue!(
        stdout,
        MoveTo(2, y + 3),
        Print(format!(
            "up/down operand A, left/right operand B, tab operator{shift_hint}"
        )),
        MoveTo(2, y + 4),
        Print("space reveal, r reset, q quit")
    )?;

    stdout.flush()
}
