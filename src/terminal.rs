//! crossterm-backed shell
//!
//! Owns the terminal for the duration of a game: raw mode, alternate screen,
//! hidden cursor. Everything is restored when the [`Terminal`] is dropped or
//! when the program panics.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal,
};

use crate::consts::TICK;
use crate::game::{Command, Shell};
use crate::render::FrameBuffer;
use crate::sim::Intent;

/// Map a key press to a command. Unbound keys steer nowhere.
pub fn command_for(key: KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Steer(Intent::None);
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Command::Steer(Intent::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Command::Steer(Intent::MoveRight)
        }
        _ => Command::Steer(Intent::None),
    }
}

/// Fold one tick's worth of commands into one. Quit wins over steering;
/// otherwise the last directional command counts.
pub fn collapse(commands: impl IntoIterator<Item = Command>) -> Command {
    let mut intent = Intent::None;
    for command in commands {
        match command {
            Command::Quit => return Command::Quit,
            Command::Steer(Intent::None) => {}
            Command::Steer(steer) => intent = steer,
        }
    }
    Command::Steer(intent)
}

/// Leave the alternate screen and raw mode, ignoring failures
fn restore(out: &mut impl Write) {
    let _ = execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    );
    let _ = terminal::disable_raw_mode();
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(&mut stdout());
        default_hook(info);
    }));
}

/// Terminal session used as the game's shell
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Take over the terminal. Fails if it is too small for the arena.
    pub fn enter() -> Result<Self> {
        let (cols, rows) = terminal::size().context("failed to query terminal size")?;
        let (need_cols, need_rows) = (FrameBuffer::WIDTH as u16, FrameBuffer::HEIGHT as u16);
        if cols < need_cols || rows < need_rows {
            bail!(
                "terminal is {}x{}, the arena needs at least {}x{}",
                cols,
                rows,
                need_cols,
                need_rows
            );
        }

        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = stdout();
        if let Err(err) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        ) {
            restore(&mut out);
            return Err(err).context("failed to set up the screen");
        }
        log::debug!("Terminal {}x{} ready", cols, rows);
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.out);
    }
}

impl Shell for Terminal {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        for (row, line) in frame.lines().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.out.flush().context("failed to draw frame")
    }

    fn poll(&mut self) -> Result<Command> {
        let mut pending = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                pending.push(command_for(key));
            }
        }
        Ok(collapse(pending))
    }

    fn sleep_tick(&mut self) {
        std::thread::sleep(TICK);
    }
}
