use std::io::{self, stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::grid::{Direction, GridSize, Position};
use crate::input::{InputEvent, InputSource};
use crate::render::{Canvas, Cell, TextStyle};

/// Raw mode plus alternate screen for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Fails when the board plus the score line does not fit the current terminal.
pub fn ensure_fits(grid: GridSize) -> io::Result<()> {
    check_fits(grid, terminal::size()?)
}

fn check_fits(grid: GridSize, (cols, rows): (u16, u16)) -> io::Result<()> {
    if cols < grid.width || rows <= grid.height {
        return Err(io::Error::other(format!(
            "terminal is {}x{}, need at least {}x{}",
            cols,
            rows,
            grid.width,
            grid.height + 1
        )));
    }
    Ok(())
}

/// One character per board cell. Commands are queued and flushed on `present`.
pub struct TerminalCanvas<W: Write> {
    out: W,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

fn cell_glyph(cell: Cell) -> (char, Color) {
    match cell {
        Cell::Empty => ('·', Color::DarkGrey),
        Cell::SnakeHead => ('@', Color::DarkGreen),
        Cell::SnakeBody => ('o', Color::Green),
        Cell::Food => ('*', Color::Red),
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn draw_cell(&mut self, pos: Position, cell: Cell) -> io::Result<()> {
        let (glyph, color) = cell_glyph(cell);
        queue!(
            self.out,
            MoveTo(pos.x, pos.y),
            SetForegroundColor(color),
            Print(glyph)
        )
    }

    fn draw_text(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()> {
        let color = match style {
            TextStyle::Hud | TextStyle::Prompt => Color::White,
            TextStyle::Title => Color::Red,
        };
        queue!(self.out, MoveTo(col, row), SetForegroundColor(color))?;
        if style == TextStyle::Title {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset))
    }

    fn present(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Quit),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => {
            InputEvent::Direction(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            InputEvent::Direction(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            InputEvent::Direction(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            InputEvent::Direction(Direction::Right)
        }
        KeyCode::Char(' ') | KeyCode::Enter => InputEvent::Restart,
        KeyCode::Char('q') | KeyCode::Esc => InputEvent::Quit,
        _ => return None,
    };
    Some(event)
}

/// Keyboard events from the controlling terminal.
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                events.extend(map_key(key));
            }
        }
        Ok(events)
    }
}
