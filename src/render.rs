use std::collections::VecDeque;
use std::io;

use crate::game::GameState;
use crate::grid::{GridSize, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Hud,
    Title,
    Prompt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub detail: String,
    pub prompt: String,
}

impl Overlay {
    pub fn game_over(score: u32) -> Self {
        Self {
            title: "GAME OVER!".to_string(),
            detail: format!("Final score: {}", score),
            prompt: "Press SPACE to restart".to_string(),
        }
    }
}

/// Everything needed to draw one tick.
#[derive(Debug)]
pub struct Frame<'a> {
    pub grid: GridSize,
    pub snake: &'a VecDeque<Position>,
    pub food: Position,
    pub score: u32,
    pub state: GameState,
    pub overlay: Option<Overlay>,
}

/// Drawing primitives in grid units: cells are addressed by board position, text by
/// row and column of the same lattice.
pub trait Canvas {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_cell(&mut self, pos: Position, cell: Cell) -> io::Result<()>;
    fn draw_text(&mut self, row: u16, col: u16, text: &str, style: TextStyle) -> io::Result<()>;
    fn present(&mut self) -> io::Result<()>;
}

pub trait RenderSink {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

pub struct CanvasRenderer<C> {
    canvas: C,
}

impl<C: Canvas> CanvasRenderer<C> {
    pub fn new(canvas: C) -> Self {
        Self { canvas }
    }

    #[cfg(test)]
    pub(crate) fn canvas(&self) -> &C {
        &self.canvas
    }

    fn draw_board(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        for pos in frame.grid.cells() {
            self.canvas.draw_cell(pos, Cell::Empty)?;
        }
        self.canvas.draw_cell(frame.food, Cell::Food)?;

        // Tail first so the head ends up on top of any overlapping segment.
        for (index, pos) in frame.snake.iter().enumerate().rev() {
            let cell = if index == 0 { Cell::SnakeHead } else { Cell::SnakeBody };
            self.canvas.draw_cell(*pos, cell)?;
        }
        Ok(())
    }

    fn draw_overlay(&mut self, grid: GridSize, overlay: &Overlay) -> io::Result<()> {
        let middle = grid.height / 2;
        let lines = [
            (middle.saturating_sub(1), overlay.title.as_str(), TextStyle::Title),
            (middle, overlay.detail.as_str(), TextStyle::Prompt),
            (middle.saturating_add(1), overlay.prompt.as_str(), TextStyle::Prompt),
        ];
        for (row, text, style) in lines {
            let col = centered_column(grid.width, text);
            self.canvas.draw_text(row, col, text, style)?;
        }
        Ok(())
    }
}

impl<C: Canvas> RenderSink for CanvasRenderer<C> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.canvas.clear()?;
        self.draw_board(frame)?;
        self.canvas
            .draw_text(frame.grid.height, 0, &format!("Score: {}", frame.score), TextStyle::Hud)?;
        if frame.state == GameState::GameOver {
            if let Some(overlay) = &frame.overlay {
                self.draw_overlay(frame.grid, overlay)?;
            }
        }
        self.canvas.present()
    }
}

fn centered_column(width: u16, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    width.saturating_sub(len) / 2
}
