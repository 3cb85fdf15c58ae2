use std::io::{self, Stdout, Write, stdout};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use tracing::{debug, warn};

/// A character-cell surface the game paints onto.
///
/// Drawing only touches a back buffer; nothing reaches the screen until
/// `present`. Cells outside the viewport are silently clipped.
pub trait Canvas {
    /// Blanks the back buffer.
    fn clear(&mut self);

    fn draw_cell(&mut self, row: i32, col: i32, glyph: char);

    fn draw_text(&mut self, row: i32, col: i32, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.draw_cell(row, col + i as i32, ch);
        }
    }

    /// Makes the back buffer visible.
    fn present(&mut self) -> io::Result<()>;

    /// Viewport size as `(width, height)` in cells.
    fn viewport(&self) -> (u16, u16);
}

/// A grid of characters, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Frame { width, height, cells: vec![' '; width as usize * height as usize] }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Contents of one row, or `None` below the last row.
    pub fn row_text(&self, row: u16) -> Option<String> {
        if row >= self.height {
            return None;
        }
        let start = row as usize * self.width as usize;
        Some(self.cells[start..start + self.width as usize].iter().collect())
    }

    /// Whether any row contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|row| self.row_text(row).is_some_and(|text| text.contains(needle)))
    }

    /// Cells of `self` that differ from `previous`, as `(row, col, glyph)`.
    /// Both frames must be the same size.
    pub fn diff<'a>(&'a self, previous: &'a Frame) -> impl Iterator<Item = (u16, u16, char)> + 'a {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(previous.cells.iter())
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (now, _))| ((i / width) as u16, (i % width) as u16, *now))
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }
}

impl Canvas for Frame {
    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = ' ');
    }

    fn draw_cell(&mut self, row: i32, col: i32, glyph: char) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = glyph;
        }
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn viewport(&self) -> (u16, u16) {
        self.size()
    }
}

/// Owns the terminal for as long as it lives: alternate screen, raw mode and
/// a hidden cursor are set up on creation and undone on drop.
pub struct TermManager {
    stdout: Stdout,
    front: Frame,
    back: Frame,
    active: bool,
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut term = TermManager {
            stdout: stdout(),
            front: Frame::new(width, height),
            back: Frame::new(width, height),
            active: true,
        };
        term.setup()?;
        debug!(width, height, "terminal ready");
        Ok(term)
    }

    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = terminal::disable_raw_mode();
        let screen = execute!(
            self.stdout,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        );
        raw.and(screen)
    }

    fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )
    }
}

impl Canvas for TermManager {
    fn clear(&mut self) {
        match terminal::size() {
            Ok(size) if size != self.back.size() => {
                debug!(width = size.0, height = size.1, "viewport resized");
                self.back = Frame::new(size.0, size.1);
            }
            Ok(_) => self.back.clear(),
            Err(e) => {
                warn!(error = %e, "could not measure terminal, keeping previous size");
                self.back.clear();
            }
        }
    }

    fn draw_cell(&mut self, row: i32, col: i32, glyph: char) {
        self.back.draw_cell(row, col, glyph);
    }

    fn present(&mut self) -> io::Result<()> {
        if self.front.size() != self.back.size() {
            // Whatever was on screen before the resize is unknown, start over.
            queue!(self.stdout, terminal::Clear(ClearType::All))?;
            let (width, height) = self.back.size();
            self.front = Frame::new(width, height);
        }

        for (row, col, glyph) in self.back.diff(&self.front) {
            queue!(self.stdout, cursor::MoveTo(col, row), style::Print(glyph))?;
        }
        self.stdout.flush()?;

        self.front.clone_from(&self.back);
        Ok(())
    }

    fn viewport(&self) -> (u16, u16) {
        self.back.size()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}
