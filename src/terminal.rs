use crate::fire::{PixelCanvas, Rgba};
use crate::fire::palette::to_terminal;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{poll, read, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::fmt::Write as _;
use std::io::{self, stdout, Write};
use std::time::Duration;

/// Upper half block: foreground paints the top pixel, background the bottom
pub const HALF_BLOCK: char = '▀';

/// Terminal abstraction with a back buffer
pub struct Terminal {
    width: u16,
    height: u16,
    buffer: Vec<Vec<Cell>>,
    front: Vec<Vec<Cell>>,
    alternate_screen: bool,
    needs_full_redraw: bool,
}

/// A single cell in the terminal buffer
#[derive(Clone, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg: None,
        }
    }
}

impl Terminal {
    /// Initialize the terminal for drawing
    pub fn new(alternate_screen: bool) -> io::Result<Self> {
        let (width, height) = size()?;

        if alternate_screen {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
        }

        Ok(Self::with_size(width, height, alternate_screen))
    }

    /// Buffer-only terminal of a fixed size (print mode)
    pub fn headless(width: u16, height: u16) -> Self {
        Self::with_size(width, height, false)
    }

    fn with_size(width: u16, height: u16, alternate_screen: bool) -> Self {
        let buffer = vec![vec![Cell::default(); width as usize]; height as usize];
        Self {
            width,
            height,
            front: buffer.clone(),
            buffer,
            alternate_screen,
            needs_full_redraw: true,
        }
    }

    /// Get terminal dimensions
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Surface size in pixels: one column wide, half a row tall
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize * 2)
    }

    /// Reallocate buffers for a new size
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.buffer = vec![vec![Cell::default(); width as usize]; height as usize];
        self.front = self.buffer.clone();
        self.needs_full_redraw = true;
    }

    /// Clear the buffer
    pub fn clear(&mut self) {
        for row in &mut self.buffer {
            for cell in row {
                *cell = Cell::default();
            }
        }
    }

    /// Clear the actual terminal
    pub fn clear_screen(&mut self) -> io::Result<()> {
        execute!(stdout(), ResetColor, Clear(ClearType::All))?;
        self.needs_full_redraw = true;
        Ok(())
    }

    /// Set a character at position with optional colors
    pub fn set(&mut self, x: i32, y: i32, ch: char, fg: Option<Color>, bg: Option<Color>) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            self.buffer[y as usize][x as usize] = Cell { ch, fg, bg };
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.get(y as usize)?.get(x as usize)
    }

    /// Copy a pixel canvas into the buffer, two pixel rows per terminal row.
    /// Empty pixels take `background`.
    pub fn blit(&mut self, canvas: &PixelCanvas, background: Rgba) {
        let to_color = |px: Option<Rgba>| to_terminal(px.unwrap_or(background), background);
        for y in 0..self.height {
            for x in 0..self.width {
                let top = canvas.get(x as usize, y as usize * 2);
                let bottom = canvas.get(x as usize, y as usize * 2 + 1);
                self.set(x as i32, y as i32, HALF_BLOCK, Some(to_color(top)), Some(to_color(bottom)));
            }
        }
    }

    /// Write cells that changed since the last present
    pub fn present(&mut self) -> io::Result<()> {
        let mut out = stdout();
        let mut last_fg = None;
        let mut last_bg = None;

        for (y, (row, front_row)) in self.buffer.iter().zip(self.front.iter_mut()).enumerate() {
            for (x, (cell, shown)) in row.iter().zip(front_row.iter_mut()).enumerate() {
                if !self.needs_full_redraw && cell == shown {
                    continue;
                }
                queue!(out, MoveTo(x as u16, y as u16))?;
                if cell.fg != last_fg {
                    queue!(out, SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(out, SetBackgroundColor(cell.bg.unwrap_or(Color::Reset)))?;
                    last_bg = cell.bg;
                }
                queue!(out, Print(cell.ch))?;
                *shown = cell.clone();
            }
        }

        queue!(out, ResetColor)?;
        out.flush()?;
        self.needs_full_redraw = false;
        Ok(())
    }

    /// Check for keypress (non-blocking), returns (code, modifiers)
    pub fn check_key(&self) -> io::Result<Option<(KeyCode, KeyModifiers)>> {
        if poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(Some((key_event.code, key_event.modifiers)));
                }
            }
        }
        Ok(None)
    }

    /// Sleep for specified duration
    pub fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    /// Buffer as ANSI text (for print mode)
    pub fn to_ansi(&self) -> String {
        let mut s = String::new();
        for row in &self.buffer {
            for cell in row {
                if let Some(Color::Rgb { r, g, b }) = cell.fg {
                    let _ = write!(s, "\x1b[38;2;{};{};{}m", r, g, b);
                }
                if let Some(Color::Rgb { r, g, b }) = cell.bg {
                    let _ = write!(s, "\x1b[48;2;{};{};{}m", r, g, b);
                }
                s.push(cell.ch);
            }
            s.push_str("\x1b[0m\n");
        }
        s
    }

    /// Print buffer to stdout with ANSI colors
    pub fn print_to_stdout(&self) -> io::Result<()> {
        let mut out = stdout();
        out.write_all(self.to_ansi().as_bytes())?;
        out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.alternate_screen {
            let _ = execute!(stdout(), ResetColor, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
    }
}
