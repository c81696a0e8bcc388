//! Console collaborators: a passive render surface and a status display.
//!
//! These are the terminal stand-ins for a 3D scene. The render sink keeps a
//! glyph grid mirroring the placed pieces; the status sink writes the turn
//! and outcome lines.

use crate::game::Mark;
use crate::picking::Vec3;
use crate::session::{RenderSink, StatusSink};
use tracing::debug;

/// Render sink that mirrors placed marks into a printable glyph grid.
#[derive(Debug, Clone, Default)]
pub struct ConsoleRender {
    glyphs: [Option<Mark>; 9],
}

impl ConsoleRender {
    /// Creates an empty render surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current glyph grid as a printable block.
    pub fn grid(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let glyph = match self.glyphs[row * 3 + col] {
                    None => ".",
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                };
                result.push_str(glyph);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl RenderSink for ConsoleRender {
    fn place_mark(&mut self, index: usize, mark: Mark, position: Vec3) {
        debug!(index, %mark, ?position, "placing mark");
        self.glyphs[index] = Some(mark);
        println!("{}", self.grid());
    }

    fn clear_marks(&mut self) {
        debug!("clearing placed marks");
        self.glyphs = [None; 9];
    }
}

/// Status sink that prints each line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn show_status(&mut self, text: &str) {
        println!("{text}");
    }
}
