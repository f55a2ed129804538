//! Plain-text rendering backend.
use std::collections::BTreeMap;
use std::fmt::Write;

use game_core::{EntityState, Position, Side, TerrainKind};
use runtime::{CellShade, EntitySprite, Surface};

/// Renders each frame into a character grid, one character per cell.
///
/// ```text
/// . empty   # obstacle   " decoration   * in range
/// A/E idle ally/enemy, lowercase while walking, ! while attacking
/// ```
#[derive(Debug, Default)]
pub struct TextSurface {
    cells: BTreeMap<(i32, i32), char>,
    banner: Option<String>,
    frame: String,
    presented: u64,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the last presented frame.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    fn glyph(sprite: &EntitySprite<'_>) -> char {
        let base = match sprite.side {
            Side::Ally => 'A',
            Side::Enemy => 'E',
        };
        match sprite.state {
            EntityState::Attack => '!',
            EntityState::Walk => base.to_ascii_lowercase(),
            EntityState::Idle => base,
        }
    }
}

impl Surface for TextSurface {
    fn clear(&mut self) {
        self.cells.clear();
        self.banner = None;
    }

    fn draw_cell(&mut self, position: Position, terrain: TerrainKind, shade: CellShade) {
        let glyph = match (terrain, shade) {
            (TerrainKind::Obstacle, _) => '#',
            (_, CellShade::InRange) => '*',
            (_, CellShade::Active) => '+',
            (TerrainKind::Decoration, _) => '"',
            (TerrainKind::Empty, _) => '.',
        };
        self.cells.insert((position.y, position.x), glyph);
    }

    fn draw_entity(&mut self, sprite: &EntitySprite<'_>) {
        let key = (sprite.position.y, sprite.position.x);
        self.cells.insert(key, Self::glyph(sprite));
    }

    fn draw_banner(&mut self, text: &str) {
        self.banner = Some(text.to_string());
    }

    fn present(&mut self) {
        self.frame.clear();
        if let Some(banner) = &self.banner {
            self.frame.push_str(banner);
            self.frame.push('\n');
        }
        let mut row = None;
        for (&(y, _), glyph) in &self.cells {
            if row.is_some_and(|current| current != y) {
                self.frame.push('\n');
            }
            row = Some(y);
            self.frame.push(*glyph);
        }
        if row.is_some() {
            let _ = writeln!(self.frame);
        }
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_rows_top_to_bottom() {
        let mut surface = TextSurface::new();
        surface.clear();
        for y in 0..2 {
            for x in 0..3 {
                let terrain = if (x, y) == (1, 0) {
                    TerrainKind::Obstacle
                } else {
                    TerrainKind::Empty
                };
                let shade = if (x, y) == (2, 1) {
                    CellShade::InRange
                } else {
                    CellShade::Plain
                };
                surface.draw_cell(Position::new(x, y), terrain, shade);
            }
        }
        surface.present();
        assert_eq!(surface.frame(), ".#.\n..*\n");
        assert_eq!(surface.presented(), 1);
    }

    #[test]
    fn banner_replaces_the_previous_frame() {
        let mut surface = TextSurface::new();
        surface.draw_cell(Position::new(0, 0), TerrainKind::Empty, CellShade::Plain);
        surface.present();

        surface.clear();
        surface.draw_banner("Level 2");
        surface.present();
        assert_eq!(surface.frame(), "Level 2\n");
    }
}
