//! Render boundary.
//!
//! Screens describe what to draw through [`Surface`]; backends decide how.
use game_core::{DisplayPosition, Entity, EntityId, EntityState, Position, Side, TerrainKind};

/// Emphasis applied to a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellShade {
    Plain,
    /// Inside the active entity's movement range.
    InRange,
    /// Occupied by the entity whose range is shown.
    Active,
}

/// Everything a backend needs to draw one entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntitySprite<'a> {
    pub id: EntityId,
    pub name: &'a str,
    pub side: Side,
    pub position: Position,
    pub display: DisplayPosition,
    pub state: EntityState,
    pub frame: u8,
    pub health_ratio: f32,
    pub active: bool,
}

impl<'a> EntitySprite<'a> {
    pub fn new(entity: &'a Entity, active: bool) -> Self {
        Self {
            id: entity.id,
            name: &entity.name,
            side: entity.side,
            position: entity.position,
            display: entity.display,
            state: entity.state,
            frame: entity.animation.frame,
            health_ratio: entity.health_ratio(),
            active,
        }
    }
}

/// Drawing target for one frame.
pub trait Surface {
    fn clear(&mut self);

    fn draw_cell(&mut self, position: Position, terrain: TerrainKind, shade: CellShade);

    fn draw_entity(&mut self, sprite: &EntitySprite<'_>);

    /// Full-screen text such as menu prompts and level banners.
    fn draw_banner(&mut self, text: &str);

    fn present(&mut self);
}
