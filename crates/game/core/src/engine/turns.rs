use crate::state::{EntityId, Side};

use super::Battlefield;

/// Turn rotation across the two side groups.
impl Battlefield {
    /// Entity due to act next without consuming its turn.
    ///
    /// The faster of the two groups' cursor entities goes first; ties go to
    /// the ally group. `None` means the round is over.
    pub fn next_actor(&self) -> Option<EntityId> {
        let ally = self.group(Side::Ally).active();
        let enemy = self.group(Side::Enemy).active();
        match (ally, enemy) {
            (Some(ally), Some(enemy)) => {
                let speed = |id| self.entity(id).map_or(i32::MIN, |e| e.attributes.speed);
                if speed(enemy) > speed(ally) {
                    Some(enemy)
                } else {
                    Some(ally)
                }
            }
            (ally, enemy) => ally.or(enemy),
        }
    }

    /// Picks the next actor and advances its group cursor.
    pub fn activate_next(&mut self) -> Option<EntityId> {
        let id = self.next_actor()?;
        let side = self.entity(id)?.side;
        self.groups[side.index()].consume();
        Some(id)
    }

    /// True when neither group has a member left to act this round.
    pub fn round_exhausted(&self) -> bool {
        self.next_actor().is_none()
    }

    /// Resets both group cursors for a new round.
    pub fn next_round(&mut self) {
        for group in &mut self.groups {
            group.next_round();
        }
    }
}
