use super::{EntityId, Side};

/// Turn order for one side.
///
/// Members are sorted once by speed, fastest first, and keep that order for
/// the rest of the level. The cursor names the next member to act and stays
/// within `0..=len`; `len` means the side has finished the current round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    side: Side,
    members: Vec<EntityId>,
    cursor: usize,
}

impl Group {
    /// Creates a group from `(id, speed)` pairs in spawn order.
    ///
    /// The sort is stable, so equal speeds keep spawn order.
    pub fn new(side: Side, members: impl IntoIterator<Item = (EntityId, i32)>) -> Self {
        let mut members: Vec<(EntityId, i32)> = members.into_iter().collect();
        members.sort_by(|a, b| b.1.cmp(&a.1));
        Self {
            side,
            members: members.into_iter().map(|(id, _)| id).collect(),
            cursor: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn members(&self) -> &[EntityId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Member due to act next, or `None` once the round is exhausted.
    pub fn active(&self) -> Option<EntityId> {
        self.members.get(self.cursor).copied()
    }

    /// Marks the current member as having taken its turn.
    pub fn consume(&mut self) {
        if self.cursor < self.members.len() {
            self.cursor += 1;
        }
    }

    /// Starts a new round.
    pub fn next_round(&mut self) {
        self.cursor = 0;
    }

    /// Removes a dead member and keeps the cursor on the next one to act.
    ///
    /// The cursor steps back when the removed index lies before it, and also
    /// whenever the cursor sits at or past the last valid index (measured
    /// before removal). The step saturates at zero.
    pub fn remove(&mut self, id: EntityId) -> bool {
        let Some(index) = self.members.iter().position(|&member| member == id) else {
            return false;
        };
        let last_valid = self.members.len() - 1;
        if self.cursor > index || self.cursor >= last_valid {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.members.remove(index);
        true
    }
}
