use crate::cell::{CellState, Family, Rule};

/// A cell following the classic B3/S23 rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConwayCell {
    alive: bool,
}

impl ConwayCell {
    pub fn new(alive: bool) -> Self {
        Self { alive }
    }
}

impl Rule for ConwayCell {
    const FAMILY: Family = Family::Conway;

    fn from_alive(alive: bool) -> Self {
        Self::new(alive)
    }

    fn evolve(&self, neighbours: &[Self; 8]) -> Self {
        let count = neighbours.iter().filter(|c| c.alive).count();
        match (self.alive, count) {
            (true, 2 | 3) | (false, 3) => Self::new(true),
            _ => Self::new(false),
        }
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn into_state(self) -> CellState {
        CellState::Conway(self)
    }

    fn from_state(state: CellState) -> Option<Self> {
        match state {
            CellState::Conway(c) => Some(c),
            _ => None,
        }
    }
}
