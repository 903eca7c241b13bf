use crate::cell::{CellState, Family, Rule};

/// A cell following Fredkin's parity rule.
///
/// Only the four orthogonal neighbours matter: an odd number of live ones
/// flips the cell, an even number leaves it as it is. A cell that is alive
/// after a step is one generation older than before; a dead cell has age 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FredkinCell {
    alive: bool,
    age: u32,
}

impl FredkinCell {
    pub fn new(age: u32, alive: bool) -> Self {
        let age = if alive { age } else { 0 };
        Self { alive, age }
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Rule for FredkinCell {
    const FAMILY: Family = Family::Fredkin;

    fn from_alive(alive: bool) -> Self {
        Self::new(0, alive)
    }

    fn evolve(&self, neighbours: &[Self; 8]) -> Self {
        let orthogonal = neighbours[..4].iter().filter(|c| c.alive).count();
        let alive = self.alive ^ (orthogonal % 2 == 1);
        Self::new(self.age.saturating_add(1), alive)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn into_state(self) -> CellState {
        CellState::Fredkin(self)
    }

    fn from_state(state: CellState) -> Option<Self> {
        match state {
            CellState::Fredkin(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orthogonal(n: usize) -> [FredkinCell; 8] {
        std::array::from_fn(|i| FredkinCell::from_alive(i < n))
    }

    #[test]
    fn test_construct() {
        assert_eq!(FredkinCell::parse('*'), Ok(FredkinCell::new(0, true)));
        assert_eq!(FredkinCell::parse('.'), Ok(FredkinCell::new(0, false)));
        assert_eq!(FredkinCell::new(7, true).age(), 7);
        // Dead cells carry no age.
        assert_eq!(FredkinCell::new(7, false).age(), 0);
    }

    #[test]
    fn test_even_keeps_and_ages() {
        let mut cell = FredkinCell::new(0, true);
        for age in 1..=5 {
            cell = cell.evolve(&orthogonal(0));
            assert!(cell.is_alive());
            assert_eq!(cell.age(), age);
        }
        let cell = cell.evolve(&orthogonal(2));
        assert_eq!(cell, FredkinCell::new(6, true));
        let cell = cell.evolve(&orthogonal(4));
        assert_eq!(cell, FredkinCell::new(7, true));
    }

    #[test]
    fn test_odd_flips() {
        let dead = FredkinCell::dead();
        assert_eq!(dead.evolve(&orthogonal(1)), FredkinCell::new(1, true));
        assert_eq!(dead.evolve(&orthogonal(3)), FredkinCell::new(1, true));
        let old = FredkinCell::new(9, true);
        assert_eq!(old.evolve(&orthogonal(1)), FredkinCell::dead());
        assert_eq!(old.evolve(&orthogonal(3)), FredkinCell::dead());
    }

    #[test]
    fn test_dead_stays_dead_on_even() {
        let dead = FredkinCell::dead();
        assert_eq!(dead.evolve(&orthogonal(0)), dead);
        assert_eq!(dead.evolve(&orthogonal(2)), dead);
    }

    #[test]
    fn test_diagonals_ignored() {
        let mut neighbours = [FredkinCell::dead(); 8];
        for n in &mut neighbours[4..] {
            *n = FredkinCell::from_alive(true);
        }
        assert_eq!(FredkinCell::dead().evolve(&neighbours), FredkinCell::dead());
        neighbours[4] = FredkinCell::dead();
        assert_eq!(FredkinCell::dead().evolve(&neighbours), FredkinCell::dead());
    }
}
