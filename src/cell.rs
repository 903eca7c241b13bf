use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use crate::{
    conway::ConwayCell,
    error::{LifeError, Result},
    fredkin::FredkinCell,
};

pub const ALIVE: char = '*';
pub const DEAD: char = '.';

/// The evolution contract shared by every rule family.
///
/// Neighbours are always passed as
/// `[up, right, down, left, top-right, bottom-right, bottom-left, top-left]`,
/// so the first four entries are the orthogonal neighbours.
pub trait Rule: Copy {
    const FAMILY: Family;

    fn from_alive(alive: bool) -> Self;

    fn evolve(&self, neighbours: &[Self; 8]) -> Self;

    fn is_alive(&self) -> bool;

    fn into_state(self) -> CellState;

    fn from_state(state: CellState) -> Option<Self>;

    fn dead() -> Self {
        Self::from_alive(false)
    }

    fn parse(c: char) -> Result<Self> {
        match c {
            ALIVE => Ok(Self::from_alive(true)),
            DEAD => Ok(Self::from_alive(false)),
            _ => Err(LifeError::InvalidInputCharacter(c)),
        }
    }

    fn render(&self) -> char {
        if self.is_alive() { ALIVE } else { DEAD }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Conway,
    Fredkin,
}

impl Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Conway => f.write_str("Conway"),
            Family::Fredkin => f.write_str("Fredkin"),
        }
    }
}

impl FromStr for Family {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "conway" => Ok(Family::Conway),
            "fredkin" => Ok(Family::Fredkin),
            _ => Err(LifeError::UnknownFamily(s.to_string())),
        }
    }
}

/// The state of one cell, tagged with its rule family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Conway(ConwayCell),
    Fredkin(FredkinCell),
}

impl CellState {
    pub fn dead(family: Family) -> Self {
        match family {
            Family::Conway => ConwayCell::dead().into_state(),
            Family::Fredkin => FredkinCell::dead().into_state(),
        }
    }

    pub fn parse(family: Family, c: char) -> Result<Self> {
        match family {
            Family::Conway => ConwayCell::parse(c).map(Rule::into_state),
            Family::Fredkin => FredkinCell::parse(c).map(Rule::into_state),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            CellState::Conway(_) => Family::Conway,
            CellState::Fredkin(_) => Family::Fredkin,
        }
    }

    pub fn is_alive(&self) -> bool {
        match self {
            CellState::Conway(c) => c.is_alive(),
            CellState::Fredkin(c) => c.is_alive(),
        }
    }

    pub fn render(&self) -> char {
        match self {
            CellState::Conway(c) => c.render(),
            CellState::Fredkin(c) => c.render(),
        }
    }

    fn evolve(&self, neighbours: &[Cell; 8]) -> Result<Self> {
        match self {
            CellState::Conway(c) => evolve_as(c, neighbours),
            CellState::Fredkin(c) => evolve_as(c, neighbours),
        }
    }
}

fn evolve_as<R: Rule>(cell: &R, neighbours: &[Cell; 8]) -> Result<CellState> {
    let mut same = [R::dead(); 8];
    for (slot, neighbour) in same.iter_mut().zip(neighbours) {
        *slot = R::from_state(neighbour.state).ok_or(LifeError::MixedFamilyNeighbors {
            expected: R::FAMILY,
            found: neighbour.family(),
        })?;
    }
    Ok(cell.evolve(&same).into_state())
}

impl From<ConwayCell> for CellState {
    fn from(cell: ConwayCell) -> Self {
        cell.into_state()
    }
}

impl From<FredkinCell> for CellState {
    fn from(cell: FredkinCell) -> Self {
        cell.into_state()
    }
}

/// One slot of a board: a rule state plus whether the slot is on the border
/// frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    state: CellState,
    border: bool,
}

impl Cell {
    /// An interior cell.
    pub fn new(state: impl Into<CellState>) -> Self {
        Self {
            state: state.into(),
            border: false,
        }
    }

    /// A border cell. Always dead.
    pub fn border(family: Family) -> Self {
        Self {
            state: CellState::dead(family),
            border: true,
        }
    }

    pub fn parse(family: Family, c: char) -> Result<Self> {
        CellState::parse(family, c).map(Self::new)
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn family(&self) -> Family {
        self.state.family()
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub fn is_border(&self) -> bool {
        self.border
    }

    pub fn render(&self) -> char {
        self.state.render()
    }

    /// Computes this cell's next generation.
    ///
    /// Border cells never change and return themselves without looking at
    /// `neighbours`, so they never report `MixedFamilyNeighbors`.
    pub fn evolve(&self, neighbours: &[Cell; 8]) -> Result<Cell> {
        if self.border {
            return Ok(*self);
        }
        self.state.evolve(neighbours).map(Self::new)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_families() {
        let conway = Cell::parse(Family::Conway, '*').unwrap();
        assert_eq!(conway.family(), Family::Conway);
        assert!(conway.is_alive());
        assert!(!conway.is_border());

        let fredkin = Cell::parse(Family::Fredkin, '.').unwrap();
        assert_eq!(fredkin.family(), Family::Fredkin);
        assert!(!fredkin.is_alive());
        assert_eq!(fredkin.to_string(), ".");
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        assert_eq!(
            Cell::parse(Family::Conway, 'x'),
            Err(LifeError::InvalidInputCharacter('x'))
        );
        assert_eq!(
            Cell::parse(Family::Fredkin, 'o'),
            Err(LifeError::InvalidInputCharacter('o'))
        );
    }

    #[test]
    fn test_border_is_dead_and_fixed() {
        let border = Cell::border(Family::Conway);
        assert!(border.is_border());
        assert!(!border.is_alive());
        let alive = Cell::parse(Family::Conway, '*').unwrap();
        assert_eq!(border.evolve(&[alive; 8]), Ok(border));
    }

    #[test]
    fn test_border_ignores_neighbour_family() {
        let border = Cell::border(Family::Fredkin);
        let conway = Cell::parse(Family::Conway, '*').unwrap();
        assert_eq!(border.evolve(&[conway; 8]), Ok(border));
    }

    #[test]
    fn test_mixed_family_neighbours() {
        let cell = Cell::parse(Family::Conway, '*').unwrap();
        let mut neighbours = [Cell::border(Family::Conway); 8];
        neighbours[5] = Cell::border(Family::Fredkin);
        assert_eq!(
            cell.evolve(&neighbours),
            Err(LifeError::MixedFamilyNeighbors {
                expected: Family::Conway,
                found: Family::Fredkin,
            })
        );
    }

    #[test]
    fn test_copies_are_independent() {
        let a = Cell::new(FredkinCell::new(3, true));
        let b = a.evolve(&[Cell::border(Family::Fredkin); 8]).unwrap();
        assert_eq!(a.state(), CellState::Fredkin(FredkinCell::new(3, true)));
        assert_eq!(b.state(), CellState::Fredkin(FredkinCell::new(4, true)));
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("Fredkin".parse::<Family>(), Ok(Family::Fredkin));
        assert_eq!("conway".parse::<Family>(), Ok(Family::Conway));
        assert_eq!(
            "hashlife".parse::<Family>(),
            Err(LifeError::UnknownFamily("hashlife".to_string()))
        );
    }
}
