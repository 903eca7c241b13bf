mod board;
mod cell;
mod conway;
mod error;
mod fredkin;


use std::fmt::{Display, Write};

use log::debug;

pub use crate::{
    board::{Board, Interior},
    cell::{ALIVE, Cell, CellState, DEAD, Family, Rule},
    conway::ConwayCell,
    error::{LifeError, Result},
    fredkin::FredkinCell,
};

/// A board together with its generation counter and live population.
#[derive(Clone, Debug)]
pub struct Life {
    board: Board,
    generation: usize,
    population: usize,
    snapshot: Vec<Cell>,
}

impl Life {
    pub fn new(board: Board) -> Self {
        let population = board.population();
        Self {
            board,
            generation: 0,
            population,
            snapshot: Vec::new(),
        }
    }

    pub fn parse(family: Family, text: &str) -> Result<Self> {
        Board::parse(family, text).map(Self::new)
    }

    /// Advances every interior cell by one generation at once.
    pub fn step(&mut self) {
        if let Err(err) = self.board.advance(&mut self.snapshot) {
            // A board only ever holds cells of its own family.
            panic!("generation {} failed: {err}", self.generation + 1);
        }
        self.population = self.board.population();
        self.generation += 1;
        debug!(
            "generation {} population {}",
            self.generation, self.population
        );
    }

    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Display for Life {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Generation = {}, Population = {}.",
            self.generation, self.population
        )?;
        self.board.fmt(f)?;
        f.write_char('\n')
    }
}
