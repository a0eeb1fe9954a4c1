//! Day 7: Beam Manifold
//!
//! A beam enters at `S` on the top row and travels straight down. A
//! splitter `^` stops it and spawns beams one column left and right.
//! Part 1 counts splitters that ever fire; part 2 counts the timelines
//! (distinct beam histories) leaving the bottom of the manifold.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

struct Manifold {
    grid: Vec<Vec<u8>>,
    start_col: usize,
}

fn parse(data: &str) -> Result<Manifold, AocError> {
    let grid: Vec<Vec<u8>> = input::lines(data)
        .iter()
        .map(|line| line.bytes().collect())
        .collect();
    let start_col = grid
        .first()
        .and_then(|row| row.iter().position(|&c| c == b'S'))
        .ok_or_else(|| AocError::parse("no start 'S' on the top row"))?;
    Ok(Manifold { grid, start_col })
}

impl Manifold {
    fn rows(&self) -> usize {
        self.grid.len()
    }

    fn cols(&self) -> usize {
        self.grid.first().map(Vec::len).unwrap_or(0)
    }

    fn cell(&self, row: usize, col: usize) -> u8 {
        self.grid[row].get(col).copied().unwrap_or(b'.')
    }

    /// Part 1: follow every beam, counting each splitter the first time
    /// it fires
    fn fired_splitters(&self) -> usize {
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        queue.push_back((0, self.start_col));
        let mut seen_beams: HashSet<(usize, usize)> = HashSet::new();
        let mut fired: HashSet<(usize, usize)> = HashSet::new();

        while let Some((start_row, col)) = queue.pop_front() {
            if !seen_beams.insert((start_row, col)) {
                continue;
            }
            for row in start_row..self.rows() {
                if self.cell(row, col) == b'^' {
                    fired.insert((row, col));
                    if col > 0 {
                        queue.push_back((row + 1, col - 1));
                    }
                    if col + 1 < self.cols() {
                        queue.push_back((row + 1, col + 1));
                    }
                    break;
                }
            }
        }
        fired.len()
    }

    /// Part 2: count timelines row by row; a splitter doubles the
    /// timelines passing through it
    fn timelines(&self) -> u128 {
        let mut current: HashMap<usize, u128> = HashMap::new();
        current.insert(self.start_col, 1);

        for row in 0..self.rows() {
            let mut next: HashMap<usize, u128> = HashMap::new();
            for (&col, &count) in &current {
                if self.cell(row, col) == b'^' {
                    if col > 0 {
                        *next.entry(col - 1).or_insert(0) += count;
                    }
                    if col + 1 < self.cols() {
                        *next.entry(col + 1).or_insert(0) += count;
                    }
                } else {
                    *next.entry(col).or_insert(0) += count;
                }
            }
            current = next;
        }

        current.values().sum()
    }
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let manifold = parse(data)?;
    Ok(DayAnswers::both(
        manifold.fired_splitters(),
        manifold.timelines(),
    ))
}
