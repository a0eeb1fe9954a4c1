//! Static table of implemented days

use crate::days::{self, DayAnswers};
use crate::error::AocError;

type SolveFn = fn(&str) -> Result<DayAnswers, AocError>;

pub struct Day {
    pub number: u8,
    pub title: &'static str,
    pub solve: SolveFn,
}

pub const DAYS: &[Day] = &[
    Day {
        number: 1,
        title: "Safe Cracking",
        solve: days::day01::solve,
    },
    Day {
        number: 2,
        title: "Gift Shop",
        solve: days::day02::solve,
    },
    Day {
        number: 3,
        title: "Battery Banks",
        solve: days::day03::solve,
    },
    Day {
        number: 4,
        title: "Printing Department",
        solve: days::day04::solve,
    },
    Day {
        number: 5,
        title: "Fresh Ingredients",
        solve: days::day05::solve,
    },
    Day {
        number: 6,
        title: "Math Worksheets",
        solve: days::day06::solve,
    },
    Day {
        number: 7,
        title: "Beam Manifold",
        solve: days::day07::solve,
    },
    Day {
        number: 8,
        title: "Junction Circuits",
        solve: days::day08::solve,
    },
    Day {
        number: 9,
        title: "Tile Rectangles",
        solve: days::day09::solve,
    },
    Day {
        number: 10,
        title: "Indicator Machines",
        solve: days::day10::solve,
    },
    Day {
        number: 11,
        title: "Reactor",
        solve: days::day11::solve,
    },
    Day {
        number: 12,
        title: "Shape Fitting",
        solve: days::day12::solve,
    },
];

/// Look up a day by number
pub fn find(number: u8) -> Option<&'static Day> {
    DAYS.iter().find(|day| day.number == number)
}
