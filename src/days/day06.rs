//! Day 6: Math Worksheets
//!
//! Problems are laid out in columns: number rows stacked above a `+` or
//! `*` row, with all-blank columns separating problems. Part 1 reads
//! the numbers row-wise. Part 2 re-reads each problem right to left,
//! one number per column.

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, numbers: &[u64]) -> u64 {
        match self {
            Op::Add => numbers.iter().sum(),
            Op::Mul => numbers.iter().product(),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Add),
            '*' => Some(Op::Mul),
            _ => None,
        }
    }
}

/// Turn the worksheet into column strings, short lines padded with
/// spaces
fn columns(lines: &[&str]) -> Vec<String> {
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    (0..width)
        .map(|i| {
            lines
                .iter()
                .map(|l| l.as_bytes().get(i).copied().unwrap_or(b' ') as char)
                .collect()
        })
        .collect()
}

/// Groups of consecutive non-blank columns
fn problems(columns: &[String]) -> Vec<&[String]> {
    columns
        .split(|col| col.trim().is_empty())
        .filter(|cols| !cols.is_empty())
        .collect()
}

/// Part 1 reading: rows of the problem are the numbers, one row is the
/// operator
fn row_wise_value(cols: &[String]) -> Result<u64, AocError> {
    let height = cols.iter().map(|c| c.len()).max().unwrap_or(0);
    let mut op = None;
    let mut numbers = Vec::new();

    for i in 0..height {
        let row: String = cols
            .iter()
            .map(|c| c.as_bytes().get(i).copied().unwrap_or(b' ') as char)
            .collect();
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        if row.len() == 1 {
            if let Some(found) = Op::from_char(row.chars().next().unwrap_or(' ')) {
                op = Some(found);
                continue;
            }
        }
        numbers.push(
            row.parse::<u64>()
                .map_err(|_| AocError::parse(format!("bad worksheet number '{row}'")))?,
        );
    }

    let op = op.ok_or_else(|| AocError::parse("worksheet problem has no operator"))?;
    Ok(op.apply(&numbers))
}

/// Part 2 reading: right to left, each column's digits are one number
fn column_wise_value(cols: &[String]) -> Result<u64, AocError> {
    let op = cols
        .iter()
        .rev()
        .flat_map(|col| col.chars())
        .find_map(Op::from_char)
        .ok_or_else(|| AocError::parse("worksheet problem has no operator"))?;

    let numbers: Vec<u64> = cols
        .iter()
        .rev()
        .filter(|col| col.chars().any(|c| c.is_ascii_digit()))
        .map(|col| {
            let digits: String = col.chars().filter(char::is_ascii_digit).collect();
            digits
                .parse::<u64>()
                .map_err(|_| AocError::parse(format!("bad worksheet column '{col}'")))
        })
        .collect::<Result<_, _>>()?;

    Ok(op.apply(&numbers))
}

fn worksheet_total(
    data: &str,
    value: fn(&[String]) -> Result<u64, AocError>,
) -> Result<u64, AocError> {
    let lines = input::lines(data);
    let cols = columns(&lines);
    problems(&cols).into_iter().map(value).sum()
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    Ok(DayAnswers::both(
        worksheet_total(data, row_wise_value)?,
        worksheet_total(data, column_wise_value)?,
    ))
}
