//! Day 9: Tile Rectangles
//!
//! Red tiles are polygon corners listed in boundary order. Each grid
//! row touched by an edge gets a [min_x, max_x] span; a candidate
//! rectangle between two red tiles counts when every row it covers
//! stays inside its span. Only part 2 is solved: the largest such
//! rectangle's area, counting both border columns and rows.

use std::collections::HashMap;

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

type Tile = (i64, i64);

fn parse_tiles(data: &str) -> Result<Vec<Tile>, AocError> {
    input::lines(data)
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let coords = input::ints(line)?;
            match coords.as_slice() {
                [x, y] => Ok((*x, *y)),
                _ => Err(AocError::MalformedLine {
                    line_no: idx + 1,
                    content: line.to_string(),
                }),
            }
        })
        .collect()
}

/// Per-row horizontal extent of the polygon's edges, corners wrapping
/// around
fn row_spans(tiles: &[Tile]) -> HashMap<i64, (i64, i64)> {
    let mut spans: HashMap<i64, (i64, i64)> = HashMap::new();
    let mut widen = |y: i64, lo: i64, hi: i64| {
        spans
            .entry(y)
            .and_modify(|span| {
                span.0 = span.0.min(lo);
                span.1 = span.1.max(hi);
            })
            .or_insert((lo, hi));
    };

    for (i, &(x1, y1)) in tiles.iter().enumerate() {
        let (x2, y2) = tiles[(i + 1) % tiles.len()];
        if x1 == x2 {
            for y in y1.min(y2)..=y1.max(y2) {
                widen(y, x1, x1);
            }
        } else if y1 == y2 {
            widen(y1, x1.min(x2), x1.max(x2));
        }
    }
    spans
}

fn rectangle_fits(a: Tile, b: Tile, spans: &HashMap<i64, (i64, i64)>) -> bool {
    let (min_x, max_x) = (a.0.min(b.0), a.0.max(b.0));
    (a.1.min(b.1)..=a.1.max(b.1)).all(|y| match spans.get(&y) {
        Some(&(lo, hi)) => lo <= min_x && max_x <= hi,
        None => false,
    })
}

fn area(a: Tile, b: Tile) -> u64 {
    (((a.0 - b.0).abs() + 1) * ((a.1 - b.1).abs() + 1)) as u64
}

/// Largest in-bounds rectangle spanned by two red tiles
fn largest_rectangle(tiles: &[Tile]) -> u64 {
    let spans = row_spans(tiles);
    let mut best = 0;
    for i in 0..tiles.len() {
        for j in i + 1..tiles.len() {
            if rectangle_fits(tiles[i], tiles[j], &spans) {
                best = best.max(area(tiles[i], tiles[j]));
            }
        }
    }
    best
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let tiles = parse_tiles(data)?;
    Ok(DayAnswers::part2_only(largest_rectangle(&tiles)))
}
