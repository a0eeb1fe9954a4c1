//! Day 12: Shape Fitting
//!
//! Blank-separated blocks define numbered shapes, then region lines
//! `WxH: n0 n1 ...` asking for n copies of each shape inside a W by H
//! board. Part 1 counts regions passing the area and checkerboard
//! parity feasibility test: the shapes' cells, colored black and white,
//! must not demand more of either color than the board offers.

use std::collections::HashMap;

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

/// (black, white) cell counts under checkerboard coloring
type Parity = (u64, u64);

struct Region {
    width: u64,
    height: u64,
    counts: Vec<u64>,
}

fn cell_parity(rows: &[&str]) -> Parity {
    let mut black = 0;
    let mut white = 0;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                if (x + y) % 2 == 0 {
                    black += 1;
                } else {
                    white += 1;
                }
            }
        }
    }
    (black, white)
}

fn board_parity(width: u64, height: u64) -> Parity {
    let cells = width * height;
    // Even-area boards split evenly; odd-area boards have one extra
    // cell of the corner color
    (cells / 2 + cells % 2, cells / 2)
}

fn parse(data: &str) -> Result<(HashMap<usize, Parity>, Vec<Region>), AocError> {
    let mut shapes: HashMap<usize, Parity> = HashMap::new();
    let mut regions: Vec<Region> = Vec::new();

    for block in input::blocks(data) {
        let mut lines = block.lines();
        let first = lines.next().unwrap_or("").trim();

        if let Some(id) = first.strip_suffix(':').and_then(|s| s.parse::<usize>().ok()) {
            let rows: Vec<&str> = lines.map(str::trim_end).collect();
            shapes.insert(id, cell_parity(&rows));
            continue;
        }

        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (size, rest) = line
                .split_once(':')
                .ok_or_else(|| AocError::parse(format!("expected 'WxH: counts', got '{line}'")))?;
            let (w, h) = size
                .trim()
                .split_once('x')
                .ok_or_else(|| AocError::parse(format!("bad region size '{size}'")))?;
            let parse_dim = |s: &str| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| AocError::parse(format!("bad region size '{size}'")))
            };
            let counts = rest
                .split_whitespace()
                .map(|n| {
                    n.parse::<u64>()
                        .map_err(|_| AocError::parse(format!("bad shape count '{n}'")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            regions.push(Region {
                width: parse_dim(w)?,
                height: parse_dim(h)?,
                counts,
            });
        }
    }

    Ok((shapes, regions))
}

fn region_is_feasible(
    region: &Region,
    shapes: &HashMap<usize, Parity>,
) -> Result<bool, AocError> {
    let (board_black, board_white) = board_parity(region.width, region.height);
    let mut need_black = 0;
    let mut need_white = 0;

    for (id, &count) in region.counts.iter().enumerate() {
        let &(black, white) = shapes
            .get(&id)
            .ok_or_else(|| AocError::parse(format!("region references unknown shape {id}")))?;
        need_black += black * count;
        need_white += white * count;
    }

    let fits = need_black + need_white <= region.width * region.height
        && need_black <= board_black
        && need_white <= board_white;
    Ok(fits)
}

/// Part 1: regions whose shape demands pass the feasibility test
fn feasible_region_count(data: &str) -> Result<u64, AocError> {
    let (shapes, regions) = parse(data)?;
    let mut feasible = 0;
    for region in &regions {
        if region_is_feasible(region, &shapes)? {
            feasible += 1;
        }
    }
    Ok(feasible)
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    Ok(DayAnswers::part1_only(feasible_region_count(data)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0:
###
##.
##.

1:
###
##.
.##

2:
.##
###
##.

3:
##.
###
##.

4:
###
#..
###

5:
###
.#.
###

4x4: 0 0 0 0 2 0
12x5: 1 0 1 0 2 2
12x5: 1 0 1 0 3 2";

    #[test]
    fn example_has_three_feasible_regions() {
        assert_eq!(feasible_region_count(EXAMPLE).unwrap(), 3);
    }

    #[test]
    fn parity_splits_the_plus_shape_unevenly() {
        // The plus-with-bars shape covers five black, two white cells
        assert_eq!(cell_parity(&["###", ".#.", "###"]), (5, 2));
    }

    #[test]
    fn board_parity_matches_the_cell_walk() {
        for (w, h) in [(4u64, 4u64), (12, 5), (3, 3), (1, 7)] {
            let mut black = 0;
            let mut white = 0;
            for y in 0..h {
                for x in 0..w {
                    if (x + y) % 2 == 0 {
                        black += 1;
                    } else {
                        white += 1;
                    }
                }
            }
            assert_eq!(board_parity(w, h), (black, white), "{w}x{h}");
        }
    }

    #[test]
    fn oversized_demand_is_infeasible() {
        let region = Region {
            width: 2,
            height: 2,
            counts: vec![1],
        };
        let mut shapes = HashMap::new();
        shapes.insert(0, (3u64, 2u64));
        assert!(!region_is_feasible(&region, &shapes).unwrap());
    }

    #[test]
    fn unknown_shape_id_is_rejected() {
        assert!(feasible_region_count("0:\n##\n\n3x3: 1 1").is_err());
    }
}
