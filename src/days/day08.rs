//! Day 8: Junction Circuits
//!
//! Junction boxes are 3D points; connecting a pair merges their
//! circuits. Pairs are always taken closest first. Part 1 connects a
//! fixed number of pairs and multiplies the three largest circuit
//! sizes. Part 2 keeps connecting until one circuit remains and
//! multiplies the X coordinates of the closing pair.

use std::collections::HashMap;

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

type Point = (i64, i64, i64);

/// How many closest pairs part 1 connects on the real input
const PART1_PAIRS: usize = 1000;

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    circuits: usize,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            circuits: len,
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the circuits of `a` and `b`; false if already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.rank[ra] < self.rank[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        self.parent[small] = big;
        if self.rank[big] == self.rank[small] {
            self.rank[big] += 1;
        }
        self.circuits -= 1;
        true
    }

    fn circuit_sizes(&mut self) -> Vec<usize> {
        let mut sizes: HashMap<usize, usize> = HashMap::new();
        for i in 0..self.parent.len() {
            let root = self.find(i);
            *sizes.entry(root).or_insert(0) += 1;
        }
        let mut sizes: Vec<usize> = sizes.into_values().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }
}

fn parse_boxes(data: &str) -> Result<Vec<Point>, AocError> {
    input::lines(data)
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let coords = input::ints(line)?;
            match coords.as_slice() {
                [x, y, z] => Ok((*x, *y, *z)),
                _ => Err(AocError::MalformedLine {
                    line_no: idx + 1,
                    content: line.to_string(),
                }),
            }
        })
        .collect()
}

/// All pairs ordered by distance, ties broken by index.
///
/// Squared distances order the same as real ones and stay exact.
fn pairs_by_distance(boxes: &[Point]) -> Vec<(u64, usize, usize)> {
    let mut pairs = Vec::with_capacity(boxes.len() * boxes.len().saturating_sub(1) / 2);
    for i in 0..boxes.len() {
        for j in i + 1..boxes.len() {
            let (dx, dy, dz) = (
                boxes[i].0 - boxes[j].0,
                boxes[i].1 - boxes[j].1,
                boxes[i].2 - boxes[j].2,
            );
            pairs.push(((dx * dx + dy * dy + dz * dz) as u64, i, j));
        }
    }
    pairs.sort_unstable();
    pairs
}

/// Part 1: product of the three largest circuits after wiring the
/// closest pairs
fn largest_circuit_product(boxes: &[Point], pair_count: usize) -> u64 {
    let pairs = pairs_by_distance(boxes);
    let mut uf = UnionFind::new(boxes.len());
    for &(_, i, j) in pairs.iter().take(pair_count) {
        uf.union(i, j);
    }
    uf.circuit_sizes().iter().take(3).map(|&s| s as u64).product()
}

/// Part 2: X-coordinate product of the pair whose connection joins
/// everything into one circuit
fn closing_pair_product(boxes: &[Point]) -> Result<i64, AocError> {
    let pairs = pairs_by_distance(boxes);
    let mut uf = UnionFind::new(boxes.len());
    for &(_, i, j) in &pairs {
        if uf.union(i, j) && uf.circuits == 1 {
            return Ok(boxes[i].0 * boxes[j].0);
        }
    }
    Err(AocError::parse(
        "junction boxes never connect into a single circuit",
    ))
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let boxes = parse_boxes(data)?;
    Ok(DayAnswers::both(
        largest_circuit_product(&boxes, PART1_PAIRS),
        closing_pair_product(&boxes)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    #[test]
    fn example_circuit_product_after_ten_pairs() {
        let boxes = parse_boxes(EXAMPLE).unwrap();
        assert_eq!(largest_circuit_product(&boxes, 10), 40);
    }

    #[test]
    fn example_closing_pair_product() {
        let boxes = parse_boxes(EXAMPLE).unwrap();
        assert_eq!(closing_pair_product(&boxes).unwrap(), 25272);
    }

    #[test]
    fn union_reports_whether_it_merged() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.circuits, 2);
        assert_eq!(uf.circuit_sizes(), vec![2, 1]);
    }

    #[test]
    fn line_with_wrong_coordinate_count_is_rejected() {
        let err = parse_boxes("1,2,3\n4,5").unwrap_err();
        assert!(matches!(err, AocError::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn isolated_boxes_never_close_a_circuit() {
        let err = closing_pair_product(&[(0, 0, 0)]).unwrap_err();
        assert!(matches!(err, AocError::Parse { .. }));
    }
}
