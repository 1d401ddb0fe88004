//! Symmetric black-square patterns
//!
//! Laid down on an empty grid before the search when the symmetric policy is in
//! force. Blocks come in 180-degree rotation pairs, never touch each other, and
//! keep the middle row open for the seed word.

use super::rng::SeededRng;
use crate::core::{Grid, Position};
use rand::seq::SliceRandom;

/// The cell a 180-degree rotation maps `position` to
#[inline]
#[must_use]
pub const fn mirror(position: Position, rows: usize, cols: usize) -> Position {
    Position::new(rows - 1 - position.row, cols - 1 - position.col)
}

/// Choose pattern blocks for an empty `rows` x `cols` grid
///
/// The pattern uses at most half of the `max_black_ratio` budget; the rest is left
/// for the separators words bring with them.
#[must_use]
pub fn symmetric_pattern(
    rows: usize,
    cols: usize,
    max_black_ratio: f64,
    rng: &mut SeededRng,
) -> Vec<Position> {
    let budget = ((rows * cols) as f64 * max_black_ratio / 2.0) as usize;
    let middle = rows / 2;
    let middle_mirror = rows - 1 - middle;

    // One representative per rotation pair, skipping the open middle rows
    let mut candidates: Vec<Position> = (0..rows * cols)
        .map(|i| Position::new(i / cols, i % cols))
        .filter(|&p| p.row != middle && p.row != middle_mirror)
        .filter(|&p| p <= mirror(p, rows, cols))
        .collect();
    candidates.shuffle(rng);

    let mut blocked = vec![false; rows * cols];
    let mut pattern = Vec::new();

    for cell in candidates {
        let partner = mirror(cell, rows, cols);
        let cost = if partner == cell { 1 } else { 2 };
        if pattern.len() + cost > budget {
            continue;
        }
        if touches_block(&blocked, cell, rows, cols) || touches_block(&blocked, partner, rows, cols)
        {
            continue;
        }

        blocked[cell.row * cols + cell.col] = true;
        pattern.push(cell);
        if partner != cell {
            blocked[partner.row * cols + partner.col] = true;
            pattern.push(partner);
        }
    }

    pattern.sort_unstable();
    pattern
}

/// Whether any orthogonal neighbour of `at` is already blocked
fn touches_block(blocked: &[bool], at: Position, rows: usize, cols: usize) -> bool {
    let mut neighbours = Vec::with_capacity(4);
    if at.row > 0 {
        neighbours.push(Position::new(at.row - 1, at.col));
    }
    if at.row + 1 < rows {
        neighbours.push(Position::new(at.row + 1, at.col));
    }
    if at.col > 0 {
        neighbours.push(Position::new(at.row, at.col - 1));
    }
    if at.col + 1 < cols {
        neighbours.push(Position::new(at.row, at.col + 1));
    }
    neighbours
        .into_iter()
        .any(|n| blocked[n.row * cols + n.col])
}

/// Block the partner of every black square whose partner holds no letter
///
/// Returns the number of cells newly blocked.
pub fn mirror_blocks(grid: &mut Grid) -> usize {
    let (rows, cols) = (grid.rows(), grid.cols());
    let blocked: Vec<Position> = grid.positions().filter(|&p| grid.is_blocked(p)).collect();

    blocked
        .into_iter()
        .filter(|&p| grid.block(mirror(p, rows, cols)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn mirror_is_an_involution() {
        let p = Position::new(2, 9);
        assert_eq!(mirror(p, 15, 13), Position::new(12, 3));
        assert_eq!(mirror(mirror(p, 15, 13), 15, 13), p);
        assert_eq!(mirror(Position::new(7, 7), 15, 15), Position::new(7, 7));
    }

    #[test]
    fn pattern_is_symmetric_and_within_budget() {
        let mut rng = SeededRng::from_seed("pattern");
        let pattern = symmetric_pattern(15, 15, 0.16, &mut rng);

        assert!(!pattern.is_empty());
        assert!(pattern.len() as f64 <= 15.0 * 15.0 * 0.16);
        for &p in &pattern {
            assert!(pattern.contains(&mirror(p, 15, 15)), "{p} has no partner");
        }
    }

    #[test]
    fn pattern_keeps_middle_row_open_and_blocks_apart() {
        let mut rng = SeededRng::from_seed("middle");
        let pattern = symmetric_pattern(13, 13, 0.2, &mut rng);

        assert!(pattern.iter().all(|p| p.row != 6));
        for (i, a) in pattern.iter().enumerate() {
            for b in &pattern[i + 1..] {
                let distance = a.row.abs_diff(b.row) + a.col.abs_diff(b.col);
                assert!(distance > 1, "{a} touches {b}");
            }
        }
    }

    #[test]
    fn pattern_is_deterministic() {
        let a = symmetric_pattern(15, 15, 0.16, &mut SeededRng::from_seed("same"));
        let b = symmetric_pattern(15, 15, 0.16, &mut SeededRng::from_seed("same"));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_ratio_means_no_pattern() {
        let mut rng = SeededRng::from_seed("none");
        assert!(symmetric_pattern(9, 9, 0.0, &mut rng).is_empty());
    }

    #[test]
    fn mirror_blocks_skips_letters() {
        let mut grid = Grid::new(5, 5);
        let origin = Position::new(4, 1);
        let intersections = grid.can_place("CAT", origin, Direction::Across).unwrap();
        grid.place("CAT", origin, Direction::Across, intersections);
        // Separators at (4, 0) and (4, 4); their partners are (0, 4) and (0, 0)
        grid.block(Position::new(1, 3));

        let added = mirror_blocks(&mut grid);

        assert_eq!(added, 3);
        assert!(grid.is_blocked(Position::new(0, 4)));
        assert!(grid.is_blocked(Position::new(0, 0)));
        assert!(grid.is_blocked(Position::new(3, 1)));
    }
}
