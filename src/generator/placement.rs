//! Placement engine
//!
//! The backtracking search for one attempt. A seed word goes across the middle of
//! the grid; every later word must cross a letter already placed. When no word can
//! be added the most recent one is undone and banned for the rest of the attempt.

use super::config::GeneratorConfig;
use super::error::AttemptError;
use super::rng::SeededRng;
use crate::core::{Direction, Grid, Position, Rejection};
use crate::dictionary::{DictionaryIndex, EntryId};
use log::trace;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// One search over one grid
pub struct PlacementEngine<'a> {
    index: &'a DictionaryIndex,
    config: &'a GeneratorConfig,
    theme: &'a [EntryId],
    grid: Grid,
    used: FxHashSet<EntryId>,
    banned: FxHashSet<EntryId>,
    backtracks: usize,
}

impl<'a> PlacementEngine<'a> {
    /// Start a search on `grid`, which may already carry a block pattern
    #[must_use]
    pub fn new(
        index: &'a DictionaryIndex,
        config: &'a GeneratorConfig,
        theme: &'a [EntryId],
        grid: Grid,
    ) -> Self {
        Self {
            index,
            config,
            theme,
            grid,
            used: FxHashSet::default(),
            banned: FxHashSet::default(),
            backtracks: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Place the seed word, then grow until the target or the failure bound
    ///
    /// # Errors
    /// Returns `SearchExhausted` if the grid ends below the minimum across or
    /// down count. The grid is kept either way.
    pub fn run(&mut self, rng: &mut SeededRng) -> Result<(), AttemptError> {
        if self.place_seed(rng) {
            self.grow(rng);
        }

        let across = self.grid.count(Direction::Across);
        let down = self.grid.count(Direction::Down);
        let minimums = self.config.minimums;
        if across < minimums.across || down < minimums.down {
            return Err(AttemptError::SearchExhausted {
                placed: self.grid.word_count(),
                across,
                down,
            });
        }
        Ok(())
    }

    fn available(&self, id: EntryId) -> bool {
        !self.used.contains(&id)
            && !self.banned.contains(&id)
            && self.index.entry(id).len() <= self.config.max_word_len()
    }

    /// Words the seed is drawn from: the first theme word, else the curated seeds,
    /// else the six and seven letter words (common ones if there are any)
    fn seed_pool(&self) -> Vec<EntryId> {
        let fits = |id: &EntryId| self.index.entry(*id).len() <= self.grid.cols();

        if let Some(&first) = self.theme.first().filter(|&&id| fits(&id)) {
            return vec![first];
        }

        let curated: Vec<EntryId> = self
            .config
            .seed_words
            .iter()
            .filter_map(|word| self.index.id_of(&word.to_ascii_uppercase()))
            .filter(fits)
            .collect();
        if !curated.is_empty() {
            return curated;
        }

        let mid: Vec<EntryId> = [6, 7]
            .into_iter()
            .flat_map(|len| self.index.with_length(len).iter().copied())
            .filter(fits)
            .collect();
        let common: Vec<EntryId> = mid
            .iter()
            .copied()
            .filter(|&id| self.index.entry(id).common)
            .collect();
        if !common.is_empty() {
            return common;
        }
        if !mid.is_empty() {
            return mid;
        }

        (0..self.index.len()).filter(fits).collect()
    }

    /// Put the seed word across the middle row, centred
    fn place_seed(&mut self, rng: &mut SeededRng) -> bool {
        let pool = self.seed_pool();
        let Some(&id) = pool.choose(rng) else {
            trace!("No seed word fits");
            return false;
        };

        let index = self.index;
        let word = index.entry(id).word.as_str();
        let row = self.grid.center().row;
        let origin = Position::new(row, (self.grid.cols() - word.len()) / 2);

        match self.grid.can_place(word, origin, Direction::Across) {
            Ok(intersections) => {
                self.grid.place(word, origin, Direction::Across, intersections);
                self.used.insert(id);
                trace!("Seeded with {word} at {origin}");
                true
            }
            Err(e) => {
                trace!("Seed {word} rejected: {e}");
                false
            }
        }
    }

    /// Grow until the target or the failure bound, then keep the largest grid seen
    fn grow(&mut self, rng: &mut SeededRng) {
        let mut failures = 0;
        let mut best = self.grid.clone();

        while self.grid.word_count() < self.config.target_words
            && failures < self.config.max_failures
        {
            let direction = self.pick_direction(rng);
            if self.extend(direction, rng) || self.extend(direction.perpendicular(), rng) {
                failures = 0;
                if self.grid.word_count() > best.word_count() {
                    best = self.grid.clone();
                }
                continue;
            }

            failures += 1;
            if self.grid.word_count() > 1 && self.backtracks < self.config.max_backtracks {
                self.backtrack();
            }
        }

        // Backtracking past the peak loses words
        if best.word_count() > self.grid.word_count() {
            self.grid = best;
        }

        trace!(
            "Search stopped with {} words after {} backtracks",
            self.grid.word_count(),
            self.backtracks
        );
    }

    /// Undo the most recent word and ban it for the rest of the attempt
    fn backtrack(&mut self) {
        let Some(placement) = self.grid.unplace() else {
            return;
        };
        if let Some(id) = self.index.id_of(&placement.word) {
            self.used.remove(&id);
            self.banned.insert(id);
        }
        self.backtracks += 1;
        trace!("Backtracked {}", placement.word);
    }

    /// Alternate early, then chase the larger deficit, then balance
    fn pick_direction(&self, rng: &mut SeededRng) -> Direction {
        let placed = self.grid.word_count();
        if placed < self.config.alternate_until {
            // The seed runs across
            return if placed % 2 == 1 {
                Direction::Down
            } else {
                Direction::Across
            };
        }

        let across = self.grid.count(Direction::Across);
        let down = self.grid.count(Direction::Down);
        let minimums = self.config.minimums;
        let across_deficit = minimums.across.saturating_sub(across);
        let down_deficit = minimums.down.saturating_sub(down);

        match across_deficit
            .cmp(&down_deficit)
            .then_with(|| down.cmp(&across))
        {
            Ordering::Greater => Direction::Across,
            Ordering::Less => Direction::Down,
            Ordering::Equal if rng.next_bool() => Direction::Across,
            Ordering::Equal => Direction::Down,
        }
    }

    /// Connection points for `direction`, nearest the centre first
    fn ordered_points(&self, direction: Direction, rng: &mut SeededRng) -> Vec<Position> {
        let mut points = self.grid.connection_points(direction);
        points.shuffle(rng);

        // Doubled coordinates keep the centre of even-sized grids exact
        let (center_row, center_col) = (self.grid.rows() - 1, self.grid.cols() - 1);
        points.sort_by_key(|p| {
            let dr = (2 * p.row).abs_diff(center_row);
            let dc = (2 * p.col).abs_diff(center_col);
            dr * dr + dc * dc
        });
        points
    }

    /// Unused words containing `letter`: theme words first, then a shuffled,
    /// common-first selection capped at `candidate_cap`
    fn candidates(&self, letter: char, rng: &mut SeededRng) -> Vec<EntryId> {
        let contains = |id: &EntryId| self.index.entry(*id).word.contains(letter);

        let mut chosen: Vec<EntryId> = self
            .theme
            .iter()
            .copied()
            .filter(|&id| self.available(id) && contains(&id))
            .collect();

        let mut pool: Vec<EntryId> = self
            .index
            .with_letter(letter)
            .iter()
            .copied()
            .filter(|&id| self.available(id) && !self.theme.contains(&id))
            .collect();
        pool.shuffle(rng);
        pool.sort_by_key(|&id| !self.index.entry(id).common);
        pool.truncate(self.config.candidate_cap);

        chosen.extend(pool);
        chosen
    }

    /// Try to add one word crossing an existing letter in `direction`
    fn extend(&mut self, direction: Direction, rng: &mut SeededRng) -> bool {
        let index = self.index;

        for point in self.ordered_points(direction, rng) {
            let Some(letter) = self.grid.letter(point) else {
                continue;
            };

            for id in self.candidates(letter, rng) {
                let word = index.entry(id).word.as_str();
                if let Some((origin, intersections)) = self.fit(word, point, letter, direction) {
                    self.grid.place(word, origin, direction, intersections);
                    self.used.insert(id);
                    trace!("Placed {word} {direction} at {origin}");
                    return true;
                }
            }
        }

        false
    }

    /// First origin that puts a matching letter of `word` on `point` legally
    fn fit(
        &self,
        word: &str,
        point: Position,
        letter: char,
        direction: Direction,
    ) -> Option<(Position, Vec<Position>)> {
        for (i, ch) in word.chars().enumerate() {
            if ch != letter {
                continue;
            }
            let Some(origin) = point.step_back(direction, i) else {
                continue;
            };
            let Ok(intersections) = self.grid.can_place(word, origin, direction) else {
                continue;
            };
            if let Err(e) = self.check_cross_runs(word, origin, direction) {
                trace!("{word} {direction} at {origin}: {e}");
                continue;
            }
            return Some((origin, intersections));
        }
        None
    }

    /// Reject a newly written letter that would sit beside another letter
    ///
    /// Every perpendicular run of two or more letters must belong to a placed
    /// word, so a side contact is never left for a later word to complete.
    fn check_cross_runs(
        &self,
        word: &str,
        origin: Position,
        direction: Direction,
    ) -> Result<(), Rejection> {
        let crossing = direction.perpendicular();

        for (i, ch) in word.chars().enumerate() {
            let at = origin.step(direction, i);
            if self.grid.letter(at).is_some() {
                continue;
            }

            let (_, run) = self.grid.run_through(at, crossing, ch);
            if run.len() >= 2 {
                return Err(Rejection::InvalidCrossRun { at, run });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryEntry, embedded_index};
    use crate::generator::config::Minimums;

    fn small_index(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::build(
            words
                .iter()
                .map(|w| DictionaryEntry::new(w, "clue", true, false, []).unwrap()),
            None,
        )
    }

    fn run_engine(
        index: &DictionaryIndex,
        config: &GeneratorConfig,
        seed: &str,
    ) -> (Grid, Result<(), AttemptError>) {
        let mut rng = SeededRng::from_seed(seed);
        let grid = Grid::new(config.rows, config.cols);
        let mut engine = PlacementEngine::new(index, config, &[], grid);
        let result = engine.run(&mut rng);
        (engine.into_grid(), result)
    }

    #[test]
    fn seed_word_sits_across_the_middle() {
        let index = small_index(&["PLANET"]);
        let config = GeneratorConfig {
            rows: 9,
            cols: 9,
            minimums: Minimums::NONE,
            ..GeneratorConfig::default()
        };
        let (grid, result) = run_engine(&index, &config, "seed");

        assert_eq!(result, Ok(()));
        assert_eq!(grid.word_count(), 1);
        let seed = &grid.placements()[0];
        assert_eq!(seed.word, "PLANET");
        assert_eq!(seed.direction, Direction::Across);
        assert_eq!(seed.origin, Position::new(4, 1));
    }

    #[test]
    fn theme_word_becomes_the_seed() {
        let index = embedded_index();
        let config = GeneratorConfig::default();
        let theme = vec![index.id_of("TELESCOPE").unwrap()];
        let mut engine =
            PlacementEngine::new(&index, &config, &theme, Grid::new(config.rows, config.cols));
        let _ = engine.run(&mut SeededRng::from_seed("theme"));

        assert_eq!(engine.grid().placements()[0].word, "TELESCOPE");
    }

    #[test]
    fn later_words_cross_existing_ones() {
        let index = embedded_index();
        let config = GeneratorConfig::default();
        let (grid, _) = run_engine(&index, &config, "crossing");

        assert!(grid.word_count() > 1);
        for placement in &grid.placements()[1..] {
            assert!(
                !placement.intersections.is_empty(),
                "{} floats free",
                placement.word
            );
        }
    }

    #[test]
    fn strict_policy_keeps_letters_apart() {
        let index = embedded_index();
        let config = GeneratorConfig::default();
        let (grid, _) = run_engine(&index, &config, "strict");

        // Every lettered cell belongs to a placed word in each direction it has a neighbour
        for at in grid.positions().filter(|&p| grid.letter(p).is_some()) {
            for direction in Direction::ALL {
                let next = at.step(direction, 1);
                if grid.letter(next).is_some() {
                    assert!(grid.is_claimed(at, direction), "{at} touches {next}");
                }
            }
        }
    }

    #[test]
    fn words_are_never_reused() {
        let index = embedded_index();
        let (grid, _) = run_engine(&index, &GeneratorConfig::default(), "reuse");

        let mut words: Vec<&str> = grid.placements().iter().map(|p| p.word.as_str()).collect();
        let total = words.len();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), total);
    }

    #[test]
    fn same_seed_same_search() {
        let index = embedded_index();
        let config = GeneratorConfig::default();
        let (a, _) = run_engine(&index, &config, "repeat");
        let (b, _) = run_engine(&index, &config, "repeat");
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_dictionary_exhausts_search() {
        let index = small_index(&["PLANET", "TREE"]);
        let config = GeneratorConfig {
            rows: 9,
            cols: 9,
            ..GeneratorConfig::default()
        };
        let (grid, result) = run_engine(&index, &config, "tiny");

        assert!(matches!(
            result,
            Err(AttemptError::SearchExhausted { across: 1, .. })
        ));
        // TREE was backtracked but the larger grid is the one kept
        assert_eq!(grid.word_count(), 2);
    }

    #[test]
    fn empty_dictionary_places_nothing() {
        let index = small_index(&[]);
        let (grid, result) = run_engine(&index, &GeneratorConfig::default(), "empty");
        assert_eq!(grid.word_count(), 0);
        assert!(result.is_err());
    }

    /// TREE down column 4 and TEA down column 2, rows 1 onwards, leaving column 3 open
    fn two_columns() -> Grid {
        let mut grid = Grid::new(7, 7);
        grid.place("TREE", Position::new(1, 4), Direction::Down, Vec::new());
        grid.place("TEA", Position::new(1, 2), Direction::Down, Vec::new());
        grid
    }

    #[test]
    fn rejects_any_side_contact() {
        let index = small_index(&["TREE", "TEA"]);
        let config = GeneratorConfig::default();
        let engine = PlacementEngine::new(&index, &config, &[], two_columns());

        assert_eq!(
            engine.check_cross_runs("AT", Position::new(5, 3), Direction::Down),
            Ok(())
        );
        assert_eq!(
            engine.check_cross_runs("EX", Position::new(4, 3), Direction::Down),
            Err(Rejection::InvalidCrossRun {
                at: Position::new(4, 3),
                run: "EE".to_string(),
            })
        );
    }

    #[test]
    fn side_contact_rejected_even_when_run_is_a_word() {
        // O between the two Ts of row 1 reads TOT
        let index = small_index(&["TREE", "TEA", "TOT"]);
        let config = GeneratorConfig::default();
        let engine = PlacementEngine::new(&index, &config, &[], two_columns());

        assert_eq!(
            engine.check_cross_runs("O", Position::new(1, 3), Direction::Down),
            Err(Rejection::InvalidCrossRun {
                at: Position::new(1, 3),
                run: "TOT".to_string(),
            })
        );
    }
}
