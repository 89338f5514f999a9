//! This module contains the logic for filling boards with random solutions.
//!
//! A [Generator] owns the random number generator that drives the search and
//! fills [Board]s using recursive backtracking with uniformly shuffled
//! candidate digits. For most cases, sensible defaults are provided by
//! [Generator::new_default].

use crate::{Board, CELL_COUNT, PeerPolicy};
use crate::error::{GenError, GenResult};
use crate::util::DigitSet;

use log::error;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly fills [Board]s, producing complete grids in which
/// every row, column, and 3x3 block contains each digit 1 to 9 exactly once.
/// It uses a random number generator to decide the order in which candidate
/// digits are tried, so every invocation yields a different solution.
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to order the
    /// candidate digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len < 2 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to order the candidate digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, board: &mut Board, index: usize) -> bool {
        if index == CELL_COUNT {
            return true;
        }

        let mut used = DigitSet::new();

        for &peer in board.cells[index].peers.iter() {
            let value = board.cells[peer.index()].value;

            if value != 0 {
                used.insert(value);
            }
        }

        let options = DigitSet::all() - used;

        for option in shuffle(&mut self.rng, options.iter()) {
            board.cells[index].value = option;

            if self.fill_rec(board, index + 1) {
                return true;
            }
        }

        // out of options, undo and backtrack
        board.cells[index].value = 0;
        false
    }

    /// Fills the given [Board] with a random complete solution, visiting the
    /// cells in row-major scan order and backtracking whenever a cell runs
    /// out of candidate digits. The candidates of each cell are the digits 1
    /// to 9 minus the values already used by its peers, tried in uniformly
    /// shuffled order.
    ///
    /// If no error is returned, it is guaranteed that [Board::is_solved]
    /// returns `true` for `board` after this operation. Values present on
    /// the board from an earlier fill are not taken into account; call
    /// [Board::reset] before refilling a board.
    ///
    /// # Errors
    ///
    /// * `GenError::Unsatisfiable` If the entire search space was exhausted
    /// without finding a complete assignment. This cannot happen for the
    /// standard peer geometry, but callers are expected to handle it (by
    /// logging, retrying, or aborting) rather than assume success. In this
    /// case all cell values have been reset to 0 by the backtracking.
    pub fn fill(&mut self, board: &mut Board) -> GenResult<()> {
        if self.fill_rec(board, 0) {
            Ok(())
        }
        else {
            Err(GenError::Unsatisfiable)
        }
    }

    /// Generates a new [Board] whose peer sets are computed under the given
    /// policy and fills it with a random complete solution.
    ///
    /// It is guaranteed that [Board::is_solved] on the result returns
    /// `true`.
    ///
    /// # Errors
    ///
    /// * `GenError::Unsatisfiable` If the board could not be filled. See
    /// [Generator::fill] for details.
    pub fn generate(&mut self, policy: PeerPolicy) -> GenResult<Board> {
        let mut board = Board::with_policy(policy);
        self.fill(&mut board)?;
        Ok(board)
    }

    /// Generates `count` random solutions and collects their compact
    /// serialized forms, in generation order. One board is constructed up
    /// front and reset before every fill, since the peer structure depends
    /// only on the geometry.
    ///
    /// # Errors
    ///
    /// * `GenError::Unsatisfiable` If any fill fails. See [Generator::fill]
    /// for details.
    pub fn generate_serialized(&mut self, count: usize, policy: PeerPolicy)
            -> GenResult<Vec<String>> {
        let mut board = Board::with_policy(policy);
        let mut codes = Vec::with_capacity(count);

        for _ in 0..count {
            board.reset();
            self.fill(&mut board)?;
            codes.push(board.serialize());
        }

        Ok(codes)
    }
}

/// Generates a fresh [Board] and fills it with a random complete solution,
/// using a default generator. This is the single-board entry point intended
/// for host environments that embed this crate.
///
/// If the fill fails, which cannot happen for the standard peer geometry,
/// the failure is logged and the board is returned as-is, with all values 0.
pub fn generate_and_fill_board() -> Board {
    let mut board = Board::new();
    let mut generator = Generator::new_default();

    if generator.fill(&mut board).is_err() {
        error!("unable to fill board");
    }

    board
}

/// Generates and fills `count` independent [Board]s, discarding the results.
/// This is the batch entry point intended for host environments that embed
/// this crate, e.g. for benchmarking the fill from the host's side.
pub fn generate_and_fill_boards(count: usize) {
    let mut generator = Generator::new_default();

    for _ in 0..count {
        let mut board = Board::new();

        if generator.fill(&mut board).is_err() {
            error!("unable to fill board");
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Position;

    #[test]
    fn shuffling_uniformly_distributed() {
        // 18000 experiments, 6 orderings (3!), so if uniformly distributed:
        // p = 1/6, my = 3000, sigma = sqrt(18000 * 1/6 * 5/6) = 50
        // with a probability of the amount being in the range [2600, 3400]
        // is more than 99,9999999999999 %.

        let mut counts = [0; 6];
        let mut rng = rand::thread_rng();

        for _ in 0..18000 {
            let result = shuffle(&mut rng, 1..=3);

            if result == vec![1, 2, 3] {
                counts[0] += 1;
            }
            else if result == vec![1, 3, 2] {
                counts[1] += 1;
            }
            else if result == vec![2, 1, 3] {
                counts[2] += 1;
            }
            else if result == vec![2, 3, 1] {
                counts[3] += 1;
            }
            else if result == vec![3, 1, 2] {
                counts[4] += 1;
            }
            else if result == vec![3, 2, 1] {
                counts[5] += 1;
            }
        }

        for count in counts.iter() {
            assert!(*count >= 2600 && *count <= 3400,
                "Count is not in range [2600, 3400].");
        }
    }

    #[test]
    fn shuffling_few_elements_does_not_panic() {
        let mut rng = rand::thread_rng();

        assert!(shuffle(&mut rng, std::iter::empty::<u8>()).is_empty());
        assert_eq!(vec![42], shuffle(&mut rng, std::iter::once(42)));
    }

    #[test]
    fn filled_board_is_solved() {
        let mut board = Board::new();
        let mut generator = Generator::new_default();

        generator.fill(&mut board).unwrap();

        assert!(board.is_solved());
    }

    #[test]
    fn filled_board_serializes_to_81_nonzero_digits() {
        let mut generator = Generator::new_default();
        let board = generator.generate(PeerPolicy::ForwardScan).unwrap();
        let code = board.serialize();

        assert_eq!(81, code.len());
        assert!(code.chars().all(|c| ('1'..='9').contains(&c)));
    }

    #[test]
    fn full_constraint_policy_also_fills() {
        let mut generator = Generator::new_default();
        let board = generator.generate(PeerPolicy::FullConstraint).unwrap();

        assert!(board.is_solved());
    }

    /// A board on which every cell must differ from *all* cells before it in
    /// scan order. Nine digits cannot color an 81-cell clique, so the tenth
    /// cell never has an option and the search must exhaust.
    fn clique_board() -> Board {
        let mut board = Board::new();

        for index in 0..CELL_COUNT {
            board.cells[index].peers =
                (0..index).map(Position::from_index).collect();
        }

        board
    }

    #[test]
    fn unsatisfiable_board_reports_failure_and_stays_empty() {
        let mut board = clique_board();
        let mut generator = Generator::new_default();

        assert_eq!(Err(GenError::Unsatisfiable), generator.fill(&mut board));
        assert_eq!("0".repeat(CELL_COUNT), board.serialize());
    }

    #[test]
    fn reset_board_can_be_filled_again() {
        let mut board = Board::new();
        let mut generator = Generator::new_default();

        generator.fill(&mut board).unwrap();
        board.reset();

        assert_eq!("0".repeat(CELL_COUNT), board.serialize());

        generator.fill(&mut board).unwrap();

        assert!(board.is_solved());
    }

    #[test]
    fn generate_serialized_yields_count_solved_boards() {
        let mut generator = Generator::new_default();
        let codes = generator
            .generate_serialized(5, PeerPolicy::ForwardScan)
            .unwrap();

        assert_eq!(5, codes.len());

        for code in codes {
            assert!(Board::parse(&code).unwrap().is_solved());
        }
    }

    #[test]
    fn generate_and_fill_board_yields_solved_board() {
        assert!(generate_and_fill_board().is_solved());
    }

    #[test]
    fn generate_and_fill_boards_smoke() {
        generate_and_fill_boards(3);
    }
}
