use crate::games::SessionRng;
use super::board::Board;
use super::types::Mark;
use super::win_detector::check_win;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const SIDES: [usize; 4] = [1, 3, 5, 7];

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub human_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self {
            board,
            bot_mark,
            human_mark: bot_mark.opponent().unwrap_or(Mark::Empty),
        }
    }
}

/// Picks the computer's reply by fixed priority: win now, block the human's
/// immediate win, take the center, a random free corner, a random free side.
///
/// Only one ply is examined, so a fork is not defended against.
/// Returns `None` only for a full board.
pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.available_moves();
    debug_assert!(
        !available_moves.is_empty(),
        "opponent move requested on a full board"
    );
    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(&input.board, input.bot_mark, &available_moves) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(&input.board, input.human_mark, &available_moves) {
        return Some(index);
    }

    if input.board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    pick_free(&input.board, &CORNERS, rng).or_else(|| pick_free(&input.board, &SIDES, rng))
}

fn find_winning_move(board: &Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    if mark == Mark::Empty {
        return None;
    }
    moves
        .iter()
        .copied()
        .find(|&index| check_win(&board.with_mark(index, mark)) == Some(mark))
}

fn pick_free(board: &Board, candidates: &[usize], rng: &mut SessionRng) -> Option<usize> {
    let free: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&index| board.is_empty_at(index))
        .collect();
    rng.choose(&free)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::BOARD_SIZE;

    fn board_from(pattern: &str) -> Board {
        let mut cells = [Mark::Empty; BOARD_SIZE];
        for (cell, ch) in cells.iter_mut().zip(pattern.chars().filter(|c| !c.is_whitespace())) {
            *cell = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Board::from_cells(cells)
    }

    fn bot_move(pattern: &str, seed: u64) -> Option<usize> {
        let input = BotInput::new(board_from(pattern), Mark::O);
        calculate_move(&input, &mut SessionRng::new(seed))
    }

    #[test]
    fn test_bot_input_derives_human_mark() {
        let input = BotInput::new(Board::new(), Mark::O);
        assert_eq!(input.human_mark, Mark::X);
    }

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(bot_move("OX. XO. X..", 0), Some(8));
    }

    #[test]
    fn test_win_beats_block() {
        // X threatens 5, but O completes the top row first.
        assert_eq!(bot_move("OO. XX. ..X", 0), Some(2));
    }

    #[test]
    fn test_lowest_winning_index_is_chosen() {
        // O wins at 2 (row) or 6 (column); ascending scan picks 2.
        assert_eq!(bot_move("OO. OXX .X.", 0), Some(2));
    }

    #[test]
    fn test_blocks_human_win() {
        assert_eq!(bot_move("XX. .O. ...", 0), Some(2));
        assert_eq!(bot_move("X.. X.. .O.", 0), Some(6));
    }

    #[test]
    fn test_lowest_blocking_index_is_chosen() {
        // X threatens 2 and 6; no O win available.
        assert_eq!(bot_move("XX. X.. ..O", 0), Some(2));
    }

    #[test]
    fn test_takes_center_when_free() {
        assert_eq!(bot_move("X.. ... ...", 0), Some(4));
    }

    #[test]
    fn test_takes_a_corner_after_center() {
        for seed in 0..32 {
            let index = bot_move("... .X. ...", seed).unwrap();
            assert!(CORNERS.contains(&index), "seed {} picked {}", seed, index);
        }
    }

    #[test]
    fn test_corner_choice_covers_all_free_corners() {
        let mut seen = [false; BOARD_SIZE];
        for seed in 0..200 {
            seen[bot_move("... .X. ...", seed).unwrap()] = true;
        }
        assert!(CORNERS.iter().all(|&i| seen[i]));
    }

    #[test]
    fn test_falls_back_to_side() {
        // Center and corners taken, no line can be completed.
        let mut seen = [false; BOARD_SIZE];
        for seed in 0..64 {
            let index = bot_move("OXO .X. XOX", seed).unwrap();
            assert!(index == 3 || index == 5, "seed {} picked {}", seed, index);
            seen[index] = true;
        }
        assert!(seen[3] && seen[5]);
    }

    #[test]
    fn test_single_empty_cell_is_taken() {
        assert_eq!(bot_move("XOX XOO OX.", 0), Some(8));
    }

    #[test]
    fn test_same_seed_same_choice() {
        assert_eq!(bot_move("... .X. ...", 11), bot_move("... .X. ...", 11));
    }

    #[test]
    fn test_fork_is_not_defended() {
        // X holds 0 and 8 with O in the center; after X takes 6 there are two
        // threats and the bot can only block the lower one.
        assert_eq!(bot_move("X.. .O. X.X", 0), Some(3));
    }

    #[test]
    fn test_tactical_priority_holds_on_every_open_board() {
        let mut rng = SessionRng::new(9);
        for code in 0..3u32.pow(BOARD_SIZE as u32) {
            let mut cells = [Mark::Empty; BOARD_SIZE];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    1 => Mark::X,
                    2 => Mark::O,
                    _ => Mark::Empty,
                };
                rest /= 3;
            }
            let board = Board::from_cells(cells);
            if board.is_full() || check_win(&board).is_some() {
                continue;
            }

            let completes = |mark: Mark| {
                board
                    .available_moves()
                    .into_iter()
                    .find(|&i| check_win(&board.with_mark(i, mark)) == Some(mark))
            };
            let picked = calculate_move(&BotInput::new(board, Mark::O), &mut rng);
            let expected = completes(Mark::O).or_else(|| completes(Mark::X));

            match expected {
                Some(index) => assert_eq!(picked, Some(index), "board {:?}", board),
                None => {
                    let index = picked.unwrap();
                    assert!(board.is_empty_at(index), "board {:?}", board);
                    if board.is_empty_at(CENTER) {
                        assert_eq!(index, CENTER);
                    }
                }
            }
        }
    }
}
