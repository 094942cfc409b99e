use crate::games::SessionRng;
use super::board::{BOARD_SIZE, Board, is_legal_move};
use super::bot_controller::{BotInput, calculate_move};
use super::types::{GameMode, GameStatus, Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line, is_draw};

const STARTING_MARK: Mark = Mark::X;
const HUMAN_MARK: Mark = Mark::X;
const COMPUTER_MARK: Mark = Mark::O;

/// A computer reply that has been scheduled but not yet played.
///
/// Carries the board as it was when the reply was scheduled and the
/// generation of the game it belongs to. A reset bumps the generation, which
/// turns every outstanding `PendingReply` stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub generation: u64,
    pub board: Board,
}

/// Read-only view of a game handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub opponent_pending: bool,
    pub last_move: Option<usize>,
    pub generation: u64,
}

impl GameSnapshot {
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Draw => "Game is a draw!".to_string(),
            GameStatus::InProgress if self.opponent_pending => {
                "Computer is thinking...".to_string()
            }
            GameStatus::InProgress => format!("Next player: {}", self.current_mark),
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Whether a human may place a mark right now.
    pub fn accepts_human_move(&self) -> bool {
        !self.status.is_over()
            && !self.opponent_pending
            && (self.mode == GameMode::HumanVsHuman || self.current_mark == HUMAN_MARK)
    }
}

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub mode: GameMode,
    pub status: GameStatus,
    pub opponent_pending: bool,
    pub last_move: Option<usize>,
    generation: u64,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: STARTING_MARK,
            mode,
            status: GameStatus::InProgress,
            opponent_pending: false,
            last_move: None,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn human_mark(&self) -> Mark {
        HUMAN_MARK
    }

    pub fn computer_mark(&self) -> Mark {
        COMPUTER_MARK
    }

    /// Places the current mark at `index` on behalf of a human.
    ///
    /// On `Ok(Some(_))` the caller must schedule the computer's reply and later
    /// hand the same `PendingReply` to [`Self::apply_opponent_reply`].
    pub fn submit_move(&mut self, index: usize) -> Result<Option<PendingReply>, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if self.opponent_pending {
            return Err("Computer is thinking".to_string());
        }

        if self.mode == GameMode::HumanVsOpponent && self.current_mark != HUMAN_MARK {
            return Err("Not your turn".to_string());
        }

        if index >= BOARD_SIZE {
            return Err(format!("Position {} is out of bounds", index));
        }

        if !is_legal_move(&self.board, index, self.status) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.place(index, self.current_mark);

        if self.status.is_over() {
            return Ok(None);
        }

        match self.mode {
            GameMode::HumanVsOpponent => {
                self.current_mark = COMPUTER_MARK;
                self.opponent_pending = true;
                Ok(Some(PendingReply {
                    generation: self.generation,
                    board: self.board,
                }))
            }
            GameMode::HumanVsHuman => {
                self.switch_turn();
                Ok(None)
            }
        }
    }

    /// Plays the computer's reply computed against the board captured in
    /// `reply`. Returns the chosen index.
    pub fn apply_opponent_reply(
        &mut self,
        reply: &PendingReply,
        rng: &mut SessionRng,
    ) -> Result<usize, String> {
        if reply.generation != self.generation {
            return Err(format!(
                "Reply belongs to game {} but current game is {}",
                reply.generation, self.generation
            ));
        }

        if !self.opponent_pending {
            return Err("No computer reply is pending".to_string());
        }

        let input = BotInput::new(reply.board, COMPUTER_MARK);
        let Some(index) = calculate_move(&input, rng) else {
            self.opponent_pending = false;
            return Err("No empty cell left for the computer".to_string());
        };

        if !is_legal_move(&self.board, index, self.status) {
            self.opponent_pending = false;
            return Err(format!("Computer picked unavailable cell {}", index));
        }

        self.place(index, COMPUTER_MARK);
        self.current_mark = HUMAN_MARK;
        self.opponent_pending = false;
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = STARTING_MARK;
        self.status = GameStatus::InProgress;
        self.opponent_pending = false;
        self.last_move = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.reset();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            status: self.status,
            current_mark: self.current_mark,
            mode: self.mode,
            opponent_pending: self.opponent_pending,
            last_move: self.last_move,
            generation: self.generation,
        }
    }

    fn place(&mut self, index: usize, mark: Mark) {
        self.board = self.board.with_mark(index, mark);
        self.last_move = Some(index);
        self.check_game_over();
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = GameStatus::Won(winner_mark);
        } else if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}
