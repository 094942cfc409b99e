use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::GameConfig;
use crate::games::SessionRng;
use crate::{log, log_debug};
use super::broadcaster::{GameBroadcaster, GameOverNotification};
use super::game_state::{GameSnapshot, PendingReply, TicTacToeGameState};
use super::types::GameMode;

#[derive(Clone)]
pub struct TicTacToeSessionState {
    pub session_id: String,
    pub game_state: Arc<Mutex<TicTacToeGameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub reply_delay: Duration,
}

impl TicTacToeSessionState {
    pub fn create(
        session_id: impl Into<String>,
        mode: GameMode,
        reply_delay: Duration,
        rng: SessionRng,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new(mode))),
            rng: Arc::new(Mutex::new(rng)),
            reply_delay,
        }
    }

    pub fn from_config(session_id: impl Into<String>, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self::create(session_id, config.starting_mode, config.reply_delay(), rng)
    }
}

/// Drives one game: accepts human commands, plays the computer's delayed
/// reply, and reports every state change to the broadcaster.
///
/// The game state lock is held while broadcasting, so observers see changes
/// in the order they were made.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    state: TicTacToeSessionState,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(state: TicTacToeSessionState, broadcaster: B) -> Self {
        Self { state, broadcaster }
    }

    pub fn state(&self) -> &TicTacToeSessionState {
        &self.state
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.state.game_state.lock().await.snapshot()
    }

    /// Sends the current state without changing it, e.g. for a first render.
    pub async fn publish(&self) {
        let game_state = self.state.game_state.lock().await;
        self.broadcaster.broadcast_state(game_state.snapshot()).await;
    }

    /// Returns whether the move was accepted. Rejected moves change nothing
    /// and are not broadcast.
    pub async fn submit_move(&self, index: usize) -> bool {
        let mut game_state = self.state.game_state.lock().await;
        let mark = game_state.current_mark;

        let pending = match game_state.submit_move(index) {
            Ok(pending) => pending,
            Err(e) => {
                log_debug!("[session:{}] Move at {} ignored: {}", self.state.session_id, index, e);
                return false;
            }
        };

        log!("[session:{}] {} placed at {}", self.state.session_id, mark, index);
        let snapshot = game_state.snapshot();
        self.notify(&snapshot).await;

        if let Some(reply) = pending {
            self.schedule_reply(reply);
        }
        true
    }

    pub async fn reset(&self) {
        let mut game_state = self.state.game_state.lock().await;
        let abandoned_reply = game_state.opponent_pending;
        game_state.reset();
        log!(
            "[session:{}] Reset, game {}{}",
            self.state.session_id,
            game_state.generation(),
            if abandoned_reply { " (pending reply abandoned)" } else { "" }
        );
        self.broadcaster.broadcast_state(game_state.snapshot()).await;
    }

    pub async fn toggle_mode(&self) {
        let mut game_state = self.state.game_state.lock().await;
        game_state.toggle_mode();
        log!(
            "[session:{}] Mode switched: {}",
            self.state.session_id,
            game_state.mode.label()
        );
        self.broadcaster.broadcast_state(game_state.snapshot()).await;
    }

    /// The reply task is never cancelled; a reset makes it stale instead and
    /// `apply_opponent_reply` refuses it.
    fn schedule_reply(&self, reply: PendingReply) {
        let session = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(session.state.reply_delay).await;
            session.play_reply(reply).await;
        });
    }

    async fn play_reply(&self, reply: PendingReply) {
        let mut game_state = self.state.game_state.lock().await;
        let result = {
            let mut rng = self.state.rng.lock().await;
            game_state.apply_opponent_reply(&reply, &mut rng)
        };

        match result {
            Ok(index) => {
                log!(
                    "[session:{}] {} replied at {}",
                    self.state.session_id,
                    game_state.computer_mark(),
                    index
                );
                let snapshot = game_state.snapshot();
                self.notify(&snapshot).await;
            }
            Err(e) => {
                log!("[session:{}] Computer reply discarded: {}", self.state.session_id, e);
            }
        }
    }

    async fn notify(&self, snapshot: &GameSnapshot) {
        self.broadcaster.broadcast_state(*snapshot).await;
        if snapshot.status.is_over() {
            log!(
                "[session:{}] Game over: {}",
                self.state.session_id,
                snapshot.status_text()
            );
            self.broadcaster
                .broadcast_game_over(GameOverNotification::from_snapshot(snapshot))
                .await;
        }
    }
}
