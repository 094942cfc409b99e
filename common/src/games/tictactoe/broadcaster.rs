use std::future::Future;
use tokio::sync::mpsc;

use super::board::Board;
use super::game_state::GameSnapshot;
use super::types::{GameStatus, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverNotification {
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub board: Board,
    pub generation: u64,
}

impl GameOverNotification {
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            status: snapshot.status,
            winning_line: snapshot.winning_line(),
            board: snapshot.board,
            generation: snapshot.generation,
        }
    }
}

/// Receives every state change of a session.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    State(GameSnapshot),
    GameOver(GameOverNotification),
}

/// Forwards session events into an unbounded channel.
#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: mpsc::UnboundedSender<SessionEvent>,
}

impl ChannelBroadcaster {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, event: SessionEvent) {
        if self.sender.send(event).is_err() {
            crate::log_debug!("Session event dropped: receiver is gone");
        }
    }
}

impl GameBroadcaster for ChannelBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        self.send(SessionEvent::State(snapshot));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.send(SessionEvent::GameOver(notification));
    }
}
