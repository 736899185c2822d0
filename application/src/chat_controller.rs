//! Session controller for the receptionist chat.
//!
//! Owns the conversation history and the lifecycle of the single in-flight
//! request. Guarantees: at most one outstanding network call, user text is
//! appended before the round trip starts, a displaced request never touches
//! state, and `pending` always returns to false on the path that owns the
//! outcome.

use domain::backend::{ChatBackend, ChatTurn};
use domain::session::{ChatSession, Message};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Shown as the assistant's reply whenever the backend cannot be reached.
pub const FALLBACK_REPLY: &str = "Sorry, I'm having trouble connecting. Please try again.";

/// Minimum spacing between accepted submissions.
pub const SEND_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Text was empty after trimming.
    Empty,
    /// A request is already in flight.
    Busy,
    /// Submitted inside the debounce window.
    Throttled,
}

/// What a `submit` call did. Rejections leave the controller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(RejectReason),
    /// The turn resolved; the reply text (or [`FALLBACK_REPLY`]) was appended.
    Replied(String),
    /// A newer request or a reset displaced this turn; its result was dropped.
    Superseded,
}

struct ControllerState {
    session: ChatSession,
    pending: bool,
    last_send: Option<Instant>,
    generation: u64,
    cancel: Option<CancellationToken>,
}

pub struct ChatController<B: ChatBackend> {
    backend: B,
    state: Mutex<ControllerState>,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: Mutex::new(ControllerState {
                session: ChatSession::new(),
                pending: false,
                last_send: None,
                generation: 0,
                cancel: None,
            }),
        }
    }

    /// Submit one user turn.
    ///
    /// Guards, in order: empty text, request already pending, debounce
    /// window. A failed guard is a no-op. On acceptance the user message is
    /// appended before the network call starts, so it survives any outcome.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let text = text.trim();

        let (turn, generation, token) = {
            let mut state = self.lock_state();
            if text.is_empty() {
                return SubmitOutcome::Rejected(RejectReason::Empty);
            }
            if state.pending {
                return SubmitOutcome::Rejected(RejectReason::Busy);
            }
            let now = Instant::now();
            if let Some(last) = state.last_send {
                if now.duration_since(last) < SEND_DEBOUNCE {
                    return SubmitOutcome::Rejected(RejectReason::Throttled);
                }
            }

            state.session.push_user(text);
            state.pending = true;
            state.last_send = Some(now);
            state.generation += 1;

            // Latest request wins: displace whatever is still outstanding
            // before this turn goes on the wire.
            if let Some(previous) = state.cancel.take() {
                previous.cancel();
            }
            let token = CancellationToken::new();
            state.cancel = Some(token.clone());

            let turn = ChatTurn {
                message: text.to_string(),
                session_id: state.session.id.clone(),
            };
            (turn, state.generation, token)
        };

        let result = tokio::select! {
            _ = token.cancelled() => {
                debug!("chat turn cancelled in flight");
                return SubmitOutcome::Superseded;
            }
            result = self.backend.send_turn(&turn) => result,
        };

        let mut state = self.lock_state();
        if state.generation != generation {
            // The resolution arrived late; a newer turn owns the outcome.
            return SubmitOutcome::Superseded;
        }

        let reply = match result {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, "chat turn failed");
                FALLBACK_REPLY.to_string()
            }
        };
        state.session.push_assistant(&reply);
        state.pending = false;
        state.cancel = None;
        SubmitOutcome::Replied(reply)
    }

    /// Abandon the current conversation: cancel anything in flight and start
    /// over with a fresh session identity and the greeting alone.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        if let Some(token) = state.cancel.take() {
            token.cancel();
        }
        state.generation += 1;
        state.session = ChatSession::new();
        state.pending = false;
        state.last_send = None;
    }

    pub fn session_id(&self) -> String {
        self.lock_state().session.id.clone()
    }

    pub fn history(&self) -> Vec<Message> {
        self.lock_state().session.messages.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.lock_state().pending
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
