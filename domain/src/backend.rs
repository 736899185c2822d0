use serde::Serialize;
use shared::types::Result;

/// One user turn sent to the receptionist endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub message: String,
    pub session_id: String,
}

/// Seam between the session controller and the wire. The HTTP client lives in
/// the infrastructure crate; tests substitute a scripted implementation.
pub trait ChatBackend: Send + Sync {
    /// Deliver one turn and return the assistant's reply text.
    fn send_turn(&self, turn: &ChatTurn) -> impl std::future::Future<Output = Result<String>> + Send;
}
