use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{broadcast, RwLock};
use tokio::time::{sleep, Instant};
use uuid::Uuid;

use crate::api::ws_types::{ChatEvent, WsMessage};
use crate::intelligence::chatbot::{self, GREETING};
use crate::models::ChatMessage;

/// Cosmetic "typing" pause before the assistant's reply is appended.
pub const REPLY_DELAY: Duration = Duration::from_millis(500);

/// Live sessions kept in memory. Creating one more evicts the session that
/// has been idle the longest.
pub const MAX_SESSIONS: usize = 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("chat session {0} not found")]
    SessionNotFound(Uuid),

    #[error("message is empty")]
    EmptyMessage,
}

/// Append-only conversation, opened with the assistant greeting.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    last_active: Instant,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            last_active: Instant::now(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.last_active = Instant::now();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

/// In-memory chat sessions, one transcript each, capped at `max_sessions`.
#[derive(Clone)]
pub struct ChatSessions {
    sessions: Arc<RwLock<HashMap<Uuid, ChatTranscript>>>,
    events: broadcast::Sender<WsMessage>,
    reply_delay: Duration,
    max_sessions: usize,
}

impl ChatSessions {
    pub fn new(events: broadcast::Sender<WsMessage>, reply_delay: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            events,
            reply_delay,
            max_sessions: MAX_SESSIONS,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    pub async fn create(&self) -> (Uuid, Vec<ChatMessage>) {
        let id = Uuid::new_v4();
        let transcript = ChatTranscript::new();
        let messages = transcript.messages().to_vec();
        {
            let mut sessions = self.sessions.write().await;
            while sessions.len() >= self.max_sessions {
                let Some(idle) = sessions
                    .iter()
                    .min_by_key(|(_, t)| t.last_active)
                    .map(|(id, _)| *id)
                else {
                    break;
                };
                sessions.remove(&idle);
                metrics::counter!("chat_sessions_evicted_total").increment(1);
                tracing::debug!(session = %idle, "Idle chat session evicted");
            }
            sessions.insert(id, transcript);
        }
        tracing::debug!(session = %id, "Chat session created");
        (id, messages)
    }

    pub async fn transcript(&self, id: Uuid) -> Option<Vec<ChatMessage>> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|t| t.messages().to_vec())
    }

    /// Append the user's message now and schedule the canned reply after the
    /// reply delay. Returns the appended user message.
    pub async fn send(&self, id: Uuid, text: &str) -> Result<ChatMessage, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let user_msg = ChatMessage::user(text);
        {
            let mut sessions = self.sessions.write().await;
            let transcript = sessions.get_mut(&id).ok_or(ChatError::SessionNotFound(id))?;
            transcript.push(user_msg.clone());
        }
        metrics::counter!("chat_messages_total").increment(1);
        self.publish(id, user_msg.clone());

        let reply = chatbot::respond(text);
        tracing::debug!(
            session = %id,
            topic = chatbot::match_topic(text).map(|t| t.as_str()).unwrap_or("default"),
            "Chat reply scheduled"
        );

        let this = self.clone();
        tokio::spawn(async move {
            sleep(this.reply_delay).await;
            let bot_msg = ChatMessage::assistant(reply);
            if let Some(transcript) = this.sessions.write().await.get_mut(&id) {
                transcript.push(bot_msg.clone());
            }
            this.publish(id, bot_msg);
        });

        Ok(user_msg)
    }

    fn publish(&self, session_id: Uuid, message: ChatMessage) {
        let _ = self
            .events
            .send(WsMessage::ChatMessage(ChatEvent { session_id, message }));
    }
}
