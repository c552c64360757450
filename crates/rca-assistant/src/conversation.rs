//! Append-only chat transcript with single-flight submissions.
//!
//! ```text
//! idle ──submit(text)──▶ pending ──delay elapses──▶ idle
//!  │                        │
//!  └─ blank text: no-op     └─ submit(_): no-op
//! ```
//!
//! A conversation starts with one assistant greeting turn. Each accepted
//! submission appends a user turn, then after the configured delay the
//! classifier reply is appended as an assistant turn. Turns are never edited,
//! removed, or reordered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;
use rca_config::{AssistantConfig, DEFAULT_GREETING};
use rca_core::entities::ChatTurn;
use rca_core::ids::{PREFIX_CONVERSATION, PREFIX_TURN, format_id};
use rca_core::responses::TranscriptResponse;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::classifier::Classifier;
use crate::schedule::ScheduledTask;

static NEXT_CONVERSATION: AtomicU64 = AtomicU64::new(1);

/// Construction parameters for a [`Conversation`].
#[derive(Debug, Clone)]
pub struct ConversationOptions {
    /// Simulated latency before the assistant reply lands.
    pub response_delay: Duration,
    /// Text of the seed turn.
    pub greeting: String,
    pub classifier: Classifier,
}

impl Default for ConversationOptions {
    fn default() -> Self {
        Self::from(&AssistantConfig::default())
    }
}

impl From<&AssistantConfig> for ConversationOptions {
    fn from(config: &AssistantConfig) -> Self {
        Self {
            response_delay: config.response_delay(),
            greeting: config.greeting.clone(),
            classifier: Classifier::default(),
        }
    }
}

/// What [`Conversation::submit`] did with its input.
///
/// Rejections are silent: nothing in the transcript changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A user turn with this ID was appended and a reply is scheduled.
    Accepted { turn_id: String },
    /// Text was empty or whitespace only.
    RejectedBlank,
    /// A reply is still outstanding.
    RejectedPending,
    /// No Tokio runtime to schedule the reply on.
    RejectedNoRuntime,
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[derive(Debug)]
struct State {
    turns: Vec<ChatTurn>,
    next_turn: u64,
    pending: bool,
    in_flight: Option<ScheduledTask>,
}

impl State {
    fn next_turn_id(&mut self) -> String {
        let id = format_id(PREFIX_TURN, self.next_turn);
        self.next_turn += 1;
        id
    }
}

#[derive(Debug)]
struct Shared {
    id: String,
    response_delay: Duration,
    classifier: Classifier,
    state: Mutex<State>,
    pending_tx: watch::Sender<bool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Timer callback: append the assistant reply and clear the pending flag.
    fn complete(&self, query: &str) {
        let reply = self.classifier.classify(query);
        let mut state = self.lock();
        let id = state.next_turn_id();
        tracing::info!(
            conversation = %self.id,
            turn = %id,
            topic = reply.topic.map_or("fallback", |topic| topic.as_str()),
            cards = reply.attachments.len(),
            "assistant reply appended"
        );
        state
            .turns
            .push(ChatTurn::assistant(id, reply.text, reply.attachments, Utc::now()));
        state.pending = false;
        state.in_flight = None;
        self.pending_tx.send_replace(false);
    }
}

/// One chat session. Lives as long as its owner and is never persisted.
#[derive(Debug)]
pub struct Conversation {
    shared: Arc<Shared>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ConversationOptions::default())
    }
}

impl Conversation {
    /// Create a conversation holding only the greeting turn.
    #[must_use]
    pub fn new(options: ConversationOptions) -> Self {
        let id = format_id(
            PREFIX_CONVERSATION,
            NEXT_CONVERSATION.fetch_add(1, Ordering::Relaxed),
        );
        let (pending_tx, _) = watch::channel(false);
        let mut state = State {
            turns: Vec::new(),
            next_turn: 1,
            pending: false,
            in_flight: None,
        };
        let greeting = if options.greeting.trim().is_empty() {
            DEFAULT_GREETING
        } else {
            options.greeting.as_str()
        };
        Self::seed(&mut state, greeting);
        tracing::debug!(conversation = %id, "conversation created");

        Self {
            shared: Arc::new(Shared {
                id,
                response_delay: options.response_delay,
                classifier: options.classifier,
                state: Mutex::new(state),
                pending_tx,
            }),
        }
    }

    /// Append the greeting. Runs once, before the conversation is shared.
    fn seed(state: &mut State, greeting: &str) {
        let id = state.next_turn_id();
        state
            .turns
            .push(ChatTurn::assistant(id, greeting, Vec::new(), Utc::now()));
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.shared.id
    }

    /// Submit user text.
    ///
    /// Blank text, or any text while a reply is outstanding, is ignored.
    /// Otherwise the user turn is appended immediately and the reply is
    /// scheduled on the current Tokio runtime; this never waits for it.
    /// Outside a runtime nothing is appended.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            tracing::debug!(conversation = %self.shared.id, "ignoring blank submission");
            return SubmitOutcome::RejectedBlank;
        }
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!(conversation = %self.shared.id, "submit called outside a Tokio runtime; ignoring");
            return SubmitOutcome::RejectedNoRuntime;
        };

        let mut state = self.shared.lock();
        if state.pending {
            tracing::debug!(conversation = %self.shared.id, "ignoring submission while a reply is pending");
            return SubmitOutcome::RejectedPending;
        }

        let turn_id = state.next_turn_id();
        state
            .turns
            .push(ChatTurn::user(turn_id.clone(), text, Utc::now()));
        state.pending = true;
        self.shared.pending_tx.send_replace(true);

        let shared = Arc::clone(&self.shared);
        let query = text.to_string();
        state.in_flight = Some(ScheduledTask::after(&runtime, self.shared.response_delay, move || {
            shared.complete(&query);
        }));
        tracing::debug!(
            conversation = %self.shared.id,
            turn = %turn_id,
            delay = ?self.shared.response_delay,
            "submission accepted"
        );

        SubmitOutcome::Accepted { turn_id }
    }

    /// Snapshot of every turn, oldest first.
    #[must_use]
    pub fn turns(&self) -> Vec<ChatTurn> {
        self.shared.lock().turns.clone()
    }

    #[must_use]
    pub fn last_turn(&self) -> Option<ChatTurn> {
        self.shared.lock().turns.last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.lock().turns.len()
    }

    /// Always false: the greeting is present from creation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().turns.is_empty()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.shared.lock().pending
    }

    /// Resolve once no reply is outstanding. Returns immediately when idle.
    pub async fn settled(&self) {
        let mut rx = self.shared.pending_tx.subscribe();
        // The sender lives in `shared`, which `self` keeps alive.
        let _ = rx.wait_for(|pending| !*pending).await;
    }

    /// Transcript shape used by `rca chat`.
    #[must_use]
    pub fn snapshot(&self) -> TranscriptResponse {
        let state = self.shared.lock();
        TranscriptResponse {
            conversation_id: self.shared.id.clone(),
            turns: state.turns.clone(),
            pending: state.pending,
        }
    }
}
