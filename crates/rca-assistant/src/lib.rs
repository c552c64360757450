//! # rca-assistant
//!
//! The scripted side of the RCA assistant:
//! - [`classifier`]: ordered keyword rules mapping a query to a canned reply
//! - [`bundles`]: the canned replies themselves
//! - [`conversation`]: the append-only transcript with single-flight submissions
//! - [`schedule`]: deferred, cancellable completion tasks
//! - [`samples`]: suggested queries and the deep-analysis prefill
//! - [`catalog`]: static incidents, service cards, and the latency series
//! - [`analysis`]: the canned root-cause walkthrough for the latency spike

pub mod analysis;
pub mod bundles;
pub mod catalog;
pub mod classifier;
pub mod conversation;
pub mod samples;
pub mod schedule;

pub use classifier::{Classifier, KeywordRule, Reply, Topic, classify};
pub use conversation::{Conversation, ConversationOptions, SubmitOutcome};
pub use schedule::ScheduledTask;
