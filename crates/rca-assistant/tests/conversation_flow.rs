//! End-to-end behaviour of the conversation store under a paused clock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use rca_assistant::bundles::FALLBACK_TEXT;
use rca_assistant::{Conversation, ConversationOptions, SubmitOutcome};
use rca_core::enums::Role;

const DELAY: Duration = Duration::from_millis(1500);

fn conversation() -> Conversation {
    Conversation::new(ConversationOptions {
        response_delay: DELAY,
        ..ConversationOptions::default()
    })
}

fn roles_and_texts(conversation: &Conversation) -> Vec<(Role, String)> {
    conversation
        .turns()
        .into_iter()
        .map(|turn| (turn.role, turn.text))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn reply_lands_after_the_delay() {
    let conversation = conversation();
    let outcome = conversation.submit("What incidents happened in the last 24 hours?");
    assert!(outcome.is_accepted());
    assert!(conversation.is_pending());
    assert_eq!(conversation.len(), 2);

    tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
    assert!(conversation.is_pending());
    assert_eq!(conversation.len(), 2);

    conversation.settled().await;
    assert!(!conversation.is_pending());
    assert_eq!(conversation.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn incident_question_end_to_end() {
    let conversation = conversation();
    conversation.submit("What incidents happened in the last 24 hours?");
    conversation.settled().await;

    let last = conversation.last_turn().expect("assistant reply");
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(
        last.attachment_titles(),
        [
            "Snowflake Query Performance Degradation",
            "Authentication Service Latency",
            "Payment Gateway Timeout",
        ]
    );
    let confidences: Vec<u8> = last.attachments.iter().map(|item| item.confidence).collect();
    assert_eq!(confidences, [95, 87, 92]);
}

#[tokio::test(start_paused = true)]
async fn sequential_submissions_never_interleave() {
    let conversation = conversation();
    conversation.submit("x");
    conversation.settled().await;
    conversation.submit("y");
    conversation.settled().await;

    let turns = roles_and_texts(&conversation);
    assert_eq!(turns.len(), 5);
    assert_eq!(
        turns.iter().map(|(role, _)| *role).collect::<Vec<_>>(),
        [
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant
        ]
    );
    assert_eq!(turns[1].1, "x");
    assert_eq!(turns[2].1, FALLBACK_TEXT);
    assert_eq!(turns[3].1, "y");
    assert_eq!(turns[4].1, FALLBACK_TEXT);
}

#[tokio::test(start_paused = true)]
async fn blank_submissions_change_nothing() {
    let conversation = conversation();
    let before = conversation.turns();

    assert_eq!(conversation.submit(""), SubmitOutcome::RejectedBlank);
    assert_eq!(conversation.submit("   "), SubmitOutcome::RejectedBlank);
    assert_eq!(conversation.submit("\t\n"), SubmitOutcome::RejectedBlank);

    assert_eq!(conversation.turns(), before);
    assert!(!conversation.is_pending());
}

#[tokio::test(start_paused = true)]
async fn blank_submission_while_pending_keeps_pending() {
    let conversation = conversation();
    conversation.submit("a");
    assert_eq!(conversation.submit(" "), SubmitOutcome::RejectedBlank);
    assert!(conversation.is_pending());
    conversation.settled().await;
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_pending_is_ignored() {
    let conversation = conversation();
    assert!(conversation.submit("a").is_accepted());
    assert_eq!(conversation.submit("a"), SubmitOutcome::RejectedPending);
    assert_eq!(
        conversation.submit("something else"),
        SubmitOutcome::RejectedPending
    );

    let user_turns = conversation
        .turns()
        .iter()
        .filter(|turn| turn.role == Role::User)
        .count();
    assert_eq!(user_turns, 1);

    conversation.settled().await;
    assert_eq!(conversation.len(), 3);
    assert!(conversation.submit("a").is_accepted());
    conversation.settled().await;
    assert_eq!(conversation.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn turn_ids_and_timestamps_follow_creation_order() {
    let conversation = conversation();
    conversation.submit("Why did latency spike at 12:30?");
    conversation.settled().await;
    conversation.submit("What's the MTTR trend this week?");
    conversation.settled().await;

    let turns = conversation.turns();
    let ids: Vec<&str> = turns.iter().map(|turn| turn.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "trn-000001",
            "trn-000002",
            "trn-000003",
            "trn-000004",
            "trn-000005"
        ]
    );
    assert!(
        turns
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at)
    );
    assert!(turns.iter().filter(|t| t.role == Role::User).all(|t| t.attachments.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn accepted_outcome_names_the_user_turn() {
    let conversation = conversation();
    let SubmitOutcome::Accepted { turn_id } = conversation.submit("hello") else {
        panic!("submission should be accepted");
    };
    assert_eq!(conversation.turns()[1].id, turn_id);
    conversation.settled().await;
}

#[tokio::test(start_paused = true)]
async fn dropping_the_conversation_does_not_panic_pending_reply() {
    let conversation = conversation();
    conversation.submit("hello");
    drop(conversation);
    tokio::time::sleep(DELAY * 2).await;
}
