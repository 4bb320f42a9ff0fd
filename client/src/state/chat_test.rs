use super::*;
use crate::net::types::PropertyId;

const T0: &str = "2024-03-01T10:00:00.000Z";
const T1: &str = "2024-03-01T10:00:05.000Z";

// =============================================================
// Helpers
// =============================================================

fn reply(message: &str, session_id: &str, properties: Vec<PropertyRecommendation>) -> ChatResponse {
    ChatResponse { message: message.to_owned(), session_id: session_id.to_owned(), properties }
}

fn rec(id: i64, address: &str, description: &str) -> PropertyRecommendation {
    PropertyRecommendation {
        id: PropertyId::Number(id),
        address: address.to_owned(),
        description: description.to_owned(),
        price: None,
        specifications: None,
    }
}

fn voiced(can_listen: bool, can_speak: bool) -> ChatState {
    let mut state = ChatState::default();
    state.set_voice_support(can_listen, can_speak);
    state
}

fn typed(state: &mut ChatState, text: &str) -> Option<OutgoingMessage> {
    state.input = text.to_owned();
    state.submit(T0)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert_eq!(state.phase, ChatPhase::Idle);
    assert_eq!(state.session_id, None);
    assert!(!state.voice_output);
}

#[test]
fn chat_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ChatRole::Agent).unwrap(), serde_json::json!("agent"));
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_appends_user_message_and_awaits() {
    let mut state = ChatState::default();
    let outgoing = typed(&mut state, "  two bedrooms near the park ").unwrap();

    assert_eq!(outgoing, OutgoingMessage { text: "two bedrooms near the park".to_owned(), session_id: None });
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, ChatRole::User);
    assert_eq!(state.messages[0].content, "two bedrooms near the park");
    assert_eq!(state.messages[0].timestamp, T0);
    assert!(state.input.is_empty());
    assert!(state.is_loading());
}

#[test]
fn submit_blank_input_is_noop() {
    let mut state = ChatState::default();
    assert_eq!(typed(&mut state, ""), None);
    assert_eq!(typed(&mut state, "   \t\n"), None);
    assert!(state.messages.is_empty());
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn submit_while_awaiting_is_rejected() {
    let mut state = ChatState::default();
    typed(&mut state, "first").unwrap();
    assert_eq!(typed(&mut state, "second"), None);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.input, "second");
}

#[test]
fn submit_clears_stale_recommendations_and_error() {
    let mut state = ChatState::default();
    typed(&mut state, "hi").unwrap();
    state.receive_reply(reply("here", "s1", vec![rec(1, "12 Oak St", "2BR")]), T1);
    typed(&mut state, "again").unwrap();
    state.receive_failure(&ApiError::HttpStatus { status: 500 }, T1);
    assert!(state.error.is_some());

    typed(&mut state, "third").unwrap();
    assert!(state.recommendations.is_empty());
    assert_eq!(state.error, None);
}

#[test]
fn can_submit_tracks_input_and_loading() {
    let mut state = ChatState::default();
    assert!(!state.can_submit());
    state.input = "hello".to_owned();
    assert!(state.can_submit());
    state.submit(T0);
    state.input = "queued".to_owned();
    assert!(!state.can_submit());
}

// =============================================================
// Replies
// =============================================================

#[test]
fn completed_turn_adds_exactly_two_messages() {
    let mut state = ChatState::default();
    typed(&mut state, "hello").unwrap();
    state.receive_reply(reply("Hi there", "s1", vec![]), T1);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, ChatRole::Agent);

    typed(&mut state, "again").unwrap();
    state.receive_failure(&ApiError::Transport("offline".to_owned()), T1);
    assert_eq!(state.messages.len(), 4);
    assert_eq!(state.messages[3].role, ChatRole::System);
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn first_reply_sets_session_and_later_requests_reuse_it() {
    let mut state = ChatState::default();
    typed(&mut state, "one").unwrap();
    state.receive_reply(reply("ok", "sess-123", vec![]), T1);
    assert_eq!(state.session_id.as_deref(), Some("sess-123"));

    let outgoing = typed(&mut state, "two").unwrap();
    assert_eq!(outgoing.session_id.as_deref(), Some("sess-123"));

    state.receive_reply(reply("ok", "sess-other", vec![]), T1);
    assert_eq!(state.session_id.as_deref(), Some("sess-123"));
}

#[test]
fn recommendations_replace_previous_turn() {
    let mut state = ChatState::default();
    typed(&mut state, "one").unwrap();
    state.receive_reply(reply("first", "s1", vec![rec(1, "1 Pine", "Studio"), rec(2, "2 Pine", "Loft")]), T1);
    assert_eq!(state.recommendations.len(), 2);

    typed(&mut state, "two").unwrap();
    state.receive_reply(reply("Try this one", "s1", vec![rec(1, "12 Oak St", "2BR")]), T1);
    assert_eq!(state.recommendations.len(), 1);
    assert_eq!(state.recommendations[0].address, "12 Oak St");
    assert_eq!(state.recommendations[0].description, "2BR");
}

#[test]
fn reply_without_recommendations_leaves_list_empty() {
    let mut state = ChatState::default();
    typed(&mut state, "one").unwrap();
    state.receive_reply(reply("nothing matches", "s1", vec![]), T1);
    assert!(state.recommendations.is_empty());
}

#[test]
fn reply_when_not_awaiting_is_ignored() {
    let mut state = ChatState::default();
    assert_eq!(state.receive_reply(reply("late", "s1", vec![]), T1), None);
    assert!(state.messages.is_empty());
    assert_eq!(state.session_id, None);
}

// =============================================================
// Error classification
// =============================================================

#[test]
fn transport_failure_reads_as_connection_problem() {
    assert_eq!(classify_failure(&ApiError::Transport("dns".to_owned())), CONNECT_FAILED_TEXT);
}

#[test]
fn rate_limit_reads_as_too_many_messages() {
    let mut state = ChatState::default();
    typed(&mut state, "spam").unwrap();
    state.receive_failure(&ApiError::HttpStatus { status: 429 }, T1);
    let last = state.messages.last().unwrap();
    assert_eq!(last.content, RATE_LIMITED_TEXT);
    assert!(last.content.contains("too many messages"));
    assert_eq!(state.error.as_deref(), Some(RATE_LIMITED_TEXT));
}

#[test]
fn other_failures_read_as_generic_retry() {
    assert_eq!(classify_failure(&ApiError::HttpStatus { status: 500 }), GENERIC_FAILURE_TEXT);
    assert_eq!(classify_failure(&ApiError::HttpStatus { status: 404 }), GENERIC_FAILURE_TEXT);
    assert_eq!(classify_failure(&ApiError::Decode("eof".to_owned())), GENERIC_FAILURE_TEXT);
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_keeps_session_and_empties_log() {
    let mut state = ChatState::default();
    typed(&mut state, "one").unwrap();
    state.receive_reply(reply("here", "sess-123", vec![rec(1, "12 Oak St", "2BR")]), T1);

    assert!(state.clear());
    assert!(state.messages.is_empty());
    assert!(state.recommendations.is_empty());
    assert_eq!(state.session_id.as_deref(), Some("sess-123"));

    let outgoing = typed(&mut state, "after clear").unwrap();
    assert_eq!(outgoing.session_id.as_deref(), Some("sess-123"));
}

#[test]
fn clear_is_refused_while_awaiting() {
    let mut state = ChatState::default();
    typed(&mut state, "one").unwrap();
    assert!(!state.clear());
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// Voice input
// =============================================================

#[test]
fn toggle_listening_without_recognition_is_ignored() {
    let mut state = voiced(false, false);
    assert_eq!(state.toggle_listening(), ListenCommand::Ignore);
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn toggle_listening_starts_and_stops_capture() {
    let mut state = voiced(true, false);
    assert_eq!(state.toggle_listening(), ListenCommand::Start);
    assert!(state.is_listening());
    assert_eq!(state.toggle_listening(), ListenCommand::Stop);
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn toggle_listening_while_awaiting_is_ignored() {
    let mut state = voiced(true, false);
    typed(&mut state, "one").unwrap();
    assert_eq!(state.toggle_listening(), ListenCommand::Ignore);
    assert!(state.is_loading());
}

#[test]
fn transcript_fills_input_for_auto_submit() {
    let mut state = voiced(true, false);
    state.toggle_listening();
    assert!(state.receive_transcript(" three bedrooms in Austin "));
    assert_eq!(state.input, "three bedrooms in Austin");
    assert_eq!(state.phase, ChatPhase::Idle);

    let outgoing = state.submit(T0).unwrap();
    assert_eq!(outgoing.text, "three bedrooms in Austin");
}

#[test]
fn transcript_outside_listening_is_dropped() {
    let mut state = voiced(true, false);
    assert!(!state.receive_transcript("stray"));
    assert!(state.input.is_empty());
}

#[test]
fn blank_transcript_does_not_submit() {
    let mut state = voiced(true, false);
    state.toggle_listening();
    assert!(!state.receive_transcript("  "));
    assert_eq!(state.phase, ChatPhase::Idle);
}

#[test]
fn recognition_end_returns_to_idle() {
    let mut state = voiced(true, false);
    state.toggle_listening();
    state.listening_stopped();
    assert_eq!(state.phase, ChatPhase::Idle);
}

// =============================================================
// Voice output
// =============================================================

#[test]
fn replies_are_spoken_only_when_enabled_and_supported() {
    let mut state = voiced(false, true);
    typed(&mut state, "one").unwrap();
    assert_eq!(state.receive_reply(reply("quiet", "s1", vec![]), T1), None);

    assert!(state.toggle_voice_output());
    typed(&mut state, "two").unwrap();
    assert_eq!(state.receive_reply(reply("loud", "s1", vec![]), T1).as_deref(), Some("loud"));

    typed(&mut state, "three").unwrap();
    assert_eq!(
        state.receive_failure(&ApiError::Transport("x".to_owned()), T1).as_deref(),
        Some(CONNECT_FAILED_TEXT)
    );
}

#[test]
fn voice_output_stays_off_without_synthesis() {
    let mut state = voiced(true, false);
    assert!(!state.toggle_voice_output());
    assert!(!state.voice_output);
}

#[test]
fn losing_synthesis_turns_voice_output_off() {
    let mut state = voiced(true, true);
    assert!(state.toggle_voice_output());
    state.toggle_listening();

    state.set_voice_support(false, false);
    assert!(!state.voice_output);
    assert_eq!(state.phase, ChatPhase::Idle);
}
