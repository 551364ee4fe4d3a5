//! Tests for the donation assistant

use lifeflow::core::ports::OfflineCompletion;
use lifeflow::core::services::chat::{
    EMPTY_REPLY, FAILURE_REPLY, OFFLINE_REPLY, UNCONFIGURED_REPLY,
};
use lifeflow::core::services::faq::local_answer;
use lifeflow::core::services::{ReplySource, reply};

use crate::common::CannedCompletion;

/// Matches no FAQ keyword
const UNKNOWN_QUESTION: &str = "Quartz xylophone?";

#[test]
fn test_faq_wins_over_backend() {
    let backend = CannedCompletion::Answer("from the model".to_string());
    let answer = reply("Is donating blood safe?", &backend);
    assert_eq!(answer.source, ReplySource::Faq);
    assert_eq!(Some(answer.text.as_str()), local_answer("Is donating blood safe?"));
}

#[test]
fn test_unknown_question_goes_to_backend() {
    assert!(local_answer(UNKNOWN_QUESTION).is_none());

    let backend = CannedCompletion::Answer("  A model answer.  ".to_string());
    let answer = reply(UNKNOWN_QUESTION, &backend);
    assert_eq!(answer.source, ReplySource::Model);
    assert_eq!(answer.text, "A model answer.");
}

#[test]
fn test_backend_failures_fall_back() {
    let cases = [
        (CannedCompletion::Unconfigured, UNCONFIGURED_REPLY),
        (CannedCompletion::Broken, FAILURE_REPLY),
        (CannedCompletion::Answer("   ".to_string()), EMPTY_REPLY),
    ];
    for (backend, expected) in cases {
        let answer = reply(UNKNOWN_QUESTION, &backend);
        assert_eq!(answer.source, ReplySource::Fallback);
        assert_eq!(answer.text, expected);
    }
}

#[test]
fn test_offline_backend_lists_topics() {
    let answer = reply(UNKNOWN_QUESTION, &OfflineCompletion);
    assert_eq!(answer.source, ReplySource::Fallback);
    assert_eq!(answer.text, OFFLINE_REPLY);
}
