//! The assessment wizard engine.
//!
//! Owns the ordered question list, the current position, the accumulated
//! answers and the submission flag. Navigation, value access and the
//! persistence side-effect all live here; rendering does not. The engine
//! touches no browser APIs, so it runs (and is tested) on the host target
//! with an in-memory store.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use super::catalogue::{FieldPath, Question, QuestionKind};
use super::storage::{ProgressStore, SavedProgress};

/// Unset scale questions read as the midpoint of the 1-10 range.
pub const SCALE_MIDPOINT: u8 = 5;

/// A single answer: free text (also single-choice values), a 1-10 scale
/// number, or the selected values of a multi-choice question.
///
/// Untagged so the persisted JSON stays plain: strings, numbers and
/// arrays rather than enum wrappers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Scale(u8),
    Selection(Vec<String>),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_scale(&self) -> Option<u8> {
        match self {
            Self::Scale(score) => Some(*score),
            _ => None,
        }
    }

    pub fn as_selection(&self) -> Option<&[String]> {
        match self {
            Self::Selection(items) => Some(items),
            _ => None,
        }
    }

    /// Blank means "nothing to submit": whitespace-only text or an empty
    /// selection. A scale always carries a value.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Selection(items) => items.is_empty(),
            Self::Scale(_) => false,
        }
    }

    /// Toggle a multi-choice option, preserving selection order for the
    /// remaining items. Non-selection values restart from an empty list.
    pub fn toggled(self, choice: &str) -> Self {
        let mut items = match self {
            Self::Selection(items) => items,
            _ => Vec::new(),
        };
        if items.iter().any(|item| item == choice) {
            items.retain(|item| item != choice);
        } else {
            items.push(choice.to_string());
        }
        Self::Selection(items)
    }
}

/// A top-level entry of the answer record: either a value or one level of
/// grouped child values (for `group.field` question ids).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerEntry {
    Value(AnswerValue),
    Group(BTreeMap<String, AnswerValue>),
}

/// Sparse mapping from top-level key to answer. Keys appear lazily as
/// questions are answered; a missing key means "unanswered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord {
    entries: BTreeMap<String, AnswerEntry>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the value at a path. Total: missing keys, missing groups and
    /// shape mismatches all read as `None`.
    pub fn get(&self, path: &FieldPath) -> Option<&AnswerValue> {
        match path {
            FieldPath::Flat(key) => match self.entries.get(*key) {
                Some(AnswerEntry::Value(value)) => Some(value),
                _ => None,
            },
            FieldPath::Nested { group, field } => match self.entries.get(*group) {
                Some(AnswerEntry::Group(children)) => children.get(*field),
                _ => None,
            },
        }
    }

    /// Produce a new record with `value` written at `path`, creating the
    /// intermediate group for nested paths. The receiver is untouched, so
    /// every committed change is an atomic replacement.
    pub fn with(&self, path: &FieldPath, value: AnswerValue) -> Self {
        let mut next = self.clone();
        match path {
            FieldPath::Flat(key) => {
                next.entries.insert((*key).to_string(), AnswerEntry::Value(value));
            }
            FieldPath::Nested { group, field } => {
                let entry = next
                    .entries
                    .entry((*group).to_string())
                    .or_insert_with(|| AnswerEntry::Group(BTreeMap::new()));
                if !matches!(entry, AnswerEntry::Group(_)) {
                    *entry = AnswerEntry::Group(BTreeMap::new());
                }
                if let AnswerEntry::Group(children) = entry {
                    children.insert((*field).to_string(), value);
                }
            }
        }
        next
    }
}

/// Result of an attempted forward navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Moved to the next question.
    Advanced,
    /// The last question was active: the engine is now in the submitting
    /// state and the caller must run the hand-off, then settle it with
    /// [`WizardEngine::finish_submit`].
    SubmitStarted,
    /// Navigation blocked (validation failed, or a submission is already in
    /// flight). Carries the inline message to show, when validation has one.
    Rejected { message: Option<String> },
}

pub struct WizardEngine<S: ProgressStore> {
    questions: Vec<Question>,
    position: usize,
    answers: AnswerRecord,
    submitting: bool,
    store: S,
}

impl<S: ProgressStore + Clone> Clone for WizardEngine<S> {
    fn clone(&self) -> Self {
        Self {
            questions: self.questions.clone(),
            position: self.position,
            answers: self.answers.clone(),
            submitting: self.submitting,
            store: self.store.clone(),
        }
    }
}

impl<S: ProgressStore> WizardEngine<S> {
    /// Open the wizard: adopt persisted in-progress state when present and
    /// well-formed, otherwise start at the first question with an empty
    /// record. `questions` must be non-empty.
    pub fn new(questions: Vec<Question>, store: S) -> Self {
        debug_assert!(!questions.is_empty(), "question catalogue is empty");
        let restored = store.load().filter(|saved| {
            let in_bounds = saved.position < questions.len();
            if !in_bounds {
                warn!(
                    "discarding saved assessment progress with out-of-range step {}",
                    saved.position
                );
            }
            in_bounds
        });
        let (position, answers) = match restored {
            Some(saved) => (saved.position, saved.answers),
            None => (0, AnswerRecord::new()),
        };
        Self { questions, position, answers, submitting: false, store }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn current(&self) -> &Question {
        &self.questions[self.position]
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    /// The current question's value, falling back to the kind-appropriate
    /// default when unanswered. Never fails for a missing path.
    pub fn value(&self) -> AnswerValue {
        let question = self.current();
        self.answers
            .get(&question.path)
            .cloned()
            .unwrap_or_else(|| default_for(question.kind))
    }

    /// Write the current question's value and persist the new state.
    pub fn set_value(&mut self, value: AnswerValue) {
        self.answers = self.answers.with(&self.current().path, value);
        self.persist();
    }

    /// Whether forward navigation is allowed right now.
    ///
    /// Layering: a required blank value blocks first; text kinds then
    /// require non-blank input regardless of the `required` flag or any
    /// validator; remaining kinds defer to their validator; everything else
    /// may always advance.
    pub fn can_advance(&self) -> bool {
        let question = self.current();
        let value = self.value();
        if question.required && value.is_blank() {
            return false;
        }
        if question.kind.is_text() {
            return !value.is_blank();
        }
        if let Some(validate) = question.validate {
            return validate(&value).is_none();
        }
        true
    }

    /// One primary action: move forward, or start the submission when the
    /// last question is active. Ignored while a submission is in flight.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.submitting {
            return AdvanceOutcome::Rejected { message: None };
        }
        if !self.can_advance() {
            let message = self.current().validate.and_then(|validate| validate(&self.value()));
            return AdvanceOutcome::Rejected { message };
        }
        if self.position + 1 < self.questions.len() {
            self.position += 1;
            self.persist();
            AdvanceOutcome::Advanced
        } else {
            self.submitting = true;
            AdvanceOutcome::SubmitStarted
        }
    }

    /// Step back one question. No-op at the first question; never touches
    /// the answers.
    pub fn retreat(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.persist();
        }
    }

    /// Settle the submission started by [`advance`](Self::advance). Success
    /// clears the persisted progress; failure leaves it (and the in-memory
    /// state) in place so the user can retry.
    pub fn finish_submit(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.store.clear();
        }
    }

    fn persist(&self) {
        if !self.answers.is_empty() {
            self.store.save(&SavedProgress {
                position: self.position,
                answers: self.answers.clone(),
            });
        }
    }
}

fn default_for(kind: QuestionKind) -> AnswerValue {
    match kind {
        QuestionKind::MultiChoice => AnswerValue::Selection(Vec::new()),
        QuestionKind::Scale => AnswerValue::Scale(SCALE_MIDPOINT),
        _ => AnswerValue::Text(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::storage::MemoryProgressStore;

    fn three_step_flow() -> Vec<Question> {
        vec![
            Question::new("intro", QuestionKind::Intro, "Welcome"),
            Question::new("name", QuestionKind::ShortText, "Your name?").required(),
            Question::new("completion", QuestionKind::Completion, "Thanks"),
        ]
    }

    fn every_kind_flow() -> Vec<Question> {
        vec![
            Question::new("intro", QuestionKind::Intro, "Welcome"),
            Question::new("contact.name", QuestionKind::ShortText, "Name"),
            Question::new("story", QuestionKind::LongText, "Story"),
            Question::new("pick.one", QuestionKind::SingleChoice, "Pick"),
            Question::new("pick_many", QuestionKind::MultiChoice, "Pick many"),
            Question::new("score.value", QuestionKind::Scale, "Score"),
            Question::new("completion", QuestionKind::Completion, "Thanks"),
        ]
    }

    #[test]
    fn value_is_total_for_every_position() {
        let mut engine = WizardEngine::new(every_kind_flow(), MemoryProgressStore::new());
        for _ in 0..engine.len() {
            // Nothing answered anywhere: every read must yield the kind default.
            let value = engine.value();
            match engine.current().kind {
                QuestionKind::MultiChoice => assert_eq!(value, AnswerValue::Selection(vec![])),
                QuestionKind::Scale => assert_eq!(value, AnswerValue::Scale(SCALE_MIDPOINT)),
                _ => assert_eq!(value, AnswerValue::Text(String::new())),
            }
            if engine.position() + 1 < engine.len() {
                engine.position += 1;
            }
        }
    }

    #[test]
    fn missing_paths_read_as_none() {
        let record = AnswerRecord::new();
        assert_eq!(record.get(&FieldPath::Flat("surprises")), None);
        assert_eq!(
            record.get(&FieldPath::Nested { group: "contact", field: "name" }),
            None
        );

        // A group that exists without the requested child is still a miss.
        let record = record.with(
            &FieldPath::Nested { group: "contact", field: "email" },
            AnswerValue::Text("a@b.co".into()),
        );
        assert_eq!(
            record.get(&FieldPath::Nested { group: "contact", field: "name" }),
            None
        );
    }

    #[test]
    fn set_then_get_round_trips_flat_and_nested() {
        let mut engine = WizardEngine::new(every_kind_flow(), MemoryProgressStore::new());

        engine.position = 1; // contact.name (nested)
        engine.set_value(AnswerValue::Text("Ann".into()));
        assert_eq!(engine.value(), AnswerValue::Text("Ann".into()));

        engine.position = 4; // pick_many (flat)
        engine.set_value(AnswerValue::Selection(vec!["a".into(), "b".into()]));
        assert_eq!(
            engine.value(),
            AnswerValue::Selection(vec!["a".into(), "b".into()])
        );

        // The nested write above survived the flat write.
        engine.position = 1;
        assert_eq!(engine.value(), AnswerValue::Text("Ann".into()));
    }

    #[test]
    fn writes_replace_the_record_instead_of_mutating_it() {
        let before = AnswerRecord::new().with(
            &FieldPath::Flat("surprises"),
            AnswerValue::Text("none".into()),
        );
        let after = before.with(
            &FieldPath::Nested { group: "contact", field: "name" },
            AnswerValue::Text("Ann".into()),
        );
        assert_eq!(
            before.get(&FieldPath::Nested { group: "contact", field: "name" }),
            None
        );
        assert!(after.get(&FieldPath::Flat("surprises")).is_some());
    }

    #[test]
    fn retreat_at_first_question_is_a_no_op() {
        let mut engine = WizardEngine::new(three_step_flow(), MemoryProgressStore::new());
        engine.retreat();
        assert_eq!(engine.position(), 0);
    }

    #[test]
    fn required_text_blocks_until_filled() {
        let mut engine = WizardEngine::new(three_step_flow(), MemoryProgressStore::new());
        assert!(matches!(engine.advance(), AdvanceOutcome::Advanced)); // intro gates nothing
        assert!(!engine.can_advance());
        engine.set_value(AnswerValue::Text("   ".into()));
        assert!(!engine.can_advance(), "whitespace-only text is still blank");
        engine.set_value(AnswerValue::Text("Jane".into()));
        assert!(engine.can_advance());
    }

    #[test]
    fn multi_choice_toggle_keeps_selection_order() {
        let value = AnswerValue::Selection(Vec::new())
            .toggled("A")
            .toggled("B");
        assert_eq!(value, AnswerValue::Selection(vec!["A".into(), "B".into()]));
        let value = value.toggled("A");
        assert_eq!(value, AnswerValue::Selection(vec!["B".into()]));
    }

    #[test]
    fn validator_message_appears_only_on_attempted_advance() {
        fn deny(value: &AnswerValue) -> Option<String> {
            value
                .as_scale()
                .map_or(false, |score| score < 3)
                .then(|| "Too low".to_string())
        }
        let flow = vec![
            Question::new("score", QuestionKind::Scale, "Score").validate(deny),
            Question::new("completion", QuestionKind::Completion, "Thanks"),
        ];
        let mut engine = WizardEngine::new(flow, MemoryProgressStore::new());
        engine.set_value(AnswerValue::Scale(1));
        assert!(!engine.can_advance());
        assert_eq!(
            engine.advance(),
            AdvanceOutcome::Rejected { message: Some("Too low".to_string()) }
        );
        assert_eq!(engine.position(), 0);

        engine.set_value(AnswerValue::Scale(7));
        assert!(matches!(engine.advance(), AdvanceOutcome::Advanced));
    }

    #[test]
    fn full_three_step_scenario() {
        let store = MemoryProgressStore::new();
        let mut engine = WizardEngine::new(three_step_flow(), store.clone());
        assert_eq!(engine.position(), 0);

        assert!(matches!(engine.advance(), AdvanceOutcome::Advanced));
        assert_eq!(engine.position(), 1);

        // Empty required name: navigation stays put.
        assert!(!engine.can_advance());
        assert!(matches!(engine.advance(), AdvanceOutcome::Rejected { .. }));
        assert_eq!(engine.position(), 1);

        engine.set_value(AnswerValue::Text("Ann".into()));
        assert!(engine.can_advance());
        assert!(matches!(engine.advance(), AdvanceOutcome::Advanced));
        assert_eq!(engine.position(), 2);

        // Advancing at the last index starts the submission instead of
        // running past the end.
        assert!(matches!(engine.advance(), AdvanceOutcome::SubmitStarted));
        assert!(engine.is_submitting());

        // Re-entry while in flight is ignored.
        assert_eq!(engine.advance(), AdvanceOutcome::Rejected { message: None });

        assert!(store.saved().is_some());
        engine.finish_submit(true);
        assert!(!engine.is_submitting());
        assert!(store.saved().is_none(), "storage is cleared exactly on success");
    }

    #[test]
    fn failed_submission_keeps_progress_for_retry() {
        let store = MemoryProgressStore::new();
        let mut engine = WizardEngine::new(three_step_flow(), store.clone());
        engine.advance();
        engine.set_value(AnswerValue::Text("Ann".into()));
        engine.advance();
        assert!(matches!(engine.advance(), AdvanceOutcome::SubmitStarted));

        engine.finish_submit(false);
        assert!(!engine.is_submitting());
        assert!(store.saved().is_some());

        // The same primary action retries.
        assert!(matches!(engine.advance(), AdvanceOutcome::SubmitStarted));
    }

    #[test]
    fn reopening_restores_persisted_progress() {
        let store = MemoryProgressStore::new();
        {
            let mut engine = WizardEngine::new(three_step_flow(), store.clone());
            engine.advance();
            engine.set_value(AnswerValue::Text("Ann".into()));
        }

        let reopened = WizardEngine::new(three_step_flow(), store.clone());
        assert_eq!(reopened.position(), 1);
        assert_eq!(reopened.value(), AnswerValue::Text("Ann".into()));
    }

    #[test]
    fn navigation_without_answers_persists_nothing() {
        let store = MemoryProgressStore::new();
        let mut engine = WizardEngine::new(three_step_flow(), store.clone());
        engine.advance();
        assert!(store.saved().is_none(), "an empty record is never persisted");
    }

    #[test]
    fn out_of_range_restored_position_is_discarded() {
        let store = MemoryProgressStore::new();
        store.save(&SavedProgress {
            position: 99,
            answers: AnswerRecord::new().with(
                &FieldPath::Flat("name"),
                AnswerValue::Text("Ann".into()),
            ),
        });

        let engine = WizardEngine::new(three_step_flow(), store);
        assert_eq!(engine.position(), 0);
        assert!(engine.answers().is_empty());
    }

    #[test]
    fn record_serializes_in_the_browser_payload_shape() {
        let record = AnswerRecord::new()
            .with(
                &FieldPath::Nested { group: "contact", field: "name" },
                AnswerValue::Text("Ann".into()),
            )
            .with(
                &FieldPath::Nested { group: "investmentLikelihood", field: "score" },
                AnswerValue::Scale(7),
            )
            .with(
                &FieldPath::Flat("patterns"),
                AnswerValue::Selection(vec!["shadow_usage".into()]),
            );

        let json = serde_json::to_string(&record).expect("serializes");
        assert_eq!(
            json,
            r#"{"contact":{"name":"Ann"},"investmentLikelihood":{"score":7},"patterns":["shadow_usage"]}"#
        );

        let parsed: AnswerRecord = serde_json::from_str(&json).expect("round-trips");
        assert_eq!(parsed, record);
    }
}
