//! Per-record orchestration: classify, compose, call, parse.
//!
//! The loop is single-threaded and fully sequential: one record is handled
//! end to end before the next begins, and nothing is shared between
//! iterations. The one hard invariant: every input record produces exactly
//! one draft, in input order, regardless of individual failures. A record
//! whose completion call fails becomes a sentinel draft; the loop never
//! aborts early.

use crate::completion::CompletionService;
use crate::config::Config;
use crate::draft::EmailDraft;
use crate::persona::{classify, tenure_months};
use crate::prompt::{self, PromptInputs, PromptPair};
use crate::reply::parse_reply;
use crate::roster::UserRecord;
use chrono::NaiveDate;

/// Compose the prompt pair for one record without calling the service.
///
/// Shared by the generation loop and the `prompt` inspection command so
/// both always see identical prompts.
pub fn prompt_for_record(
    record: &UserRecord,
    topic: &str,
    config: &Config,
    reference_date: NaiveDate,
) -> PromptPair {
    let tenure = tenure_months(record.start_date, reference_date);
    let persona = classify(record.is_manager, tenure);
    let department = record
        .department
        .as_deref()
        .unwrap_or(&config.default_department);

    prompt::compose(&PromptInputs {
        company_name: &config.company_name,
        department,
        is_manager: record.is_manager,
        tenure_months: tenure,
        persona,
        theme_text: config.theme_for(persona),
        department_context: record
            .department
            .as_deref()
            .and_then(|d| config.context_for_department(d)),
        topic,
    })
}

/// Generate one draft for one record, containing any failure.
pub fn generate_one(
    record: &UserRecord,
    topic: &str,
    config: &Config,
    reference_date: NaiveDate,
    service: &dyn CompletionService,
) -> EmailDraft {
    let pair = prompt_for_record(record, topic, config, reference_date);

    match service.complete(&pair.system, &pair.user) {
        Ok(text) => parse_reply(&text),
        Err(err) => EmailDraft::failure(&err.to_string()),
    }
}

/// Run the full generation loop over a roster.
///
/// `progress` is invoked with (1-based row number, total) before each
/// record is processed; the CLI uses it for incremental status output.
pub fn generate_drafts(
    records: &[UserRecord],
    topic: &str,
    config: &Config,
    reference_date: NaiveDate,
    service: &dyn CompletionService,
    progress: &mut dyn FnMut(usize, usize),
) -> Vec<EmailDraft> {
    let total = records.len();
    let mut drafts = Vec::with_capacity(total);

    for (index, record) in records.iter().enumerate() {
        progress(index + 1, total);
        drafts.push(generate_one(record, topic, config, reference_date, service));
    }

    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionError;
    use crate::draft::ERROR_SENTINEL;
    use std::cell::RefCell;

    /// Scripted service: hands out the queued results in order.
    struct ScriptedService {
        replies: RefCell<Vec<Result<String, CompletionError>>>,
    }

    impl ScriptedService {
        fn new(replies: Vec<Result<String, CompletionError>>) -> Self {
            // Stored reversed so pop() yields them in order.
            let mut replies = replies;
            replies.reverse();
            Self {
                replies: RefCell::new(replies),
            }
        }
    }

    impl CompletionService for ScriptedService {
        fn complete(&self, _system: &str, _user: &str) -> Result<String, CompletionError> {
            self.replies
                .borrow_mut()
                .pop()
                .unwrap_or(Err(CompletionError::EmptyReply))
        }
    }

    /// Service that records the prompts it was asked to complete.
    struct RecordingService {
        calls: RefCell<Vec<(String, String)>>,
        reply: String,
    }

    impl CompletionService for RecordingService {
        fn complete(&self, system: &str, user: &str) -> Result<String, CompletionError> {
            self.calls
                .borrow_mut()
                .push((system.to_string(), user.to_string()));
            Ok(self.reply.clone())
        }
    }

    fn record(is_manager: bool, start: Option<&str>, department: Option<&str>) -> UserRecord {
        UserRecord {
            organization: None,
            department: department.map(str::to_string),
            is_manager,
            start_date: start.and_then(crate::roster::parse_start_date),
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()
    }

    fn well_formed_reply(subject: &str) -> String {
        format!(
            "Subject Line: {subject}\nPreview Text: P\nHeadline: H\nBody: B"
        )
    }

    #[test]
    fn every_record_produces_one_draft_in_order() {
        let config = Config::default();
        let records = vec![
            record(false, Some("2025-05-01"), None),
            record(true, Some("2023-06-06"), Some("Engineering")),
            record(false, None, None),
        ];
        let service = ScriptedService::new(vec![
            Ok(well_formed_reply("one")),
            Ok(well_formed_reply("two")),
            Ok(well_formed_reply("three")),
        ]);

        let mut seen = Vec::new();
        let drafts = generate_drafts(
            &records,
            "career growth",
            &config,
            reference(),
            &service,
            &mut |done, total| seen.push((done, total)),
        );

        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].subject_line, "one");
        assert_eq!(drafts[1].subject_line, "two");
        assert_eq!(drafts[2].subject_line, "three");
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn failure_on_one_record_does_not_affect_others() {
        let config = Config::default();
        let records = vec![
            record(false, None, None),
            record(false, None, None),
            record(false, None, None),
        ];
        let service = ScriptedService::new(vec![
            Ok(well_formed_reply("first")),
            Err(CompletionError::Service {
                status: 500,
                message: "internal error".to_string(),
            }),
            Ok(well_formed_reply("third")),
        ]);

        let drafts = generate_drafts(
            &records,
            "burnout",
            &config,
            reference(),
            &service,
            &mut |_, _| {},
        );

        assert_eq!(drafts.len(), 3);
        assert!(!drafts[0].is_failure());
        assert_eq!(drafts[0].subject_line, "first");

        assert!(drafts[1].is_failure());
        assert_eq!(drafts[1].subject_line, ERROR_SENTINEL);
        assert!(drafts[1].body.contains("service error (status 500)"));

        assert!(!drafts[2].is_failure());
        assert_eq!(drafts[2].subject_line, "third");
    }

    #[test]
    fn all_failures_still_yield_one_draft_per_record() {
        let config = Config::default();
        let records = vec![record(false, None, None), record(true, None, None)];
        let service = ScriptedService::new(vec![
            Err(CompletionError::Transport("timed out".to_string())),
            Err(CompletionError::EmptyReply),
        ]);

        let drafts = generate_drafts(
            &records,
            "feedback",
            &config,
            reference(),
            &service,
            &mut |_, _| {},
        );

        assert_eq!(drafts.len(), 2);
        assert!(drafts.iter().all(EmailDraft::is_failure));
        assert!(drafts[0].body.contains("timed out"));
        assert!(drafts[1].body.contains("empty reply"));
    }

    #[test]
    fn unparsable_reply_falls_back_to_raw_body() {
        let config = Config::default();
        let records = vec![record(false, None, None)];
        let service = ScriptedService::new(vec![Ok(
            "Completely freeform reply with no sections.".to_string()
        )]);

        let drafts = generate_drafts(
            &records,
            "growth",
            &config,
            reference(),
            &service,
            &mut |_, _| {},
        );

        // Parse failure is not a hard error: raw text lands in the body.
        assert!(!drafts[0].is_failure());
        assert_eq!(drafts[0].subject_line, "");
        assert_eq!(drafts[0].body, "Completely freeform reply with no sections.");
    }

    #[test]
    fn prompt_reflects_persona_and_department() {
        let config = Config::default();
        let veteran_manager = record(true, Some("2023-06-06"), Some("Engineering"));

        let pair = prompt_for_record(&veteran_manager, "career growth", &config, reference());

        assert!(pair.user.contains("Department: Engineering"));
        assert!(pair.user.contains("Role: Manager"));
        assert!(pair.user.contains("Tenure (months): 24"));
        assert!(pair.user.contains("Persona: Veteran Manager"));
        assert!(pair.user.contains("Topic: career growth"));
    }

    #[test]
    fn missing_department_uses_configured_default() {
        let config = Config::default();
        let pair = prompt_for_record(&record(false, None, None), "growth", &config, reference());

        assert!(pair.user.contains("Department: their department"));
        assert!(pair.user.contains("Persona: New IC"));
        assert!(pair.user.contains("Tenure (months): 0"));
    }

    #[test]
    fn department_context_is_included_when_configured() {
        let mut config = Config::default();
        config.department_context.insert(
            "Engineering".to_string(),
            "Mid-reorg; acknowledge change fatigue.".to_string(),
        );

        let with_dept = record(false, None, Some("Engineering"));
        let pair = prompt_for_record(&with_dept, "growth", &config, reference());
        assert!(pair
            .user
            .contains("Department context: Mid-reorg; acknowledge change fatigue."));

        let other_dept = record(false, None, Some("Sales"));
        let pair = prompt_for_record(&other_dept, "growth", &config, reference());
        assert!(!pair.user.contains("Department context:"));
    }

    #[test]
    fn service_receives_composed_pair() {
        let config = Config::default();
        let service = RecordingService {
            calls: RefCell::new(Vec::new()),
            reply: well_formed_reply("hi"),
        };
        let records = vec![record(true, Some("2025-03-01"), Some("Sales"))];

        let drafts = generate_drafts(
            &records,
            "giving feedback",
            &config,
            reference(),
            &service,
            &mut |_, _| {},
        );
        assert_eq!(drafts[0].subject_line, "hi");

        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (system, user) = &calls[0];
        assert!(system.contains("expert email copywriter"));
        assert!(user.contains("Department: Sales"));
        assert!(user.contains("Topic: giving feedback"));
    }

    #[test]
    fn empty_roster_yields_empty_output_without_calls() {
        let config = Config::default();
        let service = ScriptedService::new(vec![]);

        let mut calls = 0;
        let drafts = generate_drafts(
            &[],
            "growth",
            &config,
            reference(),
            &service,
            &mut |_, _| calls += 1,
        );

        assert!(drafts.is_empty());
        assert_eq!(calls, 0);
    }
}
