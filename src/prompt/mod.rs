//! Prompt composition for the completion service.
//!
//! Composition is pure string construction: a fixed system instruction that
//! pins the copywriter persona and the required four-part output structure,
//! plus a per-user instruction interpolating department, role, tenure,
//! persona, coaching themes, optional department context, and the topic.
//!
//! No escaping or sanitization of the topic is performed; callers must
//! treat the topic as trusted input. The composer never invokes the
//! service itself.

use crate::persona::Persona;

/// Version tag for the system instruction. Bump when the wording or the
/// required output structure changes, so downstream parsing stays in sync.
pub const SYSTEM_INSTRUCTION_VERSION: &str = "v1";

/// Role label used in prompts and preview output.
pub fn role_label(is_manager: bool) -> &'static str {
    if is_manager {
        "Manager"
    } else {
        "Individual Contributor"
    }
}

/// A composed system/user instruction pair, ready for the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    /// Fixed instruction describing tone and output structure.
    pub system: String,
    /// Per-user instruction with the interpolated context.
    pub user: String,
}

/// Everything the composer needs for one user.
#[derive(Debug, Clone)]
pub struct PromptInputs<'a> {
    /// Company the copywriter persona writes for.
    pub company_name: &'a str,
    /// User's department (already defaulted by the caller).
    pub department: &'a str,
    /// Managerial status.
    pub is_manager: bool,
    /// Tenure in whole months.
    pub tenure_months: i32,
    /// Classified persona.
    pub persona: Persona,
    /// Coaching-theme text for the persona.
    pub theme_text: &'a str,
    /// Optional extra context for the department.
    pub department_context: Option<&'a str>,
    /// Free-text email topic.
    pub topic: &'a str,
}

/// Compose the system/user instruction pair for one user.
pub fn compose(inputs: &PromptInputs<'_>) -> PromptPair {
    PromptPair {
        system: system_instruction(inputs.company_name),
        user: user_instruction(inputs),
    }
}

/// The fixed system instruction (see [`SYSTEM_INSTRUCTION_VERSION`]).
///
/// The four-part structure named here is what the reply parser extracts;
/// keep the field names in sync with [`crate::reply`].
pub fn system_instruction(company_name: &str) -> String {
    format!(
        "You are an expert email copywriter for {company_name}, a coaching company. \
         Your goal is to write a warm, empowering onboarding email for a user based \
         on their role, tenure, department, and coaching topic. \
         Structure the email in four parts:\n\
         1. Subject Line (short and impactful)\n\
         2. Preview Text (1 sentence that acts like an email teaser)\n\
         3. Headline (a punchy 3-6 word phrase)\n\
         4. Body (3 short paragraphs):\n\
         \x20  - Start with a personalized intro about the user's context\n\
         \x20  - In the second paragraph, include a 3-bullet list of coaching \
         suggestions with a varied lead-in like 'Partner with a coach to:', \
         'Your coach can help you:', etc.\n\
         \x20  - End with a sentence that begins with a phrase like \"Book a session \
         to...\", \"Schedule a session to...\", or similar, followed by the \
         [BOOK A SESSION] CTA on its own line\n\
         Tailor the tone based on whether the user is a manager or individual \
         contributor. The tone should always be supportive, confidential, and helpful."
    )
}

/// Build the per-user instruction, one context item per line.
fn user_instruction(inputs: &PromptInputs<'_>) -> String {
    let mut context_lines = vec![
        format!("Department: {}", inputs.department),
        format!("Role: {}", role_label(inputs.is_manager)),
        format!("Tenure (months): {}", inputs.tenure_months),
        format!("Persona: {}", inputs.persona),
        format!(
            "Their coaching needs may include: {}",
            inputs.theme_text
        ),
    ];

    if let Some(extra) = inputs.department_context {
        context_lines.push(format!("Department context: {}", extra));
    }

    context_lines.push(format!("Topic: {}", inputs.topic));

    format!(
        "Here is the user's information:\n{}\n\nWrite the personalized email.",
        context_lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> PromptInputs<'static> {
        PromptInputs {
            company_name: "Bravely",
            department: "Engineering",
            is_manager: true,
            tenure_months: 24,
            persona: Persona::VeteranManager,
            theme_text: "scaling your leadership",
            department_context: None,
            topic: "career growth",
        }
    }

    #[test]
    fn role_labels() {
        assert_eq!(role_label(true), "Manager");
        assert_eq!(role_label(false), "Individual Contributor");
    }

    #[test]
    fn system_instruction_names_all_four_parts() {
        let system = system_instruction("Bravely");
        assert!(system.contains("Bravely"));
        assert!(system.contains("Subject Line"));
        assert!(system.contains("Preview Text"));
        assert!(system.contains("Headline"));
        assert!(system.contains("Body"));
        assert!(system.contains("[BOOK A SESSION]"));
    }

    #[test]
    fn user_instruction_interpolates_context_lines() {
        let pair = compose(&sample_inputs());

        assert!(pair.user.starts_with("Here is the user's information:\n"));
        assert!(pair.user.contains("Department: Engineering"));
        assert!(pair.user.contains("Role: Manager"));
        assert!(pair.user.contains("Tenure (months): 24"));
        assert!(pair.user.contains("Persona: Veteran Manager"));
        assert!(pair
            .user
            .contains("Their coaching needs may include: scaling your leadership"));
        assert!(pair.user.contains("Topic: career growth"));
        assert!(pair.user.ends_with("Write the personalized email."));
    }

    #[test]
    fn department_context_line_is_optional() {
        let without = compose(&sample_inputs());
        assert!(!without.user.contains("Department context:"));

        let mut inputs = sample_inputs();
        inputs.department_context = Some("The org is mid-reorg.");
        let with = compose(&inputs);
        assert!(with
            .user
            .contains("Department context: The org is mid-reorg."));
        // Topic stays last regardless
        let topic_pos = with.user.find("Topic:").unwrap();
        let ctx_pos = with.user.find("Department context:").unwrap();
        assert!(ctx_pos < topic_pos);
    }

    #[test]
    fn ic_inputs_use_ic_role_label() {
        let mut inputs = sample_inputs();
        inputs.is_manager = false;
        inputs.persona = Persona::NewIc;
        inputs.tenure_months = 0;

        let pair = compose(&inputs);
        assert!(pair.user.contains("Role: Individual Contributor"));
        assert!(pair.user.contains("Persona: New IC"));
    }

    #[test]
    fn topic_is_interpolated_verbatim() {
        // Trusted input: no escaping, even of colon-bearing text.
        let mut inputs = sample_inputs();
        inputs.topic = "feedback: giving and receiving";
        let pair = compose(&inputs);
        assert!(pair.user.contains("Topic: feedback: giving and receiving"));
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose(&sample_inputs());
        let b = compose(&sample_inputs());
        assert_eq!(a, b);
    }
}
