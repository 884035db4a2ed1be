//! The question catalogue driving the written assessment.
//!
//! Questions are static configuration: swapping the list returned by
//! [`questions`] swaps the entire flow. Each question addresses its slot in
//! the answer record through a [`FieldPath`], parsed once here rather than
//! re-split on every read.

use super::engine::AnswerValue;

/// Where a question's answer lives in the answer record: either a top-level
/// key or one level of grouping (`group.field` in the authored id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    Flat(&'static str),
    Nested {
        group: &'static str,
        field: &'static str,
    },
}

impl FieldPath {
    /// Split an authored id on the first `.`.
    pub fn parse(id: &'static str) -> Self {
        match id.split_once('.') {
            Some((group, field)) => Self::Nested { group, field },
            None => Self::Flat(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Intro,
    Completion,
    ShortText,
    LongText,
    SingleChoice,
    MultiChoice,
    Scale,
}

impl QuestionKind {
    pub fn is_text(self) -> bool {
        matches!(self, Self::ShortText | Self::LongText)
    }
}

/// One selectable option of a single- or multi-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Validation callback: current value in, error message out (or none).
pub type Validator = fn(&AnswerValue) -> Option<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub path: FieldPath,
    pub kind: QuestionKind,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub choices: &'static [Choice],
    pub required: bool,
    pub validate: Option<Validator>,
}

impl Question {
    pub fn new(id: &'static str, kind: QuestionKind, title: &'static str) -> Self {
        Self {
            path: FieldPath::parse(id),
            kind,
            title,
            subtitle: None,
            placeholder: None,
            choices: &[],
            required: false,
            validate: None,
        }
    }

    pub fn subtitle(mut self, subtitle: &'static str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn choices(mut self, choices: &'static [Choice]) -> Self {
        self.choices = choices;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn validate(mut self, validator: Validator) -> Self {
        self.validate = Some(validator);
        self
    }
}

fn too_short(value: &AnswerValue, min_chars: usize) -> bool {
    value
        .as_text()
        .map_or(true, |text| text.trim().chars().count() < min_chars)
}

fn is_valid_email(email: &str) -> bool {
    let part_ok = |part: &str| {
        !part.is_empty() && !part.contains('@') && !part.contains(char::is_whitespace)
    };
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => part_ok(local) && part_ok(host) && part_ok(tld),
        None => false,
    }
}

fn validate_full_name(value: &AnswerValue) -> Option<String> {
    too_short(value, 2).then(|| "Please enter your full name".to_string())
}

fn validate_email(value: &AnswerValue) -> Option<String> {
    let email = value.as_text().unwrap_or_default().trim();
    if email.is_empty() {
        Some("Please enter your email address".to_string())
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

fn validate_company(value: &AnswerValue) -> Option<String> {
    too_short(value, 2).then(|| "Please enter your company name".to_string())
}

fn validate_role(value: &AnswerValue) -> Option<String> {
    too_short(value, 2).then(|| "Please enter your role or position".to_string())
}

fn validate_background(value: &AnswerValue) -> Option<String> {
    too_short(value, 20).then(|| {
        "Please provide a brief overview of your AI implementation (at least a few sentences)"
            .to_string()
    })
}

fn validate_elaboration(value: &AnswerValue) -> Option<String> {
    too_short(value, 10).then(|| "Please elaborate on your assessment".to_string())
}

fn validate_surprises(value: &AnswerValue) -> Option<String> {
    too_short(value, 15).then(|| {
        "Please describe what surprised you about the post-implementation experience".to_string()
    })
}

fn validate_org_details(value: &AnswerValue) -> Option<String> {
    too_short(value, 10)
        .then(|| "Please provide more details about the organizational changes".to_string())
}

fn validate_reasoning(value: &AnswerValue) -> Option<String> {
    too_short(value, 10)
        .then(|| "Please explain what's driving your likelihood assessment".to_string())
}

const SUCCESS_TYPE_CHOICES: &[Choice] = &[
    Choice { value: "both", label: "Technical success, business success" },
    Choice { value: "technical_only", label: "Technical success, but business challenges" },
    Choice { value: "business_only", label: "Business success despite technical issues" },
    Choice { value: "neither", label: "Neither - struggling on both fronts" },
];

const ORG_CHANGE_CHOICES: &[Choice] = &[
    Choice { value: "planned_well", label: "Changes were planned and managed well" },
    Choice { value: "unplanned_manageable", label: "Some unplanned shifts, but manageable" },
    Choice { value: "significant_unplanned", label: "Significant unplanned authority changes" },
    Choice { value: "unclear_fragmented", label: "Decision-making became unclear/fragmented" },
];

const PATTERN_CHOICES: &[Choice] = &[
    Choice {
        value: "technical_vs_operational",
        label: "Technical teams report success while operational teams report problems",
    },
    Choice {
        value: "authority_shifts",
        label: "Decision-making authority shifted without formal restructuring",
    },
    Choice {
        value: "cultural_resistance",
        label: "Cultural resistance emerged after technical deployment",
    },
    Choice {
        value: "shadow_usage",
        label: "Shadow AI usage outside governance frameworks",
    },
    Choice {
        value: "unexpected_dependencies",
        label: "New dependencies that weren't anticipated during planning",
    },
    Choice { value: "none", label: "None of these apply" },
];

const SITUATION_CHOICES: &[Choice] = &[
    Choice {
        value: "ready_expand",
        label: "Ready to expand AI initiatives based on success",
    },
    Choice {
        value: "cautiously_optimizing",
        label: "Cautiously optimizing current AI before expanding",
    },
    Choice {
        value: "struggling_value",
        label: "Struggling to get value from technically successful AI",
    },
    Choice {
        value: "considering_reducing",
        label: "Actively considering reducing or eliminating AI initiatives",
    },
    Choice {
        value: "already_scaling_back",
        label: "Already scaling back AI projects despite technical functionality",
    },
];

/// The ordered Cairo assessment flow: intro first, completion last.
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "intro",
            QuestionKind::Intro,
            "Let's assess your AI implementation experience",
        )
        .subtitle(
            "This takes about 3-4 minutes and helps us identify organizational blind spots \
             that might be affecting your AI success.",
        ),
        Question::new(
            "contact.name",
            QuestionKind::ShortText,
            "First, let's get some basic information so we can personalize your assessment.",
        )
        .subtitle("What's your name?")
        .placeholder("Your full name")
        .required()
        .validate(validate_full_name),
        Question::new(
            "contact.email",
            QuestionKind::ShortText,
            "What's the best email to send your detailed assessment?",
        )
        .placeholder("your@email.com")
        .required()
        .validate(validate_email),
        Question::new(
            "contact.company",
            QuestionKind::ShortText,
            "What company or organization are you with?",
        )
        .placeholder("Your company name")
        .required()
        .validate(validate_company),
        Question::new(
            "contact.role",
            QuestionKind::ShortText,
            "What's your role or position at the company?",
        )
        .placeholder("e.g., CTO, VP of Operations, Director of AI")
        .required()
        .validate(validate_role),
        Question::new(
            "implementation.background",
            QuestionKind::LongText,
            "Tell us about your AI implementation journey.",
        )
        .subtitle("Give us a brief overview - what AI capabilities did you deploy and roughly when?")
        .placeholder(
            "e.g., We implemented a customer service chatbot and predictive analytics dashboard \
             in Q2 2023...",
        )
        .required()
        .validate(validate_background),
        Question::new(
            "success.type",
            QuestionKind::SingleChoice,
            "If you had to choose, would you say your AI project was a technical success, \
             a business success, both, or neither?",
        )
        .required()
        .choices(SUCCESS_TYPE_CHOICES),
        Question::new("success.elaboration", QuestionKind::LongText, "Tell us more about that...")
            .subtitle("What makes you characterize it that way?")
            .placeholder("Help us understand the gap between technical and business outcomes...")
            .required()
            .validate(validate_elaboration),
        Question::new(
            "surprises",
            QuestionKind::LongText,
            "What surprised you most about what happened after your AI went live and was \
             technically functioning?",
        )
        .subtitle(
            "What organizational dynamics or challenges emerged that you didn't anticipate \
             during planning?",
        )
        .placeholder(
            "e.g., Teams started using the AI differently than intended, or decision-making \
             became unclear...",
        )
        .required()
        .validate(validate_surprises),
        Question::new(
            "organizationalChanges.type",
            QuestionKind::SingleChoice,
            "How has decision-making authority or responsibility shifted since AI implementation?",
        )
        .required()
        .choices(ORG_CHANGE_CHOICES),
        Question::new(
            "organizationalChanges.details",
            QuestionKind::LongText,
            "Were these changes planned or did they just happen?",
        )
        .subtitle("Tell us more about how authority and decision-making evolved.")
        .placeholder("Describe how decision-making patterns changed after AI implementation...")
        .required()
        .validate(validate_org_details),
        Question::new(
            "patterns",
            QuestionKind::MultiChoice,
            "Have you experienced any of these patterns since AI implementation?",
        )
        .subtitle("Select all that apply to your situation:")
        .choices(PATTERN_CHOICES),
        Question::new(
            "currentSituation",
            QuestionKind::SingleChoice,
            "Which best describes your current situation?",
        )
        .required()
        .choices(SITUATION_CHOICES),
        Question::new(
            "investmentLikelihood.score",
            QuestionKind::Scale,
            "On a scale of 1-10, how likely are you to continue investing in this AI initiative \
             versus scaling it back?",
        )
        .required(),
        Question::new(
            "investmentLikelihood.reasoning",
            QuestionKind::LongText,
            "What's driving that assessment?",
        )
        .subtitle("Help us understand the key factors influencing your decision.")
        .placeholder(
            "e.g., Budget constraints, lack of clear ROI, organizational resistance, technical \
             limitations...",
        )
        .required()
        .validate(validate_reasoning),
        Question::new(
            "strategicQuestion",
            QuestionKind::LongText,
            "What's your biggest unanswered question about your AI implementation experience?",
        )
        .subtitle("Anything specific you'd like us to address in your assessment? (Optional)")
        .placeholder(
            "e.g., How do we get teams to actually use the AI as intended? Why does our ROI look \
             good on paper but feel disappointing in practice?",
        ),
        Question::new(
            "completion",
            QuestionKind::Completion,
            "Thank you for sharing your AI implementation experience.",
        )
        .subtitle(
            "We'll analyze your responses and send your detailed AI Implementation Blind Spots \
             Assessment within 24 hours. This assessment will identify specific organizational \
             patterns and provide actionable insights for your situation.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_starts_with_intro_and_ends_with_completion() {
        let flow = questions();
        assert!(flow.len() > 2);
        assert_eq!(flow.first().map(|q| q.kind), Some(QuestionKind::Intro));
        assert_eq!(flow.last().map(|q| q.kind), Some(QuestionKind::Completion));
    }

    #[test]
    fn dotted_ids_parse_into_nested_paths() {
        assert_eq!(
            FieldPath::parse("contact.name"),
            FieldPath::Nested { group: "contact", field: "name" }
        );
        assert_eq!(FieldPath::parse("surprises"), FieldPath::Flat("surprises"));
    }

    #[test]
    fn choice_questions_carry_options() {
        for question in questions() {
            if matches!(question.kind, QuestionKind::SingleChoice | QuestionKind::MultiChoice) {
                assert!(
                    !question.choices.is_empty(),
                    "choice question {:?} has no options",
                    question.path
                );
            }
        }
    }

    #[test]
    fn email_validator_matches_the_documented_shape() {
        let ok = AnswerValue::Text("jane@example.com".into());
        assert_eq!(validate_email(&ok), None);

        let no_at = AnswerValue::Text("janeexample.com".into());
        assert!(validate_email(&no_at).is_some());

        let no_tld = AnswerValue::Text("jane@example".into());
        assert!(validate_email(&no_tld).is_some());

        let empty = AnswerValue::Text("  ".into());
        assert_eq!(
            validate_email(&empty),
            Some("Please enter your email address".to_string())
        );

        let subdomain = AnswerValue::Text("jane@mail.example.co".into());
        assert_eq!(validate_email(&subdomain), None);
    }

    #[test]
    fn length_validators_trim_before_counting() {
        let padded = AnswerValue::Text("  J  ".into());
        assert!(validate_full_name(&padded).is_some());
        let ok = AnswerValue::Text("Jane Doe".into());
        assert_eq!(validate_full_name(&ok), None);
    }
}
