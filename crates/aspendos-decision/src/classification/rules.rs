//! Rule-based query classification.
//!
//! Rules are evaluated top-to-bottom and the first match wins. There is no
//! scoring: reordering `RULES` changes results, so new rules must be slotted
//! in deliberately.

use std::sync::LazyLock;

use aspendos_core::query::QueryType;
use regex::Regex;

/// A compiled classification pattern.
pub struct ClassificationRule {
    pub name: &'static str,
    pub query_type: QueryType,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! rule_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

rule_pattern!(
    RE_DEBUGGING,
    r"(?i)\b(errors?|bugs?|exceptions?|stack ?trace|traceback|crash(es|ed|ing)?|segfault|panick?(s|ed|ing)?|not working|doesn'?t work|isn'?t working|fail(s|ed|ing)?|broken|debug(ging)?|fix(es|ing)?)\b"
);

rule_pattern!(
    RE_CODE_REVIEW,
    r"(?i)\b(review|refactor(ing)?|clean ?up|code smells?|pull request|readability|improve (this|my) code|is this code)\b"
);

rule_pattern!(
    RE_PERSONAL_REFLECTION,
    r"(?i)\b(i feel|i'?m feeling|i felt|my (life|goals?|progress|journey|growth|career|habits?|mood|week)|reflect(ing|ion)?|how am i doing|what have i (learned|done|achieved)|journal(ing)?)\b"
);

rule_pattern!(
    RE_TECHNICAL_ADVICE,
    r"(?i)\b(how (should|do|can|would) (i|we)|architect(ure)?|best (way|approach|practices?)|should (i|we) use|recommend(ed|ation)?|design patterns?|set ?up|configure|optimi[sz]e|scal(e|ing|ability)|implement(ation)?)\b"
);

rule_pattern!(
    RE_LEARNING,
    r"(?i)\b(learn(ing)?|teach me|tutorials?|explain|understand|study(ing)?|course|beginner|eli5|walk me through)\b"
);

rule_pattern!(
    RE_CREATIVE,
    r"(?i)\b(poems?|story|stories|song|lyrics|brainstorm|imagine|creative|ideas? for|compose|write (me )?(a|an) (essay|tale|haiku))\b"
);

rule_pattern!(
    RE_GENERAL_KNOWLEDGE,
    r"(?i)^\s*(what|who|when|where|which|why)\s+(is|are|was|were|did|does|do)\b|\b(define|definition of|capital of|meaning of|how many|how much is)\b"
);

/// First/second-person pronouns that turn a factual question into a personal one.
static RE_PERSONAL_PRONOUN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(my|me|i|we|our|mine)\b").ok());

/// Ordered rule table. First match wins.
pub static RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "debugging",
        query_type: QueryType::Debugging,
        regex: &RE_DEBUGGING,
    },
    ClassificationRule {
        name: "code_review",
        query_type: QueryType::CodeReview,
        regex: &RE_CODE_REVIEW,
    },
    ClassificationRule {
        name: "personal_reflection",
        query_type: QueryType::PersonalReflection,
        regex: &RE_PERSONAL_REFLECTION,
    },
    ClassificationRule {
        name: "technical_advice",
        query_type: QueryType::TechnicalAdvice,
        regex: &RE_TECHNICAL_ADVICE,
    },
    ClassificationRule {
        name: "learning",
        query_type: QueryType::Learning,
        regex: &RE_LEARNING,
    },
    ClassificationRule {
        name: "creative",
        query_type: QueryType::Creative,
        regex: &RE_CREATIVE,
    },
    ClassificationRule {
        name: "general_knowledge",
        query_type: QueryType::GeneralKnowledge,
        regex: &RE_GENERAL_KNOWLEDGE,
    },
];

/// How a query was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub query_type: QueryType,
    /// Index into [`RULES`] of the rule that matched, if any.
    pub rule_index: Option<usize>,
    /// Whether a general-knowledge match was re-routed by a personal pronoun.
    pub pronoun_override: bool,
}

impl Classification {
    /// One-line explanation of the classification path.
    pub fn reasoning(&self) -> String {
        match (self.rule_index, self.pronoun_override) {
            (Some(i), true) => format!(
                "matched '{}' rule but query is personal; treated as {}",
                RULES[i].name, self.query_type
            ),
            (Some(i), false) => format!("matched '{}' rule", RULES[i].name),
            (None, _) => "no rule matched".to_string(),
        }
    }
}

/// Classify a query with the ordered rule table.
pub fn classify_query(query: &str) -> QueryType {
    classify_query_detailed(query).query_type
}

/// Classify a query and report which rule decided it.
pub fn classify_query_detailed(query: &str) -> Classification {
    let matched = RULES.iter().enumerate().find(|(_, rule)| {
        rule.regex
            .as_ref()
            .is_some_and(|re| re.is_match(query))
    });

    let Some((index, rule)) = matched else {
        return Classification {
            query_type: QueryType::Unknown,
            rule_index: None,
            pronoun_override: false,
        };
    };

    if rule.query_type == QueryType::GeneralKnowledge && has_personal_pronoun(query) {
        return Classification {
            query_type: QueryType::PersonalReflection,
            rule_index: Some(index),
            pronoun_override: true,
        };
    }

    Classification {
        query_type: rule.query_type,
        rule_index: Some(index),
        pronoun_override: false,
    }
}

/// Whether the query contains my/me/I/we/our/mine as a whole word.
pub fn has_personal_pronoun(query: &str) -> bool {
    RE_PERSONAL_PRONOUN
        .as_ref()
        .is_some_and(|re| re.is_match(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rule_patterns_compile() {
        for rule in RULES {
            assert!(rule.regex.is_some(), "pattern '{}' failed to compile", rule.name);
        }
        assert!(RE_PERSONAL_PRONOUN.is_some());
    }

    #[test]
    fn every_concrete_type_has_exactly_one_rule() {
        for query_type in QueryType::ALL {
            let count = RULES.iter().filter(|r| r.query_type == query_type).count();
            let expected = usize::from(query_type != QueryType::Unknown);
            assert_eq!(count, expected, "{query_type}");
        }
    }

    #[test]
    fn plain_fact_question_is_general_knowledge() {
        assert_eq!(classify_query("What is React?"), QueryType::GeneralKnowledge);
        assert_eq!(
            classify_query("who was the first person on the moon"),
            QueryType::GeneralKnowledge
        );
    }

    #[test]
    fn architecture_question_is_technical_advice() {
        assert_eq!(
            classify_query("How should I architect my React component?"),
            QueryType::TechnicalAdvice
        );
    }

    #[test]
    fn pronoun_turns_fact_question_personal() {
        let c = classify_query_detailed("What is my favorite framework?");
        assert_eq!(c.query_type, QueryType::PersonalReflection);
        assert!(c.pronoun_override);
        assert!(c.reasoning().contains("general_knowledge"));
    }

    #[test]
    fn pronoun_must_be_a_whole_word() {
        // "AI" and "meme" contain "i"/"me" but are not pronouns.
        assert_eq!(classify_query("What is AI?"), QueryType::GeneralKnowledge);
        assert_eq!(classify_query("What is a meme?"), QueryType::GeneralKnowledge);
    }

    #[test]
    fn earlier_rules_win_over_later_ones() {
        // Mentions both an error (debugging) and learning; debugging is first.
        assert_eq!(
            classify_query("I want to learn why this error happens"),
            QueryType::Debugging
        );
        // Fact question that is also a review request: review is first.
        assert_eq!(
            classify_query("What is wrong with this pull request?"),
            QueryType::CodeReview
        );
    }

    #[test]
    fn pronoun_override_only_applies_to_general_knowledge() {
        // Debugging match with "my" stays debugging.
        assert_eq!(
            classify_query("my build keeps failing"),
            QueryType::Debugging
        );
    }

    #[test]
    fn unmatched_query_is_unknown() {
        let c = classify_query_detailed("hmm okay then");
        assert_eq!(c.query_type, QueryType::Unknown);
        assert_eq!(c.rule_index, None);
        assert_eq!(c.reasoning(), "no rule matched");
    }

    #[test]
    fn each_category_has_a_representative() {
        let cases = [
            ("I keep getting a null pointer exception", QueryType::Debugging),
            ("Can you review this function?", QueryType::CodeReview),
            ("I feel stuck with my side project", QueryType::PersonalReflection),
            ("Should I use Postgres or SQLite here?", QueryType::TechnicalAdvice),
            ("Teach me about monads", QueryType::Learning),
            ("Write me a poem about autumn", QueryType::Creative),
            ("Define entropy", QueryType::GeneralKnowledge),
        ];
        for (query, expected) in cases {
            assert_eq!(classify_query(query), expected, "{query}");
        }
    }
}
