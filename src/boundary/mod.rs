use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

use crate::personas;

pub const UNKNOWN_PERSONA_RESPONSE: &str = "Unknown personality selected.";

// Runs of digits and arithmetic operators. A single digit or operator is
// enough to count as a math expression, matching the original gate.
static MATH_EXPR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9+\-*/()^=]+").unwrap());

/// Outcome of the domain gate for one message. `response` is empty when the
/// message is allowed, otherwise it carries the persona's refusal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BoundaryDecision {
    pub allowed: bool,
    pub response: String,
}

impl BoundaryDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            response: String::new(),
        }
    }

    fn refuse(response: impl Into<String>) -> Self {
        Self {
            allowed: false,
            response: response.into(),
        }
    }
}

/// Decide whether `user_input` lies within the persona's declared domain.
///
/// Deterministic, case-insensitive, and free of I/O: a pure function of its
/// arguments and the static persona catalog. Tiers are checked in fixed
/// order and the first match wins; no tier can overturn an earlier ALLOW.
/// Unknown personas come back as a refusal-shaped decision, never an error.
pub fn evaluate(user_input: &str, persona_name: &str) -> BoundaryDecision {
    let Some(persona) = personas::lookup(persona_name) else {
        return BoundaryDecision::refuse(UNKNOWN_PERSONA_RESPONSE);
    };

    let cleaned = normalize(user_input);
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    // Tier 1: domain keywords, against the whole string or any single token.
    // Substring matches inside longer words are accepted on purpose (typo and
    // plural tolerance); the false ALLOWs this admits are part of the contract.
    for keyword in persona.domain_keywords {
        if cleaned.contains(keyword) || words.iter().any(|w| w.contains(keyword)) {
            return BoundaryDecision::allow();
        }
    }

    // Tier 2: numeric expressions like "2+2?" carry no English keyword, so
    // the math persona also scans the raw, un-normalized input.
    if persona.name == personas::MATH_TEACHER && MATH_EXPR.is_match(user_input) {
        return BoundaryDecision::allow();
    }

    // Tier 3: multi-word trigger phrases (no token split).
    for phrase in persona.common_phrases {
        if cleaned.contains(phrase) {
            return BoundaryDecision::allow();
        }
    }

    BoundaryDecision::refuse(persona.refusal_message)
}

/// Lowercase and drop sentence punctuation. Arithmetic operators and digits
/// must survive so the math tier still sees them downstream.
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '?' | '!' | '.' | ',' | ';' | ':' | '\'' | '"' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personas;

    #[test]
    fn keyword_match_allows() {
        assert!(evaluate("What is the derivative of x^2?", "Math Teacher").allowed);
        assert!(evaluate("Tell me about nutrition for runners", "Doctor").allowed);
        assert!(evaluate("Cheapest flight to Lisbon", "Travel Guide").allowed);
        assert!(evaluate("A good sauce for pasta", "Chef").allowed);
        assert!(evaluate("My hardware is acting up", "Tech Support").allowed);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert!(evaluate("EXPLAIN THIS EQUATION", "Math Teacher").allowed);
        assert!(evaluate("Is this MEDICINE safe?", "Doctor").allowed);
    }

    #[test]
    fn keyword_matches_inside_longer_words() {
        // Known looseness: "math" is a substring of "aftermath".
        assert!(evaluate("the aftermath was brutal", "Math Teacher").allowed);
        // "tech" inside "technically".
        assert!(evaluate("technically speaking", "Tech Support").allowed);
    }

    #[test]
    fn math_expression_allows_without_keywords() {
        assert!(evaluate("3 * (4 + 5)", "Math Teacher").allowed);
        assert!(evaluate("2+2?", "Math Teacher").allowed);
        assert!(evaluate("x = 7", "Math Teacher").allowed);
    }

    #[test]
    fn math_expression_tier_is_math_teacher_only() {
        let decision = evaluate("7 + 7", "Chef");
        assert!(!decision.allowed);
        assert_eq!(
            decision.response,
            personas::refusal_message_for("Chef").unwrap()
        );
    }

    #[test]
    fn normalization_keeps_arithmetic_operators() {
        // "2+2=?" must survive punctuation stripping well enough for the
        // math tier, which reads the raw input anyway.
        assert!(evaluate("2+2=?", "Math Teacher").allowed);
    }

    #[test]
    fn phrase_match_allows() {
        // "best place" is a Travel Guide phrase; no travel keyword appears.
        assert!(evaluate("Best place to visit in spring?", "Travel Guide").allowed);
        // "how to make" for the Chef.
        assert!(evaluate("How to make it crispy?", "Chef").allowed);
        // "not working" for Tech Support.
        assert!(evaluate("It's just not working anymore", "Tech Support").allowed);
    }

    #[test]
    fn phrase_match_spans_token_boundaries() {
        // Phrases are matched against the whole normalized string, so the
        // multi-word trigger must not be defeated by token splitting.
        assert!(evaluate("i have been feeling off lately", "Doctor").allowed);
    }

    #[test]
    fn off_domain_input_is_refused_with_persona_message() {
        let decision = evaluate("What's the best pizza topping?", "Math Teacher");
        assert!(!decision.allowed);
        assert_eq!(
            decision.response,
            personas::refusal_message_for("Math Teacher").unwrap()
        );

        let decision = evaluate("Who won the world cup?", "Doctor");
        assert!(!decision.allowed);
        assert_eq!(
            decision.response,
            personas::refusal_message_for("Doctor").unwrap()
        );
    }

    #[test]
    fn fever_complaint_reaches_the_doctor() {
        assert!(evaluate("I have a fever and headache", "Doctor").allowed);
    }

    #[test]
    fn unknown_persona_is_a_decision_not_an_error() {
        let decision = evaluate("anything at all", "NotARealPersona");
        assert_eq!(
            decision,
            BoundaryDecision {
                allowed: false,
                response: UNKNOWN_PERSONA_RESPONSE.to_string(),
            }
        );
    }

    #[test]
    fn evaluate_is_pure() {
        let a = evaluate("What is the derivative of x^2?", "Math Teacher");
        let b = evaluate("What is the derivative of x^2?", "Math Teacher");
        assert_eq!(a, b);

        let a = evaluate("pizza topping", "Math Teacher");
        let b = evaluate("pizza topping", "Math Teacher");
        assert_eq!(a, b);
    }

    #[test]
    fn allowed_decision_has_empty_response() {
        let decision = evaluate("solve this equation", "Math Teacher");
        assert!(decision.allowed);
        assert!(decision.response.is_empty());
    }

    #[test]
    fn every_persona_refuses_clearly_off_domain_input() {
        // No keyword, phrase, digit, or operator for any persona.
        let input = "my cat naps on the sofa";
        for persona in personas::all() {
            let decision = evaluate(input, persona.name);
            assert!(!decision.allowed, "{}", persona.name);
            assert_eq!(decision.response, persona.refusal_message, "{}", persona.name);
        }
    }

    #[test]
    fn normalize_strips_sentence_punctuation_only() {
        assert_eq!(normalize("Hello, world! (really?)"), "hello world really");
        assert_eq!(normalize("2+2=4; x-y"), "2+2=4 x-y");
    }
}
