mod catalog;

pub const MATH_TEACHER: &str = "Math Teacher";

/// A named assistant role: instruction prompt, domain gate data, and the
/// canned refusal returned when a question falls outside the domain.
///
/// The catalog is fixed at compile time and never mutated, so it is shared
/// freely across sessions without locking.
#[derive(Debug)]
pub struct Persona {
    pub name: &'static str,
    pub description: &'static str,
    pub instruction_prompt: &'static str,
    pub domain_keywords: &'static [&'static str],
    pub common_phrases: &'static [&'static str],
    pub refusal_message: &'static str,
    pub suggested_messages: &'static [&'static str],
}

/// All registered personas, in stable declared order (UI selector order).
pub fn all() -> &'static [Persona] {
    &catalog::CATALOG
}

pub fn names() -> Vec<&'static str> {
    all().iter().map(|p| p.name).collect()
}

/// Case-sensitive lookup by display name. `None` for unregistered names.
pub fn lookup(name: &str) -> Option<&'static Persona> {
    all().iter().find(|p| p.name == name)
}

pub fn instruction_prompt_for(name: &str) -> Option<&'static str> {
    lookup(name).map(|p| p.instruction_prompt)
}

pub fn refusal_message_for(name: &str) -> Option<&'static str> {
    lookup(name).map(|p| p.refusal_message)
}

pub fn keywords_for(name: &str) -> Option<&'static [&'static str]> {
    lookup(name).map(|p| p.domain_keywords)
}
