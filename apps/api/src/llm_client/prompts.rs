// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces a bare decimal reply.
pub const NUMERIC_ONLY_INSTRUCTION: &str = "\
    Respond with a single decimal number between 0.0 and 1.0 and nothing else. \
    Do NOT include words, units, percent signs, or explanations.";

/// Renders a list of strings as a JSON array for prompt interpolation.
pub fn json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
