// Shared prompt fragments.
// Each feature that calls the LLM keeps its own prompts.rs alongside it.

/// Instruction appended to every prompt whose answer is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "IMPORTANT: You must respond with ONLY valid JSON \
    in the exact format specified below. Do not include any text before or after the JSON. \
    Do NOT use markdown code fences.";
