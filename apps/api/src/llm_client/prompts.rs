// Cross-cutting prompt fragments. Each agent defines its task prompts in its
// own prompts.rs alongside it; this file holds only what every call shares.

/// System instruction sent with every completion request. The structured
/// output hint in the request body is advisory; this instruction is the
/// portable part of the JSON-only contract.
pub const JSON_ONLY_SYSTEM: &str =
    "You are a helpful AI assistant that outputs ONLY valid JSON.";
