// All LLM prompt text for the career bridge.
// The base request is interpolated with `format!` so role text lands verbatim,
// even when it contains braces.

/// Clause appended when the current role mentions nursing.
pub const NURSE_TRIAGE_CLAUSE: &str = "This person is a nurse: reframe their clinical \
    triage experience as product prioritization experience, showing how rapidly assessing \
    and ranking competing patient needs maps to ranking features and backlog items by impact.";

/// Clause appended when the current role mentions sales.
pub const SALES_REVOPS_CLAUSE: &str = "This person works in sales: reframe their cold \
    outreach experience as automated RevOps (revenue operations) experience, showing how \
    prospecting cadences map to pipeline automation and conversion analytics.";

/// The base instruction with both roles interpolated verbatim.
pub fn base_prompt(current_role: &str, target_role: &str) -> String {
    format!(
        "Analyze the transition from {current_role} to {target_role}.\n\
         1. Find 2 actual companies currently hiring for this role in 2026.\n\
         2. Translate 3 specific skills from {current_role} into {target_role} terminology.\n\
         3. Provide a 30-day micro-learning roadmap."
    )
}
