//! Prompt builder: base request plus at most one role-specific clause.
//!
//! Clauses live in an ordered rule table. The first rule whose predicate matches the
//! current role wins, so a role mentioning both "nurse" and "sales" gets only the
//! nursing clause. Adding a clause means adding a row, not touching callers.

use crate::bridge::prompts::{base_prompt, NURSE_TRIAGE_CLAUSE, SALES_REVOPS_CLAUSE};

/// One row of the clause table.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub clause: &'static str,
}

/// Rules in priority order.
pub const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        name: "nurse",
        matches: mentions_nurse,
        clause: NURSE_TRIAGE_CLAUSE,
    },
    RoleRule {
        name: "sales",
        matches: mentions_sales,
        clause: SALES_REVOPS_CLAUSE,
    },
];

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn mentions_nurse(role: &str) -> bool {
    contains_ignore_case(role, "nurse")
}

fn mentions_sales(role: &str) -> bool {
    contains_ignore_case(role, "sales")
}

/// First rule in `rules` matching `current_role`, if any.
pub fn matched_rule<'a>(rules: &'a [RoleRule], current_role: &str) -> Option<&'a RoleRule> {
    rules.iter().find(|rule| (rule.matches)(current_role))
}

/// Builds the generation prompt with the default rule table.
pub fn build_prompt(current_role: &str, target_role: &str) -> String {
    build_prompt_with(ROLE_RULES, current_role, target_role)
}

/// Builds the generation prompt against an explicit rule table.
pub fn build_prompt_with(rules: &[RoleRule], current_role: &str, target_role: &str) -> String {
    let mut prompt = base_prompt(current_role, target_role);
    if let Some(rule) = matched_rule(rules, current_role) {
        prompt.push('\n');
        prompt.push_str(rule.clause);
    }
    prompt
}
