//! Algorithm selection
//!
//! Interprets the user filter (`all` or a comma separated list) against a
//! list of registry identifiers. Unknown tokens never fail the run; they are
//! collected so the caller can report them.

use compbench_types::Error;
use std::collections::HashSet;
use tracing::info;

/// Reserved filter token selecting every identifier
pub const ALL: &str = "all";

/// Result of resolving a user filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOutcome {
    selected: Vec<String>,
    rejected: Vec<String>,
}

impl SelectionOutcome {
    /// Identifiers to benchmark, deduplicated, in registry order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Normalized tokens that matched nothing, in first-occurrence order
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    /// Check if an identifier was selected
    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Number of selected identifiers
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Rejected tokens as diagnostic errors
    pub fn rejection_errors(&self) -> Vec<Error> {
        self.rejected.iter().map(Error::unknown_token).collect()
    }
}

/// Resolve `filter` against `identifiers` (given in registry order)
///
/// `"all"` is matched case-sensitively. Any other filter is split on commas;
/// each token is trimmed and lowercased. Empty tokens are skipped.
pub fn resolve(filter: &str, identifiers: &[&str]) -> SelectionOutcome {
    if filter == ALL {
        return SelectionOutcome {
            selected: identifiers.iter().map(|id| (*id).to_string()).collect(),
            rejected: Vec::new(),
        };
    }

    let known: HashSet<&str> = identifiers.iter().copied().collect();
    let mut requested = HashSet::new();
    let mut rejected: Vec<String> = Vec::new();

    for token in filter.split(',') {
        let token = token.trim().to_lowercase();
        if token.is_empty() {
            continue;
        }
        if known.contains(token.as_str()) {
            requested.insert(token);
        } else if !rejected.contains(&token) {
            info!("Ignoring unsupported algorithm: {}", token);
            rejected.push(token);
        }
    }

    let selected = identifiers
        .iter()
        .filter(|id| requested.contains(**id))
        .map(|id| (*id).to_string())
        .collect();

    SelectionOutcome { selected, rejected }
}
