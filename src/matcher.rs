// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Fuzzy template name matching.
//!
//! Template names are filtered, not ranked. A candidate name matches a search
//! term through one of two stages:
//!
//! 1. __Containment__: the lower-cased candidate contains the lower-cased term.
//! 2. __Similarity__: with every character that is not a letter or digit
//!    stripped away from both sides, the candidate starts or ends with the
//!    term. Thus "node" finds "Node.js", and "3" finds "Python3".
//!
//! Each candidate is reported at most once, even when both stages succeed.

/// Matcher for one search term.
///
/// Normalizes the search term once so it can be checked against any number of
/// candidate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatcher {
    term: String,
    stripped: String,
}

impl FuzzyMatcher {
    /// Construct new matcher for target search term.
    pub fn new(term: impl AsRef<str>) -> Self {
        let term = term.as_ref().to_lowercase();
        let stripped = strip_special(&term);
        Self { term, stripped }
    }

    /// Check if candidate name matches search term.
    pub fn is_match(&self, candidate: impl AsRef<str>) -> bool {
        let candidate = candidate.as_ref().to_lowercase();
        if candidate.contains(&self.term) {
            return true;
        }

        let candidate = strip_special(&candidate);
        candidate.starts_with(&self.stripped) || candidate.ends_with(&self.stripped)
    }
}

/// Filter candidate names by search term.
///
/// Preserves the order of `candidates`. An empty term matches everything.
pub fn fuzzy_search(
    candidates: impl IntoIterator<Item = impl AsRef<str>>,
    term: impl AsRef<str>,
) -> Vec<String> {
    let matcher = FuzzyMatcher::new(term);
    candidates
        .into_iter()
        .filter(|candidate| matcher.is_match(candidate))
        .map(|candidate| candidate.as_ref().to_owned())
        .collect()
}

fn strip_special(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}
