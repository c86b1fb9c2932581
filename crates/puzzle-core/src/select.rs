//! Candidate selection: theme and rating filters, ranked by popularity.

use std::cmp::Reverse;

use regex::Regex;
use tracing::{debug, warn};

use crate::record::CandidateRecord;

/// How the policy's themes combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// At least one theme present
    #[default]
    Any,
    /// Every theme present
    All,
}

/// How a single policy theme is compared against a puzzle's themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMatching {
    /// The theme is one of the puzzle's themes.
    #[default]
    Exact,
    /// The theme occurs anywhere in the puzzle's theme line, so `mate`
    /// also picks up `mateIn2` and `backRankMate`.
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub themes: Vec<String>,
    pub match_mode: MatchMode,
    pub matching: TagMatching,
    /// Inclusive
    pub min_rating: i32,
    /// Inclusive
    pub max_rating: i32,
    /// 0 = no limit
    pub max_candidates: usize,
}

impl SelectionPolicy {
    /// Exact-match ANY policy, the common case.
    pub fn any<S: Into<String>>(
        themes: impl IntoIterator<Item = S>,
        min_rating: i32,
        max_rating: i32,
        max_candidates: usize,
    ) -> Self {
        Self {
            themes: themes.into_iter().map(Into::into).collect(),
            match_mode: MatchMode::Any,
            matching: TagMatching::Exact,
            min_rating,
            max_rating,
            max_candidates,
        }
    }

    pub fn with_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_matching(mut self, matching: TagMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn rating_in_range(&self, rating: i32) -> bool {
        self.min_rating <= rating && rating <= self.max_rating
    }
}

/// Theme predicate compiled once per selection.
enum ThemeFilter<'p> {
    /// Empty theme list: everything passes
    Open,
    Exact(&'p [String], MatchMode),
    /// Substring ANY: one alternation over the theme line
    Pattern(Regex),
    Substrings(&'p [String], MatchMode),
}

impl<'p> ThemeFilter<'p> {
    fn new(policy: &'p SelectionPolicy) -> Self {
        if policy.themes.is_empty() {
            return ThemeFilter::Open;
        }
        match (policy.matching, policy.match_mode) {
            (TagMatching::Exact, mode) => ThemeFilter::Exact(&policy.themes, mode),
            (TagMatching::Substring, MatchMode::Any) => {
                let pattern = policy
                    .themes
                    .iter()
                    .map(|t| regex::escape(t))
                    .collect::<Vec<_>>()
                    .join("|");
                match Regex::new(&pattern) {
                    Ok(re) => ThemeFilter::Pattern(re),
                    Err(e) => {
                        warn!(error = %e, "Theme pattern rejected, matching themes one by one");
                        ThemeFilter::Substrings(&policy.themes, MatchMode::Any)
                    }
                }
            }
            (TagMatching::Substring, MatchMode::All) => {
                ThemeFilter::Substrings(&policy.themes, MatchMode::All)
            }
        }
    }

    fn matches(&self, record: &CandidateRecord) -> bool {
        match self {
            ThemeFilter::Open => true,
            ThemeFilter::Exact(themes, MatchMode::Any) => {
                themes.iter().any(|t| record.has_theme(t))
            }
            ThemeFilter::Exact(themes, MatchMode::All) => {
                themes.iter().all(|t| record.has_theme(t))
            }
            ThemeFilter::Pattern(re) => re.is_match(&record.themes_line()),
            ThemeFilter::Substrings(themes, mode) => {
                let line = record.themes_line();
                match mode {
                    MatchMode::Any => themes.iter().any(|t| line.contains(t.as_str())),
                    MatchMode::All => themes.iter().all(|t| line.contains(t.as_str())),
                }
            }
        }
    }
}

/// Pick the puzzles matching `policy`, most popular first.
///
/// Ties keep dataset order. Returns an empty list rather than an error when
/// nothing matches.
pub fn select<'a>(
    records: &'a [CandidateRecord],
    policy: &SelectionPolicy,
) -> Vec<&'a CandidateRecord> {
    let filter = ThemeFilter::new(policy);

    let mut selected: Vec<&CandidateRecord> = records
        .iter()
        .filter(|r| policy.rating_in_range(r.rating) && filter.matches(r))
        .collect();
    let matched = selected.len();

    // stable, so equal popularity keeps input order
    selected.sort_by_key(|r| Reverse(r.popularity));

    if policy.max_candidates > 0 {
        selected.truncate(policy.max_candidates);
    }

    debug!(
        scanned = records.len(),
        matched,
        kept = selected.len(),
        "Selection finished"
    );
    selected
}
