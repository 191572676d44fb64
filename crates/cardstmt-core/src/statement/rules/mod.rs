//! Pattern rules and the shared per-field extraction algorithm.
//!
//! Every issuer uses the same algorithm; only the rule tables differ. For
//! each field the rules are tried in priority order and the first capture
//! that survives normalization wins. Fields never affect each other.

pub mod normalize;
pub mod values;

pub use normalize::Normalizer;

use std::panic::{self, AssertUnwindSafe};

use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::models::statement::{Field, FieldSet};

/// Which part of a match becomes the raw field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// A single capture group.
    Group(usize),
    /// Two groups joined as `"start - end"`, for ranges written as
    /// `From X To Y`.
    Range(usize, usize),
}

impl Capture {
    /// Highest group index this capture reads.
    pub fn max_group(self) -> usize {
        match self {
            Capture::Group(group) => group,
            Capture::Range(start, end) => start.max(end),
        }
    }

    fn select(self, caps: &Captures<'_>) -> Option<String> {
        match self {
            Capture::Group(group) => caps.get(group).map(|m| m.as_str().to_string()),
            Capture::Range(start, end) => match (caps.get(start), caps.get(end)) {
                (Some(start), Some(end)) => {
                    Some(format!("{} - {}", start.as_str().trim(), end.as_str().trim()))
                }
                _ => None,
            },
        }
    }
}

/// A rule as written in a static issuer table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    /// Regex source; compiled case-insensitively.
    pub pattern: &'static str,
    /// What to capture.
    pub capture: Capture,
}

impl RuleSpec {
    /// Rule capturing group 1.
    pub const fn group(pattern: &'static str) -> Self {
        Self {
            pattern,
            capture: Capture::Group(1),
        }
    }

    /// Rule joining groups 1 and 2 as a range.
    pub const fn range(pattern: &'static str) -> Self {
        Self {
            pattern,
            capture: Capture::Range(1, 2),
        }
    }
}

/// What happened when a rule was applied to a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The rule matched and produced this normalized value.
    Matched(String),
    /// The rule matched, but the normalizer rejected every capture; holds
    /// the first raw capture.
    Rejected(String),
    /// The pattern did not match.
    NoMatch,
    /// Evaluating the rule panicked.
    Faulted,
}

/// One candidate pattern for one field.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    capture: Capture,
    normalizer: Normalizer,
}

impl PatternRule {
    /// Compile a case-insensitive rule.
    pub fn new(pattern: &str, capture: Capture, normalizer: Normalizer) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            regex,
            capture,
            normalizer,
        })
    }

    /// Regex source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Capture selection.
    pub fn capture(&self) -> Capture {
        self.capture
    }

    /// Number of capture groups in the pattern, excluding the whole match.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Apply the rule to `text`.
    ///
    /// Matches are visited left to right; the first one whose capture
    /// normalizes successfully wins. A panic inside matching or
    /// normalization is contained and reported as [`RuleOutcome::Faulted`].
    pub fn evaluate(&self, text: &str) -> RuleOutcome {
        panic::catch_unwind(AssertUnwindSafe(|| self.apply(text))).unwrap_or(RuleOutcome::Faulted)
    }

    fn apply(&self, text: &str) -> RuleOutcome {
        let mut rejected = None;

        for caps in self.regex.captures_iter(text) {
            let Some(raw) = self.capture.select(&caps) else {
                continue;
            };
            match self.normalizer.apply(&raw) {
                Some(value) => return RuleOutcome::Matched(value),
                None => {
                    rejected.get_or_insert(raw);
                }
            }
        }

        match rejected {
            Some(raw) => RuleOutcome::Rejected(raw),
            None => RuleOutcome::NoMatch,
        }
    }
}

/// One rule's result, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct RuleAttempt {
    /// Position in the field's priority list.
    pub index: usize,
    /// Regex source.
    pub pattern: String,
    /// Result of applying it.
    #[serde(flatten)]
    pub outcome: RuleOutcome,
}

/// Every rule tried for one field, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct FieldTrace {
    /// The field.
    pub field: Field,
    /// The value extraction settles on.
    pub value: Option<String>,
    /// All rules in priority order, including those after the winner.
    pub attempts: Vec<RuleAttempt>,
}

impl FieldTrace {
    /// Index of the rule that produced the value.
    pub fn winning_rule(&self) -> Option<usize> {
        self.attempts
            .iter()
            .take_while(|attempt| attempt.outcome != RuleOutcome::Faulted)
            .find(|attempt| matches!(attempt.outcome, RuleOutcome::Matched(_)))
            .map(|attempt| attempt.index)
    }
}

/// Trait for field extractors.
pub trait FieldExtractor: Send + Sync {
    /// Extract all five fields from text.
    fn extract(&self, text: &str) -> FieldSet;

    /// Extract with a per-rule account of what matched.
    fn trace(&self, text: &str) -> Vec<FieldTrace>;
}

/// Ordered rule lists for all five fields.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: [Vec<PatternRule>; 5],
}

impl RuleSet {
    /// Empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the lowest priority for `field`.
    pub fn push(&mut self, field: Field, rule: PatternRule) {
        self.rules[field as usize].push(rule);
    }

    /// Rules for `field`, highest priority first.
    pub fn rules(&self, field: Field) -> &[PatternRule] {
        &self.rules[field as usize]
    }

    /// Total rule count across fields.
    pub fn len(&self) -> usize {
        self.rules.iter().map(Vec::len).sum()
    }

    /// No rules at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run one field's priority list.
    ///
    /// A faulting rule leaves the field absent without trying lower
    /// priority rules.
    pub fn extract_field(&self, field: Field, text: &str) -> Option<String> {
        for (index, rule) in self.rules(field).iter().enumerate() {
            match rule.evaluate(text) {
                RuleOutcome::Matched(value) => {
                    trace!("{} matched rule #{}: {:?}", field, index, value);
                    return Some(value);
                }
                RuleOutcome::Rejected(raw) => {
                    trace!("{} rule #{} capture rejected: {:?}", field, index, raw);
                }
                RuleOutcome::NoMatch => {}
                RuleOutcome::Faulted => {
                    warn!("{} rule #{} faulted, leaving field absent", field, index);
                    return None;
                }
            }
        }

        debug!("Could not extract {}", field);
        None
    }

    /// Run every rule of one field and record each outcome.
    pub fn trace_field(&self, field: Field, text: &str) -> FieldTrace {
        let attempts: Vec<RuleAttempt> = self
            .rules(field)
            .iter()
            .enumerate()
            .map(|(index, rule)| RuleAttempt {
                index,
                pattern: rule.pattern().to_string(),
                outcome: rule.evaluate(text),
            })
            .collect();

        let value = attempts
            .iter()
            .take_while(|attempt| attempt.outcome != RuleOutcome::Faulted)
            .find_map(|attempt| match &attempt.outcome {
                RuleOutcome::Matched(value) => Some(value.clone()),
                _ => None,
            });

        FieldTrace {
            field,
            value,
            attempts,
        }
    }
}

impl FieldExtractor for RuleSet {
    fn extract(&self, text: &str) -> FieldSet {
        let mut fields = FieldSet::default();
        for field in Field::ALL {
            fields.set(field, self.extract_field(field, text));
        }
        fields
    }

    fn trace(&self, text: &str) -> Vec<FieldTrace> {
        Field::ALL
            .into_iter()
            .map(|field| self.trace_field(field, text))
            .collect()
    }
}
