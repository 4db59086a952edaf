//! No-class rules and the per-section schedule.
//!
//! A rule blocks an inclusive date range, either for every section or for a
//! listed subset.  The rule table is injected configuration; the resolver
//! only reads it.

use crate::section::SectionId;
use rb_time::Date;
use serde::{Deserialize, Serialize};

/// A rule suspending classes over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoClassRule {
    /// Why classes are suspended (e.g. `"Midterm exams"`).
    pub reason: String,
    /// First affected day.
    pub from: Date,
    /// Last affected day.
    pub to: Date,
    /// Affected sections; `None` applies the rule to every section.
    #[serde(default)]
    pub sections: Option<Vec<SectionId>>,
}

impl NoClassRule {
    /// Return `true` if this rule blocks `date` for `section`.
    ///
    /// A rule whose `from` is after its `to` matches no date.
    pub fn applies_to(&self, date: Date, section: &SectionId) -> bool {
        self.from <= date
            && date <= self.to
            && match &self.sections {
                None => true,
                Some(list) => list.contains(section),
            }
    }
}

/// The no-class rule table consulted per (date, section).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionSchedule {
    rules: Vec<NoClassRule>,
}

impl SectionSchedule {
    /// An empty schedule (no suspensions).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn push(&mut self, rule: NoClassRule) {
        self.rules.push(rule);
    }

    /// Return the reason classes are suspended on `date` for `section`.
    ///
    /// The first matching rule wins.  A section no rule mentions resolves
    /// to `None`, including one the deployment has never heard of.
    pub fn check(&self, date: Date, section: &SectionId) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.applies_to(date, section))
            .map(|r| r.reason.as_str())
    }

    /// All rules in insertion order.
    pub fn rules(&self) -> &[NoClassRule] {
        &self.rules
    }

    /// Return `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
