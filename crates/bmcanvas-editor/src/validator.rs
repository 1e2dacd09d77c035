//! Canvas validation
//!
//! The validator holds a fixed table of rules. Each rule names a section, a
//! predicate over the whole record, and the message shown when the predicate
//! fails. Evaluation is pure: the same record always yields the same results
//! in rule declaration order.

use bmcanvas_core::{CanvasRecord, Section};
use serde::Serialize;
use std::fmt;

/// Predicate a rule evaluates; `true` means the rule passes
pub type RulePredicate = Box<dyn Fn(&CanvasRecord) -> bool + Send + Sync>;

/// A single validation rule
pub struct ValidationRule {
    pub section: Section,
    pub message: String,
    check: RulePredicate,
}

impl ValidationRule {
    /// Create a rule from an arbitrary predicate
    pub fn new<F>(section: Section, message: impl Into<String>, check: F) -> Self
    where
        F: Fn(&CanvasRecord) -> bool + Send + Sync + 'static,
    {
        Self {
            section,
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// Rule that passes when the section has at least `min_chars` characters
    pub fn min_length(section: Section, min_chars: usize, message: impl Into<String>) -> Self {
        Self::new(section, message, move |record| {
            record.get(section).chars().count() >= min_chars
        })
    }

    /// Evaluate the rule against a record
    pub fn passes(&self, record: &CanvasRecord) -> bool {
        (self.check)(record)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("section", &self.section)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// A failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub section: Section,
    pub message: String,
}

/// Results of one validation pass, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.is_empty()
    }

    /// Sections with at least one failing rule, in first-failure order
    pub fn invalid_sections(&self) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        for result in &self.results {
            if !sections.contains(&result.section) {
                sections.push(result.section);
            }
        }
        sections
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return write!(f, "All sections look good!");
        }
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "• {}: {}", result.section.title(), result.message)?;
        }
        Ok(())
    }
}

/// Rule-based canvas validator
#[derive(Debug)]
pub struct Validator {
    rules: Vec<ValidationRule>,
}

impl Validator {
    /// Validator with the standard content-length rules
    pub fn new() -> Self {
        Self::with_rules(vec![
            ValidationRule::min_length(
                Section::ValueProposition,
                100,
                "Consider adding more detail about your value proposition",
            ),
            ValidationRule::min_length(
                Section::CustomerSegments,
                50,
                "Customer segments need more specific details",
            ),
            ValidationRule::min_length(
                Section::KeyActivities,
                50,
                "Add more details about your key activities",
            ),
            ValidationRule::min_length(
                Section::CostStructure,
                50,
                "Elaborate on your cost structure",
            ),
            ValidationRule::min_length(
                Section::RevenueStreams,
                50,
                "Provide more information about revenue streams",
            ),
        ])
    }

    /// Validator with a custom rule table
    pub fn with_rules(rules: Vec<ValidationRule>) -> Self {
        Self { rules }
    }

    /// The rule table, in declaration order
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// One result per failing rule, in declaration order
    pub fn validate(&self, record: &CanvasRecord) -> Vec<ValidationResult> {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(record))
            .map(|rule| ValidationResult {
                section: rule.section,
                message: rule.message.clone(),
            })
            .collect()
    }

    /// Validate and wrap the results for display
    pub fn report(&self, record: &CanvasRecord) -> ValidationReport {
        ValidationReport {
            results: self.validate(record),
        }
    }

    /// Whether no rule for `section` fails
    pub fn is_section_valid(&self, record: &CanvasRecord, section: Section) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.section == section)
            .all(|rule| rule.passes(record))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
