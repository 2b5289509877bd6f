//! Declarative validation for storefront forms (reviews, contact).
//!
//! A form is a map of field name to raw text. Each field declares a list
//! of rules; validation returns every violated rule, never stopping at the
//! first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw form input keyed by field name.
pub type FormInput = BTreeMap<String, String>;

/// A single constraint on a field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRule {
    /// Value must be present and not blank.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// Looks like an e-mail address.
    Email,
    /// Integer within `min..=max`.
    Range { min: i64, max: i64 },
}

/// Rules declared for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: String,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    pub fn new(field: impl Into<String>, rules: Vec<FieldRule>) -> Self {
        Self {
            field: field.into(),
            rules,
        }
    }
}

/// A rule a field failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: FieldRule,
    pub message: String,
}

/// Check `input` against every spec.
///
/// Optional fields that are blank skip their remaining rules.
pub fn validate(input: &FormInput, specs: &[FieldSpec]) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    for spec in specs {
        let value = input.get(&spec.field).map(|v| v.trim()).unwrap_or("");
        let required = spec.rules.contains(&FieldRule::Required);

        if value.is_empty() {
            if required {
                violations.push(violation(spec, FieldRule::Required, "is required".to_string()));
            }
            continue;
        }

        for rule in &spec.rules {
            if let Some(message) = check(rule, value) {
                violations.push(violation(spec, rule.clone(), message));
            }
        }
    }

    violations
}

fn violation(spec: &FieldSpec, rule: FieldRule, message: String) -> FieldViolation {
    FieldViolation {
        field: spec.field.clone(),
        rule,
        message: format!("{} {}", spec.field, message),
    }
}

fn check(rule: &FieldRule, value: &str) -> Option<String> {
    match rule {
        FieldRule::Required => None,
        FieldRule::MinLength(min) => {
            (value.chars().count() < *min).then(|| format!("must have at least {min} characters"))
        }
        FieldRule::MaxLength(max) => {
            (value.chars().count() > *max).then(|| format!("must have at most {max} characters"))
        }
        FieldRule::Email => (!looks_like_email(value)).then(|| "must be a valid e-mail".to_string()),
        FieldRule::Range { min, max } => match value.parse::<i64>() {
            Ok(n) if (*min..=*max).contains(&n) => None,
            _ => Some(format!("must be a number from {min} to {max}")),
        },
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Rules for the product review form.
pub fn review_form() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", vec![FieldRule::Required, FieldRule::MaxLength(80)]),
        FieldSpec::new("rating", vec![FieldRule::Required, FieldRule::Range { min: 1, max: 5 }]),
        FieldSpec::new(
            "comment",
            vec![FieldRule::Required, FieldRule::MinLength(10), FieldRule::MaxLength(1000)],
        ),
    ]
}

/// Rules for the contact form.
pub fn contact_form() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", vec![FieldRule::Required, FieldRule::MaxLength(80)]),
        FieldSpec::new("email", vec![FieldRule::Required, FieldRule::Email]),
        FieldSpec::new("phone", vec![FieldRule::MinLength(8), FieldRule::MaxLength(20)]),
        FieldSpec::new("subject", vec![FieldRule::Required, FieldRule::MaxLength(120)]),
        FieldSpec::new(
            "message",
            vec![FieldRule::Required, FieldRule::MinLength(10), FieldRule::MaxLength(2000)],
        ),
    ]
}
