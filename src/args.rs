//! Positional/keyword invocation of a merge.
//!
//! A call is a URL, optionally followed by an ordered parameter collection
//! written as a JSON object, plus unordered keyword parameters. This is the
//! shape the `qparams` binary exposes, and the only place where argument
//! count and collection shape can be wrong at runtime.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::num::FpCategory;

use serde_json::Value;

use crate::error::{MergeError, Result};
use crate::merge::QueryMerge;
use crate::separator::Separator;
use crate::types::Policy;
use crate::value::ParamValue;

/// Most positional arguments a call accepts (URL and ordered parameters)
pub const MAX_POSITIONAL: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// URL, then an optional JSON object of ordered parameters
    pub positional: Vec<String>,
    /// Keyword parameters, merged after the ordered ones in no particular order
    pub keywords: HashMap<String, ParamValue>,
    pub policy: Policy,
    pub separator: Option<String>,
}

impl Invocation {
    pub fn new<I, S>(positional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: positional.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn keyword(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.keywords.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Validate the call and perform the merge.
    ///
    /// # Errors
    ///
    /// - [`MergeError::TooFewArguments`] with no positional argument
    /// - [`MergeError::TooManyArguments`] with more than [`MAX_POSITIONAL`]
    /// - [`MergeError::InvalidSeparator`] when the separator is neither `&` nor `;`
    /// - [`MergeError::InvalidCollection`] when the second positional argument is
    ///   non-empty and not a JSON object of scalars or scalar arrays
    pub fn call(self) -> Result<String> {
        let given = self.positional.len();
        if given == 0 {
            return Err(MergeError::TooFewArguments);
        }
        if given > MAX_POSITIONAL {
            return Err(MergeError::TooManyArguments { given });
        }

        let separator = self
            .separator
            .as_deref()
            .map(Separator::try_from)
            .transpose()?;

        let mut positional = self.positional.into_iter();
        let Some(url) = positional.next() else {
            return Err(MergeError::TooFewArguments);
        };
        let params = match positional.next() {
            Some(raw) => parse_collection(&raw)?,
            None => Vec::new(),
        };

        let mut merge = QueryMerge::new(&url)
            .policy(self.policy)
            .params(params)
            .overrides(self.keywords);
        if let Some(separator) = separator {
            merge = merge.separator(separator);
        }
        Ok(merge.apply())
    }
}

/// Parse the ordered parameters argument. Blank input and any empty or false
/// JSON value (`null`, `false`, `0`, `""`, `{}`, `[]`) count as no parameters.
///
/// # Errors
///
/// Returns [`MergeError::InvalidCollection`] for anything that is not a JSON
/// object of scalars (or arrays of scalars).
pub fn parse_collection(raw: &str) -> Result<Vec<(String, ParamValue)>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(raw)
        .map_err(|e| MergeError::InvalidCollection(format!("not valid JSON: {e}")))?;

    if is_empty_value(&value) {
        return Ok(Vec::new());
    }

    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| to_param_value(&value).map(|value| (key, value)))
            .collect(),
        other => Err(MergeError::InvalidCollection(format!(
            "expected a JSON object, got {}",
            kind(&other)
        ))),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Bool(true) => false,
        Value::Number(n) => n
            .as_f64()
            .is_some_and(|f| f.classify() == FpCategory::Zero),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn to_param_value(value: &Value) -> Result<ParamValue> {
    match value {
        Value::Null => Ok(ParamValue::Absent),
        Value::Array(items) => items
            .iter()
            .map(to_scalar)
            .collect::<Result<Vec<_>>>()
            .map(ParamValue::Sequence),
        Value::Object(_) => Err(MergeError::InvalidCollection(
            "nested objects are not supported as values".to_string(),
        )),
        scalar => Ok(ParamValue::Scalar(scalar_string(scalar))),
    }
}

fn to_scalar(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(_) | Value::Object(_) => Err(MergeError::InvalidCollection(format!(
            "sequence values must be scalars, got {}",
            kind(value)
        ))),
        scalar => Ok(Some(scalar_string(scalar))),
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a `key=value` keyword; a bare `key` has no value.
pub fn parse_keyword(raw: &str) -> (String, ParamValue) {
    match raw.split_once('=') {
        Some((key, value)) => (key.to_string(), ParamValue::from(value)),
        None => (raw.to_string(), ParamValue::Absent),
    }
}

/// Collect keywords into a map. A key given more than once becomes a
/// sequence of its values in the order given.
pub fn collect_keywords<I, S>(raw: I) -> HashMap<String, ParamValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keywords: HashMap<String, ParamValue> = HashMap::new();
    for item in raw {
        let (key, value) = parse_keyword(item.as_ref());
        match keywords.entry(key) {
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                let mut values = std::mem::take(existing).into_values();
                values.extend(value.into_values());
                *existing = ParamValue::Sequence(values);
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    keywords
}
