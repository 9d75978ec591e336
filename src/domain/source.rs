//! Caller-supplied menu data.
//!
//! An `EntrySource` is either a flat list of names or an ordered list of
//! `name -> action` pairs whose values may nest further sources. The shape is
//! resolved once, at the boundary (`from_value`), so nothing downstream has
//! to inspect dynamic data.

use serde_json::Value;

use crate::error::{MenuError, MenuResult};

/// Raw menu data for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Plain choices, in order
    Sequence(Vec<String>),
    /// Named choices with attached actions, in document order
    Mapping(Vec<(String, ActionSpec)>),
}

/// Value attached to a name in a mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSpec {
    /// No action; the name itself is the result
    Empty,
    /// Action string handed to the executor (may carry the nested prefix)
    Command(String),
    /// A child menu
    Nested(EntrySource),
}

impl EntrySource {
    /// Build a flat source from anything yielding names.
    pub fn sequence<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EntrySource::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping source from `(name, action)` pairs.
    pub fn mapping<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, ActionSpec)>,
        S: Into<String>,
    {
        EntrySource::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Number of top-level items
    pub fn len(&self) -> usize {
        match self {
            EntrySource::Sequence(items) => items.len(),
            EntrySource::Mapping(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a parsed document into a source.
    ///
    /// Top level must be an array or an object. Array items must be scalars;
    /// object values may be null, scalars, arrays or objects.
    pub fn from_value(value: Value) -> MenuResult<Self> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(scalar_name)
                .collect::<MenuResult<Vec<_>>>()
                .map(EntrySource::Sequence),
            Value::Object(map) => map
                .into_iter()
                .map(|(name, value)| Ok((name, ActionSpec::from_value(value)?)))
                .collect::<MenuResult<Vec<_>>>()
                .map(EntrySource::Mapping),
            other => Err(MenuError::UnsupportedInputKind {
                found: kind_name(&other).to_string(),
            }),
        }
    }
}

impl ActionSpec {
    /// Convenience constructor for command actions
    pub fn command(action: impl Into<String>) -> Self {
        ActionSpec::Command(action.into())
    }

    fn from_value(value: Value) -> MenuResult<Self> {
        match value {
            Value::Null => Ok(ActionSpec::Empty),
            Value::String(s) if s.is_empty() => Ok(ActionSpec::Empty),
            Value::String(s) => Ok(ActionSpec::Command(s)),
            Value::Bool(b) => Ok(ActionSpec::Command(b.to_string())),
            Value::Number(n) => Ok(ActionSpec::Command(n.to_string())),
            nested @ (Value::Array(_) | Value::Object(_)) => {
                EntrySource::from_value(nested).map(ActionSpec::Nested)
            }
        }
    }
}

fn scalar_name(value: Value) -> MenuResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(MenuError::UnsupportedInputKind {
            found: format!("{} inside a list", kind_name(&other)),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
