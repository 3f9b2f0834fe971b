//! Run-scoped constant table

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// What a constant resolved to when it was declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Integer(i64),
    /// Non-numeric literal body, kept verbatim
    Text(String),
}

impl ConstantValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConstantValue::Integer(value) => Some(*value),
            ConstantValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Integer(value) => write!(f, "{}", value),
            ConstantValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Integer(value)
    }
}

/// How a second declaration of the same name is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedeclarationPolicy {
    /// Last write wins
    #[default]
    Overwrite,
    /// Redeclaring is a `ConstantRedeclared` error
    Reject,
}

/// Name to value mapping owned by one translation run
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConstantTable {
    values: BTreeMap<String, ConstantValue>,
    #[serde(skip)]
    policy: RedeclarationPolicy,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedeclarationPolicy) -> Self {
        Self {
            values: BTreeMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> RedeclarationPolicy {
        self.policy
    }

    /// Record a constant, honouring the redeclaration policy
    pub fn define(&mut self, name: &str, value: impl Into<ConstantValue>) -> Result<()> {
        let value = value.into();
        if self.values.contains_key(name) {
            match self.policy {
                RedeclarationPolicy::Reject => {
                    return Err(Error::ConstantRedeclared {
                        name: name.to_string(),
                    });
                }
                RedeclarationPolicy::Overwrite => {
                    log::warn!("Constant `{}` redeclared; keeping the new value {}", name, value);
                }
            }
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ConstantValue> {
        self.values.get(name)
    }

    /// Integer value of `name`. `Ok(None)` if undefined.
    pub fn integer(&self, name: &str) -> Result<Option<i64>> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ConstantValue::Integer(value)) => Ok(Some(*value)),
            Some(ConstantValue::Text(_)) => Err(Error::NonNumericConstant {
                name: name.to_string(),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConstantValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<S: Into<String>, V: Into<ConstantValue>> FromIterator<(S, V)> for ConstantTable {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            policy: RedeclarationPolicy::default(),
        }
    }
}
