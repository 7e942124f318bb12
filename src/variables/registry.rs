use serde::{Deserialize, Serialize};

use crate::error::{Result, VareditError};

/// A named placeholder that can be inserted into a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Stable key used to look the value up at render time.
    pub id: String,
    /// Display text shown in the document and candidate list.
    pub label: String,
    /// Value substituted in rendered exports.
    pub value: String,
}

impl Variable {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered, immutable list of variables.
///
/// Ids are unique. Order is significant: filtering preserves it, so the
/// candidate list always reads in registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableRegistry {
    variables: Vec<Variable>,
}

impl VariableRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(variables: Vec<Variable>) -> Result<Self> {
        for (idx, variable) in variables.iter().enumerate() {
            if variables[..idx].iter().any(|v| v.id == variable.id) {
                return Err(VareditError::DuplicateId(variable.id.clone()));
            }
        }
        Ok(Self { variables })
    }

    /// Parse a JSON array of `{id, label, value}` records.
    pub fn from_json(json: &str) -> Result<Self> {
        let variables: Vec<Variable> =
            serde_json::from_str(json).map_err(VareditError::Registry)?;
        Self::new(variables)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Look a variable up by id.
    pub fn get(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Variables whose label contains `query`, ignoring case, in registry order.
    ///
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<Variable> {
        let needle = query.to_lowercase();
        self.variables
            .iter()
            .filter(|v| v.label.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Merge `other` over `self`.
    ///
    /// Entries in `other` replace same-id entries in place; new ids are
    /// appended in `other`'s order.
    pub fn union(&self, other: &Self) -> Self {
        let mut variables = self.variables.clone();
        for variable in &other.variables {
            if let Some(existing) = variables.iter_mut().find(|v| v.id == variable.id) {
                *existing = variable.clone();
            } else {
                variables.push(variable.clone());
            }
        }
        Self { variables }
    }
}

impl<'a> IntoIterator for &'a VariableRegistry {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
