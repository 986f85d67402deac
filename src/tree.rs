use crate::data::Example;
use crate::errors::ArborError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A trained decision tree.
///
/// A node is either a split over one attribute, with one child per observed
/// value, or a leaf carrying a classification. Every node exclusively owns
/// its children; branch maps are never mutated after construction. Branches
/// are kept sorted by value so that rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionTree {
    Split {
        attribute: String,
        branches: BTreeMap<String, DecisionTree>,
    },
    Leaf {
        value: String,
    },
}

impl DecisionTree {
    pub fn leaf(value: impl Into<String>) -> Self {
        DecisionTree::Leaf { value: value.into() }
    }

    /// Classify one example by descending matching branches until a leaf.
    ///
    /// A value for a split attribute that has no matching branch was never
    /// seen during training; it is reported as [`ArborError::UnknownValue`]
    /// rather than silently misclassified, and the caller can tally it
    /// separately. An example lacking the split attribute entirely reports
    /// the missing marker `?` as the offending value.
    pub fn evaluate(&self, example: &Example) -> Result<&str, ArborError> {
        let mut node = self;
        loop {
            match node {
                DecisionTree::Leaf { value } => return Ok(value),
                DecisionTree::Split { attribute, branches } => {
                    let value = example.get(attribute).map(String::as_str).unwrap_or("?");
                    node = branches.get(value).ok_or_else(|| ArborError::UnknownValue {
                        attribute: attribute.clone(),
                        value: value.to_string(),
                    })?;
                }
            }
        }
    }

    fn render(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        match self {
            DecisionTree::Leaf { value } => writeln!(f, "{}", value),
            DecisionTree::Split { attribute, branches } => {
                for (value, child) in branches {
                    write!(f, "{:indent$}", "", indent = depth * 2)?;
                    match child {
                        DecisionTree::Leaf { value: label } => {
                            writeln!(f, "{} = {}: {}", attribute, value, label)?;
                        }
                        split => {
                            writeln!(f, "{} = {}:", attribute, value)?;
                            split.render(f, depth + 1)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl Display for DecisionTree {
    /// Depth-first rendering, one `attribute = value` line per branch,
    /// indented by nesting depth, leaf branches terminated inline with
    /// their classification.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f, 0)
    }
}
