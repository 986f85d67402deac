use serde::{Deserialize, Serialize};

/// Reserved example key holding the target label.
pub const CLASSIFICATION: &str = "classification";

/// One training row: a mapping from attribute name to the observed value,
/// including the reserved [`CLASSIFICATION`] key for labeled examples.
pub type Example = hashbrown::HashMap<String, String>;

/// Declared value domain of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// Declared with a numeric datatype; no enumerated domain.
    Numeric,
    /// Declared nominal values, in declaration order.
    Nominal(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub domain: Domain,
}

/// A parsed relation: the declared attributes in encounter order and one
/// example per data row, values aligned positionally to the declarations.
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub relation: String,
    pub attributes: Vec<Attribute>,
    pub examples: Vec<Example>,
}

impl Dataset {
    /// Attribute names in declaration order.
    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name.clone()).collect()
    }

    /// Clone the examples with the `target` attribute re-keyed as the
    /// reserved classification key, ready to hand to a learner. The parse
    /// itself never renames anything.
    pub fn labeled_examples(&self, target: &str) -> Vec<Example> {
        self.examples
            .iter()
            .map(|example| {
                example
                    .iter()
                    .map(|(key, value)| {
                        let key = if key == target {
                            CLASSIFICATION.to_string()
                        } else {
                            key.clone()
                        };
                        (key, value.clone())
                    })
                    .collect()
            })
            .collect()
    }
}

/// Distinct values observed for `attribute`, in first-encounter order.
pub fn attribute_values(attribute: &str, examples: &[Example]) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for example in examples {
        if let Some(value) = example.get(attribute) {
            if !values.iter().any(|seen| seen == value) {
                values.push(value.clone());
            }
        }
    }
    values
}
