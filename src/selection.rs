//! Selection
//!
//! Attribute scoring strategies used to rank candidate split attributes.
//! Higher scores are better; the learner takes the first attribute reaching
//! the maximum, so ties resolve in candidate-list order.
use crate::data::{attribute_values, Example, CLASSIFICATION};

pub trait SelectionPolicy {
    fn score(&self, attribute: &str, examples: &[Example]) -> f64;
}

/// Scores every attribute the same, which degenerates induction to
/// splitting in attribute-list order. Useful when the selection order is
/// fixed externally.
pub struct ConstantScore {
    pub value: f64,
}

impl Default for ConstantScore {
    fn default() -> Self {
        ConstantScore { value: 1.0 }
    }
}

impl SelectionPolicy for ConstantScore {
    fn score(&self, _attribute: &str, _examples: &[Example]) -> f64 {
        self.value
    }
}

/// Binary entropy `B(q)` in bits, with the log singularity guarded so that
/// `B(0) = B(1) = 0`.
pub fn binary_entropy(q: f64) -> f64 {
    if q <= 0.0 || q >= 1.0 {
        return 0.0;
    }
    -(q * q.log2() + (1.0 - q) * (1.0 - q).log2())
}

/// Two-class information gain over a fixed pair of outcome labels.
///
/// The gain is the base entropy of the whole subset minus the
/// example-count-weighted entropies of the per-value subsets, i.e. the
/// expected remaining uncertainty after the split.
pub struct BinaryGain {
    positive: String,
    negative: String,
}

impl BinaryGain {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        BinaryGain {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    fn counts<'a>(&self, examples: impl Iterator<Item = &'a Example>) -> (f64, f64) {
        let mut positive = 0.0;
        let mut negative = 0.0;
        for example in examples {
            match example.get(CLASSIFICATION).map(String::as_str) {
                Some(label) if label == self.positive => positive += 1.0,
                Some(label) if label == self.negative => negative += 1.0,
                _ => {}
            }
        }
        (positive, negative)
    }
}

impl SelectionPolicy for BinaryGain {
    fn score(&self, attribute: &str, examples: &[Example]) -> f64 {
        let (positive, negative) = self.counts(examples.iter());
        let total = positive + negative;
        if total == 0.0 {
            return 0.0;
        }
        let base = binary_entropy(positive / total);
        let mut remainder = 0.0;
        for value in attribute_values(attribute, examples) {
            let (sub_positive, sub_negative) = self.counts(
                examples
                    .iter()
                    .filter(|e| e.get(attribute).map(String::as_str) == Some(value.as_str())),
            );
            let size = sub_positive + sub_negative;
            if size == 0.0 {
                continue;
            }
            remainder += size / total * binary_entropy(sub_positive / size);
        }
        base - remainder
    }
}

/// Information gain for an arbitrary fixed list of class labels.
///
/// Entropy is taken with logarithm base equal to the class count, so the
/// maximum entropy is 1 regardless of how many classes there are. A class
/// with no examples in a subset contributes zero.
pub struct MulticlassGain {
    classes: Vec<String>,
}

impl MulticlassGain {
    pub fn new(classes: Vec<String>) -> Self {
        MulticlassGain { classes }
    }

    fn class_counts<'a>(&self, examples: impl Iterator<Item = &'a Example>) -> Vec<f64> {
        let mut counts = vec![0.0; self.classes.len()];
        for example in examples {
            if let Some(label) = example.get(CLASSIFICATION) {
                if let Some(k) = self.classes.iter().position(|c| c == label) {
                    counts[k] += 1.0;
                }
            }
        }
        counts
    }

    fn entropy(&self, counts: &[f64]) -> f64 {
        let log_base = (self.classes.len() as f64).ln();
        let total: f64 = counts.iter().sum();
        if self.classes.len() < 2 || total == 0.0 {
            return 0.0;
        }
        counts
            .iter()
            .map(|&count| {
                let p = count / total;
                if p > 0.0 {
                    -p * p.ln() / log_base
                } else {
                    0.0
                }
            })
            .sum()
    }
}

impl SelectionPolicy for MulticlassGain {
    fn score(&self, attribute: &str, examples: &[Example]) -> f64 {
        let counts = self.class_counts(examples.iter());
        let total: f64 = counts.iter().sum();
        if total == 0.0 {
            return 0.0;
        }
        let base = self.entropy(&counts);
        let mut remainder = 0.0;
        for value in attribute_values(attribute, examples) {
            let sub_counts = self.class_counts(
                examples
                    .iter()
                    .filter(|e| e.get(attribute).map(String::as_str) == Some(value.as_str())),
            );
            let size: f64 = sub_counts.iter().sum();
            if size == 0.0 {
                continue;
            }
            remainder += size / total * self.entropy(&sub_counts);
        }
        base - remainder
    }
}
