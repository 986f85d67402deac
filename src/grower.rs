use crate::data::{attribute_values, Example, CLASSIFICATION};
use crate::prune::SignificanceTest;
use crate::selection::SelectionPolicy;
use crate::tree::DecisionTree;
use log::debug;
use std::collections::BTreeMap;

/// Result of one induction call: either a grown subtree, or a bare
/// classification label when the subset needed no splitting. Callers at
/// the root normalize with [`Induction::into_tree`] before further use.
#[derive(Debug, Clone, PartialEq)]
pub enum Induction {
    Tree(DecisionTree),
    Label(String),
}

impl Induction {
    /// Normalize into a tree; a bare label becomes a single leaf.
    pub fn into_tree(self) -> DecisionTree {
        match self {
            Induction::Tree(tree) => tree,
            Induction::Label(value) => DecisionTree::Leaf { value },
        }
    }
}

/// Recursive decision tree learner over categorical examples.
///
/// Each split removes the chosen attribute from the candidate list before
/// recursing, so recursion depth is bounded by the number of candidate
/// attributes.
pub struct Learner<'a> {
    policy: &'a dyn SelectionPolicy,
    gate: Option<&'a dyn SignificanceTest>,
}

impl<'a> Learner<'a> {
    pub fn new(policy: &'a dyn SelectionPolicy) -> Self {
        Learner { policy, gate: None }
    }

    /// Gate candidate splits on a significance test before emitting them.
    /// Rejected splits fall back to a plurality leaf of the current subset.
    pub fn with_gate(mut self, gate: &'a dyn SignificanceTest) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Induce a tree for `examples` over the candidate `attributes`.
    ///
    /// `parent` is the example subset of the enclosing split, used as the
    /// plurality fallback when the current subset is empty; children of a
    /// split receive the current subset as their parent, not the original
    /// top-level one. At the root, pass the examples themselves.
    pub fn induce(&self, examples: &[Example], attributes: &[String], parent: &[Example]) -> Induction {
        if examples.is_empty() {
            return Induction::Label(plurality_value(parent).unwrap_or_default());
        }
        if examples_share_classification(examples) {
            let label = examples[0].get(CLASSIFICATION).cloned().unwrap_or_default();
            return Induction::Label(label);
        }
        if attributes.is_empty() {
            return Induction::Label(plurality_value(examples).unwrap_or_default());
        }

        // Stable argmax: the first attribute reaching the maximum wins.
        let mut best = &attributes[0];
        let mut best_score = self.policy.score(best, examples);
        for attribute in &attributes[1..] {
            let score = self.policy.score(attribute, examples);
            if score > best_score {
                best = attribute;
                best_score = score;
            }
        }

        if let Some(gate) = self.gate {
            if !gate.keep_split(best, examples) {
                debug!("suppressed insignificant split on {:?}", best);
                return Induction::Label(plurality_value(examples).unwrap_or_default());
            }
        }

        let remaining: Vec<String> = attributes.iter().filter(|a| *a != best).cloned().collect();
        let mut branches = BTreeMap::new();
        for value in attribute_values(best, examples) {
            let subset: Vec<Example> = examples
                .iter()
                .filter(|e| e.get(best.as_str()) == Some(&value))
                .cloned()
                .collect();
            let child = self.induce(&subset, &remaining, examples);
            branches.insert(value, child.into_tree());
        }
        debug!(
            "split on {:?} (score {:.4}, {} branches, {} examples)",
            best,
            best_score,
            branches.len(),
            examples.len()
        );
        Induction::Tree(DecisionTree::Split {
            attribute: best.clone(),
            branches,
        })
    }
}

/// Most frequent classification label in `examples`; ties go to the label
/// encountered first. `None` when no example carries a label.
pub fn plurality_value(examples: &[Example]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for example in examples {
        if let Some(label) = example.get(CLASSIFICATION) {
            match counts.iter_mut().find(|(seen, _)| *seen == label.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((label, 1)),
            }
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label.to_string())
}

/// Whether every example carries the same classification as the first one.
pub fn examples_share_classification(examples: &[Example]) -> bool {
    match examples.split_first() {
        None => true,
        Some((first, rest)) => {
            let label = first.get(CLASSIFICATION);
            rest.iter().all(|e| e.get(CLASSIFICATION) == label)
        }
    }
}
