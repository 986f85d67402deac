// Modules
pub mod data;
pub mod errors;
pub mod grower;
pub mod lexer;
pub mod parser;
pub mod prune;
pub mod selection;
pub mod tree;

// Individual classes, and functions
pub use data::{attribute_values, Attribute, Dataset, Domain, Example, CLASSIFICATION};
pub use errors::ArborError;
pub use grower::{examples_share_classification, plurality_value, Induction, Learner};
pub use parser::parse_arff;
pub use tree::DecisionTree;
