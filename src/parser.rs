//! Parser
//!
//! One-token-lookahead recursive descent over the lexer's output, producing
//! a [`Dataset`] in a single top-to-bottom pass. The parse is not resumable.
use crate::data::{Attribute, Dataset, Domain, Example};
use crate::errors::ArborError;
use crate::lexer::{Lexer, Token, TokenKind};
use log::info;

/// Parse the full text of an ARFF file into a [`Dataset`].
pub fn parse_arff(text: &str) -> Result<Dataset, ArborError> {
    Parser::new(Lexer::new(text)).parse()
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser { lexer, peeked: None }
    }

    fn fill(&mut self) -> Result<(), ArborError> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next().transpose()?;
        }
        Ok(())
    }

    fn peek(&mut self) -> Result<Option<&Token>, ArborError> {
        self.fill()?;
        Ok(self.peeked.as_ref())
    }

    /// Non-consuming check of the current token's kind; false at end of
    /// input.
    fn expect(&mut self, kind: TokenKind) -> Result<bool, ArborError> {
        Ok(self.peek()?.map_or(false, |t| t.kind == kind))
    }

    /// Consume and return the current token when it matches `kind`, else
    /// fail naming the expected kind and the actual token.
    fn accept(&mut self, kind: TokenKind) -> Result<Token, ArborError> {
        self.fill()?;
        match self.peeked.take() {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(mismatch(kind.to_string(), Some(&token))),
            None => Err(mismatch(kind.to_string(), None)),
        }
    }

    /// Consume a data value: a string, a number, or the missing marker.
    fn accept_value(&mut self) -> Result<Token, ArborError> {
        self.fill()?;
        match self.peeked.take() {
            Some(token)
                if matches!(
                    token.kind,
                    TokenKind::String | TokenKind::Number | TokenKind::Missing
                ) =>
            {
                Ok(token)
            }
            Some(token) => Err(mismatch("value".to_string(), Some(&token))),
            None => Err(mismatch("value".to_string(), None)),
        }
    }

    pub fn parse(mut self) -> Result<Dataset, ArborError> {
        self.accept(TokenKind::RelationDecl)?;
        let relation = self.accept(TokenKind::String)?.text;

        let mut attributes = Vec::new();
        while self.expect(TokenKind::AttrDecl)? {
            self.accept(TokenKind::AttrDecl)?;
            let name = self.accept(TokenKind::String)?.text;
            let domain = if self.expect(TokenKind::NumDatatype)? {
                self.accept(TokenKind::NumDatatype)?;
                Domain::Numeric
            } else {
                self.accept(TokenKind::LeftCurly)?;
                let mut values = vec![self.accept_value()?.text];
                while self.expect(TokenKind::Comma)? {
                    self.accept(TokenKind::Comma)?;
                    values.push(self.accept_value()?.text);
                }
                self.accept(TokenKind::RightCurly)?;
                Domain::Nominal(values)
            };
            attributes.push(Attribute { name, domain });
        }

        if !self.expect(TokenKind::DataDecl)? {
            return Err(ArborError::NoDataSection);
        }
        self.accept(TokenKind::DataDecl)?;

        // Rows carry no terminator token; a row ends where the comma chain
        // does, and values align positionally with the declarations.
        let mut examples = Vec::new();
        while self.peek()?.is_some() {
            let mut values = vec![self.accept_value()?.text];
            while self.expect(TokenKind::Comma)? {
                self.accept(TokenKind::Comma)?;
                values.push(self.accept_value()?.text);
            }
            if values.len() != attributes.len() {
                return Err(ArborError::RowMismatch {
                    row: examples.len() + 1,
                    expected: attributes.len(),
                    found: values.len(),
                });
            }
            let example: Example = attributes
                .iter()
                .map(|a| a.name.clone())
                .zip(values)
                .collect();
            examples.push(example);
        }

        info!(
            "parsed relation {:?}: {} attributes, {} examples",
            relation,
            attributes.len(),
            examples.len()
        );
        Ok(Dataset {
            relation,
            attributes,
            examples,
        })
    }
}

fn mismatch(expected: String, found: Option<&Token>) -> ArborError {
    let found = match found {
        Some(token) => format!("{:?} on line {}", token.text, token.line),
        None => "end of input".to_string(),
    };
    ArborError::UnexpectedToken { expected, found }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CLASSIFICATION;

    const WEATHER: &str = "\
% toy weather relation
@relation weather

@attribute outlook {sunny, overcast, rainy}
@attribute temperature numeric
@attribute windy {yes, no}
@attribute play {yes, no}

@data
sunny,85,no,no
overcast,83,no,yes
rainy,70,yes,no

sunny,69,no,yes
";

    #[test]
    fn test_round_trip_counts() {
        let dataset = parse_arff(WEATHER).unwrap();
        assert_eq!(dataset.relation, "weather");
        assert_eq!(dataset.attributes.len(), 4);
        // One example per non-empty data row, each with one value per
        // declared attribute.
        assert_eq!(dataset.examples.len(), 4);
        for example in &dataset.examples {
            assert_eq!(example.len(), dataset.attributes.len());
        }
    }

    #[test]
    fn test_values_align_positionally() {
        let dataset = parse_arff(WEATHER).unwrap();
        let first = &dataset.examples[0];
        assert_eq!(first.get("outlook").map(String::as_str), Some("sunny"));
        assert_eq!(first.get("temperature").map(String::as_str), Some("85"));
        assert_eq!(first.get("windy").map(String::as_str), Some("no"));
        assert_eq!(first.get("play").map(String::as_str), Some("no"));
    }

    #[test]
    fn test_domains() {
        let dataset = parse_arff(WEATHER).unwrap();
        assert_eq!(
            dataset.attributes[0].domain,
            Domain::Nominal(vec![
                "sunny".to_string(),
                "overcast".to_string(),
                "rainy".to_string(),
            ])
        );
        assert_eq!(dataset.attributes[1].domain, Domain::Numeric);
    }

    #[test]
    fn test_missing_values_pass_through() {
        let src = "@relation iris\n\
                   @attribute sepal_length numeric\n\
                   @attribute class {Iris-setosa, Iris-virginica}\n\
                   @data\n\
                   4.4,?\n\
                   ?,Iris-setosa\n";
        let dataset = parse_arff(src).unwrap();
        assert_eq!(dataset.examples[0].get("class").map(String::as_str), Some("?"));
        assert_eq!(
            dataset.examples[1].get("sepal_length").map(String::as_str),
            Some("?")
        );
    }

    #[test]
    fn test_no_data_section() {
        let src = "@relation weather\n@attribute windy {yes, no}\n";
        assert_eq!(parse_arff(src), Err(ArborError::NoDataSection));
    }

    #[test]
    fn test_row_attribute_count_mismatch() {
        let src = "@relation weather\n\
                   @attribute outlook {sunny, rainy}\n\
                   @attribute windy {yes, no}\n\
                   @data\n\
                   sunny,no\n\
                   rainy\n";
        assert_eq!(
            parse_arff(src),
            Err(ArborError::RowMismatch {
                row: 2,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_expected_token_mismatch() {
        let err = parse_arff("@relation {").unwrap_err();
        match err {
            ArborError::UnexpectedToken { expected, found } => {
                assert_eq!(expected, "string");
                assert!(found.contains("{"));
            }
            other => unreachable!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_end_of_input_mismatch() {
        let err = parse_arff("@relation").unwrap_err();
        assert_eq!(
            err,
            ArborError::UnexpectedToken {
                expected: "string".to_string(),
                found: "end of input".to_string(),
            }
        );
    }

    #[test]
    fn test_lexical_error_propagates() {
        let err = parse_arff("@relation weather\n@attribute ^bad {a, b}\n@data\n").unwrap_err();
        assert_eq!(err, ArborError::UnexpectedCharacter('^', 2, 11));
    }

    #[test]
    fn test_parse_then_learn_end_to_end() {
        use crate::grower::Learner;
        use crate::selection::BinaryGain;

        let src = "@relation restaurant\n\
                   @attribute patrons {none, some, full}\n\
                   @attribute hungry {yes, no}\n\
                   @attribute will_wait {yes, no}\n\
                   @data\n\
                   none,yes,no\n\
                   some,yes,yes\n\
                   full,yes,yes\n\
                   full,no,no\n";
        let dataset = parse_arff(src).unwrap();
        let examples = dataset.labeled_examples("will_wait");
        let attributes: Vec<String> = dataset
            .attribute_names()
            .into_iter()
            .filter(|name| name != "will_wait")
            .collect();

        let policy = BinaryGain::new("yes", "no");
        let learner = Learner::new(&policy);
        let tree = learner.induce(&examples, &attributes, &examples).into_tree();

        for example in &examples {
            let mut unlabeled = example.clone();
            let label = unlabeled.remove(CLASSIFICATION).unwrap();
            assert_eq!(tree.evaluate(&unlabeled), Ok(label.as_str()));
        }
    }
}
