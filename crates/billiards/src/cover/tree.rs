//! Proof trees and their token format.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// How a square is judged covered.
///
/// `Divide` children follow the quadrant order of
/// [`Rectangle::quadrants`](crate::geometry::Rectangle::quadrants): upper
/// left, upper right, lower left, lower right.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProofTree {
    Empty,
    Single(usize),
    Triple(usize),
    Divide(Box<[ProofTree; 4]>),
}

impl ProofTree {
    pub fn divide(children: [ProofTree; 4]) -> Self {
        ProofTree::Divide(Box::new(children))
    }

    /// Number of `Empty`, `Single` and `Triple` nodes.
    pub fn leaf_count(&self) -> u64 {
        match self {
            ProofTree::Divide(children) => children.iter().map(ProofTree::leaf_count).sum(),
            _ => 1,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            ProofTree::Divide(children) => {
                1 + children.iter().map(ProofTree::depth).max().unwrap_or(0)
            }
            _ => 0,
        }
    }
}

struct Tokens<'a> {
    iter: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self) -> Result<(usize, &'a str), ParseError> {
        self.iter.next().ok_or(ParseError::TruncatedTree)
    }

    fn index(&mut self) -> Result<usize, ParseError> {
        let (_, tok) = self.next()?;
        tok.parse().map_err(|_| ParseError::Number(tok.to_string()))
    }

    fn tree(&mut self) -> Result<ProofTree, ParseError> {
        let (position, tok) = self.next()?;
        Ok(match tok {
            "E" => ProofTree::Empty,
            "S" => ProofTree::Single(self.index()?),
            "T" => ProofTree::Triple(self.index()?),
            "D" => ProofTree::divide([self.tree()?, self.tree()?, self.tree()?, self.tree()?]),
            other => {
                return Err(ParseError::Unexpected {
                    position,
                    rest: other.to_string(),
                })
            }
        })
    }
}

/// Prefix tokens `E`, `S i`, `T i`, `D c0 c1 c2 c3`, separated by whitespace.
/// Positions in errors count tokens.
impl FromStr for ProofTree {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens {
            iter: s.split_whitespace().enumerate(),
        };
        if s.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let tree = tokens.tree()?;
        if let Some((position, rest)) = tokens.iter.next() {
            return Err(ParseError::Unexpected {
                position,
                rest: rest.to_string(),
            });
        }
        Ok(tree)
    }
}

impl fmt::Display for ProofTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofTree::Empty => f.write_str("E"),
            ProofTree::Single(i) => write!(f, "S {i}"),
            ProofTree::Triple(i) => write!(f, "T {i}"),
            ProofTree::Divide(children) => {
                f.write_str("D")?;
                for c in children.iter() {
                    write!(f, " {c}")?;
                }
                Ok(())
            }
        }
    }
}
