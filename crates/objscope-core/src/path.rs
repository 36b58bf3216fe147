//! Path expressions: the addressing scheme between the walker and the
//! resolver.
//!
//! A path is a closed tagged-variant AST — field access, sequence index,
//! mapping key — chained from a root identifier. It renders to text for
//! the UI boundary (`root.items[0]['color']`) and parses back losslessly,
//! so a selection event that arrives as a string resolves identically to
//! the path the walker originally built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ObjScopeError, Result};

/// One traversal step in a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathStep {
    /// Composite field access: `.name`
    Field(String),
    /// Sequence index access: `[3]`
    Index(usize),
    /// Mapping key access: `['key']`
    Key(String),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Field(name) => write!(f, ".{}", name),
            PathStep::Index(i) => write!(f, "[{}]", i),
            PathStep::Key(k) => write!(f, "['{}']", escape_key(k)),
        }
    }
}

/// A full path expression: root identifier plus ordered steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPath {
    root: String,
    steps: Vec<PathStep>,
}

impl ObjectPath {
    /// Create a path consisting only of a root identifier
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            root: name.into(),
            steps: Vec::new(),
        }
    }

    /// The root identifier this path starts from
    pub fn root_name(&self) -> &str {
        &self.root
    }

    /// The ordered traversal steps
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Extend with a field access, returning the child path
    pub fn field(&self, name: &str) -> Self {
        self.push(PathStep::Field(name.to_string()))
    }

    /// Extend with an index access, returning the child path
    pub fn index(&self, index: usize) -> Self {
        self.push(PathStep::Index(index))
    }

    /// Extend with a key access, returning the child path
    pub fn key(&self, key: &str) -> Self {
        self.push(PathStep::Key(key.to_string()))
    }

    fn push(&self, step: PathStep) -> Self {
        let mut child = self.clone();
        child.steps.push(step);
        child
    }

    /// Parse the textual form back into the AST.
    ///
    /// # Errors
    ///
    /// Returns `PathSyntax` when the text is not a path this module could
    /// have rendered.
    pub fn parse(text: &str) -> Result<Self> {
        Parser::new(text).parse()
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectPath {
    type Err = ObjScopeError;

    fn from_str(s: &str) -> Result<Self> {
        ObjectPath::parse(s)
    }
}

fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Hand-rolled recursive-descent parser over the rendered form.
struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn error(&self, reason: impl Into<String>) -> ObjScopeError {
        ObjScopeError::PathSyntax {
            path: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn parse(mut self) -> Result<ObjectPath> {
        let root = self.ident()?;
        let mut path = ObjectPath::root(root);
        while let Some(&(_, c)) = self.chars.peek() {
            match c {
                '.' => {
                    self.chars.next();
                    let name = self.ident()?;
                    path = path.field(&name);
                }
                '[' => {
                    self.chars.next();
                    path = self.bracket(path)?;
                }
                other => return Err(self.error(format!("unexpected character '{}'", other))),
            }
        }
        Ok(path)
    }

    fn ident(&mut self) -> Result<String> {
        let mut name = String::new();
        match self.chars.peek() {
            Some(&(_, c)) if is_ident_start(c) => {
                name.push(c);
                self.chars.next();
            }
            Some(&(_, c)) => return Err(self.error(format!("expected identifier, found '{}'", c))),
            None => return Err(self.error("expected identifier, found end of input")),
        }
        while let Some(&(_, c)) = self.chars.peek() {
            if is_ident_continue(c) {
                name.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        Ok(name)
    }

    fn bracket(&mut self, path: ObjectPath) -> Result<ObjectPath> {
        match self.chars.peek() {
            Some(&(_, '\'')) => {
                self.chars.next();
                let key = self.quoted_key()?;
                self.expect(']')?;
                Ok(path.key(&key))
            }
            Some(&(_, c)) if c.is_ascii_digit() => {
                let index = self.number()?;
                self.expect(']')?;
                Ok(path.index(index))
            }
            Some(&(_, c)) => Err(self.error(format!("expected index or quoted key, found '{}'", c))),
            None => Err(self.error("unterminated bracket")),
        }
    }

    fn quoted_key(&mut self) -> Result<String> {
        let mut key = String::new();
        loop {
            match self.chars.next() {
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, '\\')) => key.push('\\'),
                    Some((_, '\'')) => key.push('\''),
                    Some((_, other)) => {
                        return Err(self.error(format!("invalid escape '\\{}'", other)))
                    }
                    None => return Err(self.error("unterminated escape in key")),
                },
                Some((_, '\'')) => return Ok(key),
                Some((_, c)) => key.push(c),
                None => return Err(self.error("unterminated quoted key")),
            }
        }
    }

    fn number(&mut self) -> Result<usize> {
        let mut digits = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        digits
            .parse::<usize>()
            .map_err(|_| self.error(format!("invalid index '{}'", digits)))
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.chars.next() {
            Some((_, c)) if c == expected => Ok(()),
            Some((_, c)) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let path = ObjectPath::root("root").field("items").index(0).key("color");
        assert_eq!(path.to_string(), "root.items[0]['color']");
    }

    #[test]
    fn test_parse_round_trip() {
        let path = ObjectPath::root("loaded")
            .key("snapshot")
            .field("entries")
            .index(12);
        let parsed = ObjectPath::parse(&path.to_string()).unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn test_key_escaping_round_trips() {
        let path = ObjectPath::root("root").key("it's a \\ test");
        let rendered = path.to_string();
        assert_eq!(ObjectPath::parse(&rendered).unwrap(), path);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "9lives", "root..x", "root[", "root['oops]", "root[1.5]", "root x"] {
            let err = ObjectPath::parse(bad).unwrap_err();
            assert_eq!(err.code(), "ERR_PATH_SYNTAX", "should reject {bad:?}");
        }
    }

    #[test]
    fn test_root_only() {
        let path = ObjectPath::parse("root").unwrap();
        assert_eq!(path.root_name(), "root");
        assert!(path.steps().is_empty());
    }
}
