//! Text views: string fragments on their way into generated source.

use crate::error::{Error, Result};
use crate::template;

/// View over a plain string.
#[derive(Debug, Clone, Copy)]
pub struct TextView<'s> {
    text: &'s str,
}

impl<'s> TextView<'s> {
    /// Create a view over a string.
    pub fn new(text: &'s str) -> Self {
        Self { text }
    }

    /// The wrapped text.
    pub fn as_str(&self) -> &'s str {
        self.text
    }

    /// Chop one leading and one trailing character.
    ///
    /// Decodes a quoted literal: `"\"apple\""` becomes `"apple"`. The chop
    /// is blind, so `"apple"` becomes `"ppl"` just as the delimiters would.
    /// Text shorter than two characters cannot hold a delimiter pair and
    /// fails.
    pub fn unquoted(&self) -> Result<String> {
        let mut chars = self.text.chars();
        let stripped = chars.next().and_then(|_| chars.next_back());
        match stripped {
            Some(_) => Ok(chars.as_str().to_string()),
            None => Err(Error::MalformedLiteral {
                literal: self.text.to_string(),
            }),
        }
    }

    /// Replace `#name#` placeholders; see [`template::substitute`].
    pub fn substitute(&self, pairs: &[&str]) -> Result<String> {
        template::substitute(self.text, pairs)
    }

    /// The text as a qualification prefix: `"com.example"` becomes
    /// `"com.example."`, and the empty text (default package) stays empty.
    pub fn qualifier_prefix(&self) -> String {
        if self.text.is_empty() {
            String::new()
        } else {
            format!("{}.", self.text)
        }
    }
}
