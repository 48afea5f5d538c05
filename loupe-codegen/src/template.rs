//! Placeholder substitution for source templates.

use regex::{NoExpand, Regex};
use tracing::trace;

use crate::error::{Error, Result};

/// Replace `#name#` placeholders in a template.
///
/// `pairs` alternates placeholder name and replacement value; the `#`
/// delimiters are added here, so callers pass bare names. Pairs are applied
/// left to right against the progressively updated text: a replacement value
/// that itself contains a placeholder is rewritten by a later pair. Names
/// should stick to identifier characters; the pattern is matched as a regex,
/// so metacharacters in a name change what it matches.
pub fn substitute(template: &str, pairs: &[&str]) -> Result<String> {
    if pairs.len() % 2 != 0 {
        return Err(Error::OddSubstitutionArguments { count: pairs.len() });
    }
    let mut result = template.to_string();
    for pair in pairs.chunks(2) {
        let (name, value) = (pair[0], pair[1]);
        let pattern =
            Regex::new(&format!("#{name}#")).map_err(|_| Error::InvalidPlaceholder {
                name: name.to_string(),
            })?;
        result = pattern.replace_all(&result, NoExpand(value)).into_owned();
    }
    trace!(pairs = pairs.len() / 2, "substituted template placeholders");
    Ok(result)
}
