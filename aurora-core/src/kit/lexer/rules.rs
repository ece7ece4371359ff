//! Regex-backed rule table
//!
//! Rules are `(tag, pattern)` pairs kept in declaration order. Every pattern
//! is anchored at the cursor and compiled as a byte regex with Unicode mode
//! off, so `.` and negated classes match any single byte.
//!
//! Matching policy: the longest match wins; among equally long matches the
//! rule declared first wins. With keywords declared before identifiers this
//! gives `if` -> keyword but `iffy` -> identifier.

use regex::bytes::{Regex, RegexBuilder};
use thiserror::Error;

use super::matcher::{RuleMatch, RuleMatcher};
use super::types::LexTag;

/// Errors raised while building a [`RuleTable`]
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for rule {tag}: {source}")]
    InvalidPattern {
        tag: String,
        #[source]
        source: regex::Error,
    },

    #[error("pattern for rule {tag} matches the empty string")]
    EmptyMatch { tag: String },

    #[error("rule {tag} uses the reserved end-of-input tag")]
    ReservedTag { tag: String },
}

#[derive(Debug, Clone)]
struct Rule<K> {
    tag: K,
    pattern: String,
    regex: Regex,
}

/// Ordered set of lexical rules
#[derive(Debug, Clone)]
pub struct RuleTable<K> {
    rules: Vec<Rule<K>>,
}

impl<K: LexTag> RuleTable<K> {
    /// Compile a rule table, rejecting patterns the scanner cannot use.
    pub fn new(rules: &[(K, &str)]) -> Result<Self, RuleError> {
        let mut compiled = Vec::with_capacity(rules.len());
        for &(tag, pattern) in rules {
            compiled.push(Self::compile(tag, pattern)?);
        }
        Ok(Self { rules: compiled })
    }

    fn compile(tag: K, pattern: &str) -> Result<Rule<K>, RuleError> {
        if tag.is_eof() {
            return Err(RuleError::ReservedTag {
                tag: format!("{tag:?}"),
            });
        }

        let regex = RegexBuilder::new(&format!("^(?:{pattern})"))
            .unicode(false)
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                tag: format!("{tag:?}"),
                source,
            })?;

        if regex.is_match(b"") {
            return Err(RuleError::EmptyMatch {
                tag: format!("{tag:?}"),
            });
        }

        Ok(Rule {
            tag,
            pattern: pattern.to_owned(),
            regex,
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tags in declaration order
    pub fn tags(&self) -> impl Iterator<Item = K> + '_ {
        self.rules.iter().map(|rule| rule.tag)
    }

    /// Source pattern of the first rule declared for `tag`
    pub fn pattern_for(&self, tag: K) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.tag == tag)
            .map(|rule| rule.pattern.as_str())
    }
}

impl<K: LexTag> RuleMatcher for RuleTable<K> {
    type Tag = K;

    fn match_rule<'src>(&self, remaining: &'src [u8]) -> Option<RuleMatch<'src, K>> {
        let mut best: Option<(K, usize)> = None;
        for rule in &self.rules {
            let Some(found) = rule.regex.find(remaining) else {
                continue;
            };
            let len = found.end();
            // Zero-width hits (e.g. a bare `\b`) are not matches.
            if len == 0 {
                continue;
            }
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((rule.tag, len));
            }
        }
        best.map(|(tag, len)| RuleMatch {
            tag,
            run: &remaining[..len],
        })
    }
}
