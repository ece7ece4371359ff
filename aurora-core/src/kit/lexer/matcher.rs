//! Rule matcher contract
//!
//! The scanner only ever asks one question: which rule matches a prefix of
//! the remaining input, and how far does the match reach. Tie-breaking among
//! candidate rules is the matcher's business.

use std::marker::PhantomData;

use super::types::LexTag;

/// A successful match: the rule's tag and the exact prefix it consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'src, K> {
    pub tag: K,
    pub run: &'src [u8],
}

/// Recognizes prefixes of the remaining input.
///
/// Implementors must return a non-empty prefix of `remaining` and never
/// [`LexTag::EOF`]; the scanner relies on both to terminate.
pub trait RuleMatcher {
    type Tag: LexTag;

    fn match_rule<'src>(&self, remaining: &'src [u8]) -> Option<RuleMatch<'src, Self::Tag>>;
}

impl<M: RuleMatcher + ?Sized> RuleMatcher for &M {
    type Tag = M::Tag;

    fn match_rule<'src>(&self, remaining: &'src [u8]) -> Option<RuleMatch<'src, Self::Tag>> {
        (**self).match_rule(remaining)
    }
}

/// Adapts a closure returning `(tag, length)` into a [`RuleMatcher`].
///
/// A zero length, a length past the end of the input, or the EOF tag are
/// reported as no match.
pub struct FnMatcher<F, K> {
    f: F,
    tag: PhantomData<fn() -> K>,
}

impl<F, K> FnMatcher<F, K>
where
    K: LexTag,
    F: Fn(&[u8]) -> Option<(K, usize)>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            tag: PhantomData,
        }
    }
}

impl<F, K> RuleMatcher for FnMatcher<F, K>
where
    K: LexTag,
    F: Fn(&[u8]) -> Option<(K, usize)>,
{
    type Tag = K;

    fn match_rule<'src>(&self, remaining: &'src [u8]) -> Option<RuleMatch<'src, K>> {
        let (tag, len) = (self.f)(remaining)?;
        if len == 0 || tag.is_eof() {
            return None;
        }
        let run = remaining.get(..len)?;
        Some(RuleMatch { tag, run })
    }
}
