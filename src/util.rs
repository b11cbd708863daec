/*!
Match result types shared by every operation of [`crate::Regex`].

A [`Match`] borrows the subject string it was found in and only stores byte
spans, so producing one never copies text. Capture groups are exposed in the
order their opening parenthesis appears in the pattern, without the implicit
whole-match group.
*/

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Names of the explicit capture groups of a pattern, `None` for unnamed ones.
pub(crate) type GroupNames = Arc<[Option<Box<str>>]>;

/// A span in a &str. Similar to [`std::ops::Range`], but implements Copy.
#[derive(Copy, Debug, Clone, Eq, PartialEq)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub fn empty(&self) -> bool {
        self.from == self.to
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.empty()
    }
}

impl From<Range<usize>> for Span {
    fn from(value: Range<usize>) -> Self {
        Self {
            from: value.start,
            to: value.end,
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(val: Span) -> Self {
        val.from..val.to
    }
}

impl From<regex::Match<'_>> for Span {
    fn from(m: regex::Match<'_>) -> Self {
        m.range().into()
    }
}

/// Successful match: the bounds of the overall match plus the bounds (if
/// any) of every explicit capture group.
#[derive(Clone)]
pub struct Match<'s> {
    subject: &'s str,
    span: Span,
    groups: Box<[Option<Span>]>,
    names: GroupNames,
}

impl<'s> Match<'s> {
    pub(crate) fn new(
        subject: &'s str,
        span: impl Into<Span>,
        groups: Box<[Option<Span>]>,
        names: GroupNames,
    ) -> Self {
        Self {
            subject,
            span: span.into(),
            groups,
            names,
        }
    }

    /// Builds a match out of the engine's captures. Group 0 must be set,
    /// which the engine guarantees for every reported match.
    pub(crate) fn from_captures(
        subject: &'s str,
        caps: &regex::Captures<'s>,
        names: &GroupNames,
    ) -> Option<Self> {
        let span = caps.get(0)?;
        let groups = caps
            .iter()
            .skip(1)
            .map(|group| group.map(Span::from))
            .collect();
        Some(Self::new(subject, span, groups, Arc::clone(names)))
    }

    /// The matched substring.
    pub fn as_str(&self) -> &'s str {
        &self.subject[self.span.from..self.span.to]
    }

    pub fn start(&self) -> usize {
        self.span.from
    }

    pub fn end(&self) -> usize {
        self.span.to
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn range(&self) -> Range<usize> {
        self.span.into()
    }

    /// The string the match was found in.
    pub fn subject(&self) -> &'s str {
        self.subject
    }

    /// Text of the `index`-th explicit capture group, counting from 0. Returns
    /// None if the group doesn't exist or didn't take part in the match.
    pub fn group(&self, index: usize) -> Option<&'s str> {
        let span = (*self.groups.get(index)?)?;
        Some(&self.subject[span.from..span.to])
    }

    /// Span of the `index`-th explicit capture group.
    pub fn group_span(&self, index: usize) -> Option<Span> {
        *self.groups.get(index)?
    }

    /// Text of the capture group called `name`.
    pub fn name(&self, name: &str) -> Option<&'s str> {
        let index = self
            .names
            .iter()
            .position(|n| n.as_deref() == Some(name))?;
        self.group(index)
    }

    /// All explicit capture groups, in declaration order.
    pub fn groups(&self) -> Vec<Option<&'s str>> {
        (0..self.groups.len()).map(|i| self.group(i)).collect()
    }

    /// Number of explicit capture groups, whether they participated or not.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("span", &self.range())
            .field("text", &self.as_str())
            .field("groups", &self.groups())
            .finish()
    }
}

impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
