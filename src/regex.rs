//! Types and API for Regex matching
//!
//! This module defines the [`Regex`] struct, a friendlier wrapper around a
//! compiled [`regex::Regex`], together with the [`Config`] and [`Builder`]
//! used to compile it.

use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::util::{GroupNames, Match};

/// A compiled regular expression.
///
/// Cloning is cheap, the compiled program is shared.
#[derive(Clone)]
pub struct Regex {
    engine: regex::Regex,
    config: Config,
    names: GroupNames,
}

impl Regex {
    /// Compiles `pattern` with the default [`Config`]: `.` matches newlines
    /// and `^`/`$` match at line boundaries.
    pub fn new(pattern: &str) -> Result<Self> {
        Builder::new(pattern).build()
    }

    /// Compiles a regex matching `text` literally.
    pub fn literal(text: &str) -> Result<Self> {
        Self::new(&escape(text))
    }

    pub fn builder(pattern: &str) -> Builder<'_> {
        Builder::new(pattern)
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.engine.as_str()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of explicit capture groups, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.names.len()
    }

    /// Names of the explicit capture groups in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.names.iter().map(|n| n.as_deref())
    }

    /// The underlying compiled regex.
    pub fn engine(&self) -> &regex::Regex {
        &self.engine
    }

    /// Returns true whenever the text matches the regex, without returning
    /// the bounds of the match. This returns true iff `first_match` returns
    /// Some(...), but it may be faster.
    pub fn is_match(&self, text: &str) -> bool {
        self.engine.is_match(text)
    }

    /// Returns the leftmost match in `text` with its capture groups, or None.
    pub fn first_match<'s>(&self, text: &'s str) -> Option<Match<'s>> {
        self.first_match_at(text, 0)
    }

    /// Like `first_match`, but the search begins at byte offset `start`.
    /// Anchors and word boundaries still look at the text before `start`.
    /// An offset past the end of `text` never matches.
    pub fn first_match_at<'s>(&self, text: &'s str, start: usize) -> Option<Match<'s>> {
        if start > text.len() {
            return None;
        }
        let caps = self.engine.captures_at(text, start)?;
        Match::from_captures(text, &caps, &self.names)
    }

    /// Returns an iterator over all non-overlapping matches in the text.
    pub fn find_all<'r, 's>(&'r self, text: &'s str) -> Matches<'r, 's> {
        Matches {
            subject: text,
            names: &self.names,
            imp: self.engine.captures_iter(text),
        }
    }

    /// All non-overlapping matches in the text, left to right.
    pub fn matches<'s>(&self, text: &'s str) -> Vec<Match<'s>> {
        self.find_all(text).collect()
    }

    /// Capture groups of the first match, or None if there is no match.
    pub fn groups<'s>(&self, text: &'s str) -> Option<Vec<Option<&'s str>>> {
        self.first_match(text).map(|m| m.groups())
    }

    /// Number of non-overlapping matches.
    pub fn count(&self, text: &str) -> usize {
        self.engine.find_iter(text).count()
    }

    /// Splits `text` at every match. The matches themselves are dropped.
    pub fn split<'s>(&self, text: &'s str) -> Vec<&'s str> {
        self.engine.split(text).collect()
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Regex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Escapes every metacharacter in `text`, so that the result matches `text`
/// literally.
pub fn escape(text: &str) -> String {
    regex_syntax::escape(text)
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub dot_matches_new_line: bool,
    pub multi_line: bool,
    pub case_insensitive: bool,
    pub ignore_whitespace: bool,
    pub unicode: bool,
    /// Maximum size of the compiled program in bytes. None keeps the engine's
    /// default.
    pub size_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dot_matches_new_line: true,
            multi_line: true,
            case_insensitive: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl From<&Builder<'_>> for regex::RegexBuilder {
    fn from(value: &Builder<'_>) -> Self {
        let config = &value.config;
        let mut builder = regex::RegexBuilder::new(value.pattern);
        builder
            .dot_matches_new_line(config.dot_matches_new_line)
            .multi_line(config.multi_line)
            .case_insensitive(config.case_insensitive)
            .ignore_whitespace(config.ignore_whitespace)
            .unicode(config.unicode);
        if let Some(limit) = config.size_limit {
            builder.size_limit(limit);
        }
        builder
    }
}

#[derive(Debug, Clone)]
pub struct Builder<'s> {
    pattern: &'s str,
    config: Config,
}

impl<'s> Builder<'s> {
    pub fn new(pattern: &'s str) -> Self {
        Self {
            pattern,
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn dot_matches_new_line(mut self, value: bool) -> Self {
        self.config.dot_matches_new_line = value;
        self
    }

    pub fn multi_line(mut self, value: bool) -> Self {
        self.config.multi_line = value;
        self
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.config.case_insensitive = value;
        self
    }

    pub fn ignore_whitespace(mut self, value: bool) -> Self {
        self.config.ignore_whitespace = value;
        self
    }

    pub fn unicode(mut self, value: bool) -> Self {
        self.config.unicode = value;
        self
    }

    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.config.size_limit = Some(bytes);
        self
    }

    pub fn build(self) -> Result<Regex> {
        let engine = regex::RegexBuilder::from(&self)
            .build()
            .map_err(|err| {
                debug!("failed to compile `{}`: {err}", self.pattern);
                Error::from_engine(self.pattern, err)
            })?;

        let names: GroupNames = engine
            .capture_names()
            .skip(1)
            .map(|name| name.map(Box::from))
            .collect();

        debug!(
            "compiled `{}` ({} capture groups)",
            self.pattern,
            names.len()
        );

        Ok(Regex {
            engine,
            config: self.config,
            names,
        })
    }
}

/// Iterator over all matches of a regex, with their capture groups.
pub struct Matches<'r, 's> {
    subject: &'s str,
    names: &'r GroupNames,
    imp: regex::CaptureMatches<'r, 's>,
}

impl<'r, 's> Iterator for Matches<'r, 's> {
    type Item = Match<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.imp.next()?;
        Match::from_captures(self.subject, &caps, self.names)
    }
}

impl std::iter::FusedIterator for Matches<'_, '_> {}
