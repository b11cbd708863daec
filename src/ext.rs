/*!
String extension sugar.

[`RegexExt`] adds regex operations directly on `str`, taking anything that
implements [`Pattern`]: a pattern string, compiled on the spot with the
default [`crate::Config`], or an already compiled [`Regex`].

```
use resugar::RegexExt;

assert!("2024-01-31".matches_pattern(r"^\d{4}-\d{2}-\d{2}$").unwrap());
```
*/

use std::borrow::Cow;

use crate::error::Result;
use crate::regex::Regex;
use crate::util::Match;

/// Something that can be turned into a compiled [`Regex`].
pub trait Pattern {
    fn to_regex(&self) -> Result<Cow<'_, Regex>>;
}

impl Pattern for str {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        Regex::new(self).map(Cow::Owned)
    }
}

impl Pattern for String {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        self.as_str().to_regex()
    }
}

impl Pattern for Regex {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn to_regex(&self) -> Result<Cow<'_, Regex>> {
        (**self).to_regex()
    }
}

/// Regex operations on strings. Only compiling the pattern can fail.
pub trait RegexExt {
    fn matches_pattern<P: Pattern>(&self, pattern: P) -> Result<bool>;

    fn first_match<P: Pattern>(&self, pattern: P) -> Result<Option<Match<'_>>>;

    fn all_matches<P: Pattern>(&self, pattern: P) -> Result<Vec<Match<'_>>>;

    fn groups<P: Pattern>(&self, pattern: P) -> Result<Option<Vec<Option<&str>>>>;

    fn replace_pattern<P: Pattern>(&self, pattern: P, template: &str) -> Result<String>;

    fn replace_pattern_with<P, F>(&self, pattern: P, f: F) -> Result<String>
    where
        P: Pattern,
        F: FnMut(&Match<'_>) -> String;
}

impl RegexExt for str {
    fn matches_pattern<P: Pattern>(&self, pattern: P) -> Result<bool> {
        Ok(pattern.to_regex()?.is_match(self))
    }

    fn first_match<P: Pattern>(&self, pattern: P) -> Result<Option<Match<'_>>> {
        Ok(pattern.to_regex()?.first_match(self))
    }

    fn all_matches<P: Pattern>(&self, pattern: P) -> Result<Vec<Match<'_>>> {
        Ok(pattern.to_regex()?.matches(self))
    }

    fn groups<P: Pattern>(&self, pattern: P) -> Result<Option<Vec<Option<&str>>>> {
        Ok(pattern.to_regex()?.groups(self))
    }

    fn replace_pattern<P: Pattern>(&self, pattern: P, template: &str) -> Result<String> {
        Ok(pattern.to_regex()?.replace(self, template))
    }

    fn replace_pattern_with<P, F>(&self, pattern: P, f: F) -> Result<String>
    where
        P: Pattern,
        F: FnMut(&Match<'_>) -> String,
    {
        Ok(pattern.to_regex()?.replace_with(self, f))
    }
}
