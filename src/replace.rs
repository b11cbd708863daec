//! Substitution on top of [`Regex`].
//!
//! Template replacement is handed straight to the engine, so `$1`, `${name}`
//! and `$$` behave exactly as documented by [`regex::Regex::replace_all`].
//! Closure replacement collects every match first and then splices the
//! replacements from the last match to the first.

use log::trace;

use crate::regex::Regex;
use crate::util::Match;

impl Regex {
    /// Replaces every match in `text` with `template`.
    pub fn replace(&self, text: &str, template: &str) -> String {
        self.engine().replace_all(text, template).into_owned()
    }

    /// Replaces the first match in `text` with `template`.
    pub fn replace_first(&self, text: &str, template: &str) -> String {
        self.engine().replace(text, template).into_owned()
    }

    /// Replaces every match in `text` with whatever `f` returns for it.
    ///
    /// `f` is called once per match, starting from the rightmost one. Every
    /// match is found on the original text, so the result is the same as
    /// transforming each match on its own.
    pub fn replace_with<F>(&self, text: &str, f: F) -> String
    where
        F: FnMut(&Match<'_>) -> String,
    {
        splice_rev(text, &self.matches(text), f)
    }
}

/// Replaces `matches` in `text`, walking them right-to-left so that the
/// offsets of the ones not yet replaced stay valid. `matches` must be sorted
/// and non-overlapping.
fn splice_rev<F>(text: &str, matches: &[Match<'_>], mut f: F) -> String
where
    F: FnMut(&Match<'_>) -> String,
{
    let mut result = text.to_string();
    for m in matches.iter().rev() {
        let replacement = f(m);
        trace!("replacing {:?} with {replacement:?}", m.range());
        result.replace_range(m.range(), &replacement);
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn closure_sees_matches_right_to_left() {
        let re = Regex::new(r"\d+").unwrap();
        let mut seen = Vec::new();
        let result = re.replace_with("a1b22c333", |m| {
            seen.push(m.as_str().to_string());
            "#".repeat(m.as_str().len() + 1)
        });
        assert_eq!(result, "a##b###c####");
        assert_eq!(seen, vec!["333", "22", "1"]);
    }

    #[test]
    fn closure_without_matches_returns_input() {
        let re = Regex::new(r"\d+").unwrap();
        let result = re.replace_with("no digits", |_| unreachable!());
        assert_eq!(result, "no digits");
    }

    #[test]
    fn closure_can_use_groups() {
        let re = Regex::new(r"(\w+)@(\w+)").unwrap();
        let result = re.replace_with("alice@home bob@work", |m| {
            format!("{}<{}>", m.group(1).unwrap(), m.group(0).unwrap())
        });
        assert_eq!(result, "home<alice> work<bob>");
    }

    #[test]
    fn empty_matches_are_spliced() {
        let re = Regex::new(r"x*").unwrap();
        assert_eq!(re.replace_with("ab", |_| "-".to_string()), "-a-b-");
        assert_eq!(re.replace("ab", "-"), "-a-b-");
    }

    #[test]
    fn template_replacement() {
        let re = Regex::new(r"(?<first>\w+)\s+(?<last>\w+)").unwrap();
        assert_eq!(re.replace("Jane Doe", "$last, $first"), "Doe, Jane");
        assert_eq!(re.replace("Jane Doe", "${2}_$1 $$"), "Doe_Jane $");
        assert_eq!(re.replace_first("a b c d", "x"), "x c d");
    }
}
