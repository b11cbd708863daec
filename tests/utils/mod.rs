use pretty_assertions::assert_eq;
use resugar::Regex;

/// The engine configured the way [`Regex::new`] configures it.
fn reference(pattern: &str) -> Result<regex::Regex, regex::Error> {
    regex::RegexBuilder::new(pattern)
        .dot_matches_new_line(true)
        .multi_line(true)
        .build()
}

/// Match a pattern against a given input on both resugar and a raw regex
/// configured identically, and compare the result of both compilation and
/// execution.
pub fn check_against_engine(pattern: &str, input: &str) {
    let rust = reference(pattern);
    let ours = Regex::new(pattern);

    match (rust, ours) {
        (Ok(rust_re), Ok(re)) => {
            assert_eq!(
                re.is_match(input),
                rust_re.is_match(input),
                "Mismatch for pattern {:?} input {:?} (is_match)",
                pattern,
                input
            );

            // first_match
            let rust_match = rust_re.find(input).map(|m| (m.start(), m.end()));
            let my_match = re.first_match(input).map(|m| (m.start(), m.end()));
            assert_eq!(
                my_match, rust_match,
                "Mismatch for pattern {:?} input {:?} (first_match)",
                pattern, input
            );

            // matches
            let rust_all: Vec<_> = rust_re
                .find_iter(input)
                .map(|m| (m.start(), m.end()))
                .collect();
            let my_all: Vec<_> = re
                .matches(input)
                .iter()
                .map(|m| (m.start(), m.end()))
                .collect();
            assert_eq!(
                my_all, rust_all,
                "Mismatch for pattern {:?} input {:?} (matches)",
                pattern, input
            );
            assert_eq!(re.count(input), rust_all.len());

            // groups, without the implicit group 0
            let rust_groups = rust_re.captures(input).map(|caps| {
                (1..caps.len())
                    .map(|i| caps.get(i).map(|m| m.as_str()))
                    .collect::<Vec<_>>()
            });
            assert_eq!(
                re.groups(input),
                rust_groups,
                "Mismatch for pattern {:?} input {:?} (groups)",
                pattern,
                input
            );

            // groups of every match
            let rust_all_caps: Vec<Vec<Option<&str>>> = rust_re
                .captures_iter(input)
                .map(|caps| {
                    (1..caps.len())
                        .map(|i| caps.get(i).map(|m| m.as_str()))
                        .collect()
                })
                .collect();
            let my_all_caps: Vec<Vec<Option<&str>>> =
                re.find_all(input).map(|m| m.groups()).collect();
            assert_eq!(
                my_all_caps, rust_all_caps,
                "Mismatch for pattern {:?} input {:?} (find_all groups)",
                pattern, input
            );

            // template replacement
            for template in ["<$0>", "$1", "[${1}]", "$$"] {
                assert_eq!(
                    re.replace(input, template),
                    rust_re.replace_all(input, template),
                    "Mismatch for pattern {:?} input {:?} (replace {:?})",
                    pattern,
                    input,
                    template
                );
            }

            // closure replacement matches a left-to-right rebuild
            let expected = rust_re.replace_all(input, |caps: &regex::Captures<'_>| {
                caps[0].to_uppercase()
            });
            assert_eq!(
                re.replace_with(input, |m| m.as_str().to_uppercase()),
                expected,
                "Mismatch for pattern {:?} input {:?} (replace_with)",
                pattern,
                input
            );
        }
        (Err(_), Err(_)) => {} // Both failed, that's good
        (Ok(_), Err(e)) => panic!("resugar failed to compile but regex succeeded: {e}"),
        (Err(e), Ok(_)) => panic!("regex failed to compile but resugar succeeded: {e}"),
    }
}
