/*!
A friendlier call surface over the [`regex`] crate.

Patterns are compiled once into a [`Regex`] (with `.` matching newlines and
`^`/`$` matching at line boundaries unless configured otherwise through
[`Builder`]), then used to test, extract matches with their capture groups,
and substitute with either a template or a closure. [`RegexExt`] offers the
same operations directly on strings.

```
use resugar::Regex;

let re = Regex::new(r"(\w+)=(\d+)").unwrap();
let m = re.first_match("width=80").unwrap();
assert_eq!(m.groups(), vec![Some("width"), Some("80")]);
assert_eq!(re.replace("a=1 b=2", "$2:$1"), "1:a 2:b");
```
*/

pub mod error;
pub mod ext;
pub mod regex;
mod replace;
pub mod util;

pub use error::{Error, Result};
pub use ext::{Pattern, RegexExt};
pub use crate::regex::{Builder, Config, Matches, Regex, escape};
pub use util::{Match, Span};
