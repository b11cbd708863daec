use std::io::{self, BufRead, Write};

use resugar::Regex;

fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn show(re: &Regex, input: &str) {
    let matches = re.matches(input);
    if matches.is_empty() {
        println!("No match.");
        return;
    }
    for (i, m) in matches.iter().enumerate() {
        println!("Match {i}: {:?} at {:?}", m.as_str(), m.range());
        for (g, name) in re.group_names().enumerate() {
            let label = match name {
                Some(name) => format!("{g} ({name})"),
                None => g.to_string(),
            };
            match m.group(g) {
                Some(s) => println!("  Group {label}: {s:?}"),
                None => println!("  Group {label}: None"),
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    println!("Regex REPL");
    println!("Type an empty pattern to exit.");

    while let Some(pattern) = prompt("regex")? {
        if pattern.is_empty() {
            break;
        }

        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        println!("Type return to go back to the regex prompt.");
        println!("Type :replace <template> <input> to substitute.");
        while let Some(input) = prompt("input")? {
            if input == "return" {
                break;
            }
            match input.strip_prefix(":replace ") {
                Some(rest) => {
                    let (template, subject) = rest.split_once(' ').unwrap_or((rest, ""));
                    println!("{}", re.replace(subject, template));
                }
                None => show(&re, &input),
            }
        }
    }

    Ok(())
}
