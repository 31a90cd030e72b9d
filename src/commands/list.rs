//! `freeguid list` command.

use std::io::Write;

use crate::error::Error;
use crate::selector::Selector;

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error if writing the listing fails.
pub fn run(default_type: &str, out: &mut dyn Write) -> Result<(), Error> {
    let width = Selector::ALL.iter().map(|s| s.as_str().len()).max().unwrap_or(0);
    for selector in Selector::ALL {
        let marker = if selector.as_str() == default_type { "*" } else { " " };
        writeln!(out, "{marker} {:<width$}  {}", selector.as_str(), selector.description())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::selector::Selector;

    #[test]
    fn lists_every_selector_and_marks_default() {
        let mut out = Vec::new();
        run("uuidv4", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), Selector::ALL.len());
        for selector in Selector::ALL {
            assert!(text.contains(selector.as_str()));
        }
        let default_line = text.lines().find(|l| l.starts_with('*')).unwrap();
        assert!(default_line.contains("uuidv4"));
    }
}
