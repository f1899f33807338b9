//! Logging helpers. Town and shop messages span several lines; logs should not.

/// Longest message preview kept in a log line.
const MAX_PREVIEW: usize = 160;

/// Flatten a message onto one line for logging.
///
/// Newlines become ` / `, tabs and other control characters become spaces, runs
/// of whitespace collapse, and anything past [`MAX_PREVIEW`] characters is cut
/// with an ellipsis.
pub fn one_line(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    let mut last_space = false;
    for (count, ch) in s.trim().chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\n' => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push_str(" / ");
                last_space = true;
            }
            c if c.is_control() || c.is_whitespace() => {
                if !last_space {
                    out.push(' ');
                    last_space = true;
                }
            }
            c => {
                out.push(c);
                last_space = false;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::one_line;

    #[test]
    fn joins_lines_and_collapses_whitespace() {
        assert_eq!(
            one_line("Welcome to town, Ada.\nIt's  pretty\trough."),
            "Welcome to town, Ada. / It's pretty rough."
        );
    }

    #[test]
    fn truncates_long_messages() {
        let long = "x".repeat(500);
        let flat = one_line(&long);
        assert_eq!(flat.chars().count(), 161);
        assert!(flat.ends_with('…'));
    }
}
