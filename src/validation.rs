//! Hunter name validation for names typed at the prompt or passed on the CLI.

/// Name validation errors with helpful messages
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is empty")]
    Empty,

    #[error("Name is too long (maximum {max} characters)")]
    TooLong { max: usize },

    #[error("Name contains invalid characters: {chars}")]
    InvalidCharacters { chars: String },
}

/// Longest hunter name accepted.
pub const MAX_NAME_LEN: usize = 24;

/// Validate and normalize a hunter name.
///
/// Surrounding whitespace is trimmed and inner runs of spaces collapse to one.
/// Letters (any script), digits, spaces, `-`, `'` and `.` are allowed.
pub fn validate_hunter_name(name: &str) -> Result<String, NameError> {
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Err(NameError::Empty);
    }
    if normalized.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong { max: MAX_NAME_LEN });
    }

    let mut invalid: Vec<char> = normalized
        .chars()
        .filter(|c| !(c.is_alphanumeric() || matches!(c, ' ' | '-' | '\'' | '.')))
        .collect();
    if !invalid.is_empty() {
        invalid.sort_unstable();
        invalid.dedup();
        let chars = invalid
            .iter()
            .map(|c| {
                if c.is_control() {
                    format!("\\u{{{:04x}}}", *c as u32)
                } else {
                    c.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        return Err(NameError::InvalidCharacters { chars });
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_normalizes_names() {
        assert_eq!(validate_hunter_name("  Ada  Lovelace ").unwrap(), "Ada Lovelace");
        assert_eq!(validate_hunter_name("O'Brien-Smith Jr.").unwrap(), "O'Brien-Smith Jr.");
        assert_eq!(validate_hunter_name("José").unwrap(), "José");
    }

    #[test]
    fn rejects_bad_names() {
        assert_eq!(validate_hunter_name("   "), Err(NameError::Empty));
        assert_eq!(
            validate_hunter_name(&"a".repeat(30)),
            Err(NameError::TooLong { max: MAX_NAME_LEN })
        );
        assert_eq!(
            validate_hunter_name("bad/name<"),
            Err(NameError::InvalidCharacters {
                chars: "/, <".to_string()
            })
        );
    }
}
