//! Fixture line parsing
//!
//! Lines are either comments (trimmed text starting with `#`) or commands:
//! fields separated by the literal delimiter `||`, each field trimmed of
//! surrounding whitespace. There is no escaping mechanism, so a field value
//! cannot contain the delimiter itself.

/// Field delimiter within a command line
const DELIMITER: &str = "||";

/// Comment marker at the start of a trimmed line
const COMMENT_MARKER: &str = "#";

/// Whether a line is a comment and should be skipped entirely
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with(COMMENT_MARKER)
}

/// Split a command line into its ordered fields
///
/// The first field is the command name, the rest are positional arguments.
/// Always yields at least one field; an empty line yields a single empty
/// field.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(DELIMITER)
        .map(|field| field.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_trims_fields() {
        assert_eq!(tokenize("SET || key || value"), vec!["SET", "key", "value"]);
        assert_eq!(tokenize("SET||key||value"), vec!["SET", "key", "value"]);
        assert_eq!(
            tokenize("  SET ||\tkey\t|| value  "),
            vec!["SET", "key", "value"]
        );
    }

    #[test]
    fn test_tokenize_single_field() {
        assert_eq!(tokenize("FLUSHALL"), vec!["FLUSHALL"]);
        assert_eq!(tokenize("  FLUSHALL  "), vec!["FLUSHALL"]);
    }

    #[test]
    fn test_tokenize_preserves_empty_trailing_field() {
        assert_eq!(tokenize("SET || k ||"), vec!["SET", "k", ""]);
    }

    #[test]
    fn test_tokenize_empty_line_yields_one_empty_field() {
        assert_eq!(tokenize(""), vec![""]);
        assert_eq!(tokenize("   "), vec![""]);
    }

    #[test]
    fn test_single_bar_is_field_content() {
        assert_eq!(tokenize("SET | a | 1"), vec!["SET | a | 1"]);
    }

    #[test]
    fn test_comment_detection() {
        assert!(is_comment("# note"));
        assert!(is_comment("   # indented"));
        assert!(is_comment("#"));
        assert!(!is_comment("SET || a || 1"));
        assert!(!is_comment(""));
        assert!(!is_comment("   "));
    }
}
