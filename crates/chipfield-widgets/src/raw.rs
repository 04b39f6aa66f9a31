#![forbid(unsafe_code)]

//! The delimited raw-value format.
//!
//! The field persists as a single string of semicolon-delimited tokens. A
//! literal `;` inside an id or name is not escaped; that limitation is part
//! of the stored format and is preserved here as-is.

/// Token separator in the persisted string.
pub const VALUE_SEPARATOR: char = ';';

/// Separator used when rendering tokens for display.
pub const DISPLAY_SEPARATOR: &str = ", ";

/// Split a raw value into trimmed, non-empty tokens.
#[must_use]
pub fn tokens(raw: &str) -> Vec<&str> {
    raw.split(VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Render a raw value for read-only display: tokens joined with `", "`.
#[must_use]
pub fn display_text(raw: &str) -> String {
    tokens(raw).join(DISPLAY_SEPARATOR)
}

/// Join ids into the persisted form.
#[must_use]
pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, id) in ids.into_iter().enumerate() {
        if i > 0 {
            out.push(VALUE_SEPARATOR);
        }
        out.push_str(id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_trim_and_drop_empties() {
        assert_eq!(tokens("1; 2 ;;3"), vec!["1", "2", "3"]);
        assert_eq!(tokens(""), Vec::<&str>::new());
        assert_eq!(tokens(" ; ; "), Vec::<&str>::new());
        assert_eq!(tokens("solo"), vec!["solo"]);
    }

    #[test]
    fn display_joins_with_comma_space() {
        assert_eq!(display_text("1; 2 ;;3"), "1, 2, 3");
        assert_eq!(display_text(""), "");
    }

    #[test]
    fn join_is_semicolon_separated() {
        assert_eq!(join_ids(["1", "2", "4"]), "1;2;4");
        assert_eq!(join_ids(Vec::<&str>::new()), "");
        assert_eq!(join_ids(["only"]), "only");
    }

    #[test]
    fn join_then_tokens_round_trips() {
        let ids = ["1", "2", "4"];
        assert_eq!(tokens(&join_ids(ids)), ids);
    }
}
