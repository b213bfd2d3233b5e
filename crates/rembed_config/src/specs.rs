//! Parsing of delimiter-separated resource lists.

/// Separators accepted between entries of a resource list.
const SEPARATORS: [char; 2] = ['|', ';'];

/// Splits a resource list into individual path entries.
///
/// Entries are separated by `|` or `;`. Empty entries and surrounding
/// whitespace are dropped and `\` is normalized to `/`.
pub fn parse_resource_list(list: &str) -> Vec<String> {
    list.split(SEPARATORS.as_slice())
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.replace('\\', "/"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path() {
        assert_eq!(parse_resource_list("assets/logo.png"), vec!["assets/logo.png"]);
    }

    #[test]
    fn pipe_separated() {
        assert_eq!(
            parse_resource_list("a.png|icons|b.ico"),
            vec!["a.png", "icons", "b.ico"]
        );
    }

    #[test]
    fn semicolon_separated() {
        assert_eq!(parse_resource_list("a.png;b.png"), vec!["a.png", "b.png"]);
    }

    #[test]
    fn empty_entries_dropped() {
        assert_eq!(parse_resource_list("|a.png||b.png|"), vec!["a.png", "b.png"]);
        assert!(parse_resource_list("").is_empty());
        assert!(parse_resource_list("| |").is_empty());
    }

    #[test]
    fn backslashes_normalized() {
        assert_eq!(
            parse_resource_list(r"C:\proj\assets\a.png"),
            vec!["C:/proj/assets/a.png"]
        );
    }
}
