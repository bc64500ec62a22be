//! Placeholder -> literal-string substitution (spec §3 "Params", §4.5).

use std::cell::Cell;

use sqlfmt_helpers::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct Params {
    named: IndexMap<String, String>,
    positional: Vec<String>,
    one_based: bool,
    cursor: Cell<usize>,
}

impl Params {
    pub fn new(
        named: impl IntoIterator<Item = (String, String)>,
        positional: Vec<String>,
        one_based: bool,
    ) -> Self {
        Self {
            named: named.into_iter().collect(),
            positional,
            one_based,
            cursor: Cell::new(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }

    /// `Get(key, defaultValue) -> string` (spec §4.5). `key` is `None` for a
    /// bare `?`, which consumes the cursor left-to-right.
    pub fn get(&self, key: Option<&str>, default: &str) -> String {
        match key {
            None => {
                let idx = self.cursor.get();
                self.cursor.set(idx + 1);
                self.positional.get(idx).cloned().unwrap_or_else(|| default.to_string())
            }
            Some(key) if key.is_empty() => {
                let idx = self.cursor.get();
                self.cursor.set(idx + 1);
                self.positional.get(idx).cloned().unwrap_or_else(|| default.to_string())
            }
            Some(key) => {
                if let Some(value) = self.named.get(key) {
                    return value.clone();
                }
                if let Ok(n) = key.parse::<usize>() {
                    let idx = if self.one_based { n.wrapping_sub(1) } else { n };
                    return self
                        .positional
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| default.to_string());
                }
                default.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn positional_cursor_advances_left_to_right() {
        let params = Params::new([], vec!["1".into(), "2".into(), "3".into()], false);
        assert_eq!(params.get(None, "?"), "1");
        assert_eq!(params.get(None, "?"), "2");
        assert_eq!(params.get(None, "?"), "3");
        assert_eq!(params.get(None, "?"), "?");
    }

    #[test]
    fn one_based_numbered_placeholder() {
        let params = Params::new([], vec!["'alice'".into(), "42".into()], true);
        assert_eq!(params.get(Some("1"), "?1"), "'alice'");
        assert_eq!(params.get(Some("2"), "?2"), "42");
    }

    #[test]
    fn named_lookup_takes_priority_over_positional() {
        let params = Params::new([("x".to_string(), "99".to_string())], vec!["1".into()], false);
        assert_eq!(params.get(Some("x"), "default"), "99");
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let params = Params::new([], vec![], false);
        assert_eq!(params.get(Some("missing"), ":missing"), ":missing");
    }
}
