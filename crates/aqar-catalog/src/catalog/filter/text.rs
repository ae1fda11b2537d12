use serde::Serialize;

/// Case-insensitive substring constraint over one or more text fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "needle")]
pub enum TextSearch {
    #[default]
    Any,
    Contains(String),
}

impl TextSearch {
    /// Build from raw user input. Blank input carries no constraint.
    pub fn new(raw: &str) -> Self {
        let cleaned = strip_invisible(raw);
        if cleaned.trim().is_empty() {
            TextSearch::Any
        } else {
            TextSearch::Contains(cleaned.to_lowercase())
        }
    }

    /// Search boxes have no "all" option, so the raw value is used as typed.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map_or(TextSearch::Any, Self::new)
    }

    pub const fn is_any(&self) -> bool {
        matches!(self, TextSearch::Any)
    }

    /// Passes when any present field contains the needle. Fields get the
    /// same mark stripping as the needle.
    pub fn test<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        match self {
            TextSearch::Any => true,
            TextSearch::Contains(needle) => fields
                .into_iter()
                .flatten()
                .any(|field| strip_invisible(field).to_lowercase().contains(needle.as_str())),
        }
    }
}

fn strip_invisible(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}', '\u{200f}', '\u{200e}'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_in_needle_and_field() {
        let search = TextSearch::new("RIYADH");
        assert!(search.test([Some("riyadh tower")]));
        assert!(search.test([Some("Riyadh Tower")]));
        assert!(!search.test([Some("Jeddah Corniche")]));
    }

    #[test]
    fn any_field_may_satisfy_the_search() {
        let search = TextSearch::new("النرجس");
        assert!(search.test([Some("فيلا حديثة"), None, Some("حي النرجس")]));
        assert!(!search.test([Some("فيلا حديثة"), None]));
    }

    #[test]
    fn blank_input_is_unconstrained() {
        assert!(TextSearch::new("   ").is_any());
        assert!(TextSearch::new("\u{200f}").is_any());
        assert!(TextSearch::from_param(None).is_any());
        assert!(TextSearch::new("").test([None::<&str>]));
    }

    #[test]
    fn directional_marks_are_removed_from_the_needle() {
        let search = TextSearch::new("\u{200f}Olaya");
        assert_eq!(search, TextSearch::Contains("olaya".to_string()));
    }

    #[test]
    fn field_with_marks_matches_its_own_text() {
        let field = "Al\u{200f}Olaya";
        assert!(TextSearch::new(field).test([Some(field)]));
        assert!(TextSearch::new("alolaya").test([Some(field)]));
        assert!(TextSearch::new("\u{200e}العليا").test([Some("حي \u{200f}العليا")]));
    }
}
