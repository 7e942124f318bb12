/// Keys the suggestion popover reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    Enter,
    /// Anything else, by its engine key name.
    Other(String),
}

impl Key {
    /// Decode a DOM-style key name (`"ArrowUp"`, `"Enter"`, `"a"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Enter" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_decodes_navigation_keys() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
    }

    #[test]
    fn test_from_name_keeps_other_keys() {
        assert_eq!(Key::from_name("Tab"), Key::Other("Tab".to_string()));
    }
}
