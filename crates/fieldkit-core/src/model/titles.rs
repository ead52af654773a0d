use serde::{Deserialize, Serialize};

use crate::errors::{FieldkitError, Result};

/// Title plus an optional shorter title for menus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Titles {
    pub title: String,
    pub menu_title: Option<String>,
}

impl Titles {
    /// # Errors
    ///
    /// Returns `InvalidTitle` if the title is empty or whitespace-only.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(FieldkitError::InvalidTitle {
                reason: "Title cannot be empty or whitespace-only".to_string(),
            });
        }
        Ok(Self {
            title,
            menu_title: None,
        })
    }

    pub fn with_menu_title(mut self, menu_title: impl Into<String>) -> Self {
        self.menu_title = Some(menu_title.into());
        self
    }

    /// Menu title, or the title when no (non-empty) menu title is set
    pub fn menu_title(&self) -> &str {
        match self.menu_title.as_deref() {
            Some(menu) if !menu.is_empty() => menu,
            _ => &self.title,
        }
    }
}

pub trait HasTitles {
    fn titles(&self) -> &Titles;

    fn title(&self) -> &str {
        &self.titles().title
    }

    fn menu_title(&self) -> &str {
        self.titles().menu_title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_title_falls_back() {
        let titles = Titles::new("About us").unwrap();
        assert_eq!(titles.menu_title(), "About us");

        let titles = titles.with_menu_title("About");
        assert_eq!(titles.menu_title(), "About");
    }

    #[test]
    fn test_empty_menu_title_falls_back() {
        let titles = Titles::new("About us").unwrap().with_menu_title("");
        assert_eq!(titles.menu_title(), "About us");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(matches!(
            Titles::new("   "),
            Err(FieldkitError::InvalidTitle { .. })
        ));
    }
}
