use serde::{Deserialize, Serialize};

/// Search-engine metadata, all optional free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
}

impl Seo {
    pub fn page_title(&self) -> &str {
        self.meta_title.as_deref().unwrap_or_default()
    }

    pub fn meta_description(&self) -> &str {
        self.meta_description.as_deref().unwrap_or_default()
    }

    pub fn meta_keywords(&self) -> &str {
        self.meta_keywords.as_deref().unwrap_or_default()
    }
}

pub trait HasSeo {
    fn seo(&self) -> &Seo;

    fn page_title(&self) -> &str {
        self.seo().page_title()
    }

    fn meta_description(&self) -> &str {
        self.seo().meta_description()
    }

    fn meta_keywords(&self) -> &str {
        self.seo().meta_keywords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_fields_read_as_empty() {
        let seo = Seo::default();
        assert_eq!(seo.page_title(), "");
        assert_eq!(seo.meta_description(), "");
        assert_eq!(seo.meta_keywords(), "");
    }

    #[test]
    fn test_set_fields() {
        let seo = Seo {
            meta_title: Some("Home".to_string()),
            meta_description: Some("a meta description!".to_string()),
            meta_keywords: Some("keywords!".to_string()),
        };
        assert_eq!(seo.page_title(), "Home");
        assert_eq!(seo.meta_description(), "a meta description!");
        assert_eq!(seo.meta_keywords(), "keywords!");
    }
}
