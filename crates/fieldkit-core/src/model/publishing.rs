use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain published flag, for records without date-based publishing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publishing {
    pub is_published: bool,
}

impl Publishing {
    pub fn new(is_published: bool) -> Self {
        Self { is_published }
    }
}

pub trait HasPublishingFlag {
    fn publishing(&self) -> &Publishing;
    fn publishing_mut(&mut self) -> &mut Publishing;
}

/// Publication API for flag-published records; date-published records get the
/// same methods from [`HasDatePublishing`](super::HasDatePublishing)
pub trait HasPublishing {
    /// Whether the record is visible at `now`
    fn is_published_at(&self, now: DateTime<Utc>) -> bool;

    /// Whether the record is visible right now; evaluated on every call
    fn is_published(&self) -> bool {
        self.is_published_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unpublished() {
        assert!(!Publishing::default().is_published);
        assert!(Publishing::new(true).is_published);
    }
}
