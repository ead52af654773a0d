use crate::model::{Record, RecordId};

/// Borrowed, ordered selection of records from a [`Store`](crate::ops::Store)
///
/// Filters consume the set and return a narrowed one, so they chain:
/// `store.objects().active().published_at(now)`.
#[derive(Debug)]
pub struct QuerySet<'a, R> {
    items: Vec<&'a R>,
}

impl<'a, R> Clone for QuerySet<'a, R> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<'a, R> QuerySet<'a, R> {
    pub fn new(items: impl IntoIterator<Item = &'a R>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Keep the records for which `predicate` holds
    pub fn filter(self, predicate: impl Fn(&R) -> bool) -> Self {
        Self {
            items: self.items.into_iter().filter(|r| predicate(r)).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.items.iter().copied()
    }

    pub fn first(&self) -> Option<&'a R> {
        self.items.first().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, R: Record> QuerySet<'a, R> {
    /// Identity keys of the selected records, in order
    pub fn pks(&self) -> Vec<RecordId> {
        self.items.iter().filter_map(|r| r.pk()).collect()
    }
}

impl<'a, R> IntoIterator for QuerySet<'a, R> {
    type Item = &'a R;
    type IntoIter = std::vec::IntoIter<&'a R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
