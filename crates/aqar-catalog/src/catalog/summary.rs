use std::collections::BTreeMap;

use serde::Serialize;

/// Count records per key, e.g. leads per pipeline stage for the status cards.
///
/// Records without a key are counted under `unassigned`.
pub fn tally<R, K, F>(records: &[R], key: F) -> StatusTally<K>
where
    K: Ord,
    F: Fn(&R) -> Option<K>,
{
    let mut counts = BTreeMap::new();
    let mut unassigned = 0;

    for record in records {
        match key(record) {
            Some(value) => *counts.entry(value).or_insert(0) += 1,
            None => unassigned += 1,
        }
    }

    StatusTally {
        total: records.len(),
        counts,
        unassigned,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTally<K: Ord> {
    pub total: usize,
    pub counts: BTreeMap<K, usize>,
    pub unassigned: usize,
}

impl<K: Ord> StatusTally<K> {
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

/// Requested page; numbering starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub const MAX_PER_PAGE: usize = 100;

    /// Clamp user input into a valid request.
    pub fn new(page: Option<usize>, per_page: Option<usize>, default_per_page: usize) -> Self {
        let per_page = per_page
            .unwrap_or(default_per_page)
            .clamp(1, Self::MAX_PER_PAGE);
        Self {
            page: page.unwrap_or(1).max(1),
            per_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Slice an already filtered list. Pages past the end are empty but keep the totals.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len();
    let total_pages = total.div_ceil(request.per_page.max(1));
    let start = request.page.saturating_sub(1).saturating_mul(request.per_page);

    let items = items
        .iter()
        .skip(start)
        .take(request.per_page)
        .cloned()
        .collect();

    Page {
        items,
        page: request.page,
        per_page: request.per_page,
        total,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_status_and_unassigned() {
        let statuses = [Some("new"), Some("won"), None, Some("new")];
        let tally = tally(&statuses, |status| *status);

        assert_eq!(tally.total, 4);
        assert_eq!(tally.count(&"new"), 2);
        assert_eq!(tally.count(&"won"), 1);
        assert_eq!(tally.count(&"lost"), 0);
        assert_eq!(tally.unassigned, 1);
    }

    #[test]
    fn paginate_reports_totals_and_slices() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, PageRequest::new(Some(3), Some(10), 12));

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let items = vec!["a", "b"];
        let page = paginate(&items, PageRequest::new(Some(9), None, 12));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_request_clamps_input() {
        let request = PageRequest::new(Some(0), Some(10_000), 12);
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, PageRequest::MAX_PER_PAGE);
        assert_eq!(PageRequest::new(None, Some(0), 12).per_page, 1);
    }
}
