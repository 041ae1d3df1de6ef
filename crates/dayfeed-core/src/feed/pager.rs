//! Client-side pagination over a fetched item list.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Fixed-size pages over an owned list, 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pager<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

impl<T> Pager<T> {
    /// A zero `page_size` is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Items on the current page.
    pub fn page_items(&self) -> &[T] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Advance one page. Returns false (and stays put) on the last page.
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false (and stays put) on page 1.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn next_disabled(&self) -> bool {
        let total = self.total_pages();
        self.current_page == total || total == 0
    }

    pub fn page_info(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_items_in_pages_of_six() {
        let mut pager = Pager::new((1..=13).collect::<Vec<_>>(), 6);
        assert_eq!(pager.total_pages(), 3);
        assert!(pager.prev_disabled());
        assert!(!pager.next_disabled());
        assert_eq!(pager.page_items(), &[1, 2, 3, 4, 5, 6]);

        assert!(pager.next());
        assert!(pager.next());
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.page_items(), &[13]);
        assert!(pager.next_disabled());
        assert_eq!(pager.page_info(), "Page 3 of 3");

        assert!(!pager.next());
        assert_eq!(pager.current_page(), 3);
    }

    #[test]
    fn prev_stops_at_first_page() {
        let mut pager = Pager::new(vec!['a', 'b'], 1);
        assert!(!pager.prev());
        pager.next();
        assert!(pager.prev());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn empty_list_disables_both_buttons() {
        let pager: Pager<u8> = Pager::default();
        assert_eq!(pager.total_pages(), 0);
        assert!(pager.prev_disabled());
        assert!(pager.next_disabled());
        assert!(pager.page_items().is_empty());
        assert_eq!(pager.page_info(), "Page 1 of 0");
    }

    #[test]
    fn go_to_clamps() {
        let mut pager = Pager::new((0..20).collect::<Vec<_>>(), 6);
        pager.go_to(9);
        assert_eq!(pager.current_page(), 4);
        assert_eq!(pager.page_items(), &[18, 19]);
        pager.go_to(0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn zero_page_size_is_one() {
        let pager = Pager::new(vec![1, 2, 3], 0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.total_pages(), 3);
    }
}
