//! Windowed page views over ordered sequences.

use std::ops::Range;

/// A fixed-size page over a full ordered sequence.
///
/// The complete source stays behind the window: the total count survives
/// paging, and [`Paginated::map`] re-derives the window from the original
/// sequence rather than from the visible slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    source: Vec<T>,
    page_number: usize,
    page_size: usize,
    window: Range<usize>,
}

impl<T> Paginated<T> {
    /// Windows `source` at the 1-based `page_number` with `page_size`
    /// elements per page.
    ///
    /// Zero page inputs are clamped to 1; a page past the end of the
    /// sequence yields an empty window, not an error.
    #[must_use]
    pub fn new(source: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let window = window_range(source.len(), page_number, page_size);
        Self {
            source,
            page_number,
            page_size,
            window,
        }
    }

    /// The elements visible on the current page.
    #[must_use]
    pub fn window(&self) -> &[T] {
        &self.source[self.window.clone()]
    }

    #[must_use]
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Length of the full source sequence, independent of the window.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.source.len()
    }

    /// Number of pages needed to show the whole sequence.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.source.len().div_ceil(self.page_size)
    }

    /// Applies `transform` to every element of the original full sequence,
    /// then re-windows with the same page number and size.
    ///
    /// The transform is never restricted to the visible slice, so the total
    /// count and window position carry over exactly.
    #[must_use]
    pub fn map<U>(self, transform: impl FnMut(T) -> U) -> Paginated<U> {
        let source: Vec<U> = self.source.into_iter().map(transform).collect();
        Paginated::new(source, self.page_number, self.page_size)
    }
}

fn window_range(len: usize, page_number: usize, page_size: usize) -> Range<usize> {
    let start = (page_number - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn pages_over_25_elements_at_size_10() {
        let page1 = Paginated::new(numbers(25), 1, 10);
        assert_eq!(page1.window(), (0..10).collect::<Vec<_>>());
        assert_eq!(page1.total_count(), 25);
        assert_eq!(page1.total_pages(), 3);

        let page3 = Paginated::new(numbers(25), 3, 10);
        assert_eq!(page3.window(), (20..25).collect::<Vec<_>>());
        assert_eq!(page3.total_count(), 25);
        assert_eq!(page3.total_pages(), 3);

        let page4 = Paginated::new(numbers(25), 4, 10);
        assert!(page4.window().is_empty());
        assert_eq!(page4.total_count(), 25);
        assert_eq!(page4.total_pages(), 3);
    }

    #[test]
    fn exact_division_has_no_trailing_page() {
        let page = Paginated::new(numbers(20), 1, 10);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn empty_source_has_no_pages() {
        let page = Paginated::new(Vec::<usize>::new(), 1, 10);
        assert!(page.window().is_empty());
        assert_eq!(page.total_count(), 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn zero_page_inputs_clamp_to_one() {
        let page = Paginated::new(numbers(5), 0, 0);
        assert_eq!(page.page_number(), 1);
        assert_eq!(page.page_size(), 1);
        assert_eq!(page.window(), &[0]);
    }

    #[test]
    fn identity_map_preserves_window_and_counts() {
        let before = Paginated::new(numbers(25), 2, 10);
        let after = before.clone().map(|n| n);
        assert_eq!(after, before);
    }

    #[test]
    fn map_covers_the_full_source_not_just_the_window() {
        let mut calls = 0;
        let page = Paginated::new(numbers(25), 1, 10).map(|n| {
            calls += 1;
            n * 2
        });
        assert_eq!(calls, 25);
        assert_eq!(page.window(), (0..10).map(|n| n * 2).collect::<Vec<_>>());
        assert_eq!(page.total_count(), 25);
    }

    #[test]
    fn map_can_change_element_type() {
        let page = Paginated::new(numbers(25), 3, 10).map(|n| n.to_string());
        assert_eq!(page.window(), ["20", "21", "22", "23", "24"]);
        assert_eq!(page.total_count(), 25);
        assert_eq!(page.total_pages(), 3);
    }
}
