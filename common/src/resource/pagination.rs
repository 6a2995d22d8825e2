//! Client-side pagination and page-number rendering.

/// Pages kept on each side of the current page.
pub const WINDOW_RADIUS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Number(usize),
    /// Collapsed run of page numbers, rendered as `...`.
    Gap,
}

/// One page of the filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, R> {
    pub items: Vec<&'a R>,
    /// 1-based current page.
    pub number: usize,
    pub total: usize,
    /// Position of the first item in the filtered collection.
    pub offset: usize,
    pub numbers: Vec<PageItem>,
}

impl<R> PageView<'_, R> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total
    }
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return usize::from(len > 0);
    }
    len.div_ceil(page_size)
}

/// Items of the 1-based `page`. Out-of-range pages are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// First and last page, plus a window around `current`; runs of skipped
/// pages collapse into a single [`PageItem::Gap`].
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    let left = current.saturating_sub(WINDOW_RADIUS);
    let right = current.saturating_add(WINDOW_RADIUS);

    let mut items = Vec::new();
    let mut previous = 0;
    for page in 1..=total {
        if page != 1 && page != total && (page < left || page > right) {
            continue;
        }
        if previous != 0 && page - previous > 1 {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Number(page));
        previous = page;
    }
    items
}
