//! Page-number based pagination.

const DEFAULT_LEFT_EDGE: u32 = 2;
const DEFAULT_LEFT_CURRENT: u32 = 2;
const DEFAULT_RIGHT_CURRENT: u32 = 5;
const DEFAULT_RIGHT_EDGE: u32 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct Pagination {
    page: u32, // 1-indexed
    per_page: u32,
    total: u64,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self { page: page.max(1), per_page, total }
    }

    /// Parses page number from query parameter.
    /// Invalid values are replaced with 1.
    pub fn from_query(
        page_param: Option<&str>,
        per_page: u32,
        total: u64,
    ) -> Self {
        let page = page_param
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(1);
        Self::new(page, per_page, total)
    }

    pub fn page(&self) -> u32 { self.page }

    pub fn per_page(&self) -> u32 { self.per_page }

    /// Total number of items
    pub fn total(&self) -> u64 { self.total }

    pub fn pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        };
        let per_page = u64::from(self.per_page);
        let pages = self.total / per_page + u64::from(self.total % per_page != 0);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages()
    }

    pub fn prev_num(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    /// Number of items before the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Returns items of the current page
    pub fn items<'item, T>(&self, items: &'item [T]) -> &'item [T] {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = start.saturating_add(self.per_page as usize).min(items.len());
        &items[start..end]
    }

    /// Returns page numbers for pagination widget.
    /// Skipped pages are represented as `None`.
    pub fn iter_pages(
        &self,
        left_edge: u32,
        left_current: u32,
        right_current: u32,
        right_edge: u32,
    ) -> Vec<Option<u32>> {
        let page = i64::from(self.page);
        let pages = self.pages();
        let mut numbers = vec![];
        let mut last = 0;
        for number in 1..=pages {
            let current = i64::from(number);
            let is_visible =
                number <= left_edge ||
                (current > page - i64::from(left_current) - 1 &&
                    current < page + i64::from(right_current)) ||
                current > i64::from(pages) - i64::from(right_edge);
            if is_visible {
                if last + 1 != number {
                    numbers.push(None);
                };
                numbers.push(Some(number));
                last = number;
            };
        };
        numbers
    }

    pub fn iter_pages_default(&self) -> Vec<Option<u32>> {
        self.iter_pages(
            DEFAULT_LEFT_EDGE,
            DEFAULT_LEFT_CURRENT,
            DEFAULT_RIGHT_CURRENT,
            DEFAULT_RIGHT_EDGE,
        )
    }
}
