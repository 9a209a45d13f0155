use super::result::{ApiResult, Failure};
use serde::{Deserialize, Serialize};

pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const PAGE_SIZE_MESSAGE: &str = "Page size must be between 1 and 100";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Check `page >= 1`, then `page_size` in `1..=100`.
    ///
    /// The page message differs between domains, so callers pass it in.
    pub fn validate(&self, page_message: &str) -> ApiResult<()> {
        if self.page < 1 {
            return Err(Failure::validation(page_message));
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(Failure::validation(PAGE_SIZE_MESSAGE));
        }
        Ok(())
    }

    /// Index of the first record on this page, `None` for page 0.
    fn start_index(&self) -> Option<usize> {
        let page_index = self.page.checked_sub(1)? as usize;
        Some(page_index * self.page_size as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
}

impl<T> PaginatedResponse<T> {
    /// Slice `[(page-1)*page_size, page*page_size)` out of the full collection.
    pub fn paginate(all: Vec<T>, params: PaginationParams) -> Self {
        let total = all.len();
        let data = match params.start_index() {
            Some(start) => all
                .into_iter()
                .skip(start)
                .take(params.page_size as usize)
                .collect(),
            None => Vec::new(),
        };

        Self {
            data,
            total,
            page: params.page,
            page_size: params.page_size,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size as usize)
    }

    pub fn is_last_page(&self) -> bool {
        self.page as usize >= self.total_pages()
    }
}
