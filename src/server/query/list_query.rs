use crate::{model::api::ListParamsDto, server::query::paginate::Paginator};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized list request.
///
/// `page` is the zero-based page onset; clients send 1-based pages and
/// [`ListQuery::from_params`] converts them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub page_size: u64,
    pub page: u64,
    pub relation: Option<String>,
    pub filter: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: 0,
            relation: None,
            filter: None,
        }
    }
}

impl ListQuery {
    /// Builds a query from raw client parameters.
    ///
    /// Page size is clamped into `[1, 100]` with 10 for missing or
    /// non-positive values. A 1-based page `n > 0` becomes onset `n - 1`;
    /// anything else is page 0. Blank strings count as absent.
    pub fn from_params(params: ListParamsDto) -> Self {
        let page_size = match params.page_size {
            Some(size) if size > MAX_PAGE_SIZE as i64 => MAX_PAGE_SIZE,
            Some(size) if size >= 1 => size as u64,
            _ => DEFAULT_PAGE_SIZE,
        };
        let page = match params.page {
            Some(page) if page > 0 => (page - 1) as u64,
            _ => 0,
        };

        Self {
            sort: non_blank(params.sort),
            page_size,
            page,
            relation: non_blank(params.relation),
            filter: non_blank(params.filter),
        }
    }

    /// Number of records skipped before this page.
    pub fn skip(&self) -> u64 {
        self.page.saturating_mul(self.page_size)
    }

    /// Paginator for this page given the post-filter total.
    pub fn paginator(&self, total_documents: u64) -> Paginator {
        Paginator::paginate(
            self.page.saturating_add(1) as i64,
            self.page_size as i64,
            total_documents,
        )
    }
}

impl From<ListParamsDto> for ListQuery {
    fn from(params: ListParamsDto) -> Self {
        Self::from_params(params)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
