use crate::model::api::PaginatorDto;

/// Page bookkeeping returned alongside every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub page: u64,
    pub page_size: u64,
    pub remaining_documents: u64,
    pub total_documents: u64,
}

impl Paginator {
    /// Computes how many documents remain after the given 1-based page.
    ///
    /// A page below 1 is treated as 1 and a page size below 1 as 10.
    pub fn paginate(page: i64, page_size: i64, total_documents: u64) -> Self {
        let page = if page < 1 { 1 } else { page as u64 };
        let page_size = if page_size < 1 { 10 } else { page_size as u64 };
        let taken = page.saturating_mul(page_size);

        Self {
            page,
            page_size,
            remaining_documents: total_documents.saturating_sub(taken),
            total_documents,
        }
    }

    pub fn into_dto(self) -> PaginatorDto {
        PaginatorDto {
            page: self.page,
            page_size: self.page_size,
            remaining_documents: self.remaining_documents,
            total_documents: self.total_documents,
        }
    }
}
