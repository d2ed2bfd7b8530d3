use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Failure envelope returned by every endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub status: bool,
    pub message: String,
    pub code: String,
}

impl ErrorDto {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Success envelope for single-value responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataDto<T> {
    pub status: bool,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self { status: true, data }
    }
}

/// Page of records. Populated listings carry plain JSON documents with the
/// related entity embedded under `{Entity}Embedded`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ListDataDto<T> {
    Records(Vec<T>),
    Populated(Vec<Map<String, Value>>),
}

/// Success envelope for list responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListDto<T> {
    pub status: bool,
    pub data: ListDataDto<T>,
    pub paginator: PaginatorDto,
}

impl<T> ListDto<T> {
    pub fn new(data: ListDataDto<T>, paginator: PaginatorDto) -> Self {
        Self {
            status: true,
            data,
            paginator,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorDto {
    pub page: u64,
    pub page_size: u64,
    pub remaining_documents: u64,
    pub total_documents: u64,
}

/// Query-string parameters accepted by every list endpoint.
///
/// `page` is 1-based as seen by clients. Missing or out-of-range values are
/// normalized rather than rejected.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListParamsDto {
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub relation: Option<String>,
    pub filter: Option<String>,
}
