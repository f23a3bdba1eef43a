//! 分页相关的数据结构 (JSON 接口使用)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UserResponse;
use crate::utils::Pager;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationInfo {
    pub current_page: u64,
    pub per_page: u64,
    pub total: Option<u64>,
    pub pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
}

impl From<&Pager> for PaginationInfo {
    fn from(pager: &Pager) -> Self {
        Self {
            current_page: pager.current_page(),
            per_page: pager.per_page(),
            total: pager.total_count(),
            pages: pager.pages(),
            has_prev: pager.has_prev(),
            has_next: pager.has_next(),
            prev_page: pager.prev_page(),
            next_page: pager.next_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(UserPage = PaginatedResponse<UserResponse>)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, pager: &Pager) -> Self {
        Self {
            items,
            pagination: PaginationInfo::from(pager),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_info_from_pager() {
        let pager = Pager::from_query_string(Some(25), 10, "http://localhost/user", "page=2");
        let info = PaginationInfo::from(&pager);
        assert_eq!(
            info,
            PaginationInfo {
                current_page: 2,
                per_page: 10,
                total: Some(25),
                pages: 3,
                has_prev: true,
                has_next: true,
                prev_page: Some(1),
                next_page: Some(3),
            }
        );
    }

    #[test]
    fn test_paginated_response_serializes_nulls() {
        let pager = Pager::from_query_string(Some(5), 10, "http://localhost/user", "");
        let json = serde_json::to_value(PaginatedResponse::new(vec!["a"], &pager)).unwrap();
        assert_eq!(json["items"], serde_json::json!(["a"]));
        assert_eq!(json["pagination"]["pages"], 1);
        assert!(json["pagination"]["prev_page"].is_null());
        assert!(json["pagination"]["next_page"].is_null());
    }
}
