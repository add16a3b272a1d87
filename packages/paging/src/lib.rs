//! Pagination utilities for paginated API responses.
//!
//! This crate provides the types shared by every list endpoint:
//!
//! * [`PagingRequest`] - The 1-based `page` and `limit` query parameters
//! * [`Page`] - A slice of an ordered collection along with the size of the
//!   collection it was sliced from
//! * [`Pagination`] - The metadata block serialized next to paginated data
//!
//! `total` and `total_pages` always describe the filtered-but-unpaginated
//! collection, so callers must filter before they paginate.
//!
//! # Examples
//!
//! ```rust
//! use tunebox_paging::{Page, PagingRequest};
//!
//! let page = Page::paginate(vec![1, 2, 3, 4, 5], &PagingRequest::new(Some(2), Some(2)));
//!
//! assert_eq!(page.items(), &[3, 4]);
//! assert_eq!(page.total(), 5);
//! assert_eq!(page.total_pages(), 3);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes an optional numeric query parameter leniently.
///
/// Missing, empty, or unparseable values deserialize to `None` instead of
/// failing the whole request, matching the permissive handling of `page` and
/// `limit` throughout the API.
///
/// # Errors
///
/// * If the underlying deserializer fails
pub fn deserialize_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;

    Ok(value.and_then(|value| value.trim().parse().ok()))
}

/// A request for a specific page of results.
///
/// Both parameters are optional; [`PagingRequest::page`] defaults to `1` and
/// [`PagingRequest::limit`] to `10` when unspecified.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PagingRequest {
    /// The 1-based page number, if specified.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub page: Option<u32>,
    /// The page size, if specified.
    #[serde(default, deserialize_with = "deserialize_lenient_u32")]
    pub limit: Option<u32>,
}

impl PagingRequest {
    /// Page number used when none is specified.
    pub const DEFAULT_PAGE: u32 = 1;
    /// Page size used when none is specified.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Creates a paging request from raw query parameter values.
    #[must_use]
    pub const fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// Returns the requested 1-based page number, or the default.
    #[must_use]
    pub const fn page(&self) -> u32 {
        match self.page {
            Some(page) => page,
            None => Self::DEFAULT_PAGE,
        }
    }

    /// Returns the requested page size, or the default.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        match self.limit {
            Some(limit) => limit,
            None => Self::DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata serialized next to the data on list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Pagination {
    /// The 1-based page number
    pub page: u32,
    /// The page size
    pub limit: u32,
    /// Number of items in the filtered, unpaginated collection
    pub total: u32,
    /// `ceil(total / limit)`
    pub total_pages: u32,
}

/// A page of items from an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    limit: u32,
    total: u32,
}

impl<T> Page<T> {
    /// Slices `items` to the requested page.
    ///
    /// The page covers `[(page - 1) * limit, (page - 1) * limit + limit)` of the
    /// input. `total` records the size of the full input collection, so filtering
    /// must already have been applied. A `page` of `0` is treated as the first
    /// page and a `limit` of `0` produces an empty page.
    #[must_use]
    pub fn paginate(items: Vec<T>, paging: &PagingRequest) -> Self {
        let page = paging.page();
        let limit = paging.limit();
        let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
        let offset = page.saturating_sub(1).saturating_mul(limit);

        Self {
            items: items
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect(),
            page,
            limit,
            total,
        }
    }

    /// Returns a slice of the items in this page.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes this page and returns the items as a `Vec`.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the 1-based page number of this page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size this page was sliced with.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns the number of pages needed to cover all items.
    ///
    /// A `limit` of `0` yields `0` pages rather than dividing by zero.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Returns the [`Pagination`] metadata describing this page.
    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total: self.total,
            total_pages: self.total_pages(),
        }
    }

    /// Transforms each item in this page using the provided function,
    /// preserving the pagination metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }

    /// Converts the items in this page into a different type using `Into`,
    /// preserving the pagination metadata.
    pub fn into<U>(self) -> Page<U>
    where
        T: Into<U>,
    {
        self.map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items() -> Vec<u32> {
        (1..=25).collect()
    }

    #[test_log::test]
    fn paginate_slices_the_requested_page() {
        let page = Page::paginate(items(), &PagingRequest::new(Some(2), Some(10)));

        assert_eq!(page.items(), (11..=20).collect::<Vec<_>>().as_slice());
        assert_eq!(page.total(), 25);
        assert_eq!(page.total_pages(), 3);
    }

    #[test_log::test]
    fn paginate_defaults_to_first_page_of_ten() {
        let page = Page::paginate(items(), &PagingRequest::default());

        assert_eq!(page.items(), (1..=10).collect::<Vec<_>>().as_slice());
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 10);
    }

    #[test_log::test]
    fn paginate_returns_partial_final_page() {
        let page = Page::paginate(items(), &PagingRequest::new(Some(3), Some(10)));

        assert_eq!(page.items(), &[21, 22, 23, 24, 25]);
    }

    #[test_log::test]
    fn paginate_past_the_end_returns_empty_page_with_total() {
        let page = Page::paginate(items(), &PagingRequest::new(Some(9), Some(10)));

        assert!(page.items().is_empty());
        assert_eq!(page.total(), 25);
    }

    #[test_log::test]
    fn paginate_treats_page_zero_as_first_page() {
        let page = Page::paginate(items(), &PagingRequest::new(Some(0), Some(5)));

        assert_eq!(page.items(), &[1, 2, 3, 4, 5]);
    }

    #[test_log::test]
    fn paginate_with_zero_limit_is_empty_and_has_no_pages() {
        let page = Page::paginate(items(), &PagingRequest::new(Some(1), Some(0)));

        assert!(page.items().is_empty());
        assert_eq!(page.total_pages(), 0);
    }

    #[test_log::test]
    fn total_pages_is_ceil_of_total_over_limit() {
        for (total, limit, expected) in
            [(0, 10, 0), (1, 10, 1), (10, 10, 1), (11, 10, 2), (25, 7, 4)]
        {
            let page = Page::paginate((0..total).collect(), &PagingRequest::new(None, Some(limit)));
            assert_eq!(page.total_pages(), expected, "total={total} limit={limit}");
        }
    }

    #[test_log::test]
    fn concatenating_all_pages_reconstructs_the_collection() {
        let limit = 7;
        let first = Page::paginate(items(), &PagingRequest::new(Some(1), Some(limit)));

        let mut collected = vec![];
        for page in 1..=first.total_pages() {
            collected
                .extend(Page::paginate(items(), &PagingRequest::new(Some(page), Some(limit))).into_items());
        }

        assert_eq!(collected, items());
    }

    #[test_log::test]
    fn map_preserves_pagination_metadata() {
        let page =
            Page::paginate(items(), &PagingRequest::new(Some(2), Some(10))).map(|x| x.to_string());

        assert_eq!(page.pagination(), Pagination {
            page: 2,
            limit: 10,
            total: 25,
            total_pages: 3,
        });
    }

    #[test_log::test]
    fn lenient_deserialization_ignores_garbage_values() {
        let paging: PagingRequest =
            serde_json::from_value(serde_json::json!({"page": "abc", "limit": "5"})).unwrap();

        assert_eq!(paging.page(), 1);
        assert_eq!(paging.limit(), 5);
    }

    #[test_log::test]
    fn pagination_serializes_camel_case() {
        let json = serde_json::to_value(Pagination {
            page: 1,
            limit: 10,
            total: 3,
            total_pages: 1,
        })
        .unwrap();

        assert_eq!(json["totalPages"], 1);
    }
}
