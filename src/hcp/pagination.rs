//! Sequential page-number pagination
//!
//! The [`Paginator`] walks a paginated listing one page at a time through a
//! caller-supplied fetch function. It knows nothing about HTTP, which keeps it
//! testable with plain closures; [`TfeClient::fetch_page`] adapts the TFE
//! list endpoints to it.
//!
//! [`TfeClient::fetch_page`]: crate::hcp::TfeClient::fetch_page

use std::future::Future;

use log::{debug, log, Level};

use crate::error::{Result, TfeError};

/// Page to request from a listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number; `None` asks for the server's first page
    pub number: Option<u32>,
    /// Items per page
    pub size: u32,
}

/// One page of items plus its pagination metadata
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
    /// Next page number; `None` or `Some(0)` means there is none
    pub next_page: Option<u32>,
}

impl<T> PageResult<T> {
    /// A page without pagination metadata, treated as the only page
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            current_page: None,
            total_pages: None,
            next_page: None,
        }
    }

    /// True when this page is the last one according to its metadata
    fn is_last(&self) -> bool {
        matches!(self.next_page, None | Some(0))
            || (self.current_page.is_some() && self.current_page == self.total_pages)
    }
}

/// Walks every page of a listing and returns all items in order
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    page_size: u32,
    verbose: bool,
}

impl Paginator {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            verbose: false,
        }
    }

    /// Log per-page progress at info instead of debug
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch pages until the listing is exhausted
    ///
    /// Stops on an empty page, on a page without a next page, or when the
    /// current page equals the total page count. The first fetch error aborts
    /// the walk. A next page that does not move past both the page reported as
    /// current and the page requested is reported as [`TfeError::Pagination`].
    pub async fn collect<T, F, Fut>(&self, label: &str, mut fetch: F) -> Result<Vec<T>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<PageResult<T>>>,
    {
        let level = if self.verbose {
            Level::Info
        } else {
            Level::Debug
        };

        let mut all_items = Vec::new();
        let mut request = PageRequest {
            number: None,
            size: self.page_size,
        };

        loop {
            let page = fetch(request).await?;

            if page.items.is_empty() {
                debug!("Empty page for {}, stopping", label);
                break;
            }

            log!(
                level,
                "Fetched {} page: {} of {} ({} items)",
                label,
                page.current_page.unwrap_or(1),
                page.total_pages.unwrap_or(1),
                page.items.len()
            );

            let is_last = page.is_last();
            let requested = request.number.unwrap_or(1);
            let current = page.current_page.unwrap_or(requested).max(requested);
            let next = page.next_page.unwrap_or(0);
            all_items.extend(page.items);

            if is_last {
                break;
            }

            // Next page must move past both the reported and the requested page
            if next <= current {
                return Err(TfeError::Pagination(format!(
                    "{} reported next page {} after page {}",
                    label, next, current
                )));
            }

            request = PageRequest {
                number: Some(next),
                size: self.page_size,
            };
        }

        debug!("Fetched {} total items for {}", all_items.len(), label);
        Ok(all_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn page(items: Vec<u32>, current: u32, total: u32, next: Option<u32>) -> PageResult<u32> {
        PageResult {
            items,
            current_page: Some(current),
            total_pages: Some(total),
            next_page: next,
        }
    }

    #[tokio::test]
    async fn test_collect_three_pages_in_order() {
        let requests = RefCell::new(Vec::new());
        let paginator = Paginator::new(50);

        let items = paginator
            .collect("workspaces", |req| {
                requests.borrow_mut().push(req);
                let result = match req.number {
                    None => page((0..50).collect(), 1, 3, Some(2)),
                    Some(2) => page((50..100).collect(), 2, 3, Some(3)),
                    Some(3) => page((100..107).collect(), 3, 3, None),
                    Some(n) => panic!("unexpected page {}", n),
                };
                async move { Ok(result) }
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 107);
        assert_eq!(items, (0..107).collect::<Vec<u32>>());

        let requests = requests.into_inner();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].number, None);
        assert_eq!(requests[1].number, Some(2));
        assert_eq!(requests[2].number, Some(3));
        assert!(requests.iter().all(|r| r.size == 50));
    }

    #[tokio::test]
    async fn test_collect_stops_when_current_equals_total() {
        let calls = RefCell::new(0);
        let paginator = Paginator::new(50);

        // Next page still set, but metadata says this is the last page
        let items = paginator
            .collect("workspaces", |_req| {
                *calls.borrow_mut() += 1;
                async { Ok(page(vec![1, 2], 1, 1, Some(2))) }
            })
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_collect_empty_first_page() {
        let calls = RefCell::new(0);
        let paginator = Paginator::new(50);

        let items: Vec<u32> = paginator
            .collect("workspaces", |_req| {
                *calls.borrow_mut() += 1;
                async { Ok(page(vec![], 1, 5, Some(2))) }
            })
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_collect_next_page_zero_terminates() {
        let paginator = Paginator::new(10);

        let items = paginator
            .collect("organizations", |_req| async {
                Ok(page(vec![7, 8, 9], 1, 4, Some(0)))
            })
            .await
            .unwrap();

        assert_eq!(items, vec![7, 8, 9]);
    }

    #[tokio::test]
    async fn test_collect_without_metadata_is_single_page() {
        let calls = RefCell::new(0);
        let paginator = Paginator::new(50);

        let items = paginator
            .collect("organizations", |_req| {
                *calls.borrow_mut() += 1;
                async { Ok(PageResult::single(vec![1, 2, 3])) }
            })
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_collect_error_aborts_traversal() {
        let calls = RefCell::new(0);
        let paginator = Paginator::new(50);

        let result: Result<Vec<u32>> = paginator
            .collect("workspaces", |req| {
                *calls.borrow_mut() += 1;
                async move {
                    match req.number {
                        None => Ok(page(vec![1, 2], 1, 3, Some(2))),
                        _ => Err(TfeError::Api {
                            status: 500,
                            message: "boom".to_string(),
                        }),
                    }
                }
            })
            .await;

        assert!(matches!(result, Err(TfeError::Api { status: 500, .. })));
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test]
    async fn test_collect_rejects_non_advancing_next_page() {
        let calls = RefCell::new(0);
        let paginator = Paginator::new(50);

        let result: Result<Vec<u32>> = paginator
            .collect("workspaces", |req| {
                *calls.borrow_mut() += 1;
                let result = match req.number {
                    None => page(vec![1], 1, 3, Some(2)),
                    _ => page(vec![2], 2, 3, Some(2)),
                };
                async move { Ok(result) }
            })
            .await;

        match result {
            Err(TfeError::Pagination(msg)) => {
                assert!(msg.contains("next page 2 after page 2"));
            }
            other => panic!("Expected TfeError::Pagination, got {:?}", other),
        }
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test]
    async fn test_collect_rejects_backwards_next_page() {
        let paginator = Paginator::new(50);

        let result: Result<Vec<u32>> = paginator
            .collect("workspaces", |_req| async {
                Ok(page(vec![1], 3, 5, Some(1)))
            })
            .await;

        assert!(matches!(result, Err(TfeError::Pagination(_))));
    }

    #[tokio::test]
    async fn test_collect_rejects_server_ignoring_page_number() {
        let calls = RefCell::new(0);
        let paginator = Paginator::new(50);

        // Server always answers with its first page, whatever was requested
        let result: Result<Vec<u32>> = paginator
            .collect("workspaces", |_req| {
                *calls.borrow_mut() += 1;
                async { Ok(page(vec![1], 1, 3, Some(2))) }
            })
            .await;

        match result {
            Err(TfeError::Pagination(msg)) => {
                assert!(msg.contains("next page 2 after page 2"));
            }
            other => panic!("Expected TfeError::Pagination, got {:?}", other),
        }
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_paginator_builder() {
        let paginator = Paginator::new(25).verbose(true);
        assert_eq!(paginator.page_size(), 25);
        assert!(paginator.verbose);
    }
}
