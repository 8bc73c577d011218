//! Paginated collection fetching with per-page credential rotation
//!
//! A [`PageCollector`] follows `rel="next"` links from one page to the next,
//! decoding each page and concatenating the items in fetch order. The walk
//! stops when a page has no `next` link or when the page cap is reached.
//!
//! Any non-200 page fails the whole collection: items from earlier pages are
//! dropped so callers never mistake a truncated list for a complete one.

use crate::credentials::CredentialPool;
use crate::error::{GitHubError, Result};
use crate::link;
use crate::transport::{GITHUB_JSON, Transport};

/// Default upper bound on page fetches for one collection
///
/// The cap counts requests exactly: 30 means up to 30 fetches, one more than
/// a walk that stops when its iteration counter reaches the cap.
pub const DEFAULT_MAX_PAGES: usize = 30;

/// What a collection walk did, alongside its items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageStats {
    /// Number of pages requested
    pub pages_fetched: usize,
    /// True if the page cap stopped the walk while a `next` link was pending
    pub truncated: bool,
}

/// Walks a paginated collection resource
pub struct PageCollector<'a> {
    transport: &'a dyn Transport,
    credentials: &'a CredentialPool,
    max_pages: usize,
}

impl<'a> PageCollector<'a> {
    pub fn new(transport: &'a dyn Transport, credentials: &'a CredentialPool) -> Self {
        Self {
            transport,
            credentials,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the maximum number of page fetches
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch every page starting at `url` and return the concatenated items
    ///
    /// # Errors
    /// - `Transport` if a page request fails at the network level
    /// - `UnexpectedStatus` if any page answers with a status other than 200
    /// - `Decode` if any page body cannot be decoded
    pub async fn collect<T, D>(&self, url: &str, decode: D) -> Result<Vec<T>>
    where
        D: Fn(&[u8]) -> Result<Vec<T>>,
    {
        let (items, _) = self.collect_with_stats(url, decode).await?;
        Ok(items)
    }

    /// Same as [`PageCollector::collect`], also reporting how the walk ended
    pub async fn collect_with_stats<T, D>(&self, url: &str, decode: D) -> Result<(Vec<T>, PageStats)>
    where
        D: Fn(&[u8]) -> Result<Vec<T>>,
    {
        let mut items = Vec::new();
        let mut stats = PageStats::default();
        let mut current = Some(url.to_string());

        while let Some(page_url) = current.take() {
            if stats.pages_fetched >= self.max_pages {
                tracing::warn!(
                    max_pages = self.max_pages,
                    next = %page_url,
                    "page limit reached, returning {} items collected so far",
                    items.len()
                );
                stats.truncated = true;
                break;
            }

            stats.pages_fetched += 1;
            let token = self.credentials.select_token();
            let response = self.transport.get(&page_url, token, GITHUB_JSON).await?;

            if response.status != 200 {
                return Err(GitHubError::UnexpectedStatus {
                    status: response.status,
                    url: page_url,
                });
            }

            let page = decode(response.body.as_slice())?;
            tracing::debug!(
                page = stats.pages_fetched,
                count = page.len(),
                url = %page_url,
                "fetched page"
            );
            items.extend(page);

            current = response
                .link_header()
                .and_then(|header| link::next_page_url(&header));
        }

        Ok((items, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_json;
    use crate::transport::RawResponse;
    use async_trait::async_trait;
    use reqwest::header::{HeaderMap, HeaderValue, LINK};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned responses keyed by URL and records every request
    struct StubTransport {
        pages: HashMap<String, (u16, Option<String>, String)>,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl StubTransport {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn page(mut self, url: &str, status: u16, next: Option<&str>, body: &str) -> Self {
            let link = next.map(|n| format!(r#"<{}>; rel="next""#, n));
            self.pages
                .insert(url.to_string(), (status, link, body.to_string()));
            self
        }

        fn raw_link_page(mut self, url: &str, link: &str, body: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                (200, Some(link.to_string()), body.to_string()),
            );
            self
        }

        fn requested_urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|(url, _)| url.clone())
                .collect()
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn get(&self, url: &str, token: &str, _accept: &str) -> Result<RawResponse> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), token.to_string()));
            let (status, link, body) = self.pages.get(url).cloned().unwrap_or((
                404,
                None,
                r#"{"message":"Not Found"}"#.to_string(),
            ));
            let mut headers = HeaderMap::new();
            if let Some(link) = link {
                headers.insert(LINK, HeaderValue::from_str(&link).unwrap());
            }
            Ok(RawResponse {
                status,
                headers,
                body: body.into_bytes(),
            })
        }
    }

    fn numbers(body: &[u8]) -> Result<Vec<u32>> {
        decode_json(body)
    }

    fn pool() -> CredentialPool {
        CredentialPool::with_seed(vec!["t1".to_string(), "t2".to_string()], 3).unwrap()
    }

    #[tokio::test]
    async fn test_concatenates_pages_in_order() {
        let transport = StubTransport::new()
            .page("p1", 200, Some("p2"), "[1, 2]")
            .page("p2", 200, Some("p3"), "[3]")
            .page("p3", 200, None, "[4, 5, 6]");
        let credentials = pool();

        let (items, stats) = PageCollector::new(&transport, &credentials)
            .collect_with_stats("p1", numbers)
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            stats,
            PageStats {
                pages_fetched: 3,
                truncated: false
            }
        );
        assert_eq!(transport.requested_urls(), vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_cycle_stops_at_cap() {
        let transport = StubTransport::new().page("loop", 200, Some("loop"), "[7]");
        let credentials = pool();

        let (items, stats) = PageCollector::new(&transport, &credentials)
            .with_max_pages(4)
            .collect_with_stats("loop", numbers)
            .await
            .unwrap();

        assert_eq!(items, vec![7, 7, 7, 7]);
        assert_eq!(stats.pages_fetched, 4);
        assert!(stats.truncated);
        assert_eq!(transport.requested_urls().len(), 4);
    }

    #[tokio::test]
    async fn test_default_cap_is_thirty() {
        let transport = StubTransport::new().page("loop", 200, Some("loop"), "[1]");
        let credentials = pool();

        let items = PageCollector::new(&transport, &credentials)
            .collect("loop", numbers)
            .await
            .unwrap();

        assert_eq!(items.len(), DEFAULT_MAX_PAGES);
        assert_eq!(transport.requested_urls().len(), DEFAULT_MAX_PAGES);
    }

    #[tokio::test]
    async fn test_last_page_exactly_at_cap_is_not_truncated() {
        let transport = StubTransport::new()
            .page("p1", 200, Some("p2"), "[1]")
            .page("p2", 200, None, "[2]");
        let credentials = pool();

        let (items, stats) = PageCollector::new(&transport, &credentials)
            .with_max_pages(2)
            .collect_with_stats("p1", numbers)
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2]);
        assert!(!stats.truncated);
    }

    #[tokio::test]
    async fn test_zero_cap_fetches_nothing() {
        let transport = StubTransport::new().page("p1", 200, None, "[1]");
        let credentials = pool();

        let items = PageCollector::new(&transport, &credentials)
            .with_max_pages(0)
            .collect("p1", numbers)
            .await
            .unwrap();

        assert!(items.is_empty());
        assert!(transport.requested_urls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_middle_page_discards_everything() {
        let transport = StubTransport::new()
            .page("p1", 200, Some("p2"), "[1, 2]")
            .page("p2", 500, Some("p3"), r#"{"message":"boom"}"#)
            .page("p3", 200, None, "[3]");
        let credentials = pool();

        let result = PageCollector::new(&transport, &credentials)
            .collect("p1", numbers)
            .await;

        match result {
            Err(GitHubError::UnexpectedStatus { status, url }) => {
                assert_eq!(status, 500);
                assert_eq!(url, "p2");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
        assert_eq!(transport.requested_urls(), vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_non_200_success_status_is_rejected() {
        let transport = StubTransport::new().page("p1", 204, None, "[]");
        let credentials = pool();

        let result = PageCollector::new(&transport, &credentials)
            .collect("p1", numbers)
            .await;

        assert!(matches!(
            result,
            Err(GitHubError::UnexpectedStatus { status: 204, .. })
        ));
    }

    #[tokio::test]
    async fn test_decode_failure_fails_collection() {
        let transport = StubTransport::new()
            .page("p1", 200, Some("p2"), "[1]")
            .page("p2", 200, None, r#"["not a number"]"#);
        let credentials = pool();

        let result = PageCollector::new(&transport, &credentials)
            .collect("p1", numbers)
            .await;

        assert!(matches!(result, Err(GitHubError::Decode(_))));
    }

    #[tokio::test]
    async fn test_link_without_next_stops_after_current_page() {
        let transport = StubTransport::new()
            .raw_link_page("p1", r#"<p0>; rel="prev", garbage; <p9>; rel="last""#, "[1, 2]")
            .page("p9", 200, None, "[9]");
        let credentials = pool();

        let (items, stats) = PageCollector::new(&transport, &credentials)
            .collect_with_stats("p1", numbers)
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2]);
        assert_eq!(stats.pages_fetched, 1);
        assert!(!stats.truncated);
    }

    #[tokio::test]
    async fn test_every_request_uses_pooled_token() {
        let transport = StubTransport::new().page("loop", 200, Some("loop"), "[]");
        let credentials = pool();

        PageCollector::new(&transport, &credentials)
            .with_max_pages(10)
            .collect("loop", numbers)
            .await
            .unwrap();

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 10);
        assert!(requests.iter().all(|(_, token)| credentials.contains(token)));
    }
}
