//! Header logo loading.
//!
//! The form's header shows the company logo, fetched from a remote URL on a
//! best-effort basis: a few attempts with a pause between them and a
//! timeout on each. Outcomes are cached per URL for the life of the
//! process, failures included, and concurrent first requests share one
//! fetch. When the logo cannot be had the header falls back to a text
//! heading. None of this affects the calculation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::{CalculatorError, CalculatorResult};

/// The company logo shown above the form.
pub const DEFAULT_LOGO_URL: &str = "https://i.ibb.co/1YxH9ZSC/Offical-Logo-June-2024.jpg";

/// Heading shown in place of the logo when it cannot be fetched.
pub const FALLBACK_HEADING: &str = "Shift Summary Calculator";

/// How hard to try before giving up on a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Pause between consecutive attempts.
    pub backoff: Duration,
    /// Time limit for each attempt.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }
}

/// A fetched image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// The `Content-Type` the server reported, if any.
    pub content_type: Option<String>,
    /// The image bytes.
    pub bytes: Vec<u8>,
}

/// What to show at the top of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// The logo image.
    Logo(Arc<LogoImage>),
    /// A text heading, used when the logo is unavailable.
    Heading(&'static str),
}

/// Why a URL's attempts ran out, kept so later callers see the same error.
#[derive(Debug, Clone)]
struct LogoFailure {
    attempts: u32,
    message: String,
}

type FetchOutcome = Result<Arc<LogoImage>, LogoFailure>;

/// Fetches logos with retry and caches the outcome per URL.
#[derive(Debug)]
pub struct LogoLoader {
    client: reqwest::Client,
    policy: RetryPolicy,
    cache: Mutex<HashMap<String, Arc<OnceCell<FetchOutcome>>>>,
}

impl LogoLoader {
    /// Creates a loader with an empty cache.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            policy,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the loader's retry policy.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Returns the logo at `url`, fetching it on first use.
    ///
    /// Both outcomes are cached: once a URL has been fetched or has
    /// exhausted its attempts, later calls do not touch the network and a
    /// failure comes back as the same `LogoUnavailable` error. Concurrent
    /// first calls share a single fetch.
    pub async fn fetch_cached(&self, url: &str) -> CalculatorResult<Arc<LogoImage>> {
        let cell = self.cell(url);
        if cell.initialized() {
            debug!(url, "Logo cache hit");
        }

        let outcome = cell
            .get_or_init(|| async {
                let outcome = self.retry(url).await.map(Arc::new);
                if let Err(failure) = &outcome {
                    warn!(
                        url,
                        attempts = failure.attempts,
                        error = %failure.message,
                        "Falling back to text heading"
                    );
                }
                outcome
            })
            .await;

        outcome.clone().map_err(|failure| CalculatorError::LogoUnavailable {
            url: url.to_string(),
            attempts: failure.attempts,
            message: failure.message,
        })
    }

    /// Returns the logo at `url` if it could be fetched. See [`fetch_cached`](Self::fetch_cached).
    pub async fn load(&self, url: &str) -> Option<Arc<LogoImage>> {
        self.fetch_cached(url).await.ok()
    }

    /// Returns the header to render: the logo if available, else the heading.
    pub async fn header(&self, url: &str) -> Header {
        match self.load(url).await {
            Some(image) => Header::Logo(image),
            None => Header::Heading(FALLBACK_HEADING),
        }
    }

    /// Fetches `url`, retrying per the policy. Does not use the cache.
    pub async fn fetch_with_retry(&self, url: &str) -> CalculatorResult<LogoImage> {
        self.retry(url)
            .await
            .map_err(|failure| CalculatorError::LogoUnavailable {
                url: url.to_string(),
                attempts: failure.attempts,
                message: failure.message,
            })
    }

    async fn retry(&self, url: &str) -> Result<LogoImage, LogoFailure> {
        let attempts = self.policy.max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            match self.fetch_once(url).await {
                Ok(image) => {
                    info!(url, attempt, bytes = image.bytes.len(), "Fetched logo");
                    return Ok(image);
                }
                Err(err) => {
                    warn!(url, attempt, error = %err, "Logo fetch attempt failed");
                    last_error = err.to_string();
                    if attempt < attempts {
                        tokio::time::sleep(self.policy.backoff).await;
                    }
                }
            }
        }

        Err(LogoFailure {
            attempts,
            message: last_error,
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<LogoImage, reqwest::Error> {
        let separator = if url.contains('?') { '&' } else { '?' };
        let busted = format!("{}{}cache={}", url, separator, Utc::now().timestamp_millis());

        let response = self
            .client
            .get(busted)
            .header(USER_AGENT, "Mozilla/5.0")
            .header(ACCEPT, "image/webp,*/*")
            .timeout(self.policy.timeout)
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();

        Ok(LogoImage {
            content_type,
            bytes,
        })
    }

    /// The cache slot for `url`. The lock is held only to find or insert it.
    fn cell(&self, url: &str) -> Arc<OnceCell<FetchOutcome>> {
        // A poisoned cache only ever holds complete entries.
        let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        cache.entry(url.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        extract::RawQuery,
        http::{HeaderMap, StatusCode, header},
        routing::get,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

    fn fast_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            backoff: Duration::from_millis(10),
            timeout: Duration::from_secs(2),
        }
    }

    /// Serves a logo that fails with 503 for the first `failures` requests.
    async fn spawn_logo_server(failures: usize) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        let app = Router::new().route(
            "/logo.jpg",
            get(move || {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst);
                    if n < failures {
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            [(header::CONTENT_TYPE, "text/plain")],
                            Vec::new(),
                        )
                    } else {
                        (
                            StatusCode::OK,
                            [(header::CONTENT_TYPE, "image/jpeg")],
                            JPEG_MAGIC.to_vec(),
                        )
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/logo.jpg", addr), hits)
    }

    #[tokio::test]
    async fn test_fetch_succeeds_after_transient_failures() {
        let (url, hits) = spawn_logo_server(2).await;
        let loader = LogoLoader::new(fast_policy());

        let image = loader.fetch_with_retry(&url).await.unwrap();

        assert_eq!(image.bytes, JPEG_MAGIC.to_vec());
        assert_eq!(image.content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_max_attempts() {
        let (url, hits) = spawn_logo_server(usize::MAX).await;
        let loader = LogoLoader::new(fast_policy());

        match loader.fetch_with_retry(&url).await {
            Err(CalculatorError::LogoUnavailable {
                url: failed_url,
                attempts,
                ..
            }) => {
                assert_eq!(failed_url, url);
                assert_eq!(attempts, 3);
            }
            other => panic!("Expected LogoUnavailable, got {:?}", other),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_load_caches_success() {
        let (url, hits) = spawn_logo_server(0).await;
        let loader = LogoLoader::new(fast_policy());

        let first = loader.load(&url).await.unwrap();
        let second = loader.load(&url).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_caches_exhaustion() {
        let (url, hits) = spawn_logo_server(usize::MAX).await;
        let loader = LogoLoader::new(fast_policy());

        assert!(loader.load(&url).await.is_none());
        assert!(loader.load(&url).await.is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_cached_failure_keeps_error() {
        let (url, hits) = spawn_logo_server(usize::MAX).await;
        let loader = LogoLoader::new(fast_policy());

        for _ in 0..2 {
            match loader.fetch_cached(&url).await {
                Err(CalculatorError::LogoUnavailable {
                    url: failed_url,
                    attempts,
                    message,
                }) => {
                    assert_eq!(failed_url, url);
                    assert_eq!(attempts, 3);
                    assert!(message.contains("503"), "unexpected message: {}", message);
                }
                other => panic!("Expected LogoUnavailable, got {:?}", other),
            }
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_fetch() {
        let (url, hits) = spawn_logo_server(0).await;
        let loader = LogoLoader::new(fast_policy());

        let (first, second) = tokio::join!(loader.load(&url), loader.load(&url));

        assert_eq!(first.unwrap(), second.unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_retry_loop() {
        let (url, hits) = spawn_logo_server(usize::MAX).await;
        let loader = LogoLoader::new(fast_policy());

        let (first, second) = tokio::join!(loader.load(&url), loader.load(&url));

        assert!(first.is_none());
        assert!(second.is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_hanging_server_times_out_each_attempt() {
        let app = Router::new().route(
            "/logo.jpg",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                JPEG_MAGIC.to_vec()
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let loader = LogoLoader::new(RetryPolicy {
            max_attempts: 2,
            backoff: Duration::from_millis(10),
            timeout: Duration::from_millis(200),
        });
        let started = Instant::now();
        let result = loader
            .fetch_with_retry(&format!("http://{}/logo.jpg", addr))
            .await;
        let elapsed = started.elapsed();

        assert!(matches!(
            result,
            Err(CalculatorError::LogoUnavailable { attempts: 2, .. })
        ));
        assert!(elapsed >= Duration::from_millis(400), "took {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(5), "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_backoff_only_between_attempts() {
        let (url, hits) = spawn_logo_server(usize::MAX).await;
        let backoff = Duration::from_millis(300);
        let loader = LogoLoader::new(RetryPolicy {
            max_attempts: 3,
            backoff,
            timeout: Duration::from_secs(2),
        });

        let started = Instant::now();
        assert!(loader.fetch_with_retry(&url).await.is_err());
        let elapsed = started.elapsed();

        // Two pauses for three attempts.
        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert!(elapsed >= backoff * 2, "took {:?}", elapsed);
        assert!(elapsed < backoff * 3, "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_header_falls_back_to_heading() {
        let (url, _) = spawn_logo_server(usize::MAX).await;
        let loader = LogoLoader::new(fast_policy());

        assert_eq!(loader.header(&url).await, Header::Heading(FALLBACK_HEADING));
    }

    #[tokio::test]
    async fn test_header_shows_logo() {
        let (url, _) = spawn_logo_server(0).await;
        let loader = LogoLoader::new(fast_policy());

        match loader.header(&url).await {
            Header::Logo(image) => assert_eq!(image.bytes, JPEG_MAGIC.to_vec()),
            other => panic!("Expected logo, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_carries_cache_buster_and_headers() {
        let seen: Arc<Mutex<Option<(Option<String>, Option<String>, Option<String>)>>> =
            Arc::new(Mutex::new(None));
        let recorder = seen.clone();

        let app = Router::new().route(
            "/logo.jpg",
            get(move |RawQuery(query): RawQuery, headers: HeaderMap| {
                let recorder = recorder.clone();
                async move {
                    let header_value = |name: header::HeaderName| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    *recorder.lock().unwrap() = Some((
                        query,
                        header_value(header::USER_AGENT),
                        header_value(header::ACCEPT),
                    ));
                    JPEG_MAGIC.to_vec()
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let loader = LogoLoader::new(fast_policy());
        loader
            .fetch_with_retry(&format!("http://{}/logo.jpg", addr))
            .await
            .unwrap();

        let (query, user_agent, accept) = seen.lock().unwrap().clone().unwrap();
        assert!(query.unwrap().starts_with("cache="));
        assert_eq!(user_agent.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(accept.as_deref(), Some("image/webp,*/*"));
    }

    #[tokio::test]
    async fn test_unreachable_host_exhausts_attempts() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let loader = LogoLoader::new(fast_policy());
        let result = loader
            .fetch_with_retry(&format!("http://{}/logo.jpg", addr))
            .await;

        assert!(matches!(
            result,
            Err(CalculatorError::LogoUnavailable { attempts: 3, .. })
        ));
    }
}
