//! Behavior-driven tests for call-rate limiting.
//!
//! Time is paused in every test, so waits measured here are exact virtual
//! durations rather than wall-clock sleeps.

use enrichkit_core::{
    ClientConfig, CompanySearchOptions, EmailLookupOptions, EnrichmentClient, EnrichmentError,
    HttpClient, HttpError, HttpRequest, HttpResponse, RateLimiter, RateWindow,
};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Transport that answers from a script and remembers when each call started.
struct TimedHttpClient {
    responses: Mutex<VecDeque<HttpResponse>>,
    started: Mutex<Vec<Instant>>,
}

impl TimedHttpClient {
    fn new(responses: Vec<HttpResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            started: Mutex::new(Vec::new()),
        })
    }

    fn started(&self) -> Vec<Instant> {
        self.started
            .lock()
            .expect("start log should not be poisoned")
            .clone()
    }
}

impl HttpClient for TimedHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.started
            .lock()
            .expect("start log should not be poisoned")
            .push(Instant::now());
        let response = self
            .responses
            .lock()
            .expect("response script should not be poisoned")
            .pop_front()
            .ok_or_else(|| HttpError::other("no scripted response left"));
        Box::pin(async move { response })
    }
}

fn client(limiter: &Arc<RateLimiter>, http: &Arc<TimedHttpClient>) -> EnrichmentClient {
    EnrichmentClient::with_http_client(
        ClientConfig::default().with_api_key("sk_test"),
        Arc::clone(limiter),
        Arc::clone(http) as Arc<dyn HttpClient>,
    )
    .expect("client with api key")
}

fn autocomplete_hit() -> HttpResponse {
    HttpResponse::ok_json(r#"[{"domain":"acme.com","name":"Acme","logo":null}]"#)
}

fn assert_at_least(actual: Duration, expected_secs: u64) {
    assert!(
        actual >= Duration::from_secs(expected_secs),
        "expected at least {expected_secs}s, got {actual:?}"
    );
}

// =============================================================================
// Rolling window
// =============================================================================

#[tokio::test(start_paused = true)]
async fn when_burst_exceeds_capacity_no_window_admits_more_than_capacity() {
    // Given: a limiter allowing three starts per ten seconds
    let limiter = Arc::new(RateLimiter::new(RateWindow::new(3, Duration::from_secs(10))));
    let started = Arc::new(Mutex::new(Vec::new()));
    let origin = Instant::now();

    // When: eight callers arrive at once
    let mut handles = Vec::new();
    for _ in 0..8 {
        let limiter = Arc::clone(&limiter);
        let started = Arc::clone(&started);
        handles.push(tokio::spawn(async move {
            limiter.acquire().await.expect("slot");
            started.lock().expect("start log").push(Instant::now());
        }));
    }
    for handle in handles {
        handle.await.expect("caller completes");
    }

    // Then: any fourth start is at least one window after the first of its group
    let mut started = started.lock().expect("start log").clone();
    started.sort();
    assert_eq!(started.len(), 8);
    for index in 3..started.len() {
        assert_at_least(started[index] - started[index - 3], 10);
    }

    // And: the burst drained in exactly two extra windows
    let last = started[started.len() - 1] - origin;
    assert_at_least(last, 20);
    assert!(last < Duration::from_secs(21), "burst took {last:?}");
    assert_eq!(limiter.admitted(), 8);
}

#[tokio::test(start_paused = true)]
async fn when_calls_are_spread_out_they_are_never_delayed() {
    // Given: two starts per ten seconds
    let limiter = RateLimiter::new(RateWindow::new(2, Duration::from_secs(10)));

    // When: callers arrive every six seconds
    for _ in 0..5 {
        let before = Instant::now();
        limiter.acquire().await.expect("slot");

        // Then: none of them waits
        assert_eq!(before.elapsed(), Duration::ZERO);
        tokio::time::sleep(Duration::from_secs(6)).await;
    }
}

// =============================================================================
// Shared budget across clients
// =============================================================================

#[tokio::test(start_paused = true)]
async fn when_two_clients_share_a_limiter_the_budget_is_global() {
    // Given: one start per five seconds shared by two clients
    let limiter = Arc::new(RateLimiter::new(RateWindow::new(1, Duration::from_secs(5))));
    let first_http = TimedHttpClient::new(vec![autocomplete_hit()]);
    let second_http = TimedHttpClient::new(vec![autocomplete_hit()]);
    let first = client(&limiter, &first_http);
    let second = client(&limiter, &second_http);
    let origin = Instant::now();

    // When: each client makes one call
    first
        .company_autocomplete("Acme")
        .await
        .expect("first client call");
    second
        .company_autocomplete("Acme")
        .await
        .expect("second client call");

    // Then: the second client waited for the first client's window
    assert_eq!(first_http.started()[0] - origin, Duration::ZERO);
    assert_at_least(second_http.started()[0] - origin, 5);
    assert_eq!(limiter.admitted(), 2);
}

#[tokio::test(start_paused = true)]
async fn when_email_lookup_polls_each_attempt_consumes_budget() {
    // Given: two starts per minute and an upstream that queues twice
    let limiter = Arc::new(RateLimiter::new(RateWindow::new(2, Duration::from_secs(60))));
    let http = TimedHttpClient::new(vec![
        HttpResponse::new(202, "{}"),
        HttpResponse::new(202, "{}"),
        HttpResponse::ok_json(r#"{"id":"u_1"}"#),
    ]);
    let client = client(&limiter, &http);
    let origin = Instant::now();

    // When: the lookup polls with a budget of three retries
    let lookup = client
        .email_lookup(&EmailLookupOptions::new("alex@acme.com").with_max_retries(3))
        .await
        .expect("lookup succeeds");

    // Then: the third attempt waited for the rate window, not only the poll delay
    let started = http.started();
    assert_eq!(started.len(), 3);
    assert_at_least(started[1] - origin, 1);
    assert_at_least(started[2] - origin, 60);
    assert_eq!(lookup.person().and_then(|p| p.id.as_deref()), Some("u_1"));
}

// =============================================================================
// Shutdown
// =============================================================================

#[tokio::test(start_paused = true)]
async fn when_client_closes_queued_calls_fail_with_shutdown() {
    // Given: a spent budget and a search waiting for the next window
    let limiter = Arc::new(RateLimiter::new(RateWindow::new(1, Duration::from_secs(60))));
    let http = TimedHttpClient::new(vec![autocomplete_hit()]);
    let client = Arc::new(client(&limiter, &http));
    client
        .company_autocomplete("Acme")
        .await
        .expect("first call admitted");

    let waiting = {
        let client = Arc::clone(&client);
        tokio::spawn(async move {
            client
                .company_search(&CompanySearchOptions::new("tech:stripe"))
                .await
        })
    };
    tokio::time::sleep(Duration::from_secs(1)).await;

    // When: the client is closed
    client.close();

    // Then: the waiting call fails without reaching the transport
    let result = waiting.await.expect("task completes");
    assert_eq!(result.expect_err("closed"), EnrichmentError::Shutdown);
    assert_eq!(http.started().len(), 1);

    // And: later best-effort lookups resolve to no data
    assert_eq!(client.name_to_domain("Acme").await, None);
    assert!(limiter.is_closed());
}
