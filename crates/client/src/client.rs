//! HTTP client for the YNAB API.

use crate::config::Config;
use crate::error::{YnabError, YnabResult};
use reqwest::header;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Successful YNAB responses wrap the payload as `{"data": {...}}`.
#[derive(Debug, Deserialize)]
struct DataEnvelope {
    data: Value,
}

/// Read-only client for the YNAB API.
///
/// Each method issues exactly one GET request with the configured bearer
/// token attached; responses are returned as opaque JSON with the `data`
/// envelope unwrapped. No retries, no caching: a 429 or a transient failure
/// is surfaced to the caller, who decides whether to retry.
#[derive(Debug, Clone)]
pub struct YnabClient {
    config: Config,
    http: reqwest::Client,
}

impl YnabClient {
    /// Create a client from configuration.
    pub fn new(config: Config) -> YnabResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.access_token))
                .map_err(|_| YnabError::Config("invalid access token format".to_string()))?,
        );

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { config, http })
    }

    /// Issue a GET request and unwrap the `data` envelope.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> YnabResult<Value> {
        // Paths are built by substitution of opaque API-issued identifiers;
        // the base URL is prefixed verbatim.
        let url = format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        );
        debug!(url = %url, "GET request");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(YnabError::from_response(status, &body));
        }

        let body = response.text().await?;
        let envelope: DataEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }

    // Budget endpoints

    /// List all budgets.
    pub async fn budgets(&self) -> YnabResult<Value> {
        self.get("/budgets", &[]).await
    }

    /// Get a single budget. `budget_id` may be the literal `last-used`.
    pub async fn budget(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}", budget_id), &[]).await
    }

    /// Get budget settings, including the currency format.
    pub async fn budget_settings(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/settings", budget_id), &[])
            .await
    }

    // Account endpoints

    /// List accounts for a budget.
    pub async fn accounts(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/accounts", budget_id), &[])
            .await
    }

    /// Get a single account.
    pub async fn account(&self, budget_id: &str, account_id: &str) -> YnabResult<Value> {
        self.get(
            &format!("/budgets/{}/accounts/{}", budget_id, account_id),
            &[],
        )
        .await
    }

    // Category endpoints

    /// List category groups with their categories.
    pub async fn categories(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/categories", budget_id), &[])
            .await
    }

    /// Get a single category.
    pub async fn category(&self, budget_id: &str, category_id: &str) -> YnabResult<Value> {
        self.get(
            &format!("/budgets/{}/categories/{}", budget_id, category_id),
            &[],
        )
        .await
    }

    // Payee endpoints

    /// List payees for a budget.
    pub async fn payees(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/payees", budget_id), &[])
            .await
    }

    /// Get a single payee.
    pub async fn payee(&self, budget_id: &str, payee_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/payees/{}", budget_id, payee_id), &[])
            .await
    }

    // Transaction endpoints

    /// List transactions, optionally filtered by date and type
    /// (`uncategorized` or `unapproved`).
    pub async fn transactions(
        &self,
        budget_id: &str,
        since_date: Option<&str>,
        type_filter: Option<&str>,
    ) -> YnabResult<Value> {
        let mut query = Vec::new();
        if let Some(since_date) = since_date {
            query.push(("since_date", since_date));
        }
        if let Some(type_filter) = type_filter {
            query.push(("type", type_filter));
        }
        self.get(&format!("/budgets/{}/transactions", budget_id), &query)
            .await
    }

    /// Get a single transaction.
    pub async fn transaction(&self, budget_id: &str, transaction_id: &str) -> YnabResult<Value> {
        self.get(
            &format!("/budgets/{}/transactions/{}", budget_id, transaction_id),
            &[],
        )
        .await
    }

    /// List transactions for an account.
    pub async fn account_transactions(
        &self,
        budget_id: &str,
        account_id: &str,
        since_date: Option<&str>,
    ) -> YnabResult<Value> {
        let query = since_date.map(|d| ("since_date", d));
        self.get(
            &format!("/budgets/{}/accounts/{}/transactions", budget_id, account_id),
            query.as_slice(),
        )
        .await
    }

    /// List transactions for a category.
    pub async fn category_transactions(
        &self,
        budget_id: &str,
        category_id: &str,
        since_date: Option<&str>,
    ) -> YnabResult<Value> {
        let query = since_date.map(|d| ("since_date", d));
        self.get(
            &format!(
                "/budgets/{}/categories/{}/transactions",
                budget_id, category_id
            ),
            query.as_slice(),
        )
        .await
    }

    /// List transactions for a payee.
    pub async fn payee_transactions(
        &self,
        budget_id: &str,
        payee_id: &str,
        since_date: Option<&str>,
    ) -> YnabResult<Value> {
        let query = since_date.map(|d| ("since_date", d));
        self.get(
            &format!("/budgets/{}/payees/{}/transactions", budget_id, payee_id),
            query.as_slice(),
        )
        .await
    }

    // Month endpoints

    /// List budget months.
    pub async fn months(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/months", budget_id), &[])
            .await
    }

    /// Get a single budget month. `month` is `YYYY-MM-DD`; the day is
    /// ignored upstream.
    pub async fn month(&self, budget_id: &str, month: &str) -> YnabResult<Value> {
        self.get(&format!("/budgets/{}/months/{}", budget_id, month), &[])
            .await
    }

    // Scheduled transaction endpoints

    /// List scheduled transactions.
    pub async fn scheduled_transactions(&self, budget_id: &str) -> YnabResult<Value> {
        self.get(
            &format!("/budgets/{}/scheduled_transactions", budget_id),
            &[],
        )
        .await
    }

    /// Get a single scheduled transaction.
    pub async fn scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_transaction_id: &str,
    ) -> YnabResult<Value> {
        self.get(
            &format!(
                "/budgets/{}/scheduled_transactions/{}",
                budget_id, scheduled_transaction_id
            ),
            &[],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        Config {
            access_token: "test-token".to_string(),
            base_url: Url::parse(base_url).unwrap(),
            timeout: Duration::from_secs(5),
        }
    }

    fn test_client(server: &MockServer) -> YnabClient {
        YnabClient::new(test_config(&server.uri())).unwrap()
    }

    #[tokio::test]
    async fn budgets_unwraps_data_envelope() {
        let server = MockServer::start().await;
        let budgets = json!([
            {"id": "budget-1", "name": "My Budget"},
            {"id": "budget-2", "name": "Another Budget"},
        ]);

        Mock::given(method("GET"))
            .and(path("/budgets"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"budgets": budgets}})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).budgets().await.unwrap();
        assert_eq!(result["budgets"], budgets);
    }

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server).budgets().await.unwrap();
    }

    #[tokio::test]
    async fn budget_accepts_last_used_sentinel() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/last-used"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"budget": {"id": "budget-1"}}})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server).budget("last-used").await.unwrap();
        assert_eq!(result["budget"]["id"], "budget-1");
    }

    #[tokio::test]
    async fn http_401_surfaces_status_and_detail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"id": "401", "name": "unauthorized", "detail": "Unauthorized"}
            })))
            .mount(&server)
            .await;

        let err = test_client(&server).budgets().await.unwrap_err();
        match err {
            YnabError::Api { status, detail } => {
                assert_eq!(status, 401);
                assert_eq!(detail, "Unauthorized");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_429_passes_through_untouched() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/budget-1/accounts"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"id": "429", "name": "too_many_requests", "detail": "Rate limited"}
            })))
            // Single-shot by design: a rate limit must not trigger a retry.
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server).accounts("budget-1").await.unwrap_err();
        assert_eq!(err.status(), Some(429));
    }

    #[tokio::test]
    async fn http_500_with_plain_body_keeps_raw_detail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = test_client(&server).budgets().await.unwrap_err();
        match err {
            YnabError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, "Internal Server Error");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_failure_has_no_status() {
        // Nothing is listening on this port.
        let config = test_config("http://127.0.0.1:1");
        let client = YnabClient::new(config).unwrap();

        let err = client.budgets().await.unwrap_err();
        assert!(matches!(err, YnabError::Transport(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn transactions_forwards_query_filters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/budget-1/transactions"))
            .and(query_param("since_date", "2026-01-01"))
            .and(query_param("type", "unapproved"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"transactions": []}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        test_client(&server)
            .transactions("budget-1", Some("2026-01-01"), Some("unapproved"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn transactions_without_filters_sends_no_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/budget-1/transactions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"transactions": []}})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server)
            .transactions("budget-1", None, None)
            .await
            .unwrap();
        assert_eq!(result["transactions"], json!([]));
    }

    #[tokio::test]
    async fn account_transactions_path_and_filter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/budget-1/accounts/acct-1/transactions"))
            .and(query_param("since_date", "2026-02-01"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"transactions": [{"id": "t-1"}]}})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server)
            .account_transactions("budget-1", "acct-1", Some("2026-02-01"))
            .await
            .unwrap();
        assert_eq!(result["transactions"][0]["id"], "t-1");
    }

    #[tokio::test]
    async fn month_path_substitution() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/budget-1/months/2026-08-01"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"month": {"month": "2026-08-01"}}})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server)
            .month("budget-1", "2026-08-01")
            .await
            .unwrap();
        assert_eq!(result["month"]["month"], "2026-08-01");
    }

    #[tokio::test]
    async fn scheduled_transaction_path_substitution() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets/budget-1/scheduled_transactions/st-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"scheduled_transaction": {"id": "st-1"}}})),
            )
            .mount(&server)
            .await;

        let result = test_client(&server)
            .scheduled_transaction("budget-1", "st-1")
            .await
            .unwrap();
        assert_eq!(result["scheduled_transaction"]["id"], "st-1");
    }

    #[tokio::test]
    async fn non_envelope_2xx_body_is_a_json_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/budgets"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = test_client(&server).budgets().await.unwrap_err();
        assert!(matches!(err, YnabError::Json(_)));
    }

    #[tokio::test]
    async fn concurrent_account_reads_do_not_interfere() {
        let server = MockServer::start().await;

        for id in ["acct-1", "acct-2", "acct-3"] {
            Mock::given(method("GET"))
                .and(path(format!("/budgets/budget-1/accounts/{}", id)))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({"data": {"account": {"id": id}}})),
                )
                .mount(&server)
                .await;
        }

        let client = test_client(&server);
        let (a, b, c) = tokio::join!(
            client.account("budget-1", "acct-1"),
            client.account("budget-1", "acct-2"),
            client.account("budget-1", "acct-3"),
        );

        assert_eq!(a.unwrap()["account"]["id"], "acct-1");
        assert_eq!(b.unwrap()["account"]["id"], "acct-2");
        assert_eq!(c.unwrap()["account"]["id"], "acct-3");
    }
}
