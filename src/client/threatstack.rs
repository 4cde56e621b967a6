//! Threat Stack API client implementation

use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde_json::Value;

use super::hawk::{self, HawkCredentials};
use super::models::{
    AddMemberRequest, Agent, Alert, AlertQuery, Ec2Instance, InviteRequest, Member, Rule, Ruleset,
    Vulnerability,
};
use super::pagination::Page;
use super::{ONLINE_AGENT_STATUS, ThreatStackApi};
use crate::error::{ApiError, Error, Result};

/// Threat Stack API base URL
const API_BASE_URL: &str = "https://api.threatstack.com/v2";

/// Minimum spacing between requests, to stay clear of rate limits
const REQUEST_INTERVAL: Duration = Duration::from_millis(90);

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Attempts per request before a transient failure is surfaced
const MAX_ATTEMPTS: u32 = 5;

/// Delay between retry attempts
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

type Pacer = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Threat Stack API client
///
/// Every request is Hawk-signed with the configured credentials and
/// scoped to a single organization via the `ext` header field.
#[derive(Debug)]
pub struct ThreatStackClient {
    http: HttpClient,
    base_url: String,
    credentials: HawkCredentials,
    org_id: String,
    pacer: Pacer,
}

impl ThreatStackClient {
    /// Create a client for one organization.
    pub fn new(
        user_id: String,
        api_key: String,
        org_id: String,
        api_host: Option<String>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .unwrap_or_else(|| API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let pacer = RateLimiter::direct(
            Quota::with_period(REQUEST_INTERVAL).expect("non-zero request interval"),
        );

        Ok(Self {
            http,
            base_url,
            credentials: HawkCredentials {
                id: user_id,
                key: api_key,
            },
            org_id,
            pacer,
        })
    }

    /// Build the full request URL for a path and query parameters.
    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::Other(format!("invalid request URL: {}", e)))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Send a signed request, retrying transient failures.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = self.url(path, query)?;

        let mut attempt = 1;
        loop {
            self.pacer.until_ready().await;

            let auth = hawk::sign_request(&self.credentials, method.as_str(), &url, &self.org_id)?;

            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .header("Authorization", auth)
                .header("Content-Type", "application/json");
            if let Some(body) = body {
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if status.is_server_error() && attempt < MAX_ATTEMPTS {
                        debug!(
                            "Request to {} returned {}, retrying ({}/{})",
                            url, status, attempt, MAX_ATTEMPTS
                        );
                        attempt += 1;
                        tokio::time::sleep(RETRY_BACKOFF).await;
                        continue;
                    }
                    return Err(Self::status_error(response).await);
                }
                Err(err) => {
                    if attempt < MAX_ATTEMPTS {
                        debug!(
                            "Request to {} failed ({}), retrying ({}/{})",
                            url, err, attempt, MAX_ATTEMPTS
                        );
                        attempt += 1;
                        tokio::time::sleep(RETRY_BACKOFF).await;
                        continue;
                    }
                    return Err(ApiError::from(err).into());
                }
            }
        }
    }

    /// Map a non-success response to an error.
    async fn status_error(response: Response) -> Error {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized.into(),
            StatusCode::FORBIDDEN => ApiError::Forbidden.into(),
            StatusCode::NOT_FOUND => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                ApiError::NotFound(msg).into()
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                ApiError::RateLimit(Duration::from_secs(retry_after)).into()
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                ApiError::BadRequest(msg).into()
            }
            status if status.is_server_error() => {
                let msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                ApiError::ServerError(msg).into()
            }
            _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)).into(),
        }
    }

    /// GET a response body as JSON.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let response = self.send(Method::GET, path, query, None).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }

    /// Fetch one page of a token-paginated collection.
    async fn get_page<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        collection: &str,
        token: Option<&str>,
    ) -> Result<Page<T>> {
        let mut query = query.to_vec();
        if let Some(token) = token {
            query.push(("token", token.to_string()));
        }

        let body = self.get_json(path, &query).await?;
        Page::from_body(body, collection)
    }
}

#[async_trait]
impl ThreatStackApi for ThreatStackClient {
    async fn list_agents(&self, token: Option<&str>) -> Result<Page<Agent>> {
        self.get_page(
            "agents",
            &[("status", ONLINE_AGENT_STATUS.to_string())],
            "agents",
            token,
        )
        .await
    }

    async fn list_alerts(&self, query: &AlertQuery, token: Option<&str>) -> Result<Page<Alert>> {
        let mut params = vec![
            ("status", query.status.as_str().to_string()),
            ("from", query.from.clone()),
            ("until", query.until.clone()),
        ];
        if let Some(ref rule_id) = query.rule_id {
            params.push(("ruleId", rule_id.clone()));
        }

        self.get_page("alerts", &params, "alerts", token).await
    }

    async fn list_ec2(&self, monitored: bool, token: Option<&str>) -> Result<Page<Ec2Instance>> {
        self.get_page(
            "aws/ec2",
            &[
                ("monitored", monitored.to_string()),
                ("verbose", "true".to_string()),
            ],
            "servers",
            token,
        )
        .await
    }

    async fn list_rulesets(&self, token: Option<&str>) -> Result<Page<Ruleset>> {
        self.get_page("rulesets", &[], "rulesets", token).await
    }

    async fn list_rules(&self, ruleset_id: &str, token: Option<&str>) -> Result<Page<Rule>> {
        self.get_page(
            &format!("rulesets/{}/rules", ruleset_id),
            &[],
            "rules",
            token,
        )
        .await
    }

    async fn list_vulnerabilities(
        &self,
        notices_only: bool,
        token: Option<&str>,
    ) -> Result<Page<Vulnerability>> {
        let mut params = vec![("status", "active".to_string())];
        if notices_only {
            params.push(("hasSecurityNotices", "true".to_string()));
        }

        self.get_page("vulnerabilities", &params, "vulnerabilities", token)
            .await
    }

    async fn list_members(&self, token: Option<&str>) -> Result<Page<Member>> {
        self.get_page("organizations/members", &[], "members", token)
            .await
    }

    async fn invite_member(&self, request: &InviteRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.send(Method::POST, "organizations/invites", &[], Some(&body))
            .await?;
        Ok(())
    }

    async fn add_member(&self, request: &AddMemberRequest) -> Result<()> {
        let body = serde_json::to_value(request)?;
        self.send(Method::POST, "organizations/members", &[], Some(&body))
            .await?;
        Ok(())
    }

    async fn remove_member(&self, member_id: &str) -> Result<()> {
        self.send(
            Method::DELETE,
            &format!("organizations/members/{}", member_id),
            &[],
            None,
        )
        .await?;
        Ok(())
    }
}
