//! ReqRes HTTP Client

use std::sync::Arc;

use reqwest::{RequestBuilder, StatusCode};

use super::config::ReqResConfig;
use super::error::{GatewayError, GatewayResult};
use super::gateway::IdentityGateway;
use super::model::{AuthToken, ExternalIdentity, LoginBody, SingleUser, UserPage};

/// Header carrying the API key on every call
pub const API_KEY_HEADER: &str = "x-api-key";

/// `reqwest`-backed [`IdentityGateway`]
#[derive(Debug, Clone)]
pub struct ReqResClient {
    http: reqwest::Client,
    config: Arc<ReqResConfig>,
}

impl ReqResClient {
    pub fn new(config: ReqResConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ReqResConfig {
        &self.config
    }

    fn url(&self, path: &str) -> GatewayResult<String> {
        Ok(format!("{}{}", self.config.base_url()?, path))
    }

    fn with_api_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }
}

impl IdentityGateway for ReqResClient {
    fn ensure_configured(&self) -> GatewayResult<()> {
        self.config.base_url().map(|_| ())
    }

    async fn authenticate(&self, email: &str, password: &str) -> GatewayResult<AuthToken> {
        let url = self.url("/login")?;

        let response = self
            .with_api_key(self.http.post(&url))
            .timeout(self.config.auth_timeout)
            .json(&LoginBody { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, timeout = e.is_timeout(), "ReqRes login request failed");
                GatewayError::AuthRejected
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "ReqRes rejected login");
            return Err(GatewayError::AuthRejected);
        }

        response
            .json::<AuthToken>()
            .await
            .map_err(|e| GatewayError::MalformedPayload(e.to_string()))
    }

    async fn list_users(&self, page: u32) -> GatewayResult<Vec<ExternalIdentity>> {
        let url = self.url("/users")?;

        let response = self
            .with_api_key(self.http.get(&url))
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Upstream(format!(
                "GET /users?page={} returned {}",
                page, status
            )));
        }

        let body = response
            .json::<UserPage>()
            .await
            .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

        Ok(body.data)
    }

    async fn get_user_by_id(&self, id: i32) -> GatewayResult<ExternalIdentity> {
        let url = self.url(&format!("/users/{}", id))?;

        let response = self
            .with_api_key(self.http.get(&url))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(user_id = id, error = %e, "ReqRes user lookup failed");
                GatewayError::Upstream(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(id));
        }
        if !status.is_success() {
            tracing::error!(user_id = id, status = status.as_u16(), "ReqRes user lookup failed");
            return Err(GatewayError::Upstream(format!(
                "GET /users/{} returned {}",
                id, status
            )));
        }

        let body = response
            .json::<SingleUser>()
            .await
            .map_err(|e| GatewayError::MalformedPayload(e.to_string()))?;

        body.data
            .ok_or_else(|| GatewayError::MalformedPayload("missing `data` object".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ReqResClient {
        ReqResClient::new(ReqResConfig::new(server.uri(), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn test_authenticate_sends_credentials_and_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("x-api-key", "test-key"))
            .and(body_json(json!({"email": "eve.holt@reqres.in", "password": "cityslicka"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "QpwL5tke4Pnpja7X4"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let token = client
            .authenticate("eve.holt@reqres.in", "cityslicka")
            .await
            .unwrap();

        assert_eq!(token.token, "QpwL5tke4Pnpja7X4");
    }

    #[tokio::test]
    async fn test_authenticate_non_success_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "user not found"})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.authenticate("nobody@x.io", "pw").await.unwrap_err();

        assert!(matches!(err, GatewayError::AuthRejected));
        assert!(!err.to_string().contains("user not found"));
    }

    #[tokio::test]
    async fn test_authenticate_timeout_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"token": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let mut config = ReqResConfig::new(server.uri(), "test-key");
        config.auth_timeout = Duration::from_millis(50);
        let client = ReqResClient::new(config).unwrap();

        let err = client.authenticate("a@b.com", "pw").await.unwrap_err();
        assert!(matches!(err, GatewayError::AuthRejected));
    }

    #[tokio::test]
    async fn test_authenticate_without_token_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.authenticate("a@b.com", "pw").await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_missing_base_url_fails_before_any_request() {
        let client = ReqResClient::new(ReqResConfig::default()).unwrap();

        assert!(matches!(
            client.ensure_configured(),
            Err(GatewayError::Misconfigured("REQRES_URL"))
        ));
        assert!(matches!(
            client.authenticate("a@b.com", "pw").await,
            Err(GatewayError::Misconfigured(_))
        ));
        assert!(matches!(
            client.list_users(1).await,
            Err(GatewayError::Misconfigured(_))
        ));
    }

    #[tokio::test]
    async fn test_list_users_reads_requested_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", "2"))
            .and(header("x-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 2,
                "per_page": 6,
                "total": 12,
                "total_pages": 2,
                "data": [{
                    "id": 7,
                    "email": "michael.lawson@reqres.in",
                    "first_name": "Michael",
                    "last_name": "Lawson",
                    "avatar": "https://reqres.in/img/faces/7-image.jpg"
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let users = client.list_users(2).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 7);
        assert_eq!(users[0].first_name, "Michael");
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/23"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_user_by_id(23).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(23)));
    }

    #[tokio::test]
    async fn test_get_user_by_id_server_error_is_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_user_by_id(2).await.unwrap_err();
        assert!(matches!(err, GatewayError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_get_user_by_id_without_data_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"support": {}})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = client.get_user_by_id(2).await.unwrap_err();
        assert!(matches!(err, GatewayError::MalformedPayload(_)));
    }
}
