//! Baboom API HTTP client.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::auth::{hash_password, Credentials, Session};
use crate::api::service::{ByteStream, MusicService};
use crate::api::types::*;
use crate::error::{Error, Result};

/// Baboom base URL.
pub const DEFAULT_API_BASE: &str = "https://baboom.com";

/// Maximum characters of a response body echoed into error messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Baboom API client.
///
/// Holds no authentication state: every authenticated call takes the
/// [`Session`] returned by [`BaboomApi::login`].
pub struct BaboomApi {
    client: Client,
    base_url: Url,
}

impl BaboomApi {
    /// Create a new API client for the given base URL.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        // Endpoints are joined as relative paths, so keep any path prefix.
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
        })
    }

    /// Build the URL of an endpoint below the base URL.
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send a request and unwrap the `{ok, data}` envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> Result<T> {
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", what, status);

        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::error!("Auth error response: {}", text);
            return Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status,
                if text.is_empty() {
                    "Authentication failed"
                } else {
                    truncate(&text)
                }
            )));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(Error::Api(format!("{}: rate limited", what)));
        }

        let envelope: ApiEnvelope = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse {}: {} - HTTP {} - Response: {}",
                what,
                e,
                status,
                truncate(&text)
            ))
        })?;

        if !envelope.ok {
            return Err(Error::Api(format!(
                "{} rejected by service: {}",
                what,
                truncate(&text)
            )));
        }

        serde_json::from_value(envelope.data).map_err(|e| {
            Error::Api(format!(
                "Unexpected {} payload: {} - Response: {}",
                what,
                e,
                truncate(&text)
            ))
        })
    }

    /// Log in and return the session for this run.
    ///
    /// The password is hashed before it leaves the process.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = self.endpoint("auth/login")?;
        tracing::debug!("POST {}", url);

        let password = hash_password(&credentials.password);
        let body = LoginRequest {
            email: &credentials.email,
            password: &password,
            remember_me: false,
        };

        let request = self
            .client
            .post(url)
            .header("X-BB-S", "1")
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body);

        let data: LoginData = self.send(request, "login").await.map_err(|e| match e {
            Error::Authentication(_) => e,
            other => Error::Authentication(other.to_string()),
        })?;

        tracing::debug!(
            "Logged in as {}",
            data.user
                .display_name
                .as_deref()
                .or(data.user.email.as_deref())
                .unwrap_or(&credentials.email)
        );

        Session::from_user(&data.user)
    }
}

#[async_trait]
impl MusicService for BaboomApi {
    async fn list_songs(&self, session: &Session, offset: u64, limit: u64) -> Result<SongsPage> {
        let mut url = self.endpoint("api/library/songs")?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string())
            .append_pair("limit", &limit.to_string());
        tracing::debug!("GET {}", url);

        let request = self
            .client
            .get(url)
            .bearer_auth(&session.access_token);

        self.send(request, "song list").await
    }

    async fn hydrate(&self, session: &Session, ids: &[String]) -> Result<Vec<SongRecord>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.endpoint("api/catalogue/playables/hydrate")?;
        url.query_pairs_mut()
            .append_pair("territory", &session.country);
        tracing::debug!("POST {} ({} ids)", url, ids.len());

        let request = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(ids);

        self.send(request, "hydration")
            .await
            .map_err(|e| Error::Hydration(e.to_string()))
    }

    async fn open_stream(
        &self,
        session: &Session,
        url: &str,
        encoding: &str,
    ) -> Result<ByteStream> {
        let mut url = Url::parse(url).map_err(|e| Error::Stream(format!("{}: {}", url, e)))?;
        url.query_pairs_mut()
            .append_pair("tags", encoding)
            .append_pair("access_token", &session.access_token);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Stream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Stream(format!(
                "Failed to open stream: HTTP {}",
                response.status()
            )));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| Error::Stream(e.to_string())));

        Ok(Box::pin(stream))
    }
}

/// Cut a response body down for error messages.
fn truncate(text: &str) -> &str {
    match text.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session() -> Session {
        Session {
            access_token: "tok".into(),
            subscription: "premium".into(),
            country: "PT".into(),
        }
    }

    fn api(server: &MockServer) -> BaboomApi {
        BaboomApi::new(&server.uri(), "baboom-exporter-test").unwrap()
    }

    #[tokio::test]
    async fn test_login_sends_hashed_password() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(header("X-BB-S", "1"))
            .and(body_json(json!({
                "email": "me@example.com",
                "password": "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8",
                "remember_me": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "data": {
                    "user": {
                        "access_token": "abc",
                        "country": "PT",
                        "contexts": {"all": [{"subject": {"subscription": "premium"}}]}
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = api(&server)
            .login(&Credentials::new("me@example.com", "password"))
            .await
            .unwrap();

        assert_eq!(session.access_token, "abc");
        assert_eq!(session.subscription, "premium");
        assert_eq!(session.country, "PT");
    }

    #[tokio::test]
    async fn test_login_rejected_is_authentication_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "error": "bad_credentials"})),
            )
            .mount(&server)
            .await;

        let err = api(&server)
            .login(&Credentials::new("me@example.com", "wrong"))
            .await
            .unwrap_err();

        match err {
            Error::Authentication(msg) => assert!(msg.contains("bad_credentials")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_songs_sends_bearer_and_paging() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/library/songs"))
            .and(query_param("offset", "100"))
            .and(query_param("limit", "100"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "data": {
                    "items": [{"bbid": "a", "title": "One"}],
                    "meta": {"total": 101}
                }
            })))
            .mount(&server)
            .await;

        let page = api(&server).list_songs(&session(), 100, 100).await.unwrap();
        assert_eq!(page.meta.total, 101);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].display_title(), "One");
    }

    #[tokio::test]
    async fn test_list_songs_not_ok_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/library/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
            .mount(&server)
            .await;

        let err = api(&server).list_songs(&session(), 0, 100).await.unwrap_err();
        assert!(matches!(err, Error::Api(_)));
    }

    #[tokio::test]
    async fn test_hydrate_posts_ids_with_territory() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/catalogue/playables/hydrate"))
            .and(query_param("territory", "PT"))
            .and(body_json(json!(["s1"])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "data": [{
                    "bbid": "s1",
                    "availability_details": {"stream": ["premium"]}
                }]
            })))
            .mount(&server)
            .await;

        let songs = api(&server)
            .hydrate(&session(), &["s1".to_string()])
            .await
            .unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].stream_subscriptions(), ["premium"]);
    }

    #[tokio::test]
    async fn test_hydrate_server_error_is_hydration_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/catalogue/playables/hydrate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = api(&server)
            .hydrate(&session(), &["s1".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Hydration(_)));
    }

    #[tokio::test]
    async fn test_open_stream_appends_tags_and_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stream/s1"))
            .and(query_param("tags", "flac"))
            .and(query_param("access_token", "tok"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"audio-bytes".to_vec()))
            .mount(&server)
            .await;

        let url = format!("{}/stream/s1", server.uri());
        let mut stream = api(&server)
            .open_stream(&session(), &url, "flac")
            .await
            .unwrap();

        let mut body = Vec::new();
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(body, b"audio-bytes");
    }

    #[tokio::test]
    async fn test_open_stream_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stream/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/stream/gone", server.uri());
        let result = api(&server).open_stream(&session(), &url, "flac").await;
        assert!(matches!(result, Err(Error::Stream(_))));
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let api = BaboomApi::new("http://localhost:8080/proxy", "ua").unwrap();
        assert_eq!(
            api.endpoint("auth/login").unwrap().as_str(),
            "http://localhost:8080/proxy/auth/login"
        );
    }

    #[test]
    fn test_truncate_long_body() {
        let long = "x".repeat(ERROR_BODY_LIMIT + 20);
        assert_eq!(truncate(&long).len(), ERROR_BODY_LIMIT);
        assert_eq!(truncate("short"), "short");
    }
}
