//! A custom [`Client`](reqwest::Client) used for making requests to the Yandex Music API
//!
//! Every request is resolved against the versioned API base url and carries the
//! user's OAuth token. Decoding is strict about shape but ignores unknown fields.

use log::debug;
use reqwest::{header, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::utils;

/// Longest excerpt of a response body kept in an error
const MAX_BODY_EXCERPT: usize = 2000;

/// A custom [`Client`](reqwest::Client), with a base url and headers set during creation.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The API base url, always ending in `/`
    base_url: Url,
    /// Default headers sent with every request
    headers: header::HeaderMap,
    /// The user the token belongs to
    user_id: u64,
    /// The resulting custom client
    client: reqwest::Client,
}

/// Transport-level details of a response, kept alongside the decoded body
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: header::HeaderMap,
    pub url: Url,
}

/// A decoded response body together with the raw response it came from
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub raw: RawResponse,
}

impl<T> ApiResponse<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Form fields for `POST` bodies
pub type Form<'a> = &'a [(&'a str, &'a str)];

impl HttpClient {
    /// Creates a new custom [`Client`](reqwest::Client)
    ///
    /// Custom headers and a base url are set during creation
    pub fn new(config: &Config) -> Result<Self> {
        debug!("Creating HTTP client...");

        let mut base_url = config.get_base_url().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.append(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let token = config.get_token();
        let mut auth = header::HeaderValue::from_str(&format!("OAuth {}", token.as_ref()))
            .map_err(|_| Error::Config("token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);
        headers.append(header::AUTHORIZATION, auth);

        let builder = reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .zstd(true)
            .deflate(true)
            .user_agent(concat!("yamusic/", env!("CARGO_PKG_VERSION")));
        let builder = match config.get_timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder.build().map_err(Error::Build)?;

        Ok(Self {
            base_url,
            headers,
            user_id: config.get_user_id(),
            client,
        })
    }

    /// The id of the user the client is authenticated as
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a request for `path`, relative to the base url
    ///
    /// `path` may carry an already-encoded query string. When `form` is given it
    /// becomes an `application/x-www-form-urlencoded` body.
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        form: Option<Form<'_>>,
    ) -> Result<reqwest::Request> {
        let url = self.build_final_url(path)?;

        let req = self
            .client
            .request(method, url)
            .headers(self.headers.clone());
        let req = match form {
            Some(form) => req.form(form),
            None => req,
        };

        req.build().map_err(Error::Build)
    }

    /// Sends `request` and decodes the JSON body into `T`
    pub async fn execute<T>(&self, request: reqwest::Request) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        let method = request.method().clone();
        let url = request.url().to_string();

        let resp = self
            .client
            .execute(request)
            .await
            .map_err(|source| Error::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
                raw: None,
            })?;

        let raw = RawResponse {
            status: resp.status(),
            headers: resp.headers().clone(),
            url: resp.url().clone(),
        };
        debug!("{method} {url} -> {}", raw.status);

        let contents = match resp.text().await {
            Ok(contents) => contents,
            Err(source) => {
                return Err(Error::Transport {
                    method,
                    url,
                    source,
                    raw: Some(Box::new(raw)),
                })
            }
        };

        if !raw.status.is_success() {
            return Err(Error::Status {
                status: raw.status,
                message: error_message(&contents),
                raw: Box::new(raw),
            });
        }

        match serde_json::from_str(&contents) {
            Ok(data) => Ok(ApiResponse { data, raw }),
            Err(source) => Err(Error::Decode {
                source,
                body: utils::truncate_string(&contents, MAX_BODY_EXCERPT),
                raw: Box::new(raw),
            }),
        }
    }

    /// Constructs the final URL passed to the respective request
    fn build_final_url(&self, path: &str) -> Result<Url> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;

        debug!("FINAL URL: {url}");

        Ok(url)
    }
}

/// Extracts the service's error description from a failed response body
fn error_message(contents: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        name: String,
        #[serde(default)]
        message: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(contents) {
        Ok(ErrorBody {
            error: ErrorDetail {
                name,
                message: Some(message),
            },
        }) => format!("{name}: {message}"),
        Ok(ErrorBody { error }) => error.name,
        Err(_) if contents.is_empty() => "empty response body".to_string(),
        Err(_) => utils::truncate_string(contents, MAX_BODY_EXCERPT),
    }
}

#[cfg(test)]
mod http_client_tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::ConfigBuilder;
    use crate::types::Token;

    fn client(base_url: &str) -> HttpClient {
        let config = ConfigBuilder::default()
            .token(Token::try_new("test-token").unwrap())
            .user_id(42_u64)
            .base_url(base_url.to_string())
            .build()
            .unwrap();
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = client("https://api.example.com/v2");
        assert_eq!("https://api.example.com/v2/", client.base_url().as_str());
    }

    #[test]
    fn test_new_request_joins_path() {
        let client = client("https://api.example.com/v2/");
        let req = client
            .new_request(Method::GET, "users/42/playlists/list", None)
            .unwrap();

        assert_eq!(
            "https://api.example.com/v2/users/42/playlists/list",
            req.url().as_str()
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn test_new_request_sets_default_headers() {
        let client = client("https://api.example.com/");
        let req = client
            .new_request(Method::GET, "users/42/playlists/list", None)
            .unwrap();

        assert_eq!("OAuth test-token", req.headers()[header::AUTHORIZATION]);
        assert_eq!("application/json", req.headers()[header::ACCEPT]);
    }

    #[test]
    fn test_new_request_with_form() {
        let client = client("https://api.example.com/");
        let req = client
            .new_request(
                Method::POST,
                "users/42/playlists/5/name",
                Some(&[("value", "New Name")]),
            )
            .unwrap();

        assert_eq!(Method::POST, *req.method());
        assert_eq!(
            "application/x-www-form-urlencoded",
            req.headers()[header::CONTENT_TYPE]
        );
        let body = req.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(b"value=New+Name", body);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ConfigBuilder::default()
            .token(Token::try_new("test-token").unwrap())
            .user_id(42_u64)
            .base_url("not a url".to_string())
            .build()
            .unwrap();

        assert!(matches!(HttpClient::new(&config), Err(Error::Url(_))));
    }

    #[test]
    fn test_error_message_from_service_body() {
        let body = r#"{"invocationInfo":{"hostname":"h","req-id":"r","exec-duration-millis":"0"},"error":{"name":"playlist-not-found","message":"Playlist not found"}}"#;
        assert_eq!("playlist-not-found: Playlist not found", error_message(body));

        let body = r#"{"error":{"name":"session-expired"}}"#;
        assert_eq!("session-expired", error_message(body));
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!("empty response body", error_message(""));
        assert_eq!("Bad Gateway", error_message("Bad Gateway"));
    }
}
