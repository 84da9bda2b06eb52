use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::{
    foundation::error::{AsthesisError, AsthesisResult},
    proxy::figma::{self, ProxyRejection},
};

/// How long successful upstream responses are served from memory.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime settings for the Figma proxy.
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    /// Listen address, e.g. `127.0.0.1:8787`.
    pub bind_addr: String,
    /// Upstream API base; overridable so tests can point at a local fake.
    pub upstream_base: String,
    /// Server-held bearer token, if configured.
    pub access_token: Option<String>,
    /// TTL for cached successful responses.
    pub cache_ttl: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8787".to_owned(),
            upstream_base: "https://api.figma.com".to_owned(),
            access_token: None,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl ProxyConfig {
    /// Read settings from the environment: `FIGMA_ACCESS_TOKEN` for the
    /// server-held token, `ASTHESIS_BIND` for the listen address.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(token) = std::env::var("FIGMA_ACCESS_TOKEN")
            && !token.is_empty()
        {
            cfg.access_token = Some(token);
        }
        if let Ok(bind) = std::env::var("ASTHESIS_BIND")
            && !bind.is_empty()
        {
            cfg.bind_addr = bind;
        }
        cfg
    }
}

/// A reply ready to be written to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: String,
}

impl ProxyResponse {
    fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, error: &str, details: Option<&str>) -> Self {
        let body = match details {
            Some(details) => serde_json::json!({ "error": error, "details": details }),
            None => serde_json::json!({ "error": error }),
        };
        Self {
            status,
            body: body.to_string(),
        }
    }
}

struct CacheEntry {
    stored_at: Instant,
    body: String,
}

/// Server-side proxy in front of the Figma REST API.
///
/// Exists so the browser never needs the access token (and never hits
/// Figma's CORS policy): the page calls `GET /api/figma` and the proxy
/// forwards with the server-held `X-Figma-Token`, passing the upstream
/// JSON through verbatim. Off the animation hot path entirely.
pub struct FigmaProxy {
    config: ProxyConfig,
    agent: ureq::Agent,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl FigmaProxy {
    /// Build a proxy from settings.
    pub fn new(config: ProxyConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(UPSTREAM_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            config,
            agent,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The active settings.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Route one request URL (path plus query) to a reply.
    pub fn handle(&self, url: &str) -> ProxyResponse {
        let (path, query) = match url.split_once('?') {
            Some((p, q)) => (p, q),
            None => (url, ""),
        };
        match path {
            "/api/figma" => self.handle_figma(query),
            _ => ProxyResponse::error(404, "not found", None),
        }
    }

    fn handle_figma(&self, raw_query: &str) -> ProxyResponse {
        let query = figma::parse_query(raw_query);

        // Rejection order: fileId, then token, then nodeIds.
        if query.file_id.as_deref().is_none_or(str::is_empty) {
            return reject(ProxyRejection::MissingFileId);
        }
        let Some(token) = query.resolve_token(self.config.access_token.as_deref()) else {
            return reject(ProxyRejection::MissingAccessToken);
        };
        let url = match figma::upstream_url(&self.config.upstream_base, &query) {
            Ok(url) => url,
            Err(rejection) => return reject(rejection),
        };

        if let Some(cached) = self.cached(&url) {
            tracing::debug!(%url, "serving cached upstream response");
            return ProxyResponse::ok(cached);
        }

        match self.fetch_upstream(&url, &token) {
            Ok(response) => {
                if response.status == 200 {
                    self.store(&url, &response.body);
                }
                response
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "upstream fetch failed");
                ProxyResponse::error(
                    500,
                    "Failed to fetch from Figma API",
                    Some(&err.to_string()),
                )
            }
        }
    }

    fn fetch_upstream(&self, url: &str, token: &str) -> Result<ProxyResponse, ureq::Error> {
        let response = self
            .agent
            .get(url)
            .header("X-Figma-Token", token)
            .call()?;
        let status = response.status();
        let body = response.into_body().read_to_string()?;
        if status.is_success() {
            Ok(ProxyResponse::ok(body))
        } else {
            let reason = status.canonical_reason().unwrap_or("upstream error");
            Ok(ProxyResponse::error(
                status.as_u16(),
                &format!("Figma API error: {reason}"),
                Some(&body),
            ))
        }
    }

    fn cached(&self, url: &str) -> Option<String> {
        let cache = self.cache.lock().ok()?;
        let entry = cache.get(url)?;
        (entry.stored_at.elapsed() < self.config.cache_ttl).then(|| entry.body.clone())
    }

    fn store(&self, url: &str, body: &str) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                url.to_owned(),
                CacheEntry {
                    stored_at: Instant::now(),
                    body: body.to_owned(),
                },
            );
        }
    }

    /// Bind the listener without serving; `run` starts the accept loop.
    ///
    /// Split from [`FigmaProxy::serve`] so callers binding to port 0 can
    /// learn the assigned address first.
    pub fn bind(self) -> AsthesisResult<BoundProxy> {
        let server = tiny_http::Server::http(&self.config.bind_addr).map_err(|e| {
            AsthesisError::proxy(format!("bind {}: {e}", self.config.bind_addr))
        })?;
        Ok(BoundProxy {
            proxy: self,
            server,
        })
    }

    /// Run the blocking accept loop until the process exits.
    pub fn serve(self) -> AsthesisResult<()> {
        self.bind()?.run()
    }
}

/// A proxy with its listener already bound.
pub struct BoundProxy {
    proxy: FigmaProxy,
    server: tiny_http::Server,
}

impl BoundProxy {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> Option<std::net::SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until the process exits.
    pub fn run(&self) -> AsthesisResult<()> {
        let json_header =
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .map_err(|()| AsthesisError::proxy("build content-type header"))?;
        tracing::info!(
            bind = %self.proxy.config.bind_addr,
            upstream = %self.proxy.config.upstream_base,
            "figma proxy listening"
        );

        for request in self.server.incoming_requests() {
            let reply = if *request.method() == tiny_http::Method::Get {
                self.proxy.handle(request.url())
            } else {
                ProxyResponse::error(405, "method not allowed", None)
            };
            tracing::debug!(url = %request.url(), status = reply.status, "handled request");
            let response = tiny_http::Response::from_string(reply.body)
                .with_status_code(reply.status)
                .with_header(json_header.clone());
            if let Err(err) = request.respond(response) {
                tracing::warn!(error = %err, "failed to write response");
            }
        }
        Ok(())
    }
}

fn reject(rejection: ProxyRejection) -> ProxyResponse {
    ProxyResponse::error(400, &rejection.message(), None)
}

#[cfg(test)]
#[path = "../../tests/unit/proxy/server.rs"]
mod tests;
