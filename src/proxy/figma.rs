//! Request model for the Figma proxy: query parsing, input rejection and
//! upstream URL construction. Everything here is pure and socket-free.

/// Which upstream Figma endpoint a request targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestType {
    /// Fetch the whole design document (`/v1/files/{id}`). The default.
    #[default]
    File,
    /// Fetch a subset of the document by node ID (`/v1/files/{id}/nodes`).
    Nodes,
    /// Request rendered raster exports of nodes (`/v1/images/{id}`).
    Images,
}

impl RequestType {
    /// Parse the `type` query parameter; unknown values fall back to
    /// [`RequestType::File`], matching the endpoint's documented default.
    pub fn parse(s: &str) -> Self {
        match s {
            "nodes" => Self::Nodes,
            "images" => Self::Images,
            _ => Self::File,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Nodes => "nodes",
            Self::Images => "images",
        }
    }
}

/// Parsed `GET /api/figma` query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FigmaQuery {
    /// Figma file key.
    pub file_id: Option<String>,
    /// Comma-separated node ID list, required for nodes/images requests.
    pub node_ids: Option<String>,
    /// Target endpoint.
    pub request_type: RequestType,
    /// Image export format (`png` by default).
    pub format: String,
    /// Image export scale (`2` by default).
    pub scale: String,
    /// Per-request bearer token override.
    pub access_token: Option<String>,
}

impl FigmaQuery {
    /// The token to send upstream: the per-request override wins, then the
    /// server-held token.
    pub fn resolve_token(&self, server_token: Option<&str>) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| server_token.map(str::to_owned))
    }
}

/// Reasons a request is rejected locally with HTTP 400 before any upstream
/// call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProxyRejection {
    /// No `fileId` parameter.
    MissingFileId,
    /// No token available from the query or the server environment.
    MissingAccessToken,
    /// `type=nodes`/`type=images` without a `nodeIds` parameter.
    MissingNodeIds(RequestType),
}

impl ProxyRejection {
    /// Developer-facing error message for the JSON body.
    pub fn message(self) -> String {
        match self {
            Self::MissingFileId => "fileId is required".to_owned(),
            Self::MissingAccessToken => {
                "Figma access token is required. Set FIGMA_ACCESS_TOKEN in the environment \
                 or pass accessToken as a query param"
                    .to_owned()
            }
            Self::MissingNodeIds(t) => format!("nodeIds is required for type={}", t.label()),
        }
    }
}

/// Parse a raw query string (`fileId=..&type=nodes&...`) into a
/// [`FigmaQuery`]. Unknown parameters are ignored; later duplicates win.
pub fn parse_query(raw: &str) -> FigmaQuery {
    let mut q = FigmaQuery {
        format: "png".to_owned(),
        scale: "2".to_owned(),
        ..FigmaQuery::default()
    };
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, percent_decode(v)),
            None => (pair, String::new()),
        };
        match key {
            "fileId" => q.file_id = Some(value),
            "nodeIds" => q.node_ids = Some(value),
            "type" => q.request_type = RequestType::parse(&value),
            "format" => q.format = value,
            "scale" => q.scale = value,
            "accessToken" => q.access_token = Some(value),
            _ => {}
        }
    }
    q
}

/// Build the upstream URL for a request, or the rejection explaining why
/// none can be built. Token availability is checked by the caller, which
/// knows the server-held fallback.
pub fn upstream_url(base: &str, q: &FigmaQuery) -> Result<String, ProxyRejection> {
    let file_id = match q.file_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ProxyRejection::MissingFileId),
    };
    let base = base.trim_end_matches('/');
    match q.request_type {
        RequestType::File => Ok(format!("{base}/v1/files/{file_id}")),
        RequestType::Nodes => {
            let ids = node_ids(q)?;
            Ok(format!("{base}/v1/files/{file_id}/nodes?ids={ids}"))
        }
        RequestType::Images => {
            let ids = node_ids(q)?;
            Ok(format!(
                "{base}/v1/images/{file_id}?ids={ids}&format={}&scale={}",
                q.format, q.scale
            ))
        }
    }
}

fn node_ids(q: &FigmaQuery) -> Result<&str, ProxyRejection> {
    match q.node_ids.as_deref() {
        Some(ids) if !ids.is_empty() => Ok(ids),
        _ => Err(ProxyRejection::MissingNodeIds(q.request_type)),
    }
}

/// Minimal percent-decoding for query values (`%XX` and `+`). Malformed
/// escapes pass through verbatim.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                if i + 2 < bytes.len()
                    && let (Some(hi), Some(lo)) = (
                        (bytes[i + 1] as char).to_digit(16),
                        (bytes[i + 2] as char).to_digit(16),
                    )
                {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| raw.to_owned())
}

#[cfg(test)]
#[path = "../../tests/unit/proxy/figma.rs"]
mod tests;
