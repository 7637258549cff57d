//! Minimal HTTP/1.1 front end for [`IconService`].
//!
//! One request per connection: the request head is read (at most
//! [`MAX_HEAD_BYTES`], within [`HEAD_READ_TIMEOUT`]), answered, and the
//! connection is closed. Request bodies are never read.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use http::{Method, Response, StatusCode, Uri};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::api::{IconService, error_response};
use crate::config::{ConfigError, ServiceConfig};
use crate::error::{ErrorCode, IconError, Violation};
use crate::icons::VectorIconProvider;

/// Largest accepted request head (request line plus headers).
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// How long a client may take to send its request head.
pub const HEAD_READ_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a request head could not be turned into a method and URI.
#[derive(Debug, PartialEq, Eq)]
enum HeadError {
    TooLarge,
    Malformed(&'static str),
    Closed,
    TimedOut,
}

/// Binds `config.bind` and serves until the listener fails.
pub async fn run(config: &ServiceConfig) -> Result<(), ServerError> {
    let service = Arc::new(IconService::from_config(config)?);
    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    serve(listener, service).await
}

/// Accepts connections on `listener`, answering each on its own task.
pub async fn serve<P>(listener: TcpListener, service: Arc<IconService<P>>) -> Result<(), ServerError>
where
    P: VectorIconProvider + 'static,
{
    loop {
        let (stream, peer) = listener.accept().await?;
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, &service).await {
                log::debug!("Connection from {peer} failed: {e}");
            }
        });
    }
}

async fn handle_connection<P: VectorIconProvider>(
    mut stream: TcpStream,
    service: &IconService<P>,
) -> std::io::Result<()> {
    let response = match read_head_within(&mut stream, HEAD_READ_TIMEOUT).await {
        Ok(head) => match parse_request_line(&head) {
            Ok((method, uri)) => {
                let response = service.handle(&method, &uri);
                log::info!("{} {} -> {}", method, uri, response.status().as_u16());
                response
            }
            Err(reason) => bad_request(reason),
        },
        Err(HeadError::TooLarge) => {
            let err = IconError::violation(
                Violation::new("request", ErrorCode::RequestTooLarge, "Request head is too large")
                    .with_constraint(format!("at most {MAX_HEAD_BYTES} bytes")),
            );
            err.log("HTTP");
            error_response(&err)
        }
        Err(HeadError::Malformed(reason)) => bad_request(reason),
        Err(HeadError::TimedOut) => {
            log::debug!("No request head within {HEAD_READ_TIMEOUT:?}");
            status_response(StatusCode::REQUEST_TIMEOUT, "request head timed out")
        }
        Err(HeadError::Closed) => return Ok(()),
    };

    stream.write_all(&encode_response(&response)).await?;
    stream.shutdown().await
}

/// [`read_head`], giving up after `limit`.
async fn read_head_within<R: AsyncRead + Unpin>(
    reader: &mut R,
    limit: Duration,
) -> Result<String, HeadError> {
    tokio::time::timeout(limit, read_head(reader))
        .await
        .unwrap_or(Err(HeadError::TimedOut))
}

/// Reads up to and including the blank line that ends a request head.
async fn read_head<R: AsyncRead + Unpin>(reader: &mut R) -> Result<String, HeadError> {
    let mut head = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        let n = reader
            .read(&mut chunk)
            .await
            .map_err(|_| HeadError::Closed)?;
        if n == 0 {
            return if head.is_empty() {
                Err(HeadError::Closed)
            } else {
                Err(HeadError::Malformed("incomplete request head"))
            };
        }
        head.extend_from_slice(&chunk[..n]);

        if let Some(end) = find_head_end(&head) {
            if end > MAX_HEAD_BYTES {
                return Err(HeadError::TooLarge);
            }
            head.truncate(end);
            return String::from_utf8(head).map_err(|_| HeadError::Malformed("non-UTF-8 head"));
        }
        if head.len() > MAX_HEAD_BYTES {
            return Err(HeadError::TooLarge);
        }
    }
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}

/// Parses `METHOD target HTTP/1.x` from the first line of `head`.
fn parse_request_line(head: &str) -> Result<(Method, Uri), &'static str> {
    let line = head.lines().next().unwrap_or_default();
    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err("malformed request line");
    };
    if !version.starts_with("HTTP/1.") {
        return Err("unsupported HTTP version");
    }
    let method = Method::from_bytes(method.as_bytes()).map_err(|_| "invalid method")?;
    let uri = target.parse::<Uri>().map_err(|_| "invalid request target")?;
    Ok((method, uri))
}

fn bad_request(reason: &'static str) -> Response<Vec<u8>> {
    status_response(StatusCode::BAD_REQUEST, reason)
}

fn status_response(status: StatusCode, reason: &'static str) -> Response<Vec<u8>> {
    let mut response = Response::new(reason.as_bytes().to_vec());
    *response.status_mut() = status;
    response
}

/// Serializes a response as HTTP/1.1 with `Connection: close`.
fn encode_response(response: &Response<Vec<u8>>) -> Vec<u8> {
    let status = response.status();
    let mut out = Vec::with_capacity(256 + response.body().len());
    out.extend_from_slice(
        format!(
            "HTTP/1.1 {} {}\r\n",
            status.as_str(),
            status.canonical_reason().unwrap_or("")
        )
        .as_bytes(),
    );
    for (name, value) in response.headers() {
        out.extend_from_slice(name.as_str().as_bytes());
        out.extend_from_slice(b": ");
        out.extend_from_slice(value.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    if !response.headers().contains_key(http::header::CONTENT_LENGTH) {
        out.extend_from_slice(format!("content-length: {}\r\n", response.body().len()).as_bytes());
    }
    out.extend_from_slice(b"connection: close\r\n\r\n");
    out.extend_from_slice(response.body());
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_line_parsing() {
        let (method, uri) =
            parse_request_line("GET /api/icon?i=react HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
        assert_eq!(method, Method::GET);
        assert_eq!(uri.path(), "/api/icon");
        assert_eq!(uri.query(), Some("i=react"));

        assert!(parse_request_line("GET /api/icon").is_err());
        assert!(parse_request_line("GET /api/icon HTTP/2").is_err());
        assert!(parse_request_line("GET / HTTP/1.1 extra").is_err());
        assert!(parse_request_line("").is_err());
    }

    #[test]
    fn response_encoding() {
        let response = IconService::bundled().handle(&Method::GET, &"/nowhere".parse().unwrap());
        let bytes = encode_response(&response);
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("content-length: 9\r\n"));
        assert!(text.contains("connection: close\r\n\r\nNot Found"));
    }

    #[tokio::test]
    async fn head_reading_limits() {
        let mut ok: &[u8] = b"GET / HTTP/1.1\r\n\r\nignored body";
        assert_eq!(read_head(&mut ok).await.unwrap(), "GET / HTTP/1.1\r\n\r\n");

        let huge = format!("GET /{} HTTP/1.1\r\n\r\n", "a".repeat(MAX_HEAD_BYTES));
        let mut reader = huge.as_bytes();
        assert_eq!(read_head(&mut reader).await, Err(HeadError::TooLarge));

        let mut empty: &[u8] = b"";
        assert_eq!(read_head(&mut empty).await, Err(HeadError::Closed));

        let mut partial: &[u8] = b"GET / HTTP/1.1\r\n";
        assert!(matches!(
            read_head(&mut partial).await,
            Err(HeadError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn silent_clients_time_out() {
        let (_client, mut server) = tokio::io::duplex(64);
        let result = read_head_within(&mut server, Duration::from_millis(20)).await;
        assert_eq!(result, Err(HeadError::TimedOut));
    }

    #[tokio::test]
    async fn prompt_heads_beat_the_deadline() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_all(b"GET / HTTP/1.1\r\n\r\n").await.unwrap();
        let head = read_head_within(&mut server, Duration::from_secs(5)).await;
        assert_eq!(head.unwrap(), "GET / HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn timeout_response_is_408() {
        let bytes = encode_response(&status_response(
            StatusCode::REQUEST_TIMEOUT,
            "request head timed out",
        ));
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("HTTP/1.1 408 Request Timeout\r\n"));
    }

    #[tokio::test]
    async fn serves_icons_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, Arc::new(IconService::bundled())));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /api/icons?i=react,rust&theme=light HTTP/1.1\r\nHost: test\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.contains("content-type: image/svg+xml\r\n"));
        assert!(response.contains("cache-control: public, max-age=31536000, immutable\r\n"));
        assert!(response.contains(r#"width="104" height="52""#));
    }
}
