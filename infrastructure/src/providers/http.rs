//! Shared HTTP plumbing for provider adapters.

use memcat_application::ClientError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build a reqwest client with the per-request timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Other(format!("failed to create HTTP client: {e}")))
}

/// POST `body` as JSON and decode the JSON reply.
///
/// Non-2xx replies become [`ClientError::Http`] carrying the response body.
pub(crate) async fn post_json<B, R>(
    request: reqwest::RequestBuilder,
    body: &B,
) -> Result<R, ClientError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request.json(body).send().await.map_err(map_transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Http {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<R>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("failed to parse response: {e}")))
}

fn map_transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Connection(format!("HTTP request failed: {e}"))
    }
}

/// Single-shot local HTTP server for adapter tests.
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Answer one request with a canned reply.
    ///
    /// Returns the base URL to point a client at and a handle that yields
    /// the raw request text once the reply is sent.
    pub(crate) async fn serve_once(
        status: &str,
        content_type: &str,
        body: &str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let reply = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (base_url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;
    use serde_json::{Value, json};

    fn client() -> reqwest::Client {
        build_client(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_decodes_json_reply() {
        let (base_url, server) =
            serve_once("200 OK", "application/json", r#"{"ok": true}"#).await;

        let reply: Value = post_json(client().post(format!("{base_url}/echo")), &json!({"a": 1}))
            .await
            .unwrap();

        assert_eq!(reply, json!({"ok": true}));
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /echo HTTP/1.1"));
        assert!(request.ends_with(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let (base_url, _server) = serve_once(
            "500 Internal Server Error",
            "text/plain",
            "upstream exploded",
        )
        .await;

        let err = post_json::<_, Value>(client().post(base_url), &json!({}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::Http {
                status: 500,
                body: "upstream exploded".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_invalid_response() {
        let (base_url, _server) = serve_once("200 OK", "text/html", "<html>oops</html>").await;

        let err = post_json::<_, Value>(client().post(base_url), &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::InvalidResponse(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_closed_port_is_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = post_json::<_, Value>(client().post(format!("http://{addr}")), &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Connection(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_slow_server_is_timeout() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let client = build_client(Duration::from_millis(200)).unwrap();
        let err = post_json::<_, Value>(client.post(format!("http://{addr}")), &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err, ClientError::Timeout);
    }
}
