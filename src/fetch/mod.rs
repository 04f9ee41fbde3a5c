//! Member list provider.
//!
//! The list is fetched exactly once at startup on a background task. The
//! outcome is reported to the event loop as an [`AppEvent`]; there is no
//! timeout and no retry.

use crate::app::event::AppEvent;
use crate::table::record::UserRecord;
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid member list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a members response body: a JSON array of objects with at least an
/// `id` field.
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub async fn fetch_users(client: &reqwest::Client, url: &str) -> Result<Vec<UserRecord>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.text().await?;
    parse_users(&body)
}

/// Spawn the one-shot fetch. The result arrives as
/// [`AppEvent::UsersLoaded`] or [`AppEvent::UsersFailed`].
pub fn spawn_fetch(url: String, event_tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        tracing::info!(%url, "fetching member list");
        let client = reqwest::Client::new();
        let event = match fetch_users(&client, &url).await {
            Ok(users) => {
                tracing::info!(count = users.len(), "member list loaded");
                AppEvent::UsersLoaded(users)
            }
            Err(e) => {
                tracing::warn!(error = %e, "member list fetch failed");
                AppEvent::UsersFailed(e.to_string())
            }
        };
        let _ = event_tx.send(event);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single HTTP request on a local port with `response`.
    async fn serve_once(response: String) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });
        addr
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    #[test]
    fn test_parse_users_members_payload() {
        let body = r#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
            {"id":"3","name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"}
        ]"#;
        let users = parse_users(body).unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[2].name, "Arvind Kumar");
    }

    #[test]
    fn test_parse_users_rejects_non_array() {
        let err = parse_users(r#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("invalid member list"));
    }

    #[test]
    fn test_parse_users_empty_array() {
        assert!(parse_users("[]").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_reports_error_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        // Port 9 on localhost is the discard service; nothing should answer.
        spawn_fetch("http://127.0.0.1:9/members.json".into(), tx);
        match rx.recv().await {
            Some(AppEvent::UsersFailed(reason)) => assert!(!reason.is_empty()),
            other => panic!("expected failure event, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_users_decodes_ok_response() {
        let body = r#"[{"id":1,"name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}]"#;
        let addr = serve_once(http_response("200 OK", body)).await;
        let url = format!("http://{}/members.json", addr);
        let users = fetch_users(&reqwest::Client::new(), &url).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id.as_str(), "1");
        assert_eq!(users[0].email, "aaron@mailinator.com");
    }

    #[tokio::test]
    async fn test_fetch_users_reports_http_status() {
        let addr = serve_once(http_response("404 Not Found", "")).await;
        let url = format!("http://{}/members.json", addr);
        let err = fetch_users(&reqwest::Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(s) if s == reqwest::StatusCode::NOT_FOUND));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_users_rejects_malformed_body() {
        let addr = serve_once(http_response("200 OK", "not json")).await;
        let url = format!("http://{}/members.json", addr);
        let err = fetch_users(&reqwest::Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
