use payloads::{
    APIClient, Cancellation, ClientError, InMemorySession, SessionContext,
};
use reqwest::StatusCode;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single canned HTTP response to the first connection.
async fn canned_backend(
    status: &'static str,
    body: &'static str,
) -> APIClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
    });

    APIClient {
        address: format!("http://127.0.0.1:{port}"),
        inner_client: reqwest::Client::new(),
    }
}

#[tokio::test]
async fn message_list_is_surfaced() -> anyhow::Result<()> {
    let client = canned_backend(
        "400 Bad Request",
        r#"{"statusCode":400,"message":["name should not be empty"],"error":"Bad Request"}"#,
    )
    .await;
    let session = InMemorySession::with_token("t1");

    let result = client
        .campaigns()
        .find(&session, &Cancellation::new())
        .await;

    match result {
        Err(ClientError::APIError(code, error)) => {
            assert_eq!(code, StatusCode::BAD_REQUEST);
            assert_eq!(error.status_code, Some(400));
            assert_eq!(error.error.as_deref(), Some("Bad Request"));
            assert_eq!(error.to_string(), "name should not be empty");
        }
        other => panic!("Expected APIError, got {other:?}"),
    }
    // a 400 leaves the session alone
    assert!(session.token().is_some());

    Ok(())
}

#[tokio::test]
async fn string_status_and_bare_body_are_surfaced() -> anyhow::Result<()> {
    let client = canned_backend(
        "422 Unprocessable Entity",
        r#"{"statusCode":"422","message":"abbreviation is taken"}"#,
    )
    .await;
    let error = client
        .political_parties()
        .find(&InMemorySession::with_token("t1"), &Cancellation::new())
        .await
        .unwrap_err()
        .into_http_error();
    assert_eq!(error.status_code, Some(422));
    assert_eq!(error.to_string(), "abbreviation is taken");

    let client =
        canned_backend("503 Service Unavailable", r#""backend is down""#)
            .await;
    let error = client
        .candidates()
        .find(&InMemorySession::with_token("t1"), &Cancellation::new())
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
    assert_eq!(error.into_http_error().to_string(), "backend is down");

    Ok(())
}
