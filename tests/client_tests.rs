use std::time::Duration;
use system_intel::{FetchError, PageController, PageDocument, PageState, SystemIntelClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve one canned HTTP response after `delay`; yields the request line seen.
async fn serve_once(status: &str, body: &str, delay: Duration) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let _ = tx.send(request.lines().next().unwrap_or_default().to_string());
            tokio::time::sleep(delay).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), rx)
}

const RECORD: &str = r#"{"system_name":"Hek","system_id":30002053,"region":"Metropolis","security":0.46,
    "resources":[["Hek I - Asteroid Belt 1","Hek II - Asteroid Belt 1"],[["Pyroxeres"]]],
    "kills":{"npc_kills":0,"ship_kills":7},"recomendations":[3,2,4,1]}"#;

#[tokio::test]
async fn test_get_system_success() {
    let (base, request_line) = serve_once("200 OK", RECORD, Duration::ZERO).await;
    let client = SystemIntelClient::new(&base).unwrap().with_timeout(Duration::from_secs(5));

    let record = client.get_system("Hek").await.expect("system should load");
    assert_eq!(record.system_name, "Hek");
    assert_eq!(record.system_id, "30002053");
    assert_eq!(record.resources.belts.len(), 2);
    assert_eq!(record.resources.minerals, vec!["Pyroxeres"]);
    assert_eq!(request_line.await.unwrap(), "GET /system/Hek HTTP/1.1");
}

#[tokio::test]
async fn test_non_success_status_is_typed() {
    let (base, _) = serve_once("404 Not Found", r#"{"detail":"not found"}"#, Duration::ZERO).await;
    let client = SystemIntelClient::new(&base).unwrap();

    let err = client.get_system("Nowhere").await.unwrap_err();
    assert_eq!(err, FetchError::HttpStatus(404));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_fetch_with_timeout_returns_raw_response() {
    let (base, _) = serve_once("500 Internal Server Error", "{}", Duration::ZERO).await;
    let client = SystemIntelClient::new(&base).unwrap();

    let response = client
        .fetch_with_timeout(&client.system_url("Hek"), Duration::from_secs(5))
        .await
        .expect("non-2xx is not a fetch failure");
    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let (base, _) = serve_once("200 OK", RECORD, Duration::from_secs(5)).await;
    let client = SystemIntelClient::new(&base).unwrap().with_timeout(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let err = client.get_system("Hek").await.unwrap_err();
    assert_eq!(err, FetchError::Timeout);
    assert_eq!(err.to_string(), "Time Out");
    assert!(started.elapsed() < Duration::from_secs(2), "the request must be abandoned at the deadline");
}

#[tokio::test]
async fn test_unreachable_host_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SystemIntelClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.get_system("Hek").await.unwrap_err();
    assert!(matches!(err, FetchError::NetworkFailure(_)), "got {:?}", err);
    assert_eq!(err.to_string(), "Server Down, Come Back Later (sorry)");
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let (base, _) = serve_once("200 OK", "<html>oops</html>", Duration::ZERO).await;
    let client = SystemIntelClient::new(&base).unwrap();

    let err = client.get_system("Hek").await.unwrap_err();
    assert!(matches!(err, FetchError::DecodeFailure(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_page_timeout_end_to_end() {
    let (base, _) = serve_once("200 OK", RECORD, Duration::from_secs(5)).await;
    let client = SystemIntelClient::new(&base).unwrap().with_timeout(Duration::from_millis(100));
    let mut page = PageController::new(client, PageDocument::system_page());

    let state = page.load("?system_name=Hek").await.clone();
    assert_eq!(state, PageState::Error { message: "Time Out".to_string() });
    assert!(page.record().is_none(), "a late response is never rendered");
    assert_eq!(page.document().text("system-name-header"), Some(""));
}

#[tokio::test]
async fn test_page_404_end_to_end() {
    let (base, _) = serve_once("404 Not Found", "{}", Duration::ZERO).await;
    let client = SystemIntelClient::new(&base).unwrap();
    let mut page = PageController::new(client, PageDocument::system_page());

    match page.load("?system_name=Hek").await {
        PageState::Error { message } => assert!(message.contains("404"), "message was {}", message),
        other => panic!("expected error state, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_logging_appends_calls() {
    let (base, _) = serve_once("200 OK", RECORD, Duration::ZERO).await;
    let log_path = std::env::temp_dir().join(format!("system_intel_api_{}.log", std::process::id()));
    let _ = std::fs::remove_file(&log_path);

    let mut client = SystemIntelClient::new(&base).unwrap();
    client.set_api_logging(true, log_path.to_str().unwrap());
    client.get_system("Hek").await.unwrap();

    let log = std::fs::read_to_string(&log_path).expect("log file written");
    assert!(log.contains("Method: GET"));
    assert!(log.contains("/system/Hek"));
    assert!(log.contains("Response Status: 200"));
    let _ = std::fs::remove_file(&log_path);
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_api_log_write_failure_does_not_fail_fetch() {
    let (base, _) = serve_once("200 OK", RECORD, Duration::ZERO).await;

    // /dev/full opens fine but rejects every write
    let mut client = SystemIntelClient::new(&base).unwrap();
    client.set_api_logging(true, "/dev/full");
    let record = client.get_system("Hek").await.expect("log write errors are only logged");
    assert_eq!(record.system_name, "Hek");
}

#[test]
fn test_public_client_defaults() {
    let client = SystemIntelClient::public().unwrap();
    assert_eq!(client.base_url(), "https://esf-syk8.onrender.com");
    assert_eq!(client.timeout(), Duration::from_millis(system_intel::DEFAULT_FETCH_TIMEOUT_MS));
    assert_eq!(client.system_url("Jita"), "https://esf-syk8.onrender.com/system/Jita");
    assert_eq!(
        client.system_url("New Caldari"),
        "https://esf-syk8.onrender.com/system/New Caldari",
        "the name is inserted verbatim"
    );
}
