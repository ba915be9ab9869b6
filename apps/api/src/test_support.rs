//! Shared helpers for async tests.

/// Starts a TCP listener that accepts connections and never answers, and
/// returns a URL pointing at it. Requests to it can only end by timing out.
pub async fn silent_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{addr}/generate")
}
