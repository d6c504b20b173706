//! Serve the seeded app on a random port and talk to it over a real socket.

use crud_server::{config::Environment, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn roundtrip(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn serves_welcome_and_todos() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(crud_server::run(
        listener,
        AppState::seeded(Environment::Testing),
    ));

    let response = roundtrip(
        addr,
        "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.contains("Bienvenue sur mon API !"));

    let body = r#"{"title":"Buy milk"}"#;
    let request = format!(
        "POST /api/todos HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let response = roundtrip(addr, &request).await;
    assert!(response.starts_with("HTTP/1.1 201 Created"), "{response}");
    assert!(response.contains(r#""id":3"#));
}
