//! End-to-end previews through the real blocking reqwest client.
//!
//! Each test serves one canned HTTP response from a local listener. Links in
//! free text cannot carry a port, so the client routes through the listener as
//! an HTTP proxy instead.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::Utc;
use linkcard::tools::fetch::{build_client, fetch_document, ClientConfig};
use linkcard::{fetch_preview, PreviewError};
use reqwest::blocking::Client;

/// Accept one connection, return the request line, answer with `response`.
fn serve_once(response: String) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let mut stream = stream;
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line
    });
    (addr, handle)
}

fn http_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn proxied_client(addr: SocketAddr) -> Client {
    Client::builder()
        .proxy(reqwest::Proxy::http(format!("http://{addr}")).unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[test]
fn preview_builds_card_from_live_response() {
    let body = r#"<!DOCTYPE html>
        <html>
            <head>
                <title>Ignored</title>
                <meta property="og:title" content="Live Title">
                <meta property="og:type" content="website">
                <meta property="og:image" content="http://preview.test/cover.png">
                <meta property="og:site_name" content="Preview Test">
                <meta property="og:url" content="">
                <meta name="description" content="Plain description">
            </head>
            <body><p>hello</p></body>
        </html>"#;
    let (addr, server) = serve_once(http_response("200 OK", body));

    let card = fetch_preview(
        &proxied_client(addr),
        "first http://other.test/skip then http://preview.test/page",
        Utc::now(),
    )
    .unwrap()
    .unwrap();

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with("GET http://preview.test/page"));
    assert_eq!(card.url, "http://preview.test/page");
    assert_eq!(card.title, "Live Title");
    assert_eq!(card.card_type, "website");
    assert_eq!(card.image, "http://preview.test/cover.png");
    assert_eq!(card.provider_name, "Preview Test");
    assert_eq!(card.description, "Plain description");
    assert!(!card.id.is_empty());
}

#[test]
fn preview_reports_non_200() {
    let (addr, server) = serve_once(http_response("404 Not Found", "<h1>missing</h1>"));

    let err = fetch_preview(&proxied_client(addr), "http://preview.test/missing", Utc::now())
        .unwrap_err();

    server.join().unwrap();
    assert!(matches!(err, PreviewError::BadStatus(_)));
    assert_eq!(err.to_string(), "unexpected status: 404 Not Found");
}

#[test]
fn preview_skips_network_without_link() {
    let client = build_client(&ClientConfig::default()).unwrap();
    assert!(fetch_preview(&client, "no links in here", Utc::now())
        .unwrap()
        .is_none());
}

#[test]
fn configured_timeout_bounds_a_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_millis(1_500));
        drop(stream);
    });

    let client = build_client(&ClientConfig::default().with_timeout_ms(200)).unwrap();
    let url = url::Url::parse(&format!("http://{addr}/slow")).unwrap();
    let err = fetch_document(&client, &url).unwrap_err();

    assert!(matches!(err, PreviewError::Request(_)));
    server.join().unwrap();
}
