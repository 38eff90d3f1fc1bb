//! `DefaultSender` and `HttpClient` against a live local HTTP server.
//!
//! Each test starts a `tiny_http` server on a random port, serves a fixed
//! number of requests on a background thread, and returns what it saw once
//! joined.

use std::io::Read;
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use notifier_http::Client as _;
use notifier_http::{
    ClientConfig, DefaultSender, HttpClient, NotifyError, Sender, STATUS_BAD_REQUEST,
};

const WAIT: Duration = Duration::from_secs(10);

/// A request as the server received it.
#[derive(Debug)]
struct Seen {
    method: tiny_http::Method,
    path: String,
    body: Vec<u8>,
}

/// Serves `count` requests, answering each with `respond(body)`.
fn serve(
    count: usize,
    respond: fn(&[u8]) -> (u16, Vec<u8>),
) -> (SocketAddr, JoinHandle<Vec<Seen>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test server");
    let addr = server.server_addr().to_ip().expect("ip listener");

    let handle = thread::spawn(move || {
        let mut seen = Vec::with_capacity(count);
        for _ in 0..count {
            let mut request = server.recv().expect("receive request");
            let mut body = Vec::new();
            request.as_reader().read_to_end(&mut body).expect("read body");

            let (code, reply) = respond(&body);
            seen.push(Seen {
                method: request.method().clone(),
                path: request.url().to_string(),
                body,
            });

            let response = tiny_http::Response::from_data(reply).with_status_code(code);
            request.respond(response).expect("send response");
        }
        seen
    });

    (addr, handle)
}

fn echo_created(body: &[u8]) -> (u16, Vec<u8>) {
    let mut reply = b"created:".to_vec();
    reply.extend_from_slice(body);
    (201, reply)
}

fn reject(_body: &[u8]) -> (u16, Vec<u8>) {
    (STATUS_BAD_REQUEST, b"missing field".to_vec())
}

/// Just past ureq's default 10 MiB body read limit.
const LARGE_BODY: usize = 11 * 1024 * 1024;

fn large_ok(_body: &[u8]) -> (u16, Vec<u8>) {
    (200, vec![b'x'; LARGE_BODY])
}

fn server_error(_body: &[u8]) -> (u16, Vec<u8>) {
    (500, b"boom".to_vec())
}

#[test]
fn default_sender_posts_payload_and_reads_body() {
    let (addr, server) = serve(1, echo_created);

    let response = DefaultSender::new()
        .send_post(b"hello", &format!("http://{addr}/notify"))
        .expect("transport succeeds");

    assert_eq!(response.code, 201);
    assert_eq!(response.status, "201 Created");
    assert_eq!(response.content, b"created:hello".to_vec());

    let seen = server.join().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, tiny_http::Method::Post);
    assert_eq!(seen[0].path, "/notify");
    assert_eq!(seen[0].body, b"hello".to_vec());
}

#[test]
fn default_sender_returns_error_statuses_as_data() {
    let (addr, server) = serve(1, reject);

    let response = DefaultSender::with_timeout(WAIT)
        .send_post(b"{}", &format!("http://{addr}/"))
        .expect("a 400 is still a transport success");

    assert_eq!(response.code, STATUS_BAD_REQUEST);
    assert_eq!(response.status, "400 Bad Request");
    assert_eq!(response.content, b"missing field".to_vec());
    server.join().unwrap();
}

#[test]
fn default_sender_reads_large_body_in_full() {
    let (addr, server) = serve(1, large_ok);

    let response = DefaultSender::new()
        .send_post(b"hi", &format!("http://{addr}/"))
        .expect("large body is still a success");

    assert_eq!(response.code, 200);
    assert_eq!(response.content.len(), LARGE_BODY);
    assert!(response.content.iter().all(|&b| b == b'x'));
    server.join().unwrap();
}

#[test]
fn default_sender_reports_connection_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = DefaultSender::new().send_post(b"hello", &format!("http://127.0.0.1:{port}/"));
    assert!(result.is_err());
}

#[test]
fn default_sender_rejects_malformed_url() {
    let result = DefaultSender::new().send_post(b"hello", "not a url");
    assert!(result.is_err());
}

#[test]
fn client_delivers_bodies_through_callbacks() {
    const SENDS: usize = 4;
    let (addr, server) = serve(SENDS, echo_created);

    let client = HttpClient::new(ClientConfig::new(format!("http://{addr}/hook"), 2)).unwrap();
    let (tx, rx) = mpsc::channel();

    for i in 0..SENDS {
        let tx = tx.clone();
        client.send_message(
            format!("msg-{i}").into_bytes(),
            Some(Box::new(move |result| {
                let _ = tx.send(result);
            })),
        );
    }

    let mut bodies: Vec<Vec<u8>> = (0..SENDS)
        .map(|_| rx.recv_timeout(WAIT).unwrap().expect("delivered"))
        .collect();
    bodies.sort();

    let expected: Vec<Vec<u8>> = (0..SENDS)
        .map(|i| format!("created:msg-{i}").into_bytes())
        .collect();
    assert_eq!(bodies, expected);

    assert!(client.flush(WAIT));
    assert_eq!(server.join().unwrap().len(), SENDS);
}

#[test]
fn client_reports_server_error_without_body() {
    let (addr, server) = serve(1, server_error);

    let client = HttpClient::new(ClientConfig::new(format!("http://{addr}/"), 1)).unwrap();
    let (tx, rx) = mpsc::channel();

    client.send_message(
        b"hello".to_vec(),
        Some(Box::new(move |result| {
            let _ = tx.send(result);
        })),
    );

    match rx.recv_timeout(WAIT).unwrap() {
        Err(NotifyError::UnsuccessfulResponse { code, status }) => {
            assert_eq!(code, 500);
            assert_eq!(status, "500 Internal Server Error");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    server.join().unwrap();
}
