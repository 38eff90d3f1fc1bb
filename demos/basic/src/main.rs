/**
 * Minimal harness for the notifier HTTP client.
 *
 * Posts a handful of JSON notifications to an endpoint and prints the
 * outcome of each one as its callback fires:
 *
 *   cargo run -p notifier_example -- https://httpbin.org/post
 *   cargo run -p notifier_example -- https://httpbin.org/status/400 --limit 1
 *   RUST_LOG=debug cargo run -p notifier_example -- http://127.0.0.1:9/
 */
use std::time::Duration;

use notifier::http::{ClientConfig, HttpClient};
use notifier::Client;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const DEFAULT_URL: &str = "https://httpbin.org/post";
const DEFAULT_LIMIT: usize = 2;
const MESSAGES: usize = 5;
const FLUSH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct Notification<'a> {
    title: &'a str,
    sequence: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let url = args
        .iter()
        .find(|a| !a.starts_with("--") && a.parse::<usize>().is_err())
        .cloned()
        .unwrap_or_else(|| DEFAULT_URL.to_string());
    let limit = args
        .iter()
        .position(|a| a == "--limit")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let client = match HttpClient::new(ClientConfig::new(url.clone(), limit)) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("[example] {err}");
            std::process::exit(2);
        }
    };
    println!("[example] Posting {MESSAGES} notifications to {url} (limit {limit})");

    for sequence in 0..MESSAGES {
        let payload = match serde_json::to_vec(&Notification {
            title: "build finished",
            sequence,
        }) {
            Ok(payload) => payload,
            Err(err) => {
                eprintln!("[example] Could not encode notification {sequence}: {err}");
                continue;
            }
        };

        client.send_message(
            payload,
            Some(Box::new(move |result| match result {
                Ok(content) => println!(
                    "[example] #{sequence} delivered, {} byte response",
                    content.len()
                ),
                Err(err) => println!("[example] #{sequence} failed: {err}"),
            })),
        );
    }

    /*
     * A message without a callback: its outcome is discarded.
     */
    client.send_message(b"fire and forget".to_vec(), None);

    /*
     * `send_message` never blocks, so wait for the background sends to
     * finish before the process exits.
     */
    if client.flush(FLUSH_TIMEOUT) {
        tracing::info!("all notifications completed");
    } else {
        tracing::warn!(pending = client.pending(), "flush timed out");
    }
}
