#![allow(dead_code)]

pub mod image_server;

use fetch_logo::api::LogoClient;
use std::time::Duration;

/// Client that talks to the local test server directly, ignoring any
/// proxy settings in the environment.
pub fn local_client() -> LogoClient {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("build client");
    LogoClient::from_client(client)
}

/// A URL on 127.0.0.1 where nothing is listening.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/logo.png", port)
}
