//! Mock catalog server for client round-trip tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use tokio::net::TcpListener;

use layar::catalog::CatalogClient;
use layar::config::CatalogConfig;

/// Bearer token the test client sends.
pub const TEST_TOKEN: &str = "token-uji";

/// Serve `router` on an ephemeral port.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Client wired to the mock server with default settings.
pub fn client_for(addr: SocketAddr) -> CatalogClient {
    let config = CatalogConfig {
        base_url: format!("http://{addr}"),
        api_token: TEST_TOKEN.to_string(),
        ..CatalogConfig::default()
    };
    CatalogClient::new(&config).unwrap()
}

/// Shared recorder for request properties the tests assert on.
#[derive(Clone, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn push(&self, entry: String) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}
