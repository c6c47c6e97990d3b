//! Test server wrapper that starts Cadence on a random port

use std::net::SocketAddr;

use cadence_client::CadenceClient;
use cadence_server::Server;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use super::config::TestConfig;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
    upload_dir: TempDir,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(test_config: TestConfig) -> anyhow::Result<Self> {
        let TestConfig { config, upload_dir } = test_config;
        let server = Server::new(&config).await?;
        let shutdown = CancellationToken::new();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let token = shutdown.clone();
        tokio::spawn(async move {
            server.serve_on(listener, token).await.ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
            upload_dir,
        })
    }

    /// Absolute URL for a path on the running server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the raw HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Typed client for the running server
    pub fn cadence(&self) -> CadenceClient {
        CadenceClient::new(&self.url("/")).expect("valid server URL")
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of files currently in the upload directory
    pub fn stored_uploads(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path().join("uploads")).map_or(0, Iterator::count)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
