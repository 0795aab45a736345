//! Runs a service in-process so the suite can target it.
//!
//! A [`TestServer`] knows how to serve on a listener; [`RunningServer::start`]
//! binds a random localhost port, spawns the server and waits until it is
//! healthy. The server task is aborted when the [`RunningServer`] is dropped.
//!
//! ```rust,no_run
//! use spoiler_core::test_server::{RunningServer, TestServer};
//! use std::net::TcpListener;
//!
//! struct MyServer;
//!
//! impl TestServer for MyServer {
//!     async fn launch(&self, listener: TcpListener) {
//!         // serve requests on `listener`
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = RunningServer::start(MyServer).await?;
//! println!("listening on {}", server.base_url());
//! # Ok(())
//! # }
//! ```

use std::future::{self, Future};
use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};
use tracing::{debug, error};
use url::Url;

use crate::ApiClient;

mod error;
pub use self::error::TestAppError;

/// Default time a server gets to become healthy.
pub const DEFAULT_HEALTHCHECK_TIMEOUT: Duration = Duration::from_secs(10);

const HEALTHCHECK_INTERVAL: Duration = Duration::from_millis(25);

/// A service the suite can run against.
pub trait TestServer {
    /// Serves requests on `listener` until the task is aborted.
    fn launch(&self, listener: TcpListener) -> impl Future<Output = ()> + Send;

    /// Readiness probe.
    ///
    /// `None` means the server has no probe, a TCP connection is then enough.
    fn is_healthy(&self, _client: &ApiClient) -> impl Future<Output = Option<bool>> + Send {
        future::ready(None)
    }

    /// Startup settings.
    fn config(&self) -> TestServerConfig {
        TestServerConfig::default()
    }
}

/// Startup settings of a [`TestServer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestServerConfig {
    /// How long [`RunningServer::start`] waits for the server to be healthy.
    pub health_check_timeout: Duration,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            health_check_timeout: DEFAULT_HEALTHCHECK_TIMEOUT,
        }
    }
}

/// A [`TestServer`] running on a background task.
#[derive(Debug)]
pub struct RunningServer<T> {
    local_addr: SocketAddr,
    base_url: Url,
    handle: Option<JoinHandle<()>>,
    server: Arc<T>,
}

impl<T> RunningServer<T>
where
    T: TestServer + Send + Sync + 'static,
{
    /// Binds `127.0.0.1:0`, launches the server and waits until it is healthy.
    ///
    /// # Errors
    ///
    /// Fails when the port cannot be bound or the server is not healthy in time.
    pub async fn start(server: T) -> Result<Self, TestAppError> {
        let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))?;
        let local_addr = listener.local_addr()?;
        let base_url = Url::parse(&format!("http://{local_addr}/"))
            .map_err(crate::ApiClientError::from)?;

        let server = Arc::new(server);
        let handle = tokio::spawn({
            let server = Arc::clone(&server);
            async move { server.launch(listener).await }
        });

        let running = Self {
            local_addr,
            base_url,
            handle: Some(handle),
            server,
        };

        let TestServerConfig {
            health_check_timeout,
        } = running.server.config();
        if !running.wait_for_health(health_check_timeout).await? {
            error!(%local_addr, ?health_check_timeout, "server is not healthy");
            return Err(TestAppError::UnhealthyServer {
                timeout: health_check_timeout,
            });
        }

        Ok(running)
    }

    async fn wait_for_health(&self, timeout: Duration) -> Result<bool, TestAppError> {
        let client = ApiClient::builder()
            .with_base_url(self.base_url.as_str())
            .build()?;
        let deadline = Instant::now() + timeout;

        loop {
            let healthy = match self.server.is_healthy(&client).await {
                Some(healthy) => healthy,
                None => tokio::net::TcpStream::connect(self.local_addr)
                    .await
                    .is_ok(),
            };
            if healthy {
                debug!(local_addr = %self.local_addr, "server healthy");
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            debug!("server not yet healthy");
            sleep(HEALTHCHECK_INTERVAL).await;
        }
    }
}

impl<T> RunningServer<T> {
    /// Address the server listens on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// `http://127.0.0.1:<port>/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The launched server.
    pub fn server(&self) -> &T {
        &self.server
    }
}

impl<T> Drop for RunningServer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
