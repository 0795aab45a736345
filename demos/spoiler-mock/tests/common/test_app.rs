#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use std::net::TcpListener;

use tracing::info;

use spoiler_core::test_server::{RunningServer, TestServer};
use spoiler_core::{ApiClient, Credentials, SuiteConfig, SuiteContext};

use spoiler_mock::{Account, launch};

pub const USERNAME: &str = "spoiler-tester";
pub const PASSWORD: &str = "not-a-secret";

#[derive(Debug)]
pub struct MockTestServer;

impl TestServer for MockTestServer {
    async fn launch(&self, listener: TcpListener) {
        listener.set_nonblocking(true).expect("set non-blocking");
        let listener = tokio::net::TcpListener::from_std(listener).expect("valid listener");
        info!(?listener, "launching server");
        launch(listener, vec![Account::new(USERNAME, PASSWORD)])
            .await
            .expect("server launched");
    }

    async fn is_healthy(&self, client: &ApiClient) -> Option<bool> {
        let healthy = client
            .list("/api/health")
            .await
            .is_ok_and(|result| result.status_code().is_success());
        Some(healthy)
    }
}

#[derive(Debug, derive_more::Deref)]
pub struct TestApp {
    #[deref]
    server: RunningServer<MockTestServer>,
}

impl TestApp {
    pub async fn start() -> anyhow::Result<Self> {
        let server = RunningServer::start(MockTestServer).await?;
        Ok(Self { server })
    }

    /// Configuration of a run against this server.
    pub fn config(&self) -> SuiteConfig {
        SuiteConfig::new(
            self.base_url().clone(),
            Credentials::new(USERNAME, PASSWORD),
        )
    }

    /// A logged-in context with an empty fixture.
    pub async fn context(&self) -> anyhow::Result<SuiteContext> {
        let ctx = SuiteContext::setup(&self.config()).await?;
        Ok(ctx)
    }

    /// A client without any token.
    pub fn anonymous_client(&self) -> anyhow::Result<ApiClient> {
        let client = ApiClient::builder()
            .with_base_url(self.base_url().as_str())
            .build()?;
        Ok(client)
    }
}
