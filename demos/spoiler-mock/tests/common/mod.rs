use rstest::fixture;

mod test_app;
pub use self::test_app::*;

/// Installs a debug-level subscriber writing through the test harness.
pub fn init_tracing() {
    // Several tests share the process, only the first `try_init` wins
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A fresh mock service, with an empty story store.
#[fixture]
pub async fn app() -> TestApp {
    init_tracing();
    TestApp::start()
        .await
        .unwrap_or_else(|error| panic!("cannot start the mock service: {error:#}"))
}
