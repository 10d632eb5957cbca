// one-time subscriber init for shells and tools; embedders that
// configure their own subscriber should skip this
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
}
