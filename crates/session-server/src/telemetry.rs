//! Telemetry setup

pub fn init_telemetry() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,session_server=debug,session_core=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();
}
