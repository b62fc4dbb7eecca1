use env_logger::{
    Builder,
    Env,
};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

fn logging_env() -> Env<'static> {
    Env::default().default_filter_or(DEFAULT_LOG_FILTER)
}

/// Logs go to stderr through `env_logger`. `RUST_LOG` wins; otherwise only
/// warnings and errors are shown.
pub fn init_logging() {
    let _ = Builder::from_env(logging_env()).try_init();
}
