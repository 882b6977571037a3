//! Logging utilities for the Tito integration.
//!
//! All crates log through `tracing`. The binary calls [`init`] once at
//! startup; libraries never install a subscriber themselves.

use tracing::{error, info, warn, Level};
use tracing_subscriber::{
    filter::{Directive, ParseError},
    fmt,
    prelude::*,
    EnvFilter,
};

/// Initialize the tracing subscriber at INFO level.
///
/// ```
/// use tito_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured; the `tito` directive is added on top. Calling this
/// more than once is harmless.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    let rejected = match tito_directive(level) {
        Ok(directive) => {
            filter = filter.add_directive(directive);
            None
        }
        Err(e) => Some(e),
    };

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
    // Reported once a subscriber exists
    if let Some(e) = rejected {
        warn!("Ignoring invalid log directive: {}", e);
    }
}

/// Filter directive enabling `level` for every `tito*` target.
fn tito_directive(level: Level) -> Result<Directive, ParseError> {
    format!("tito={}", level).parse()
}

/// Renders `err` followed by each distinct cause in its `source()` chain,
/// joined with `": "`.
///
/// Transport errors tend to keep the useful part (e.g. "Connection refused")
/// in a nested source rather than in their own `Display` output.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init();
        init_with_level(Level::DEBUG);
    }

    #[test]
    fn test_tito_directive_parses_for_every_level() {
        for level in [Level::TRACE, Level::DEBUG, Level::INFO, Level::WARN, Level::ERROR] {
            let directive = tito_directive(level).expect("directive");
            assert!(directive.to_string().starts_with("tito="));
        }
    }

    #[derive(Debug)]
    struct Cause(&'static str, Option<Box<Cause>>);

    impl std::fmt::Display for Cause {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Cause {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.1.as_deref().map(|inner| inner as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn test_error_chain_appends_causes() {
        let err = Cause(
            "error sending request",
            Some(Box::new(Cause(
                "client error (Connect)",
                Some(Box::new(Cause("Connection refused (os error 111)", None))),
            ))),
        );
        assert_eq!(
            error_chain(&err),
            "error sending request: client error (Connect): Connection refused (os error 111)"
        );
    }

    #[test]
    fn test_error_chain_skips_repeated_causes() {
        let err = Cause("request failed: timed out", Some(Box::new(Cause("timed out", None))));
        assert_eq!(error_chain(&err), "request failed: timed out");
    }

    #[test]
    fn test_log_result_returns_input() {
        let ok: Result<u8, String> = log_result(Ok(1), "fine", "failed");
        assert_eq!(ok, Ok(1));

        let err: Result<u8, String> = log_result(Err("bad".to_string()), "fine", "failed");
        assert_eq!(err, Err("bad".to_string()));
    }
}
