use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

#[cfg(feature = "file-log")]
pub mod file;

/// Builds the subscriber for `level_regex`, an `EnvFilter` directive such as
/// `info,tilerc=debug`. An unparsable directive falls back to `info` and is returned
/// so the caller can report it once logging works.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::INFO.into())
        });
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_parses() {
        let (_subscriber, err) = parse_log_level("warn,tilerc=trace");
        assert!(err.is_none());
    }

    #[test]
    fn invalid_directive_is_reported() {
        let (_subscriber, err) = parse_log_level("tilerc=loud");
        assert!(err.is_some());
    }
}
