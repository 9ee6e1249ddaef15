use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

const LOG_DIR: &str = "~/.cache/tilerc";
const LOG_FILE_NAME: &str = "tilerc.log";

/// Appends plain-text logs to `~/.cache/tilerc/tilerc.log`. Writes are blocking.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = get_log_writer().map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    subscriber.with(layer)
}

pub fn log_dir() -> PathBuf {
    PathBuf::from(shellexpand::tilde(LOG_DIR).as_ref())
}

fn get_log_writer() -> Option<RollingFileAppender> {
    let dir = log_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("Couldn't create log directory {}: {err}", dir.display());
        return None;
    }
    Some(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
}
