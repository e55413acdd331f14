use std::{panic::PanicHookInfo, sync::Once};

use tracing_subscriber::{
    filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
};

fn is_own_event(metadata: &tracing::Metadata<'_>) -> bool {
    metadata
        .module_path()
        .unwrap_or_default()
        .starts_with("metro_watch")
}

pub(crate) fn setup_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        install_subscriber();
        std::panic::set_hook(Box::new(panic_hook));
    })
}

#[cfg(target_os = "android")]
fn install_subscriber() {
    use tracing_logcat::{LogcatMakeWriter, LogcatTag};

    let tag = LogcatTag::Fixed("MetroWatch-Rust".to_owned());
    let writer = match LogcatMakeWriter::new(tag) {
        Ok(writer) => writer,
        Err(error) => {
            eprintln!("failed to initialize logcat writer: {error}");
            return;
        }
    };
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().with_level(false).without_time())
        .with_writer(writer)
        .with_ansi(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(FilterFn::new(is_own_event))
        .try_init()
        .unwrap_or_else(|error| eprintln!("failed to install tracing subscriber: {error}"));
}

#[cfg(not(target_os = "android"))]
fn install_subscriber() {
    let layer = tracing_subscriber::fmt::layer()
        .event_format(Format::default().without_time())
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(layer)
        .with(FilterFn::new(is_own_event))
        .try_init()
        .unwrap_or_else(|error| eprintln!("failed to install tracing subscriber: {error}"));
}

fn panic_hook(info: &PanicHookInfo) {
    let backtrace = std::backtrace::Backtrace::force_capture();
    tracing::error!("{info}\n{backtrace}")
}
