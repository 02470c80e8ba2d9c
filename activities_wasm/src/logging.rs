use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::prelude::wasm_bindgen;

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

#[wasm_bindgen]
#[derive(Copy, Clone, Debug)]
pub enum LogLevel {
  Off = "off",
  Error = "error",
  Warn = "warn",
  Info = "info",
  Debug = "debug",
  Trace = "trace",
}

impl LogLevel {
  fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Off => "off",
      LogLevel::Error => "error",
      LogLevel::Warn => "warn",
      LogLevel::Info => "info",
      LogLevel::Debug => "debug",
      LogLevel::Trace => "trace",
      LogLevel::__Invalid => unreachable!("LogLevel is invalid."),
    }
  }
}

/// `EnvFilter` directive covering the workspace crates at one level.
fn filter_directive(level: &str) -> EnvFilter {
  let filter = format!("activities_wasm={level},activities_api_http={level}");
  EnvFilter::builder().parse_lossy(filter)
}

/// Route `tracing` events to the browser console and install the panic
/// hook. Only the first call does anything.
pub(crate) fn init_logging(level: Option<LogLevel>) {
  LOGGER_INIT.get_or_init(|| {
    console_error_panic_hook::set_once();

    let filter = match level {
      Some(level) => filter_directive(level.as_str()),
      None => EnvFilter::builder().parse_lossy("info"),
    };

    let fmt = tracing_subscriber::fmt::layer()
      .with_ansi(false) // not supported by all browsers
      .without_time() // std::time is unavailable on wasm
      .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry().with(filter).with(fmt).init();
  });
}
