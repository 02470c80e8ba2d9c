use activities_api_http::HttpClientError;
use wasm_bindgen::JsValue;

/// Failures wiring up or driving the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error("required element #{0} is missing from the page")]
  MissingElement(&'static str),
  #[error("element #{id} is not a {expected} element")]
  ElementType {
    id: &'static str,
    expected: &'static str,
  },
  #[error(transparent)]
  Api(#[from] HttpClientError),
  #[error("dom operation failed: {0}")]
  Dom(String),
}

impl AppError {
  /// Wrap a raw JS exception from a DOM call.
  pub(crate) fn dom(value: JsValue) -> Self {
    AppError::Dom(format!("{value:?}"))
  }
}
