use std::rc::Rc;

use activities_api_http::ActivitiesClient;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsError;

use crate::dom::AppView;
use crate::error::AppError;
use crate::handlers;
use crate::logging::{self, LogLevel};

/// Everything the handlers share; lives for the page lifetime.
pub(crate) struct App {
  pub(crate) api: ActivitiesClient,
  pub(crate) view: AppView,
}

impl App {
  /// Fetch the catalog and rebuild both DOM regions. On any failure the
  /// card list shows the failure message and the selection control is left
  /// alone.
  pub(crate) async fn refresh_activities(&self) {
    let refreshed = self
      .api
      .list_activities()
      .await
      .map_err(AppError::from)
      .and_then(|catalog| self.view.apply_catalog(&catalog));

    if let Err(e) = refreshed {
      tracing::error!("error fetching activities: {e}");
      self.view.show_load_failure();
    }
  }
}

/// Wire the page and perform the initial render.
///
/// `host` is the base URL of the activities service and defaults to the
/// page origin. Rejects if the page shell is missing a required element.
#[wasm_bindgen(js_name = startApp)]
pub async fn start_app(host: Option<String>, log_level: Option<LogLevel>) -> Result<(), JsError> {
  logging::init_logging(log_level);

  let window = web_sys::window().ok_or_else(|| JsError::new("no window in this context"))?;
  let document = window
    .document()
    .ok_or_else(|| JsError::new("no document in this context"))?;

  let host = match host {
    Some(host) => host,
    None => window
      .location()
      .origin()
      .map_err(|e| JsError::new(&format!("cannot read the page origin: {e:?}")))?,
  };

  let api = ActivitiesClient::new(host).map_err(AppError::from)?;
  let view = AppView::bind(document)?;

  let app = Rc::new(App { api, view });
  handlers::install(&app)?;
  app.refresh_activities().await;

  Ok(())
}
