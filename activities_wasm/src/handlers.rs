use std::rc::Rc;

use activities_api_http::{Confirmation, HttpClientError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::app::App;
use crate::dom::{AppView, StatusKind};
use crate::error::AppError;

// How long status banners stay visible.
const SIGNUP_STATUS_HIDE_MS: u32 = 5_000;
const UNREGISTER_STATUS_HIDE_MS: u32 = 4_000;

/// Install the delegated removal handler and the signup submit handler.
/// The closures are leaked; they live for the page lifetime.
pub(crate) fn install(app: &Rc<App>) -> Result<(), AppError> {
  install_remove_handler(app)?;
  install_signup_handler(app)?;
  Ok(())
}

/// One listener on the card container handles every removal button, since
/// re-renders replace all child nodes and would orphan per-button
/// listeners.
fn install_remove_handler(app: &Rc<App>) -> Result<(), AppError> {
  let on_click = {
    let app = Rc::clone(app);
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
      let Some((activity, email)) = removal_target(&event) else {
        return;
      };
      if !confirm_unregister(&email, &activity) {
        return;
      }
      let app = Rc::clone(&app);
      spawn_local(async move {
        unregister_participant(&app, &activity, &email).await;
      });
    })
  };

  app
    .view
    .activities_list()
    .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    .map_err(AppError::dom)?;
  on_click.forget();
  Ok(())
}

fn install_signup_handler(app: &Rc<App>) -> Result<(), AppError> {
  let on_submit = {
    let app = Rc::clone(app);
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
      event.prevent_default();

      let email = app.view.email_value();
      let activity = app.view.selected_activity();
      let app = Rc::clone(&app);
      spawn_local(async move {
        sign_up_participant(&app, &activity, &email).await;
      });
    })
  };

  app
    .view
    .signup_form()
    .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
    .map_err(AppError::dom)?;
  on_submit.forget();
  Ok(())
}

/// Activity/email pair for a click that landed on a removal button.
/// `None` for clicks elsewhere and for buttons whose data attributes are
/// missing or empty.
fn removal_target(event: &Event) -> Option<(String, String)> {
  let target = event.target()?.dyn_into::<Element>().ok()?;
  let button = target.closest(".remove-btn").ok()??;

  let activity = button
    .get_attribute("data-activity")
    .filter(|v| !v.is_empty())?;
  let email = button
    .get_attribute("data-email")
    .filter(|v| !v.is_empty())?;
  Some((activity, email))
}

fn confirm_unregister(email: &str, activity: &str) -> bool {
  web_sys::window()
    .and_then(|w| {
      w.confirm_with_message(&format!("Unregister {email} from {activity}?"))
        .ok()
    })
    .unwrap_or(false)
}

async fn unregister_participant(app: &App, activity: &str, email: &str) {
  let outcome = app.api.unregister(activity, email).await;
  if apply_unregister_outcome(&app.view, outcome) {
    app.refresh_activities().await;
  }
}

async fn sign_up_participant(app: &App, activity: &str, email: &str) {
  let outcome = app.api.signup(activity, email).await;
  if apply_signup_outcome(&app.view, outcome) {
    app.refresh_activities().await;
  }
}

/// Apply an unregister outcome to the page and say whether the catalog
/// should be refetched. Success and rejection both schedule the banner
/// hide; a transport failure shows fixed text and leaves the banner up.
pub fn apply_unregister_outcome(
  view: &AppView,
  outcome: Result<Confirmation, HttpClientError>,
) -> bool {
  match outcome {
    Ok(confirmation) => {
      view.show_status(&confirmation.message, StatusKind::Success);
      view.hide_status_later(UNREGISTER_STATUS_HIDE_MS);
      true
    }
    Err(e) if e.is_rejection() => {
      let detail = e.rejection_detail().unwrap_or("Failed to unregister");
      view.show_status(detail, StatusKind::Error);
      view.hide_status_later(UNREGISTER_STATUS_HIDE_MS);
      false
    }
    Err(e) => {
      tracing::error!("failed to unregister: {e}");
      view.show_status("Failed to unregister. Please try again.", StatusKind::Error);
      false
    }
  }
}

/// Like unregister, but success also resets the form and the banner stays
/// up a second longer.
pub fn apply_signup_outcome(
  view: &AppView,
  outcome: Result<Confirmation, HttpClientError>,
) -> bool {
  match outcome {
    Ok(confirmation) => {
      view.show_status(&confirmation.message, StatusKind::Success);
      view.reset_form();
      view.hide_status_later(SIGNUP_STATUS_HIDE_MS);
      true
    }
    Err(e) if e.is_rejection() => {
      let detail = e.rejection_detail().unwrap_or("An error occurred");
      view.show_status(detail, StatusKind::Error);
      view.hide_status_later(SIGNUP_STATUS_HIDE_MS);
      false
    }
    Err(e) => {
      tracing::error!("error signing up: {e}");
      view.show_status("Failed to sign up. Please try again.", StatusKind::Error);
      false
    }
  }
}
