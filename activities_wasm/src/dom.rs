use activities_api_http::ActivityCatalog;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  Document, Element, HtmlFormElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
};

use crate::error::AppError;
use crate::render;

// Element ids the page shell provides.
const ACTIVITIES_LIST_ID: &str = "activities-list";
const ACTIVITY_SELECT_ID: &str = "activity";
const SIGNUP_FORM_ID: &str = "signup-form";
const EMAIL_INPUT_ID: &str = "email";
const MESSAGE_ID: &str = "message";

/// Styling applied to the status banner.
#[derive(Copy, Clone, Debug)]
pub enum StatusKind {
  Success,
  Error,
}

impl StatusKind {
  fn class(&self) -> &'static str {
    match self {
      StatusKind::Success => "success",
      StatusKind::Error => "error",
    }
  }
}

/// The page elements the app works against, bound once at startup.
pub struct AppView {
  document: Document,
  activities_list: Element,
  activity_select: HtmlSelectElement,
  signup_form: HtmlFormElement,
  email_input: HtmlInputElement,
  message: Element,
}

impl AppView {
  /// Bind against the page, failing if a required element is missing or of
  /// an unexpected type.
  pub fn bind(document: Document) -> Result<Self, AppError> {
    let activities_list = require_element(&document, ACTIVITIES_LIST_ID)?;
    let activity_select = require_typed(&document, ACTIVITY_SELECT_ID, "select")?;
    let signup_form = require_typed(&document, SIGNUP_FORM_ID, "form")?;
    let email_input = require_typed(&document, EMAIL_INPUT_ID, "input")?;
    let message = require_element(&document, MESSAGE_ID)?;

    Ok(AppView {
      document,
      activities_list,
      activity_select,
      signup_form,
      email_input,
      message,
    })
  }

  pub(crate) fn activities_list(&self) -> &Element {
    &self.activities_list
  }

  pub(crate) fn signup_form(&self) -> &HtmlFormElement {
    &self.signup_form
  }

  pub(crate) fn email_value(&self) -> String {
    self.email_input.value()
  }

  pub(crate) fn selected_activity(&self) -> String {
    self.activity_select.value()
  }

  pub(crate) fn reset_form(&self) {
    self.signup_form.reset();
  }

  /// Replace the card list and rebuild the selection control from the
  /// catalog, in catalog order. Previous content does not survive.
  pub fn apply_catalog(&self, catalog: &ActivityCatalog) -> Result<(), AppError> {
    self.activities_list.set_inner_html("");
    self
      .activity_select
      .set_inner_html(render::SELECT_PLACEHOLDER_OPTION);

    for (name, activity) in catalog {
      let card = self
        .document
        .create_element("div")
        .map_err(AppError::dom)?;
      card.set_class_name("activity-card");
      card.set_inner_html(&render::activity_card_html(name, activity));
      self
        .activities_list
        .append_child(&card)
        .map_err(AppError::dom)?;

      // Option text is assigned through the DOM, so the raw name is right
      // here; escaping it would display the entity text.
      let option =
        HtmlOptionElement::new_with_text_and_value(name, name).map_err(AppError::dom)?;
      self
        .activity_select
        .append_child(&option)
        .map_err(AppError::dom)?;
    }

    Ok(())
  }

  /// Swap the card list for the failure message. The selection control
  /// keeps whatever options it had before the failed fetch.
  pub fn show_load_failure(&self) {
    self.activities_list.set_inner_html(render::LOAD_FAILURE_HTML);
  }

  /// Show a status banner, replacing any previous styling.
  pub fn show_status(&self, text: &str, kind: StatusKind) {
    self.message.set_text_content(Some(text));
    self.message.set_class_name(kind.class());
    let _ = self.message.class_list().remove_1("hidden");
  }

  /// Hide the status banner after `delay_ms`. Timers are fire-and-forget:
  /// a banner shown while an older timer is pending gets hidden when that
  /// timer fires.
  pub fn hide_status_later(&self, delay_ms: u32) {
    let message = self.message.clone();
    spawn_local(async move {
      TimeoutFuture::new(delay_ms).await;
      let _ = message.class_list().add_1("hidden");
    });
  }
}

fn require_element(document: &Document, id: &'static str) -> Result<Element, AppError> {
  document
    .get_element_by_id(id)
    .ok_or(AppError::MissingElement(id))
}

fn require_typed<T: JsCast>(
  document: &Document,
  id: &'static str,
  expected: &'static str,
) -> Result<T, AppError> {
  require_element(document, id)?
    .dyn_into::<T>()
    .map_err(|_| AppError::ElementType { id, expected })
}
