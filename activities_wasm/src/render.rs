use activities_api_http::Activity;

use crate::escape::escape_html;

/// The selection control is reset to exactly this option on every render.
pub const SELECT_PLACEHOLDER_OPTION: &str =
  r#"<option value="">-- Select an activity --</option>"#;

/// Replaces the card list when the catalog fetch fails.
pub const LOAD_FAILURE_HTML: &str = "<p>Failed to load activities. Please try again later.</p>";

/// Inner markup for one activity card. The card element itself (a div with
/// class `activity-card`) is created by the caller; everything interpolated
/// here is server-supplied text and goes through [`escape_html`].
pub fn activity_card_html(name: &str, activity: &Activity) -> String {
  format!(
    "<h4>{}</h4>\
     <p>{}</p>\
     <p><strong>Schedule:</strong> {}</p>\
     <p><strong>Availability:</strong> {} spots left</p>\
     <div class=\"participants\"><h5>Participants</h5>{}</div>",
    escape_html(name),
    escape_html(&activity.description),
    escape_html(&activity.schedule),
    activity.spots_left(),
    participants_html(name, activity),
  )
}

/// Roster section of a card: one row per participant with a removal button
/// addressing the pair via data attributes, or a placeholder line when the
/// roster is empty.
fn participants_html(name: &str, activity: &Activity) -> String {
  if activity.participants.is_empty() {
    return r#"<div class="participants-list"><em>No participants yet</em></div>"#.to_string();
  }

  let items: String = activity
    .participants
    .iter()
    .map(|email| {
      format!(
        "<li class=\"participant-item\"><span>{}</span>\
         <button class=\"remove-btn\" data-activity=\"{}\" data-email=\"{}\" \
         aria-label=\"Remove participant\">×</button></li>",
        escape_html(email),
        escape_html(name),
        escape_html(email),
      )
    })
    .collect();

  format!("<ul class=\"participants-list\">{items}</ul>")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
      description: "Play chess".to_string(),
      schedule: "Fridays".to_string(),
      max_participants: max,
      participants: participants.iter().map(|p| p.to_string()).collect(),
    }
  }

  #[test]
  fn card_shows_escaped_fields_and_spots_left() {
    let html = activity_card_html("Chess Club", &activity(10, &["a@x.com"]));

    assert!(html.contains("<h4>Chess Club</h4>"));
    assert!(html.contains("<p>Play chess</p>"));
    assert!(html.contains("<p><strong>Schedule:</strong> Fridays</p>"));
    assert!(html.contains("<p><strong>Availability:</strong> 9 spots left</p>"));
  }

  #[test]
  fn card_escapes_markup_in_the_name() {
    let html = activity_card_html("A & B <Club>", &activity(5, &[]));

    assert!(html.contains("<h4>A &amp; B &lt;Club&gt;</h4>"));
    assert!(!html.contains("<Club>"));
  }

  #[test]
  fn participant_rows_carry_escaped_data_attributes() {
    let html = activity_card_html("Rock \"n\" Roll", &activity(5, &["a@x.com"]));

    assert!(html.contains(r#"data-activity="Rock &quot;n&quot; Roll""#));
    assert!(html.contains(r#"data-email="a@x.com""#));
    assert!(html.contains(r#"aria-label="Remove participant">×</button>"#));
  }

  #[test]
  fn one_row_per_participant() {
    let html = activity_card_html("Chess Club", &activity(10, &["a@x.com", "b@x.com"]));

    assert_eq!(html.matches("participant-item").count(), 2);
    assert_eq!(html.matches("remove-btn").count(), 2);
    assert!(html.contains(r#"<ul class="participants-list">"#));
  }

  #[test]
  fn empty_roster_renders_the_placeholder() {
    let html = activity_card_html("Chess Club", &activity(10, &[]));

    assert!(html.contains(r#"<div class="participants-list"><em>No participants yet</em></div>"#));
    assert!(!html.contains("remove-btn"));
  }

  #[test]
  fn overbooked_activity_shows_a_negative_count() {
    let html = activity_card_html("Chess Club", &activity(1, &["a@x.com", "b@x.com"]));

    assert!(html.contains("<p><strong>Availability:</strong> -1 spots left</p>"));
  }
}
