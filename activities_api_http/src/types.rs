use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The full activity catalog as served by `GET /activities`: a JSON object
/// keyed by activity name. The server's key order is meaningful (it drives
/// display order), so the map preserves insertion order.
pub type ActivityCatalog = IndexMap<String, Activity>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, recomputed per render and never stored. Goes
    /// negative when the server reports more participants than capacity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }
}

/// Success body for signup/unregister, e.g. `{"message": "Signed up!"}`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Confirmation {
    pub message: String,
}
