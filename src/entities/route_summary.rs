use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Plan;

// One row of the stored-routes list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub id: Uuid,
    pub name: String,
    pub plan: Plan,
    pub saved_at: DateTime<Utc>,
}

impl RouteSummary {
    pub fn new(id: Uuid, name: String, plan: Plan, saved_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            plan,
            saved_at,
        }
    }
}
