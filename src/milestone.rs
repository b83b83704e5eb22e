//! Milestone data contract
//!
//! Milestones are owned by the surrounding app (generated there, stored
//! there). The simulation consumes them read-only at world construction:
//! only the id and the status matter to the physics. Field names follow the
//! app's camelCase JSON so lists deserialize straight out of local storage.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Failed,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Pending => "PENDING",
            MilestoneStatus::Active => "ACTIVE",
            MilestoneStatus::Completed => "COMPLETED",
            MilestoneStatus::Failed => "FAILED",
        }
    }
}

/// A single milestone on the journey toward the goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub status: MilestoneStatus,
    /// Relative impact weight from the generator (1-10)
    #[serde(default)]
    pub impact: u8,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 date string from the app; never parsed here
    #[serde(default)]
    pub deadline: Option<String>,
    /// Ordinal position in the journey
    #[serde(default)]
    pub order: u32,
}

impl Milestone {
    /// Only completed milestones are eligible for capture by the goal body
    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_json() {
        let json = r#"{
            "id": 3,
            "title": "Run 10k without stopping",
            "status": "COMPLETED",
            "impact": 7,
            "description": "Base fitness checkpoint",
            "deadline": "2026-09-01",
            "order": 2
        }"#;
        let m: Milestone = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 3);
        assert!(m.is_completed());
        assert_eq!(m.deadline.as_deref(), Some("2026-09-01"));
        assert_eq!(m.order, 2);
    }

    #[test]
    fn test_parse_minimal_json() {
        // Older saves omit the optional fields
        let json = r#"{"id": 1, "title": "Sign up for a race", "status": "PENDING"}"#;
        let m: Milestone = serde_json::from_str(json).unwrap();
        assert!(!m.is_completed());
        assert_eq!(m.impact, 0);
        assert!(m.deadline.is_none());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            MilestoneStatus::Pending,
            MilestoneStatus::Active,
            MilestoneStatus::Completed,
            MilestoneStatus::Failed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: MilestoneStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
