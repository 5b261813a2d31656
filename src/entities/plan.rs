use serde::{Deserialize, Serialize};

// Routing profile understood by the journey planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Balanced,
    Fastest,
    Quietest,
    Shortest,
}

impl Default for Plan {
    fn default() -> Self {
        Self::Balanced
    }
}

impl Plan {
    pub fn name(&self) -> String {
        match self {
            Self::Balanced => "balanced".into(),
            Self::Fastest => "fastest".into(),
            Self::Quietest => "quietest".into(),
            Self::Shortest => "shortest".into(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(Self::Balanced),
            "fastest" => Some(Self::Fastest),
            "quietest" => Some(Self::Quietest),
            "shortest" => Some(Self::Shortest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips() {
        for plan in [Plan::Balanced, Plan::Fastest, Plan::Quietest, Plan::Shortest] {
            assert_eq!(Plan::from_name(&plan.name()), Some(plan));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        assert_eq!(Plan::from_name("leisurely"), None);
        assert_eq!(Plan::from_name(""), None);
    }

    #[test]
    fn test_default_is_balanced() {
        assert_eq!(Plan::default(), Plan::Balanced);
    }
}
