use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{MemberId, TeamId};

/// Role a member holds on a team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    Admin,
    Coach,
    Player,
    Parent,
    /// Follows the team without belonging to it.
    Follower,
    Other(String),
}

impl MembershipRole {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "manager" => Self::Admin,
            "coach" => Self::Coach,
            "player" | "athlete" => Self::Player,
            "parent" => Self::Parent,
            "follower" | "fan" => Self::Follower,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Coach => "coach",
            Self::Player => "player",
            Self::Parent => "parent",
            Self::Follower => "follower",
            Self::Other(raw) => raw,
        }
    }
}

/// A member's membership on a team. `left_at = None` means active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMembership {
    pub member_id: MemberId,
    pub team_id: TeamId,
    pub role: MembershipRole,
    pub left_at: Option<DateTime<Utc>>,
}

impl TeamMembership {
    pub fn new(member_id: MemberId, team_id: TeamId, role: MembershipRole) -> Self {
        Self {
            member_id,
            team_id,
            role,
            left_at: None,
        }
    }

    pub fn left(mut self, at: DateTime<Utc>) -> Self {
        self.left_at = Some(at);
        self
    }

    pub fn is_active(&self) -> bool {
        self.left_at.is_none()
    }

    /// Only active, non-follower memberships take part in family grouping.
    pub fn participates(&self) -> bool {
        self.is_active() && self.role != MembershipRole::Follower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participation_rules() {
        let player = TeamMembership::new(MemberId(1), TeamId(1), MembershipRole::Player);
        assert!(player.participates());

        let follower = TeamMembership::new(MemberId(2), TeamId(1), MembershipRole::Follower);
        assert!(follower.is_active());
        assert!(!follower.participates());

        let former = TeamMembership::new(MemberId(3), TeamId(1), MembershipRole::Coach).left(Utc::now());
        assert!(!former.is_active());
        assert!(!former.participates());
    }

    #[test]
    fn test_role_parse_round_trips_known_roles() {
        for role in ["admin", "coach", "player", "parent", "follower"] {
            assert_eq!(MembershipRole::parse(role).as_str(), role);
        }
        assert_eq!(MembershipRole::parse("FAN"), MembershipRole::Follower);
        assert_eq!(MembershipRole::parse("scout").as_str(), "scout");
    }
}
