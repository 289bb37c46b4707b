use serde::{Deserialize, Serialize};
use std::fmt;
use crate::types::{Edge, MemberId};

/// Role of the related member relative to the subject of a relationship row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// The related member is the subject's parent (or owning account).
    Parent,
    /// The related member is the subject's child (or dependent account).
    Child,
    Sibling,
    Spouse,
    Other(String),
}

impl RelationshipKind {
    /// Parses the loosely-typed `relationship_type` column. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "parent" | "owner" | "guardian" => Self::Parent,
            "child" | "dependent" | "ward" => Self::Child,
            "sibling" => Self::Sibling,
            "spouse" | "partner" => Self::Spouse,
            other => Self::Other(other.to_string()),
        }
    }

    /// The same link seen from the other side.
    pub fn inverse(&self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            other => other.clone(),
        }
    }

    pub fn is_owner_role(&self) -> bool {
        matches!(self, Self::Parent)
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parent => write!(f, "parent"),
            Self::Child => write!(f, "child"),
            Self::Sibling => write!(f, "sibling"),
            Self::Spouse => write!(f, "spouse"),
            Self::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// One stored family relationship row.
///
/// Storage may record a link in only one direction; use
/// [`Relationship::counterpart_of`] to read it from either side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub member_id: MemberId,
    pub related_member_id: MemberId,
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn new(member_id: MemberId, related_member_id: MemberId, kind: RelationshipKind) -> Self {
        Self {
            member_id,
            related_member_id,
            kind,
        }
    }

    pub fn involves(&self, id: MemberId) -> bool {
        self.member_id == id || self.related_member_id == id
    }

    /// The other endpoint and its role relative to `id`, or `None` if the
    /// row does not involve `id`.
    pub fn counterpart_of(&self, id: MemberId) -> Option<(MemberId, RelationshipKind)> {
        if self.member_id == id {
            Some((self.related_member_id, self.kind.clone()))
        } else if self.related_member_id == id {
            Some((self.member_id, self.kind.inverse()))
        } else {
            None
        }
    }

    pub fn edge(&self) -> Edge {
        Edge::new(self.member_id, self.related_member_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(RelationshipKind::parse("Parent"), RelationshipKind::Parent);
        assert_eq!(RelationshipKind::parse("owner"), RelationshipKind::Parent);
        assert_eq!(RelationshipKind::parse(" GUARDIAN "), RelationshipKind::Parent);
        assert_eq!(RelationshipKind::parse("dependent"), RelationshipKind::Child);
        assert_eq!(RelationshipKind::parse("partner"), RelationshipKind::Spouse);
        assert_eq!(
            RelationshipKind::parse("Cousin"),
            RelationshipKind::Other("cousin".to_string())
        );
    }

    #[test]
    fn test_counterpart_reads_both_directions() {
        // Row says: 10's parent is 20.
        let row = Relationship::new(MemberId(10), MemberId(20), RelationshipKind::Parent);

        assert_eq!(
            row.counterpart_of(MemberId(10)),
            Some((MemberId(20), RelationshipKind::Parent))
        );
        assert_eq!(
            row.counterpart_of(MemberId(20)),
            Some((MemberId(10), RelationshipKind::Child))
        );
        assert_eq!(row.counterpart_of(MemberId(30)), None);
    }

    #[test]
    fn test_symmetric_kinds_invert_to_themselves() {
        assert_eq!(RelationshipKind::Sibling.inverse(), RelationshipKind::Sibling);
        let other = RelationshipKind::Other("coach".to_string());
        assert_eq!(other.inverse(), other);
    }
}
