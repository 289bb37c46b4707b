use serde::{Deserialize, Serialize};
use crate::types::MemberId;

/// A person as seen by family-group resolution.
///
/// `owner_id` is only ever set on placeholder members, once their owning
/// real account has been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub is_placeholder: bool,
    pub owner_id: Option<MemberId>,
}

impl Member {
    /// A real account.
    pub fn real(id: MemberId) -> Self {
        Self {
            id,
            is_placeholder: false,
            owner_id: None,
        }
    }

    /// A placeholder account whose owner is not yet known.
    pub fn placeholder(id: MemberId) -> Self {
        Self {
            id,
            is_placeholder: true,
            owner_id: None,
        }
    }

    /// Records the resolved owner. Ignored for real accounts.
    pub fn with_owner(mut self, owner: MemberId) -> Self {
        if self.is_placeholder {
            self.owner_id = Some(owner);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_only_set_on_placeholders() {
        let real = Member::real(MemberId(1)).with_owner(MemberId(2));
        assert_eq!(real.owner_id, None);

        let dummy = Member::placeholder(MemberId(3)).with_owner(MemberId(1));
        assert_eq!(dummy.owner_id, Some(MemberId(1)));
    }
}
