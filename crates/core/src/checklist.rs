//! The six-step onboarding checklist shown to a newly approved seller.
//!
//! The item set is closed: exactly six known keys, in a fixed display order,
//! held in a fixed-size array so the shape is guaranteed by the type rather
//! than by convention in a JSON blob.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Number of checklist items; the set never grows or shrinks at runtime.
pub const CHECKLIST_LEN: usize = 6;

// ---------------------------------------------------------------------------
// ChecklistKey
// ---------------------------------------------------------------------------

/// Identity of a checklist item. Order of declaration is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistKey {
    AddProduct,
    AddFinance,
    AddAddress,
    ConfigureRto,
    ReviewFees,
    InviteTeam,
}

impl ChecklistKey {
    /// All keys in display order.
    pub const ALL: [ChecklistKey; CHECKLIST_LEN] = [
        ChecklistKey::AddProduct,
        ChecklistKey::AddFinance,
        ChecklistKey::AddAddress,
        ChecklistKey::ConfigureRto,
        ChecklistKey::ReviewFees,
        ChecklistKey::InviteTeam,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChecklistKey::AddProduct => "add_product",
            ChecklistKey::AddFinance => "add_finance",
            ChecklistKey::AddAddress => "add_address",
            ChecklistKey::ConfigureRto => "configure_rto",
            ChecklistKey::ReviewFees => "review_fees",
            ChecklistKey::InviteTeam => "invite_team",
        }
    }
}

impl std::str::FromStr for ChecklistKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add_product" => Ok(ChecklistKey::AddProduct),
            "add_finance" => Ok(ChecklistKey::AddFinance),
            "add_address" => Ok(ChecklistKey::AddAddress),
            "configure_rto" => Ok(ChecklistKey::ConfigureRto),
            "review_fees" => Ok(ChecklistKey::ReviewFees),
            "invite_team" => Ok(ChecklistKey::InviteTeam),
            other => Err(CoreError::Validation(format!(
                "Unknown checklist item '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Completion state of a single checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,
    Completed,
}

/// One checklist entry: a key plus its completion state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub key: ChecklistKey,
    pub status: ItemStatus,
    pub completed_at: Option<Timestamp>,
}

/// The full six-item checklist, in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checklist {
    items: [ChecklistItem; CHECKLIST_LEN],
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}

impl Checklist {
    /// A fresh checklist with every item pending.
    pub fn new() -> Self {
        Self {
            items: ChecklistKey::ALL.map(|key| ChecklistItem {
                key,
                status: ItemStatus::Pending,
                completed_at: None,
            }),
        }
    }

    pub fn items(&self) -> &[ChecklistItem; CHECKLIST_LEN] {
        &self.items
    }

    pub fn item(&self, key: ChecklistKey) -> &ChecklistItem {
        &self.items[Self::index(key)]
    }

    fn item_mut(&mut self, key: ChecklistKey) -> &mut ChecklistItem {
        &mut self.items[Self::index(key)]
    }

    /// Items are stored in [`ChecklistKey::ALL`] order.
    fn index(key: ChecklistKey) -> usize {
        match key {
            ChecklistKey::AddProduct => 0,
            ChecklistKey::AddFinance => 1,
            ChecklistKey::AddAddress => 2,
            ChecklistKey::ConfigureRto => 3,
            ChecklistKey::ReviewFees => 4,
            ChecklistKey::InviteTeam => 5,
        }
    }

    /// Idempotent completion latch: flips a pending item to completed and
    /// stamps it. Returns `true` only when the item actually flipped; an
    /// already-completed item is left untouched, timestamp included.
    pub fn complete(&mut self, key: ChecklistKey, at: Timestamp) -> bool {
        let item = self.item_mut(key);
        if item.status == ItemStatus::Completed {
            return false;
        }
        item.status = ItemStatus::Completed;
        item.completed_at = Some(at);
        true
    }

    /// Manual status override used by the checklist PATCH endpoint
    /// (configure_rto and review_fees have no automatic trigger).
    pub fn set_status(&mut self, key: ChecklistKey, status: ItemStatus, at: Timestamp) {
        let item = self.item_mut(key);
        item.status = status;
        item.completed_at = match status {
            ItemStatus::Completed => Some(at),
            ItemStatus::Pending => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn new_checklist_has_six_pending_items_in_order() {
        let checklist = Checklist::new();
        assert_eq!(checklist.items().len(), CHECKLIST_LEN);
        for (item, key) in checklist.items().iter().zip(ChecklistKey::ALL) {
            assert_eq!(item.key, key);
            assert_eq!(item.status, ItemStatus::Pending);
            assert!(item.completed_at.is_none());
        }
    }

    #[test]
    fn complete_flips_once_and_latches() {
        let mut checklist = Checklist::new();
        let first = Utc::now();

        assert!(checklist.complete(ChecklistKey::AddProduct, first));
        let item = checklist.item(ChecklistKey::AddProduct);
        assert_eq!(item.status, ItemStatus::Completed);
        assert_eq!(item.completed_at, Some(first));

        // Re-completing is a no-op: status stays completed, timestamp intact.
        let later = Utc::now();
        assert!(!checklist.complete(ChecklistKey::AddProduct, later));
        assert_eq!(
            checklist.item(ChecklistKey::AddProduct).completed_at,
            Some(first)
        );
    }

    #[test]
    fn completing_one_item_leaves_the_rest_pending() {
        let mut checklist = Checklist::new();
        checklist.complete(ChecklistKey::AddAddress, Utc::now());

        for item in checklist.items() {
            if item.key == ChecklistKey::AddAddress {
                assert_eq!(item.status, ItemStatus::Completed);
            } else {
                assert_eq!(item.status, ItemStatus::Pending);
            }
        }
    }

    #[test]
    fn set_status_back_to_pending_clears_timestamp() {
        let mut checklist = Checklist::new();
        let now = Utc::now();
        checklist.set_status(ChecklistKey::ReviewFees, ItemStatus::Completed, now);
        assert_eq!(
            checklist.item(ChecklistKey::ReviewFees).completed_at,
            Some(now)
        );

        checklist.set_status(ChecklistKey::ReviewFees, ItemStatus::Pending, Utc::now());
        let item = checklist.item(ChecklistKey::ReviewFees);
        assert_eq!(item.status, ItemStatus::Pending);
        assert!(item.completed_at.is_none());
    }

    #[test]
    fn serializes_as_a_six_element_array() {
        let json = serde_json::to_value(Checklist::new()).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), CHECKLIST_LEN);
        assert_eq!(array[0]["key"], "add_product");
        assert_eq!(array[5]["key"], "invite_team");
        assert_eq!(array[0]["status"], "pending");
    }

    #[test]
    fn deserializing_a_wrong_length_array_fails() {
        let result = serde_json::from_str::<Checklist>(
            r#"[{"key":"add_product","status":"pending","completed_at":null}]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("ship_order".parse::<ChecklistKey>().is_err());
    }
}
