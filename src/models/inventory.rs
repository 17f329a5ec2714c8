use serde::{Deserialize, Serialize};

/// One row of the `inventory` table. `id` is assigned by the store (`serial`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
}

/// Rows written by every initialize call, in insertion order.
pub static SEED_ITEMS: &[(&str, i32)] = &[("banana", 150), ("orange", 154), ("apple", 100)];

/// Fixed target of the update operation: (name, new quantity).
pub const UPDATE_TARGET: (&str, i32) = ("banana", 200);

/// Fixed target of the delete operation.
pub const DELETE_TARGET: &str = "orange";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_object() {
        let item = InventoryItem {
            id: 1,
            name: "banana".to_string(),
            quantity: 150,
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({ "id": 1, "name": "banana", "quantity": 150 })
        );
    }

    #[test]
    fn empty_list_serializes_as_empty_array() {
        let items: Vec<InventoryItem> = Vec::new();
        assert_eq!(serde_json::to_string(&items).unwrap(), "[]");
    }

    #[test]
    fn targets_refer_to_seeded_rows() {
        assert!(SEED_ITEMS.iter().any(|(name, _)| *name == UPDATE_TARGET.0));
        assert!(SEED_ITEMS.iter().any(|(name, _)| *name == DELETE_TARGET));
    }
}
