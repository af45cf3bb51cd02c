//! Unit tests for the Identifiers module

use core_kernel::{ExpenseId, UserId};

mod expense_id_tests {
    use super::*;

    #[test]
    fn test_new_v7_generates_unique_ids() {
        assert_ne!(ExpenseId::new_v7(), ExpenseId::new_v7());
    }

    #[test]
    fn test_display_sorts_in_creation_order() {
        let id1 = ExpenseId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = ExpenseId::new_v7();
        assert!(id1.to_string() < id2.to_string());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = ExpenseId::new_v7();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.to_string().trim_start_matches("EXP-")));
    }
}

mod user_id_tests {
    use super::*;

    #[test]
    fn test_new_and_display() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(id.as_str(), "u1");
        assert_eq!(id.to_string(), "u1");
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(UserId::new("").is_err());
        assert!("a b".parse::<UserId>().is_err());
        assert!("tab\t".parse::<UserId>().is_err());
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let id: UserId = serde_json::from_str("\"u4\"").unwrap();
        assert_eq!(id.as_str(), "u4");
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
