//! Identifier field-name rules
//!
//! Two rules exist and they are deliberately not the same:
//! - the allowlist (used when forcing values to decimal strings) knows the
//!   marketplace's snake_case keys such as `area_id`
//! - the generic suffix rule (used when converting to big integers) only
//!   knows `id`, `*Id` and `*ID`
//!
//! Every camelCase allowlist entry is also covered by the suffix rule, so
//! the two differ exactly on the snake_case names.

/// Domain-specific identifier keys, camelCase and snake_case
pub const IDENTIFIER_FIELDS: &[&str] = &[
    "id",
    "categoryId",
    "category_id",
    "originAreaId",
    "origin_area_id",
    "productId",
    "product_id",
    "farmerId",
    "farmer_id",
    "purchaserId",
    "purchaser_id",
    "orderId",
    "order_id",
    "contractId",
    "contract_id",
    "paymentId",
    "payment_id",
    "demandId",
    "demand_id",
    "dockingId",
    "docking_id",
    "areaId",
    "area_id",
    "userId",
    "user_id",
];

/// `id`, or a key ending in `Id` / `ID` (case-sensitive)
pub fn has_generic_id_suffix(key: &str) -> bool {
    key == "id" || key.ends_with("Id") || key.ends_with("ID")
}

/// Allowlist test: the suffix rule plus the enumerated domain keys
pub fn is_identifier_field(key: &str) -> bool {
    has_generic_id_suffix(key) || IDENTIFIER_FIELDS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_suffix() {
        assert!(has_generic_id_suffix("id"));
        assert!(has_generic_id_suffix("logisticsId"));
        assert!(has_generic_id_suffix("ownerID"));
        assert!(!has_generic_id_suffix("ID_CARD"));
        assert!(!has_generic_id_suffix("Id_"));
        assert!(!has_generic_id_suffix("idCardFront"));
        assert!(!has_generic_id_suffix("area_id"));
        assert!(!has_generic_id_suffix("valid"));
    }

    #[test]
    fn test_allowlist_covers_snake_case() {
        for key in ["category_id", "origin_area_id", "docking_id", "user_id"] {
            assert!(is_identifier_field(key), "{key}");
            assert!(!has_generic_id_suffix(key), "{key}");
        }
    }

    #[test]
    fn test_allowlist_camel_case_is_subsumed_by_suffix_rule() {
        for key in IDENTIFIER_FIELDS.iter().filter(|k| !k.contains('_')) {
            assert!(has_generic_id_suffix(key), "{key}");
        }
    }

    #[test]
    fn test_unrelated_keys() {
        assert!(!is_identifier_field("quantity"));
        assert!(!is_identifier_field("ID_CARD"));
        assert!(!is_identifier_field("logistics_id"));
    }
}
