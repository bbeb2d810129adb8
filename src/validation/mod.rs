//! Pure payload validation. Every function here takes a raw payload and
//! returns either a fully-typed, trimmed value or an ordered list of
//! field-level violations. The same functions run on create and on replace,
//! so the two paths cannot drift.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::models::{InventoryPayload, NewInventoryItem, NewWarehouse, WarehousePayload};

/// One rejected field: which field and why, in words a client can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// local@domain.tld: exactly one "@", non-empty local part, domain with at
// least one dot and a 2+ letter top-level segment.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email regex"));

// Optional leading "+" and country code, then digits grouped 3-3-4 with
// space/dash/dot separators and optional parentheses around the area code.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{0,3}[\s.-]?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}$")
        .expect("phone regex")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Validate a warehouse create/replace payload. Violations come back in
/// field-declaration order, format checks directly after the presence check
/// for the same field.
pub fn validate_warehouse(payload: &WarehousePayload) -> Result<NewWarehouse, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let warehouse_name = required_string(&mut violations, "warehouse_name", &payload.warehouse_name);
    let address = required_string(&mut violations, "address", &payload.address);
    let city = required_string(&mut violations, "city", &payload.city);
    let country = required_string(&mut violations, "country", &payload.country);
    let contact_name = required_string(&mut violations, "contact_name", &payload.contact_name);
    let contact_position =
        required_string(&mut violations, "contact_position", &payload.contact_position);

    let contact_phone = required_string(&mut violations, "contact_phone", &payload.contact_phone);
    if let Some(phone) = contact_phone.as_deref() {
        if !is_valid_phone(phone) {
            violations.push(FieldViolation::new(
                "contact_phone",
                "contact_phone must be a valid phone number",
            ));
        }
    }

    let contact_email = required_string(&mut violations, "contact_email", &payload.contact_email);
    if let Some(email) = contact_email.as_deref() {
        if !is_valid_email(email) {
            violations.push(FieldViolation::new(
                "contact_email",
                "contact_email must be a valid email address",
            ));
        }
    }

    match (
        warehouse_name,
        address,
        city,
        country,
        contact_name,
        contact_position,
        contact_phone,
        contact_email,
    ) {
        (
            Some(warehouse_name),
            Some(address),
            Some(city),
            Some(country),
            Some(contact_name),
            Some(contact_position),
            Some(contact_phone),
            Some(contact_email),
        ) if violations.is_empty() => Ok(NewWarehouse {
            warehouse_name,
            address,
            city,
            country,
            contact_name,
            contact_position,
            contact_phone,
            contact_email,
        }),
        _ => Err(violations),
    }
}

/// Validate an inventory create/replace payload. Field order matches the
/// wire payload: warehouse_id, item_name, description, category, status,
/// quantity.
pub fn validate_inventory(
    payload: &InventoryPayload,
) -> Result<NewInventoryItem, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let warehouse_id = match payload.warehouse_id.as_ref().and_then(parse_integer) {
        Some(id) => Some(id),
        None => {
            violations.push(FieldViolation::new(
                "warehouse_id",
                "warehouse_id must be an integer",
            ));
            None
        }
    };

    let item_name = required_string(&mut violations, "item_name", &payload.item_name);
    let description = required_string(&mut violations, "description", &payload.description);
    let category = required_string(&mut violations, "category", &payload.category);
    let status = required_string(&mut violations, "status", &payload.status);

    let quantity = match payload.quantity.as_ref().and_then(parse_integer) {
        Some(q) if q >= 0 => Some(q),
        _ => {
            violations.push(FieldViolation::new(
                "quantity",
                "quantity must be a number and greater than or equal to 0",
            ));
            None
        }
    };

    match (warehouse_id, item_name, description, category, status, quantity) {
        (Some(warehouse_id), Some(item_name), Some(description), Some(category), Some(status), Some(quantity))
            if violations.is_empty() =>
        {
            Ok(NewInventoryItem {
                warehouse_id,
                item_name,
                description,
                category,
                status,
                quantity,
            })
        }
        _ => Err(violations),
    }
}

/// Present and non-empty after trimming, or a violation naming the field.
fn required_string(
    violations: &mut Vec<FieldViolation>,
    field: &str,
    value: &Option<String>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Some(trimmed.to_string()),
        _ => {
            violations.push(FieldViolation::new(field, format!("{field} is required")));
            None
        }
    }
}

/// Accepts a JSON number (integral, in i32 range) or a numeric string.
fn parse_integer(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn warehouse_payload() -> WarehousePayload {
        WarehousePayload {
            warehouse_name: Some("W1".to_string()),
            address: Some("A".to_string()),
            city: Some("C".to_string()),
            country: Some("US".to_string()),
            contact_name: Some("N".to_string()),
            contact_position: Some("Mgr".to_string()),
            contact_phone: Some("555-123-4567".to_string()),
            contact_email: Some("a@b.com".to_string()),
        }
    }

    fn inventory_payload() -> InventoryPayload {
        InventoryPayload {
            warehouse_id: Some(json!(1)),
            item_name: Some("Widget".to_string()),
            description: Some("d".to_string()),
            category: Some("cat".to_string()),
            status: Some("In Stock".to_string()),
            quantity: Some(json!(5)),
        }
    }

    // ── Warehouse ──────────────────────────────────────────────────────────

    #[test]
    fn valid_warehouse_passes() {
        let validated = validate_warehouse(&warehouse_payload()).unwrap();
        assert_eq!(validated.warehouse_name, "W1");
        assert_eq!(validated.contact_email, "a@b.com");
    }

    #[test]
    fn each_missing_warehouse_field_is_named() {
        let fields = [
            "warehouse_name",
            "address",
            "city",
            "country",
            "contact_name",
            "contact_position",
            "contact_phone",
            "contact_email",
        ];
        for field in fields {
            let mut payload = warehouse_payload();
            match field {
                "warehouse_name" => payload.warehouse_name = None,
                "address" => payload.address = None,
                "city" => payload.city = None,
                "country" => payload.country = None,
                "contact_name" => payload.contact_name = None,
                "contact_position" => payload.contact_position = None,
                "contact_phone" => payload.contact_phone = None,
                "contact_email" => payload.contact_email = None,
                _ => unreachable!(),
            }
            let violations = validate_warehouse(&payload).unwrap_err();
            assert_eq!(violations.len(), 1, "field: {field}");
            assert_eq!(violations[0].field, field);
        }
    }

    #[test]
    fn whitespace_only_field_is_rejected() {
        let mut payload = warehouse_payload();
        payload.city = Some("   ".to_string());
        let violations = validate_warehouse(&payload).unwrap_err();
        assert_eq!(violations[0].field, "city");
    }

    #[test]
    fn fields_are_trimmed() {
        let mut payload = warehouse_payload();
        payload.warehouse_name = Some("  W1  ".to_string());
        let validated = validate_warehouse(&payload).unwrap();
        assert_eq!(validated.warehouse_name, "W1");
    }

    #[test]
    fn empty_warehouse_payload_lists_all_fields_in_order() {
        let violations = validate_warehouse(&WarehousePayload::default()).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "warehouse_name",
                "address",
                "city",
                "country",
                "contact_name",
                "contact_position",
                "contact_phone",
                "contact_email",
            ]
        );
    }

    // ── Email ──────────────────────────────────────────────────────────────

    #[test]
    fn accepts_plain_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn invalid_email_names_the_field() {
        let mut payload = warehouse_payload();
        payload.contact_email = Some("not-an-email".to_string());
        let violations = validate_warehouse(&payload).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "contact_email");
    }

    // ── Phone ──────────────────────────────────────────────────────────────

    #[test]
    fn accepts_common_phone_shapes() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("+44 555 123 4567"));
    }

    #[test]
    fn rejects_malformed_phones() {
        assert!(!is_valid_phone("not-a-phone"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone("555-123-45678"));
    }

    #[test]
    fn invalid_phone_names_the_field() {
        let mut payload = warehouse_payload();
        payload.contact_phone = Some("12".to_string());
        let violations = validate_warehouse(&payload).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "contact_phone");
    }

    // ── Inventory ──────────────────────────────────────────────────────────

    #[test]
    fn valid_inventory_passes() {
        let validated = validate_inventory(&inventory_payload()).unwrap();
        assert_eq!(validated.warehouse_id, 1);
        assert_eq!(validated.quantity, 5);
    }

    #[test]
    fn numeric_string_ids_are_accepted() {
        let mut payload = inventory_payload();
        payload.warehouse_id = Some(json!("7"));
        payload.quantity = Some(json!("12"));
        let validated = validate_inventory(&payload).unwrap();
        assert_eq!(validated.warehouse_id, 7);
        assert_eq!(validated.quantity, 12);
    }

    #[test]
    fn missing_warehouse_id_is_rejected() {
        let mut payload = inventory_payload();
        payload.warehouse_id = None;
        let violations = validate_inventory(&payload).unwrap_err();
        assert_eq!(violations[0].field, "warehouse_id");
    }

    #[test]
    fn non_integer_warehouse_id_is_rejected() {
        let mut payload = inventory_payload();
        payload.warehouse_id = Some(json!("abc"));
        let violations = validate_inventory(&payload).unwrap_err();
        assert_eq!(violations[0].field, "warehouse_id");
    }

    #[test]
    fn negative_quantity_names_the_field() {
        let mut payload = inventory_payload();
        payload.quantity = Some(json!(-1));
        let violations = validate_inventory(&payload).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "quantity");
        assert!(violations[0].message.contains("quantity"));
    }

    #[test]
    fn zero_quantity_is_allowed() {
        let mut payload = inventory_payload();
        payload.quantity = Some(json!(0));
        let validated = validate_inventory(&payload).unwrap();
        assert_eq!(validated.quantity, 0);
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let mut payload = inventory_payload();
        payload.quantity = Some(json!(1.5));
        let violations = validate_inventory(&payload).unwrap_err();
        assert_eq!(violations[0].field, "quantity");
    }

    #[test]
    fn empty_inventory_payload_lists_all_fields_in_order() {
        let violations = validate_inventory(&InventoryPayload::default()).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "warehouse_id",
                "item_name",
                "description",
                "category",
                "status",
                "quantity",
            ]
        );
    }
}
