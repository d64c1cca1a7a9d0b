//! Plain data types stored by the actors, plus their create/update payloads.

pub mod category;
pub mod order;
pub mod product;

pub use category::*;
pub use order::*;
pub use product::*;

use validator::ValidationError;

/// Required text: rejects values that are empty once trimmed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use validator::Validate;

    #[test]
    fn test_whitespace_only_names_are_rejected() {
        assert!(CategoryCreate::new("  ").validate().is_err());
        assert!(ProductCreate::new(" \t", Decimal::ONE, 1).validate().is_err());
        let update = ProductUpdate {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
        let update = CategoryUpdate {
            name: Some("\n".into()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let guest = OrderCreate {
            guest_name: "   ".into(),
            guest_email: "guest@example.com".into(),
            lines: Vec::new(),
        };
        assert!(guest.validate().is_err());
    }

    #[test]
    fn test_padded_names_are_accepted() {
        assert!(CategoryCreate::new(" Food ").validate().is_ok());
        assert!(ProductCreate::new("Tea ", Decimal::ONE, 1).validate().is_ok());
    }
}
