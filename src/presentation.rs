//! # Presentation adapter
//!
//! The web layer lives outside this crate. This module decides what it should send back
//! for an intake result: AJAX callers get a JSON body, browser form posts get a redirect to
//! the order summary or the entry form again with an error message.

use crate::intake::{IntakeError, PlacedOrder};
use crate::model::OrderId;
use serde::Serialize;

pub const AJAX_HEADER: &str = "X-Requested-With";
const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";

/// True when the `X-Requested-With` header marks the request as AJAX.
pub fn is_ajax(header_value: Option<&str>) -> bool {
    header_value == Some(AJAX_HEADER_VALUE)
}

/// JSON body for AJAX checkouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IntakeJson {
    #[serde(rename_all = "camelCase")]
    Placed {
        success: bool,
        order_id: u32,
        order_number: String,
    },
    #[serde(rename_all = "camelCase")]
    Failed { success: bool, error_message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeResponse {
    Json(IntakeJson),
    Redirect { location: String },
    /// Re-display the entry form with this message.
    Form { error_message: String },
}

pub fn order_summary_path(id: OrderId) -> String {
    format!("/Orders/OrderSummary/{}", id.0)
}

/// Renders an intake result for the caller.
pub fn respond(result: &Result<PlacedOrder, IntakeError>, ajax: bool) -> IntakeResponse {
    match (result, ajax) {
        (Ok(placed), true) => IntakeResponse::Json(IntakeJson::Placed {
            success: true,
            order_id: placed.order_id.0,
            order_number: placed.order_number.clone(),
        }),
        (Ok(placed), false) => IntakeResponse::Redirect {
            location: order_summary_path(placed.order_id),
        },
        (Err(e), true) => IntakeResponse::Json(IntakeJson::Failed {
            success: false,
            error_message: e.user_message().to_string(),
        }),
        (Err(e), false) => IntakeResponse::Form {
            error_message: e.user_message().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{INVALID_ORDER_DATA, STORE_FAILURE};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn placed() -> Result<PlacedOrder, IntakeError> {
        Ok(PlacedOrder {
            order_id: OrderId(7),
            order_number: "ORD-20240315-4821".into(),
            total_amount: Decimal::new(2997, 2),
        })
    }

    #[test]
    fn test_is_ajax() {
        assert!(is_ajax(Some("XMLHttpRequest")));
        assert!(!is_ajax(Some("fetch")));
        assert!(!is_ajax(None));
    }

    #[test]
    fn test_ajax_success_json_shape() {
        let IntakeResponse::Json(body) = respond(&placed(), true) else {
            panic!("expected JSON");
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": true, "orderId": 7, "orderNumber": "ORD-20240315-4821"})
        );
    }

    #[test]
    fn test_ajax_failure_json_shape() {
        let failed = Err(IntakeError::Validation(INVALID_ORDER_DATA.into()));
        let IntakeResponse::Json(body) = respond(&failed, true) else {
            panic!("expected JSON");
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "errorMessage": "Invalid order data. Please try again."})
        );
    }

    #[test]
    fn test_form_post_redirects_or_redisplays() {
        assert_eq!(
            respond(&placed(), false),
            IntakeResponse::Redirect {
                location: "/Orders/OrderSummary/7".into()
            }
        );
        assert_eq!(
            respond(&Err(IntakeError::Store("Actor closed".into())), false),
            IntakeResponse::Form {
                error_message: STORE_FAILURE.into()
            }
        );
    }
}
