use super::error::{IntakeError, INVALID_ORDER_DATA};
use crate::model::{OrderLine, ProductId};
use crate::product_actor::ProductError;
use serde::Deserialize;

/// A guest checkout as posted by the order form or its AJAX variant.
///
/// `product_ids` and `quantities` are parallel lists: entry `i` of one belongs to entry `i`
/// of the other.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    pub product_ids: Option<Vec<u32>>,
    pub quantities: Option<Vec<i64>>,
}

impl OrderSubmission {
    /// Pairs ids with quantities, dropping lines whose quantity is zero or negative.
    ///
    /// # Errors
    /// * `Validation` if either list is missing or their lengths differ.
    /// * `StockUnavailable` for a quantity no stock counter can hold.
    pub fn lines(&self) -> Result<Vec<OrderLine>, IntakeError> {
        let (Some(ids), Some(quantities)) = (&self.product_ids, &self.quantities) else {
            return Err(IntakeError::Validation(INVALID_ORDER_DATA.into()));
        };
        if ids.len() != quantities.len() {
            return Err(IntakeError::Validation(INVALID_ORDER_DATA.into()));
        }

        ids.iter()
            .zip(quantities)
            .filter(|&(_, &quantity)| quantity > 0)
            .map(|(&id, &quantity)| {
                let quantity = u32::try_from(quantity).map_err(|_| {
                    IntakeError::StockUnavailable(ProductError::InvalidQuantity(u32::MAX))
                })?;
                Ok(OrderLine::new(ProductId(id), quantity))
            })
            .collect()
    }
}
