//! Form-layer validation utilities
//!
//! The tax calculator itself is permissive: it computes whatever its numeric
//! inputs yield. These validators are the documented place where input is
//! constrained, to be called by form handling before the engine is invoked.

use bigdecimal::BigDecimal;

use crate::types::{InvoiceError, InvoiceResult, ItemType, LineItem};

/// Validate that a GST rate lies within [0, 100]
pub fn validate_tax_rate(rate_percent: &BigDecimal) -> InvoiceResult<()> {
    if *rate_percent < BigDecimal::from(0) {
        return Err(InvoiceError::Validation(
            "Tax rate cannot be negative".to_string(),
        ));
    }

    if *rate_percent > BigDecimal::from(100) {
        return Err(InvoiceError::Validation(
            "Tax rate cannot exceed 100%".to_string(),
        ));
    }

    Ok(())
}

/// Validate that a monetary amount is not negative
pub fn validate_non_negative(amount: &BigDecimal, field: &str) -> InvoiceResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(InvoiceError::Validation(format!(
            "{field} cannot be negative"
        )))
    } else {
        Ok(())
    }
}

/// Validate that an entered monetary amount carries at most 2 decimal places
///
/// The engine rounds every taxable base to the money scale, so a sub-cent
/// figure would silently lose precision; forms reject it here instead.
pub fn validate_money_scale(amount: &BigDecimal, field: &str) -> InvoiceResult<()> {
    if amount.normalized().fractional_digit_count() > 2 {
        Err(InvoiceError::Validation(format!(
            "{field} cannot have more than 2 decimal places"
        )))
    } else {
        Ok(())
    }
}

/// Validate a line item before it enters the engine
///
/// Product lines must carry a non-negative quantity and unit price; service
/// lines must carry a non-negative amount at the money scale. Rates must lie
/// within [0, 100]. Unit prices may carry sub-cent precision (per-unit rates
/// are often quoted finer than a paisa); the derived line amount is rounded.
pub fn validate_line_item(line: &LineItem) -> InvoiceResult<()> {
    if line.description.trim().is_empty() {
        return Err(InvoiceError::Validation(
            "Line description cannot be empty".to_string(),
        ));
    }

    validate_tax_rate(&line.tax_rate_percent)?;

    match line.item_type {
        ItemType::Product => {
            let quantity = line.quantity.as_ref().ok_or_else(|| {
                InvoiceError::Validation("Product line requires a quantity".to_string())
            })?;
            let unit_price = line.unit_price.as_ref().ok_or_else(|| {
                InvoiceError::Validation("Product line requires a unit price".to_string())
            })?;
            validate_non_negative(quantity, "Quantity")?;
            validate_non_negative(unit_price, "Unit price")?;
        }
        ItemType::Service => {
            validate_non_negative(&line.amount, "Amount")?;
            validate_money_scale(&line.amount, "Amount")?;
        }
    }

    Ok(())
}

/// Validate every line of an invoice
pub fn validate_line_items(lines: &[LineItem]) -> InvoiceResult<()> {
    for line in lines {
        validate_line_item(line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_outside_range_is_rejected() {
        assert!(validate_tax_rate(&BigDecimal::from(0)).is_ok());
        assert!(validate_tax_rate(&BigDecimal::from(100)).is_ok());
        assert!(validate_tax_rate(&BigDecimal::from(-1)).is_err());
        assert!(validate_tax_rate(&BigDecimal::from(101)).is_err());
    }

    #[test]
    fn product_without_quantity_is_rejected() {
        let mut line = LineItem::product(
            "Widget",
            BigDecimal::from(1),
            BigDecimal::from(100),
            BigDecimal::from(18),
            None,
        );
        assert!(validate_line_item(&line).is_ok());

        line.quantity = None;
        assert!(validate_line_item(&line).is_err());
    }

    #[test]
    fn negative_service_amount_is_rejected() {
        let line = LineItem::service(
            "Refund entered as a line",
            BigDecimal::from(-500),
            BigDecimal::from(18),
            None,
        );
        assert!(validate_line_item(&line).is_err());
    }

    #[test]
    fn sub_cent_service_amount_is_rejected() {
        let line = LineItem::service(
            "Fractional paise",
            "1234.567".parse().unwrap(),
            BigDecimal::from(18),
            None,
        );
        assert!(validate_line_item(&line).is_err());

        // Trailing zeros are not extra precision
        let line = LineItem::service(
            "Two places",
            "1234.5600".parse().unwrap(),
            BigDecimal::from(18),
            None,
        );
        assert!(validate_line_item(&line).is_ok());
    }

    #[test]
    fn blank_description_is_rejected() {
        let line = LineItem::service(
            "  ",
            BigDecimal::from(100),
            BigDecimal::from(18),
            None,
        );
        assert!(validate_line_item(&line).is_err());
    }
}
