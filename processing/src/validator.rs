use crate::{
    error::ValidationError,
    model::{Money, PurchaseDate, PurchaseTime, Receipt, ValidatedItem, ValidatedReceipt},
};

/// Checks a submitted receipt and parses it into its typed form.
///
/// Checks run in a fixed order and stop at the first failure: items present,
/// retailer, total, each item (description, then price), purchase date,
/// purchase time.
pub fn validate(receipt: &Receipt) -> Result<ValidatedReceipt, ValidationError> {
    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    if !is_valid_retailer(&receipt.retailer) {
        return Err(ValidationError::Retailer(receipt.retailer.clone()));
    }

    let total =
        Money::parse(&receipt.total).ok_or_else(|| ValidationError::Total(receipt.total.clone()))?;
    check_limit(total, "total", &receipt.total)?;

    let items = receipt
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !is_valid_description(&item.short_description) {
                return Err(ValidationError::ItemDescription {
                    index,
                    value: item.short_description.clone(),
                });
            }
            let price = Money::parse(&item.price).ok_or_else(|| ValidationError::ItemPrice {
                index,
                value: item.price.clone(),
            })?;
            check_limit(price, &format!("items[{index}].price"), &item.price)?;
            Ok(ValidatedItem {
                short_description: item.short_description.clone(),
                price,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let purchase_date = PurchaseDate::parse(&receipt.purchase_date)
        .ok_or_else(|| ValidationError::PurchaseDate(receipt.purchase_date.clone()))?;

    let purchase_time = PurchaseTime::parse(&receipt.purchase_time)
        .ok_or_else(|| ValidationError::PurchaseTime(receipt.purchase_time.clone()))?;

    Ok(ValidatedReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        total,
        items,
    })
}

fn check_limit(amount: Money, field: &str, value: &str) -> Result<(), ValidationError> {
    if amount.is_within_limit() {
        return Ok(());
    }
    Err(ValidationError::AmountTooLarge {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn is_valid_retailer(retailer: &str) -> bool {
    !retailer.is_empty()
        && retailer
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '&')
}

fn is_valid_description(description: &str) -> bool {
    !description.trim().is_empty()
        && description
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace() || c == '-')
}
