use serde::{Deserialize, Serialize};
use std::error::Error;

pub type ReceiptId = String;

pub type GenericError = Box<dyn Error + Send + Sync>;

/// A purchase receipt as submitted over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Non-negative monetary amount in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u64,
}

impl Money {
    /// Largest accepted amount, 1,000,000,000.00.
    pub const MAX_CENTS: u64 = 100_000_000_000;

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Parses `<digits>.<two digits>`. Signs, exponents and missing or extra
    /// fraction digits are rejected, as is anything overflowing `u64` cents.
    pub fn parse(value: &str) -> Option<Self> {
        let (whole, fraction) = value.split_once('.')?;
        if whole.is_empty() || fraction.len() != 2 {
            return None;
        }
        let whole = parse_digits(whole)?;
        let fraction = parse_digits(fraction)?;
        let cents = whole.checked_mul(100)?.checked_add(fraction)?;
        Some(Self { cents })
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn fractional_cents(&self) -> u64 {
        self.cents % 100
    }

    pub fn is_within_limit(&self) -> bool {
        self.cents <= Self::MAX_CENTS
    }
}

/// Calendar date in `YYYY-MM-DD` shape. Only the shape is checked, so values
/// like month 13 are carried through as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PurchaseDate {
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split('-');
        let year = fixed_width(parts.next()?, 4)?;
        let month = fixed_width(parts.next()?, 2)?;
        let day = fixed_width(parts.next()?, 2)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        })
    }
}

/// Time of day in `HH:MM` shape: hour starts with 0-2, minute with 0-5.
/// Hours up to 29 pass the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseTime {
    pub hour: u8,
    pub minute: u8,
}

impl PurchaseTime {
    pub fn parse(value: &str) -> Option<Self> {
        let (hour, minute) = value.split_once(':')?;
        if !matches!(hour.as_bytes().first(), Some(b'0'..=b'2'))
            || !matches!(minute.as_bytes().first(), Some(b'0'..=b'5'))
        {
            return None;
        }
        Some(Self {
            hour: fixed_width(hour, 2)? as u8,
            minute: fixed_width(minute, 2)? as u8,
        })
    }

    /// The time read as a plain `HHMM` integer, e.g. `14:05` is `1405`.
    pub fn as_hhmm(&self) -> u32 {
        u32::from(self.hour) * 100 + u32::from(self.minute)
    }
}

fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn fixed_width(value: &str, width: usize) -> Option<u64> {
    if value.len() != width {
        return None;
    }
    parse_digits(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    pub(crate) short_description: String,
    pub(crate) price: Money,
}

impl ValidatedItem {
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

/// A receipt that passed validation, with every field parsed into its typed
/// form. Only `validator::validate` constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub(crate) retailer: String,
    pub(crate) purchase_date: PurchaseDate,
    pub(crate) purchase_time: PurchaseTime,
    pub(crate) total: Money,
    pub(crate) items: Vec<ValidatedItem>,
}

impl ValidatedReceipt {
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> PurchaseDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> PurchaseTime {
        self.purchase_time
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn items(&self) -> &[ValidatedItem] {
        &self.items
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerResult {
    pub name: String,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}
