//! Core data types for the entry store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// One recorded financial transaction.
///
/// The `title` acts as the natural key for update and delete lookups. No
/// uniqueness is enforced at save time, so duplicate titles are possible;
/// update touches the first match and delete removes every match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Short descriptor of the entry
    pub title: String,

    /// Longer free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Amount spent or earned, signed
    pub amount: f64,

    /// Currency label, free-form (no ISO-4217 validation)
    pub currency: String,

    /// Date of the transaction; a dateless entry with `recurring` set is
    /// treated as applying to every queried month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Whether the transaction occurs every month
    pub recurring: bool,
}

impl BudgetEntry {
    pub fn new(
        title: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        recurring: bool,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            amount,
            currency: currency.into(),
            date: None,
            recurring,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Check whether this entry belongs to the given period.
    ///
    /// A dated entry matches when its date falls inside the period. A
    /// dateless entry matches any period when it is recurring.
    pub fn matches_period(&self, period: Period) -> bool {
        match self.date {
            Some(date) => period.contains(date),
            None => self.recurring,
        }
    }
}

/// A partial set of field updates applied to an existing entry.
///
/// Presence is explicit: `None` leaves the field unchanged, `Some(value)`
/// overwrites it, including `Some(0.0)` and `Some(false)`. There is no way to
/// clear an optional field through a patch.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub date: Option<NaiveDate>,
    pub recurring: Option<bool>,
}

impl EntryPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.currency.is_none()
            && self.date.is_none()
            && self.recurring.is_none()
    }

    /// Overwrite the fields of `entry` that are set in this patch.
    pub fn apply_to(&self, entry: &mut BudgetEntry) {
        if let Some(ref title) = self.title {
            entry.title = title.clone();
        }
        if let Some(ref description) = self.description {
            entry.description = Some(description.clone());
        }
        if let Some(amount) = self.amount {
            entry.amount = amount;
        }
        if let Some(ref currency) = self.currency {
            entry.currency = currency.clone();
        }
        if let Some(date) = self.date {
            entry.date = Some(date);
        }
        if let Some(recurring) = self.recurring {
            entry.recurring = recurring;
        }
    }
}
