//! Line items
//!
//! A row is either a flat amount or decomposed into labeled sub-items. A
//! decomposed row still carries its stored amount so that it round-trips, but
//! only the sub-items count towards totals.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::document::{RawRow, RawSubItem};
use super::money::Money;

/// One labeled entry of a row's breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSubItem")]
pub struct SubItem {
    pub label: String,
    pub amount: Money,
}

impl SubItem {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// How a row's value is represented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValue {
    /// The amount is authoritative
    Flat { amount: Money },

    /// The sum of `items` is authoritative; `amount` is kept but ignored.
    /// `items` is non-empty for every row built through `Row::from_parts`.
    Decomposed { amount: Money, items: Vec<SubItem> },
}

/// An income or expense line item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRow")]
pub struct Row {
    pub label: String,
    pub value: RowValue,
}

impl Row {
    /// Create a row with a flat amount
    pub fn flat(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            value: RowValue::Flat { amount },
        }
    }

    /// Create a row from its breakdown, with a zero stored amount
    pub fn decomposed(label: impl Into<String>, items: Vec<SubItem>) -> Self {
        Self::from_parts(label, Money::zero(), items)
    }

    /// Create a row from a stored amount and a possibly empty breakdown.
    ///
    /// A non-empty breakdown always wins over the amount; an empty one means
    /// the row is flat.
    pub fn from_parts(label: impl Into<String>, amount: Money, items: Vec<SubItem>) -> Self {
        let value = if items.is_empty() {
            RowValue::Flat { amount }
        } else {
            RowValue::Decomposed { amount, items }
        };
        Self {
            label: label.into(),
            value,
        }
    }

    /// The stored amount, whether or not it is authoritative
    pub fn amount(&self) -> Money {
        match &self.value {
            RowValue::Flat { amount } | RowValue::Decomposed { amount, .. } => *amount,
        }
    }

    /// The breakdown entries (empty for flat rows)
    pub fn breakdown(&self) -> &[SubItem] {
        match &self.value {
            RowValue::Flat { .. } => &[],
            RowValue::Decomposed { items, .. } => items,
        }
    }

    /// Whether the breakdown decides this row's value
    pub fn is_decomposed(&self) -> bool {
        !self.breakdown().is_empty()
    }

    /// The amount this row contributes to its section total
    pub fn effective_value(&self) -> Money {
        crate::budget::aggregate::effective_value(self)
    }

    /// Return a copy with the fields present in `patch` replaced
    pub fn patched(&self, patch: RowPatch) -> Self {
        let label = patch.label.unwrap_or_else(|| self.label.clone());
        let amount = patch.amount.unwrap_or_else(|| self.amount());
        let items = patch
            .breakdown
            .unwrap_or_else(|| self.breakdown().to_vec());
        Self::from_parts(label, amount, items)
    }

    /// Return a copy with `item` appended to the breakdown
    pub fn with_sub_item(&self, item: SubItem) -> Self {
        let mut items = self.breakdown().to_vec();
        items.push(item);
        Self::from_parts(self.label.clone(), self.amount(), items)
    }

    /// Return a copy with the sub-item at `index` patched, or `None` if there
    /// is no such sub-item
    pub fn with_sub_item_patched(&self, index: usize, patch: SubItemPatch) -> Option<Self> {
        let mut items = self.breakdown().to_vec();
        let item = items.get_mut(index)?;
        if let Some(label) = patch.label {
            item.label = label;
        }
        if let Some(amount) = patch.amount {
            item.amount = amount;
        }
        Some(Self::from_parts(self.label.clone(), self.amount(), items))
    }

    /// Return a copy without the sub-item at `index`, or `None` if there is no
    /// such sub-item. Removing the last sub-item makes the row flat again.
    pub fn without_sub_item(&self, index: usize) -> Option<Self> {
        let mut items = self.breakdown().to_vec();
        if index >= items.len() {
            return None;
        }
        items.remove(index);
        Some(Self::from_parts(self.label.clone(), self.amount(), items))
    }
}

impl AsRef<Row> for Row {
    fn as_ref(&self) -> &Row {
        self
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let breakdown = self.breakdown();
        let len = if breakdown.is_empty() { 2 } else { 3 };

        let mut state = serializer.serialize_struct("Row", len)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("amount", &self.amount())?;
        if !breakdown.is_empty() {
            state.serialize_field("breakdown", breakdown)?;
        }
        state.end()
    }
}

/// Field replacements for a row; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowPatch {
    pub label: Option<String>,
    pub amount: Option<Money>,
    pub breakdown: Option<Vec<SubItem>>,
}

impl RowPatch {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_breakdown(mut self, items: Vec<SubItem>) -> Self {
        self.breakdown = Some(items);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.amount.is_none() && self.breakdown.is_none()
    }
}

/// Field replacements for a sub-item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubItemPatch {
    pub label: Option<String>,
    pub amount: Option<Money>,
}

impl SubItemPatch {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.amount.is_none()
    }
}
