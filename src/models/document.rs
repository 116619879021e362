//! Stored-document shapes
//!
//! A month document in storage may be legacy, partially populated or edited by
//! hand. These types accept any of that: every field is optional and a value
//! of the wrong JSON type reads as absent instead of failing the whole
//! document. `budget::sanitize` turns them into the strict model.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::money::Money;
use super::month::{BudgetMonth, MonthTotals};
use super::row::{Row, SubItem};

/// A breakdown entry as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubItem {
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Money>,
}

/// A line item as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(
        default,
        deserialize_with = "lenient_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Money>,

    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub breakdown: Option<Vec<RawSubItem>>,
}

/// Month totals as stored; any of them may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTotals {
    #[serde(default, deserialize_with = "lenient_amount")]
    pub income: Option<Money>,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub expense: Option<Money>,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub remaining: Option<Money>,
}

/// A whole month document as stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBudgetMonth {
    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub incomes: Option<Vec<RawRow>>,

    #[serde(
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub expenses: Option<Vec<RawRow>>,

    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub totals: Option<RawTotals>,

    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient_timestamp",
        serialize_with = "chrono::serde::ts_milliseconds_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl RawBudgetMonth {
    /// Whether the document already has the canonical shape, i.e. reading it
    /// back would lose or invent nothing
    pub fn is_canonical(&self) -> bool {
        let rows_ok = |rows: &Option<Vec<RawRow>>| {
            rows.as_ref().is_some_and(|rows| {
                rows.iter().all(|row| {
                    row.label.is_some()
                        && row.amount.is_some()
                        && row.breakdown.as_ref().map_or(true, |items| {
                            !items.is_empty()
                                && items.iter().all(|i| i.label.is_some() && i.amount.is_some())
                        })
                })
            })
        };
        let totals_ok = self.totals.as_ref().is_some_and(|t| {
            t.income.is_some() && t.expense.is_some() && t.remaining.is_some()
        });

        rows_ok(&self.incomes) && rows_ok(&self.expenses) && totals_ok
    }
}

impl From<&SubItem> for RawSubItem {
    fn from(item: &SubItem) -> Self {
        Self {
            label: Some(item.label.clone()),
            amount: Some(item.amount),
        }
    }
}

impl From<&Row> for RawRow {
    fn from(row: &Row) -> Self {
        let breakdown = row.breakdown();
        Self {
            label: Some(row.label.clone()),
            amount: Some(row.amount()),
            breakdown: if breakdown.is_empty() {
                None
            } else {
                Some(breakdown.iter().map(RawSubItem::from).collect())
            },
        }
    }
}

impl From<&MonthTotals> for RawTotals {
    fn from(totals: &MonthTotals) -> Self {
        Self {
            income: Some(totals.income),
            expense: Some(totals.expense),
            remaining: Some(totals.remaining),
        }
    }
}

impl From<&BudgetMonth> for RawBudgetMonth {
    fn from(month: &BudgetMonth) -> Self {
        Self {
            incomes: Some(month.incomes().iter().map(|r| RawRow::from(r.as_ref())).collect()),
            expenses: Some(month.expenses().iter().map(|r| RawRow::from(r.as_ref())).collect()),
            totals: Some(RawTotals::from(month.totals())),
            created_at: month.created_at(),
        }
    }
}

fn lenient_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Money>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}
