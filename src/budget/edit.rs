//! Month edits
//!
//! Every edit borrows the month and returns a new one with its totals already
//! recomputed. On error the receiver is left exactly as it was.

use std::sync::Arc;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMonth, Row, RowPatch, Section, SubItem, SubItemPatch};

impl BudgetMonth {
    /// Append a row to the end of a section. Labels may repeat.
    pub fn add_row(&self, section: Section, row: Row) -> BudgetMonth {
        let mut next = self.clone();
        next.rows_mut(section).push(Arc::new(row));
        next.with_computed_totals()
    }

    /// Replace the fields present in `patch` on the row at `index`
    pub fn update_row(
        &self,
        section: Section,
        index: usize,
        patch: RowPatch,
    ) -> BudgetResult<BudgetMonth> {
        self.replace_row(section, index, |row| Ok(row.patched(patch)))
    }

    /// Remove the row at `index`, keeping the order of the others
    pub fn remove_row(&self, section: Section, index: usize) -> BudgetResult<BudgetMonth> {
        self.check_row(section, index)?;

        let mut next = self.clone();
        next.rows_mut(section).remove(index);
        Ok(next.with_computed_totals())
    }

    /// Append a sub-item to the breakdown of the row at `index`
    pub fn add_sub_item(
        &self,
        section: Section,
        index: usize,
        item: SubItem,
    ) -> BudgetResult<BudgetMonth> {
        self.replace_row(section, index, |row| Ok(row.with_sub_item(item)))
    }

    /// Patch the sub-item at `sub_index` of the row at `index`
    pub fn update_sub_item(
        &self,
        section: Section,
        index: usize,
        sub_index: usize,
        patch: SubItemPatch,
    ) -> BudgetResult<BudgetMonth> {
        self.replace_row(section, index, |row| {
            row.with_sub_item_patched(sub_index, patch).ok_or_else(|| {
                BudgetError::sub_item_out_of_range(section, index, sub_index, row.breakdown().len())
            })
        })
    }

    /// Remove the sub-item at `sub_index` of the row at `index`
    pub fn remove_sub_item(
        &self,
        section: Section,
        index: usize,
        sub_index: usize,
    ) -> BudgetResult<BudgetMonth> {
        self.replace_row(section, index, |row| {
            row.without_sub_item(sub_index).ok_or_else(|| {
                BudgetError::sub_item_out_of_range(section, index, sub_index, row.breakdown().len())
            })
        })
    }

    /// A full copy of every row, custom ones included, with no write time
    pub fn duplicate(&self) -> BudgetMonth {
        let copy = |rows: &[Arc<Row>]| -> Vec<Row> { rows.iter().map(|r| Row::clone(r)).collect() };
        BudgetMonth::new(copy(self.incomes()), copy(self.expenses()))
    }

    fn check_row(&self, section: Section, index: usize) -> BudgetResult<&Row> {
        self.row(section, index)
            .ok_or_else(|| BudgetError::row_out_of_range(section, index, self.rows(section).len()))
    }

    fn replace_row<F>(&self, section: Section, index: usize, edit: F) -> BudgetResult<BudgetMonth>
    where
        F: FnOnce(&Row) -> BudgetResult<Row>,
    {
        let updated = edit(self.check_row(section, index)?)?;

        let mut next = self.clone();
        next.rows_mut(section)[index] = Arc::new(updated);
        Ok(next.with_computed_totals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthTotals, RowValue};

    fn eur(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn sample() -> BudgetMonth {
        BudgetMonth::new(
            vec![Row::flat("Nómina", eur(200000))],
            vec![
                Row::flat("Vivienda", eur(80000)),
                Row::flat("Transporte", eur(65000)),
                Row::flat("Gimnasio", eur(3000)),
            ],
        )
    }

    #[test]
    fn test_add_row_appends_and_recomputes() {
        let month = sample();
        let next = month.add_row(Section::Expenses, Row::flat("Vivienda", eur(1000)));

        assert_eq!(next.expenses().len(), 4);
        assert_eq!(next.expenses()[3].label, "Vivienda");
        assert_eq!(next.totals().expense, eur(149000));
        // The input is untouched
        assert_eq!(month.expenses().len(), 3);
        assert_eq!(month.totals().expense, eur(148000));
    }

    #[test]
    fn test_update_row_patches_fields() {
        let month = sample();
        let next = month
            .update_row(Section::Incomes, 0, RowPatch::default().with_amount(eur(210000)))
            .unwrap();

        assert_eq!(next.incomes()[0].label, "Nómina");
        assert_eq!(next.totals(), &MonthTotals::new(eur(210000), eur(148000)));
        assert_eq!(month.incomes()[0].amount(), eur(200000));
    }

    #[test]
    fn test_update_row_out_of_range() {
        let month = sample();
        let err = month
            .update_row(Section::Incomes, 1, RowPatch::default().with_label("x"))
            .unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_remove_row_preserves_order() {
        let next = sample().remove_row(Section::Expenses, 1).unwrap();
        let labels: Vec<_> = next.expenses().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Vivienda", "Gimnasio"]);
        assert_eq!(next.totals().expense, eur(83000));
    }

    #[test]
    fn test_remove_row_out_of_range_leaves_month_unchanged() {
        let month = sample();
        let before = month.clone();

        let err = month.remove_row(Section::Expenses, 99).unwrap_err();
        assert!(matches!(
            err,
            BudgetError::OutOfRange { index: 99, len: 3, .. }
        ));
        assert_eq!(month, before);
    }

    #[test]
    fn test_edits_do_not_alias() {
        let month = sample();
        let edited = month
            .update_row(Section::Expenses, 0, RowPatch::default().with_label("Alquiler"))
            .unwrap();

        assert_eq!(month.expenses()[0].label, "Vivienda");
        assert_eq!(edited.expenses()[0].label, "Alquiler");
        // Untouched rows are shared, not copied
        assert!(Arc::ptr_eq(&month.expenses()[1], &edited.expenses()[1]));
        assert!(!Arc::ptr_eq(&month.expenses()[0], &edited.expenses()[0]));
    }

    #[test]
    fn test_sub_item_edits_recompute_totals() {
        let month = BudgetMonth::new(vec![], vec![Row::flat("Alimentación", eur(30000))]);

        let month = month
            .add_sub_item(Section::Expenses, 0, SubItem::new("Pollo", eur(2000)))
            .unwrap();
        let month = month
            .add_sub_item(Section::Expenses, 0, SubItem::new("Mercadona", eur(5550)))
            .unwrap();
        assert_eq!(month.totals().expense, eur(7550));

        // The stored amount no longer matters
        let month = month
            .update_row(Section::Expenses, 0, RowPatch::default().with_amount(eur(1)))
            .unwrap();
        assert_eq!(month.totals().expense, eur(7550));

        let month = month
            .update_sub_item(
                Section::Expenses,
                0,
                1,
                SubItemPatch::default().with_amount(eur(6000)),
            )
            .unwrap();
        assert_eq!(month.totals().expense, eur(8000));

        let month = month.remove_sub_item(Section::Expenses, 0, 0).unwrap();
        let month = month.remove_sub_item(Section::Expenses, 0, 0).unwrap();
        assert_eq!(
            month.row(Section::Expenses, 0).unwrap().value,
            RowValue::Flat { amount: eur(1) }
        );
        assert_eq!(month.totals().expense, eur(1));
    }

    #[test]
    fn test_sub_item_out_of_range() {
        let month = BudgetMonth::new(vec![], vec![Row::flat("Alimentación", eur(30000))]);

        let err = month.remove_sub_item(Section::Expenses, 0, 0).unwrap_err();
        assert!(matches!(err, BudgetError::OutOfRange { index: 0, len: 0, .. }));

        let err = month
            .add_sub_item(Section::Expenses, 5, SubItem::new("x", eur(1)))
            .unwrap_err();
        assert!(matches!(err, BudgetError::OutOfRange { index: 5, len: 1, .. }));
    }

    #[test]
    fn test_duplicate_keeps_custom_rows_and_drops_write_time() {
        let month = sample()
            .add_row(Section::Expenses, Row::flat("Vacaciones", eur(50000)))
            .with_created_at(chrono::Utc::now());

        let copy = month.duplicate();
        assert_eq!(copy.expenses().len(), 4);
        assert_eq!(copy.expenses()[3].label, "Vacaciones");
        assert_eq!(copy.totals(), month.totals());
        assert!(copy.created_at().is_none());
        assert!(!Arc::ptr_eq(&copy.expenses()[0], &month.expenses()[0]));
    }
}
