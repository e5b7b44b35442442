//! Footer aggregation.
//!
//! Sums cover the rows currently rendered (the page window), not the whole
//! row store. For server-paged grids that is the only data the engine has.

use rust_decimal::Decimal;

use crate::cell::resolve_value;
use crate::column::Column;
use crate::model::{GridRow, Value};

/// Sum of one column over a row window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTotal {
    pub column_id: String,
    pub sum: Decimal,
}

/// Numeric contribution of a value; anything non-numeric counts as zero.
pub fn numeric_value(value: Option<&Value>) -> Decimal {
    value.and_then(Value::as_number).unwrap_or(Decimal::ZERO)
}

/// Sum `column` over `rows`.
pub fn sum_column<R: GridRow>(column: &Column<R>, rows: &[R]) -> Decimal {
    let mut sum = Decimal::ZERO;
    for row in rows {
        let value = resolve_value(column, row);
        let amount = numeric_value(value.as_ref());
        match sum.checked_add(amount) {
            Some(next) => sum = next,
            None => {
                log::warn!(
                    "Sum of column '{}' overflowed; keeping partial total {}",
                    column.id,
                    sum
                );
                break;
            }
        }
    }
    sum
}

/// Totals for every summable column in `columns`, in column order.
pub fn column_sums<'a, R, I>(columns: I, rows: &[R]) -> Vec<ColumnTotal>
where
    R: GridRow + 'a,
    I: IntoIterator<Item = &'a Column<R>>,
{
    columns
        .into_iter()
        .filter(|column| column.show_sum)
        .map(|column| ColumnTotal {
            column_id: column.id.clone(),
            sum: sum_column(column, rows),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().set("id", 1i64).set("amt", 100i64),
            Record::new().set("id", 2i64).set("amt", "200.50"),
            Record::new().set("id", 3i64).set("amt", 300.25f64),
        ]
    }

    #[test]
    fn test_sum_mixed_numeric_types() {
        let column: Column<Record> = Column::field("amt", "Amount").sum();
        assert_eq!(sum_column(&column, &rows()), Decimal::new(60075, 2));
    }

    #[test]
    fn test_missing_and_non_numeric_count_as_zero() {
        let column: Column<Record> = Column::field("amt", "Amount").sum();
        let rows = vec![
            Record::new().set("id", 1i64),
            Record::new().set("id", 2i64).set("amt", "n/a"),
            Record::new().set("id", 3i64).set("amt", true),
            Record::new().set("id", 4i64).set("amt", 5i64),
        ];
        assert_eq!(sum_column(&column, &rows), Decimal::from(5));
    }

    #[test]
    fn test_only_summable_columns() {
        let columns: Vec<Column<Record>> = vec![
            Column::field("id", "Id"),
            Column::field("amt", "Amount").sum(),
        ];
        let totals = column_sums(&columns, &rows()[..1]);
        assert_eq!(
            totals,
            vec![ColumnTotal {
                column_id: "amt".into(),
                sum: Decimal::from(100),
            }]
        );
    }

    #[test]
    fn test_column_without_accessor_sums_zero() {
        let column: Column<Record> = Column::new("derived", "Derived").sum();
        assert_eq!(sum_column(&column, &rows()), Decimal::ZERO);
    }

    #[test]
    fn test_overflow_keeps_partial_sum() {
        let column: Column<Record> = Column::field("amt", "Amount").sum();
        let rows = vec![
            Record::new().set("amt", Decimal::MAX),
            Record::new().set("amt", Decimal::MAX),
        ];
        assert_eq!(sum_column(&column, &rows), Decimal::MAX);
    }
}
