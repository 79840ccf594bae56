//! Route handlers, one module per resource.

pub mod precipitation;
pub mod stations;
pub mod temperature;

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// Ordered list of single-entry objects `{"YYYY-MM-DD": "<value>"}`, one per
/// record, preserving query order.
///
/// Every value is coerced to a string, matching the wire shape of the
/// precipitation and tobs feeds. The full-record paths keep native JSON
/// types instead.
pub(crate) fn keyed_by_date<I, V>(rows: I) -> Vec<Map<String, Value>>
where
    I: IntoIterator<Item = (NaiveDate, V)>,
    V: ToString,
{
    rows.into_iter()
        .map(|(date, value)| {
            let mut entry = Map::new();
            entry.insert(date.to_string(), Value::String(value.to_string()));
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_by_date_one_entry_per_record() {
        let date = NaiveDate::from_ymd_opt(2016, 8, 1).unwrap();
        let rows = vec![(date, 0), (date.succ_opt().unwrap(), 5)];

        let keyed = keyed_by_date(rows);
        assert_eq!(keyed.len(), 2);
        for entry in &keyed {
            assert_eq!(entry.len(), 1);
        }
        assert_eq!(keyed[0].get("2016-08-01"), Some(&Value::String("0".into())));
        assert_eq!(keyed[1].get("2016-08-02"), Some(&Value::String("5".into())));
    }
}
