// ============================================================================
// Collection Aggregation
// Sum a named numeric property across heterogeneous items
// ============================================================================

use super::finite::is_finite;
use super::operation::Operation;
use crate::domain::RoundingConfig;
use crate::numeric::{Operand, RoundingMode, VendNumber, DEFAULT_DECIMAL_POINTS};
use std::collections::{BTreeMap, HashMap};

/// Property access for items aggregated by [`sum_by`].
///
/// Returns `None` when the item has no such property; a present property may
/// still hold non-numeric junk.
pub trait Lookup {
    fn lookup(&self, property: &str) -> Option<Operand>;
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, property: &str) -> Option<Operand> {
        (**self).lookup(property)
    }
}

impl<T: Lookup> Lookup for Option<T> {
    fn lookup(&self, property: &str) -> Option<Operand> {
        self.as_ref().and_then(|item| item.lookup(property))
    }
}

impl<V> Lookup for HashMap<String, V>
where
    for<'a> &'a V: Into<Operand>,
{
    fn lookup(&self, property: &str) -> Option<Operand> {
        self.get(property).map(Into::into)
    }
}

impl<V> Lookup for BTreeMap<String, V>
where
    for<'a> &'a V: Into<Operand>,
{
    fn lookup(&self, property: &str) -> Option<Operand> {
        self.get(property).map(Into::into)
    }
}

#[cfg(feature = "serde")]
impl Lookup for serde_json::Value {
    /// Only objects have properties; every other JSON value yields `None`.
    fn lookup(&self, property: &str) -> Option<Operand> {
        self.as_object()
            .and_then(|object| object.get(property))
            .map(Operand::from)
    }
}

/// Sum `property` across `collection` and round the total half-up.
///
/// Items without the property, or whose property is not a finite number,
/// are skipped. A missing collection sums to zero. `decimal_points`
/// defaults to 2. Never fails.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use vend_number::engine::sum_by;
///
/// let lines: Vec<HashMap<String, f64>> = vec![
///     HashMap::from([("price".to_string(), 10.0)]),
///     HashMap::from([("price".to_string(), 2.156)]),
/// ];
/// assert_eq!(sum_by(Some(&lines), "price", None), "12.16");
/// assert_eq!(sum_by(None::<&Vec<HashMap<String, f64>>>, "price", None), "0.00");
/// ```
pub fn sum_by<I>(collection: Option<I>, property: &str, decimal_points: Option<u32>) -> String
where
    I: IntoIterator,
    I::Item: Lookup,
{
    let decimal_points = decimal_points.unwrap_or(DEFAULT_DECIMAL_POINTS);
    total(collection, property).to_fixed(decimal_points, RoundingMode::HalfUp)
}

/// Like [`sum_by`], rounding with the decimal points and mode of `config`.
pub fn sum_by_with_config<I>(
    collection: Option<I>,
    property: &str,
    config: &RoundingConfig,
) -> String
where
    I: IntoIterator,
    I::Item: Lookup,
{
    total(collection, property).to_fixed(config.decimal_points, config.mode)
}

/// [`sum_by`] over a JSON document; anything but an array sums to zero.
///
/// # Example
/// ```
/// use serde_json::json;
/// use vend_number::engine::sum_by_value;
///
/// let items = json!([{ "n": 1 }, { "n": "2" }, null, { "n": "x" }]);
/// assert_eq!(sum_by_value(&items, "n", Some(5)), "3.00000");
/// assert_eq!(sum_by_value(&json!("word"), "n", None), "0.00");
/// ```
#[cfg(feature = "serde")]
pub fn sum_by_value(
    collection: &serde_json::Value,
    property: &str,
    decimal_points: Option<u32>,
) -> String {
    sum_by(collection.as_array(), property, decimal_points)
}

fn total<I>(collection: Option<I>, property: &str) -> VendNumber
where
    I: IntoIterator,
    I::Item: Lookup,
{
    let Some(items) = collection else {
        return VendNumber::ZERO;
    };

    let mut total = VendNumber::ZERO;
    for (index, item) in items.into_iter().enumerate() {
        let Some(value) = item.lookup(property) else {
            continue;
        };
        if !is_finite(&value) {
            continue;
        }

        match Operation::Plus.fold(&[Operand::Decimal(total), value]) {
            Ok(sum) => total = sum,
            Err(err) => {
                tracing::warn!(index, property, "skipping item in sum: {}", err);
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[(&str, f64)]) -> Vec<HashMap<String, f64>> {
        values
            .iter()
            .map(|(key, value)| HashMap::from([(key.to_string(), *value)]))
            .collect()
    }

    #[test]
    fn test_sum_of_maps() {
        let items = rows(&[("num", 1.0), ("num", 2.0)]);
        assert_eq!(sum_by(Some(&items), "num", Some(5)), "3.00000");

        let items = rows(&[("num", 10.0), ("num", 2.156)]);
        assert_eq!(sum_by(Some(&items), "num", Some(2)), "12.16");

        let items = rows(&[("num", 1.1111), ("num", 1.1443)]);
        assert_eq!(sum_by(Some(&items), "num", Some(3)), "2.255");
    }

    #[test]
    fn test_missing_property_sums_to_zero() {
        let items = rows(&[("num", 1.0), ("num", 2.0)]);
        assert_eq!(sum_by(Some(&items), "X", Some(2)), "0.00");
    }

    #[test]
    fn test_empty_and_absent_collections() {
        let empty: Vec<HashMap<String, f64>> = Vec::new();
        assert_eq!(sum_by(Some(&empty), "num", None), "0.00");
        assert_eq!(sum_by(None::<&Vec<HashMap<String, f64>>>, "num", None), "0.00");
    }

    #[test]
    fn test_absent_items_are_skipped() {
        let items = vec![
            Some(HashMap::from([("n".to_string(), "4.5".to_string())])),
            None,
            Some(HashMap::from([("n".to_string(), "junk".to_string())])),
        ];
        assert_eq!(sum_by(Some(&items), "n", None), "4.50");
    }

    #[test]
    fn test_non_finite_values_are_skipped() {
        let items = rows(&[("n", 1.0), ("n", f64::INFINITY), ("n", f64::NAN), ("n", 2.5)]);
        assert_eq!(sum_by(Some(&items), "n", Some(1)), "3.5");
    }

    #[test]
    fn test_overflowing_literals_are_skipped() {
        let items: Vec<BTreeMap<String, String>> = vec![
            BTreeMap::from([("n".to_string(), "1e400".to_string())]),
            BTreeMap::from([("n".to_string(), "Infinity".to_string())]),
            BTreeMap::from([("n".to_string(), "7".to_string())]),
        ];
        assert_eq!(sum_by(Some(&items), "n", Some(0)), "7");
    }

    #[test]
    fn test_large_values_are_summed() {
        let items = rows(&[("n", 1e30), ("n", 1e30)]);
        assert_eq!(
            sum_by(Some(&items), "n", Some(1)),
            "2000000000000000000000000000000.0"
        );
    }

    #[test]
    fn test_sum_with_config() {
        let items = rows(&[("n", 0.125), ("n", 0.2)]);
        let config = RoundingConfig::bankers();
        assert_eq!(sum_by_with_config(Some(&items), "n", &config), "0.32");
        let config = RoundingConfig::truncating(1);
        assert_eq!(sum_by_with_config(Some(&items), "n", &config), "0.3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_sum_by_json() {
        use serde_json::json;

        for junk in [
            json!(["word"]),
            json!([]),
            json!(null),
            json!([true]),
            json!([null]),
            json!([{}]),
            json!({ "a": 1 }),
        ] {
            assert_eq!(sum_by_value(&junk, "a", None), "0.00", "{junk}");
        }

        let items = json!([{ "num": 1 }, { "num": 2 }]);
        assert_eq!(sum_by_value(&items, "num", Some(5)), "3.00000");
        assert_eq!(sum_by_value(&items, "X", Some(2)), "0.00");

        let items = json!([{ "n": "x" }]);
        assert_eq!(sum_by_value(&items, "bad", None), "0.00");
        assert_eq!(sum_by_value(&items, "n", None), "0.00");

        let mixed = json!([{ "n": 10 }, { "n": "2.156" }, { "n": false }, { "n": [1] }]);
        assert_eq!(sum_by_value(&mixed, "n", None), "12.16");
    }
}
