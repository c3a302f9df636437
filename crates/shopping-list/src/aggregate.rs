//! Cart aggregation: group by ingredient and unit, sum, sort.

use std::collections::BTreeMap;

use crate::line::{AggregatedLine, CartLine};

/// Merge cart lines into one line per `(ingredient_name, unit)` pair.
///
/// The result is sorted ascending by ingredient name, then by unit, whatever
/// the input order. Keys are compared exactly: `"Egg"` and `"egg"` stay
/// separate, as do `"g"` and `"kg"`. An empty input yields an empty list.
///
/// # Examples
/// ```
/// use shopping_list::{CartLine, aggregate};
///
/// let aggregated = aggregate([
///     CartLine::try_new("Salt", "g", 5).expect("valid line"),
///     CartLine::try_new("Egg", "pcs", 2).expect("valid line"),
///     CartLine::try_new("Salt", "g", 10).expect("valid line"),
/// ]);
///
/// let names: Vec<_> = aggregated.iter().map(|line| line.ingredient_name()).collect();
/// assert_eq!(names, ["Egg", "Salt"]);
/// assert_eq!(aggregated[1].total_amount(), 15);
/// ```
#[must_use]
pub fn aggregate<I>(lines: I) -> Vec<AggregatedLine>
where
    I: IntoIterator<Item = CartLine>,
{
    let mut totals: BTreeMap<(String, String), u64> = BTreeMap::new();
    for line in lines {
        let (ingredient_name, unit, amount) = line.into_parts();
        // u32 amounts summed into u64 cannot overflow for any in-memory cart.
        *totals.entry((ingredient_name, unit)).or_default() += u64::from(amount);
    }

    totals
        .into_iter()
        .map(|((ingredient_name, unit), total)| AggregatedLine::new(ingredient_name, unit, total))
        .collect()
}
