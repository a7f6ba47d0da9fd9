use crate::{
    category::Category,
    data::{Error, BAR_SYMBOL, CHART_TITLE},
};
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// Share of the total spending for each category, in percents. Each share is first
/// rounded to a tenth (half to even), so results are always multiples of 10 and
/// anything between two gradations ends up on one of them.
pub fn spend_percentages(categories: &[Category]) -> Result<Vec<u32>, Error> {
    let subtotals = categories
        .iter()
        .map(Category::spent)
        .collect::<Result<Vec<_>, _>>()?;
    let total = subtotals.iter().try_fold(Decimal::ZERO, |total, subtotal| {
        total.checked_add(*subtotal).ok_or(Error::Overflow)
    })?;
    if total.is_zero() {
        return Err(Error::NoSpendingData);
    }
    let percentages: Vec<u32> = subtotals
        .iter()
        .map(|subtotal| {
            let tenths = (*subtotal / total)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
                * Decimal::TEN;
            // a share is within [0, 1], so this always fits
            tenths.to_u32().unwrap_or_default() * 10
        })
        .collect();
    tracing::debug!(%total, ?percentages, "spend percentages");
    Ok(percentages)
}

/// Renders the vertical bar chart of how spending splits between `categories`, with
/// bars and rotated names laid out left to right in the given order:
/// ```text
/// Percentage spent by category
/// 100|
///  ...
///  10| o  o  o
///   0| o  o  o
///     ----------
///      F  C  A
///      o  l  u
/// ```
/// Fails with `Error::NoSpendingData` when nothing was spent at all (this includes an
/// empty list), since there's nothing to split, and with `Error::Overflow` when the
/// spending can't even be added up.
pub fn render_chart(categories: &[Category]) -> Result<String, Error> {
    let percentages = spend_percentages(categories)?;
    let mut lines = vec![CHART_TITLE.to_string()];

    for gradation in (0..=100).rev().step_by(10) {
        let mut row = format!("{gradation:>3}|");
        for &percent in &percentages {
            let mark = if percent >= gradation { BAR_SYMBOL } else { ' ' };
            row.push(' ');
            row.push(mark);
            row.push(' ');
        }
        row.push_str("   ");
        lines.push(row);
    }

    lines.push(format!("    {}-", "---".repeat(categories.len())));

    let names: Vec<Vec<char>> = categories.iter().map(|c| c.name.chars().collect()).collect();
    let longest = names.iter().map(Vec::len).max().unwrap_or_default();
    for position in 0..longest {
        let mut row = String::from("   ");
        for name in &names {
            row.push_str("  ");
            row.push(name.get(position).copied().unwrap_or(' '));
        }
        lines.push(row);
    }

    Ok(lines.join("\n"))
}
