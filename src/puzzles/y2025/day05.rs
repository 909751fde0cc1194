use std::ops::RangeInclusive;

use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct Cafeteria;

impl Solution for Cafeteria {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2025, 5)
    }

    fn title(&self) -> &'static str {
        "Cafeteria"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let Inventory { ranges, ingredients } = Inventory::parse(input)?;
        let fresh = FreshRanges::merge(ranges);

        let available = ingredients.iter().filter(|id| fresh.contains(**id)).count();

        Ok(Answers::new()
            .part("The count of fresh ingredients is", available)
            .part("The total count of fresh ingredients is", fresh.total()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Inventory {
    ranges: Vec<RangeInclusive<u64>>,
    ingredients: Vec<u64>,
}

impl Inventory {
    fn parse(input: &str) -> Result<Self, ParseError> {
        let text = puzzle::non_empty(input)?.replace("\r\n", "\n");

        let (ranges, ingredients) = text
            .split_once("\n\n")
            .ok_or(ParseError::MissingSection("ingredient ids"))?;

        let ranges = puzzle::lines(ranges)
            .map(|(line, text)| {
                let (start, end) = text.split_once('-').ok_or_else(|| {
                    ParseError::malformed(line, format!("`{text}` is not a range"))
                })?;

                let start: u64 = puzzle::number(line, start)?;
                let end: u64 = puzzle::number(line, end)?;

                if start > end {
                    return Err(ParseError::malformed(
                        line,
                        format!("range `{text}` ends before it starts"),
                    ));
                }

                Ok(start..=end)
            })
            .collect::<Result<Vec<RangeInclusive<u64>>, ParseError>>()?;

        let mut ingredients = puzzle::lines(ingredients)
            .map(|(line, text)| puzzle::number(line, text))
            .collect::<Result<Vec<u64>, _>>()?;
        ingredients.sort_unstable();

        Ok(Self {
            ranges,
            ingredients,
        })
    }
}

/// Disjoint inclusive ranges sorted by start.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FreshRanges(Vec<RangeInclusive<u64>>);

impl FreshRanges {
    fn merge(mut ranges: Vec<RangeInclusive<u64>>) -> Self {
        ranges.sort_unstable_by_key(|range| (*range.start(), *range.end()));

        let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());

        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start() <= last.end() => {
                    let end = *last.end().max(range.end());
                    *last = *last.start()..=end;
                }
                _ => merged.push(range),
            }
        }

        Self(merged)
    }

    fn contains(&self, id: u64) -> bool {
        let after = self.0.partition_point(|range| *range.start() <= id);

        after
            .checked_sub(1)
            .is_some_and(|index| self.0[index].contains(&id))
    }

    /// Widened so a range covering every `u64` still counts.
    fn total(&self) -> u128 {
        self.0
            .iter()
            .map(|range| u128::from(range.end() - range.start()) + 1)
            .sum()
    }
}
