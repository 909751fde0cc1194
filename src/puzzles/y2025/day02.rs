use std::ops::RangeInclusive;

use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct GiftShop;

impl Solution for GiftShop {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2025, 2)
    }

    fn title(&self) -> &'static str {
        "Gift Shop"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let ranges = parse(input)?;

        let doubled: u128 = ranges.iter().map(doubled_ids_sum).sum();
        let repeated: u128 = ranges
            .iter()
            .flat_map(|range| range.clone())
            .filter(|id| is_repeated(*id))
            .map(u128::from)
            .sum();

        Ok(Answers::new()
            .part("The invalid IDs sum is", doubled)
            .part("The more invalid IDs sum is", repeated))
    }
}

fn parse(input: &str) -> Result<Vec<RangeInclusive<u64>>, ParseError> {
    let text = puzzle::non_empty(input)?;

    let mut ranges = text
        .split(',')
        .map(str::trim)
        .filter(|range| !range.is_empty())
        .map(|range| {
            let (min, max) = range
                .split_once('-')
                .ok_or_else(|| ParseError::malformed(1, format!("`{range}` is not a range")))?;

            let min: u64 = puzzle::number(1, min)?;
            let max: u64 = puzzle::number(1, max)?;

            Ok(min..=max)
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    ranges.sort_unstable_by_key(|range| (*range.start(), *range.end()));

    Ok(ranges)
}

fn digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

/// Sum of ids in `range` made of one block of digits written twice.
///
/// Works per even digit length: every such id is `half * (10^h + 1)` for a
/// `half` of exactly `h` digits, so the ids form an arithmetic series.
/// Summed in `u128`, which holds any such series over `u64` ids.
fn doubled_ids_sum(range: &RangeInclusive<u64>) -> u128 {
    let (min, max) = (*range.start(), *range.end());

    (digits(min)..=digits(max))
        .filter(|length| length % 2 == 0)
        .map(|length| {
            let half_length = length / 2;
            let multiplier = 10u64.pow(half_length) + 1;

            let lowest = (10u64.pow(half_length - 1)).max(min.div_ceil(multiplier));
            let highest = (10u64.pow(half_length) - 1).min(max / multiplier);

            if lowest > highest {
                0
            } else {
                let (lowest, highest) = (u128::from(lowest), u128::from(highest));
                u128::from(multiplier) * (lowest + highest) * (highest - lowest + 1) / 2
            }
        })
        .sum()
}

/// Whether the decimal digits of `id` are one block repeated at least twice.
fn is_repeated(id: u64) -> bool {
    let text = id.to_string();
    let bytes = text.as_bytes();
    let length = bytes.len();

    (1..=length / 2)
        .filter(|block| length % block == 0)
        .any(|block| bytes.chunks(block).all(|chunk| chunk == &bytes[..block]))
}
