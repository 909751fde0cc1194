use std::collections::HashMap;

use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct HistorianHysteria;

impl Solution for HistorianHysteria {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2024, 1)
    }

    fn title(&self) -> &'static str {
        "Historian Hysteria"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let lists = Lists::parse(input)?;

        Ok(Answers::new()
            .part("Part 1: Total distance between lists", lists.distance())
            .part("Part 2: Similarity score", lists.similarity()))
    }
}

/// Both location id lists, each sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Lists {
    left: Vec<u64>,
    right: Vec<u64>,
}

impl Lists {
    fn parse(input: &str) -> Result<Self, ParseError> {
        puzzle::non_empty(input)?;

        let (mut left, mut right): (Vec<u64>, Vec<u64>) = puzzle::lines(input)
            .map(|(line, text)| {
                let mut columns = text.split_whitespace();

                match (columns.next(), columns.next(), columns.next()) {
                    (Some(left), Some(right), None) => {
                        Ok((
                            puzzle::number::<u64>(line, left)?,
                            puzzle::number::<u64>(line, right)?,
                        ))
                    }
                    _ => Err(ParseError::malformed(line, "expected two columns")),
                }
            })
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        left.sort_unstable();
        right.sort_unstable();

        Ok(Self { left, right })
    }

    fn distance(&self) -> u64 {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(left, right)| left.abs_diff(*right))
            .sum()
    }

    fn similarity(&self) -> u64 {
        let mut counts: HashMap<u64, u64> = HashMap::new();
        for id in &self.right {
            *counts.entry(*id).or_default() += 1;
        }

        self.left
            .iter()
            .map(|id| id * counts.get(id).copied().unwrap_or_default())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EXAMPLE: &str = "3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn example() {
        let answers = HistorianHysteria.solve(EXAMPLE).expect("valid input");

        assert_eq!(answers.values().collect::<Vec<_>>(), vec!["11", "31"]);
    }

    #[test]
    fn lists_are_sorted() {
        let lists = Lists::parse(EXAMPLE).expect("valid input");

        assert_eq!(lists.left, vec![1, 2, 3, 3, 3, 4]);
        assert_eq!(lists.right, vec![3, 3, 3, 4, 5, 9]);
    }

    #[test]
    fn single_column_is_malformed() {
        assert!(matches!(
            Lists::parse("1   2\n3\n"),
            Err(ParseError::Malformed { line: 2, .. })
        ));
    }
}
