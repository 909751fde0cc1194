use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct Lobby;

impl Solution for Lobby {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2025, 3)
    }

    fn title(&self) -> &'static str {
        "Lobby"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let banks = parse(input)?;

        Ok(Answers::new()
            .part("The total output joltage is", total_joltage(&banks, 2)?)
            .part(
                "The overclocked total output joltage is",
                total_joltage(&banks, 12)?,
            ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bank {
    line: usize,
    batteries: Vec<u8>,
}

fn parse(input: &str) -> Result<Vec<Bank>, ParseError> {
    puzzle::non_empty(input)?;

    puzzle::lines(input)
        .map(|(line, text)| {
            let batteries = text
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|digit| digit as u8)
                        .ok_or_else(|| ParseError::malformed(line, format!("`{c}` is not a digit")))
                })
                .collect::<Result<_, _>>()?;

            Ok(Bank { line, batteries })
        })
        .collect()
}

fn total_joltage(banks: &[Bank], digits: usize) -> Result<u64, ParseError> {
    banks.iter().map(|bank| bank.joltage(digits)).sum()
}

impl Bank {
    /// Largest number made by switching on exactly `digits` batteries, keeping their order.
    fn joltage(&self, digits: usize) -> Result<u64, ParseError> {
        let batteries = &self.batteries;

        if batteries.len() < digits {
            return Err(ParseError::malformed(
                self.line,
                format!("bank has fewer than {digits} batteries"),
            ));
        }

        let mut start = 0;
        let mut joltage = 0;

        for remaining in (0..digits).rev() {
            let window = &batteries[start..batteries.len() - remaining];

            // leftmost maximum keeps the most batteries available afterwards
            let (offset, digit) = window
                .iter()
                .enumerate()
                .fold((0, window[0]), |best, (offset, &digit)| {
                    if digit > best.1 {
                        (offset, digit)
                    } else {
                        best
                    }
                });

            joltage = joltage * 10 + u64::from(digit);
            start += offset + 1;
        }

        Ok(joltage)
    }
}
