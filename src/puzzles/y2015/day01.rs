use crate::puzzle::{Answers, ParseError, PuzzleId, Solution};

pub struct NotQuiteLisp;

impl Solution for NotQuiteLisp {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2015, 1)
    }

    fn title(&self) -> &'static str {
        "Not Quite Lisp"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let instructions = crate::puzzle::non_empty(input)?;

        let basement = basement_position(instructions)
            .map_or_else(|| "none".to_owned(), |position| position.to_string());

        Ok(Answers::new()
            .part(
                "Part 1: Final floor Santa reaches",
                final_floor(instructions),
            )
            .part(
                "Part 2: Position of the first character that enters the basement",
                basement,
            ))
    }
}

fn step(c: char) -> i64 {
    match c {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

pub fn final_floor(instructions: &str) -> i64 {
    instructions.chars().map(step).sum()
}

/// 1-based position of the instruction that first takes Santa to floor -1.
pub fn basement_position(instructions: &str) -> Option<usize> {
    instructions
        .chars()
        .scan(0, |floor, c| {
            *floor += step(c);
            Some(*floor)
        })
        .position(|floor| floor == -1)
        .map(|index| index + 1)
}
