use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct SecretEntrance;

impl Solution for SecretEntrance {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2025, 1)
    }

    fn title(&self) -> &'static str {
        "Secret Entrance"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let rotations = parse(input)?;

        let mut dial = Dial::default();
        for rotation in rotations {
            dial.rotate(rotation);
        }

        Ok(Answers::new()
            .part("The password is", dial.stopped_at_zero)
            .part("The actual password is", dial.clicked_zero))
    }
}

/// Rotations as signed clicks: left is negative, right is positive.
fn parse(input: &str) -> Result<Vec<i64>, ParseError> {
    puzzle::non_empty(input)?;

    puzzle::lines(input)
        .map(|(line, text)| {
            let (direction, clicks) = text.split_at_checked(1).ok_or_else(|| {
                ParseError::malformed(line, "expected a direction and a distance")
            })?;

            let distance: u64 = puzzle::number(line, clicks)?;
            let clicks = i64::try_from(distance).map_err(|_| {
                ParseError::malformed(line, format!("distance {distance} is too large"))
            })?;

            match direction {
                "L" => Ok(-clicks),
                "R" => Ok(clicks),
                other => Err(ParseError::malformed(
                    line,
                    format!("unknown direction `{other}`, expected `L` or `R`"),
                )),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Dial {
    position: i64,
    stopped_at_zero: u64,
    clicked_zero: u64,
}

impl Dial {
    const SIZE: i64 = 100;

    fn rotate(&mut self, clicks: i64) {
        self.clicked_zero += clicks.unsigned_abs() / Self::SIZE as u64;

        let start = self.position;
        let moved = start + clicks % Self::SIZE;

        if start != 0 && !(1..Self::SIZE).contains(&moved) {
            self.clicked_zero += 1;
        }

        self.position = moved.rem_euclid(Self::SIZE);

        if self.position == 0 {
            self.stopped_at_zero += 1;
        }
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self {
            position: 50,
            stopped_at_zero: 0,
            clicked_zero: 0,
        }
    }
}
