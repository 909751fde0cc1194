use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct NoMath;

impl Solution for NoMath {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2015, 2)
    }

    fn title(&self) -> &'static str {
        "I Was Told There Would Be No Math"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let presents = parse(input)?;

        Ok(Answers::new()
            .part(
                "Part 1: Total square feet of wrapping paper required",
                presents.iter().map(Present::wrapping_paper).sum::<u64>(),
            )
            .part(
                "Part 2: Total feet of ribbon required",
                presents.iter().map(Present::ribbon).sum::<u64>(),
            ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    length: u64,
    width: u64,
    height: u64,
}

impl Present {
    pub fn wrapping_paper(&self) -> u64 {
        let Self {
            length,
            width,
            height,
        } = *self;

        let sides = [length * width, width * height, height * length];
        let smallest = sides.into_iter().min().unwrap_or_default();

        2 * sides.iter().sum::<u64>() + smallest
    }

    pub fn ribbon(&self) -> u64 {
        let Self {
            length,
            width,
            height,
        } = *self;

        let smallest_perimeter = [length + width, width + height, height + length]
            .into_iter()
            .min()
            .unwrap_or_default()
            * 2;

        smallest_perimeter + length * width * height
    }
}

fn parse(input: &str) -> Result<Vec<Present>, ParseError> {
    puzzle::non_empty(input)?;

    puzzle::lines(input)
        .map(|(line, text)| {
            let mut dimensions = text.split('x').map(|part| puzzle::number::<u64>(line, part));

            let mut next = || {
                dimensions
                    .next()
                    .unwrap_or_else(|| Err(ParseError::malformed(line, "expected `LxWxH`")))
            };

            let present = Present {
                length: next()?,
                width: next()?,
                height: next()?,
            };

            if dimensions.next().is_some() {
                return Err(ParseError::malformed(line, "expected exactly three dimensions"));
            }

            Ok(present)
        })
        .collect()
}
