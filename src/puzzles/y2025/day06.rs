use crate::puzzle::{self, Answers, ParseError, PuzzleId, Solution};

pub struct TrashCompactor;

impl Solution for TrashCompactor {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2025, 6)
    }

    fn title(&self) -> &'static str {
        "Trash Compactor"
    }

    fn solve(&self, input: &str) -> Result<Answers, ParseError> {
        let worksheet = Worksheet::parse(input)?;

        let by_rows = worksheet.by_rows()?;
        let by_columns = worksheet.by_columns()?;

        Ok(Answers::new()
            .part("The sum is (fine)", fold_total(&by_rows)?)
            .part("The sum is (eval)", eval_total(&by_rows)?)
            .part("The cursed sum is (fine)", fold_total(&by_columns)?)
            .part("The cursed sum is (eval)", eval_total(&by_columns)?))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
}

impl Operator {
    fn parse(line: usize, token: &str) -> Result<Self, ParseError> {
        match token {
            "+" => Ok(Self::Add),
            "*" => Ok(Self::Multiply),
            other => Err(ParseError::malformed(
                line,
                format!("unknown operator `{other}`, expected `+` or `*`"),
            )),
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
        }
    }

    const fn identity(self) -> u64 {
        match self {
            Self::Add => 0,
            Self::Multiply => 1,
        }
    }

    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Problem {
    operator: Operator,
    numbers: Vec<u64>,
}

impl Problem {
    fn answer(&self) -> Option<u64> {
        self.numbers
            .iter()
            .try_fold(self.operator.identity(), |acc, n| self.operator.apply(acc, *n))
    }

    fn expression(&self) -> String {
        self.numbers
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(self.operator.symbol())
    }
}

/// Raw number rows (with their alignment intact) and the operator row beneath them.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Worksheet<'a> {
    rows: Vec<(usize, &'a str)>,
    operators_line: usize,
    operators: Vec<Operator>,
}

impl<'a> Worksheet<'a> {
    fn parse(input: &'a str) -> Result<Self, ParseError> {
        puzzle::non_empty(input)?;

        let mut rows: Vec<(usize, &str)> = input
            .trim_end()
            .lines()
            .enumerate()
            .map(|(index, text)| (index + 1, text.trim_end_matches('\r')))
            .skip_while(|(_, text)| text.trim().is_empty())
            .collect();

        let (operators_line, operators) = rows
            .pop()
            .ok_or(ParseError::MissingSection("operators"))?;

        if rows.is_empty() {
            return Err(ParseError::MissingSection("numbers"));
        }

        let operators = operators
            .split_whitespace()
            .map(|token| Operator::parse(operators_line, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rows,
            operators_line,
            operators,
        })
    }

    /// Each whitespace-separated column is one problem.
    fn by_rows(&self) -> Result<Vec<Problem>, ParseError> {
        let mut numbers = vec![Vec::with_capacity(self.rows.len()); self.operators.len()];

        for &(line, text) in &self.rows {
            let tokens: Vec<&str> = text.split_whitespace().collect();

            if tokens.len() != self.operators.len() {
                return Err(ParseError::malformed(
                    line,
                    format!(
                        "expected {} numbers, found {}",
                        self.operators.len(),
                        tokens.len()
                    ),
                ));
            }

            for (column, token) in numbers.iter_mut().zip(tokens) {
                column.push(puzzle::number::<u64>(line, token)?);
            }
        }

        Ok(self.problems(numbers))
    }

    /// Each character column, read top to bottom, is one number; blank columns split problems.
    fn by_columns(&self) -> Result<Vec<Problem>, ParseError> {
        let width = self
            .rows
            .iter()
            .map(|(_, text)| text.len())
            .max()
            .unwrap_or_default();

        let mut groups: Vec<Vec<u64>> = vec![Vec::new()];

        for x in 0..width {
            let cells: Vec<(usize, u8)> = self
                .rows
                .iter()
                .filter_map(|&(line, text)| text.as_bytes().get(x).map(|&byte| (line, byte)))
                .filter(|(_, byte)| !byte.is_ascii_whitespace())
                .collect();

            if let Some(&(line, byte)) = cells.iter().find(|(_, byte)| !byte.is_ascii_digit()) {
                return Err(ParseError::malformed(
                    line,
                    format!("column {}: `{}` is not a digit", x + 1, char::from(byte)),
                ));
            }

            if let Some(&(line, _)) = cells.first() {
                let digits: String = cells.iter().map(|&(_, byte)| char::from(byte)).collect();
                let number: u64 = puzzle::number(line, &digits)?;
                if let Some(group) = groups.last_mut() {
                    group.push(number);
                }
            } else if groups.last().is_some_and(|group| !group.is_empty()) {
                groups.push(Vec::new());
            }
        }

        groups.retain(|group| !group.is_empty());

        if groups.len() != self.operators.len() {
            return Err(ParseError::malformed(
                self.operators_line,
                format!(
                    "{} operators for {} column groups",
                    self.operators.len(),
                    groups.len()
                ),
            ));
        }

        Ok(self.problems(groups))
    }

    fn problems(&self, numbers: Vec<Vec<u64>>) -> Vec<Problem> {
        self.operators
            .iter()
            .zip(numbers)
            .map(|(&operator, numbers)| Problem { operator, numbers })
            .collect()
    }
}

fn fold_total(problems: &[Problem]) -> Result<u64, ParseError> {
    problems.iter().try_fold(0u64, |total, problem| {
        problem
            .answer()
            .and_then(|answer| total.checked_add(answer))
            .ok_or_else(|| ParseError::Eval(format!("`{}` overflows", problem.expression())))
    })
}

/// Evaluates every problem as one joined expression, as a cross-check of [`fold_total`].
fn eval_total(problems: &[Problem]) -> Result<i64, ParseError> {
    let expression = problems
        .iter()
        .map(Problem::expression)
        .collect::<Vec<_>>()
        .join("+");

    tracing::trace!(len = expression.len(), "evaluating worksheet expression");

    let total: i64 =
        evalexpr::eval_int(&expression).map_err(|err| ParseError::Eval(err.to_string()))?;

    Ok(total)
}
