use crate::{
    client::{InputClient, InputSource},
    errors::Error,
    puzzle::{Answers, PuzzleId, Solution},
    puzzles,
};

type Result<T, E = Error> = std::result::Result<T, E>;

/// Runs puzzles one at a time against a single input client.
#[derive(Debug, Clone)]
pub struct Runner {
    client: InputClient,
}

impl Runner {
    pub fn new(client: InputClient) -> Self {
        Self { client }
    }

    #[tracing::instrument(skip_all, fields(puzzle = %solution.id()))]
    pub async fn solve(&self, solution: &dyn Solution, source: &InputSource) -> Result<Answers> {
        let input = source.read(&self.client).await?;

        let answers = solution
            .solve(&input)
            .map_err(|source| Error::parse(solution.id(), source))?;

        tracing::debug!(parts = answers.values().count(), "solved");

        Ok(answers)
    }

    pub async fn run(&self, id: PuzzleId, source: &InputSource) -> Result<Answers> {
        let solution = puzzles::find(id).ok_or(Error::UnknownPuzzle(id))?;

        self.solve(solution, source).await
    }

    /// Downloads and solves each selected puzzle in order, printing as it goes.
    ///
    /// A failing puzzle is logged and skipped; the count of failures is returned as an error.
    pub async fn run_all(&self, year: Option<u16>) -> Result<()> {
        let mut failed = 0;

        for solution in selection(year) {
            println!("--- {}: {} ---", solution.id(), solution.title());

            match self
                .solve(solution, &InputSource::Remote(solution.id()))
                .await
            {
                Ok(answers) => print!("{answers}"),
                Err(err) => {
                    tracing::error!("{err}");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            Err(Error::Failed(failed))
        } else {
            Ok(())
        }
    }
}

pub fn selection(year: Option<u16>) -> Vec<&'static dyn Solution> {
    match year {
        Some(year) => puzzles::year(year).collect(),
        None => puzzles::all().collect(),
    }
}
