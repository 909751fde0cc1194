use crate::puzzle::{ParseError, PuzzleId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem loading config: {0}")]
    Config(#[from] crate::config::Error),

    #[error(transparent)]
    Fetch(#[from] crate::client::FetchError),

    #[error("couldn't parse input for {id}: {source}")]
    Parse {
        id: PuzzleId,
        #[source]
        source: ParseError,
    },

    #[error("no solution for {0}")]
    UnknownPuzzle(PuzzleId),

    #[error("{0} puzzle(s) failed")]
    Failed(usize),
}

impl Error {
    pub fn parse(id: PuzzleId, source: ParseError) -> Self {
        Self::Parse { id, source }
    }
}
