use std::fmt::Display;

use crate::puzzle::PuzzleId;

#[derive(Debug, Clone)]
pub struct PuzzleUrl {
    base: url::Url,
    id: PuzzleId,
}

impl PuzzleUrl {
    const DAY_PATH: &'static str = "day";
    const INPUT_PATH: &'static str = "input";

    pub fn new(base: url::Url, id: PuzzleId) -> Self {
        Self { base, id }
    }

    pub fn reqwest(&self) -> Result<reqwest::Url, url::ParseError> {
        reqwest::Url::parse(&self.to_string())
    }
}

impl Display for PuzzleUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{base}/{year}/{day_path}/{day}/{input}",
            base = self.base.as_str().trim_end_matches('/'),
            year = self.id.year,
            day_path = Self::DAY_PATH,
            day = self.id.day,
            input = Self::INPUT_PATH,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_str_eq;

    use super::*;

    fn url(base: &str, year: u16, day: u8) -> PuzzleUrl {
        PuzzleUrl::new(
            url::Url::parse(base).expect("hard-coded url should be valid"),
            PuzzleId::new(year, day),
        )
    }

    #[test]
    fn display() {
        assert_str_eq!(
            url("https://adventofcode.com", 2015, 1).to_string(),
            "https://adventofcode.com/2015/day/1/input"
        );
    }

    #[test]
    fn base_with_path() {
        assert_str_eq!(
            url("http://127.0.0.1:8080/mirror/", 2025, 6).to_string(),
            "http://127.0.0.1:8080/mirror/2025/day/6/input"
        );
    }

    #[test]
    fn reqwest_url() {
        let parsed = url("https://adventofcode.com/", 2024, 1)
            .reqwest()
            .expect("url should be valid");

        assert_str_eq!(parsed.path(), "/2024/day/1/input");
    }
}
