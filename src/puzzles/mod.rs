use crate::puzzle::{PuzzleId, Solution};

mod y2015;
mod y2024;
mod y2025;

static SOLUTIONS: &[&dyn Solution] = &[
    &y2015::NotQuiteLisp,
    &y2015::NoMath,
    &y2024::HistorianHysteria,
    &y2025::SecretEntrance,
    &y2025::GiftShop,
    &y2025::Lobby,
    &y2025::PrintingDepartment,
    &y2025::Cafeteria,
    &y2025::TrashCompactor,
];

/// Every solved puzzle, ordered by year then day.
pub fn all() -> impl Iterator<Item = &'static dyn Solution> {
    SOLUTIONS.iter().copied()
}

pub fn year(year: u16) -> impl Iterator<Item = &'static dyn Solution> {
    all().filter(move |solution| solution.id().year == year)
}

pub fn find(id: PuzzleId) -> Option<&'static dyn Solution> {
    all().find(|solution| solution.id() == id)
}
