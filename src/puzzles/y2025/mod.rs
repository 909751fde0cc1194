mod day01;
pub use day01::SecretEntrance;

mod day02;
pub use day02::GiftShop;

mod day03;
pub use day03::Lobby;

mod day04;
pub use day04::PrintingDepartment;

mod day05;
pub use day05::Cafeteria;

mod day06;
pub use day06::TrashCompactor;
