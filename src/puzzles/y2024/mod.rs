mod day01;
pub use day01::HistorianHysteria;
