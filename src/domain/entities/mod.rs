pub mod sales;
pub mod sheet;
