pub mod analysis;
pub mod generate;
