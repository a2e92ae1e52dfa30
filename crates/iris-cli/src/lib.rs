pub mod cli;
pub mod train;
