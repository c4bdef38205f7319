pub mod board;
pub mod search;
pub mod table;
