pub mod reader;
pub mod timestamp;
pub mod writer;
