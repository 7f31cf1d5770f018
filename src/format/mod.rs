//! Text I/O for edge-list files.

pub mod reader;
pub mod writer;

pub use reader::EdgeListReader;
pub use writer::EdgeListWriter;
