pub mod parser;
pub mod reader;

pub use parser::{parse_line, ParseError, ParsedPack};
pub use reader::{read_packs, InputError};
