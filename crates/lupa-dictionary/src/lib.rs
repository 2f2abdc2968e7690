pub mod ignore;
pub mod overrides;
pub mod xml;

pub use self::xml::{LoadError, WordEntry, parse_entries};
