pub mod aggregate;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod verify;

pub use self::aggregate::{SearchMap, build_search_map};
pub use self::error::BuildError;
pub use self::normalize::{Dictionary, DictionaryBuilder};
pub use self::resolve::resolve;
pub use self::verify::verify_coverage;
