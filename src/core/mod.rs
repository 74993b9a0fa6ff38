pub mod game;
pub mod page;

pub use game::{Game, Genre, NamedRef, PlatformEntry, UNKNOWN};
pub use page::Page;
