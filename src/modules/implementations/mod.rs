pub mod file_search;
pub mod ping;
pub mod pkg;

pub use file_search::FileSearch;
pub use ping::Ping;
pub use pkg::Pkg;
