mod cache_dump;
mod index;
mod lookup;
mod ping;

pub use cache_dump::cache_dump_handler;
pub use index::index_handler;
pub use lookup::lookup_handler;
pub use ping::ping_handler;
