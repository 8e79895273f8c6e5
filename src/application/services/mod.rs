mod lookup_service;
mod memo;

pub use lookup_service::LookupService;
pub use memo::MemoizedLookup;
