mod lookup;

pub use lookup::{LookupResponse, ResultsInfo};
