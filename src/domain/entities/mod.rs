mod asn_record;
mod batch_result;

pub use asn_record::AsnRecord;
pub use batch_result::BatchResult;
