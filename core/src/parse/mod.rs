//! Report normalizers: one parse function per on-disk encoding, both
//! converging on the same [`Finding`](crate::types::Finding) record.

pub mod json;
pub mod xml;

/// Provenance tag carried by every finding from either supported encoding.
pub const ZAP_SOURCE: &str = "ZAP";
