#![allow(dead_code)]

pub const VALIDATION_ERROR: &str = "validation_error";
pub const TRANSPORT_ERROR: &str = "transport_error";
pub const EXTRACTION_ERROR: &str = "extraction_error";
pub const LOOKUP_FALLBACK_EXHAUSTED: &str = "lookup_fallback_exhausted";
pub const INTERNAL_ERROR: &str = "internal_error";
