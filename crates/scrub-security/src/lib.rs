//! Hardware-identity redaction for property-list documents

pub mod redactor;

pub use redactor::{
    PLACEHOLDER, PLATFORM_INFO_PATH, RedactionInfo, Redactor, SENSITIVE_KEYS, platform_info_mut,
};
