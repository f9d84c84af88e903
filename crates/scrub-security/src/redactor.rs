use scrub_core::{Dictionary, Value};
use serde::{Deserialize, Serialize};

/// Keys under `PlatformInfo.Generic` that identify the machine
pub const SENSITIVE_KEYS: [&str; 4] = ["SystemProductName", "MLB", "SystemSerialNumber", "SystemUUID"];

/// Value written in place of every sensitive key
pub const PLACEHOLDER: &str = "**REQUIRED**";

/// Location of the hardware-identity dictionary inside a document
pub const PLATFORM_INFO_PATH: [&str; 2] = ["PlatformInfo", "Generic"];

/// One replaced key. The replaced value itself is never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub key: String,
    pub value_type: String,
}

/// Replaces hardware-identity values with [`PLACEHOLDER`]
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    log_values: bool,
}

impl Redactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the previous value of each replaced key at `debug` level
    pub fn with_value_logging(mut self, enabled: bool) -> Self {
        self.log_values = enabled;
        self
    }

    /// Redact a document in place.
    ///
    /// A document without a `PlatformInfo.Generic` dictionary is left
    /// untouched. Keys already holding the placeholder are not reported, so
    /// a second pass over the same document returns an empty list.
    pub fn redact(&self, document: &mut Value) -> Vec<RedactionInfo> {
        let Some(generic) = platform_info_mut(document) else {
            tracing::debug!("no PlatformInfo.Generic dictionary, nothing to redact");
            return Vec::new();
        };

        let mut redactions = Vec::new();
        for key in SENSITIVE_KEYS {
            let Some(value) = generic.get_mut(key) else {
                continue;
            };
            if value.as_string() == Some(PLACEHOLDER) {
                tracing::debug!(key, "already redacted");
                continue;
            }

            tracing::debug!(key, "found sensitive key");
            if self.log_values {
                tracing::debug!(key, previous = ?value, "value to remove");
            }

            redactions.push(RedactionInfo {
                key: key.to_string(),
                value_type: value_type(value).to_string(),
            });
            *value = Value::String(PLACEHOLDER.to_string());
        }

        redactions
    }
}

/// Resolve `PlatformInfo.Generic`, if every step of the path is a dictionary
pub fn platform_info_mut(document: &mut Value) -> Option<&mut Dictionary> {
    PLATFORM_INFO_PATH
        .iter()
        .try_fold(document, |node, key| node.as_dictionary_mut()?.get_mut(key))?
        .as_dictionary_mut()
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Data(_) => "data",
        Value::Integer(_) => "integer",
        Value::Real(_) => "real",
        Value::Boolean(_) => "boolean",
        Value::Date(_) => "date",
        Value::Array(_) => "array",
        Value::Dictionary(_) => "dictionary",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: Vec<(&str, Value)>) -> Value {
        let mut d = Dictionary::new();
        for (k, v) in entries {
            d.insert(k.to_string(), v);
        }
        Value::Dictionary(d)
    }

    fn text(s: &str) -> Value {
        Value::String(s.to_string())
    }

    fn opencore_config() -> Value {
        dict(vec![
            (
                "PlatformInfo",
                dict(vec![
                    (
                        "Generic",
                        dict(vec![
                            ("AdviseFeatures", Value::Boolean(false)),
                            ("MLB", text("C02123456789ABCDE")),
                            ("ROM", Value::Data(vec![0xde, 0xad, 0xbe, 0xef])),
                            ("SystemProductName", text("iMac20,1")),
                            ("SystemSerialNumber", text("C02XXXXXXXXX")),
                            ("SystemUUID", text("01234567-89AB-CDEF-0123-456789ABCDEF")),
                        ]),
                    ),
                    ("UpdateSMBIOS", Value::Boolean(true)),
                ]),
            ),
            ("Misc", dict(vec![("Boot", dict(vec![("Timeout", Value::Integer(5i64.into()))]))])),
        ])
    }

    fn generic(document: &Value) -> &Dictionary {
        document
            .as_dictionary()
            .and_then(|d| d.get("PlatformInfo"))
            .and_then(Value::as_dictionary)
            .and_then(|d| d.get("Generic"))
            .and_then(Value::as_dictionary)
            .unwrap()
    }

    #[test]
    fn test_single_key_example() {
        let mut document = dict(vec![(
            "PlatformInfo",
            dict(vec![(
                "Generic",
                dict(vec![("SystemUUID", text("ABC-123")), ("Other", text("keep-me"))]),
            )]),
        )]);

        let info = Redactor::new().redact(&mut document);

        let expected = dict(vec![(
            "PlatformInfo",
            dict(vec![(
                "Generic",
                dict(vec![("SystemUUID", text(PLACEHOLDER)), ("Other", text("keep-me"))]),
            )]),
        )]);
        assert_eq!(document, expected);
        assert_eq!(
            info,
            vec![RedactionInfo {
                key: "SystemUUID".to_string(),
                value_type: "string".to_string(),
            }]
        );
    }

    #[test]
    fn test_all_sensitive_keys_replaced() {
        let mut document = opencore_config();
        let info = Redactor::new().redact(&mut document);

        assert_eq!(info.len(), 4);
        let generic = generic(&document);
        for key in SENSITIVE_KEYS {
            assert_eq!(generic.get(key).and_then(Value::as_string), Some(PLACEHOLDER));
        }
    }

    #[test]
    fn test_everything_else_untouched() {
        let original = opencore_config();
        let mut document = original.clone();
        Redactor::new().redact(&mut document);

        // Restoring the four values yields the original document
        let mut restored = document.clone();
        let original_generic = generic(&original).clone();
        let restored_generic = platform_info_mut(&mut restored).unwrap();
        for key in SENSITIVE_KEYS {
            restored_generic.insert(key.to_string(), original_generic.get(key).unwrap().clone());
        }
        assert_eq!(restored, original);

        // Key order is preserved
        let keys: Vec<_> = generic(&document).keys().cloned().collect();
        let original_keys: Vec<_> = original_generic.keys().cloned().collect();
        assert_eq!(keys, original_keys);
    }

    #[test]
    fn test_idempotent() {
        let redactor = Redactor::new();
        let mut once = opencore_config();
        redactor.redact(&mut once);

        let mut twice = once.clone();
        let second = redactor.redact(&mut twice);

        assert_eq!(twice, once);
        assert!(second.is_empty());
    }

    #[test]
    fn test_subset_of_keys() {
        let mut document = dict(vec![(
            "PlatformInfo",
            dict(vec![("Generic", dict(vec![("MLB", text("M")), ("ROM", text("R"))]))]),
        )]);

        let info = Redactor::new().redact(&mut document);

        assert_eq!(info.len(), 1);
        let generic = generic(&document);
        assert_eq!(generic.get("MLB").and_then(Value::as_string), Some(PLACEHOLDER));
        assert_eq!(generic.get("ROM").and_then(Value::as_string), Some("R"));
        assert!(!generic.contains_key("SystemUUID"));
    }

    #[test]
    fn test_non_string_value_replaced() {
        let mut document = dict(vec![(
            "PlatformInfo",
            dict(vec![("Generic", dict(vec![("SystemUUID", Value::Data(vec![1, 2, 3]))]))]),
        )]);

        let info = Redactor::new().with_value_logging(true).redact(&mut document);

        assert_eq!(info[0].value_type, "data");
        assert_eq!(
            generic(&document).get("SystemUUID").and_then(Value::as_string),
            Some(PLACEHOLDER)
        );
    }

    #[test]
    fn test_missing_path_is_noop() {
        let redactor = Redactor::new();

        let mut no_platform = dict(vec![("Misc", dict(vec![]))]);
        let before = no_platform.clone();
        assert!(redactor.redact(&mut no_platform).is_empty());
        assert_eq!(no_platform, before);

        let mut no_generic = dict(vec![("PlatformInfo", dict(vec![("Automatic", Value::Boolean(true))]))]);
        let before = no_generic.clone();
        assert!(redactor.redact(&mut no_generic).is_empty());
        assert_eq!(no_generic, before);
    }

    #[test]
    fn test_wrong_shapes_are_noop() {
        let redactor = Redactor::new();

        let mut generic_is_string = dict(vec![("PlatformInfo", dict(vec![("Generic", text("SystemUUID"))]))]);
        let before = generic_is_string.clone();
        assert!(redactor.redact(&mut generic_is_string).is_empty());
        assert_eq!(generic_is_string, before);

        let mut platform_is_array = dict(vec![("PlatformInfo", Value::Array(vec![text("Generic")]))]);
        let before = platform_is_array.clone();
        assert!(redactor.redact(&mut platform_is_array).is_empty());
        assert_eq!(platform_is_array, before);

        let mut root_is_array = Value::Array(vec![]);
        assert!(redactor.redact(&mut root_is_array).is_empty());
    }

    #[test]
    fn test_sensitive_keys_elsewhere_untouched() {
        let mut document = dict(vec![
            ("SystemUUID", text("top-level")),
            ("PlatformInfo", dict(vec![("DataHub", dict(vec![("SystemUUID", text("hub"))]))])),
        ]);
        let before = document.clone();

        assert!(Redactor::new().redact(&mut document).is_empty());
        assert_eq!(document, before);
    }

    #[test]
    fn test_redaction_info_serializes() {
        let info = RedactionInfo {
            key: "MLB".to_string(),
            value_type: "string".to_string(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["key"], "MLB");
        assert_eq!(json["value_type"], "string");
    }
}
