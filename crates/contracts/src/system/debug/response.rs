use serde::{Deserialize, Serialize};

/// One record of the payload returned by `action/enabledebug`.
///
/// The service reports the field under its capitalised wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugStatusEntry {
    #[serde(rename = "Language")]
    pub language: String,
}

/// Concatenates the `Language` values of the entries, in order, into the
/// string the console displays.
pub fn concat_languages(entries: &[DebugStatusEntry]) -> String {
    entries.iter().map(|e| e.language.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let entries: Vec<DebugStatusEntry> =
            serde_json::from_str(r#"[{"Language":"en"},{"Language":"fr"}]"#).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].language, "en");
        assert_eq!(entries[1].language, "fr");
    }

    #[test]
    fn test_concat_preserves_order() {
        let entries = vec![
            DebugStatusEntry {
                language: "en".to_string(),
            },
            DebugStatusEntry {
                language: "fr".to_string(),
            },
        ];
        assert_eq!(concat_languages(&entries), "enfr");
    }

    #[test]
    fn test_concat_empty() {
        assert_eq!(concat_languages(&[]), "");
    }
}
