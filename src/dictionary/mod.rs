pub mod api;
pub mod lookup;

pub use api::{
    DefinitionSource,
    DictionaryClient,
    DictionarySettings,
};
pub use lookup::{
    fallback_links,
    DefinitionLookup,
    DefinitionState,
    DefinitionStatus,
    FallbackLink,
    LookupTicket,
    SelectOutcome,
};
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl DictionaryEntry {
    /// First phonetic spelling that actually carries text.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.text.as_deref())
            .find(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANTERN_JSON: &str = r#"[
        {
            "word": "lantern",
            "phonetic": "/ˈlæntən/",
            "phonetics": [
                { "audio": "" },
                { "text": "/ˈlæntən/", "audio": "https://example.invalid/lantern.mp3" }
            ],
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "A case of translucent material protecting a flame.", "synonyms": [], "antonyms": [] },
                        { "definition": "The top part of a lighthouse.", "example": "The keeper climbed to the lantern." }
                    ],
                    "synonyms": []
                }
            ],
            "license": { "name": "CC BY-SA 3.0", "url": "https://example.invalid" },
            "sourceUrls": []
        }
    ]"#;

    #[test]
    fn parses_api_payload() {
        let entries: Vec<DictionaryEntry> = serde_json::from_str(LANTERN_JSON).unwrap();

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "lantern");
        assert_eq!(entry.phonetic_text(), Some("/ˈlæntən/"));
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.meanings[0].definitions.len(), 2);
        assert_eq!(entry.meanings[0].definitions[0].example, None);
        assert_eq!(
            entry.meanings[0].definitions[1].example.as_deref(),
            Some("The keeper climbed to the lantern.")
        );
    }

    #[test]
    fn missing_arrays_default_to_empty() {
        let entry: DictionaryEntry = serde_json::from_str(r#"{ "word": "ember" }"#).unwrap();
        assert!(entry.phonetics.is_empty());
        assert!(entry.meanings.is_empty());
        assert_eq!(entry.phonetic_text(), None);
    }
}
