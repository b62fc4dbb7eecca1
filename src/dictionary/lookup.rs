use reqwest::Url;

use super::DictionaryEntry;

static IDLE: DefinitionStatus = DefinitionStatus::Idle;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefinitionStatus {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<DictionaryEntry>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionState {
    pub word: String,
    pub status: DefinitionStatus,
}

impl DefinitionState {
    pub fn first_entry(&self) -> Option<&DictionaryEntry> {
        match &self.status {
            DefinitionStatus::Loaded(entries) => entries.first(),
            _ => None,
        }
    }
}

/// One outstanding request. A response is only applied while its ticket is
/// still the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub id: u64,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Fetch(LookupTicket),
    Closed,
}

#[derive(Debug, Default)]
pub struct DefinitionLookup {
    current: Option<(u64, DefinitionState)>,
    requests_issued: u64,
}

impl DefinitionLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&DefinitionState> {
        self.current.as_ref().map(|(_, state)| state)
    }

    pub fn selected_word(&self) -> Option<&str> {
        self.state().map(|state| state.word.as_str())
    }

    pub fn status(&self) -> &DefinitionStatus {
        self.state().map(|state| &state.status).unwrap_or(&IDLE)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Selecting the open word closes it; any other word starts a fresh lookup.
    pub fn select(&mut self, word: &str) -> SelectOutcome {
        if self.selected_word() == Some(word) {
            self.close();
            return SelectOutcome::Closed;
        }

        self.requests_issued += 1;
        let id = self.requests_issued;
        self.current = Some((
            id,
            DefinitionState { word: word.to_string(), status: DefinitionStatus::Loading },
        ));

        SelectOutcome::Fetch(LookupTicket { id, word: word.to_string() })
    }

    pub fn close(&mut self) {
        if let Some((_, state)) = self.current.take() {
            log::debug!("Closed definition for \"{}\"", state.word);
        }
    }

    pub fn apply(
        &mut self,
        ticket: &LookupTicket,
        result: Result<Vec<DictionaryEntry>, String>,
    ) -> bool {
        let Some((id, state)) = self.current.as_mut() else {
            log::trace!("Dropping response for \"{}\": nothing selected", ticket.word);
            return false;
        };

        if *id != ticket.id || state.word != ticket.word {
            log::trace!("Dropping stale response for \"{}\"", ticket.word);
            return false;
        }

        state.status = match result {
            Ok(entries) => DefinitionStatus::Loaded(entries),
            Err(message) => {
                log::warn!("Lookup for \"{}\" failed: {}", ticket.word, message);
                DefinitionStatus::Failed(message)
            }
        };
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackLink {
    pub label: &'static str,
    pub url: String,
}

/// External search pages offered when the dictionary has nothing for `word`.
pub fn fallback_links(word: &str) -> Vec<FallbackLink> {
    let google = Url::parse_with_params(
        "https://www.google.com/search",
        &[("q", format!("define {word}"))],
    )
    .ok()
    .map(|url| FallbackLink { label: "Google", url: url.to_string() });

    let wiktionary = Url::parse("https://en.wiktionary.org/wiki/").ok().and_then(|mut url| {
        url.path_segments_mut().ok()?.pop_if_empty().push(word);
        Some(FallbackLink { label: "Wiktionary", url: url.to_string() })
    });

    google.into_iter().chain(wiktionary).collect()
}
