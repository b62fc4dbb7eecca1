use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::TcpListener,
    task::JoinHandle,
};
use word_wizard::{
    core::WizardError,
    dictionary::{
        fallback_links,
        DefinitionLookup,
        DefinitionSource,
        DefinitionStatus,
        DictionaryClient,
        DictionarySettings,
        SelectOutcome,
    },
};

const QUILL_JSON: &str = r#"[{
    "word": "quill",
    "phonetics": [{ "text": "/kwɪl/" }],
    "meanings": [{
        "partOfSpeech": "noun",
        "definitions": [{ "definition": "A pen made from a feather.", "example": "She signed with a quill." }]
    }]
}]"#;

const NOT_FOUND_JSON: &str =
    r#"{"title":"No Definitions Found","message":"Sorry pal.","resolution":"Try again."}"#;

/// Accepts one connection, answers it with `status` and `body`, and returns
/// the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/api/v2/entries/en/", listener.local_addr().unwrap());

    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string()
    });

    (base_url, server)
}

fn client(base_url: String) -> DictionaryClient {
    DictionaryClient::new(&DictionarySettings { base_url, timeout_secs: 5 }).unwrap()
}

#[tokio::test]
async fn fetches_and_parses_entries() {
    let (base_url, server) = serve_once("200 OK", QUILL_JSON).await;

    let entries = client(base_url).lookup("Quill").await.unwrap();

    let request_line = server.await.unwrap();
    assert!(request_line.starts_with("GET /api/v2/entries/en/Quill "));

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "quill");
    assert_eq!(entries[0].phonetic_text(), Some("/kwɪl/"));
    let definition = &entries[0].meanings[0].definitions[0];
    assert_eq!(definition.definition, "A pen made from a feather.");
    assert_eq!(definition.example.as_deref(), Some("She signed with a quill."));
}

#[tokio::test]
async fn missing_word_fails_with_a_readable_message() {
    let (base_url, server) = serve_once("404 Not Found", NOT_FOUND_JSON).await;

    let error = client(base_url).lookup("Zyxqq").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(&error, WizardError::DefinitionNotFound(word) if word == "Zyxqq"));
    let message = error.user_message();
    assert!(!message.trim().is_empty());

    let mut lookup = DefinitionLookup::new();
    let SelectOutcome::Fetch(ticket) = lookup.select("Zyxqq") else {
        panic!("expected a fetch");
    };
    assert!(lookup.apply(&ticket, Err(message.clone())));
    assert_eq!(lookup.status(), &DefinitionStatus::Failed(message));

    for link in fallback_links("Zyxqq") {
        assert!(link.url.contains("Zyxqq"));
    }
}

#[tokio::test]
async fn empty_result_counts_as_not_found() {
    let (base_url, server) = serve_once("200 OK", "[]").await;

    let error = client(base_url).lookup("Hollow").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(error, WizardError::DefinitionNotFound(_)));
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let (base_url, server) = serve_once("200 OK", "{not json").await;

    let error = client(base_url).lookup("Ember").await.unwrap_err();
    server.await.unwrap();

    assert!(!matches!(error, WizardError::DefinitionNotFound(_)));
    assert!(!error.user_message().is_empty());
}
