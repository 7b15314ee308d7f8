#[cfg(test)]
mod tests {
    use crate::{ApiClient, ApiConfig, ApiError};
    use notehub_core::{NoteDraft, NoteTag, QueryKey};
    use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup_mock_server() -> MockServer {
        MockServer::start().await
    }

    fn test_client(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(server.uri(), "test-token")).unwrap()
    }

    fn note_json(id: &str, title: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "content": "body",
            "tag": "Todo",
            "createdAt": "2025-04-01T10:00:00Z",
            "updatedAt": "2025-04-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_fetch_notes_sends_paging_and_search_params() {
        let server = setup_mock_server().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/notes"))
            .and(header("Authorization", "Bearer test-token"))
            .and(query_param("page", "2"))
            .and(query_param("perPage", "12"))
            .and(query_param("search", "rust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "notes": [note_json("n1", "Rust notes")],
                "totalPages": 3
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client.fetch_notes(&QueryKey::new(2, "rust")).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.notes.len(), 1);
        assert_eq!(page.notes[0].title, "Rust notes");
    }

    #[tokio::test]
    async fn test_empty_search_omits_the_param() {
        let server = setup_mock_server().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/notes"))
            .and(query_param("page", "1"))
            .and(query_param_is_missing("search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "notes": [],
                "totalPages": 0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = client.fetch_notes(&QueryKey::new(1, "")).await.unwrap();
        assert!(page.notes.is_empty());
    }

    #[tokio::test]
    async fn test_create_note_posts_draft_body() {
        let server = setup_mock_server().await;
        let client = test_client(&server);
        let draft = NoteDraft::new("Weekly sync".to_owned(), "agenda".to_owned(), NoteTag::Meeting);

        Mock::given(method("POST"))
            .and(path("/notes"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(serde_json::json!({
                "title": "Weekly sync",
                "content": "agenda",
                "tag": "Meeting"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(note_json("n9", "Weekly sync")))
            .expect(1)
            .mount(&server)
            .await;

        let note = client.create_note(&draft).await.unwrap();
        assert_eq!(note.id, "n9");
    }

    #[tokio::test]
    async fn test_delete_note_targets_the_id_path() {
        let server = setup_mock_server().await;
        let client = test_client(&server);

        Mock::given(method("DELETE"))
            .and(path("/notes/n42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(note_json("n42", "gone")))
            .expect(1)
            .mount(&server)
            .await;

        let note = client.delete_note("n42").await.unwrap();
        assert_eq!(note.id, "n42");
    }

    #[tokio::test]
    async fn test_error_status_carries_code_and_body() {
        let server = setup_mock_server().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
            .mount(&server)
            .await;

        let err = client.fetch_notes(&QueryKey::new(1, "")).await.unwrap_err();
        assert!(!err.is_transient());
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Unauthorized"));
    }

    #[tokio::test]
    async fn test_server_errors_classify_as_transient() {
        let server = setup_mock_server().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let err = client.fetch_notes(&QueryKey::new(1, "")).await.unwrap_err();
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_malformed_body_reports_parse_context() {
        let server = setup_mock_server().await;
        let client = test_client(&server);

        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client.fetch_notes(&QueryKey::new(1, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::JsonParse { .. }));
        assert!(err.to_string().contains("notes listing"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(crate::truncate("héllo", 2), "h");
        assert_eq!(crate::truncate("short", 200), "short");
    }
}
