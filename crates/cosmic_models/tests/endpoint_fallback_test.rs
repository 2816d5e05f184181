// Tests for EndpointFallbackClient using a scripted mock generator.

mod test_utils;

use cosmic_error::{CosmicErrorKind, GeminiErrorKind};
use cosmic_models::EndpointFallbackClient;
use test_utils::{MockGemini, MockResponse, config_with_endpoints};

const SIMPLE: &str = "simplified prompt";

#[tokio::test]
async fn test_first_endpoint_success() -> anyhow::Result<()> {
    let config = config_with_endpoints(3);
    let mock = MockGemini::new(vec![MockResponse::Content("A ship drifts.".to_string())]);
    let client = EndpointFallbackClient::new(mock.clone(), &config);

    let text = client.call_api("original", SIMPLE).await?;

    assert_eq!(text, "A ship drifts.");
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.calls()[0], (config.endpoints[0].clone(), "original".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_failures_advance_through_endpoints_in_order() -> anyhow::Result<()> {
    let config = config_with_endpoints(3);
    let mock = MockGemini::new(vec![
        MockResponse::Status(500),
        MockResponse::Transport,
        MockResponse::Legacy("legacy text".to_string()),
    ]);
    let client = EndpointFallbackClient::new(mock.clone(), &config);

    let text = client.call_api("original", SIMPLE).await?;

    assert_eq!(text, "legacy text");
    let endpoints: Vec<String> = mock.calls().into_iter().map(|(endpoint, _)| endpoint).collect();
    assert_eq!(endpoints, config.endpoints);
    Ok(())
}

#[tokio::test]
async fn test_unrecognized_shape_advances_to_next_endpoint() -> anyhow::Result<()> {
    let config = config_with_endpoints(2);
    let mock = MockGemini::new(vec![
        MockResponse::Unrecognized,
        MockResponse::Content("second".to_string()),
    ]);
    let client = EndpointFallbackClient::new(mock.clone(), &config);

    assert_eq!(client.call_api("original", SIMPLE).await?, "second");
    assert_eq!(mock.call_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_simplified_prompt_used_after_all_endpoints_fail() -> anyhow::Result<()> {
    let config = config_with_endpoints(2);
    let mock = MockGemini::new(vec![
        MockResponse::Status(429),
        MockResponse::Status(503),
        MockResponse::Content("from simple prompt".to_string()),
    ]);
    let client = EndpointFallbackClient::new(mock.clone(), &config);

    let text = client.call_api("original", SIMPLE).await?;

    assert_eq!(text, "from simple prompt");
    let prompts: Vec<String> = mock.calls().into_iter().map(|(_, prompt)| prompt).collect();
    assert_eq!(prompts, vec!["original", "original", SIMPLE]);
    // The simplified prompt restarts from the first endpoint
    assert_eq!(mock.calls()[2].0, config.endpoints[0]);
    Ok(())
}

#[tokio::test]
async fn test_exhausting_everything_makes_endpoints_times_two_calls() {
    for endpoint_count in 1..=4 {
        let config = config_with_endpoints(endpoint_count);
        let mock = MockGemini::always_failing();
        let client = EndpointFallbackClient::new(mock.clone(), &config);

        let err = client.call_api("original", SIMPLE).await.unwrap_err();

        assert_eq!(mock.call_count(), endpoint_count * 2);
        match err.kind() {
            CosmicErrorKind::Gemini(gemini) => match &gemini.kind {
                GeminiErrorKind::AllEndpointsFailed { attempts, last_error } => {
                    assert_eq!(*attempts, endpoint_count * 2);
                    assert!(last_error.contains("503"));
                }
                other => panic!("Expected AllEndpointsFailed, got {:?}", other),
            },
            other => panic!("Expected Gemini error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_empty_text_is_returned_not_retried() -> anyhow::Result<()> {
    let config = config_with_endpoints(3);
    let mock = MockGemini::new(vec![MockResponse::Content(String::new())]);
    let client = EndpointFallbackClient::new(mock.clone(), &config);

    assert_eq!(client.call_api("original", SIMPLE).await?, "");
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_no_endpoints_fails_without_calling() {
    let config = config_with_endpoints(0);
    let mock = MockGemini::new(vec![MockResponse::Content("unused".to_string())]);
    let client = EndpointFallbackClient::new(mock.clone(), &config);

    let err = client.call_api("original", SIMPLE).await.unwrap_err();

    assert!(err.to_string().contains("No Gemini endpoints"));
    assert_eq!(mock.call_count(), 0);
}
