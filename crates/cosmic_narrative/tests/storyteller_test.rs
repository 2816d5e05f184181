mod test_utils;

use cosmic_narrative::{StorySession, StoryTeller};
use test_utils::{RecordingView, ScriptedGenerator, ViewEvent, content, test_config};

#[tokio::test]
async fn test_generated_story_is_displayed_and_stored() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::replying("  The station lights flicker.\n\nThen darkness.  ");
    let teller = StoryTeller::new(generator.clone(), &test_config(), content());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    let unit = teller
        .generate_story(&mut session, &mut view, Some("Tell me a story"))
        .await
        .expect("story generated");

    assert_eq!(unit.story(), "The station lights flicker.\n\nThen darkness.");
    assert_eq!(session.current().as_ref(), Some(&unit));
    assert_eq!(generator.prompts(), vec!["Tell me a story"]);
    assert_eq!(
        view.events,
        vec![
            ViewEvent::Loading(true),
            ViewEvent::Story(unit.clone()),
            ViewEvent::Loading(false),
        ]
    );
    assert!(!session.is_generating());
    Ok(())
}

#[tokio::test]
async fn test_random_prompt_comes_from_scenario_pool() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::replying("A tale.");
    let content = content();
    let teller = StoryTeller::new(generator.clone(), &test_config(), content.clone());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    teller.regenerate(&mut session, &mut view).await;

    let prompt = &generator.prompts()[0];
    assert!(content.story_prompts().contains(prompt));
    Ok(())
}

#[tokio::test]
async fn test_total_failure_uses_fallback_story() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::failing();
    let config = test_config();
    let content = content();
    let teller = StoryTeller::new(generator.clone(), &config, content.clone());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    let unit = teller
        .generate_story(&mut session, &mut view, Some("original"))
        .await
        .expect("fallback story");

    assert!(content.fallback_stories().contains(unit.story()));
    assert!(!unit.has_choices());
    assert_eq!(generator.call_count(), config.endpoints.len() * 2);

    // Second half of the attempts use the simplified story prompt
    let prompts = generator.prompts();
    assert_eq!(prompts[0], "original");
    assert_eq!(prompts[2], config.fallback_prompts.story);
    assert_eq!(view.events.last(), Some(&ViewEvent::Loading(false)));
    assert!(!session.is_generating());
    Ok(())
}

#[tokio::test]
async fn test_empty_text_uses_fallback_story() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::replying("   ");
    let content = content();
    let teller = StoryTeller::new(generator.clone(), &test_config(), content.clone());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    let unit = teller
        .generate_story(&mut session, &mut view, None)
        .await
        .expect("fallback story");

    assert!(content.fallback_stories().contains(unit.story()));
    assert_eq!(generator.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_request_during_generation_is_dropped() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::replying("unused");
    let teller = StoryTeller::new(generator.clone(), &test_config(), content());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    let guard = session.flag().try_acquire().expect("flag free");
    let result = teller.generate_story(&mut session, &mut view, None).await;

    assert!(result.is_none());
    assert_eq!(generator.call_count(), 0);
    assert!(session.current().is_none());
    assert!(view.events.is_empty());

    drop(guard);
    assert!(teller.regenerate(&mut session, &mut view).await.is_some());
    Ok(())
}

#[tokio::test]
async fn test_custom_prompt_wraps_idea() -> anyhow::Result<()> {
    let generator = ScriptedGenerator::replying("A whale sings.");
    let teller = StoryTeller::new(generator.clone(), &test_config(), content());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    teller
        .custom_prompt(&mut session, &mut view, "  a singing space whale ")
        .await?;

    let prompt = &generator.prompts()[0];
    assert!(prompt.contains("based on this idea: \"a singing space whale\""));
    assert!(prompt.contains("300-500 words"));
    Ok(())
}

#[tokio::test]
async fn test_blank_idea_is_rejected_without_request() {
    let generator = ScriptedGenerator::replying("unused");
    let teller = StoryTeller::new(generator.clone(), &test_config(), content());
    let mut session = StorySession::new();
    let mut view = RecordingView::default();

    let err = teller
        .custom_prompt(&mut session, &mut view, "   ")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("idea cannot be empty"));
    assert_eq!(generator.call_count(), 0);
}
