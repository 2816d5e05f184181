//! Interactive roleplay loop over standard input.

use std::sync::Arc;

use cosmic::{
    ContentTable, CosmicConfig, CosmicResult, GeminiHttpClient, Roleplay, RoleplayAction,
    StoryError, StoryErrorKind, StorySession, StoryView, TerminalView, parse_character,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

/// Run the roleplay until the player quits or input ends.
///
/// Without `character` the player is asked to choose one first. Commands:
/// `1`-`3` pick a choice, `r` restarts, `w` returns to character selection,
/// `q` quits.
pub async fn run_roleplay(
    config: &CosmicConfig,
    content: Arc<ContentTable>,
    character: Option<&str>,
) -> CosmicResult<()> {
    let client = GeminiHttpClient::from_config(config)?;
    let roleplay = Roleplay::new(client, config, content.clone());
    let mut session = StorySession::new();
    let mut view = TerminalView::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if let Some(name) = character {
        let character = parse_character(name)?;
        roleplay.select_character(&mut session, character);
    }

    loop {
        if session.selected_character().is_none() {
            if !choose_character(&roleplay, &content, &mut session, &mut view, &mut lines).await? {
                break;
            }
        }

        if session.current().is_none() {
            let profile = session
                .selected_character()
                .map(|character| content.profile(character));
            if let Some(profile) = profile {
                println!("\n{} {}", profile.icon(), profile.name());
            }
            if let Err(e) = roleplay.start_adventure(&mut session, &mut view).await {
                view.display_error(&e.to_string());
                continue;
            }
        }

        prompt("Your choice (1-3, r = restart, w = characters, q = quit): ");
        let Some(line) = read_line(&mut lines).await? else {
            break;
        };

        let action = match line.parse::<RoleplayAction>() {
            Ok(action) => action,
            Err(e) => {
                view.display_error(&e.to_string());
                continue;
            }
        };

        debug!(?action, "Roleplay input");
        let result = match action {
            RoleplayAction::Choose(index) => roleplay
                .make_choice(&mut session, &mut view, index)
                .await
                .map(|_| ()),
            RoleplayAction::Restart => roleplay
                .restart(&mut session, &mut view)
                .await
                .map(|_| ()),
            RoleplayAction::Welcome => {
                roleplay.show_welcome(&mut session);
                Ok(())
            }
            RoleplayAction::Quit => break,
        };

        if let Err(e) = result {
            view.display_error(&e.to_string());
        }
    }

    info!(turns = session.history().len(), "Roleplay ended");
    println!("Safe travels, explorer. 🚀");
    Ok(())
}

/// Ask for a character until one is chosen. Returns `false` on quit or end
/// of input.
async fn choose_character(
    roleplay: &Roleplay<GeminiHttpClient>,
    content: &ContentTable,
    session: &mut StorySession,
    view: &mut TerminalView,
    lines: &mut Lines<BufReader<Stdin>>,
) -> CosmicResult<bool> {
    println!("\nChoose your character:");
    for (character, profile) in content.roster() {
        println!("  {} {:<16} {} ({})", profile.icon(), profile.name(), profile.description(), character);
    }

    loop {
        prompt("Character (astronaut, scientist, pilot, engineer) or q: ");
        let Some(line) = read_line(lines).await? else {
            return Ok(false);
        };
        if matches!(line.trim(), "q" | "Q") {
            return Ok(false);
        }

        match parse_character(&line) {
            Ok(character) => {
                roleplay.select_character(session, character);
                return Ok(true);
            }
            Err(e) => view.display_error(&e.to_string()),
        }
    }
}

fn prompt(text: &str) {
    use std::io::Write;

    print!("{}", text);
    // The prompt is cosmetic; a failed flush only delays it.
    let _ = std::io::stdout().flush();
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> CosmicResult<Option<String>> {
    lines
        .next_line()
        .await
        .map_err(|e| StoryError::new(StoryErrorKind::InputRead(e.to_string())).into())
}
