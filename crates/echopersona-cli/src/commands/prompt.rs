use clap::Subcommand;

use super::open_state;

#[derive(Subcommand)]
pub enum PromptAction {
    /// Show the current prompt, picking one if none is set
    Show,
    /// Skip to a new random prompt
    Skip,
    /// Set the current prompt
    Set {
        /// Prompt text
        text: String,
    },
    /// Recently shown prompts, newest first
    History,
    /// Clear the current prompt and history
    Clear,
}

pub fn run(action: PromptAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut state) = open_state()?;
    let mut rng = rand::thread_rng();

    match action {
        PromptAction::Show => {
            let had_prompt = state.prompt.current().is_some();
            println!("{}", state.prompt.ensure_prompt(&mut rng));
            if !had_prompt {
                db.save_prompt(&state.prompt)?;
            }
        }
        PromptAction::Skip => {
            println!("{}", state.prompt.rotate_prompt(&mut rng));
            db.save_prompt(&state.prompt)?;
        }
        PromptAction::Set { text } => {
            if text.trim().is_empty() {
                return Err("prompt must not be empty".into());
            }
            state.prompt.set_current_prompt(text);
            db.save_prompt(&state.prompt)?;
            println!("ok");
        }
        PromptAction::History => {
            for prompt in &state.prompt.prompt_history {
                println!("{prompt}");
            }
        }
        PromptAction::Clear => {
            state.prompt.clear_prompt_history();
            db.save_prompt(&state.prompt)?;
            println!("prompt history cleared");
        }
    }
    Ok(())
}
