use clap::Subcommand;

use super::open_state;

#[derive(Subcommand)]
pub enum PremiumAction {
    /// Show whether premium is active
    Status,
    /// Mark premium as active
    Enable,
    /// Clear the subscription
    Disable,
}

pub fn run(action: PremiumAction) -> Result<(), Box<dyn std::error::Error>> {
    let (db, mut state) = open_state()?;

    match action {
        PremiumAction::Status => {
            println!("{}", if state.premium.is_premium { "premium" } else { "free" });
        }
        PremiumAction::Enable => {
            state.premium.set_premium_status(true);
            db.save_premium(&state.premium)?;
            println!("premium");
        }
        PremiumAction::Disable => {
            state.premium.clear_subscription();
            db.save_premium(&state.premium)?;
            println!("free");
        }
    }
    Ok(())
}
