use chrono::Local;
use echopersona_core::calendar;

use super::open_state;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_db, state) = open_state()?;
    let counts = calendar::day_counts(state.journal.entries(), &Local);

    if json {
        let days: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(day, count)| (day.format("%Y-%m-%d").to_string(), (*count).into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&days)?);
    } else if counts.is_empty() {
        println!("No entries yet.");
    } else {
        for (day, count) in &counts {
            println!("{}  {count}", day.format("%Y-%m-%d"));
        }
    }
    Ok(())
}
