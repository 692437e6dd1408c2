//! The interactive assistant flow.
//!
//! A small page state machine — Landing, Results, Details — mirroring the
//! assistant's three screens. Landing collects the job description and
//! month, a fixed delay simulates the search, Results offers the three
//! mock slots, and Details runs the event form before persisting and
//! exporting the chosen slot.

use anyhow::{Context, Result, bail};
use dialoguer::{Input, Select};
use nextgencal_core::Event;
use nextgencal_core::config::NextgencalConfig;
use nextgencal_core::export;
use nextgencal_core::store::EventStore;
use owo_colors::OwoColorize;
use tokio::time::{Duration, sleep};

use super::SEARCH_DELAY_MS;
use crate::form::{EventForm, MONTHS, default_month_index};
use crate::render::Render;
use crate::results::{SearchResult, mock_results};
use crate::utils::tui::create_spinner;

enum Page {
    Landing,
    Results(Vec<SearchResult>),
    Details(Vec<SearchResult>, SearchResult),
}

pub async fn run(job_description: Option<String>, month: Option<String>) -> Result<()> {
    let config = NextgencalConfig::load()?;
    let mut page = Page::Landing;

    loop {
        page = match page {
            Page::Landing => {
                println!("{}", "Search Calendar Events".bold());

                let job = match &job_description {
                    Some(j) => j.clone(),
                    None => Input::<String>::new()
                        .with_prompt("  Job description")
                        .interact_text()?,
                };
                let month_name = resolve_month_arg(month.as_deref())?;

                let spinner = create_spinner(format!(
                    "Searching events for \"{}\" in {}",
                    job, month_name
                ));
                sleep(Duration::from_millis(SEARCH_DELAY_MS)).await;
                spinner.finish_and_clear();

                Page::Results(mock_results())
            }
            Page::Results(results) => {
                println!();
                println!("{}", "Search Results".bold());

                let mut items: Vec<String> = results.iter().map(|r| r.render()).collect();
                items.push("Back to search".to_string());

                let selection = Select::new()
                    .with_prompt("  Pick a slot")
                    .items(&items)
                    .default(0)
                    .interact()?;

                if selection == results.len() {
                    Page::Landing
                } else {
                    let chosen = results[selection].clone();
                    Page::Details(results, chosen)
                }
            }
            Page::Details(results, chosen) => {
                println!();
                println!("{}", "Advanced Details".bold());

                match prompt_details(&chosen)? {
                    Some(event) => {
                        let store = EventStore::new(&config.data_path()?);
                        store.append(&event)?;
                        success_menu(&config, &event)?;
                        return Ok(());
                    }
                    None => Page::Results(results),
                }
            }
        };
    }
}

/// Resolve a month argument against the selector names, or prompt for one.
fn resolve_month_arg(month: Option<&str>) -> Result<String> {
    match month {
        Some(name) => match month_index(name) {
            Some(index) => Ok(MONTHS[index].to_string()),
            None => bail!("Unknown month \"{}\". Expected one of: {}", name, MONTHS.join(", ")),
        },
        None => {
            let selection = Select::new()
                .with_prompt("  Month")
                .items(&MONTHS)
                .default(default_month_index())
                .interact()?;
            Ok(MONTHS[selection].to_string())
        }
    }
}

fn month_index(name: &str) -> Option<usize> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
}

/// Run the details form prefilled from the chosen slot. Returns `None` when
/// the user backs out to the results page.
fn prompt_details(result: &SearchResult) -> Result<Option<Event>> {
    let prefill = EventForm::from_result(result);

    loop {
        let form = EventForm {
            title: Input::new()
                .with_prompt("  Event title")
                .default(prefill.title.clone())
                .interact_text()?,
            link: Input::new()
                .with_prompt("  Event link (empty for online)")
                .default(prefill.link.clone())
                .interact_text()?,
            day: Input::new()
                .with_prompt("  Day")
                .default(prefill.day.clone())
                .interact_text()?,
            month: Input::new()
                .with_prompt("  Month")
                .default(prefill.month.clone())
                .interact_text()?,
            year: Input::new()
                .with_prompt("  Year")
                .default(prefill.year.clone())
                .interact_text()?,
            hours: Input::new()
                .with_prompt("  Hours")
                .default(prefill.hours.clone())
                .interact_text()?,
            minutes: Input::new()
                .with_prompt("  Minutes")
                .default(prefill.minutes.clone())
                .interact_text()?,
        };

        match form.build() {
            Ok(event) => return Ok(Some(event)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());

                let retry = Select::new()
                    .with_prompt("  Next")
                    .items(&["Edit details", "Back to results"])
                    .default(0)
                    .interact()?;
                if retry == 1 {
                    return Ok(None);
                }
            }
        }
    }
}

/// The success screen: write the ICS file and offer the calendar options.
fn success_menu(config: &NextgencalConfig, event: &Event) -> Result<()> {
    let path = super::write_ics(config, event)?;
    let google = export::google_calendar_url(event);
    let outlook = export::outlook_calendar_url(event);

    println!();
    println!(
        "{}",
        format!("Event \"{}\" has been added successfully!", event.title).green()
    );
    println!("  {} {}", "Saved:".dimmed(), path.display());

    loop {
        let choice = Select::new()
            .with_prompt("  Add to your calendar")
            .items(&[
                "Open Google Calendar",
                "Open Outlook",
                "Show links",
                "Done",
            ])
            .default(3)
            .interact()?;

        match choice {
            0 => open::that(&google).context("Could not open browser")?,
            1 => open::that(&outlook).context("Could not open browser")?,
            2 => {
                println!("  {} {}", "Google:".dimmed(), google);
                println!("  {} {}", "Outlook:".dimmed(), outlook);
            }
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup_is_case_insensitive() {
        assert_eq!(month_index("august"), Some(7));
        assert_eq!(month_index("  AUGUST "), Some(7));
        assert_eq!(month_index("January"), Some(0));
        assert_eq!(month_index("Smarch"), None);
    }

    #[test]
    fn month_arg_is_normalized() {
        assert_eq!(resolve_month_arg(Some("august")).unwrap(), "August");
        assert!(resolve_month_arg(Some("Smarch")).is_err());
    }
}
