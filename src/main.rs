//! Contact form client - interactive terminal front end.
//!
//! Reads commands from stdin and renders the form and submission list to stdout.
//! Logs go to stderr.

use anyhow::Result;
use contact_form_client::{
    AsyncContactClient, Config, ConsoleNotifier, ContactApi, ContactApiClient,
    ContactFormController, FormView, Notifier, SubmissionListView, SubmitError,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  set <field> <value>   fname, lname, address, phone, email
  submit                validate and send the form
  refresh               reload submitted entries
  show                  render the form and entries
  help                  this text
  quit                  exit";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using form backend at {}", config.api_base_url);

    let client = AsyncContactClient::new(ContactApiClient::new(&config));
    let metrics = client.metrics().clone();
    let api = Arc::new(client) as Arc<dyn ContactApi>;
    let notifier = Arc::new(ConsoleNotifier::new()) as Arc<dyn Notifier>;

    let mut controller = ContactFormController::new(api, notifier);
    if controller.refresh().await.is_err() {
        println!("Could not load submitted entries.");
    }
    render(&controller);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "set" => {
                let (name, value) = rest.trim_start().split_once(' ').unwrap_or((rest, ""));
                match controller.update_field(name, value) {
                    Ok(()) => render_form(&controller),
                    Err(e) => println!("{}", e),
                }
            }
            "submit" => match controller.submit().await {
                Ok(()) => render(&controller),
                Err(SubmitError::Invalid(_)) => render_form(&controller),
                Err(SubmitError::Api(_)) => {}
            },
            "refresh" => {
                if controller.refresh().await.is_err() {
                    println!("Could not load submitted entries.");
                }
                render_list(&controller);
            }
            "show" => render(&controller),
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try `help`)", other),
        }
    }

    info!("Session metrics: {:?}", metrics.summary());
    Ok(())
}

fn render(controller: &ContactFormController) {
    render_form(controller);
    println!();
    render_list(controller);
}

fn render_form(controller: &ContactFormController) {
    print!("{}", FormView(controller.form()));
}

fn render_list(controller: &ContactFormController) {
    print!("{}", SubmissionListView::of(controller));
}
