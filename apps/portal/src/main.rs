use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod console;

use cli::{Cli, Commands};
use console::ConsolePage;
use portal_cell::{PageEvent, PortalRouter, PortalState};
use shared_config::AppConfig;
use shared_models::error::PortalError;
use shared_utils::page::ids;

#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = resolve_config(cli.base_url, AppConfig::from_env())?;
    info!("Using hospital server at {}", config.hospital_base_url);

    let (page, events) = prepare(cli.command);

    let mut router = PortalRouter::new(Arc::new(page), Arc::new(PortalState::new(config)));
    let dismissal = router.on_load();

    let succeeded = drive(&router, events).await?;
    dismissal.abort();

    if let Some(html) = router.page().inner_html(ids::DOCTOR_RESULTS) {
        println!("{}", html);
    }

    finish(succeeded)
}

/// Apply the `--base-url` override on top of the environment.
fn resolve_config(base_url: Option<String>, config: AppConfig) -> Result<AppConfig, PortalError> {
    let config = match base_url {
        Some(url) => config.with_base_url(url),
        None => config,
    };

    if !config.is_configured() {
        return Err(PortalError::Config(
            "no hospital server configured; set HOSPITAL_BASE_URL or pass --base-url".to_string(),
        ));
    }
    Ok(config)
}

/// Dispatch events in order, stopping at the first that does not succeed.
async fn drive(
    router: &PortalRouter<ConsolePage>,
    events: Vec<PageEvent>,
) -> Result<bool, PortalError> {
    for event in events {
        debug!("Dispatching {:?}", event);
        if !router.dispatch(event).await?.is_success() {
            return Ok(false);
        }
    }
    Ok(true)
}

fn finish(succeeded: bool) -> Result<()> {
    if !succeeded {
        bail!("request did not complete");
    }
    Ok(())
}

/// Lay out the page a command needs and the events that drive it.
fn prepare(command: Commands) -> (ConsolePage, Vec<PageEvent>) {
    match command {
        Commands::Search { specialization, date } => {
            let page = ConsolePage::new()
                .with_element(ids::SEARCH_DOCTORS_FORM)
                .with_value(ids::SPECIALIZATION, &specialization)
                .with_value(ids::APPOINTMENT_DATE, &date)
                .with_element(ids::DOCTOR_RESULTS);
            (page, vec![PageEvent::submit(ids::SEARCH_DOCTORS_FORM)])
        }
        Commands::Book { doctor_id, doctor_name, date, time, symptoms } => {
            let page = ConsolePage::new()
                .with_element(ids::BOOKING_MODAL)
                .with_value(ids::BOOKING_DOCTOR_ID, "")
                .with_element(ids::BOOKING_DOCTOR_NAME)
                .with_value(ids::BOOKING_DATE, &date)
                .with_value(ids::BOOKING_TIME, &time)
                .with_value(ids::SYMPTOMS, &symptoms);
            let events = vec![
                PageEvent::open_booking(doctor_id, doctor_name),
                PageEvent::ConfirmBooking,
            ];
            (page, events)
        }
        Commands::AddDoctor { fields } => {
            let page = ConsolePage::new().with_form(ids::ADD_DOCTOR_FORM, &fields);
            (page, vec![PageEvent::submit(ids::ADD_DOCTOR_FORM)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_config(base_url: Option<&str>) -> AppConfig {
        let base_url = base_url.map(str::to_string);
        AppConfig::from_lookup(move |key| match key {
            "HOSPITAL_BASE_URL" => base_url.clone(),
            _ => None,
        })
    }

    fn router_for(command: Commands) -> (PortalRouter<ConsolePage>, Vec<PageEvent>) {
        let config = AppConfig::default().with_base_url("http://127.0.0.1:1");
        let (page, events) = prepare(command);
        let mut router = PortalRouter::new(Arc::new(page), Arc::new(PortalState::new(config)));
        router.on_load().abort();
        (router, events)
    }

    #[test]
    fn base_url_flag_overrides_environment() {
        let cli = Cli::try_parse_from(["hospital-portal", "search", "--base-url", "http://clinic.test"])
            .unwrap();

        let config = resolve_config(cli.base_url, env_config(Some("http://env.test"))).unwrap();

        assert_eq!(config.hospital_base_url, "http://clinic.test");
    }

    #[test]
    fn environment_is_kept_without_flag() {
        let cli = Cli::try_parse_from(["hospital-portal", "search"]).unwrap();

        let config = resolve_config(cli.base_url, env_config(Some("http://env.test"))).unwrap();

        assert_eq!(config.hospital_base_url, "http://env.test");
    }

    #[test]
    fn blank_base_url_is_a_config_error() {
        let cli = Cli::try_parse_from(["hospital-portal", "--base-url", " ", "search"]).unwrap();

        let result = resolve_config(cli.base_url, env_config(None));

        assert!(matches!(result, Err(PortalError::Config(_))));
    }

    #[test]
    fn incomplete_request_exits_with_error() {
        assert!(finish(false).is_err());
        assert!(finish(true).is_ok());
    }

    #[tokio::test]
    async fn booking_without_date_does_not_succeed() {
        let cli = Cli::try_parse_from(["hospital-portal", "book", "--doctor-id", "3", "--time", "10:00"])
            .unwrap();
        let (router, events) = router_for(cli.command);

        let succeeded = drive(&router, events).await.unwrap();

        assert!(!succeeded);
        assert!(finish(succeeded).is_err());
    }

    #[tokio::test]
    async fn search_keeps_only_the_final_fragment() {
        let cli = Cli::try_parse_from(["hospital-portal", "search", "--specialization", "Cardio"])
            .unwrap();
        let (router, events) = router_for(cli.command);

        let succeeded = drive(&router, events).await.unwrap();

        assert!(!succeeded);
        let html = router.page().inner_html(ids::DOCTOR_RESULTS).unwrap();
        assert!(html.contains("Error searching doctors"));
        assert!(!html.contains("spinner-border"));
    }
}
