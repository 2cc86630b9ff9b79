use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;
use tracing::warn;

use crate::args::CliArgs;
use crate::client::HttpRegisterClient;
use crate::config::Config;
use crate::config::load_config;
use crate::error::Result;
use crate::navigator::ChannelNavigator;
use crate::navigator::Route;
use crate::session::RegisterSession;
use crate::session::SubmitOutcome;
use crate::tracing::setup_tracing;

/// Headless driver: one form session filled from the command line and submitted once.
pub struct Registrar {
    pub config: Config,
    pub session: RegisterSession,
    routes: mpsc::UnboundedReceiver<Route>,
}

impl Registrar {
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(HttpRegisterClient::new(&config.register)?);
        let (navigator, routes) = ChannelNavigator::channel();
        let session = RegisterSession::new(config.session.clone(), client, Arc::new(navigator));
        Ok(Self { config, session, routes })
    }

    pub async fn run(args: CliArgs) -> Result<()> {
        let config = match load_config(&args.config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Using default configuration: {:#}", e);
                Config::default()
            },
        };

        let _tracing = setup_tracing("musajjil", &config.logging)?;
        info!("Starting Musajjil (مسجّل): The Registrar");

        let mut registrar = Registrar::new(config)?;
        info!("registrar::run::endpoint::{}", registrar.config.register.endpoint);

        registrar.fill(&args);

        let outcome = tokio::select! {
            outcome = registrar.session.submit() => outcome,
            _ = tokio::signal::ctrl_c() => {
                info!("termination_signal::graceful_shutdown");
                registrar.session.close();
                return Ok(());
            }
        };

        registrar.report(&outcome);

        if outcome == SubmitOutcome::Registered {
            if let Some(route) = registrar.wait_for_redirect().await {
                println!("Redirecting to {}", route);
            }
        }

        registrar.session.close();
        info!("registrar::shutdown");
        Ok(())
    }

    pub fn fill(
        &self,
        args: &CliArgs,
    ) {
        self.session.set_username(args.username.as_str());
        self.session.set_email(args.email.as_str());
        self.session.set_password(args.password.as_str());
        self.session.set_terms(args.agree_terms);
    }

    fn report(
        &self,
        outcome: &SubmitOutcome,
    ) {
        let message = self.session.message_text();
        if !message.is_empty() {
            println!("{}", message);
        }

        match outcome {
            SubmitOutcome::Invalid(errors) => {
                for (field, error) in errors.iter() {
                    println!("  {}: {}", field, error);
                }
            },
            SubmitOutcome::Blocked(violation) => println!("  username: {}", violation.hint()),
            _ => {},
        }
    }

    async fn wait_for_redirect(&mut self) -> Option<Route> {
        // the redirect fires after the configured delay, give it the same again as slack
        let wait = self.config.session.redirect_delay() * 2;
        match tokio::time::timeout(wait, self.routes.recv()).await {
            Ok(route) => route,
            Err(_) => {
                warn!("registrar::redirect::timed_out");
                None
            },
        }
    }
}
