// ─────────────────────────────────────────────────────────────────────────────
//  Musajjil: account registration client
//
//  Musajjil (مسجّل): "The Registrar". Validates a sign-up form on the client
//  and only then hands it to the registration service.
// ─────────────────────────────────────────────────────────────────────────────
use clap::Parser;
use musajjil::args::CliArgs;
use musajjil::engine::Registrar;
use musajjil::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    Registrar::run(args).await?;
    Ok(())
}
