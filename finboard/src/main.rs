use anyhow::Result;

use finboard::{logging, App};
use finboard_auth::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let (log_path, _guard) = logging::init_logging()?;

    let settings = Settings::new()?;
    settings.validate().map_err(anyhow::Error::msg)?;
    tracing::info!(
        "finboard starting against {} (logging to {})",
        settings.api_url,
        log_path.display()
    );

    // Prompts on stdin when no session is configured or stored, so this runs
    // before the terminal switches to raw mode.
    let session = finboard_auth::authenticate(&settings)?;

    App::new(settings, session).run().await?;

    Ok(())
}
