/// torus3d - Rotating ASCII Torus
///
/// Spins a sampled torus in front of a perspective camera until the process
/// is killed. There are no controls.

use anyhow::Result;
use torus3d_core::SceneConfig;
use torus3d_terminal::{CrosstermConsole, StopToken, TerminalApp};
use torus3d_terminal::logging::env_log_filter;
use tracing_subscriber::{fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_log_filter())
        .init();

    let config = SceneConfig::default();
    let mut app = TerminalApp::new(CrosstermConsole::stdout(), &config)?;
    app.run(&StopToken::new())?;

    Ok(())
}
