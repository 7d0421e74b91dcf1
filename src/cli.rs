use std::time::Duration;

use binstall::Fetcher;
use camino::Utf8PathBuf;
use clap::Parser;
use houston::Config;
use nerd_std::infoln;
use timber::Level;

use crate::{BootstrapError, Installer, Launcher, Layout, Manifest, TokioRunner};
use crate::{PKG_NAME, PKG_VERSION};

#[derive(Debug, Parser)]
#[command(
    name = "hsnerd",
    version,
    about = "
hsnerd - Hearthstone, with the nerd bits

The first run downloads and installs Battle.net and Hearthstone Deck Tracker.
Every run after that launches both of them and exits once both are closed."
)]
pub struct Hsnerd {
    /// Specify the log level
    #[arg(long = "log", short = 'l', env = "HSNERD_LOG")]
    pub log_level: Option<Level>,

    /// Where the installation marker and the optional targets.toml live
    #[arg(long, env = "HSNERD_CONFIG_HOME")]
    config_home: Option<Utf8PathBuf>,

    /// Where downloads are staged before being installed
    #[arg(long, env = "HSNERD_CACHE_HOME")]
    cache_home: Option<Utf8PathBuf>,

    /// Replaces the "Program Files (x86)" directory the programs are installed into
    #[arg(long, env = "HSNERD_INSTALL_ROOT")]
    install_root: Option<Utf8PathBuf>,

    /// Program used to start installers and games; an empty value starts them directly
    #[arg(long, env = "HSNERD_WRAPPER")]
    wrapper: Option<String>,

    /// Seconds to wait before exiting after an error, so the message can be read
    #[arg(long, env = "HSNERD_ERROR_PAUSE", default_value_t = 15)]
    error_pause: u64,
}

impl Hsnerd {
    pub fn error_pause(&self) -> Duration {
        Duration::from_secs(self.error_pause)
    }

    /// Installs everything when the marker is missing, launches everything otherwise.
    pub async fn run(&self) -> Result<(), BootstrapError> {
        let config = Config::new(self.config_home.as_deref(), self.cache_home.as_deref())?;
        let marker = config.marker();
        let installed = marker.is_installed()?;

        let layout = self.layout()?;
        tracing::debug!(program_files = %layout.program_files(), wrapper = ?layout.wrapper());
        let manifest = Manifest::load(&config, &layout)?;
        let runner = TokioRunner::new(layout.wrapper().map(str::to_string));

        if installed {
            Launcher::builder()
                .runner(runner)
                .targets(manifest.launch)
                .build()
                .launch_all()
                .await
        } else {
            infoln!("games not installed, installing...");
            let fetcher = Fetcher::builder()
                .user_agent(format!("{PKG_NAME}/{PKG_VERSION}"))
                .build()?;
            Installer::builder()
                .fetcher(fetcher)
                .runner(runner)
                .marker(marker)
                .staging_dir(config.cache)
                .targets(manifest.install)
                .build()
                .install_all()
                .await
        }
    }

    fn layout(&self) -> Result<Layout, BootstrapError> {
        let mut layout = Layout::native()?;
        if let Some(install_root) = &self.install_root {
            layout = layout.with_program_files(install_root.clone());
        }
        if let Some(wrapper) = &self.wrapper {
            layout = layout.with_wrapper(Some(wrapper.clone()));
        }
        Ok(layout)
    }
}
