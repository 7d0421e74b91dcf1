use camino::{Utf8Path, Utf8PathBuf};
use houston::Config;
use nerd_std::{warnln, Fs, Style};
use serde::Deserialize;

use crate::{BootstrapError, Layout};

const BATTLE_NET_NAME: &str = "Battle.net";
const BATTLE_NET_INSTALLER_URL: &str = "https://downloader.battle.net/download/getInstallerForGame?os=win&gameProgram=BATTLENET_APP&version=Live";
const DECK_TRACKER_NAME: &str = "Hearthstone Deck Tracker";
const DECK_TRACKER_ARCHIVE_URL: &str = "https://github.com/HearthSim/Hearthstone-Deck-Tracker/releases/download/v1.23.15/Hearthstone.Deck.Tracker-v1.23.15.zip";

/// What gets installed on the first run and launched on every run after it.
///
/// The built-in set comes from [`Manifest::defaults`]; a `targets.toml` in
/// the configuration directory replaces it entirely:
///
/// ```toml
/// [[install]]
/// name = "Battle.net"
/// url = "https://example.com/installer.exe"
/// file_name = "battlenet.exe"
/// action = "run_installer"
///
/// [[install]]
/// name = "Hearthstone Deck Tracker"
/// url = "https://example.com/hdt.zip"
/// file_name = "hdt.zip"
/// action = "extract_to"
/// directory = "C:\\Program Files (x86)\\hnl"
///
/// [[launch]]
/// name = "Battle.net"
/// program = "C:\\Program Files (x86)\\Battle.net\\Battle.net.exe"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub install: Vec<InstallTarget>,
    #[serde(default)]
    pub launch: Vec<LaunchTarget>,
}

/// A download plus what to do with it once it is on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallTarget {
    pub name: String,
    pub url: String,
    /// Name of the downloaded file inside the staging directory
    pub file_name: String,
    #[serde(flatten)]
    pub action: PostDownload,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PostDownload {
    /// The download is an installer: run it and wait for it to close.
    RunInstaller,
    /// The download is a zip archive: unpack it into `directory`.
    ExtractTo { directory: Utf8PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LaunchTarget {
    pub name: String,
    pub program: Utf8PathBuf,
}

impl InstallTarget {
    pub fn staging_path(&self, staging_dir: &Utf8Path) -> Utf8PathBuf {
        staging_dir.join(&self.file_name)
    }
}

impl Manifest {
    /// Battle.net and Hearthstone Deck Tracker, placed according to `layout`.
    pub fn defaults(layout: &Layout) -> Manifest {
        Manifest {
            install: vec![
                InstallTarget {
                    name: BATTLE_NET_NAME.to_string(),
                    url: BATTLE_NET_INSTALLER_URL.to_string(),
                    file_name: "battlenet.exe".to_string(),
                    action: PostDownload::RunInstaller,
                },
                InstallTarget {
                    name: DECK_TRACKER_NAME.to_string(),
                    url: DECK_TRACKER_ARCHIVE_URL.to_string(),
                    file_name: "hdt.zip".to_string(),
                    action: PostDownload::ExtractTo {
                        directory: layout.deck_tracker_dir(),
                    },
                },
            ],
            launch: vec![
                LaunchTarget {
                    name: BATTLE_NET_NAME.to_string(),
                    program: layout.battle_net_exe(),
                },
                LaunchTarget {
                    name: DECK_TRACKER_NAME.to_string(),
                    program: layout.deck_tracker_exe(),
                },
            ],
        }
    }

    /// Reads the targets file from `config`, or falls back to the defaults
    /// when there is none.
    pub fn load(config: &Config, layout: &Layout) -> Result<Manifest, BootstrapError> {
        let path = config.targets_file();
        let contents =
            Fs::read_file_if_exists(&path).map_err(|source| BootstrapError::ReadManifest {
                path: path.to_string(),
                source,
            })?;
        match contents {
            Some(contents) => {
                tracing::info!("using targets from {}", path);
                let manifest =
                    Manifest::parse(&contents).map_err(|source| BootstrapError::ParseManifest {
                        path: path.to_string(),
                        source,
                    })?;
                if manifest.install.is_empty() && manifest.launch.is_empty() {
                    warnln!("{} lists no targets", Style::Path.paint(path.as_str()));
                }
                Ok(manifest)
            }
            None => Ok(Manifest::defaults(layout)),
        }
    }

    fn parse(contents: &str) -> Result<Manifest, toml::de::Error> {
        toml::from_str(contents)
    }
}
