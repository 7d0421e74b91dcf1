use assert_fs::TempDir;
use camino::Utf8PathBuf;
use houston::Config;
use speculoos::prelude::*;

#[test]
fn it_round_trips_installation_state_through_config() {
    let tmp_home = TempDir::new().unwrap();
    let home = Utf8PathBuf::try_from(tmp_home.path().join("HearthstoneNerdLinux")).unwrap();
    let config = Config::new(Some(&home), Some(&home)).unwrap();

    let marker = config.marker();
    assert_that!(marker.is_installed()).is_ok().is_false();

    marker.mark_installed().expect("marking installed failed");

    // a fresh handle sees the same state
    assert_that!(config.marker().is_installed()).is_ok().is_true();
    assert_that!(std::fs::read(marker.path())).is_ok().is_equal_to(Vec::new());
}
