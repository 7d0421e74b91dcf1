#![cfg(unix)]

use std::{
    fs,
    io::{Cursor, Write},
};

use assert_cmd::Command;
use assert_fs::TempDir;
use camino::Utf8PathBuf;
use httpmock::{Method::GET, MockServer};
use indoc::formatdoc;
use predicates::prelude::*;
use zip::{write::SimpleFileOptions, ZipWriter};

struct Machine {
    _root: TempDir,
    root: Utf8PathBuf,
}

impl Machine {
    fn new() -> Machine {
        let root = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(root.path().to_path_buf()).unwrap();
        fs::create_dir_all(path.join("config")).unwrap();
        Machine {
            _root: root,
            root: path,
        }
    }

    fn marker(&self) -> Utf8PathBuf {
        self.root.join("config").join("installed")
    }

    fn programs(&self) -> Utf8PathBuf {
        self.root.join("programs")
    }

    fn write_targets(&self, targets: &str) {
        fs::write(self.root.join("config").join("targets.toml"), targets).unwrap();
    }

    fn hsnerd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hsnerd").unwrap();
        cmd.env("WINEPREFIX", self.root.join("wine"))
            .env("NO_COLOR", "1")
            .args(["--config-home", self.root.join("config").as_str()])
            .args(["--cache-home", self.root.join("cache").as_str()])
            .args(["--wrapper", "sh", "--error-pause", "0"]);
        cmd
    }
}

fn tool_archive(script: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("tool/run.sh", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(script.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn it_installs_on_the_first_run_and_launches_afterwards() {
    let machine = Machine::new();
    let server = MockServer::start();
    let setup_ran = machine.root.join("setup-ran");
    let tool_ran = machine.root.join("tool-ran");
    let setup = server.mock(|when, then| {
        when.method(GET).path("/setup.sh");
        then.status(200).body(format!("touch '{setup_ran}'\n"));
    });
    let archive = server.mock(|when, then| {
        when.method(GET).path("/tool.zip");
        then.status(200)
            .body(tool_archive(&format!("touch '{tool_ran}'\n")));
    });
    machine.write_targets(&formatdoc! {r#"
        [[install]]
        name = "Setup"
        url = '{setup_url}'
        file_name = "setup.sh"
        action = "run_installer"

        [[install]]
        name = "Tool"
        url = '{archive_url}'
        file_name = "tool.zip"
        action = "extract_to"
        directory = '{programs}'

        [[launch]]
        name = "Tool"
        program = '{program}'
        "#,
        setup_url = server.url("/setup.sh"),
        archive_url = server.url("/tool.zip"),
        programs = machine.programs(),
        program = machine.programs().join("tool").join("run.sh"),
    });

    machine
        .hsnerd()
        .assert()
        .success()
        .stderr(predicate::str::contains("games not installed, installing..."));

    assert!(machine.marker().exists());
    assert!(setup_ran.exists());
    assert!(machine.programs().join("tool").join("run.sh").exists());
    assert!(machine.root.join("cache").join("tool.zip").exists());
    assert!(!tool_ran.exists());

    machine
        .hsnerd()
        .assert()
        .success()
        .stderr(predicate::str::contains("launching Tool"));

    assert!(tool_ran.exists());
    setup.assert_calls(1);
    archive.assert_calls(1);
}

#[test]
fn it_exits_with_an_error_when_a_download_fails() {
    let machine = Machine::new();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/setup.sh");
        then.status(200).body("exit 0\n");
    });
    server.mock(|when, then| {
        when.method(GET).path("/tool.zip");
        then.status(404);
    });
    machine.write_targets(&formatdoc! {r#"
        [[install]]
        name = "Setup"
        url = '{setup_url}'
        file_name = "setup.sh"
        action = "run_installer"

        [[install]]
        name = "Tool"
        url = '{archive_url}'
        file_name = "tool.zip"
        action = "extract_to"
        directory = '{programs}'
        "#,
        setup_url = server.url("/setup.sh"),
        archive_url = server.url("/tool.zip"),
        programs = machine.programs(),
    });

    machine
        .hsnerd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 of 2 tasks failed"))
        .stdout(predicate::str::contains("Tool: could not download Tool"))
        .stderr(predicate::str::contains("1 of 2 tasks failed").not());

    assert!(!machine.marker().exists());
}

#[test]
fn it_exits_with_an_error_when_a_program_fails() {
    let machine = Machine::new();
    fs::write(machine.marker(), "").unwrap();
    let healthy = machine.root.join("healthy.sh");
    let broken = machine.root.join("broken.sh");
    fs::write(&healthy, "exit 0\n").unwrap();
    fs::write(&broken, "exit 3\n").unwrap();
    machine.write_targets(&formatdoc! {r#"
        [[launch]]
        name = "Healthy"
        program = '{healthy}'

        [[launch]]
        name = "Broken"
        program = '{broken}'
        "#
    });

    machine
        .hsnerd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 of 2 tasks failed"))
        .stdout(predicate::str::contains("Broken: could not run Broken"))
        .stdout(predicate::str::contains("Healthy:").not());
}

#[test]
fn it_rejects_an_invalid_targets_file() {
    let machine = Machine::new();
    machine.write_targets("[[install]]\nname = 3\n");

    machine
        .hsnerd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is not a valid targets file"));
}
