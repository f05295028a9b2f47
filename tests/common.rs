use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

/// Get a Command for campus with its config directory pinned to `config_dir`
/// so a user's own configuration never leaks into tests.
pub fn campus(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("campus");
    cmd.env("CAMPUS_CONFIG_DIR", config_dir)
        .env_remove("CAMPUS_CONFIG")
        .env_remove("CAMPUS_LOG_LEVEL")
        .env_remove("CAMPUS_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Menu input registering CS, LIB and ADM with roads CS-LIB(4), LIB-ADM(3), CS-ADM(10)
#[allow(dead_code)]
pub const SAMPLE_MAP: &str = "\
1\nCS\nComputer Science\nAcademic\nNorth
1\nLIB\nCentral Library\nAcademic\nCenter
1\nADM\nAdministration\nAdmin\nSouth
2\nCS\nLIB\n4
2\nLIB\nADM\n3
2\nCS\nADM\n10
";
