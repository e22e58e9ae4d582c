//! Config loading reports which files it reads once a logger is installed
use log::{LevelFilter, Log, Metadata, Record};
use roman_numerals::config::{Config, PROJECT_CONFIG_FILE, SettingsArgs};
use std::fs;
use std::sync::Mutex;

struct CapturingLogger {
    records: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_config_loading_is_logged() {
    log::set_logger(&LOGGER).expect("install logger");
    log::set_max_level(LevelFilter::Debug);

    let dir = tempfile::tempdir().expect("create temp dir");
    let user_file = dir.path().join("user.toml");
    let explicit = dir.path().join("explicit.toml");
    fs::write(&user_file, "json = true\n").expect("write user config");
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "strict_empty = true\n")
        .expect("write project config");
    fs::write(&explicit, "allow_zero = false\n").expect("write explicit config");

    let args = SettingsArgs {
        config: Some(explicit.clone()),
        ..SettingsArgs::default()
    };
    Config::load(&args, dir.path(), Some(&user_file)).expect("load config");

    let records = LOGGER.records.lock().expect("read records").clone();
    let project_path = dir.path().join(PROJECT_CONFIG_FILE);
    assert_eq!(
        records,
        vec![
            format!("DEBUG Loading user config from {}", user_file.display()),
            format!("DEBUG Loading project config from {}", project_path.display()),
            format!("DEBUG Loading config from {}", explicit.display()),
        ]
    );
}
