use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "gradebook.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data: DataConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    pub students: PathBuf,
    pub assignments: PathBuf,
    pub submissions: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            students: PathBuf::from("data/students.txt"),
            assignments: PathBuf::from("data/assignments.txt"),
            submissions: PathBuf::from("data/submissions"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Length, in characters, of the longest histogram bar.
    pub histogram_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig { histogram_width: 40 }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Config::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    /// Load the configuration from the given file, or from the default file
    /// if it exists. Built-in defaults are used otherwise.
    pub fn load_or_default(file_name: Option<&Path>) -> Result<Config> {
        Config::load_or(file_name, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_or(file_name: Option<&Path>, default_file: &Path) -> Result<Config> {
        match file_name {
            Some(file_name) => Config::load(file_name),
            None if default_file.is_file() => Config::load(default_file),
            None => Ok(Config::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve relative data paths against `base`.
    pub fn rebase(&mut self, base: &Path) {
        for path in [
            &mut self.data.students,
            &mut self.data.assignments,
            &mut self.data.submissions,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
