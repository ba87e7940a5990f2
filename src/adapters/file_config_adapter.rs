//! INI configuration adapter.
//!
//! Non-finite numbers read as absent: `inf` and `NaN` yield the caller's
//! default.

use std::io;
use std::path::Path;
use std::str::FromStr;

use configparser::ini::Ini;

use crate::ports::config_port::ConfigPort;

pub struct FileConfigAdapter {
    ini: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut ini = Ini::new();
        ini.load(path.as_ref())
            .map_err(|reason| io::Error::new(io::ErrorKind::InvalidData, reason))?;
        Ok(Self { ini })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut ini = Ini::new();
        ini.read(content.to_string())?;
        Ok(Self { ini })
    }

    /// `[section] key` parsed as `T`; `None` when absent or unparsable.
    fn parsed<T: FromStr>(&self, section: &str, key: &str) -> Option<T> {
        self.ini
            .get(section, key)
            .and_then(|raw| raw.trim().parse::<T>().ok())
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.parsed(section, key).unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.parsed::<f64>(section, key)
            .filter(|v| v.is_finite())
            .unwrap_or(default)
    }
}
