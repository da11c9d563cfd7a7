// TabShell platform paths for Windows
// Data: %APPDATA%/TabShell

use std::env;
use std::path::PathBuf;

/// Data directory on Windows: `%APPDATA%/TabShell`.
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("TabShell")
}
