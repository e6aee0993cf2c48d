//! Server configuration, sourced from the environment.

/// Runtime configuration.
///
/// The store location is the only required external surface; everything
/// else has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Where discovered symbols are exported as CSV. `None` disables the
    /// export.
    pub export_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("TWSTOCK_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let db_path =
            std::env::var("TWSTOCK_DB_PATH").unwrap_or_else(|_| "twstock.db".to_string());
        // Defaults to the original export file name; set the variable to an
        // empty string to disable the export.
        let export_path = std::env::var("TWSTOCK_EXPORT_PATH")
            .map(|v| v.trim().to_string())
            .map(|v| if v.is_empty() { None } else { Some(v) })
            .unwrap_or_else(|_| Some("valid_stock_codes.csv".to_string()));
        Self {
            listen_addr,
            db_path,
            export_path,
        }
    }
}
