use clap::{Args, Parser};
use std::time::Duration;

/// Published application-form sheet, downloaded as XLSX.
pub const DEFAULT_SHEET_URL: &str = "https://sheet.zohopublic.in/sheet/published/zn2qy64c7d154d78141b8b07bfe9e9d793dc2?download=xlsx";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the sheet comes from and how long to wait for it.
#[derive(Args, Clone, Debug)]
pub struct SheetSource {
    /// URL of the published XLSX download
    #[arg(long, env = "SHEET_URL", default_value = DEFAULT_SHEET_URL)]
    pub sheet_url: String,

    /// Whole-request timeout for the sheet download, in seconds
    #[arg(long, env = "FETCH_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl SheetSource {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SheetSource {
    fn default() -> Self {
        SheetSource {
            sheet_url: DEFAULT_SHEET_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Web server settings.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Serve the published sheet as a web page", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[command(flatten)]
    pub source: SheetSource,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Start `env_logger`, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
