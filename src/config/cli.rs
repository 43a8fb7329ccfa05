use crate::config::SiteConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "wedding-site")]
#[command(about = "Serves the wedding invitation site and its gallery API")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override server.bind from config
    #[arg(long)]
    pub bind: Option<String>,

    /// Override server.public_dir from config
    #[arg(long)]
    pub public_dir: Option<String>,

    /// Validate the configuration, print the resolved gallery and exit
    #[arg(long)]
    pub check: bool,
}

impl CliArgs {
    pub fn apply_overrides(&self, config: &mut SiteConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(public_dir) = &self.public_dir {
            config.server.public_dir = public_dir.clone();
        }
    }
}
