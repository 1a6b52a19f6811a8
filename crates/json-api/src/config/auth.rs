//! Auth Config

use clap::Args;

/// Bearer token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign and verify bearer tokens
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,
}
