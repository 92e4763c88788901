use anyhow::{anyhow, Error};
use clap::{Parser, ValueEnum};
use log::Level;

use blogr::avatars::avatar_url;
use blogr_config::{parse_config, Config};
use blogr_models::users::types::{default_roles, User, UserCreateData};
use blogr_utils::{
    hashes::email_digest,
    identicons::{Identicon, IdenticonOptions},
    passwords::hash_password,
};
use blogr_validators::users::validate_email;

/// Blogr admin CLI
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value_t = Level::Warn)]
    pub log_level: Level,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    GenerateIdenticon(GenerateIdenticon),
    AvatarUrl(AvatarUrl),
    HashPassword(HashPassword),
    CheckConfig(CheckConfig),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Base64,
    DataUri,
}

/// Generate identicon for email address or hash
#[derive(Parser)]
pub struct GenerateIdenticon {
    /// Email address (or hexadecimal hash if --hash is set)
    input: String,
    #[arg(long)]
    hash: bool,
    #[arg(long)]
    size: Option<u32>,
    #[arg(long)]
    grid_size: Option<u32>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,
    /// Write image to file instead of stdout
    #[arg(long)]
    output: Option<String>,
}

impl GenerateIdenticon {
    fn render(&self) -> Result<String, Error> {
        let hash = if self.hash {
            self.input.clone()
        } else {
            validate_email(self.input.trim())?;
            email_digest(&self.input)
        };
        let mut options = IdenticonOptions::default();
        if let Some(size) = self.size {
            options = options.with_size(size);
        };
        if let Some(grid_size) = self.grid_size {
            options.grid_size = grid_size;
        };
        let identicon = Identicon::new(&hash, options)?;
        let output = match self.format {
            OutputFormat::Svg => identicon.to_svg(),
            OutputFormat::Base64 => identicon.to_base64(),
            OutputFormat::DataUri => identicon.to_data_uri(),
        };
        Ok(output)
    }

    pub fn execute(&self) -> Result<(), Error> {
        let output = self.render()?;
        if let Some(ref file_path) = self.output {
            std::fs::write(file_path, output)?;
            log::info!("identicon saved to {}", file_path);
        } else {
            println!("{}", output);
        };
        Ok(())
    }
}

/// Print avatar URL for email address
#[derive(Parser)]
pub struct AvatarUrl {
    email: String,
    #[arg(long, default_value_t = 100)]
    size: u32,
}

impl AvatarUrl {
    pub fn execute(&self, config: &Config) -> Result<(), Error> {
        validate_email(self.email.trim())?;
        let user_data = UserCreateData {
            email: self.email.clone(),
            username: "".to_string(),
            password: None,
        };
        let user = User::new(
            user_data,
            &default_roles(),
            config.is_admin_email(&self.email),
        )?;
        println!("{}", avatar_url(config, &user, self.size));
        Ok(())
    }
}

/// Generate password hash
#[derive(Parser)]
pub struct HashPassword {
    password: String,
}

impl HashPassword {
    pub fn execute(&self) -> Result<(), Error> {
        if self.password.is_empty() {
            return Err(anyhow!("password is empty"));
        };
        let password_hash = hash_password(&self.password)?;
        println!("{}", password_hash);
        Ok(())
    }
}

/// Load config file and print warnings
#[derive(Parser)]
pub struct CheckConfig;

impl CheckConfig {
    pub fn execute(&self) -> Result<(), Error> {
        let (config, warnings) = parse_config();
        println!("config loaded from {}", config.config_path);
        println!("environment: {:?}", config.environment);
        if warnings.is_empty() {
            println!("no warnings");
        };
        for warning in warnings {
            println!("warning: {}", warning);
        };
        Ok(())
    }
}
