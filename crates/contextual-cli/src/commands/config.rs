use clap::Subcommand;
use contextual_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Set the remote planner base URL
    SetRemoteUrl {
        /// Base URL, e.g. http://localhost:8787
        url: String,
    },
    /// Set the default venue
    SetVenue {
        /// Venue id (see `venues`)
        venue: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::SetRemoteUrl { url } => {
            let mut config = Config::load()?;
            config.remote.base_url = Some(url);
            config.save()?;
            println!("remote planner url updated");
            Ok(())
        }
        ConfigAction::SetVenue { venue } => {
            if crate::venues::venue(&venue).is_none() {
                return Err(format!("unknown venue '{venue}'").into());
            }
            let mut config = Config::load()?;
            config.default_venue = venue;
            config.save()?;
            println!("default venue updated");
            Ok(())
        }
    }
}
