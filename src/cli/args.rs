use clap::{Parser, Subcommand};

use crate::models::AdjustTarget;

#[derive(Parser, Debug)]
#[command(
    name = "iqama",
    version,
    author,
    about = "A terminal prayer times board with adjustable Adhan and Iqama times"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch today's prayer times and print them with Iqama times
    Times {
        /// Country code (e.g. PS, EG); defaults to the configured country
        #[arg(long)]
        country: Option<String>,
        /// City name; defaults to the configured city, or the country's first city
        #[arg(long)]
        city: Option<String>,
        /// Shift the printed times by this many minutes
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        adjust: i64,
        /// Which times the adjustment applies to
        #[arg(long, value_enum, default_value_t = AdjustTarget::Both)]
        target: AdjustTarget,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List supported countries, or the cities of one country
    Locations {
        /// Country code
        country: Option<String>,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_adjustment_parses() {
        let cli =
            Cli::try_parse_from(["iqama", "times", "--adjust", "-5", "--target", "iqama"])
                .unwrap();
        match cli.command {
            Some(Commands::Times { adjust, target, .. }) => {
                assert_eq!(adjust, -5);
                assert_eq!(target, AdjustTarget::Iqama);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_board() {
        let cli = Cli::try_parse_from(["iqama"]).unwrap();
        assert!(cli.command.is_none());
    }
}
