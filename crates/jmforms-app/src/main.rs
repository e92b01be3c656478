use clap::{ArgGroup, Parser, Subcommand};
use jmforms_config::Config;

mod convert;
mod inspect;
mod io;
mod logging;

#[cfg(test)]
mod tests;

use self::convert::run_conversion;
use self::inspect::{EntrySelector, run_inspect};

/// Build the JMdict reading → written forms index
#[derive(Parser)]
#[command(name = "jmforms", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the dictionary and write both output files (default)
    Convert,
    /// Print the reading groups of matching entries
    #[command(group(ArgGroup::new("target").required(true).args(["seq", "kanji", "reading"])))]
    Inspect {
        /// Entry sequence number (ent_seq)
        #[arg(long)]
        seq: Option<String>,
        /// Written form (keb)
        #[arg(long)]
        kanji: Option<String>,
        /// Reading (reb)
        #[arg(long)]
        reading: Option<String>,
        /// Keep groups with a single form
        #[arg(long)]
        keep_singletons: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::new();
    logging::init(config.log_json);

    match cli.command.unwrap_or(Command::Convert) {
        Command::Convert => {
            let summary = run_conversion(&config)?;
            tracing::info!(
                "Done: {} entries, {} reading groups",
                summary.entries,
                summary.groups
            );
        }
        Command::Inspect {
            seq,
            kanji,
            reading,
            keep_singletons,
        } => {
            let selector = match (seq, kanji, reading) {
                (Some(seq), _, _) => EntrySelector::Seq(seq),
                (_, Some(kanji), _) => EntrySelector::Kanji(kanji),
                (_, _, Some(reading)) => EntrySelector::Reading(reading),
                (None, None, None) => anyhow::bail!("inspect needs --seq, --kanji or --reading"),
            };
            run_inspect(&config, &selector, keep_singletons)?;
        }
    }

    Ok(())
}
