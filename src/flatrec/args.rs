use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flatrec")]
#[command(version, about = "Flat-file record store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path of the store file (default: data/store.txt)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Field to total in `summary`
    #[arg(long = "sum", global = true, value_name = "FIELD")]
    pub sum_field: Option<String>,

    /// Directory holding flatrec.json (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or empty the store
    Init,

    /// Append one record
    Add {
        /// Fields as name=value (title, language, code)
        #[arg(value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },

    /// Print every record, one per line
    #[command(alias = "ls")]
    List,

    /// Print the record count (and the configured total)
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_tokens() {
        let cli = Cli::try_parse_from(["flatrec", "add", "title=a", "code=b=c"]).unwrap();
        match cli.command {
            Some(Commands::Add { fields }) => assert_eq!(fields, vec!["title=a", "code=b=c"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_without_tokens_is_allowed() {
        let cli = Cli::try_parse_from(["flatrec", "add"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { fields }) if fields.is_empty()));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["flatrec", "summary", "--store", "x.txt", "--sum", "code"])
                .unwrap();
        assert!(matches!(cli.command, Some(Commands::Summary)));
        assert_eq!(cli.store, Some(PathBuf::from("x.txt")));
        assert_eq!(cli.sum_field.as_deref(), Some("code"));
    }

    #[test]
    fn missing_command_parses_to_none() {
        let cli = Cli::try_parse_from(["flatrec"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["flatrec", "delete"]).is_err());
    }
}
