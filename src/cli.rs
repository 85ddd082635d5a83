use clap::{Args, Parser, Subcommand};

use crate::core::record::{DNSRecordInput, DNSRecordType};
use crate::error::Error;

/// Manage DreamHost DNS records through a caching client
#[derive(Parser, Debug)]
#[command(name = "dreamhost-dns", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List every record
    List,

    /// Find one record by type, name and value
    Lookup {
        #[command(flatten)]
        record: RecordArgs,

        /// Refresh the record list before looking up
        #[arg(long)]
        no_cache: bool,
    },

    /// Add a record and print its id
    Create {
        #[command(flatten)]
        record: RecordArgs,

        /// Optional comment stored with the record
        comment: Option<String>,
    },

    /// Read a record by id (TYPE|RECORD|VALUE)
    Read { id: String },

    /// Remove a record by id (TYPE|RECORD|VALUE)
    Delete { id: String },

    /// Import an existing record by id (TYPE|RECORD|VALUE)
    Import { id: String },
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct RecordArgs {
    /// Record type, e.g. A, CNAME, TXT
    #[arg(value_parser = parse_record_type)]
    pub record_type: DNSRecordType,

    /// Record name, e.g. www.example.com
    pub record: String,

    /// Record value
    pub value: String,
}

impl RecordArgs {
    pub fn to_input(&self) -> DNSRecordInput {
        DNSRecordInput::new(&self.record, self.record_type, &self.value)
    }
}

fn parse_record_type(s: &str) -> Result<DNSRecordType, String> {
    s.parse().map_err(|e: Error| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("dreamhost-dns").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cmd = parse(&["lookup", "cname", "www", "example.com", "--no-cache"]).unwrap();
        assert_matches!(
            cmd,
            Command::Lookup { record, no_cache: true }
                if record.to_input() == DNSRecordInput::new("www", DNSRecordType::CNAME, "example.com")
        );

        let cmd = parse(&["lookup", "A", "www", "1.2.3.4"]).unwrap();
        assert_matches!(cmd, Command::Lookup { no_cache: false, .. });
    }

    #[test]
    fn test_parse_create_with_comment() {
        let cmd = parse(&["create", "A", "www", "1.2.3.4", "web"]).unwrap();
        assert_matches!(cmd, Command::Create { comment: Some(c), .. } if c == "web");
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(
            parse(&["delete", "A|www|1.2.3.4"]).unwrap(),
            Command::Delete { id: "A|www|1.2.3.4".into() }
        );
        assert_eq!(parse(&["list"]).unwrap(), Command::List);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["list", "extra"]).is_err());
        assert!(parse(&["lookup", "BOGUS", "www", "1.2.3.4"]).is_err());
        assert!(parse(&["lookup", "A", "www", "1.2.3.4", "--fresh"]).is_err());
    }
}
