use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "objecthash",
    about = "ObjectHash — order-independent, redactable digests of JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Hash strings byte-for-byte instead of normalizing to NFC
    #[arg(long, global = true)]
    pub no_normalize: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the digest of a JSON document
    Hash(InputArgs),
    /// Print the canonical binary form of a number
    Float(FloatArgs),
    /// Build a redaction placeholder from a hex digest
    Placeholder(PlaceholderArgs),
    /// Replace subtrees with placeholders, keeping the document digest
    Redact(RedactArgs),
    /// Check a document against an expected digest
    Verify(VerifyArgs),
    /// Salt every leaf and key so redacted values cannot be guessed
    Salt(InputArgs),
    /// Remove salts added by `salt`
    Unsalt(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// JSON file to read; standard input when omitted
    pub file: Option<String>,
}

#[derive(Args)]
pub struct FloatArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

#[derive(Args)]
pub struct PlaceholderArgs {
    pub digest: String,
}

#[derive(Args)]
pub struct RedactArgs {
    pub file: Option<String>,
    /// Dotted path to redact, e.g. `user.emails.0`; repeatable
    #[arg(short, long = "path", required = true)]
    pub paths: Vec<String>,
}

#[derive(Args)]
pub struct VerifyArgs {
    pub file: Option<String>,
    #[arg(short, long)]
    pub expect: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hash_stdin() {
        let cli = Cli::try_parse_from(["objecthash", "hash"]).unwrap();
        if let Command::Hash(args) = cli.command {
            assert!(args.file.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_hash_file() {
        let cli = Cli::try_parse_from(["objecthash", "hash", "doc.json"]).unwrap();
        if let Command::Hash(args) = cli.command {
            assert_eq!(args.file, Some("doc.json".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_float_negative() {
        let cli = Cli::try_parse_from(["objecthash", "float", "-23.1234"]).unwrap();
        if let Command::Float(args) = cli.command {
            assert_eq!(args.value, -23.1234);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_placeholder() {
        let cli = Cli::try_parse_from(["objecthash", "placeholder", "abc"]).unwrap();
        if let Command::Placeholder(args) = cli.command {
            assert_eq!(args.digest, "abc");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_redact_paths() {
        let cli = Cli::try_parse_from(["objecthash", "redact", "doc.json", "-p", "a.b", "--path", "c"]).unwrap();
        if let Command::Redact(args) = cli.command {
            assert_eq!(args.paths, vec!["a.b", "c"]);
            assert_eq!(args.file, Some("doc.json".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn redact_requires_path() {
        assert!(Cli::try_parse_from(["objecthash", "redact", "doc.json"]).is_err());
    }

    #[test]
    fn parse_verify() {
        let cli = Cli::try_parse_from(["objecthash", "verify", "--expect", "00ff"]).unwrap();
        if let Command::Verify(args) = cli.command {
            assert_eq!(args.expect, "00ff");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_salt_and_unsalt() {
        let cli = Cli::try_parse_from(["objecthash", "salt", "x.json"]).unwrap();
        assert!(matches!(cli.command, Command::Salt(_)));
        let cli = Cli::try_parse_from(["objecthash", "unsalt"]).unwrap();
        assert!(matches!(cli.command, Command::Unsalt(_)));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["objecthash", "--verbose", "--no-normalize", "--format", "json", "hash"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_normalize);
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
