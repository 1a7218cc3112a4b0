use clap::Parser;
use segmark_cli::commands::Commands;

/// Content-aware document segmentation for translation pipelines
#[derive(Debug, Parser)]
#[command(name = "segmark", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_segment_arguments() {
        let cli = Cli::try_parse_from([
            "segmark", "segment", "-i", "doc.md", "-m", "srt", "--max", "200", "-s", "|", "-s", ";",
        ])
        .unwrap();
        match cli.command {
            Commands::Segment(args) => {
                assert_eq!(args.input, vec!["doc.md"]);
                assert_eq!(args.max, Some(200));
                assert_eq!(args.separator, vec!["|", ";"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_segment_requires_input() {
        assert!(Cli::try_parse_from(["segmark", "segment"]).is_err());
    }
}
