use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use rasdesk_core::api::NewsPeriod;

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PeriodArg {
    #[default]
    Weekly,
    Monthly,
}

impl From<PeriodArg> for NewsPeriod {
    fn from(p: PeriodArg) -> Self {
        match p {
            PeriodArg::Weekly => NewsPeriod::Weekly,
            PeriodArg::Monthly => NewsPeriod::Monthly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rasdesk", version, about = "Study companion for RAS aspirants")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key for the generative service (overrides config and env).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Text model override.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Disable search grounding for this run.
    #[arg(long, global = true)]
    pub no_grounding: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct NewsArgs {
    #[arg(long, value_enum, default_value_t = PeriodArg::Weekly)]
    pub period: PeriodArg,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ResearchArgs {
    pub topic: String,

    /// Print the structured result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also synthesize the summary to speech and write it to `--out`.
    #[arg(long, requires = "out")]
    pub speak: bool,

    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct QuizArgs {
    pub topic: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct SpeakArgs {
    #[arg(long, group = "input")]
    pub text: Option<String>,

    #[arg(long, group = "input")]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = "speech.wav")]
    pub out: PathBuf,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DecodeArgs {
    /// File holding a base64 payload of 16-bit little-endian PCM.
    #[arg(long)]
    pub payload_file: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long)]
    pub sample_rate: Option<u32>,

    #[arg(long)]
    pub channels: Option<u16>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rajasthan current affairs digest.
    News(NewsArgs),
    /// Trending research topics.
    Trending,
    /// Deep research on one topic.
    Research(ResearchArgs),
    /// Multiple-choice quiz on one topic.
    Quiz(QuizArgs),
    /// Synthesize speech into a WAV file.
    Speak(SpeakArgs),
    /// Decode a saved speech payload into a WAV file.
    Decode(DecodeArgs),
    /// Interactive tabbed session.
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_speak_requires_out() {
        assert!(Args::try_parse_from(["rasdesk", "research", "ERCP", "--speak"]).is_err());
        let args =
            Args::try_parse_from(["rasdesk", "research", "ERCP", "--speak", "--out", "a.wav"])
                .unwrap();
        assert!(matches!(args.command, Commands::Research(ref r) if r.speak));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["rasdesk", "news", "--period", "monthly", "--no-grounding"])
                .unwrap();
        assert!(args.no_grounding);
        match args.command {
            Commands::News(n) => assert_eq!(NewsPeriod::from(n.period), NewsPeriod::Monthly),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn speak_inputs_are_exclusive() {
        assert!(
            Args::try_parse_from(["rasdesk", "speak", "--text", "a", "--file", "b.txt"]).is_err()
        );
    }
}
