//! CLI assembly: merge config overrides, build the desk, dispatch commands.
use std::io::Write;

use rasdesk_core::api::{self as core_api, CliError, PlaybackSink, StudyDesk};
use rasdesk_core::config::{apply_env_overrides, load_from_path};
use rasdesk_plugins::factory;
use rasdesk_plugins::sink::WavFileSink;

use crate::commands::cli::{Args, Commands, DecodeArgs, ResearchArgs, SpeakArgs};
use crate::{render, shell};

/// Config file (or defaults), then env, then CLI flags.
pub fn load_config(args: &Args) -> Result<core_api::AppConfig, CliError> {
    let mut cfg = match &args.config {
        Some(path) => {
            let mut cfg = load_from_path(path)
                .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
            apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
            cfg
        }
        None => core_api::load_default().map_err(|e| CliError::Config(e.to_string()))?,
    };

    if let Some(key) = &args.api_key {
        cfg.gemini.api_key = key.clone();
    }
    if let Some(model) = &args.model {
        cfg.gemini.text_model = model.clone();
    }
    if args.no_grounding {
        cfg.gemini.search_grounding = false;
    }
    Ok(cfg)
}

#[tracing::instrument(name = "cli.run", skip_all)]
pub async fn run(args: Args, cfg: core_api::AppConfig) -> Result<i32, CliError> {
    let mut stdout = std::io::stdout().lock();

    if let Commands::Decode(d) = &args.command {
        decode_file(d, &cfg)?;
        writeln!(stdout, "wrote {}", d.out.display())?;
        return Ok(0);
    }

    let desk = factory::build_desk(&cfg)?;

    match args.command {
        Commands::News(n) => {
            let digest = desk.current_affairs(n.period.into()).await?;
            render::news(&mut stdout, &digest)?;
        }
        Commands::Trending => {
            let topics = desk.trending_topics().await;
            render::topics(&mut stdout, &topics)?;
        }
        Commands::Research(r) => research(&desk, &r, &mut stdout).await?,
        Commands::Quiz(q) => {
            let quiz = desk.quiz(&q.topic).await?;
            writeln!(stdout, "{}", quiz.trim_end())?;
        }
        Commands::Speak(s) => {
            let text = speak_input(&s)?;
            let written = speak_to_file(&desk, &text, &s.out).await?;
            report_speech(&mut stdout, written, &s.out)?;
        }
        Commands::Shell => {
            drop(stdout);
            shell::run_shell(&desk).await?;
        }
        Commands::Decode(_) => {}
    }
    Ok(0)
}

async fn research(
    desk: &StudyDesk,
    r: &ResearchArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let analysis = desk.deep_research(&r.topic).await?;
    if r.json {
        let json = serde_json::to_string_pretty(&analysis)
            .map_err(|e| CliError::Command(e.to_string()))?;
        writeln!(out, "{json}")?;
    } else {
        render::research(out, &r.topic, &analysis)?;
    }

    if let (true, Some(path)) = (r.speak, &r.out) {
        // The research result stands even when reading it aloud fails.
        match speak_to_file(desk, &analysis.summary, path).await {
            Ok(written) => report_speech(out, written, path)?,
            Err(e) => tracing::warn!(error = %e, path = %path.display(), "speech failed"),
        }
    }
    Ok(())
}

fn speak_input(s: &SpeakArgs) -> Result<String, CliError> {
    match (&s.text, &s.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(CliError::Command(
            "speak needs --text or --file".to_string(),
        )),
    }
}

/// Returns false when the service produced no audio.
pub async fn speak_to_file(
    desk: &StudyDesk,
    text: &str,
    path: &std::path::Path,
) -> Result<bool, CliError> {
    let Some(buffer) = desk.speak(text).await? else {
        return Ok(false);
    };
    WavFileSink::new(path).play(&buffer)?;
    Ok(true)
}

fn report_speech(out: &mut impl Write, written: bool, path: &std::path::Path) -> std::io::Result<()> {
    if written {
        writeln!(out, "speech written to {}", path.display())
    } else {
        writeln!(out, "no audio returned; nothing written")
    }
}

fn decode_file(d: &DecodeArgs, cfg: &core_api::AppConfig) -> Result<(), CliError> {
    let payload = std::fs::read_to_string(&d.payload_file)?;
    let buffer = core_api::decode(
        &payload,
        d.sample_rate.unwrap_or(cfg.speech.sample_rate),
        d.channels.unwrap_or(cfg.speech.channels),
    )
    .map_err(core_api::ServiceError::from)?;
    WavFileSink::new(&d.out).play(&buffer)?;
    Ok(())
}
