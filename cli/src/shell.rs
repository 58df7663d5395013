//! Line-oriented interactive session over the four study tabs.

use std::io::Write;
use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader};

use rasdesk_core::api::{CliError, NewsPeriod, SessionEffect, StudyDesk, StudySession, Tab};

use crate::render;

const DEFAULT_SPEECH_FILE: &str = "speech.wav";

const HELP: &str = "\
commands:
  tab <dashboard|research|resources|quiz>
  period <weekly|monthly>
  research <topic>
  quiz                 quiz on the current topic
  speak [file.wav]     read the current summary aloud into a WAV file
  show                 print the current tab again
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Tab(Tab),
    Period(NewsPeriod),
    Research(String),
    Quiz,
    Speak(Option<PathBuf>),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map(|(h, r)| (h, r.trim()))
        .unwrap_or((line, ""));

    match head.to_ascii_lowercase().as_str() {
        "tab" => rest.parse().map(ShellCommand::Tab),
        "period" => rest.parse().map(ShellCommand::Period),
        "research" if !rest.is_empty() => Ok(ShellCommand::Research(rest.to_string())),
        "research" => Err("research needs a topic".to_string()),
        "quiz" => Ok(ShellCommand::Quiz),
        "speak" => Ok(ShellCommand::Speak(
            (!rest.is_empty()).then(|| PathBuf::from(rest)),
        )),
        "show" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

pub async fn run_shell(desk: &StudyDesk) -> Result<(), CliError> {
    let mut session = StudySession::new();
    let mut out = std::io::stdout();
    writeln!(out, "{HELP}")?;

    let mut speech_out = PathBuf::from(DEFAULT_SPEECH_FILE);
    let effects = session.start();
    apply_effects(desk, &mut session, effects, &speech_out, &mut out).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(out, "[{}]> ", session.tab().label())?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        let effects = match cmd {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            ShellCommand::Show => {
                show(&session, &mut out)?;
                continue;
            }
            ShellCommand::Tab(tab) => {
                let effects = session.select_tab(tab);
                if tab == Tab::Resources {
                    writeln!(out, "The resource directory is not available in the terminal.")?;
                }
                effects
            }
            ShellCommand::Period(p) => session.set_news_period(p),
            ShellCommand::Research(topic) => {
                let effects = session.select_tab(Tab::Research);
                apply_effects(desk, &mut session, effects, &speech_out, &mut out).await?;
                session.begin_research(&topic)
            }
            ShellCommand::Quiz => {
                let effects = session.begin_quiz();
                if effects.is_empty() {
                    writeln!(out, "research a topic first")?;
                }
                effects
            }
            ShellCommand::Speak(path) => {
                let effects = session.begin_speech();
                if effects.is_empty() {
                    writeln!(out, "nothing to read yet")?;
                    continue;
                }
                speech_out = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SPEECH_FILE));
                effects
            }
        };
        apply_effects(desk, &mut session, effects, &speech_out, &mut out).await?;
    }
    Ok(())
}

async fn speak(
    desk: &StudyDesk,
    text: &str,
    path: &std::path::Path,
    out: &mut impl Write,
) -> Result<(), CliError> {
    // Audio failures abort playback quietly; the session carries on.
    match crate::app::speak_to_file(desk, text, path).await {
        Ok(true) => writeln!(out, "speech written to {}", path.display())?,
        Ok(false) => tracing::warn!("no audio returned"),
        Err(e) => tracing::error!(error = %e, "speech failed"),
    }
    Ok(())
}

async fn apply_effects(
    desk: &StudyDesk,
    session: &mut StudySession,
    effects: Vec<SessionEffect>,
    speech_out: &std::path::Path,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for effect in effects {
        match effect {
            SessionEffect::LoadNews(period) => {
                let news = match desk.current_affairs(period).await {
                    Ok(n) => Some(n),
                    Err(e) => {
                        tracing::error!(error = %e, "news unavailable");
                        None
                    }
                };
                session.finish_news(news);
                if let Some(n) = session.news() {
                    render::news(out, n)?;
                } else {
                    writeln!(out, "No data found.")?;
                }
            }
            SessionEffect::LoadTrending => {
                session.finish_trending(desk.trending_topics().await);
                writeln!(out, "Trending topics:")?;
                render::topics(out, session.trending())?;
            }
            SessionEffect::Research(topic) => {
                let result = match desk.deep_research(&topic).await {
                    Ok(a) => Some(a),
                    Err(e) => {
                        tracing::error!(error = %e, "research failed");
                        None
                    }
                };
                session.finish_research(result);
                match session.research() {
                    Some(a) => render::research(out, &topic, a)?,
                    None => writeln!(out, "No research result.")?,
                }
            }
            SessionEffect::Quiz(topic) => {
                let text = desk.quiz(&topic).await.unwrap_or_else(|e| {
                    tracing::error!(error = %e, "quiz failed");
                    rasdesk_core::study::NO_QUIZ_TEXT.to_string()
                });
                session.finish_quiz(text);
                writeln!(out, "{}", session.quiz_text().trim_end())?;
            }
            SessionEffect::Speak(text) => {
                speak(desk, &text, speech_out, out).await?;
                session.finish_speech();
            }
        }
    }
    Ok(())
}

fn show(session: &StudySession, out: &mut impl Write) -> std::io::Result<()> {
    match session.tab() {
        Tab::Dashboard => match session.news() {
            Some(n) => render::news(out, n),
            None => writeln!(out, "No data found."),
        },
        Tab::Research => {
            render::topics(out, session.trending())?;
            match session.research() {
                Some(a) => render::research(out, session.topic(), a),
                None => Ok(()),
            }
        }
        Tab::Resources => writeln!(out, "The resource directory is not available in the terminal."),
        Tab::Quiz => writeln!(out, "{}", session.quiz_text()),
    }
}
