use clap::Parser;
use log::{debug, error, warn};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use meal_planner::config::load_config;
use meal_planner::render::{render_html, render_text, PAGE_TITLE};
use meal_planner::{
    ExtractionClient, Planner, PlannerError, RecipeExtractor, SubmitOutcome,
};

/// Collect recipes by URL and show them as cards
#[derive(Debug, Parser)]
#[command(name = "meal-planner", version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to an optional config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the card grid as an HTML page when the session ends
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,
}

/// A line typed at the prompt
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    List,
    ExportHtml(&'a str),
    Url(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    match line {
        ":quit" | ":q" => Command::Quit,
        ":list" => Command::List,
        _ => match line.strip_prefix(":html ") {
            Some(path) => Command::ExportHtml(path.trim()),
            None => Command::Url(line),
        },
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("meal-planner error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), PlannerError> {
    let config = load_config(cli.config.as_deref())?;
    debug!("Loaded config, base_url={}", config.base_url);
    let client = ExtractionClient::new(&config)?;

    let mut planner = Planner::new();
    let mut stdout = tokio::io::stdout();
    run_session(
        &mut planner,
        &client,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
    )
    .await?;

    if let Some(path) = cli.html.as_deref() {
        export_html(&planner, path).await?;
    }
    Ok(())
}

/// Read one line without its terminator; `None` at end of input
async fn read_input<R>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> std::io::Result<Option<Result<String, FromUtf8Error>>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if reader.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8(std::mem::take(buf))))
}

/// Drive the planner from `reader` until `:quit` or end of input
///
/// Only I/O failures on `reader` or `writer` end the session early.
async fn run_session<R, W, E>(
    planner: &mut Planner,
    extractor: &E,
    mut reader: R,
    writer: &mut W,
) -> Result<(), PlannerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: RecipeExtractor + ?Sized,
{
    writer
        .write_all(format!("{}\n\n{}", PAGE_TITLE, render_text(planner.recipes())).as_bytes())
        .await?;

    let mut buf = Vec::new();
    loop {
        writer
            .write_all(format!("[{}] Recipe URL> ", planner.trigger_label()).as_bytes())
            .await?;
        writer.flush().await?;

        let line = match read_input(&mut reader, &mut buf).await? {
            None => break,
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!("Skipping input line: {}", e);
                eprintln!("! Input was not valid UTF-8; line skipped.");
                continue;
            }
        };

        match parse_line(&line) {
            Command::Quit => break,
            Command::List => {
                writer.write_all(render_text(planner.recipes()).as_bytes()).await?;
            }
            Command::ExportHtml(path) => {
                if let Err(e) = export_html(planner, Path::new(path)).await {
                    error!("Failed to export {}: {}", path, e);
                    eprintln!("! Could not write {}: {}", path, e);
                }
            }
            Command::Url(url) => {
                planner.set_input(url);
                match planner.begin_submit() {
                    Ok(Ok(pending)) => {
                        writer
                            .write_all(format!("{}\n", planner.trigger_label()).as_bytes())
                            .await?;
                        let result = extractor.extract(pending.url()).await;
                        match planner.complete(pending, result) {
                            Ok(SubmitOutcome::Added) => {
                                writer.write_all(render_text(planner.recipes()).as_bytes()).await?;
                            }
                            Ok(SubmitOutcome::Rejected(notice)) => eprintln!("! {}", notice),
                            Err(e) => eprintln!("! {}", e),
                        }
                    }
                    Ok(Err(notice)) => eprintln!("! {}", notice),
                    Err(e) => eprintln!("! {}", e),
                }
                planner.acknowledge();
            }
        }
    }
    Ok(())
}

async fn export_html(planner: &Planner, path: &Path) -> Result<(), PlannerError> {
    tokio::fs::write(path, render_html(planner.recipes())).await?;
    eprintln!("Wrote {} recipe(s) to {}", planner.recipes().len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use meal_planner::ExtractedRecipe;

    struct StaticExtractor;

    #[async_trait]
    impl RecipeExtractor for StaticExtractor {
        fn extractor_name(&self) -> &str {
            "static"
        }

        async fn extract(&self, url: &str) -> Result<ExtractedRecipe, PlannerError> {
            Ok(ExtractedRecipe {
                id: 1,
                title: format!("Recipe from {url}"),
                image: None,
                servings: Some(4.0),
                ready_in_minutes: None,
                ingredients: vec![],
                instructions: "Boil water.".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_read_input_strips_terminators() {
        let mut reader: &[u8] = b"https://a.test/r\r\nlast";
        let mut buf = Vec::new();

        let first = read_input(&mut reader, &mut buf).await.unwrap();
        assert_eq!(first.unwrap().unwrap(), "https://a.test/r");
        let second = read_input(&mut reader, &mut buf).await.unwrap();
        assert_eq!(second.unwrap().unwrap(), "last");
        assert!(read_input(&mut reader, &mut buf).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_input_reports_invalid_utf8() {
        let mut reader: &[u8] = b"https://a\xff\nnext\n";
        let mut buf = Vec::new();

        let bad = read_input(&mut reader, &mut buf).await.unwrap();
        assert!(bad.unwrap().is_err());
        let next = read_input(&mut reader, &mut buf).await.unwrap();
        assert_eq!(next.unwrap().unwrap(), "next");
    }

    #[tokio::test]
    async fn test_session_survives_bad_export_and_bad_input() {
        let input: &[u8] =
            b":html /nonexistent-meal-planner-dir/x.html\nhttps://a\xff\nhttps://x.test/r\n:list\n";
        let mut planner = Planner::new();
        let mut output = Vec::new();

        run_session(&mut planner, &StaticExtractor, input, &mut output)
            .await
            .unwrap();

        assert_eq!(planner.recipes().len(), 1);
        assert_eq!(planner.recipes()[0].url, "https://x.test/r");
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Recipe from https://x.test/r"));
        assert!(output.contains("Servings: 4"));
    }

    #[tokio::test]
    async fn test_empty_line_does_not_announce_adding() {
        let input: &[u8] = b"\n:quit\nhttps://x.test/never\n";
        let mut planner = Planner::new();
        let mut output = Vec::new();

        run_session(&mut planner, &StaticExtractor, input, &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("Adding…\n"));
        assert!(planner.recipes().is_empty());
    }

    #[tokio::test]
    async fn test_adding_announced_for_url() {
        let input: &[u8] = b"https://x.test/r\n";
        let mut planner = Planner::new();
        let mut output = Vec::new();

        run_session(&mut planner, &StaticExtractor, input, &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Adding…\n").count(), 1);
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(":q"), Command::Quit);
        assert_eq!(parse_line(":list"), Command::List);
        assert_eq!(parse_line(":html out.html"), Command::ExportHtml("out.html"));
        assert_eq!(
            parse_line("https://example.com/pasta"),
            Command::Url("https://example.com/pasta")
        );
        assert_eq!(parse_line(""), Command::Url(""));
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::parse_from(["meal-planner", "--html", "cards.html"]);
        assert_eq!(cli.html, Some(PathBuf::from("cards.html")));
        assert!(cli.config.is_none());
    }
}
