use std::borrow::Cow;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use discoveries::catalog::DEFAULT_BASE_URL;
use discoveries::{
    CatalogClient, CatalogConfig, CatalogError, CatalogEvent, DateStyle, Discovery,
    DiscoveryDetails, DiscoveryVideo, ErrorKind, NoopReporter, Reporter, ReqwestClient,
    SharedReporter, format_duration, format_release_date, truncate_title,
};

// Emoji with fallback for terminals without Unicode support
static TELESCOPE: Emoji<'_, '_> = Emoji("🔭 ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static FILM: Emoji<'_, '_> = Emoji("🎬 ", "[>] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[?] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static BULLET: Emoji<'_, '_> = Emoji("• ", "- ");

/// Artwork size used for list entries
const LIST_ARTWORK_SIZE: u32 = 200;

/// Artwork size used on the details page
const DETAIL_ARTWORK_SIZE: u32 = 800;

/// Maximum description length in list views
const SUMMARY_LENGTH: usize = 100;

/// Browse, search and inspect educational discoveries
#[derive(Parser, Debug)]
#[command(name = "discoveries")]
#[command(about = "Browse educational podcasts, audiobooks and videos from the iTunes catalog")]
#[command(version)]
struct Args {
    /// Catalog base URL
    #[arg(long, env = "DISCOVERIES_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print every catalog request and skipped record
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trending discoveries plus the science and history shelves
    Home,
    /// Trending science podcasts
    Trending,
    /// Search podcasts and audiobooks
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Podcasts and audiobooks for a category (e.g. "history")
    Category { name: String },
    /// A discovery with its episodes and related videos
    Details { id: String },
    /// Search videos by title
    Videos {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Educational documentaries
    Documentaries,
}

/// Reporter showing a spinner while requests are in flight
struct SpinnerReporter {
    spinner: ProgressBar,
    verbose: bool,
}

impl SpinnerReporter {
    fn new(verbose: bool) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { spinner, verbose }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Reporter for SpinnerReporter {
    fn report(&self, event: CatalogEvent) {
        match event {
            CatalogEvent::RequestStarted { query, url } => {
                self.spinner
                    .set_message(format!("{SEARCH}Querying {}", query.cyan()));
                if self.verbose {
                    self.spinner
                        .println(format!("  {} {}", "GET".dimmed(), url.dimmed()));
                }
            }

            CatalogEvent::RequestCompleted { query, results } => {
                self.spinner.set_message(format!(
                    "{HEADPHONES}{} returned {} results",
                    query.cyan(),
                    results.to_string().yellow()
                ));
            }

            CatalogEvent::RequestFailed { query, error } => {
                if self.verbose {
                    self.spinner
                        .println(format!("  {}{} - {}", FAILURE, query.red(), error.dimmed()));
                }
            }

            CatalogEvent::RecordSkipped { query, reason } => {
                if self.verbose {
                    self.spinner.println(format!(
                        "  {}{} skipped a record: {}",
                        WARNING,
                        query.yellow(),
                        reason.dimmed()
                    ));
                }
            }

            CatalogEvent::EnrichmentFailed {
                discovery_id,
                error,
            } => {
                self.spinner.println(format!(
                    "  {}Related videos for {} unavailable: {}",
                    WARNING,
                    discovery_id.yellow(),
                    error.dimmed()
                ));
            }

            CatalogEvent::CategoryFailed { category, error } => {
                self.spinner.println(format!(
                    "  {}Category {} unavailable: {}",
                    WARNING,
                    category.yellow(),
                    error.dimmed()
                ));
            }
        }
    }
}

/// Decode HTML entities and collapse whitespace in catalog text
fn clean_text(text: &str) -> String {
    let decoded: Cow<'_, str> = html_escape::decode_html_entities(text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn display_date(release_date: &str, style: DateStyle) -> String {
    format_release_date(release_date, style).unwrap_or_else(|| "undated".to_string())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    println!("{json}");
    Ok(())
}

fn print_discoveries(heading: &str, discoveries: &[Discovery]) {
    println!("\n{}{}", HEADPHONES, heading.bold().magenta());

    if discoveries.is_empty() {
        println!("  {}", "Nothing found".dimmed());
        return;
    }

    for (index, discovery) in discoveries.iter().enumerate() {
        println!(
            "  {:>2}. {} {} {}",
            index + 1,
            truncate_title(&discovery.title, 60).bold(),
            format!("[{}]", discovery.content_type).cyan(),
            discovery.id.dimmed()
        );

        let summary = clean_text(&discovery.description);
        if !summary.is_empty() {
            println!("      {}", truncate_title(&summary, SUMMARY_LENGTH));
        }
        println!(
            "      {}",
            discovery.artwork(LIST_ARTWORK_SIZE).dimmed()
        );
    }
}

fn print_details(details: &DiscoveryDetails) {
    println!(
        "\n{}{} {}",
        HEADPHONES,
        details.title.bold().magenta(),
        format!("[{}]", details.content_type).cyan()
    );
    println!(
        "  Released {}",
        display_date(&details.release_date, DateStyle::Long)
    );

    if !details.genre_ids.is_empty() {
        println!("  {}", details.genre_names().join(", ").yellow());
    }
    println!("  {}", details.artwork(DETAIL_ARTWORK_SIZE).dimmed());

    let description = clean_text(&details.description);
    if !description.is_empty() {
        println!("\n  {description}");
    }

    println!(
        "\n{} ({})",
        "Episodes".bold(),
        details.episodes.len().to_string().cyan()
    );
    for episode in &details.episodes {
        let duration = episode
            .duration_ms
            .map(format_duration)
            .unwrap_or_else(|| "--:--".to_string());

        println!(
            "  {}{} {} {}",
            BULLET,
            truncate_title(&episode.title, 60).bold(),
            duration.cyan(),
            display_date(&episode.release_date, DateStyle::Long).dimmed()
        );
        if !episode.audio_url.is_empty() {
            println!("    {}", episode.audio_url.dimmed());
        }
    }

    if !details.videos.is_empty() {
        print_videos("Related videos", &details.videos);
    }
}

fn print_videos(heading: &str, videos: &[DiscoveryVideo]) {
    println!("\n{}{}", FILM, heading.bold().magenta());

    if videos.is_empty() {
        println!("  {}", "Nothing found".dimmed());
        return;
    }

    for video in videos {
        println!(
            "  {}{} {} {}",
            BULLET,
            truncate_title(&video.name, 60).bold(),
            format!("[{}]", video.kind).cyan(),
            display_date(&video.release_date, DateStyle::Short).dimmed()
        );

        let summary = clean_text(&video.description);
        if !summary.is_empty() {
            println!("    {}", truncate_title(&summary, SUMMARY_LENGTH));
        }
        println!("    {}", video.url.dimmed());
    }
}

async fn run(client: &CatalogClient<ReqwestClient>, args: &Args) -> Result<()> {
    match &args.command {
        Command::Home => {
            let home = client.home().await.context("Failed to load the home feed")?;
            if args.json {
                return print_json(&home);
            }
            print_discoveries("Trending", &home.trending);
            print_discoveries("Science", &home.science);
            print_discoveries("History", &home.history);
        }

        Command::Trending => {
            let trending = client
                .trending()
                .await
                .context("Failed to load trending discoveries")?;
            if args.json {
                return print_json(&trending);
            }
            print_discoveries("Trending", &trending);
        }

        Command::Search { query } => {
            let query = query.join(" ");
            let found = client
                .search(&query)
                .await
                .with_context(|| format!("Failed to search for '{query}'"))?;
            if args.json {
                return print_json(&found);
            }
            print_discoveries(&format!("Results for \"{query}\""), &found);
        }

        Command::Category { name } => {
            let found = client
                .by_category(name)
                .await
                .with_context(|| format!("Failed to load category '{name}'"))?;
            if args.json {
                return print_json(&found);
            }
            print_discoveries(name, &found);
        }

        Command::Details { id } => {
            let details = client
                .details(id)
                .await
                .with_context(|| format!("Failed to load discovery {id}"))?;
            if args.json {
                return print_json(&details);
            }
            print_details(&details);
        }

        Command::Videos { query } => {
            let query = query.join(" ");
            let videos = client
                .videos(&query)
                .await
                .with_context(|| format!("Failed to search videos for '{query}'"))?;
            if args.json {
                return print_json(&videos);
            }
            print_videos(&format!("Videos for \"{query}\""), &videos);
        }

        Command::Documentaries => {
            let videos = client
                .documentaries()
                .await
                .context("Failed to load documentaries")?;
            if args.json {
                return print_json(&videos);
            }
            print_videos("Documentaries", &videos);
        }
    }

    Ok(())
}

/// Generic message shown for a failed command
fn failure_message(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<CatalogError>().map(CatalogError::kind) {
        Some(ErrorKind::NotFound) => "That discovery could not be found.",
        _ => "Something went wrong while talking to the catalog.",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let show_progress = !args.quiet && !args.json;
    if show_progress {
        println!(
            "\n{}{} {}",
            TELESCOPE,
            "discoveries".bold().magenta(),
            "- Educational Catalog Browser".dimmed()
        );
    }

    let config = CatalogConfig::with_base_url(&args.base_url)
        .with_context(|| format!("Invalid base URL '{}'", args.base_url))?;

    let spinner = show_progress.then(|| Arc::new(SpinnerReporter::new(args.verbose)));
    let reporter: SharedReporter = match &spinner {
        Some(spinner) => spinner.clone() as SharedReporter,
        None => NoopReporter::shared(),
    };

    let client = CatalogClient::with_config(ReqwestClient::new(), config, reporter);
    let result = run(&client, &args).await;

    if let Some(spinner) = &spinner {
        spinner.finish();
    }

    if let Err(e) = result {
        eprintln!("\n{}{}", FAILURE, failure_message(&e).red().bold());
        eprintln!("  {}", format!("{e:#}").dimmed());
        std::process::exit(1);
    }

    if show_progress {
        println!();
    }

    Ok(())
}
