use std::{
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shortspark_core::{
    Agent, AgentBundle, Brief, DEFAULT_DURATION, RawBrief, clamp_duration, format_agent_output,
    format_bundle_readable, generate_bundle, parse_duration,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.1}ms", secs * 1000.0)
    } else {
        format!("{:.1}s", secs)
    }
}

/// CLI wrapper for Agent enum (needed for clap ValueEnum)
#[derive(Clone, Copy, ValueEnum)]
enum CliAgent {
    Idea,
    Script,
    Visual,
    Distribution,
}

impl From<CliAgent> for Agent {
    fn from(cli: CliAgent) -> Self {
        match cli {
            CliAgent::Idea => Agent::Idea,
            CliAgent::Script => Agent::Script,
            CliAgent::Visual => Agent::Visual,
            CliAgent::Distribution => Agent::Distribution,
        }
    }
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Markdown playbook
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "shortspark")]
#[command(
    about = "Generate hooks, scripts, shot lists, and publishing playbooks for YouTube Shorts"
)]
struct Cli {
    /// JSON brief file (camelCase keys, every key optional). Without it the sample brief is used.
    #[arg(short, long)]
    brief: Option<PathBuf>,

    /// Video topic
    #[arg(long)]
    topic: Option<String>,

    /// Target audience
    #[arg(long)]
    audience: Option<String>,

    /// Delivery tone (e.g. "high-energy", "cinematic", "playful")
    #[arg(long)]
    tone: Option<String>,

    /// Outcome / call to action (e.g. "grow your channel")
    #[arg(long)]
    goal: Option<String>,

    /// Brand or creator keywords
    #[arg(long)]
    brand: Option<String>,

    /// Desired runtime in seconds, clamped to 15-60
    #[arg(short, long)]
    duration: Option<String>,

    /// Run a single agent instead of the whole stack
    #[arg(short, long)]
    agent: Option<CliAgent>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Write the playbook to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "shortspark=debug,shortspark_core=debug"
    } else {
        "warn"
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // LOG_FORMAT=json for machine-readable logs
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}

/// Sample brief (or the `--brief` file), then individual flags on top.
fn load_brief(cli: &Cli) -> Result<Brief> {
    let base = match &cli.brief {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read brief {}", path.display()))?;
            RawBrief::from_json(&json)
                .with_context(|| format!("Invalid brief {}", path.display()))?
        }
        None => RawBrief::sample(),
    };

    let previous = base.duration.map_or(DEFAULT_DURATION, clamp_duration);
    let overrides = RawBrief {
        topic: cli.topic.clone(),
        audience: cli.audience.clone(),
        tone: cli.tone.clone(),
        goal: cli.goal.clone(),
        brand_keywords: cli.brand.clone(),
        duration: cli
            .duration
            .as_deref()
            .map(|input| f64::from(parse_duration(input, previous))),
    };

    Ok(Brief::normalize(base.merge(overrides)))
}

fn checkpoint(label: &str, detail: &str) {
    if detail.is_empty() {
        eprintln!("{} {}", style("✓").green().bold(), label);
    } else {
        eprintln!(
            "{} {} {}",
            style("✓").green().bold(),
            label,
            style(format!("({})", detail)).dim()
        );
    }
}

fn bundle_detail(agent: Agent, bundle: &AgentBundle) -> String {
    match agent {
        Agent::Idea => format!(
            "{} points, {} titles",
            bundle.idea.supporting_points.len(),
            bundle.idea.title_ideas.len()
        ),
        Agent::Script => format!("{} beats", bundle.script.beats.len()),
        Agent::Visual => format!(
            "{} shots, {} transitions",
            bundle.visuals.beats.len(),
            bundle.visuals.transitions.len()
        ),
        Agent::Distribution => format!("{} hashtags", bundle.distribution.hashtags.len()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let brief = load_brief(&cli)?;
    debug!(?brief, "brief loaded");

    eprintln!(
        "\n{}  {}\n",
        style("shortspark").cyan().bold(),
        style("Agent Studio").dim()
    );
    checkpoint(
        "Brief synced",
        &format!("{}s, {}", brief.duration(), brief.tone()),
    );

    let start = Instant::now();
    let rendered = match cli.agent {
        Some(agent) => {
            let agent: Agent = agent.into();
            let output = agent.run(&brief)?;
            checkpoint(agent.checkpoint(), "");
            match cli.format {
                OutputFormat::Text => format_agent_output(&output),
                OutputFormat::Json => serde_json::to_string_pretty(&output)?,
            }
        }
        None => {
            let bundle = generate_bundle(&brief)?;
            for agent in Agent::ALL {
                checkpoint(agent.checkpoint(), &bundle_detail(agent, &bundle));
            }
            match cli.format {
                OutputFormat::Text => format_bundle_readable(&brief, &bundle),
                OutputFormat::Json => serde_json::to_string_pretty(&bundle)?,
            }
        }
    };

    eprintln!("{}", style("─".repeat(60)).dim());
    eprintln!(
        "{} Generated in {}",
        style("✓").green().bold(),
        style(format_duration(start.elapsed())).dim()
    );

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.len(), "playbook written");
            eprintln!(
                "{} Saved to {}\n",
                style("✓").green().bold(),
                style(path.display()).dim()
            );
        }
        None => {
            eprintln!();
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("shortspark").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults_to_sample_brief() {
        let brief = load_brief(&parse(&[])).unwrap();
        assert_eq!(brief, Brief::sample());
    }

    #[test]
    fn test_flags_override_sample() {
        let cli = parse(&["--tone", "cinematic", "--duration", "999"]);
        let brief = load_brief(&cli).unwrap();
        assert_eq!(brief.tone(), "cinematic");
        assert_eq!(brief.duration(), 60);
        assert_eq!(brief.topic(), "AI tools for creators");
    }

    #[test]
    fn test_unparseable_duration_keeps_previous() {
        let brief = load_brief(&parse(&["--duration", "soon"])).unwrap();
        assert_eq!(brief.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn test_missing_brief_file_is_an_error() {
        let cli = parse(&["--brief", "/nonexistent/brief.json"]);
        let err = load_brief(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read brief"));
    }

    #[test]
    fn test_agent_flag_parses() {
        let cli = parse(&["--agent", "visual", "--format", "json"]);
        assert!(matches!(cli.agent, Some(CliAgent::Visual)));
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
