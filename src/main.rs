use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gitfolio::analysis::{all_tags, ProjectFilter, TagFilter};
use gitfolio::models::{sample_projects, LanguageEntry, Project};
use gitfolio::{Config, GitHubClient, Locale, PipelineConfig, ProfilePipeline};

#[derive(Parser, Debug)]
#[command(name = "gitfolio")]
#[command(version = "0.1.0")]
#[command(about = "Summarize a GitHub account for a portfolio page")]
struct Args {
    /// GitHub username (defaults to GITHUB_USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Include private repositories (needs GITHUB_TOKEN)
    #[arg(long)]
    include_private: bool,

    /// Locale for placeholder text (en, vi)
    #[arg(long)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Top programming languages by bytes across all repositories
    Languages,

    /// Recently updated repositories as project cards
    Projects {
        /// Maximum number of projects (defaults to REPOS_LIMIT)
        #[arg(long)]
        limit: Option<usize>,

        /// Case-insensitive text matched against title and description
        #[arg(long, default_value = "")]
        search: String,

        /// Only projects carrying this tag ("all" for every tag)
        #[arg(long, default_value = "all")]
        tag: String,
    },

    /// Unique tags across the project cards
    Tags {
        /// Maximum number of projects (defaults to REPOS_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitfolio=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::from_env()?;

    if args.include_private {
        config.include_private = true;
    }
    if let Some(locale) = args.locale {
        config.locale = locale;
    }
    if let Command::Projects { limit: Some(limit), .. } | Command::Tags { limit: Some(limit) } =
        &args.command
    {
        config.repos_limit = *limit;
    }

    if config.include_private && config.github_token.is_none() {
        tracing::warn!("--include-private has no effect without GITHUB_TOKEN");
    }

    let username = resolve_username(args.username.clone(), &config)?;
    let label = if username.is_empty() { "authenticated user" } else { username.as_str() };

    let github = GitHubClient::from_config(&config)?;
    let pipeline_config = PipelineConfig {
        show_progress: true,
        ..PipelineConfig::from(&config)
    };
    let pipeline = ProfilePipeline::new(github, pipeline_config);

    let output = match &args.command {
        Command::Languages => {
            let languages = pipeline.languages(&username).await?;
            render_languages(label, &languages, &args.format)?
        }
        Command::Projects { search, tag, .. } => {
            let projects = load_projects(&pipeline, &username, config.locale).await;
            let filter = ProjectFilter::new(search.clone(), TagFilter::parse(tag));
            let matching: Vec<Project> = filter.apply(&projects).into_iter().cloned().collect();
            render_projects(label, &matching, &args.format)?
        }
        Command::Tags { .. } => {
            let projects = load_projects(&pipeline, &username, config.locale).await;
            let tags = all_tags(&projects);
            match args.format.as_str() {
                "json" => serde_json::to_string_pretty(&tags)?,
                _ => tags.join("\n"),
            }
        }
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Picks the account to summarize. The owner listing used for private
/// repositories is keyed by the token, so no name is needed there.
fn resolve_username(arg: Option<String>, config: &Config) -> anyhow::Result<String> {
    if let Some(username) = arg.or_else(|| config.github_username.clone()) {
        return Ok(username);
    }
    if config.include_private && config.github_token.is_some() {
        return Ok(String::new());
    }
    Err(anyhow::anyhow!(
        "no username given; pass --username, set GITHUB_USERNAME, or use --include-private with GITHUB_TOKEN"
    ))
}

async fn load_projects(pipeline: &ProfilePipeline, username: &str, locale: Locale) -> Vec<Project> {
    match pipeline.projects(username).await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Falling back to sample projects");
            sample_projects(locale)
        }
    }
}

fn render_languages(
    username: &str,
    languages: &[LanguageEntry],
    format: &str,
) -> anyhow::Result<String> {
    let output = match format {
        "json" => serde_json::to_string_pretty(languages)?,
        "markdown" => {
            let mut output = format!("# Languages: {}\n\n", username);
            output.push_str("| Language | Bytes | Share |\n|----------|-------|-------|\n");
            for lang in languages {
                output.push_str(&format!(
                    "| {} | {} | {}% |\n",
                    lang.name, lang.bytes, lang.percentage
                ));
            }
            output
        }
        _ => {
            let mut output = format!("\n=== Languages: {} ===\n\n", username);
            if languages.is_empty() {
                output.push_str("No programming languages found.\n");
            }
            for lang in languages {
                output.push_str(&format!(
                    "  {:<16} {:>3}%  {}\n",
                    lang.name,
                    lang.percentage,
                    bar(lang.percentage)
                ));
            }
            output
        }
    };
    Ok(output)
}

fn bar(percentage: u8) -> String {
    "#".repeat((percentage as usize + 1) / 2)
}

fn render_projects(username: &str, projects: &[Project], format: &str) -> anyhow::Result<String> {
    let output = match format {
        "json" => serde_json::to_string_pretty(projects)?,
        "markdown" => {
            let mut output = format!("# Projects: {}\n\n", username);
            for project in projects {
                output.push_str(&format!("## [{}]({})\n\n", project.title, project.github));
                output.push_str(&format!("{}\n\n", project.description));
                output.push_str(&format!(
                    "**Tags:** {} | ★ {} | Forks {}\n\n",
                    project.tags.join(", "),
                    project.stars,
                    project.forks
                ));
                if let Some(ref homepage) = project.homepage {
                    output.push_str(&format!("Demo: {}\n\n", homepage));
                }
            }
            output
        }
        _ => {
            let mut output = format!("\n=== Projects: {} ===\n\n", username);
            if projects.is_empty() {
                output.push_str("No projects match.\n");
            }
            for project in projects {
                output.push_str(&format!(
                    "{} (★ {}, forks {})\n  {}\n  [{}]\n  {}\n\n",
                    project.title,
                    project.stars,
                    project.forks,
                    project.description,
                    project.tags.join(", "),
                    project.demo
                ));
            }
            output
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let pairs: Vec<(String, String)> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| {
            pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap()
    }

    #[test]
    fn test_username_argument_wins() {
        let config = config(&[("GITHUB_USERNAME", "from-env")]);
        let username = resolve_username(Some("from-arg".to_string()), &config).unwrap();
        assert_eq!(username, "from-arg");
        assert_eq!(resolve_username(None, &config).unwrap(), "from-env");
    }

    #[test]
    fn test_private_listing_with_token_needs_no_username() {
        let config = config(&[("GITHUB_TOKEN", "ghp_abc"), ("INCLUDE_PRIVATE", "true")]);
        assert_eq!(resolve_username(None, &config).unwrap(), "");
    }

    #[test]
    fn test_missing_username_is_an_error() {
        assert!(resolve_username(None, &config(&[("INCLUDE_PRIVATE", "true")])).is_err());
        assert!(resolve_username(None, &config(&[("GITHUB_TOKEN", "ghp_abc")])).is_err());
    }
}
