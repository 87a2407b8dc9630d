use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueHint};
use twitter_thread::{
    download_images, fetch_threads, generate_markdown, MarkdownOptions, TwitterClient,
};

use crate::config::Config;
use crate::progress_bar::ProgressBar;

static DEFAULT_IMAGE_DIR: &str = "./images";
static DEFAULT_IMAGE_PATH: &str = "./images";
static DEFAULT_OUTFILE: &str = "./thread.md";

/// Convert Twitter threads into a Markdown document with local images
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// URLs of the last tweet from each thread to convert
    #[arg(required = true)]
    urls: Vec<String>,

    /// Directory to store downloaded images [default: ./images]
    #[arg(short = 'i', long, value_hint = ValueHint::DirPath)]
    image_dir: Option<PathBuf>,

    /// Path to use in URLs for images in the output [default: ./images]
    #[arg(short = 'I', long)]
    image_path: Option<PathBuf>,

    /// Path to the generated markdown file [default: ./thread.md]
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    outfile: Option<PathBuf>,

    /// Ensure all tweets end with a period in the output
    #[arg(short, long)]
    periods: bool,

    /// Twitter bearer token
    #[arg(short, long, env = "TWITTER_BEARER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Config file location
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,
}

/// Fully resolved run settings
#[derive(Debug)]
pub struct Settings {
    pub urls: Vec<String>,
    pub token: String,
    pub image_dir: PathBuf,
    pub outfile: PathBuf,
    pub markdown: MarkdownOptions,
}

impl Args {
    pub fn config_path(&self) -> Option<&std::path::Path> {
        self.config.as_deref()
    }

    /// Command line values win over the config file, which wins over the defaults
    pub fn resolve(self, config: Config) -> Result<Settings> {
        let token = self
            .token
            .or(config.bearer)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                anyhow!("Missing bearer token, pass --token or set TWITTER_BEARER_TOKEN")
            })?;

        Ok(Settings {
            urls: self.urls,
            token,
            image_dir: self
                .image_dir
                .or(config.image_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR)),
            outfile: self
                .outfile
                .or(config.outfile)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTFILE)),
            markdown: MarkdownOptions {
                ensure_periods: self.periods || config.periods.unwrap_or(false),
                image_path: self
                    .image_path
                    .or(config.image_path)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_PATH)),
            },
        })
    }
}

impl Settings {
    /// Build the document and write it, returning the path written to
    pub async fn run(&self) -> Result<PathBuf> {
        let twitter_client = TwitterClient::new(&self.token)?;
        let tweets =
            fetch_threads::<_, ProgressBar>(&twitter_client, self.urls.as_slice()).await?;
        if tweets.is_empty() {
            return Err(anyhow!("No tweets found"));
        }

        let reqwest_client = reqwest::Client::new();
        download_images::<ProgressBar>(&reqwest_client, &tweets, &self.image_dir).await?;

        let markdown = generate_markdown(&tweets, &self.markdown);

        let outfile =
            std::path::absolute(&self.outfile).unwrap_or_else(|_| self.outfile.clone());
        tokio::fs::write(&outfile, markdown)
            .await
            .with_context(|| format!("Failed to write {:?}", outfile))?;

        Ok(outfile)
    }
}
