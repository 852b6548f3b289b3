use crate::input::RawInputs;
use crate::model::Mode;
use crate::prompt::Prompter;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "commitplot")]
#[command(about = "Stacked weekly and monthly commit charts per author or keyword")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Paths to git repositories (comma or space separated)")]
    pub repos: Option<String>,

    #[arg(long, help = "Branches to read in every repository (comma or space separated)")]
    pub branches: Option<String>,

    #[arg(long, help = "First week to include (YY.WW)")]
    pub week_from: Option<String>,

    #[arg(long, help = "Last week to include (YY.WW)")]
    pub week_to: Option<String>,

    #[arg(long, help = "Directory the images are written to", default_value = ".")]
    pub output_dir: PathBuf,

    #[arg(long, help = "Image width in pixels", default_value_t = 1400,
          value_parser = clap::value_parser!(u32).range(400..=10000))]
    pub width: u32,

    #[arg(long, help = "Image height in pixels", default_value_t = 600,
          value_parser = clap::value_parser!(u32).range(300..=10000))]
    pub height: u32,

    #[arg(long, help = "Print the aggregated series as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the commits of one author
    Author {
        #[arg(help = "Author name, matched exactly")]
        name: Option<String>,
    },
    /// Count the commits whose message mentions any of the keywords
    Keywords {
        #[arg(help = r#"Keywords inside quotes, e.g. '"bug" "fix"'"#)]
        keywords: Option<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let common = self.common;
        let mut prompter = Prompter::new(common.json);

        let (mode, filter) = match self.command {
            Commands::Author { name } => (Mode::Author, prompter.required(name, "Enter author name: ")?),
            Commands::Keywords { keywords } => (
                Mode::Keywords,
                prompter.required(
                    keywords,
                    r#"Enter keywords inside quotes (e.g. "misra" "bug" "fix"): "#,
                )?,
            ),
        };

        let inputs = RawInputs {
            mode,
            filter,
            repos: prompter.required(
                common.repos.clone(),
                "Enter paths to git repos (comma or space separated): ",
            )?,
            branches: prompter.required(
                common.branches.clone(),
                "Enter branches (comma or space-separated): ",
            )?,
            week_from: prompter.optional(
                common.week_from.clone(),
                "Enter week-from (YY.WW, blank for none): ",
            )?,
            week_to: prompter.optional(
                common.week_to.clone(),
                "Enter week-to (YY.WW, blank for none): ",
            )?,
        };

        crate::plot::exec(&common, inputs)
    }
}
