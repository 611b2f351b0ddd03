mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use photojury_core::Competition;

/// Photography competition catalog and judging
#[derive(Parser)]
#[command(name = "photojury", version, about)]
struct Cli {
    /// Path to the competition database
    #[arg(long, default_value = "competition.db")]
    db: PathBuf,

    /// Directory holding the stored competition images
    #[arg(long, default_value = "competition_images")]
    images: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a photo to a category
    Add {
        /// Path to the image file
        file: PathBuf,
        /// Competition category (created on first use)
        #[arg(long)]
        category: String,
        /// Photo title
        #[arg(long)]
        title: String,
        /// Photographer name
        #[arg(long)]
        photographer: String,
        /// Rotation: auto (read EXIF), 0, 90, 180, or 270
        #[arg(long, default_value = "auto")]
        rotate: String,
    },
    /// List photos with their positions, one category or all
    Ls {
        /// Category to list (omit to list every category)
        category: Option<String>,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one photo's details and scores
    Show {
        /// Photo ID
        id: i64,
    },
    /// Remove a photo, its scores, and its stored file
    Rm {
        /// Photo ID
        id: i64,
    },
    /// List categories, or create one ahead of time
    Categories {
        #[command(subcommand)]
        action: Option<CategoriesAction>,
    },
    /// Draw a random photo from a category for judging
    Pick {
        /// Category to draw from
        category: String,
    },
    /// Record a judge's score for a photo
    Score {
        /// Photo ID
        id: i64,
        /// Score value, 0 through 10
        value: i64,
    },
    /// Show the score summary for every scored photo
    Scores {
        /// Only show photos in this category
        #[arg(long)]
        category: Option<String>,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show row counts and orphaned image files
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete every photo, score, category, and stored file
    Reset {
        /// Actually delete; without this flag only a summary is printed
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// Create a category before any photos are submitted
    Add {
        /// Category name
        name: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut competition = Competition::open(&cli.db, &cli.images)?;

    match cli.command {
        Commands::Add {
            file,
            category,
            title,
            photographer,
            rotate,
        } => commands::add::run(&competition, &file, &category, &title, &photographer, &rotate)?,
        Commands::Ls { category, json } => {
            commands::ls::run(&competition, category.as_deref(), json)?
        }
        Commands::Show { id } => commands::show::run(&competition, id)?,
        Commands::Rm { id } => commands::rm::run(&mut competition, id)?,
        Commands::Categories { action } => match action {
            None => commands::categories::list(&competition)?,
            Some(CategoriesAction::Add { name }) => commands::categories::add(&competition, name)?,
        },
        Commands::Pick { category } => commands::pick::run(&competition, &category)?,
        Commands::Score { id, value } => commands::score::run(&competition, id, value)?,
        Commands::Scores { category, json } => {
            commands::scores::run(&competition, category.as_deref(), json)?
        }
        Commands::Status { json } => commands::status::run(&competition, json)?,
        Commands::Reset { yes } => commands::reset::run(&mut competition, yes)?,
    }

    Ok(())
}
