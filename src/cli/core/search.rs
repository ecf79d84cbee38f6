use clap::{Args, ValueEnum};
use crossterm::{
    execute,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io;
use tracing::info;

use crate::core::song::Song;
use crate::error::Result;
use crate::services::ServiceFactory;
use crate::utils::progress::{ProgressMessages, ProgressUtils};
use crate::utils::table::fit_to_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Karaoke provider (TJ, KY; case-insensitive)
    #[arg(value_name = "PROVIDER")]
    provider: String,

    /// Search keyword, sent to the provider as-is
    #[arg(value_name = "KEYWORD")]
    keyword: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Limit number of results shown
    #[arg(long)]
    limit: Option<usize>,
}

pub async fn execute(args: SearchArgs, services: &ServiceFactory) -> Result<()> {
    let search = services.create_search_service()?;

    let mut songs = match args.format {
        OutputFormat::Table => {
            let pb = ProgressUtils::create_search_spinner(ProgressMessages::searching(
                &args.provider,
                &args.keyword,
            ));
            let result = search.search(&args.provider, &args.keyword).await;
            pb.finish_and_clear();
            result?
        }
        OutputFormat::Json => search.search(&args.provider, &args.keyword).await?,
    };

    if let Some(limit) = args.limit {
        songs.truncate(limit);
    }

    match args.format {
        OutputFormat::Json => output_json(&songs)?,
        OutputFormat::Table => {
            if songs.is_empty() {
                info!("No songs found for \"{}\"", args.keyword);
                return Ok(());
            }
            info!("{}", ProgressMessages::found_count(songs.len()));
            output_table(&songs);
        }
    }

    Ok(())
}

fn output_json(songs: &[Song]) -> Result<()> {
    let json = serde_json::to_string_pretty(songs)?;
    println!("{}", json);
    Ok(())
}

const COLUMNS: [(&str, usize); 5] = [
    ("No.", 8),
    ("Title", 30),
    ("Singer", 20),
    ("Lyricist", 14),
    ("Composer", 14),
];

fn output_table(songs: &[Song]) {
    let accent = Color::Rgb { r: 255, g: 165, b: 0 };

    let _ = execute!(io::stdout(), SetForegroundColor(accent));
    println!();
    println!("{}", border('┌', '┬', '┐'));
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(name, width)| format!(" {} ", fit_to_width(name, *width)))
        .collect();
    println!("│{}│", header.join("│"));
    println!("{}", border('├', '┼', '┤'));
    let _ = execute!(io::stdout(), ResetColor);

    for song in songs {
        let cells = [
            song.song_id.as_str(),
            song.title.as_str(),
            song.singer.as_str(),
            song.lyricist.as_str(),
            song.composer.as_str(),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| format!(" {} ", fit_to_width(cell, *width)))
            .collect();
        println!("│{}│", row.join("│"));
    }

    let _ = execute!(io::stdout(), SetForegroundColor(accent));
    println!("{}", border('└', '┴', '┘'));
    let _ = execute!(io::stdout(), ResetColor);
}

fn border(left: char, middle: char, right: char) -> String {
    let segments: Vec<String> = COLUMNS
        .iter()
        .map(|(_, width)| "─".repeat(width + 2))
        .collect();
    format!("{}{}{}", left, segments.join(&middle.to_string()), right)
}
