//! Subcommand runners. Each one builds a board from its input, derives the
//! requested view and prints it.

use crate::cli::{Cli, Command, FilterArgs, InputArgs};
use crate::render;
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use sentinel_core::analytics::summarize;
use sentinel_core::config::{Config, ListingConfig};
use sentinel_core::export::{export_filename, render as render_export};
use sentinel_core::group::group_alerts;
use sentinel_core::search::{paginate, AlertFilter, DateRange, Page};
use sentinel_core::{parse, AlertBoard, FeedEvent, Normalizer};
use sentinel_feeds::decode::decode_document;
use sentinel_feeds::{AlertFeed, FileFeed, FileSink, LineFeed};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let normalizer = Normalizer::new(config.placeholders.clone());
    let listing = &config.listing;

    match cli.command {
        Command::List {
            input,
            filter,
            page,
            page_size,
            json,
        } => {
            let board = load_board(&input, normalizer).await?;
            let filter = build_filter(&filter, listing);
            let size = page_size.unwrap_or(listing.page_size);
            let slice = paginate(filter.apply(board.alerts()), Page::new(page, size));
            if json {
                println!("{}", serde_json::to_string_pretty(&slice.items)?);
            } else {
                print!("{}", render::page(&slice, listing.summary_width));
            }
        }
        Command::Show { input, id } => {
            let board = load_board(&input, normalizer).await?;
            let alert = board
                .get(&id)
                .with_context(|| format!("no alert with id {id:?}"))?;
            print!("{}", render::alert_detail(alert));
        }
        Command::Groups { input, filter } => {
            let board = load_board(&input, normalizer).await?;
            let filter = build_filter(&filter, listing);
            let groups = group_alerts(filter.apply(board.alerts()));
            print!("{}", render::groups(&groups, listing.summary_width));
        }
        Command::Stats { input, today } => {
            let board = load_board(&input, normalizer).await?;
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let stats = summarize(
                board.alerts(),
                today,
                listing.timeline_days,
                listing.top_workflows,
            );
            print!("{}", render::stats(&stats));
        }
        Command::Parse { file } => {
            let text = match file.filter(|f| f.as_os_str() != "-") {
                Some(path) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?,
                None => read_stdin().await?,
            };
            print!("{}", render::parsed(&parse(&text)));
        }
        Command::Resolve { input, ids } => {
            let path = file_input(&input)?;
            let mut board = load_board(&input, normalizer).await?;
            let changed = board.resolve(FileSink::new(path), &ids)?;
            println!("resolved {changed} alert(s)");
        }
        Command::Delete { input, ids } => {
            let path = file_input(&input)?;
            let mut board = load_board(&input, normalizer).await?;
            let removed = board.delete(FileSink::new(path), &ids)?;
            println!("deleted {removed} alert(s)");
        }
        Command::Export {
            input,
            filter,
            format,
            output,
        } => {
            let board = load_board(&input, normalizer).await?;
            let filter = build_filter(&filter, listing);
            let alerts = filter.apply(board.alerts());
            let body = render_export(format, &alerts)?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(export_filename("alerts", Utc::now().date_naive(), format))
            });
            tokio::fs::write(&path, body)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            println!("exported {} alert(s) to {}", alerts.len(), path.display());
        }
        Command::Watch => watch(normalizer, listing).await?,
    }

    Ok(())
}

fn build_filter(args: &FilterArgs, listing: &ListingConfig) -> AlertFilter {
    let mut filter = AlertFilter::new();
    if let Some(term) = &args.search {
        filter = filter.search_capped(term, listing.search_term_max_len);
    }
    if let Some(status) = args.status {
        filter = filter.status(status);
    }
    if let Some(priority) = args.priority {
        filter = filter.priority(priority);
    }
    if let (Some(from), Some(to)) = (args.from, args.to) {
        filter = filter.date_range(date_range(from, to));
    }
    filter
}

fn date_range(from: NaiveDate, to: NaiveDate) -> DateRange {
    if from <= to {
        DateRange::new(from, to)
    } else {
        DateRange::new(to, from)
    }
}

fn file_input(input: &InputArgs) -> anyhow::Result<PathBuf> {
    if input.is_stdin() {
        anyhow::bail!("this command rewrites its input and needs --input <FILE>");
    }
    Ok(input.input.clone())
}

async fn read_stdin() -> anyhow::Result<String> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

async fn load_board(input: &InputArgs, normalizer: Normalizer) -> anyhow::Result<AlertBoard> {
    let mut board = AlertBoard::new(normalizer);

    if input.is_stdin() {
        let records = decode_document(&read_stdin().await?)?;
        board.apply(FeedEvent::Snapshot(records));
        return Ok(board);
    }

    let (tx, mut rx) = mpsc::channel(1);
    let handle = FileFeed::new(&input.input).spawn(tx);
    while let Some(event) = rx.recv().await {
        board.apply(event);
    }
    handle
        .await?
        .with_context(|| format!("reading {}", input.input.display()))?;

    tracing::debug!(count = board.len(), "board loaded");
    Ok(board)
}

async fn watch(normalizer: Normalizer, listing: &ListingConfig) -> anyhow::Result<()> {
    let mut board = AlertBoard::new(normalizer);
    let (tx, mut rx) = mpsc::channel(64);
    let handle = LineFeed::stdin().spawn(tx);

    while let Some(event) = rx.recv().await {
        board.apply(event);
        if let Some(alert) = board.alerts().first() {
            println!("{}", render::alert_line(alert, listing.summary_width));
        }
    }

    handle.await??;
    Ok(())
}
