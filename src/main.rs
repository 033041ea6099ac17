//! StreamPy demo runner
//!
//! Run with: cargo run -- [SECTION]
//!
//! Sections:
//!   history    recently watched titles and grouped comments
//!   playback   movie and series playback with stream keys
//!   catalog    rating lookup, playlist runtime, kids profile
//!   data       SQLite plans/users, encoding and subtitle workers
//!   network    error report, CSV usernames, cache folder, log archive,
//!              region check
//!   all        every section (default)
//!
//! Settings come from `STREAMPY_*` environment variables; logs go to
//! `$STREAMPY_LOG_DIR/$STREAMPY_LOG_FILE` (default `logs/server.log`).

use streampy::catalog::{kids_profile_filter, lookup_table, sample_movies, total_duration};
use streampy::data::{DatabaseManager, SubtitleDownloader, VideoEncoder};
use streampy::history::{CommentStore, RecentlyWatched};
use streampy::media::Content;
use streampy::network::{
    archive_logs, ensure_cache_dir, read_usernames, ErrorReporter, RegionPolicy,
};
use streampy::{logging, AppConfig, Error, ExecutionTimer};

const SECTIONS: [&str; 5] = ["history", "playback", "catalog", "data", "network"];

fn print_usage() {
    eprintln!("Usage: streampy [history|playback|catalog|data|network|all]");
}

fn history_demo(config: &AppConfig) -> streampy::Result<()> {
    println!("--- Execution Timing ---");
    let timer = ExecutionTimer::new(config.slow_call_threshold);
    let pause = config.slow_call_threshold * 2;
    timer.run("slow_function", || {
        std::thread::sleep(pause);
        println!("Function executed.");
        Ok::<_, Error>(())
    })?;

    println!("\n--- Recently Watched ---");
    let mut recent = RecentlyWatched::new(config.history_capacity)?;
    for title in ["Movie1", "Movie2", "Movie3", "Movie4", "Movie5", "Movie6"] {
        recent.add(title)?;
    }
    println!("Recently Watched: {:?}", recent.history());

    println!("\n--- Comments ---");
    let mut comments = CommentStore::new();
    comments.add("VID101", "Great episode!")?;
    comments.add("VID101", "Waiting for the next one...")?;
    comments.add("VID202", "Amazing cinematography!")?;
    println!("Comments for VID101: {:?}", comments.get("VID101"));
    println!("All comments: {:?}", comments.all());

    Ok(())
}

fn playback_demo() -> streampy::Result<()> {
    let mut movie = Content::movie(101, "Interstellar")?;
    let mut series = Content::series(201, "Stranger Things")?;

    println!("{}", movie);
    println!("{}", series);

    // No stream keys yet
    println!("{}", movie.play(None));
    println!("{}", series.play(None));

    movie.set_stream_key("abc123xyz")?;
    series.set_stream_key("serieskey456")?;

    println!("{}", movie.play(None));
    println!("{}", series.play(Some(2)));
    println!("{}", series.play(Some(0)));

    println!("Movie Stream Key: {}", movie.stream_key()?);
    println!("Series Stream Key: {}", series.stream_key()?);

    Ok(())
}

fn catalog_demo() {
    let movies = sample_movies();

    println!("Lookup Table: {:?}", lookup_table(&movies));
    println!("Total Duration: {}", total_duration(&movies));

    let kids: Vec<String> = kids_profile_filter(&movies)
        .into_iter()
        .filter_map(|movie| movie.title)
        .collect();
    println!("Kids Profile Movies: {:?}", kids);
}

async fn data_demo(config: &AppConfig) -> streampy::Result<()> {
    let db = DatabaseManager::connect(config).await?;
    db.setup_database().await?;
    db.seed_users().await?;

    println!("--- Subscription Plans ---");
    for plan in db.subscription_plans().await? {
        println!("{}", plan);
    }

    println!("\n--- Premium Users ---");
    for user in db.premium_users().await? {
        println!("({}, '{}', '{}')", user.id, user.name, user.plan);
    }
    db.close().await;

    println!("\n--- Video Encoding ---");
    let encoder =
        VideoEncoder::from_config(["video1.mp4", "video2.mp4", "video3.mp4"], config);
    let encoded = encoder.start_encoding().await?;
    println!("[Encoding] All encoding tasks completed: {:?}", encoded);

    println!("\n--- Subtitle Download ---");
    let downloader = SubtitleDownloader::from_config("video1.mp4", config);
    for event in downloader.simulate_stream().await? {
        println!("[Stream] {:?}", event);
    }

    Ok(())
}

async fn network_demo(config: &AppConfig) -> streampy::Result<()> {
    let reporter = ErrorReporter::from_config(config)?;
    match reporter.report("Service not found error").await {
        Ok(status) => println!("Error report sent: {}", status),
        Err(e) => {
            tracing::error!(error = %e, "Error report failed");
            println!("Request failed: {}", e);
        }
    }

    let usernames = read_usernames(&config.users_csv, config.username_limit)?;
    if usernames.is_empty() {
        println!("No usernames found in {}", config.users_csv.display());
    }
    for name in usernames {
        println!("{}", name);
    }

    if ensure_cache_dir(&config.cache_dir)? {
        println!("[Cache] Created '{}' folder.", config.cache_dir.display());
    }

    for file in archive_logs(&config.log_dir, &config.logs_archive)? {
        println!("[ZIP] Archived: {}", file);
    }

    let policy = RegionPolicy::from_config(config);
    for country in ["IN", "US"] {
        match policy.access_content(country) {
            Ok(()) => println!("Content streamed successfully for region: {}", country),
            Err(e) => println!("Error: {}", e),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let section = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());
    if section != "all" && !SECTIONS.contains(&section.as_str()) {
        eprintln!("Unknown section: {}", section);
        print_usage();
        std::process::exit(1);
    }

    let config = AppConfig::from_env();
    logging::init(&config)?;
    tracing::info!(section = %section, "StreamPy demo starting");

    let selected = |name: &str| section == "all" || section == name;

    if selected("history") {
        println!("\n=== History ===");
        history_demo(&config)?;
    }
    if selected("playback") {
        println!("\n=== Playback ===");
        playback_demo()?;
    }
    if selected("catalog") {
        println!("\n=== Catalog ===");
        catalog_demo();
    }
    if selected("data") {
        println!("\n=== Data ===");
        data_demo(&config).await?;
    }
    if selected("network") {
        println!("\n=== Network ===");
        network_demo(&config).await?;
    }

    Ok(())
}
