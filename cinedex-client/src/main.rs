//! Headless demo shell.
//!
//! Stands in for the real navigation shell: drives the browse and
//! detail controllers against the live catalog from the terminal.
//! Usage: `cinedex [query]` with `TMDB_API_KEY` set (a `.env` file
//! works too).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cinedex_client::domains::{browse, detail};
use cinedex_client::{App, AppEvent, AppMessage, Runtime};
use cinedex_core::{TmdbConfig, TmdbProvider};
use cinedex_model::PosterSize;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = TmdbConfig::from_env()?;
    let image_base = config.image_base.clone();
    let runtime = Runtime::new(TmdbProvider::new(config));
    let mut app = App::default();

    // Mount the list screen: initial empty-query search.
    dispatch(&mut app, &runtime, browse::Message::Mounted.into()).await;
    println!("Default results ({}):", app.browse.results.len());
    for movie in app.browse.results.iter().take(5) {
        println!("  [{}] {}", movie.id, movie.title);
    }

    let query = std::env::args().nth(1).unwrap_or_default();
    if query.is_empty() {
        return Ok(());
    }

    // Live typing, then commit.
    dispatch(&mut app, &runtime, browse::Message::QueryChanged(query).into()).await;
    println!("Suggestions ({}):", app.browse.suggestions.len());
    for movie in &app.browse.suggestions {
        println!("  [{}] {}", movie.id, movie.title);
    }
    dispatch(&mut app, &runtime, browse::Message::Submitted.into()).await;
    println!("Results ({}):", app.browse.results.len());
    for movie in app.browse.results.iter().take(10) {
        println!("  [{}] {}", movie.id, movie.title);
    }

    // Open the first result's detail screen, like a tap would.
    if let Some(first) = app.browse.results.first().cloned() {
        dispatch(&mut app, &runtime, browse::Message::ResultSelected(first).into()).await;
        if let Some(details) = app.detail.details() {
            println!("{} — rating {}/10", details.title, details.vote_average);
            println!("  released {}", details.release_date);
            if let Some(minutes) = details.runtime_minutes() {
                println!("  runtime {minutes} min");
            }
            if let Some(genres) = details.genre_line() {
                println!("  genres {genres}");
            }
            if let Some(poster) = details.poster_url(&image_base, PosterSize::W500) {
                println!("  poster {poster}");
            }
            let shown = app.detail.overview.display_text(&details.overview);
            println!("  {shown}");
        }
    }

    Ok(())
}

/// Feed one message through the app, executing resulting effects to
/// completion and honoring navigation events the way the real shell
/// would.
async fn dispatch(app: &mut App, runtime: &Runtime<TmdbProvider>, message: AppMessage) {
    let mut pending = vec![message];
    while let Some(message) = pending.pop() {
        let outcome = app.update(message);
        for event in outcome.events {
            match event {
                AppEvent::NavigateToDetail(id) => {
                    pending.push(detail::Message::Mounted(id).into());
                }
            }
        }
        for effect in outcome.effects {
            pending.push(runtime.perform(effect).await);
        }
    }
}
