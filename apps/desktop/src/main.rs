use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    BlogSession, Catalog, HttpRatingTransport, RatingSubmitter, StarRow, DEFAULT_RATINGS_ENDPOINT,
};
use shared::domain::{Article, ArticleId, Rating};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "techblog", about = "Browse and rate TechBlog articles")]
struct Args {
    #[arg(long, env = "TECHBLOG_RATINGS_URL", default_value = DEFAULT_RATINGS_ENDPOINT)]
    endpoint: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all articles.
    List,
    /// Show one article in full.
    Show { id: i64 },
    /// Rate an article from 1 to 5 stars.
    Rate {
        id: i64,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        stars: u8,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let transport = HttpRatingTransport::parse(&args.endpoint)?;
    let submitter = RatingSubmitter::on_current_runtime(Arc::new(transport));
    let mut session = BlogSession::new(Catalog::seeded(), submitter);

    match args.command {
        Command::List => {
            for article in session.catalog().articles() {
                println!("{}", render_card(article, &session.star_row(article)));
            }
        }
        Command::Show { id } => {
            open(&mut session, id)?;
            println!("{}", render_detail(&session)?);
        }
        Command::Rate { id, stars } => {
            open(&mut session, id)?;
            let rating = Rating::new(stars).context("star count out of range")?;

            // The outcome is already logged by the submitter; the reader only sees the stars.
            let _ = session.submit_rating(ArticleId(id), rating).outcome().await;
            println!("{}", render_detail(&session)?);
        }
    }

    Ok(())
}

fn open(session: &mut BlogSession, id: i64) -> Result<()> {
    if session.open_article(ArticleId(id)) {
        Ok(())
    } else {
        Err(anyhow!("no article with id {id}"))
    }
}

fn render_stars(row: &StarRow) -> String {
    let stars: String = row
        .cells
        .iter()
        .map(|cell| if cell.lit { '★' } else { '☆' })
        .collect();
    format!("{stars}  {}", row.aggregate_label)
}

fn render_card(article: &Article, row: &StarRow) -> String {
    format!(
        "[{id}] {title}\n    {category} | {author} | {date}\n    {excerpt}\n    {stars}\n",
        id = article.id,
        title = article.title,
        category = article.category,
        author = article.author,
        date = article.date,
        excerpt = article.excerpt,
        stars = render_stars(row),
    )
}

fn render_detail(session: &BlogSession) -> Result<String> {
    let article = session
        .selected()
        .context("no article is open")?;
    let mut out = format!(
        "{category}\n{title}\n{author} · {date}\n{image}\n\n{content}\n\nОцените статью\n{stars}",
        category = article.category,
        title = article.title,
        author = article.author,
        date = article.date,
        image = article.image,
        content = article.content,
        stars = render_stars(&session.star_row(article)),
    );
    if session.has_rated(article.id) {
        out.push_str("\nСпасибо за вашу оценку! ⭐");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use client_core::{RatingSubmitError, RatingTransport};
    use shared::protocol::RatingSubmission;

    struct AcceptingTransport;

    #[async_trait]
    impl RatingTransport for AcceptingTransport {
        async fn post_rating(&self, _: &RatingSubmission) -> Result<(), RatingSubmitError> {
            Ok(())
        }
    }

    fn session() -> BlogSession {
        BlogSession::new(
            Catalog::seeded(),
            RatingSubmitter::on_current_runtime(Arc::new(AcceptingTransport)),
        )
    }

    #[tokio::test]
    async fn card_shows_empty_stars_and_seeded_aggregate() {
        let session = session();
        let article = &session.catalog().articles()[1];
        let card = render_card(article, &session.star_row(article));
        assert!(card.starts_with("[2] "));
        assert!(card.contains("☆☆☆☆☆  4.8 (203)"));
    }

    #[tokio::test]
    async fn detail_thanks_reader_after_rating() {
        let mut session = session();
        open(&mut session, 3).expect("open");
        assert!(!render_detail(&session).expect("detail").contains("Спасибо"));

        session
            .submit_rating(ArticleId(3), Rating::new(4).expect("rating"))
            .outcome()
            .await
            .expect("submit");
        let detail = render_detail(&session).expect("detail");
        assert!(detail.contains("★★★★☆  4.6 (156)"));
        assert!(detail.ends_with("Спасибо за вашу оценку! ⭐"));
    }

    #[tokio::test]
    async fn opening_unknown_article_is_an_error() {
        let mut session = session();
        assert!(open(&mut session, 77).is_err());
        assert!(render_detail(&session).is_err());
    }

    #[test]
    fn stars_argument_is_range_checked() {
        assert!(Args::try_parse_from(["techblog", "rate", "1", "6"]).is_err());
        assert!(Args::try_parse_from(["techblog", "rate", "1", "5"]).is_ok());
    }
}
