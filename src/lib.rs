use std::{fs::File, io::BufWriter};

use cli::Cli;
use error::AppError;
use image::RgbaImage;
use scraper::Html;
use tracing::info;

use crate::{cloud::WordCloud, consts::DEFAULT_COLOR, data::Extraction};

pub mod cli;
pub mod cloud;
pub mod color;
pub mod consts;
pub mod data;
pub mod error;
pub mod extract;
pub mod glyphs;
pub mod net;

/// Scrape a decklists page and draw the cloud, lands left out.
pub fn build_wordcloud(html: &Html) -> Result<(Extraction, RgbaImage), AppError> {
    let extraction = extract::extract(html)?.without_lands();
    info!(
        cards = extraction.frequencies.len(),
        copies = extraction.total_copies(),
        "counted cards without lands"
    );
    let img = render(&extraction);
    Ok((extraction, img))
}

pub fn render(extraction: &Extraction) -> RgbaImage {
    let mut layout = WordCloud::default().generate_from_frequencies(&extraction.frequencies);
    layout.recolor(&extraction.grouped_colors(DEFAULT_COLOR));
    layout.to_image()
}

pub async fn run(args: Cli) -> eyre::Result<()> {
    // refuse a bad url before touching the network
    let explicit = args.url.as_deref().map(net::validate_url).transpose().map_err(AppError::from)?;
    let client = net::client()?;
    let url = match explicit {
        Some(url) => url,
        None => net::discover_default_url(&client).await?,
    };
    let html = net::fetch_document(&client, &url).await?;

    let (extraction, img) = build_wordcloud(&html)?;
    if let Some(path) = &args.dump {
        info!(path = %path.display(), "saving the card counts");
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, &extraction)?;
    }

    info!(path = %args.output.display(), "saving the word cloud");
    img.save(&args.output).map_err(AppError::from)?;
    Ok(())
}
