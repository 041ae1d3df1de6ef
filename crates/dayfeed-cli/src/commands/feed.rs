use std::error::Error;

use clap::Subcommand;
use dayfeed_core::{Config, FeedReader};

use crate::render::renderer;

#[derive(Subcommand)]
pub enum FeedAction {
    /// Fetch a feed and print one page of cards
    Read {
        /// Feed URL (RSS or Atom)
        url: String,
        /// Page to show, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(action: FeedAction, config: &Config) -> Result<(), Box<dyn Error>> {
    match action {
        FeedAction::Read { url, page, json } => {
            let mut reader = FeedReader::from_config(config)?;
            reader.load(&url).await.map_err(|e| e.user_message())?;
            reader.go_to(page);
            println!("{}", renderer(json).feed_page(&reader.page())?);
        }
    }
    Ok(())
}
