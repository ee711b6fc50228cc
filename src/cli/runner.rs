//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::StalcraftClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{ActiveLotPage, LotPage, Page};
use futures::{Stream, StreamExt};
use serde::Serialize;
use std::pin::pin;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the client config from file, environment and flags, in that order
    pub fn load_config(&self) -> Result<ClientConfig> {
        self.load_config_with(|key| std::env::var(key).ok())
    }

    fn load_config_with(&self, var: impl Fn(&str) -> Option<String>) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None if self.cli.demo => ClientConfig::demo(""),
            None => ClientConfig::default(),
        }
        .with_vars(var);

        if let Some(region) = &self.cli.region {
            config.region.clone_from(region);
        }
        if let Some(token) = &self.cli.token {
            config.access_token.clone_from(token);
        }
        Ok(config)
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!("Using {:?}", config);
        let client = StalcraftClient::new(&config)?;

        let canceller = client.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Interrupted, cancelling requests");
                canceller.cancel_all_requests();
            }
        });

        match &self.cli.command {
            Commands::Regions => self.output(&client.list_regions().await?),
            Commands::Emission => self.output(&client.emission_status().await?),
            Commands::Friends { character } => self.output(&client.friend_list(character).await?),
            Commands::History {
                item,
                offset,
                limit,
                additional,
                all,
            } => {
                let page = LotPage::from(Page::at(*offset, *limit)).with_additional(*additional);
                if *all {
                    self.output_pages(client.item_price_history_pages(item, page))
                        .await
                } else {
                    self.output(&client.item_price_history(item, page).await?)
                }
            }
            Commands::Lots {
                item,
                offset,
                limit,
                sort,
                order,
                additional,
                all,
            } => {
                let page = ActiveLotPage {
                    lot: LotPage::from(Page::at(*offset, *limit)),
                    sort: *sort,
                    order: *order,
                }
                .with_additional(*additional);
                if *all {
                    self.output_pages(client.active_item_lot_pages(item, page))
                        .await
                } else {
                    self.output(&client.active_item_lots(item, page).await?)
                }
            }
            Commands::Profile { name } => self.output(&client.character_profile(name).await?),
            Commands::Characters => self.output(&client.list_characters().await?),
            Commands::ClanInfo { clan } => self.output(&client.clan_information(clan).await?),
            Commands::ClanMembers { clan } => self.output(&client.clan_members(clan).await?),
            Commands::Clans { offset, limit, all } => {
                let page = Page::at(*offset, *limit);
                if *all {
                    self.output_pages(client.clan_pages(page)).await
                } else {
                    self.output(&client.list_clans(page).await?)
                }
            }
        }
    }

    async fn output_pages<T: Serialize>(&self, pages: impl Stream<Item = Result<T>>) -> Result<()> {
        let mut pages = pin!(pages);
        let mut count = 0usize;
        while let Some(page) = pages.next().await {
            self.output(&page?)?;
            count += 1;
        }
        debug!("Fetched {} pages", count);
        Ok(())
    }

    /// Output a value
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value),
            OutputFormat::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(Error::Serialize)?;
        println!("{text}");
        Ok(())
    }
}
