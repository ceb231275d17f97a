use anyhow::Result;

use crate::cli::SettingsCommand;
use crate::Commands;

use super::container::Container;
use super::controller::{
    ParaphraseController, ReviewController, SettingsController, TrimController,
};

pub struct Router<'a> {
    review_controller: ReviewController<'a>,
    trim_controller: TrimController<'a>,
    paraphrase_controller: ParaphraseController<'a>,
    settings_controller: SettingsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            review_controller: ReviewController::new(container),
            trim_controller: TrimController::new(container),
            paraphrase_controller: ParaphraseController::new(container),
            settings_controller: SettingsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Review {
                file,
                focus,
                instructions,
                selection,
                output,
            } => {
                self.review_controller
                    .review(file, focus, instructions, selection, output)
                    .await
            }
            Commands::ReviewAgain { output } => self.review_controller.review_again(output).await,
            Commands::Trim {
                file,
                selection,
                output,
            } => self.trim_controller.trim(file, selection, output).await,
            Commands::Paraphrase {
                file,
                count,
                apply,
                selection,
                output,
            } => {
                self.paraphrase_controller
                    .paraphrase(file, count, apply, selection, output)
                    .await
            }
            Commands::Settings { action } => match action {
                SettingsCommand::Show => self.settings_controller.show().await,
                SettingsCommand::Set {
                    api_key,
                    base_url,
                    model,
                } => self.settings_controller.set(api_key, base_url, model).await,
            },
            Commands::Mcp => unreachable!("MCP command is handled separately in main"),
        }
    }
}
