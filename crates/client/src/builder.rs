//! Client builder.

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{Game, ResourceProvider};

use crate::config::ClientConfig;
use crate::input::{AutoPilot, InputSource, StdinInput};
use crate::surface::TextSurface;
use crate::Client;

/// Builder for constructing a [`Client`].
///
/// Content is loaded from `config.data_dir` unless resources are injected,
/// and the input source follows `config.autoplay` unless one is injected.
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    resources: Option<ResourceProvider>,
    input: Option<Box<dyn InputSource>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use already loaded content instead of reading the data directory.
    pub fn resources(mut self, resources: ResourceProvider) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn input(mut self, input: impl InputSource + 'static) -> Self {
        self.input = Some(Box::new(input));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the content directory cannot be loaded.
    pub fn build(self) -> Result<Client> {
        let resources = match self.resources {
            Some(resources) => resources,
            None => {
                let factory = ContentFactory::new(&self.config.data_dir);
                ResourceProvider::load(&factory).with_context(|| {
                    format!(
                        "Failed to load content from {}",
                        self.config.data_dir.display()
                    )
                })?
            }
        };

        let resources = if self.config.autoplay {
            let rules = resources.config().clone().autoplay();
            resources.with_config(rules)
        } else {
            resources
        };

        let input = match self.input {
            Some(input) => input,
            None if self.config.autoplay => Box::new(AutoPilot::default()),
            None => Box::new(StdinInput::new()),
        };

        Ok(Client {
            game: Game::new(resources, self.config.seed),
            surface: TextSurface::new(),
            input,
            config: self.config,
        })
    }
}
