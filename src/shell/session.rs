/// The read-evaluate-print loop
///
/// This module drives a console session: it shows the menu, dispatches
/// each command to the registry tools and prints their results until the
/// user exits or the input stream closes.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info, warn};

use crate::domain::{AnimalKind, Traits, Variant};
use crate::shell::menu::{kind_menu, main_menu};
use crate::shell::{MenuCommand, Prompter, ShellError};
use crate::storage::AnimalStorage;
use crate::tools::{self, AddAnimalParams, FindAnimalParams};

pub const UNKNOWN_COMMAND: &str = "Unknown command.";
pub const UNKNOWN_KIND: &str = "Unknown animal type.";

/// Whether the loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console session bound to a registry
pub struct Shell<'a, S, R, W> {
    storage: &'a mut S,
    prompter: Prompter<R, W>,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: AnimalStorage,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(storage: &'a mut S, prompter: Prompter<R, W>) -> Self {
        Self { storage, prompter }
    }

    /// Give back the prompter, e.g. to inspect what was written
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    /// Run the menu loop until "0" is chosen or input runs out
    pub async fn run(&mut self) -> Result<(), ShellError> {
        info!("Shell started with {} animals", self.storage.len());

        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("Shell exiting on user request");
                    break;
                }
                Err(ShellError::InputClosed) => {
                    info!("Shell exiting (input closed)");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Show the menu and handle one command
    async fn step(&mut self) -> Result<Flow, ShellError> {
        for line in main_menu() {
            self.prompter.say(&line).await?;
        }
        let input = self.prompter.ask("Select option: ").await?;

        match MenuCommand::parse(&input) {
            Some(MenuCommand::Add) => self.add_animal().await?,
            Some(MenuCommand::List) => self.list_animals().await?,
            Some(MenuCommand::Find) => self.find_animal().await?,
            Some(MenuCommand::Exit) => return Ok(Flow::Exit),
            None => {
                debug!("Unknown command {:?}", input);
                self.prompter.say(UNKNOWN_COMMAND).await?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn add_animal(&mut self) -> Result<(), ShellError> {
        for line in kind_menu() {
            self.prompter.say(&line).await?;
        }
        let selector = self.prompter.ask("Type: ").await?;
        let kind = match AnimalKind::from_selector(&selector) {
            Ok(kind) => kind,
            Err(e) => {
                debug!("{}", e);
                self.prompter.say(UNKNOWN_KIND).await?;
                return Ok(());
            }
        };

        let traits = self.read_traits().await?;
        let variant = self.read_variant(kind).await?;

        match tools::add_animal(&mut *self.storage, AddAnimalParams { traits, variant }) {
            Ok(response) => self.prompter.say(&response.message).await?,
            Err(e) => {
                warn!("Rejected animal: {}", e);
                self.prompter.say(&e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn read_traits(&mut self) -> Result<Traits, ShellError> {
        let p = &mut self.prompter;
        Ok(Traits {
            name: p.read_text("Name: ").await?,
            age: p.read_count("Age: ").await?,
            habitat: p.read_text("Habitat: ").await?,
            diet: p.read_text("Diet type: ").await?,
            color: p.read_text("Color: ").await?,
            weight: p.read_measure("Weight (kg): ").await?,
        })
    }

    async fn read_variant(&mut self, kind: AnimalKind) -> Result<Variant, ShellError> {
        let p = &mut self.prompter;
        let variant = match kind {
            AnimalKind::Mammal => Variant::Mammal {
                has_fur: p.read_flag("Has fur (yes/no): ").await?,
            },
            AnimalKind::Bird => Variant::Bird {
                wingspan: p.read_measure("Wingspan (m): ").await?,
            },
            AnimalKind::Fish => Variant::Fish {
                water_type: p.read_text("Water type (fresh/salt): ").await?,
            },
            AnimalKind::Reptile => Variant::Reptile {
                is_venomous: p.read_flag("Venomous (yes/no): ").await?,
            },
            AnimalKind::Amphibian => Variant::Amphibian {
                skin_moisture: p.read_text("Skin moisture: ").await?,
            },
        };
        Ok(variant)
    }

    async fn list_animals(&mut self) -> Result<(), ShellError> {
        let response = tools::list_animals(&*self.storage);
        for line in response.lines() {
            self.prompter.say(&line).await?;
        }
        Ok(())
    }

    async fn find_animal(&mut self) -> Result<(), ShellError> {
        let name = self.prompter.ask("Enter name: ").await?;
        let response = tools::find_animal(&*self.storage, FindAnimalParams { name });
        self.prompter.say(response.line()).await
    }
}
