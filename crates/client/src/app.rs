//! Interactive session state and command dispatch.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use kit_content::CatalogIndex;
use kit_core::{
    CatalogOracle, KitEngine, KitEnv, LoadoutState, PlaceAction, RuleSet, SlotRef,
    serialize_commands,
};

use crate::input::{self, Command, ParseError};
use crate::presentation;

/// Item currently picked for click-to-place.
#[derive(Clone, Debug)]
struct Selection {
    item_id: String,
    item_name: String,
}

/// Owns everything a session needs: the loadout state, the rule set, the
/// catalog index, the transient selection, and the kit name. All mutation
/// of `state` goes through [`KitEngine`].
pub struct App {
    catalog: CatalogIndex,
    rules: RuleSet,
    state: LoadoutState,
    selection: Option<Selection>,
    kit_name: String,
}

/// Result of handling one command.
enum Outcome {
    Continue,
    Quit,
}

impl App {
    pub fn new(catalog: CatalogIndex, kit_name: String) -> Self {
        Self {
            catalog,
            rules: RuleSet::default(),
            state: LoadoutState::default(),
            selection: None,
            kit_name,
        }
    }

    /// Reads commands from stdin until quit or end of input.
    pub fn run(mut self) -> Result<()> {
        println!("loadout kit builder - type `help` for commands");
        if self.catalog.is_empty() {
            println!("note: catalog is empty; only rule-data items are wearable");
        }

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            match input::parse(&line) {
                Ok(command) => {
                    if matches!(self.handle(command), Outcome::Quit) {
                        break;
                    }
                }
                Err(ParseError::Empty) => {}
                Err(error) => println!("{error}"),
            }
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Categories => {
                let categories = self.catalog.categories();
                if categories.is_empty() {
                    println!("catalog unavailable");
                } else {
                    println!("{}", categories.join("\n"));
                }
            }
            Command::List { category } => {
                self.show_items(&self.catalog.search("", category.as_deref()));
            }
            Command::Search { term } => {
                self.show_items(&self.catalog.search(&term, None));
            }
            Command::Select { item_id } => self.select(item_id),
            Command::Place { slot } => self.place(slot),
            Command::Move { source, dest } => {
                self.commit_place(PlaceAction::from_slot(dest, source));
            }
            Command::Quantity { slot, quantity } => self.set_quantity(slot, quantity),
            Command::Remove { slot } => {
                let env = KitEnv::new(&self.catalog, &self.rules);
                KitEngine::new(&mut self.state).clear(&env, slot);
                self.print_commands();
            }
            Command::ClearAll => {
                let env = KitEnv::new(&self.catalog, &self.rules);
                KitEngine::new(&mut self.state).clear_all(&env);
                self.kit_name.clear();
                println!("cleared");
            }
            Command::Name { kit_name } => {
                self.kit_name = kit_name;
                self.print_commands();
            }
            Command::Show => println!("{}", presentation::render_loadout(&self.state)),
            Command::Commands => self.print_commands(),
            Command::Install => {
                let commands = serialize_commands(&self.kit_name, &self.state);
                println!("{}", presentation::install_code(&commands));
            }
            Command::Help => println!("{}", input::HELP),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Continue
    }

    fn show_items(&self, items: &[&kit_core::ItemDefinition]) {
        if items.is_empty() {
            println!("no items");
            return;
        }
        println!("{}", presentation::render_items(items));
        println!("{} item(s)", items.len());
    }

    fn select(&mut self, item_id: String) {
        match self.catalog.find_item(&item_id) {
            Some(item) => {
                println!(
                    "selected {} ({})  image: {}",
                    item.id,
                    item.name,
                    presentation::image_url(item.image.as_deref())
                );
                self.selection = Some(Selection {
                    item_id: item.id.clone(),
                    item_name: item.name.clone(),
                });
            }
            None => {
                // Unknown ids are still placeable in hotbar/main slots.
                println!("`{item_id}` is not in the catalog; selecting it anyway");
                self.selection = Some(Selection {
                    item_name: item_id.clone(),
                    item_id,
                });
            }
        }
    }

    fn place(&mut self, slot: SlotRef) {
        let Some(selection) = self.selection.take() else {
            println!("no item selected (use `select <item-id>` first)");
            return;
        };
        self.commit_place(PlaceAction::from_palette(
            slot,
            selection.item_id,
            selection.item_name,
        ));
    }

    fn commit_place(&mut self, action: PlaceAction) {
        let env = KitEnv::new(&self.catalog, &self.rules);
        match KitEngine::new(&mut self.state).place(&env, action) {
            Ok(()) => self.print_commands(),
            Err(error) => println!("{}", presentation::rejection_message(&error)),
        }
    }

    fn set_quantity(&mut self, slot: SlotRef, quantity: u32) {
        let env = KitEnv::new(&self.catalog, &self.rules);
        match KitEngine::new(&mut self.state).set_quantity(&env, slot, quantity) {
            Ok(()) => self.print_commands(),
            Err(error) => println!("{}", presentation::rejection_message(&error)),
        }
    }

    /// Refreshes the output surface after a committed mutation.
    fn print_commands(&self) {
        let commands = serialize_commands(&self.kit_name, &self.state);
        if commands.is_empty() {
            println!("(loadout empty)");
        } else {
            println!("{commands}");
        }
    }
}
