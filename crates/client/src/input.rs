//! Line command grammar for the interactive session.

use kit_core::SlotRef;

/// One user gesture, parsed from a line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List catalog categories.
    Categories,
    /// Browse items, optionally restricted to a category.
    List { category: Option<String> },
    /// Search browsable items by id/name substring.
    Search { term: String },
    /// Select a catalog item for click-to-place.
    Select { item_id: String },
    /// Place the selected item into a slot.
    Place { slot: SlotRef },
    /// Move an item from one slot to another.
    Move { source: SlotRef, dest: SlotRef },
    /// Set the stack size of an occupied slot.
    Quantity { slot: SlotRef, quantity: u32 },
    /// Empty a slot.
    Remove { slot: SlotRef },
    /// Empty every slot and reset the kit name.
    ClearAll,
    /// Set the kit name used in generated commands.
    Name { kit_name: String },
    /// Show current slot occupancy.
    Show,
    /// Print the provisioning commands.
    Commands,
    /// Print the base64 install code.
    Install,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let slot = |usage: &'static str| -> Result<SlotRef, ParseError> {
        rest.parse().map_err(|_| ParseError::Usage(usage))
    };

    match verb {
        "" => Err(ParseError::Empty),
        "categories" | "cats" => Ok(Command::Categories),
        "list" => Ok(Command::List {
            category: (!rest.is_empty()).then(|| rest.to_owned()),
        }),
        "search" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("search <term>"));
            }
            Ok(Command::Search {
                term: rest.to_owned(),
            })
        }
        "select" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("select <item-id>"));
            }
            Ok(Command::Select {
                item_id: rest.to_owned(),
            })
        }
        "place" => Ok(Command::Place {
            slot: slot("place <wear|hotbar|main> <index>")?,
        }),
        "move" => {
            const USAGE: &str = "move <kind> <index> <kind> <index>";
            let tokens: Vec<&str> = rest.split_whitespace().collect();
            if tokens.len() != 4 {
                return Err(ParseError::Usage(USAGE));
            }
            let source = tokens[..2].join(" ").parse().map_err(|_| ParseError::Usage(USAGE))?;
            let dest = tokens[2..].join(" ").parse().map_err(|_| ParseError::Usage(USAGE))?;
            Ok(Command::Move { source, dest })
        }
        "qty" | "quantity" => {
            const USAGE: &str = "qty <kind> <index> <amount>";
            let tokens: Vec<&str> = rest.split_whitespace().collect();
            if tokens.len() != 3 {
                return Err(ParseError::Usage(USAGE));
            }
            let slot = tokens[..2].join(" ").parse().map_err(|_| ParseError::Usage(USAGE))?;
            let quantity = tokens[2].parse().map_err(|_| ParseError::Usage(USAGE))?;
            Ok(Command::Quantity { slot, quantity })
        }
        "remove" | "rm" => Ok(Command::Remove {
            slot: slot("remove <wear|hotbar|main> <index>")?,
        }),
        "clear" => Ok(Command::ClearAll),
        "name" => Ok(Command::Name {
            kit_name: rest.to_owned(),
        }),
        "show" => Ok(Command::Show),
        "commands" => Ok(Command::Commands),
        "install" => Ok(Command::Install),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_owned())),
    }
}

pub const HELP: &str = "\
categories            list catalog categories
list [category]       browse items
search <term>         find items by id or name
select <item-id>      pick an item to place
place <slot>          place the selected item (e.g. `place wear 0`)
move <slot> <slot>    move an item between slots
qty <slot> <amount>   set stack size (hotbar/main only)
remove <slot>         empty a slot
clear                 empty everything
name <kit-name>       set the kit name
show                  show slot occupancy
commands              print provisioning commands
install               print base64 install code
quit                  leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slot_commands() {
        assert_eq!(
            parse("place wear 0"),
            Ok(Command::Place {
                slot: SlotRef::wear(0)
            })
        );
        assert_eq!(
            parse("  qty main 3 25 "),
            Ok(Command::Quantity {
                slot: SlotRef::main(3),
                quantity: 25
            })
        );
        assert_eq!(
            parse("move wear 0 main 3"),
            Ok(Command::Move {
                source: SlotRef::wear(0),
                dest: SlotRef::main(3)
            })
        );
    }

    #[test]
    fn reports_usage_for_malformed_input() {
        assert!(matches!(parse("place backpack 0"), Err(ParseError::Usage(_))));
        assert!(matches!(parse("qty main three 2"), Err(ParseError::Usage(_))));
        assert!(matches!(parse("frobnicate"), Err(ParseError::Unknown(_))));
        assert_eq!(parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn item_ids_keep_their_spelling() {
        assert_eq!(
            parse("select Rifle.AK"),
            Ok(Command::Select {
                item_id: "Rifle.AK".to_owned()
            })
        );
    }
}
