use clap::Subcommand;
use contextual_core::MemoryStore;
use uuid::Uuid;

use super::print_json;

#[derive(Subcommand)]
pub enum MemoryAction {
    /// Print the current snapshot as JSON
    Show,
    /// Like a drop
    Like {
        /// Drop id (UUID)
        drop_id: Uuid,
    },
    /// Ignore a drop
    Ignore {
        /// Drop id (UUID)
        drop_id: Uuid,
    },
    /// Clear any reaction for a drop
    Clear {
        /// Drop id (UUID)
        drop_id: Uuid,
    },
    /// Record a granted permission token
    GrantToken {
        /// Token value (e.g. arrival)
        token: String,
    },
    /// Print a one-line summary
    Summary,
}

pub fn run(action: MemoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MemoryStore::open()?;
    match action {
        MemoryAction::Show => print_json(&store.snapshot()),
        MemoryAction::Like { drop_id } => {
            store.like(drop_id)?;
            println!("liked {drop_id}");
            Ok(())
        }
        MemoryAction::Ignore { drop_id } => {
            store.ignore(drop_id)?;
            println!("ignored {drop_id}");
            Ok(())
        }
        MemoryAction::Clear { drop_id } => {
            store.clear_reaction(drop_id)?;
            println!("cleared {drop_id}");
            Ok(())
        }
        MemoryAction::GrantToken { token } => {
            store.record_permission_token(&token)?;
            println!("granted token '{token}'");
            Ok(())
        }
        MemoryAction::Summary => {
            println!("{}", store.summary());
            Ok(())
        }
    }
}
