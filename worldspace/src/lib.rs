/*!
# Worldspace

Spatial partitioning for MMO world simulation servers.

A dynamic quadtree indexes world entities by their X/Y position so the
simulation can answer range queries ("every hostile creature within 40
yards") without scanning the whole map. Leaves split when they overflow
and merge back when their subtree empties out.

## Architecture

- **SpacePartition**: Index trait (add, remove, update, range queries)
- **DynamicQuadTree**: Arena-backed quadtree implementing it
- **WorldEntity**: What the index needs from an entity (identity, position, mailbox)
- **World**: Named partition registry and logging configuration

Entities never get written to by the index: the leaf that holds them is
posted to their mailbox and applied on their own tick.
*/

// Internal modules
mod error;
mod world;
pub mod log;
pub mod geometry;
pub mod entity;
pub mod partition;

// Main worldspace namespace module
pub mod worldspace {
    // Error types
    pub use crate::error::{Error, Result};

    // World singleton
    pub use crate::world::World;

    // Index trait
    pub use crate::partition::SpacePartition;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Entity sub-module
    pub mod entity {
        pub use crate::entity::*;
    }

    // Partition sub-module
    pub mod partition {
        pub use crate::partition::*;
    }
}

// Re-export math library at crate root
pub use glam;
