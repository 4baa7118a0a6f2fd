//! Read-only queries over the tennis store.
//!
//! Every operation takes the connection it runs on, resolves its inputs
//! first and then aggregates, returning a single typed error on failure.

pub mod draw;
pub mod head_to_head;
pub mod match_stats;
pub mod record;
pub mod resolver;
pub mod surface;

pub use draw::{tournament_draw, DrawEntry};
pub use head_to_head::{head_to_head, HeadToHeadMatch};
pub use match_stats::{match_stats, PlayerMatchStats};
pub use record::{player_record, PlayerRecord};
pub use resolver::{resolve_player_id, PlayerRef};
pub use surface::{surface_breakdown, SurfaceRecord};
