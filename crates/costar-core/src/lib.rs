//! Collaboration graph accumulator for costar.
//!
//! Turns a stream of (movie, cast list, release date) tuples into a
//! deduplicated undirected graph of people, with per-person degree and a
//! "most recent movie" label on every edge.

pub mod cast;
pub mod credit;
pub mod date;
pub mod graph;
pub mod stats;
pub mod types;

pub use cast::limit_cast;
pub use costar_error::{Error, ErrorKind, Result};
pub use credit::{DateRange, filter_credits};
pub use date::{ReleaseDate, is_after};
pub use graph::{CollaborationGraph, EdgeInfo, EdgeKey, EdgeUpdate};
pub use stats::{GraphStats, RankedPerson, max_degree_nodes, top_collaborators, total_edges, total_nodes};
pub use types::{CastMember, MovieCredit, MovieId, PersonId};
