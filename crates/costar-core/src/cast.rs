//! Top-billed co-star selection.

use std::collections::HashSet;

use crate::types::{CastMember, PersonId};

/// The first `limit` cast members, in billing order, whose id is not excluded.
///
/// The source order is trusted as billing order; nothing is re-sorted.
pub fn limit_cast<I>(cast: I, exclude: &HashSet<PersonId>, limit: usize) -> Vec<CastMember>
where
    I: IntoIterator<Item = CastMember>,
{
    cast.into_iter()
        .filter(|member| !exclude.contains(&member.id))
        .take(limit)
        .collect()
}
