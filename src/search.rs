//! Name filtering for the Pokémon listing.

use crate::models::PokemonRef;

/// Filter listing entries by case-insensitive substring match on name.
///
/// An empty or whitespace-only query matches everything. Relative order
/// of the input is preserved; the filter never reorders.
pub fn filter_by_name(items: &[PokemonRef], query: &str) -> Vec<PokemonRef> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
