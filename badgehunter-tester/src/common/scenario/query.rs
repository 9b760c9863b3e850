use std::collections::BTreeSet;

use anyhow::Result;
use badgehunter_core::{
    Badge, Catalog, CatalogQuery, CollectionStore, MemoryStorage, OwnershipFilter, SortKey,
    catalog, query,
};
use rand::seq::{IteratorRandom, SliceRandom};
use rand_chacha::ChaCha8Rng;

fn ids<'a>(badges: impl IntoIterator<Item = &'a &'a Badge>) -> Vec<&'a str> {
    badges.into_iter().map(|b| b.id.as_str()).collect()
}

/// Mark a random set owned; the owned filter returns exactly that set.
pub fn owned_filter(rng: &mut ChaCha8Rng) -> Result<()> {
    let catalog = catalog();
    let mut store = CollectionStore::load(MemoryStorage::new(), None);
    let amount = (1..=catalog.len()).choose(rng).unwrap_or(1);
    let marked: Vec<&Badge> = catalog.badges().iter().choose_multiple(rng, amount);
    for badge in &marked {
        store.toggle_owned(&badge.id)?;
    }

    let request = CatalogQuery {
        ownership: OwnershipFilter::Owned,
        ..CatalogQuery::default()
    };
    let result = query(catalog, &request, store.owned_ids());
    let found: Vec<&str> = ids(result.active.iter().chain(&result.legacy));

    for badge in &marked {
        anyhow::ensure!(found.contains(&badge.id.as_str()), "{} missing from owned view", badge.id);
    }
    for id in &found {
        anyhow::ensure!(store.is_owned(id), "{id} shown as owned but is not");
    }

    let unowned = query(
        catalog,
        &CatalogQuery {
            ownership: OwnershipFilter::Unowned,
            ..CatalogQuery::default()
        },
        store.owned_ids(),
    );
    anyhow::ensure!(
        unowned.len() + found.len() == catalog.len(),
        "owned and unowned views should partition the catalog"
    );
    Ok(())
}

/// Rarity sort orders Pull Shark, Galaxy Brain, Starstruck as
/// Common, Uncommon, Legendary regardless of how the catalog is shuffled.
pub fn rarity_sort(rng: &mut ChaCha8Rng) -> Result<()> {
    let mut badges = catalog().badges().to_vec();
    badges.shuffle(rng);
    let shuffled = Catalog::from_json(&serde_json::to_string(&badges)?)?;

    let request = CatalogQuery {
        sort: SortKey::Rarity,
        ..CatalogQuery::default()
    };
    let result = query(&shuffled, &request, &BTreeSet::new());
    let ranks: Vec<u8> = result.active.iter().map(|b| b.rarity.rank()).collect();
    anyhow::ensure!(
        ranks.windows(2).all(|w| w[0] <= w[1]),
        "active badges not in rarity order: {ranks:?}"
    );

    let picked = ["starstruck", "pull-shark", "galaxy-brain"];
    let ordered: Vec<&str> = ids(&result.active)
        .into_iter()
        .filter(|id| picked.contains(id))
        .collect();
    anyhow::ensure!(
        ordered == ["pull-shark", "galaxy-brain", "starstruck"],
        "rarity order was {ordered:?}"
    );
    Ok(())
}
