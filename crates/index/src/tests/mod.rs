mod key_tests;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use record::Record;
use store::RecordStore;

/// Builds a store with one record per title, in the given order.
pub(crate) fn store_of(titles: &[&str]) -> RecordStore {
    RecordStore::from_records(
        titles
            .iter()
            .map(|t| Record::new("Author", t, "Publisher", 2000, 100).unwrap())
            .collect(),
    )
}

/// Titles drawn from a tiny alphabet so keys share prefixes, collide and
/// differ only by case. Roughly one in ten has no key at all.
pub(crate) fn random_store(seed: u64, n: usize) -> RecordStore {
    const ALPHABET: &[u8] = b"abAB c";
    let mut rng = StdRng::seed_from_u64(seed);

    let records = (0..n)
        .map(|i| {
            let title = if rng.random_bool(0.1) {
                format!("Single{i}")
            } else {
                let len = rng.random_range(0..8);
                let key: String = (0..len)
                    .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
                    .collect();
                format!("Fn Ln {key}")
            };
            Record::new("Author", &title, "Publisher", 2000, 100).unwrap()
        })
        .collect();

    RecordStore::from_records(records)
}

/// Keys of `ids` rendered as strings, for readable assertions.
pub(crate) fn keys_of(store: &RecordStore, ids: &[store::RecordId]) -> Vec<String> {
    ids.iter()
        .map(|&id| String::from_utf8_lossy(crate::record_key(store.get(id))).into_owned())
        .collect()
}
