use crate::*;
use record::Record;
use std::cmp::Ordering;

// -------------------- sort_key --------------------

#[test]
fn key_starts_after_second_space() {
    assert_eq!(sort_key(b"Doe John Smith"), Some(b"Smith".as_slice()));
    assert_eq!(sort_key(b"Doe John Smith Jr"), Some(b"Smith Jr".as_slice()));
}

#[test]
fn fewer_than_two_spaces_has_no_key() {
    assert_eq!(sort_key(b"OnlyOneToken"), None);
    assert_eq!(sort_key(b"Two Tokens"), None);
    assert_eq!(sort_key(b""), None);
}

#[test]
fn trailing_second_space_gives_empty_key() {
    assert_eq!(sort_key(b"Doe John "), Some(b"".as_slice()));
}

#[test]
fn consecutive_spaces_each_count() {
    assert_eq!(sort_key(b"a  b"), Some(b"b".as_slice()));
    assert_eq!(sort_key(b"  Smith"), Some(b"Smith".as_slice()));
}

#[test]
fn record_key_reads_missing_as_empty() {
    let r = Record::new("A", "OnlyOneToken", "P", 1, 1).unwrap();
    assert_eq!(record_key(&r), b"");
    assert_eq!(record_key(&Record::default()), b"");

    let r = Record::new("A", "Park Kim Brown", "P", 1, 1).unwrap();
    assert_eq!(record_key(&r), b"Brown");
}

// -------------------- compare_keys --------------------

#[test]
fn empty_key_sorts_first() {
    assert_eq!(compare_keys(b"", b"a"), Ordering::Less);
    assert_eq!(compare_keys(b"", b""), Ordering::Equal);
}

#[test]
fn comparison_ignores_ascii_case_first() {
    assert_eq!(compare_keys(b"apple", b"Banana"), Ordering::Less);
    assert_eq!(compare_keys(b"Smith", b"smithson"), Ordering::Less);
}

#[test]
fn differs_from_raw_byte_order_on_mixed_case() {
    assert_eq!(b"Zed".as_slice().cmp(b"abe".as_slice()), Ordering::Less);
    assert_eq!(compare_keys(b"Zed", b"abe"), Ordering::Greater);
}

#[test]
fn raw_bytes_break_case_ties() {
    assert_eq!(compare_keys(b"Smith", b"smith"), Ordering::Less);
    assert_eq!(compare_keys(b"smith", b"Smith"), Ordering::Greater);
}

#[test]
fn prefix_is_less_than_extension() {
    assert_eq!(compare_keys(b"Smith", b"Smithson"), Ordering::Less);
}

#[test]
fn high_bytes_order_after_ascii() {
    // cp866 Cyrillic letters are 0x80 and above
    assert_eq!(compare_keys(b"Zed", &[0x8F, 0xA5]), Ordering::Less);
}

// -------------------- PrefixKey --------------------

#[test]
fn prefix_truncates_and_lowercases() {
    assert_eq!(PrefixKey::of(b"SMIthson").as_bytes(), b"smi");
    assert_eq!(PrefixKey::of(b"Ab").as_bytes(), b"ab");
    assert_eq!(PrefixKey::of(b"").as_bytes(), b"");
}

#[test]
fn short_prefix_does_not_equal_longer_one() {
    assert_ne!(PrefixKey::of(b"ab"), PrefixKey::of(b"abc"));
    assert!(PrefixKey::of(b"ab") < PrefixKey::of(b"abc"));
}

#[test]
fn prefix_order_is_byte_order() {
    assert!(PrefixKey::of(b"") < PrefixKey::of(b"a"));
    assert!(PrefixKey::of(b"Bro") < PrefixKey::of(b"smi"));
    assert_eq!(PrefixKey::of(b"SMI"), PrefixKey::of(b"smiTH"));
}

#[test]
fn prefix_is_monotone_under_key_order() {
    let keys: [&[u8]; 7] = [b"", b"A", b"ab", b"ABc", b"abcd", b"b", b"Smith"];
    for a in keys {
        for b in keys {
            if compare_keys(a, b) != Ordering::Greater {
                assert!(PrefixKey::of(a) <= PrefixKey::of(b), "{a:?} vs {b:?}");
            }
        }
    }
}
