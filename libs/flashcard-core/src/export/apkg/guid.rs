//! Note identity helpers: stable GUIDs and sort-field checksums.

use sha1::Sha1;
use sha2::{Digest, Sha256};

const BASE91_TABLE: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~";

/// GUID derived from a note's field values.
///
/// Re-exporting the same card yields the same GUID, which lets Anki update
/// the existing note instead of importing a duplicate.
pub fn guid_for(fields: &[&str]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(fields.join("__").as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    base91(u64::from_be_bytes(prefix))
}

fn base91(mut value: u64) -> String {
    let base = BASE91_TABLE.len() as u64;
    let mut out = Vec::new();
    while value > 0 {
        out.push(BASE91_TABLE[(value % base) as usize]);
        value /= base;
    }
    if out.is_empty() {
        out.push(BASE91_TABLE[0]);
    }
    out.reverse();
    // The table is ASCII.
    out.into_iter().map(char::from).collect()
}

/// Duplicate-detection checksum Anki stores in `notes.csum`: the first
/// 32 bits of the SHA-1 of the sort field.
pub fn field_checksum(sort_field: &str) -> i64 {
    let digest = Sha1::digest(sort_field.as_bytes());
    i64::from(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_is_stable_for_same_fields() {
        assert_eq!(guid_for(&["Q", "A"]), guid_for(&["Q", "A"]));
        assert_ne!(guid_for(&["Q", "A"]), guid_for(&["Q", "B"]));
    }

    #[test]
    fn guid_uses_base91_alphabet() {
        let guid = guid_for(&["What is Rust?", "A language"]);
        assert!(!guid.is_empty());
        assert!(guid.bytes().all(|b| BASE91_TABLE.contains(&b)));
    }

    #[test]
    fn base91_encodes_small_values() {
        assert_eq!(base91(0), "a");
        assert_eq!(base91(1), "b");
        assert_eq!(base91(91), "ba");
    }

    #[test]
    fn checksum_matches_sha1_prefix() {
        // sha1("abc") = a9993e36...
        assert_eq!(field_checksum("abc"), 0xa9993e36);
    }
}
