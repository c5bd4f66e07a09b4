use sha2::{Digest, Sha256};

use crate::index::SubsetSumIndex;

/// Computes the canonical content hash of a catalog.
///
/// Covers the alphabet and every entry in canonical order, so two catalogs
/// hash equal exactly when they hold the same entries for the same alphabet.
pub fn canonical_hash(index: &SubsetSumIndex) -> String {
    let mut hasher = Sha256::new();
    let alphabet = index.alphabet().to_string();
    hasher.update(b"alphabet");
    update_bytes(alphabet.as_bytes(), &mut hasher);

    hasher.update((index.len() as u64).to_le_bytes());
    for entry in index {
        hasher.update(entry.total().to_le_bytes());
        hasher.update(entry.digits().mask().to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

fn update_bytes(bytes: &[u8], hasher: &mut Sha256) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
