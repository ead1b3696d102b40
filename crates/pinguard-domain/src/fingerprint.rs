use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a dependency finding.
///
/// Identity fields, in order:
/// - check_id
/// - code
/// - group id (absent is distinct from empty)
/// - artifact id
/// - offending version
///
/// Each field is framed as a presence byte, then its length as a little-endian
/// `u64`, then its bytes, so no field content can move a boundary.
pub fn fingerprint_for_dep(
    check_id: &str,
    code: &str,
    group_id: Option<&str>,
    artifact_id: &str,
    version: &str,
) -> String {
    let mut hasher = Sha256::new();
    for field in [
        Some(check_id),
        Some(code),
        group_id,
        Some(artifact_id),
        Some(version),
    ] {
        match field {
            Some(value) => {
                hasher.update([1u8]);
                hasher.update((value.len() as u64).to_le_bytes());
                hasher.update(value.as_bytes());
            }
            None => hasher.update([0u8]),
        }
    }
    hex::encode(hasher.finalize())
}
