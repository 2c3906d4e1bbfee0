use sha2::{Digest, Sha256};

const PUBLIC_ID_LEN: usize = 10;

/// Hands out sequence numbers for enrolled students, starting at 1.
#[derive(Debug, Default)]
pub struct IdentityAllocator {
    issued: u64,
}

impl IdentityAllocator {
    pub fn next_id(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }
}

/// First ten hex digits of the SHA-256 of the decimal sequence number.
pub fn hash_id(seq: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seq.to_string().as_bytes());
    let mut digest = format!("{:x}", hasher.finalize());
    digest.truncate(PUBLIC_ID_LEN);
    digest
}
