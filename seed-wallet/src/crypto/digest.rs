//! Hash helpers shared by the codec and the derivation code

use sha2::{Digest, Sha256, Sha512};

/// Full SHA-512 over the concatenation of `parts`
pub fn sha512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// First 32 bytes of SHA-512, the candidate width for scalars
pub fn sha512_half(parts: &[&[u8]]) -> [u8; 32] {
    let digest = sha512(parts);
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

/// First 16 bytes of SHA-512, the width of a seed
pub fn sha512_quarter(parts: &[&[u8]]) -> [u8; 16] {
    let digest = sha512(parts);
    let mut quarter = [0u8; 16];
    quarter.copy_from_slice(&digest[..16]);
    quarter
}

/// First four bytes of SHA-256(SHA-256(data))
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);

    let mut check = [0u8; 4];
    check.copy_from_slice(&second[..4]);
    check
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha512_parts_concatenate() {
        let joined = sha512(&[&b"masterpass"[..], &b"phrase"[..]]);
        let whole = sha512(&[&b"masterpassphrase"[..]]);
        assert_eq!(joined, whole);
    }

    #[test]
    fn test_prefixes_match_full_digest() {
        let full = sha512(&[&b"abc"[..]]);
        assert_eq!(&sha512_half(&[&b"abc"[..]])[..], &full[..32]);
        assert_eq!(&sha512_quarter(&[&b"abc"[..]])[..], &full[..16]);
    }

    #[test]
    fn test_passphrase_quarter() {
        let seed = sha512_quarter(&[&b"masterpassphrase"[..]]);
        assert_eq!(hex::encode_upper(seed), "DEDCE9CE67B451D852FD4E846FCDE31C");
    }

    #[test]
    fn test_checksum_of_empty_input() {
        // SHA256(SHA256("")) = 5df6e0e2...
        assert_eq!(checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);
    }
}
