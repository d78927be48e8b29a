//! Content hashing for style identifiers.

/// Seed of the djb2 family hash.
const SEED: u32 = 5381;

/// Hash a string the way the identifier scheme requires.
///
/// Folds UTF-16 code units from last to first as `h = (h * 33) ^ unit`
/// in wrapping 32-bit arithmetic.
pub fn string_hash(input: &str) -> u32 {
    let units: Vec<u16> = input.encode_utf16().collect();
    units
        .iter()
        .rev()
        .fold(SEED, |h, &unit| h.wrapping_mul(33) ^ u32::from(unit))
}

/// Lowercase base-36 rendering of `value`.
pub fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut buf = [0u8; 7];
    let mut pos = buf.len();
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(value % 36) as usize];
        value /= 36;
        if value == 0 {
            break;
        }
    }
    buf[pos..].iter().map(|&b| char::from(b)).collect()
}

/// Identifier text for a style fingerprint: `f` followed by the base-36 hash.
pub fn hash_identifier(pid: &str) -> String {
    let mut id = String::with_capacity(8);
    id.push('f');
    id.push_str(&to_base36(string_hash(pid)));
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_edges() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u32::MAX), "1z141z3");
    }

    #[test]
    fn empty_string_hashes_to_seed() {
        assert_eq!(string_hash(""), SEED);
    }

    #[test]
    fn known_fingerprints() {
        assert_eq!(hash_identifier("background-color:black;color:white"), "f6e2hlp");
        assert_eq!(
            hash_identifier("animation-duration:1s;animation-name:custom-name-here"),
            "fgiup2j"
        );
        assert_eq!(hash_identifier("|.foo#color:blue"), "ffqhmej");
    }

    #[test]
    fn hash_is_order_sensitive() {
        assert_ne!(string_hash("ab"), string_hash("ba"));
    }

    #[test]
    fn astral_characters_hash_as_surrogate_pairs() {
        // U+1F600 is the pair D83D DE00.
        let expected = SEED.wrapping_mul(33) ^ 0xDE00;
        let expected = expected.wrapping_mul(33) ^ 0xD83D;
        assert_eq!(string_hash("\u{1F600}"), expected);
    }
}
