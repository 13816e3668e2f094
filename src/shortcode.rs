/// Length of every generated short code, in hex characters.
pub const SHORT_CODE_LEN: usize = 8;

/// Derive the short code for `input`: the first eight lowercase hex
/// characters of its MD5 digest.
///
/// The same input always yields the same code. Eight hex characters is only
/// 32 bits, so distinct inputs can and eventually will collide; the store
/// overwrites on conflict rather than detecting it.
pub fn generate(input: &str) -> String {
    let digest = md5::compute(input.as_bytes());
    let mut hash = format!("{:x}", digest);
    hash.truncate(SHORT_CODE_LEN);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_eight_lowercase_hex_chars() {
        for input in ["http://example.com", "", "not a url at all", "ünïcødé"] {
            let code = generate(input);
            assert_eq!(code.len(), SHORT_CODE_LEN);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn is_deterministic() {
        let url = "https://www.rust-lang.org/learn";
        assert_eq!(generate(url), generate(url));
    }

    #[test]
    fn matches_md5_prefix() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(generate(""), "d41d8cd9");
        // md5("http://example.com") = a9b9f04336ce0181a08e774e01113b31
        assert_eq!(generate("http://example.com"), "a9b9f043");
    }

    #[test]
    fn different_inputs_usually_differ() {
        assert_ne!(
            generate("http://example.com"),
            generate("http://example.org")
        );
    }
}
