use crate::fragment::Fragments;

pub struct Substitution {
    pub text: Vec<u8>,
    pub replaced: bool,
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Replace the first occurrence of `old` in `text` with `new`. Later
/// occurrences are left alone; no match returns the text unchanged. Bytes
/// outside the match are copied as-is, whatever their encoding.
pub fn replace_first(text: &[u8], old: &[u8], new: &[u8]) -> Vec<u8> {
    match find(text, old) {
        Some(at) => {
            let mut out = Vec::with_capacity(text.len() - old.len() + new.len());
            out.extend_from_slice(&text[..at]);
            out.extend_from_slice(new);
            out.extend_from_slice(&text[at + old.len()..]);
            out
        }
        None => text.to_vec(),
    }
}

pub fn substitute(text: &[u8], fragments: &Fragments) -> Substitution {
    let old = fragments.old.as_bytes();
    Substitution {
        replaced: find(text, old).is_some(),
        text: replace_first(text, old, fragments.new.as_bytes()),
    }
}
