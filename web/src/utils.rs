use std::hash::{DefaultHasher, Hash, Hasher};

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Turns a user supplied `--seed` into a sampler seed, numbers are taken as is and any other text is hashed.
pub(crate) fn seed_from_text(text: &str) -> u64 {
    text.trim().parse().unwrap_or_else(|_| {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    })
}

/// Renders clue markup as a browser would show it: tags dropped, entities decoded, whitespace collapsed.
pub(crate) fn plain_text(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        match c {
            '<' if rest[1..].starts_with(|next: char| next.is_ascii_alphabetic() || next == '/') => {
                match rest.find('>') {
                    Some(end) => rest = &rest[end + 1..],
                    None => {
                        text.push_str(rest);
                        rest = "";
                    }
                }
            }
            '&' => match entity_at(rest) {
                Some((decoded, len)) => {
                    text.push(decoded);
                    rest = &rest[len..];
                }
                None => {
                    text.push('&');
                    rest = &rest[1..];
                }
            },
            c => {
                text.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decodes the entity `rest` starts with, returning the character and the entity's byte length.
fn entity_at(rest: &str) -> Option<(char, usize)> {
    let end = rest
        .char_indices()
        .take(12)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;

    let decoded = match &rest[1..end] {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        name => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seeds_are_used_verbatim() {
        assert_eq!(seed_from_text("42"), 42);
        assert_eq!(seed_from_text(" 7 "), 7);
    }

    #[test]
    fn text_seeds_are_stable() {
        assert_eq!(seed_from_text("potent potables"), seed_from_text("potent potables"));
        assert_ne!(seed_from_text("potent potables"), seed_from_text("before & after"));
    }

    #[test]
    fn plain_text_strips_tags_and_decodes_entities() {
        assert_eq!(plain_text("<i>Hamlet</i> &amp; <b>Macbeth</b>"), "Hamlet & Macbeth");
        assert_eq!(plain_text("&#39;tis &quot;nobler&quot; &#x2014; Bard"), "'tis \"nobler\" \u{2014} Bard");
        assert_eq!(plain_text("a  <br />\n b"), "a b");
    }

    #[test]
    fn plain_text_keeps_stray_symbols() {
        assert_eq!(plain_text("2 < 3 & 4 > 1"), "2 < 3 & 4 > 1");
        assert_eq!(plain_text("AT&T; R&D"), "AT&T; R&D");
        assert_eq!(plain_text("<unterminated"), "<unterminated");
    }
}
