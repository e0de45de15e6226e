//! Cyrillic → Latin transliteration for permlinks and tags.
//!
//! Uses the Golos convention: Cyrillic tags are transliterated and marked
//! with a `ru--` prefix so front-ends can restore the original spelling.

const CYRILLIC_TAG_PREFIX: &str = "ru--";

fn transliterate_char(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "ij",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "cz",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "shch",
        'ъ' => "xx",
        'ы' => "y",
        'ь' => "x",
        'э' => "ye",
        'ю' => "yu",
        'я' => "ya",
        'ґ' => "g",
        'є' => "ye",
        'і' => "i",
        'ї' => "yi",
        _ => return None,
    };
    Some(latin)
}

fn has_cyrillic(s: &str) -> bool {
    s.chars().any(|c| transliterate_char(c).is_some())
}

/// Turns free text into a permlink: lowercase ASCII letters and digits,
/// with every other run of characters collapsed to one `-`.
pub fn encode_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if let Some(latin) = transliterate_char(c) {
            out.push_str(latin);
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

pub fn encode_tag(tag: &str) -> String {
    let lower = tag.trim().to_lowercase();
    let mut out = String::with_capacity(lower.len());
    for c in lower.chars() {
        if let Some(latin) = transliterate_char(c) {
            out.push_str(latin);
        } else if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
        } else if c.is_whitespace() || c == '_' {
            out.push('-');
        }
    }
    if has_cyrillic(&lower) {
        format!("{CYRILLIC_TAG_PREFIX}{out}")
    } else {
        out
    }
}

pub fn encode_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    tags.iter().map(|tag| encode_tag(tag.as_ref())).collect()
}
