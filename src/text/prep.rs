/// Normalise one line of input text before it is split into words.
///
/// - `-` becomes a space, so hyphenated words split
/// - every other ASCII punctuation character is dropped
/// - the result is lower-cased
pub fn string_prep(line: &str) -> String {
    line.chars()
        .filter_map(|c| match c {
            '-' => Some(' '),
            c if c.is_ascii_punctuation() => None,
            c => Some(c),
        })
        .collect::<String>()
        .to_lowercase()
}

/// Words of an already prepared line.
pub fn words(prepared: &str) -> impl Iterator<Item = &str> {
    prepared.split_whitespace()
}

/// `12`, `3.14`. At most one decimal point, at least one digit.
pub fn is_number(word: &str) -> bool {
    let mut digits = 0;
    let mut points = 0;

    for c in word.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    digits > 0 && points <= 1
}
