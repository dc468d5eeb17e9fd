/// Count syllables in a single word using a vowel-group heuristic:
/// contiguous runs of a/e/i/o/u/y count once, a silent trailing "e" is
/// subtracted unless the word ends in consonant + "le", and every word
/// counts at least one syllable. Non-alphabetic characters (digits, units,
/// punctuation) are ignored.
pub fn count_syllables(word: &str) -> usize {
    let normalized: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();

    if normalized.is_empty() {
        return 1;
    }

    let chars: Vec<char> = normalized.chars().collect();
    let mut count = 0;
    let mut prev_vowel = false;

    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    // Silent trailing "e": "take" is one syllable, but "little" keeps two.
    let len = chars.len();
    if len >= 2 && chars[len - 1] == 'e' && !is_vowel(chars[len - 2]) {
        let ends_in_le = len >= 3 && chars[len - 2] == 'l' && !is_vowel(chars[len - 3]);
        if !ends_in_le && count > 1 {
            count -= 1;
        }
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
