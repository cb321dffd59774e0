//! Password generation.
//!
//! Two paths: a uniform random draw over the enabled character classes
//! (with one guaranteed character per enabled class, then a shuffle so the
//! guarantees are not positionally predictable), and a "memorable"
//! template built from the entry title, a word list, digits, and a symbol.
//!
//! Randomness comes from [`rand::thread_rng`], which is a cryptographically
//! secure generator, so the output is suitable for credential material.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::defaults::{GENERATED_LENGTH, GENERATOR_SYMBOLS, MEMORABLE_SYMBOLS};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Word list for the memorable path.
const MEMORABLE_WORDS: &[&str] = &[
    "Ocean", "Mountain", "River", "Forest", "Desert", "Valley", "Storm", "Thunder",
    "Lightning", "Rainbow", "Sunset", "Sunrise", "Galaxy", "Planet", "Comet", "Star",
    "Dragon", "Phoenix", "Eagle", "Wolf", "Tiger", "Lion", "Bear", "Falcon",
    "Crystal", "Diamond", "Ruby", "Emerald", "Sapphire", "Gold", "Silver", "Platinum",
];

/// Options for password generation.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub memorable: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: GENERATED_LENGTH,
            include_numbers: true,
            include_symbols: true,
            memorable: false,
        }
    }
}

/// Generate a fresh password. Never fails.
///
/// `title` seeds the memorable template and is ignored on the random path.
pub fn generate_password(title: &str, options: &GeneratorOptions) -> String {
    if options.memorable {
        return generate_memorable(title, options.length);
    }

    let mut rng = rand::thread_rng();

    let mut charset = String::with_capacity(96);
    charset.push_str(LOWERCASE);
    charset.push_str(UPPERCASE);
    if options.include_numbers {
        charset.push_str(DIGITS);
    }
    if options.include_symbols {
        charset.push_str(GENERATOR_SYMBOLS);
    }
    let charset: Vec<char> = charset.chars().collect();

    // One guaranteed character per enabled class
    let mut password: Vec<char> = Vec::with_capacity(options.length);
    password.push(pick(&mut rng, LOWERCASE));
    password.push(pick(&mut rng, UPPERCASE));
    if options.include_numbers {
        password.push(pick(&mut rng, DIGITS));
    }
    if options.include_symbols {
        password.push(pick(&mut rng, GENERATOR_SYMBOLS));
    }

    while password.len() < options.length {
        password.push(charset[rng.gen_range(0..charset.len())]);
    }

    // Shuffle so the guaranteed characters are not positionally predictable
    password.shuffle(&mut rng);
    password.truncate(options.length);
    password.into_iter().collect()
}

/// Memorable template: title word + list word + number + symbol, padded
/// with digits and truncated to `length`. No class-coverage guarantee
/// beyond what the template supplies.
fn generate_memorable(title: &str, length: usize) -> String {
    let mut rng = rand::thread_rng();

    let title_word: String = title
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    let word = MEMORABLE_WORDS[rng.gen_range(0..MEMORABLE_WORDS.len())];
    let number = rng.gen_range(0..10_000u32);
    let symbol = pick(&mut rng, MEMORABLE_SYMBOLS);

    let mut password = format!("{}{}{}{}", title_word, word, number, symbol);
    while password.chars().count() < length {
        password.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    }
    password.chars().take(length).collect()
}

fn pick(rng: &mut impl Rng, set: &str) -> char {
    let chars: Vec<char> = set.chars().collect();
    chars[rng.gen_range(0..chars.len())]
}
