//! Placeholder text provider. Produces lorem-style sentences and name-like
//! strings for card metadata. Output is not deterministic unless a caller
//! reseeds first; nothing downstream is allowed to depend on the content.

use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

static RNG: OnceLock<Mutex<SmallRng>> = OnceLock::new();

fn rng() -> &'static Mutex<SmallRng> {
    RNG.get_or_init(|| Mutex::new(SmallRng::from_os_rng()))
}

/// Replaces the generator state with a known seed.
pub fn reseed(seed: u64) {
    *rng().lock() = SmallRng::seed_from_u64(seed);
}

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex",
    "commodo", "consequat", "duis", "aute", "irure", "reprehenderit", "voluptate", "velit",
    "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat",
    "proident", "sunt", "culpa", "officia", "deserunt", "mollit", "anim", "laborum",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carla", "Dmitri", "Elena", "Farid", "Greta", "Hugo", "Iris", "Jonas",
    "Katya", "Lionel", "Mara", "Nilo", "Olga", "Pavel", "Quinn", "Rosa", "Silas", "Tamsin",
    "Ulrich", "Vera", "Wim", "Yara",
];

const LAST_NAMES: &[&str] = &[
    "Abernathy", "Bergstrom", "Castellano", "Dunmore", "Eriksen", "Falk", "Grimaldi", "Halvorsen",
    "Ibarra", "Jansen", "Kowalczyk", "Laurent", "Moreau", "Novak", "Okonkwo", "Petrov",
    "Quintana", "Rasmussen", "Santoro", "Thibault", "Ueda", "Vance", "Wexler", "Zaleski",
];

const SUFFIXES: &[&str] = &["Jr.", "Sr.", "II", "III", "IV", "V", "MD", "DDS", "PhD"];

fn pick<'a>(rng: &mut SmallRng, list: &'a [&'a str]) -> &'a str {
    list.choose(rng).copied().unwrap_or("")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One sentence of six to twelve lorem words, capitalized and terminated.
pub fn sentence() -> String {
    let mut rng = rng().lock();
    let count = rng.random_range(6..=12);
    let mut words: Vec<&str> = Vec::with_capacity(count);
    for _ in 0..count {
        words.push(pick(&mut rng, WORDS));
    }
    let mut text = capitalize(&words.join(" "));
    text.push('.');
    text
}

/// `n` sentences joined with spaces.
pub fn sentences(n: usize) -> String {
    (0..n).map(|_| sentence()).collect::<Vec<_>>().join(" ")
}

/// A name-like string, surname first.
pub fn full_name() -> String {
    let mut rng = rng().lock();
    format!(
        "{} {}",
        pick(&mut rng, LAST_NAMES),
        pick(&mut rng, FIRST_NAMES)
    )
}

/// A name-like string with a credit suffix, e.g. `"Moreau Iris Jr."`.
pub fn credited_name() -> String {
    let name = full_name();
    let mut rng = rng().lock();
    format!("{} {}", name, pick(&mut rng, SUFFIXES))
}

/// `n` full names joined with `", "`.
pub fn cast_line(n: usize) -> String {
    (0..n).map(|_| full_name()).collect::<Vec<_>>().join(", ")
}

/// The synthetic metadata attached to one card at startup.
#[derive(Debug, Clone)]
pub struct Blurb {
    pub description: String,
    pub cast: String,
    pub creator: String,
}

impl Blurb {
    pub fn generate() -> Self {
        Self {
            description: sentences(3),
            cast: cast_line(3),
            creator: credited_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_is_capitalized_and_terminated() {
        reseed(7);
        let s = sentence();
        assert!(s.chars().next().is_some_and(|c| c.is_uppercase()));
        assert!(s.ends_with('.'));
        assert!(s.split_whitespace().count() >= 6);
    }

    #[test]
    fn sentences_are_multi_sentence() {
        reseed(7);
        let s = sentences(3);
        assert_eq!(s.matches('.').count(), 3);
    }

    #[test]
    fn names_look_like_names() {
        reseed(7);
        let name = full_name();
        let parts: Vec<_> = name.split(' ').collect();
        assert_eq!(parts.len(), 2);
        for part in parts {
            assert!(part.chars().next().is_some_and(|c| c.is_uppercase()));
        }
    }

    #[test]
    fn credited_name_carries_a_suffix() {
        reseed(7);
        let name = credited_name();
        assert_eq!(name.split(' ').count(), 3);
    }

    #[test]
    fn cast_line_joins_names() {
        reseed(7);
        let line = cast_line(3);
        assert_eq!(line.matches(", ").count(), 2);
    }

    #[test]
    fn blurb_fills_every_field() {
        reseed(7);
        let blurb = Blurb::generate();
        assert!(!blurb.description.is_empty());
        assert!(!blurb.cast.is_empty());
        assert!(!blurb.creator.is_empty());
    }
}
