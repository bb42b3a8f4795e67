//! Word bank
//!
//! Holds the ordered word list for every category. Lists only ever grow:
//! words are appended, never removed or reordered, and duplicates are kept.

use super::Category;
use std::collections::BTreeMap;

/// Words returned for a category name the bank does not know
pub const FALLBACK_WORDS: [&str; 2] = ["Palabra1", "Palabra2"];

const ANIMALS: [&str; 20] = [
    "Perro", "Gato", "Loro", "Conejo", "Pez", "Hamster", "Tortuga", "Caballo", "Jirafa", "Oso",
    "Cerdo", "Hormiga", "Tigre", "Mosca", "Tiburón", "Águila", "Lagartija", "Serpiente", "León",
    "Elefante",
];

const MOVIES: [&str; 20] = [
    "Titanic",
    "Avatar",
    "Inception",
    "Matrix",
    "Avengers",
    "Joker",
    "Toy Story",
    "El Rey León",
    "Jurassic Park",
    "Harry Potter",
    "El señor de los anillos",
    "Spider-Man",
    "Frozen",
    "Los Minions",
    "Piratas del Caribe",
    "Rápidos y Furiosos",
    "Shrek",
    "Star Wars",
    "It",
    "Misión imposible",
];

const PROFESSIONS: [&str; 20] = [
    "Doctor", "Ingeniero", "Profesor", "Policía", "Bombero", "Piloto", "Chef", "Abogado",
    "Veterinario", "Psicólogo", "Fotógrafo", "Carpintero", "Enfermero", "Actor", "Programador",
    "Mecánico", "Obrero", "Agricultor", "Pescador", "Barbero",
];

/// Category to ordered word list mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: BTreeMap<Category, Vec<String>>,
}

impl Default for WordBank {
    fn default() -> Self {
        let seed = |list: &[&str]| list.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        let mut words = BTreeMap::new();
        words.insert(Category::Animals, seed(&ANIMALS));
        words.insert(Category::Movies, seed(&MOVIES));
        words.insert(Category::Professions, seed(&PROFESSIONS));
        Self { words }
    }
}

impl WordBank {
    /// Create a word bank seeded with the default lists
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a word bank with every category empty
    pub fn empty() -> Self {
        let words = Category::all()
            .into_iter()
            .map(|c| (c, Vec::new()))
            .collect();
        Self { words }
    }

    /// Borrow the current list for a category
    pub fn words(&self, category: Category) -> &[String] {
        self.words.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Snapshot of the current list for a category
    pub fn words_for(&self, category: Category) -> Vec<String> {
        self.words(category).to_vec()
    }

    /// Snapshot looked up by category key, falling back to a fixed
    /// placeholder list for unknown names
    pub fn words_for_name(&self, name: &str) -> Vec<String> {
        match Category::from_key(name) {
            Some(category) => self.words_for(category),
            None => FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Append a word to a category.
    ///
    /// The text is trimmed first; blank input is ignored. Returns the stored
    /// word when something was appended.
    pub fn add_word(&mut self, category: Category, text: &str) -> Option<String> {
        let word = text.trim();
        if word.is_empty() {
            return None;
        }
        self.words
            .entry(category)
            .or_default()
            .push(word.to_string());
        Some(word.to_string())
    }

    /// Number of words per category, for display
    pub fn counts_by_category(&self) -> BTreeMap<Category, usize> {
        Category::all()
            .into_iter()
            .map(|c| (c, self.words(c).len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let bank = WordBank::new();
        let counts = bank.counts_by_category();
        assert_eq!(counts[&Category::Animals], 20);
        assert_eq!(counts[&Category::Movies], 20);
        assert_eq!(counts[&Category::Professions], 20);

        assert_eq!(bank.words(Category::Animals)[0], "Perro");
        assert_eq!(bank.words(Category::Animals)[19], "Elefante");
        assert_eq!(bank.words(Category::Movies)[10], "El señor de los anillos");
        assert_eq!(bank.words(Category::Professions)[19], "Barbero");
    }

    #[test]
    fn test_add_word_trims() {
        let mut bank = WordBank::new();
        assert_eq!(bank.add_word(Category::Animals, " Koala "), Some("Koala".to_string()));
        let animals = bank.words_for(Category::Animals);
        assert_eq!(animals.len(), 21);
        assert_eq!(animals.last().map(String::as_str), Some("Koala"));
    }

    #[test]
    fn test_add_blank_word_is_ignored() {
        let mut bank = WordBank::new();
        assert_eq!(bank.add_word(Category::Animals, "  "), None);
        assert_eq!(bank.add_word(Category::Animals, ""), None);
        assert_eq!(bank.add_word(Category::Animals, "\t\n"), None);
        assert_eq!(bank.words(Category::Animals).len(), 20);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        let mut bank = WordBank::empty();
        bank.add_word(Category::Movies, "Shrek");
        bank.add_word(Category::Movies, "Up");
        bank.add_word(Category::Movies, "Shrek");
        assert_eq!(bank.words_for(Category::Movies), vec!["Shrek", "Up", "Shrek"]);
        assert!(bank.words(Category::Animals).is_empty());
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut bank = WordBank::new();
        let snapshot = bank.words_for(Category::Professions);
        bank.add_word(Category::Professions, "Astronauta");
        assert_eq!(snapshot.len(), 20);
        assert_eq!(bank.words(Category::Professions).len(), 21);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let bank = WordBank::new();
        assert_eq!(bank.words_for_name("Deportes"), vec!["Palabra1", "Palabra2"]);
        assert_eq!(bank.words_for_name("Peliculas").len(), 20);
    }
}
