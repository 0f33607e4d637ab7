use serde::{Deserialize, Serialize};

/// A word of the vocabulary table.
///
/// Entries are defined once at compile time and never mutated. The
/// `illustration` is a filename inside the public image bucket, resolved to a
/// URL with [`crate::images::ImageStore::public_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    pub text: &'static str,
    pub category: Category,
    pub gender: Option<Gender>,
    pub illustration: Option<&'static str>,
}

impl VocabularyEntry {
    pub const fn noun(text: &'static str, gender: Gender) -> Self {
        Self {
            text,
            category: Category::Noun,
            gender: Some(gender),
            illustration: None,
        }
    }

    pub const fn illustrated(
        text: &'static str,
        gender: Gender,
        illustration: &'static str,
    ) -> Self {
        Self {
            text,
            category: Category::Noun,
            gender: Some(gender),
            illustration: Some(illustration),
        }
    }

    pub const fn verb(text: &'static str) -> Self {
        Self::plain(text, Category::Verb)
    }

    pub const fn adjective(text: &'static str) -> Self {
        Self::plain(text, Category::Adjective)
    }

    pub const fn adverb(text: &'static str) -> Self {
        Self::plain(text, Category::Adverb)
    }

    const fn plain(text: &'static str, category: Category) -> Self {
        Self {
            text,
            category,
            gender: None,
            illustration: None,
        }
    }

    pub fn is_noun(&self) -> bool {
        self.category == Category::Noun
    }
}

/// Grammatical category of a vocabulary entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }
}

/// Grammatical gender, only meaningful for nouns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// French label used when describing the word to the language model.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Masculine => "masculin",
            Self::Feminine => "féminin",
        }
    }
}

/// A vocabulary entry as listed by the API, with its rendered form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub text: String,
    pub display: String,
    pub category: Category,
    pub gender: Option<Gender>,
    pub illustration_url: Option<String>,
}
