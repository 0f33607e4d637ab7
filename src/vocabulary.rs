//! The static French vocabulary and the word picker.

use rand::Rng;

use crate::models::{Gender, VocabularyEntry};

use crate::models::Gender::{Feminine as F, Masculine as M};

/// Every word a session can show. Nouns with an illustration match the
/// jobs in [`crate::illustrate::ILLUSTRATIONS`].
pub const VOCABULARY: &[VocabularyEntry] = &[
    // Illustrated masculine nouns
    VocabularyEntry::illustrated("homme", M, "homme.webp"),
    VocabularyEntry::illustrated("enfant", M, "enfant.webp"),
    VocabularyEntry::illustrated("père", M, "pere.webp"),
    VocabularyEntry::illustrated("ami", M, "ami.webp"),
    VocabularyEntry::illustrated("chat", M, "chat.webp"),
    VocabularyEntry::illustrated("chien", M, "chien.webp"),
    VocabularyEntry::illustrated("oiseau", M, "oiseau.webp"),
    VocabularyEntry::illustrated("poisson", M, "poisson.webp"),
    VocabularyEntry::illustrated("cheval", M, "cheval.webp"),
    VocabularyEntry::illustrated("arbre", M, "arbre.webp"),
    VocabularyEntry::illustrated("jardin", M, "jardin.webp"),
    VocabularyEntry::illustrated("soleil", M, "soleil.webp"),
    VocabularyEntry::illustrated("ciel", M, "ciel.webp"),
    VocabularyEntry::illustrated("pain", M, "pain.webp"),
    VocabularyEntry::illustrated("café", M, "cafe.webp"),
    VocabularyEntry::illustrated("livre", M, "livre.webp"),
    VocabularyEntry::illustrated("bureau", M, "bureau.webp"),
    VocabularyEntry::illustrated("lit", M, "lit.webp"),
    VocabularyEntry::illustrated("train", M, "train.webp"),
    VocabularyEntry::illustrated("avion", M, "avion.webp"),
    VocabularyEntry::illustrated("bateau", M, "bateau.webp"),
    VocabularyEntry::illustrated("vélo", M, "velo.webp"),
    VocabularyEntry::illustrated("téléphone", M, "telephone.webp"),
    VocabularyEntry::illustrated("ordinateur", M, "ordinateur.webp"),
    VocabularyEntry::illustrated("chapeau", M, "chapeau.webp"),
    VocabularyEntry::illustrated("gâteau", M, "gateau.webp"),
    VocabularyEntry::illustrated("fromage", M, "fromage.webp"),
    VocabularyEntry::illustrated("œuf", M, "oeuf.webp"),
    VocabularyEntry::illustrated("fruit", M, "fruit.webp"),
    VocabularyEntry::illustrated("légume", M, "legume.webp"),
    // Illustrated feminine nouns
    VocabularyEntry::illustrated("femme", F, "femme.webp"),
    VocabularyEntry::illustrated("fille", F, "fille.webp"),
    VocabularyEntry::illustrated("mère", F, "mere.webp"),
    VocabularyEntry::illustrated("maison", F, "maison.webp"),
    VocabularyEntry::illustrated("voiture", F, "voiture.webp"),
    VocabularyEntry::illustrated("table", F, "table.webp"),
    VocabularyEntry::illustrated("chaise", F, "chaise.webp"),
    VocabularyEntry::illustrated("porte", F, "porte.webp"),
    VocabularyEntry::illustrated("fenêtre", F, "fenetre.webp"),
    VocabularyEntry::illustrated("fleur", F, "fleur.webp"),
    VocabularyEntry::illustrated("montagne", F, "montagne.webp"),
    VocabularyEntry::illustrated("mer", F, "mer.webp"),
    VocabularyEntry::illustrated("plage", F, "plage.webp"),
    VocabularyEntry::illustrated("lune", F, "lune.webp"),
    VocabularyEntry::illustrated("étoile", F, "etoile.webp"),
    VocabularyEntry::illustrated("pomme", F, "pomme.webp"),
    VocabularyEntry::illustrated("orange", F, "orange.webp"),
    VocabularyEntry::illustrated("banane", F, "banane.webp"),
    VocabularyEntry::illustrated("pizza", F, "pizza.webp"),
    VocabularyEntry::illustrated("guitare", F, "guitare.webp"),
    // Nouns without an illustration
    VocabularyEntry::noun("appartement", M),
    VocabularyEntry::noun("patron", M),
    VocabularyEntry::noun("voisin", M),
    VocabularyEntry::noun("haricot", M),
    VocabularyEntry::noun("parapluie", M),
    VocabularyEntry::noun("idée", F),
    VocabularyEntry::noun("grand-mère", F),
    VocabularyEntry::noun("chaussette", F),
    VocabularyEntry::noun("télé", F),
    VocabularyEntry::noun("cuisine", F),
    // Verbs
    VocabularyEntry::verb("manger"),
    VocabularyEntry::verb("boire"),
    VocabularyEntry::verb("dormir"),
    VocabularyEntry::verb("courir"),
    VocabularyEntry::verb("chanter"),
    VocabularyEntry::verb("danser"),
    VocabularyEntry::verb("oublier"),
    VocabularyEntry::verb("regarder"),
    VocabularyEntry::verb("acheter"),
    VocabularyEntry::verb("perdre"),
    VocabularyEntry::verb("cuisiner"),
    VocabularyEntry::verb("voler"),
    VocabularyEntry::verb("repeindre"),
    VocabularyEntry::verb("attendre"),
    VocabularyEntry::verb("aimer"),
    // Adjectives
    VocabularyEntry::adjective("grand"),
    VocabularyEntry::adjective("petit"),
    VocabularyEntry::adjective("rouge"),
    VocabularyEntry::adjective("rose"),
    VocabularyEntry::adjective("fatigué"),
    VocabularyEntry::adjective("content"),
    VocabularyEntry::adjective("bizarre"),
    VocabularyEntry::adjective("délicieux"),
    VocabularyEntry::adjective("vieux"),
    VocabularyEntry::adjective("nouveau"),
    VocabularyEntry::adjective("froid"),
    VocabularyEntry::adjective("célèbre"),
    // Adverbs
    VocabularyEntry::adverb("souvent"),
    VocabularyEntry::adverb("toujours"),
    VocabularyEntry::adverb("jamais"),
    VocabularyEntry::adverb("encore"),
    VocabularyEntry::adverb("vite"),
    VocabularyEntry::adverb("lentement"),
    VocabularyEntry::adverb("hier"),
    VocabularyEntry::adverb("demain"),
];

/// Nouns starting with an aspirated `h`, which never elide.
const ASPIRATED_H: &[&str] = &[
    "hache", "haine", "hamac", "haricot", "hasard", "hauteur", "héros", "hibou", "homard",
    "honte", "huit",
];

const ELIDING_INITIALS: &str = "aàâäeéèêëiîïoôöuùûüœæh";

/// Pick a word uniformly from the whole table. Consecutive picks may repeat.
pub fn pick_random<R: Rng + ?Sized>(rng: &mut R) -> &'static VocabularyEntry {
    &VOCABULARY[rng.random_range(0..VOCABULARY.len())]
}

/// Render an entry the way a learner should read it.
///
/// Nouns get their definite article (`le chat`, `la table`), elided before a
/// vowel sound (`l'arbre`, `l'étoile`, `l'homme`). Other categories are shown
/// bare.
pub fn format_with_article(entry: &VocabularyEntry) -> String {
    let Some(gender) = entry.gender.filter(|_| entry.is_noun()) else {
        return entry.text.to_string();
    };

    if elides(entry.text) {
        return format!("l'{}", entry.text);
    }

    match gender {
        Gender::Masculine => format!("le {}", entry.text),
        Gender::Feminine => format!("la {}", entry.text),
    }
}

fn elides(word: &str) -> bool {
    let lower = word.to_lowercase();
    let Some(first) = lower.chars().next() else {
        return false;
    };
    if !ELIDING_INITIALS.contains(first) {
        return false;
    }
    !(first == 'h' && ASPIRATED_H.contains(&lower.as_str()))
}

/// Look up an entry by its text.
pub fn find(text: &str) -> Option<&'static VocabularyEntry> {
    VOCABULARY.iter().find(|e| e.text == text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(text: &str) -> &'static VocabularyEntry {
        find(text).unwrap()
    }

    #[test]
    fn masculine_noun_gets_le() {
        assert_eq!(format_with_article(entry("chat")), "le chat");
    }

    #[test]
    fn feminine_noun_gets_la() {
        assert_eq!(format_with_article(entry("table")), "la table");
    }

    #[test]
    fn vowel_initial_masculine_noun_elides() {
        assert_eq!(format_with_article(entry("arbre")), "l'arbre");
        assert_eq!(format_with_article(entry("œuf")), "l'œuf");
    }

    #[test]
    fn accented_vowel_elides() {
        assert_eq!(format_with_article(entry("étoile")), "l'étoile");
    }

    #[test]
    fn mute_h_elides_but_aspirated_h_does_not() {
        assert_eq!(format_with_article(entry("homme")), "l'homme");
        assert_eq!(format_with_article(entry("haricot")), "le haricot");
    }

    #[test]
    fn non_nouns_have_no_article() {
        assert_eq!(format_with_article(entry("manger")), "manger");
        assert_eq!(format_with_article(entry("rouge")), "rouge");
        assert_eq!(format_with_article(entry("encore")), "encore");
    }

    #[test]
    fn every_noun_has_a_gender() {
        for e in VOCABULARY.iter().filter(|e| e.category == Category::Noun) {
            assert!(e.gender.is_some(), "{} has no gender", e.text);
        }
    }

    #[test]
    fn pick_random_stays_in_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let picked = pick_random(&mut rng);
            assert!(VOCABULARY.contains(picked));
        }
    }

    #[test]
    fn pick_random_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick_random(&mut a), pick_random(&mut b));
        }
    }
}
