//! Prompt construction for the sentence generator.

use rand::Rng;

use crate::models::{Category, Gender, VocabularyEntry};

/// Humour styles; one is drawn per request.
pub const HUMOR_STYLES: &[&str] = &[
    "une situation cocasse mais réaliste",
    "une observation ironique sur le quotidien",
    "un petit problème du quotidien exagéré",
    "une comparaison inattendue mais logique",
    "une situation embarrassante mais crédible",
];

/// System persona sent with every request.
pub const SYSTEM_PERSONA: &str = "Tu es un professeur de français qui crée des phrases drôles ET grammaticalement parfaites pour des débutants (niveau A2/B1).

PRIORITÉS (dans l'ordre):
1. SENS LOGIQUE - La phrase décrit une situation RÉELLE ou PLAUSIBLE
2. GRAMMAIRE PARFAITE - Verbes conjugués, accords corrects, apostrophes
3. SIMPLICITÉ - Phrases courtes (max 20 mots), vocabulaire simple
4. HUMOUR - Situation cocasse, observation ironique, exagération crédible

RÈGLE D'OR: Si les mots ne peuvent pas former une phrase logique ensemble, utilise SEULEMENT ceux qui fonctionnent. Ne force JAMAIS des mots incompatibles.

INTERDIT:
- Phrases absurdes (objets qui font des actions impossibles)
- Associations illogiques (ex: \"la maison mange\", \"le bonheur court\")
- Verbes non conjugués
- Phrases trop longues ou complexes";

const CONSTRAINTS: &str = "ÉTAPE 1 - SÉLECTION DES MOTS:
Parmi les mots ci-dessus, identifie ceux qui peuvent former une phrase COHÉRENTE.
⚠️ N'utilise PAS les mots qui ne s'associent pas logiquement.
⚠️ Mieux vaut utiliser 2-3 mots qui vont bien ensemble que forcer 5 mots sans sens.

ÉTAPE 2 - VÉRIFICATION SÉMANTIQUE:
La phrase doit décrire une situation POSSIBLE (même si exagérée ou comique).
✓ \"Mon voisin a repeint sa voiture en rose.\" (possible, drôle)
✓ \"Le chat a encore volé les chaussettes.\" (possible, amusant)
✗ \"L'appartement fatigue mon bras.\" (impossible, absurde)
✗ \"La table mange une idée.\" (impossible, absurde)

ÉTAPE 3 - GRAMMAIRE PARFAITE:
- Verbes CONJUGUÉS (présent, passé composé, futur, imparfait)
  ✓ \"Le chat mange\" / \"Il a mangé\" / \"Elle mangera\"
  ✗ \"Le chat manger\" (INTERDIT)
- Adjectifs ACCORDÉS en genre et nombre
  ✓ \"une voiture rouge\" / \"des voitures rouges\"
- Articles corrects (le/la/les/un/une/des)
- Apostrophes: l'homme, j'aime, c'est, d'une, qu'il, n'est, s'il

ÉTAPE 4 - SIMPLICITÉ (niveau A2/B1):
- Maximum 20 mots
- Vocabulaire simple et courant
- Structure claire: Sujet + Verbe + Complément
- Évite les constructions complexes

EXEMPLES DE BONNES PHRASES:
- \"Mon patron a encore oublié mon prénom.\"
- \"Le chien regarde la télé plus que mon mari.\"
- \"Ma grand-mère court plus vite que moi.\"

RÉPONDS avec UNE SEULE phrase, sans guillemets, sans explication.";

/// Annotate a word with its grammatical role, e.g. `"chat" (nom masculin)`.
pub fn describe_word(entry: &VocabularyEntry) -> String {
    match entry.category {
        Category::Noun => {
            let gender = entry.gender.unwrap_or(Gender::Masculine);
            format!("\"{}\" (nom {})", entry.text, gender.label())
        }
        Category::Verb => format!("\"{}\" (verbe - à conjuguer)", entry.text),
        Category::Adjective => format!("\"{}\" (adjectif - à accorder)", entry.text),
        Category::Adverb => format!("\"{}\" (adverbe)", entry.text),
    }
}

pub fn pick_style<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HUMOR_STYLES[rng.random_range(0..HUMOR_STYLES.len())]
}

/// Build the user turn for a set of collected words.
pub fn build_prompt(words: &[VocabularyEntry], humor_style: &str) -> String {
    let details = words
        .iter()
        .map(describe_word)
        .collect::<Vec<_>>()
        .join("\n- ");

    format!(
        "OBJECTIF: Créer une phrase DRÔLE, LOGIQUE et GRAMMATICALEMENT PARFAITE pour un débutant en français.

MOTS DISPONIBLES:
- {details}

STYLE D'HUMOUR: {humor_style}

{CONSTRAINTS}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::find;

    #[test]
    fn describes_each_category() {
        assert_eq!(describe_word(find("chat").unwrap()), "\"chat\" (nom masculin)");
        assert_eq!(describe_word(find("table").unwrap()), "\"table\" (nom féminin)");
        assert_eq!(
            describe_word(find("manger").unwrap()),
            "\"manger\" (verbe - à conjuguer)"
        );
        assert_eq!(
            describe_word(find("rouge").unwrap()),
            "\"rouge\" (adjectif - à accorder)"
        );
        assert_eq!(describe_word(find("vite").unwrap()), "\"vite\" (adverbe)");
    }

    #[test]
    fn prompt_lists_words_in_order() {
        let words = [*find("chat").unwrap(), *find("manger").unwrap()];
        let prompt = build_prompt(&words, HUMOR_STYLES[0]);

        assert!(prompt.contains(
            "MOTS DISPONIBLES:\n- \"chat\" (nom masculin)\n- \"manger\" (verbe - à conjuguer)\n"
        ));
        assert!(prompt.contains("STYLE D'HUMOUR: une situation cocasse mais réaliste"));
        assert!(prompt.contains("Maximum 20 mots"));
        assert!(prompt.ends_with("sans guillemets, sans explication."));
    }

    #[test]
    fn picked_style_is_one_of_the_fixed_set() {
        let mut rng = rand::rng();
        for _ in 0..20 {
            assert!(HUMOR_STYLES.contains(&pick_style(&mut rng)));
        }
    }
}
