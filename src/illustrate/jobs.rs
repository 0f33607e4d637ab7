use crate::models::IllustrationJob;

/// Every illustrated noun and the prompt used to draw it.
pub const ILLUSTRATIONS: &[IllustrationJob] = &[
    IllustrationJob {
        word: "homme",
        filename: "homme.webp",
        prompt: "simple flat illustration of a man standing, friendly adult male, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "enfant",
        filename: "enfant.webp",
        prompt: "simple flat illustration of a happy child, young kid smiling, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "père",
        filename: "pere.webp",
        prompt: "simple flat illustration of a father, adult man with warm smile, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "ami",
        filename: "ami.webp",
        prompt: "simple flat illustration of two friends, people shaking hands, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "chat",
        filename: "chat.webp",
        prompt: "simple flat illustration of a cute cat sitting, domestic cat, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "chien",
        filename: "chien.webp",
        prompt: "simple flat illustration of a friendly dog, happy puppy, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "oiseau",
        filename: "oiseau.webp",
        prompt: "simple flat illustration of a colorful bird, small songbird, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "poisson",
        filename: "poisson.webp",
        prompt: "simple flat illustration of a fish, colorful tropical fish, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "cheval",
        filename: "cheval.webp",
        prompt: "simple flat illustration of a horse standing, brown horse, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "arbre",
        filename: "arbre.webp",
        prompt: "simple flat illustration of a tree, green leafy tree, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "jardin",
        filename: "jardin.webp",
        prompt: "simple flat illustration of a garden with flowers, colorful plants, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "soleil",
        filename: "soleil.webp",
        prompt: "simple flat illustration of the sun, bright yellow sun with rays, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "ciel",
        filename: "ciel.webp",
        prompt: "simple flat illustration of blue sky with white clouds, minimal design, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "pain",
        filename: "pain.webp",
        prompt: "simple flat illustration of bread, french baguette, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "café",
        filename: "cafe.webp",
        prompt: "simple flat illustration of a cup of coffee, steaming coffee mug, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "livre",
        filename: "livre.webp",
        prompt: "simple flat illustration of a book, open book, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "bureau",
        filename: "bureau.webp",
        prompt: "simple flat illustration of a desk, office desk with chair, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "lit",
        filename: "lit.webp",
        prompt: "simple flat illustration of a bed, comfortable bed with pillows, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "train",
        filename: "train.webp",
        prompt: "simple flat illustration of a train, passenger train, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "avion",
        filename: "avion.webp",
        prompt: "simple flat illustration of an airplane, passenger plane flying, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "bateau",
        filename: "bateau.webp",
        prompt: "simple flat illustration of a boat, sailboat on water, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "vélo",
        filename: "velo.webp",
        prompt: "simple flat illustration of a bicycle, simple bike, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "téléphone",
        filename: "telephone.webp",
        prompt: "simple flat illustration of a smartphone, mobile phone, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "ordinateur",
        filename: "ordinateur.webp",
        prompt: "simple flat illustration of a laptop computer, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "chapeau",
        filename: "chapeau.webp",
        prompt: "simple flat illustration of a hat, stylish hat, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "gâteau",
        filename: "gateau.webp",
        prompt: "simple flat illustration of a birthday cake with frosting, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "fromage",
        filename: "fromage.webp",
        prompt: "simple flat illustration of cheese, yellow cheese wedge, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "œuf",
        filename: "oeuf.webp",
        prompt: "simple flat illustration of an egg, white chicken egg, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "fruit",
        filename: "fruit.webp",
        prompt: "simple flat illustration of colorful fruits, apple orange banana, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "légume",
        filename: "legume.webp",
        prompt: "simple flat illustration of vegetables, carrot tomato broccoli, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "femme",
        filename: "femme.webp",
        prompt: "simple flat illustration of a woman standing, friendly adult female, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "fille",
        filename: "fille.webp",
        prompt: "simple flat illustration of a young girl smiling, happy child, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "mère",
        filename: "mere.webp",
        prompt: "simple flat illustration of a mother, adult woman with warm smile, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "maison",
        filename: "maison.webp",
        prompt: "simple flat illustration of a house, cozy family home, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "voiture",
        filename: "voiture.webp",
        prompt: "simple flat illustration of a car, simple sedan, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "table",
        filename: "table.webp",
        prompt: "simple flat illustration of a table, wooden dining table, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "chaise",
        filename: "chaise.webp",
        prompt: "simple flat illustration of a chair, wooden chair, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "porte",
        filename: "porte.webp",
        prompt: "simple flat illustration of a door, wooden door, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "fenêtre",
        filename: "fenetre.webp",
        prompt: "simple flat illustration of a window, window with curtains, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "fleur",
        filename: "fleur.webp",
        prompt: "simple flat illustration of a flower, beautiful colorful flower, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "montagne",
        filename: "montagne.webp",
        prompt: "simple flat illustration of a mountain, snow-capped mountain peak, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "mer",
        filename: "mer.webp",
        prompt: "simple flat illustration of the sea, blue ocean waves, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "plage",
        filename: "plage.webp",
        prompt: "simple flat illustration of a beach, sandy beach with palm tree, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "lune",
        filename: "lune.webp",
        prompt: "simple flat illustration of the moon, crescent moon, minimal design, solid dark blue background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "étoile",
        filename: "etoile.webp",
        prompt: "simple flat illustration of a star, bright yellow star shape, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "pomme",
        filename: "pomme.webp",
        prompt: "simple flat illustration of a red apple with leaf, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "orange",
        filename: "orange.webp",
        prompt: "simple flat illustration of an orange fruit, citrus, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "banane",
        filename: "banane.webp",
        prompt: "simple flat illustration of a yellow banana, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "pizza",
        filename: "pizza.webp",
        prompt: "simple flat illustration of a pizza slice with toppings, minimal design, solid white background, educational flashcard style, vector art",
    },
    IllustrationJob {
        word: "guitare",
        filename: "guitare.webp",
        prompt: "simple flat illustration of an acoustic guitar, minimal design, solid white background, educational flashcard style, vector art",
    },
];
