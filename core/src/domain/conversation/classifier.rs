use crate::domain::conversation::entities::{DietVerdict, FoodItem};

/// Stems that mark a food as non-vegetarian when found anywhere in its name.
pub const NON_VEGETARIAN_KEYWORDS: [&str; 35] = [
    "chicken",
    "beef",
    "pork",
    "fish",
    "shrimp",
    "lamb",
    "turkey",
    "duck",
    "venison",
    "goat",
    "rabbit",
    "veal",
    "bacon",
    "sausage",
    "ham",
    "salami",
    "prosciutto",
    "crab",
    "lobster",
    "squid",
    "octopus",
    "clams",
    "mussels",
    "oysters",
    "scallops",
    "gelatin",
    "broth",
    "stock",
    "lard",
    "suet",
    "tallow",
    "meat",
    "seafood",
    "poultry",
    "game",
];

/// Plain substring match, so `hamburger` and `fishcake-flavored tofu` both hit.
pub fn is_non_vegetarian(food: &FoodItem) -> bool {
    let lowered = food.as_str().to_lowercase();
    NON_VEGETARIAN_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// `Vegetarian` unless any food contains a keyword. Empty input is vegetarian.
pub fn classify(foods: &[FoodItem]) -> DietVerdict {
    if foods.iter().any(is_non_vegetarian) {
        DietVerdict::NotVegetarian
    } else {
        DietVerdict::Vegetarian
    }
}
