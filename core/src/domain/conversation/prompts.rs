//! Fixed prompt texts sent to the LLM and the food pool used by simulations.

/// Greeting returned before the user has said anything.
pub const WELCOME_MESSAGE: &str = "Welcome! Please enter your top 3 favorite foods.";

/// Question the simulated interviewer always asks.
pub const SIMULATION_QUESTION: &str =
    "What are your top 3 favorite foods? Please keep the description short and simple.";

pub const FOOD_ENTHUSIAST_SYSTEM_PROMPT: &str =
    "You are a food enthusiast. List your top 3 favorite foods based on the suggestion.";

pub const DIET_LABEL_SYSTEM_PROMPT: &str = "You classify lists of foods by diet. Answer with exactly one word: vegan, vegetarian, or neither.";

/// Foods a simulated enthusiast picks three favorites from.
pub const FOOD_POOL: [&str; 103] = [
    "pizza", "chicken", "beef", "salad", "tofu", "lentils", "pasta", "rice",
    "broccoli", "carrots", "spinach", "quinoa", "eggs", "fish", "shrimp", "turkey",
    "avocado", "cheese", "bread", "beans", "potatoes", "sweet potatoes", "mushrooms",
    "cucumber", "tomatoes", "oranges", "apples", "bananas", "berries", "yogurt", "oats",
    "peanut butter", "almonds", "cashews", "walnuts", "hummus", "zucchini", "cauliflower",
    "brussels sprouts", "asparagus", "onions", "garlic", "peppers", "corn", "peas",
    "cabbage", "eggplant", "pineapple", "grapes", "melon", "cherries", "kiwi",
    "mango", "papaya", "coconut", "figs", "dates", "raisins", "cranberries", "blueberries",
    "sardines", "salmon", "tuna", "duck", "pork", "bacon", "sausages", "lamb",
    "barley", "millet", "couscous", "bulgur", "buckwheat", "noodles", "gnocchi",
    "tortilla", "pita", "bagel", "croissant", "pancakes", "waffles", "cereal",
    "milk", "cream", "butter", "ice cream", "gelato", "chocolate", "jam", "honey",
    "maple syrup", "soy milk", "almond milk", "coconut milk", "chia seeds", "flax seeds",
    "sunflower seeds", "pumpkin seeds", "tempeh", "seitan", "clams", "scallops", "lobster",
];

/// Instruction wrapped around the user's message for a chat turn.
pub fn chatbot_prompt(user_input: &str) -> String {
    format!(
        "You are friendly chatbot. Ask the user: 'What are your top 3 favorite foods?' \
         If they respond, thank them and list their foods (e.g., '1. food1, 2. food2, 3. food3'). \
         If they don't provide foods or the list is incomplete, gently prompt again. \
         User said: {user_input}"
    )
}

pub fn food_enthusiast_prompt(suggestions: &[&str]) -> String {
    format!("Suggest: {}", suggestions.join(", "))
}

pub fn diet_label_prompt<'a>(foods: impl IntoIterator<Item = &'a str>) -> String {
    let foods: Vec<&str> = foods.into_iter().collect();
    format!(
        "Is someone whose favorite foods are {} vegan, vegetarian, or neither?",
        foods.join(", ")
    )
}
