use thiserror::Error;

use crate::model::quiz::{Level, LevelNumber, OPTIONS_PER_QUESTION, Question};

/// Number of levels in the builtin catalog.
pub const BUILTIN_TOTAL_LEVELS: u32 = 10;

/// Number of questions per level in the builtin catalog.
pub const BUILTIN_QUESTIONS_PER_LEVEL: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("a quiz catalog needs at least one level")]
    Empty,

    #[error("too many levels: {0}")]
    TooManyLevels(usize),

    #[error("levels must be numbered in order: expected {expected}, found {found}")]
    OutOfOrder {
        expected: LevelNumber,
        found: LevelNumber,
    },

    #[error("level {0} has no questions")]
    EmptyLevel(LevelNumber),

    #[error("level {level} has {found} questions, expected {expected}")]
    UnevenLevel {
        level: LevelNumber,
        expected: usize,
        found: usize,
    },
}

/// Ordered, read-only catalog of quiz levels.
///
/// Levels are numbered `1..=total_levels` and all hold the same number of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCatalog {
    levels: Vec<Level>,
    questions_per_level: usize,
}

impl QuizCatalog {
    /// Build a catalog from caller-provided levels.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if there are no levels, numbering is not `1..=n` in
    /// order, or question counts differ between levels.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        let Some(first) = levels.first() else {
            return Err(CatalogError::Empty);
        };
        if u32::try_from(levels.len()).is_err() {
            return Err(CatalogError::TooManyLevels(levels.len()));
        }

        let questions_per_level = first.question_count();
        let mut expected = LevelNumber::FIRST;
        for level in &levels {
            if level.number() != expected {
                return Err(CatalogError::OutOfOrder {
                    expected,
                    found: level.number(),
                });
            }
            if level.question_count() == 0 {
                return Err(CatalogError::EmptyLevel(level.number()));
            }
            if level.question_count() != questions_per_level {
                return Err(CatalogError::UnevenLevel {
                    level: level.number(),
                    expected: questions_per_level,
                    found: level.question_count(),
                });
            }
            expected = expected.next();
        }

        Ok(Self {
            levels,
            questions_per_level,
        })
    }

    /// The ten nutrition levels shipped with the app, easiest first.
    #[must_use]
    pub fn builtin() -> Self {
        let levels = BUILTIN_LEVELS
            .iter()
            .zip(1_u32..)
            .map(|(questions, number)| {
                let questions = questions
                    .iter()
                    .map(|(prompt, options, answer)| Question::from_static(prompt, options, answer))
                    .collect();
                Level::new(LevelNumber(number), questions)
            })
            .collect();

        Self {
            levels,
            questions_per_level: BUILTIN_QUESTIONS_PER_LEVEL,
        }
    }

    /// Look up a level; `None` when the number is outside `1..=total_levels`.
    #[must_use]
    pub fn get_level(&self, number: LevelNumber) -> Option<&Level> {
        let index = usize::try_from(number.value()).ok()?.checked_sub(1)?;
        self.levels.get(index)
    }

    #[must_use]
    pub fn total_levels(&self) -> u32 {
        // Bounded by the `TooManyLevels` check in `new`.
        u32::try_from(self.levels.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn questions_per_level(&self) -> usize {
        self.questions_per_level
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn last_level(&self) -> LevelNumber {
        LevelNumber(self.total_levels())
    }
}

impl Default for QuizCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

type StaticQuestion = (&'static str, [&'static str; OPTIONS_PER_QUESTION], &'static str);

const BUILTIN_LEVELS: [[StaticQuestion; BUILTIN_QUESTIONS_PER_LEVEL]; BUILTIN_TOTAL_LEVELS as usize] = [
    // 1: nutrition basics
    [
        (
            "Which potassium-rich fruit, good for blood pressure, is a favourite snack of athletes?",
            ["Apple", "Banana", "Avocado"],
            "Banana",
        ),
        (
            "Which mineral, abundant in milk and dairy products, is essential for bones?",
            ["Iron", "Calcium", "Sodium"],
            "Calcium",
        ),
        (
            "Which vitamin do we mostly get from morning sunlight?",
            ["Vitamin C", "Vitamin D", "Vitamin B12"],
            "Vitamin D",
        ),
        (
            "Which complex-carbohydrate source often replaces rice for people on a diet?",
            ["White Rice", "Sweet Potato", "Granulated Sugar"],
            "Sweet Potato",
        ),
        (
            "Which nutrient mainly builds and repairs body tissue?",
            ["Carbohydrate", "Protein", "Fat"],
            "Protein",
        ),
    ],
    // 2: telling food types apart
    [
        (
            "Which fat should be avoided because it raises the risk of heart disease?",
            ["Saturated Fat", "Monounsaturated Fat", "Omega-3"],
            "Saturated Fat",
        ),
        (
            "Which of these is a whole grain?",
            ["White Bread", "Oatmeal", "Crackers"],
            "Oatmeal",
        ),
        (
            "Which leafy green contains the eye-protecting antioxidants lutein and zeaxanthin?",
            ["Carrot", "Spinach", "Mustard Greens"],
            "Spinach",
        ),
        (
            "Which food has a low glycemic index (GI)?",
            ["White Rice", "Whole Wheat Bread", "French Fries"],
            "Whole Wheat Bread",
        ),
        (
            "Which fruit is known as a source of vitamin C and antioxidants that support immunity?",
            ["Avocado", "Mango", "Orange"],
            "Orange",
        ),
    ],
    // 3: nutrition in detail
    [
        (
            "What is the essential fatty acid found in salmon, seeds and avocado?",
            ["Lactic Acid", "Omega-3", "Cholesterol"],
            "Omega-3",
        ),
        (
            "A vitamin B12 deficiency can cause which type of anemia?",
            ["Iron Deficiency Anemia", "Aplastic Anemia", "Megaloblastic Anemia"],
            "Megaloblastic Anemia",
        ),
        (
            "Which of these is not a macronutrient?",
            ["Protein", "Vitamin", "Carbohydrate"],
            "Vitamin",
        ),
        (
            "What is the main role of fiber in the diet?",
            ["Quick energy boost", "Smoother digestion", "Building muscle"],
            "Smoother digestion",
        ),
        (
            "Roughly what percentage of the human body is water?",
            ["20-30%", "60-70%", "85-95%"],
            "60-70%",
        ),
    ],
    // 4: myths and facts
    [
        (
            "Does eating after 8 pm always cause weight gain?",
            ["Yes", "No", "Depends on the food"],
            "Depends on the food",
        ),
        (
            "What does a calorie deficit mean?",
            [
                "More calories eaten than burned",
                "More calories burned than eaten",
                "Calories eaten and burned are equal",
            ],
            "More calories burned than eaten",
        ),
        (
            "What is the WHO's recommended maximum daily sugar intake for adults, in teaspoons?",
            ["3 tsp", "6 tsp", "10 tsp"],
            "6 tsp",
        ),
        (
            "Which natural sweetener has a higher glycemic index than table sugar (sucrose)?",
            ["Honey", "Maple Syrup", "Stevia"],
            "Honey",
        ),
        (
            "Which plant protein is considered a complete protein, containing all essential amino acids?",
            ["Peanuts", "Tofu (Soy)", "Lentils"],
            "Tofu (Soy)",
        ),
    ],
    // 5: vitamins and minerals
    [
        (
            "Which fat-soluble vitamin is important for blood clotting?",
            ["Vitamin C", "Vitamin K", "Vitamin B6"],
            "Vitamin K",
        ),
        (
            "A deficiency of which mineral causes goiter, a swelling of the thyroid gland?",
            ["Zinc", "Iodine", "Selenium"],
            "Iodine",
        ),
        (
            "What is the main role of vitamin A?",
            ["Bone health", "Eye health and vision", "Energy production"],
            "Eye health and vision",
        ),
        (
            "Which mineral is mostly lost through sweat during intense exercise?",
            ["Phosphorus", "Calcium", "Sodium (Salt)"],
            "Sodium (Salt)",
        ),
        (
            "Which B-complex vitamin is especially important before and during pregnancy?",
            ["Tocopherol", "Folic Acid", "Thiamine"],
            "Folic Acid",
        ),
    ],
    // 6: healthy lifestyle
    [
        (
            "How much sleep per night is ideal for adults on average?",
            ["5-6 hours", "7-9 hours", "9-10 hours"],
            "7-9 hours",
        ),
        (
            "Besides building muscle, what is a main benefit of resistance training?",
            ["Better flexibility", "Higher bone density", "Less need for sleep"],
            "Higher bone density",
        ),
        (
            "When is the best time to weigh yourself for the most accurate result?",
            [
                "After lunch",
                "At night before bed",
                "In the morning after using the toilet",
            ],
            "In the morning after using the toilet",
        ),
        (
            "Which hormone is released under chronic stress and can cause belly fat to build up?",
            ["Insulin", "Cortisol", "Serotonin"],
            "Cortisol",
        ),
        (
            "What does 'mindful eating' mean?",
            [
                "Eating very quickly",
                "Eating while watching TV",
                "Eating slowly and with full attention",
            ],
            "Eating slowly and with full attention",
        ),
    ],
    // 7: weight management
    [
        (
            "Which part of Total Daily Energy Expenditure (TDEE) covers basic body functions at rest?",
            ["TEF", "NEAT", "BMR"],
            "BMR",
        ),
        (
            "What role does protein play in keeping a healthy weight?",
            [
                "Keeps you full faster and longer",
                "Provides empty calories",
                "Burns fat directly",
            ],
            "Keeps you full faster and longer",
        ),
        (
            "In which state does the body burn fat instead of glucose as its main fuel because carbohydrates are scarce?",
            ["Gluconeogenesis", "Catabolism", "Ketosis"],
            "Ketosis",
        ),
        (
            "Which type of belly fat is most dangerous because it surrounds vital organs?",
            ["Subcutaneous Fat", "Visceral Fat", "Brown Fat"],
            "Visceral Fat",
        ),
        (
            "What is the recommended healthy, sustainable weight loss per week?",
            ["0.25 - 0.5 kg", "1 - 2 kg", "2.5 - 3 kg"],
            "0.25 - 0.5 kg",
        ),
    ],
    // 8: functional foods and superfoods
    [
        (
            "Which compound in green tea is a strong antioxidant that may boost metabolism?",
            ["Casein", "EGCG", "Bromelain"],
            "EGCG",
        ),
        (
            "Probiotics are most often found in foods made by which process?",
            ["Drying", "Fermentation", "Pasteurization"],
            "Fermentation",
        ),
        (
            "Which nutrient that gives tomatoes their red colour is linked to a lower cancer risk?",
            ["Curcumin", "Lutein", "Lycopene"],
            "Lycopene",
        ),
        (
            "Which of these is a prebiotic source that feeds good gut bacteria?",
            ["Yogurt", "Garlic", "Beef"],
            "Garlic",
        ),
        (
            "Besides vitamin C, which nutrient makes berries such as blueberries a superfood?",
            ["Anthocyanins", "Creatine", "Chlorophyll"],
            "Anthocyanins",
        ),
    ],
    // 9: specific health conditions
    [
        (
            "Which autoimmune disease prevents sufferers from digesting gluten?",
            ["Wheat Allergy", "Celiac Disease", "Lactose Intolerance"],
            "Celiac Disease",
        ),
        (
            "Which substance in table salt should be limited to prevent hypertension?",
            ["Potassium", "Sodium", "Magnesium"],
            "Sodium",
        ),
        (
            "Which carbohydrates should people with diabetes avoid because they spike blood sugar quickly?",
            ["Complex Carbohydrates", "Simple Carbohydrates", "Fiber"],
            "Simple Carbohydrates",
        ),
        (
            "Which diet-related condition is called a 'silent killer' because symptoms often go unnoticed?",
            ["Flu", "Cancer", "Hypertension"],
            "Hypertension",
        ),
        (
            "Which of these is a polyunsaturated fat?",
            ["Coconut Oil", "Olive Oil", "Sunflower Oil"],
            "Sunflower Oil",
        ),
    ],
    // 10: applied nutrition science
    [
        (
            "What happens to the protein in an egg when you cook it?",
            ["It is hydrolyzed", "It is rehydrated", "It is denatured"],
            "It is denatured",
        ),
        (
            "What is the process by which the body makes glucose from non-carbohydrate sources?",
            ["Glycolysis", "Gluconeogenesis", "Glycogenesis"],
            "Gluconeogenesis",
        ),
        (
            "Which coenzyme derived from vitamin B2 plays a key role in the body's energy cycle?",
            ["NADH", "FADH2", "ATP"],
            "FADH2",
        ),
        (
            "Which compound is the blood's main oxygen carrier and depends heavily on iron?",
            ["Albumin", "Hemoglobin", "Collagen"],
            "Hemoglobin",
        ),
        (
            "What is an 'essential amino acid'?",
            [
                "An amino acid only children need",
                "An amino acid the body makes itself",
                "An amino acid that must come from food",
            ],
            "An amino acid that must come from food",
        ),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn level(number: u32, count: usize) -> Level {
        let questions = (0..count)
            .map(|i| Question::new(format!("Q{i}"), ["a", "b", "c"], "a").unwrap())
            .collect();
        Level::new(LevelNumber::new(number).unwrap(), questions)
    }

    #[test]
    fn builtin_catalog_has_ten_levels_of_five() {
        let catalog = QuizCatalog::builtin();
        assert_eq!(catalog.total_levels(), 10);
        assert_eq!(catalog.questions_per_level(), 5);
        for level in catalog.levels() {
            assert_eq!(level.question_count(), 5);
        }
        assert_eq!(catalog.last_level().value(), 10);
    }

    #[test]
    fn builtin_catalog_questions_are_valid() {
        let catalog = QuizCatalog::builtin();
        for level in catalog.levels() {
            for q in level.questions() {
                let options: [String; 3] = q.options().to_vec().try_into().unwrap();
                let checked = Question::new(q.prompt(), options, q.correct_option());
                assert_eq!(checked, Ok(q.clone()), "invalid builtin question: {}", q.prompt());
            }
        }
        // Re-validating through `new` also proves the builtin table is well ordered.
        assert_eq!(QuizCatalog::new(catalog.levels().to_vec()), Ok(catalog));
    }

    #[test]
    fn get_level_returns_none_outside_range() {
        let catalog = QuizCatalog::builtin();
        assert_eq!(
            catalog.get_level(LevelNumber::FIRST).map(Level::number),
            Some(LevelNumber::FIRST)
        );
        assert!(catalog.get_level(LevelNumber::new(10).unwrap()).is_some());
        assert!(catalog.get_level(LevelNumber::new(11).unwrap()).is_none());
    }

    #[test]
    fn new_validates_numbering_and_sizes() {
        assert_eq!(QuizCatalog::new(Vec::new()), Err(CatalogError::Empty));
        assert!(matches!(
            QuizCatalog::new(vec![level(2, 3)]),
            Err(CatalogError::OutOfOrder { .. })
        ));
        assert!(matches!(
            QuizCatalog::new(vec![level(1, 3), level(2, 2)]),
            Err(CatalogError::UnevenLevel { found: 2, .. })
        ));
        assert!(matches!(
            QuizCatalog::new(vec![level(1, 0)]),
            Err(CatalogError::EmptyLevel(_))
        ));

        let catalog = QuizCatalog::new(vec![level(1, 3), level(2, 3)]).unwrap();
        assert_eq!(catalog.total_levels(), 2);
        assert_eq!(catalog.questions_per_level(), 3);
    }
}
