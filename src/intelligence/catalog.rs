// ABOUTME: Fixed content catalog for plan generation
// ABOUTME: Meal entries per slot and supplement affinity tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

//! Static content catalog.
//!
//! Plan generation is table-driven: meals are selected from these fixed
//! entries filtered by nutrition profile, and supplements come from the
//! goal/stress affinity tables. Each meal slot keeps at least two
//! plant-based entries so rotation still varies for plant-based profiles.

/// A catalog meal entry
#[derive(Debug, Clone, Copy)]
pub struct CatalogMeal {
    /// Meal name
    pub name: &'static str,
    /// Ingredient list
    pub ingredients: &'static [&'static str],
    /// Estimated calories
    pub calories: u32,
    /// Free of animal products
    pub plant_based: bool,
}

/// A catalog supplement entry
#[derive(Debug, Clone, Copy)]
pub struct CatalogSupplement {
    /// Supplement name
    pub name: &'static str,
    /// Dose per serving
    pub dosage: &'static str,
    /// When to take it
    pub timing: &'static str,
    /// Free of animal products
    pub plant_based: bool,
}

/// Breakfast entries
pub const BREAKFASTS: &[CatalogMeal] = &[
    CatalogMeal {
        name: "Green Power Smoothie Bowl",
        ingredients: &["Spinach", "Banana", "Chia seeds", "Almond milk", "Berries"],
        calories: 320,
        plant_based: true,
    },
    CatalogMeal {
        name: "Overnight Oats with Protein",
        ingredients: &["Oats", "Plant protein", "Chia seeds", "Almond butter", "Banana"],
        calories: 380,
        plant_based: true,
    },
    CatalogMeal {
        name: "Veggie Scramble with Toast",
        ingredients: &["Eggs", "Peppers", "Spinach", "Whole grain toast"],
        calories: 350,
        plant_based: false,
    },
    CatalogMeal {
        name: "Greek Yogurt Parfait",
        ingredients: &["Greek yogurt", "Granola", "Honey", "Berries"],
        calories: 310,
        plant_based: false,
    },
];

/// Lunch entries
pub const LUNCHES: &[CatalogMeal] = &[
    CatalogMeal {
        name: "Quinoa Buddha Bowl",
        ingredients: &["Quinoa", "Roasted vegetables", "Chickpeas", "Tahini dressing"],
        calories: 450,
        plant_based: true,
    },
    CatalogMeal {
        name: "Lentil Power Salad",
        ingredients: &["Lentils", "Kale", "Avocado", "Pumpkin seeds", "Lemon dressing"],
        calories: 420,
        plant_based: true,
    },
    CatalogMeal {
        name: "Mediterranean Wrap",
        ingredients: &["Whole wheat tortilla", "Hummus", "Grilled chicken", "Vegetables"],
        calories: 480,
        plant_based: false,
    },
    CatalogMeal {
        name: "Tuna Grain Bowl",
        ingredients: &["Brown rice", "Tuna", "Edamame", "Sesame dressing"],
        calories: 460,
        plant_based: false,
    },
];

/// Dinner entries
pub const DINNERS: &[CatalogMeal] = &[
    CatalogMeal {
        name: "Chickpea Coconut Curry",
        ingredients: &["Chickpeas", "Coconut milk", "Tomatoes", "Brown rice", "Spinach"],
        calories: 510,
        plant_based: true,
    },
    CatalogMeal {
        name: "Tofu Stir-Fry with Soba",
        ingredients: &["Tofu", "Soba noodles", "Broccoli", "Ginger", "Tamari"],
        calories: 490,
        plant_based: true,
    },
    CatalogMeal {
        name: "Grilled Salmon with Sweet Potato",
        ingredients: &["Wild salmon", "Sweet potato", "Asparagus", "Olive oil"],
        calories: 520,
        plant_based: false,
    },
    CatalogMeal {
        name: "Turkey Meatballs with Zoodles",
        ingredients: &["Ground turkey", "Zucchini noodles", "Marinara", "Parmesan"],
        calories: 470,
        plant_based: false,
    },
];

/// Supplements favored for the muscle gain goal.
///
/// Whey is the only animal-derived entry in the tables; plan generation
/// substitutes pea protein for plant-based profiles.
pub const MUSCLE_GAIN_SUPPLEMENTS: &[CatalogSupplement] = &[
    CatalogSupplement {
        name: "Whey Protein",
        dosage: "25g",
        timing: "After workout",
        plant_based: false,
    },
    CatalogSupplement {
        name: "Creatine",
        dosage: "5g",
        timing: "With breakfast",
        plant_based: true,
    },
    CatalogSupplement {
        name: "Vitamin D3",
        dosage: "2000 IU",
        timing: "With lunch",
        plant_based: true,
    },
];

/// Plant-based substitute for whey in the muscle gain table
pub const PLANT_PROTEIN_SUBSTITUTE: CatalogSupplement = CatalogSupplement {
    name: "Pea Protein",
    dosage: "25g",
    timing: "After workout",
    plant_based: true,
};

/// Supplements favored for the energy goal
pub const ENERGY_SUPPLEMENTS: &[CatalogSupplement] = &[
    CatalogSupplement {
        name: "B-Complex",
        dosage: "1 capsule",
        timing: "With breakfast",
        plant_based: true,
    },
    CatalogSupplement {
        name: "Iron",
        dosage: "18mg",
        timing: "With lunch",
        plant_based: true,
    },
    CatalogSupplement {
        name: "CoQ10",
        dosage: "100mg",
        timing: "With dinner",
        plant_based: true,
    },
];

/// Supplements favored under high stress
pub const STRESS_SUPPLEMENTS: &[CatalogSupplement] = &[
    CatalogSupplement {
        name: "Magnesium",
        dosage: "400mg",
        timing: "Before bed",
        plant_based: true,
    },
    CatalogSupplement {
        name: "Ashwagandha",
        dosage: "600mg",
        timing: "With dinner",
        plant_based: true,
    },
    CatalogSupplement {
        name: "Omega-3",
        dosage: "1000mg",
        timing: "With breakfast",
        plant_based: true,
    },
];
