//! Static diet plan catalog.
//!
//! One template per diet strategy; every [`BmiCategory`] maps to exactly one
//! template. Overweight and Obese share the weight-loss template.

use crate::bmi::BmiCategory;

use super::diet_plans_model::DietPlanDocument;

/// A compile-time plan template.
#[derive(Debug)]
pub struct PlanTemplate {
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl PlanTemplate {
    pub fn to_document(&self) -> DietPlanDocument {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|item| item.to_string()).collect()
        }

        DietPlanDocument {
            breakfast: owned(self.breakfast),
            lunch: owned(self.lunch),
            dinner: owned(self.dinner),
            snacks: owned(self.snacks),
            tips: owned(self.tips),
        }
    }
}

static WEIGHT_GAIN_PLAN: PlanTemplate = PlanTemplate {
    breakfast: &[
        "Oatmeal with nuts and fruits",
        "Whole grain toast with avocado and eggs",
        "Protein smoothie with banana and peanut butter",
    ],
    lunch: &[
        "Chicken or tofu wrap with vegetables",
        "Quinoa salad with chickpeas and vegetables",
        "Pasta with meat sauce and side salad",
    ],
    dinner: &[
        "Salmon with sweet potato and vegetables",
        "Lean steak with rice and vegetables",
        "Chicken stir-fry with vegetables and rice",
    ],
    snacks: &[
        "Greek yogurt with honey",
        "Trail mix with nuts and dried fruits",
        "Protein bar",
        "Banana with peanut butter",
    ],
    tips: &[
        "Eat larger portions to gain healthy weight",
        "Focus on protein-rich foods to help build muscle",
        "Include healthy fats like avocados, nuts, and olive oil",
        "Try to eat more frequently throughout the day",
    ],
};

static BALANCED_PLAN: PlanTemplate = PlanTemplate {
    breakfast: &[
        "Greek yogurt with berries and granola",
        "Whole grain toast with avocado and egg",
        "Oatmeal with fruit and nuts",
    ],
    lunch: &[
        "Grilled chicken salad with mixed greens",
        "Turkey and vegetable wrap",
        "Quinoa bowl with vegetables and lean protein",
    ],
    dinner: &[
        "Baked fish with roasted vegetables",
        "Stir-fried tofu with vegetables and brown rice",
        "Lean meat with sweet potato and broccoli",
    ],
    snacks: &[
        "Apple slices with almond butter",
        "Carrot sticks with hummus",
        "Greek yogurt",
        "Handful of mixed nuts",
    ],
    tips: &[
        "Maintain your balanced diet to stay in the healthy weight range",
        "Stay hydrated with water throughout the day",
        "Include a variety of fruits and vegetables for micronutrients",
        "Moderate portion sizes to maintain your weight",
    ],
};

static WEIGHT_LOSS_PLAN: PlanTemplate = PlanTemplate {
    breakfast: &[
        "Vegetable omelette with whole grain toast",
        "Greek yogurt with berries",
        "Overnight oats with chia seeds and fruit",
    ],
    lunch: &[
        "Large salad with grilled chicken and light dressing",
        "Vegetable soup with a side of lean protein",
        "Lettuce wraps with lean ground turkey",
    ],
    dinner: &[
        "Grilled fish with steamed vegetables",
        "Baked chicken with roasted vegetables",
        "Tofu and vegetable stir-fry with small portion of brown rice",
    ],
    snacks: &[
        "Cucumber slices with hummus",
        "Celery with small amount of nut butter",
        "Small apple",
        "Hard-boiled egg",
    ],
    tips: &[
        "Focus on portion control to reduce calorie intake",
        "Include plenty of vegetables to feel full with fewer calories",
        "Choose lean proteins to support muscle maintenance",
        "Stay hydrated as thirst can sometimes be mistaken for hunger",
        "Reduce processed foods and added sugars",
    ],
};

/// The template for a category.
pub fn template_for(category: BmiCategory) -> &'static PlanTemplate {
    match category {
        BmiCategory::Underweight => &WEIGHT_GAIN_PLAN,
        BmiCategory::NormalWeight => &BALANCED_PLAN,
        BmiCategory::Overweight | BmiCategory::Obese => &WEIGHT_LOSS_PLAN,
    }
}

/// The plan document for a category.
pub fn plan_for(category: BmiCategory) -> DietPlanDocument {
    template_for(category).to_document()
}

/// The plan document for a BMI value.
pub fn plan_for_bmi(bmi: f64) -> DietPlanDocument {
    plan_for(BmiCategory::from_bmi(bmi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_list_has_three_to_five_entries() {
        for category in BmiCategory::ALL {
            let template = template_for(category);
            for list in [
                template.breakfast,
                template.lunch,
                template.dinner,
                template.snacks,
                template.tips,
            ] {
                assert!(
                    (3..=5).contains(&list.len()),
                    "{category} has a list with {} entries",
                    list.len()
                );
            }
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        for category in BmiCategory::ALL {
            assert_eq!(plan_for(category), plan_for(category));
        }
    }

    #[test]
    fn test_category_to_template_mapping() {
        assert_eq!(
            plan_for(BmiCategory::Underweight).tips[0],
            "Eat larger portions to gain healthy weight"
        );
        assert_eq!(
            plan_for(BmiCategory::NormalWeight).breakfast[0],
            "Greek yogurt with berries and granola"
        );
        assert_eq!(
            plan_for(BmiCategory::Overweight),
            plan_for(BmiCategory::Obese)
        );
        assert_eq!(plan_for(BmiCategory::Obese).tips.len(), 5);
    }

    #[test]
    fn test_plan_for_bmi_uses_classification_bands() {
        assert_eq!(plan_for_bmi(18.4), plan_for(BmiCategory::Underweight));
        assert_eq!(plan_for_bmi(18.5), plan_for(BmiCategory::NormalWeight));
        assert_eq!(plan_for_bmi(25.0), plan_for(BmiCategory::Overweight));
    }

    #[test]
    fn test_document_serializes_five_ordered_fields() {
        let json = serde_json::to_value(plan_for(BmiCategory::NormalWeight)).unwrap();
        let object = json.as_object().unwrap();
        for key in ["breakfast", "lunch", "dinner", "snacks", "tips"] {
            assert!(object[key].is_array(), "missing {key}");
        }
        assert_eq!(object.len(), 5);
    }
}
