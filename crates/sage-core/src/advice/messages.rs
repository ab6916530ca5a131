//! The fixed advisory message table
//!
//! Message text lives here, keyed by category or rule, so the evaluator
//! logic and the wording stay independently testable.

use crate::models::Category;

/// Returned alone when no rule produced a finding
pub const ALL_CLEAR: &str = "Looking good! Your finances are so on point, even I'm impressed.";

/// Burn-rate warning: total recent spend ran past 80% of disposable income
pub const BURN_RATE_WARNING: &str =
    "💸 Slow down, money magician! You're burning through cash faster than a lottery winner.";

/// Overspend message for a category whose 30-day total blew past its budget
pub fn overspend_message(category: Category) -> &'static str {
    match category {
        Category::FoodAndDrink => {
            "Whoa, big spender! Your food budget is eating your wallet. Maybe cook at home once in a while?"
        }
        Category::SocialAndEntertainment => {
            "This is an intervention. Your socialising is out of control. Did you really need that extra round of drinks?"
        }
        Category::Shopping => "Your shopping addiction is showing!",
        Category::HolidayAndTravel => {
            "Vacation vibes or broke vibes? Your holiday spending is giving ‘too much sunshine and not enough savings’!"
        }
        Category::HealthAndBeauty => {
            "Your beauty routine is glowing, but your bank balance is looking a little... dull. Maybe cut back on the skincare?"
        }
        Category::Misc => {
            "Miscellaneous spending? More like ‘miscellaneous debt’! Time to cut back on those random splurges."
        }
    }
}

/// Pace warning for a savings goal that is nearly due and well behind
pub fn savings_pace_message(title: &str) -> String {
    format!(
        "Your {} goal is looking slim. Panic mode: activated! 🚨",
        title
    )
}
