//! Domain models for Sage

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six fixed spending categories used for budgeting and advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    FoodAndDrink,
    SocialAndEntertainment,
    Shopping,
    HolidayAndTravel,
    HealthAndBeauty,
    Misc,
}

impl Category {
    /// All categories, in the order the overspend rules are checked
    pub const ALL: [Category; 6] = [
        Category::FoodAndDrink,
        Category::SocialAndEntertainment,
        Category::Shopping,
        Category::HolidayAndTravel,
        Category::HealthAndBeauty,
        Category::Misc,
    ];

    /// The label as stored on diary entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDrink => "Food and Drink",
            Self::SocialAndEntertainment => "Social and Entertainment",
            Self::Shopping => "Shopping",
            Self::HolidayAndTravel => "Holiday and Travel",
            Self::HealthAndBeauty => "Health and Beauty",
            Self::Misc => "Misc",
        }
    }

    /// Parse a stored label. Unknown labels are not an error; entries keep
    /// whatever label they were created with and land in the unrecognized
    /// bucket during aggregation.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Food and Drink" => Some(Self::FoodAndDrink),
            "Social and Entertainment" => Some(Self::SocialAndEntertainment),
            "Shopping" => Some(Self::Shopping),
            "Holiday and Travel" => Some(Self::HolidayAndTravel),
            "Health and Beauty" => Some(Self::HealthAndBeauty),
            "Misc" => Some(Self::Misc),
            _ => None,
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered user with budget goals and savings state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub food_and_drink_goal: Decimal,
    pub social_and_entertainment_goal: Decimal,
    pub shopping_goal: Decimal,
    pub holiday_and_travel_goal: Decimal,
    pub health_and_beauty_goal: Decimal,
    pub misc_goal: Decimal,
    /// Account-wide savings balance. Every savings goal is judged against
    /// this single figure.
    pub current_savings: Decimal,
    /// Monthly disposable income, the burn-rate reference amount
    pub disposable_income: Decimal,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Budget goal for a category. Goals default to zero, so a category with
    /// no goal and no spend never trips the overspend rule (0 > 0 is false).
    pub fn budget_goal(&self, category: Category) -> Decimal {
        match category {
            Category::FoodAndDrink => self.food_and_drink_goal,
            Category::SocialAndEntertainment => self.social_and_entertainment_goal,
            Category::Shopping => self.shopping_goal,
            Category::HolidayAndTravel => self.holiday_and_travel_goal,
            Category::HealthAndBeauty => self.health_and_beauty_goal,
            Category::Misc => self.misc_goal,
        }
    }
}

/// Partial update for a user's spending goals and income figures.
/// Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpendingGoalsUpdate {
    pub food_and_drink_goal: Option<Decimal>,
    pub social_and_entertainment_goal: Option<Decimal>,
    pub shopping_goal: Option<Decimal>,
    pub holiday_and_travel_goal: Option<Decimal>,
    pub health_and_beauty_goal: Option<Decimal>,
    pub misc_goal: Option<Decimal>,
    pub current_savings: Option<Decimal>,
    pub disposable_income: Option<Decimal>,
}

impl SpendingGoalsUpdate {
    pub fn is_empty(&self) -> bool {
        self.food_and_drink_goal.is_none()
            && self.social_and_entertainment_goal.is_none()
            && self.shopping_goal.is_none()
            && self.holiday_and_travel_goal.is_none()
            && self.health_and_beauty_goal.is_none()
            && self.misc_goal.is_none()
            && self.current_savings.is_none()
            && self.disposable_income.is_none()
    }
}

/// A recorded expense (diary entry)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    pub user_id: i64,
    /// Category label exactly as entered. Usually one of the six fixed
    /// labels, but arbitrary strings are tolerated.
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A diary entry before insertion
#[derive(Debug, Clone)]
pub struct NewDiaryEntry {
    pub user_id: i64,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// A savings goal: a target amount and a deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub target: Decimal,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A savings goal before insertion
#[derive(Debug, Clone)]
pub struct NewSavingsGoal {
    pub user_id: i64,
    pub title: String,
    pub target: Decimal,
    pub end_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(Category::parse("Groceries"), None);
        assert_eq!(Category::parse("food and drink"), None); // case-sensitive
        assert!("Groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_budget_goal_lookup() {
        let user = User {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            food_and_drink_goal: dec!(100),
            social_and_entertainment_goal: dec!(50),
            shopping_goal: Decimal::ZERO,
            holiday_and_travel_goal: Decimal::ZERO,
            health_and_beauty_goal: Decimal::ZERO,
            misc_goal: dec!(25),
            current_savings: Decimal::ZERO,
            disposable_income: dec!(1000),
            created_at: chrono::Utc::now(),
        };

        assert_eq!(user.budget_goal(Category::FoodAndDrink), dec!(100));
        assert_eq!(user.budget_goal(Category::Misc), dec!(25));
        assert_eq!(user.budget_goal(Category::Shopping), Decimal::ZERO);
    }
}
