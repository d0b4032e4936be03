//! Dashboard content descriptors
//!
//! Static configuration for the quick action and stat cards, plus the
//! greeting and section headings shown on `/`.

use serde::Serialize;

use mealprep_core::{paths, CardVariant, CurrentUser, Icon, StatVariant};

pub const WELCOME_TEXT: &str = "Welcome back! Let's get cooking today.";
pub const ACTIVITY_HEADING: &str = "Your Activity";
pub const QUICK_ACTIONS_HEADING: &str = "Quick Actions";
pub const GET_STARTED_HEADING: &str = "Get Started with MealPrepper";
pub const GET_STARTED_TEXT: &str =
    "Start creating recipes and meal plans to make the most of MealPrepper.";
pub const GET_STARTED_LINK: &str = "Create Your First Recipe";
pub const GET_STARTED_TEST_ID: &str = "get-started-link";

/// A navigational shortcut tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickActionDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub action_label: &'static str,
    pub href: &'static str,
    pub variant: CardVariant,
    pub badge: Option<&'static str>,
    pub test_id: &'static str,
}

impl QuickActionDescriptor {
    /// Label announced for the card's action link
    pub fn accessible_label(&self) -> String {
        format!("{}: {}", self.title, self.action_label)
    }
}

pub static QUICK_ACTIONS: [QuickActionDescriptor; 4] = [
    QuickActionDescriptor {
        icon: Icon::Utensils,
        title: "View Recipes",
        description: Some("Browse and manage your recipes"),
        action_label: "View Recipes",
        href: paths::RECIPES,
        variant: CardVariant::Default,
        badge: None,
        test_id: "quick-action-recipes",
    },
    QuickActionDescriptor {
        icon: Icon::Calendar,
        title: "Create Meal Plan",
        description: Some("Plan your weekly meals"),
        action_label: "Create Plan",
        href: paths::MEAL_PLANS,
        variant: CardVariant::Default,
        badge: None,
        test_id: "quick-action-meal-plans",
    },
    QuickActionDescriptor {
        icon: Icon::ShoppingCart,
        title: "Shopping List",
        description: Some("Organize your shopping"),
        action_label: "View List",
        href: paths::SHOPPING_LIST,
        variant: CardVariant::Default,
        badge: None,
        test_id: "quick-action-shopping-list",
    },
    QuickActionDescriptor {
        icon: Icon::Briefcase,
        title: "Your Items",
        description: Some("Manage your food items"),
        action_label: "View Items",
        href: paths::ITEMS,
        variant: CardVariant::Default,
        badge: None,
        test_id: "quick-action-items",
    },
];

/// Look up a quick action by test id or (case-insensitive) title / action label
pub fn find_quick_action(needle: &str) -> Option<&'static QuickActionDescriptor> {
    QUICK_ACTIONS.iter().find(|a| {
        a.test_id == needle
            || a.title.eq_ignore_ascii_case(needle)
            || a.action_label.eq_ignore_ascii_case(needle)
    })
}

/// Counts shown in the "Your Activity" section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub items: u32,
    pub recipes: u32,
    pub meal_plans: u32,
}

/// A summary statistic tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatDescriptor {
    pub label: &'static str,
    pub value: String,
    pub icon: Icon,
    pub variant: StatVariant,
    pub test_id: &'static str,
}

/// Stat cards in display order: Your Items, Recipes, Meal Plans
pub fn stat_cards(stats: &DashboardStats) -> [StatDescriptor; 3] {
    [
        StatDescriptor {
            label: "Your Items",
            value: stats.items.to_string(),
            icon: Icon::Briefcase,
            variant: StatVariant::Info,
            test_id: "stat-items",
        },
        StatDescriptor {
            label: "Recipes",
            value: stats.recipes.to_string(),
            icon: Icon::ChefHat,
            variant: StatVariant::Success,
            test_id: "stat-recipes",
        },
        StatDescriptor {
            label: "Meal Plans",
            value: stats.meal_plans.to_string(),
            icon: Icon::Calendar,
            variant: StatVariant::Warning,
            test_id: "stat-meal-plans",
        },
    ]
}

/// Level-1 greeting, e.g. `"Hi, Ada 👋"`
pub fn greeting(user: Option<&CurrentUser>) -> String {
    let name = user.map(|u| u.display_name()).unwrap_or("there");
    format!("Hi, {} 👋", name)
}
