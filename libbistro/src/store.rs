//! In-memory meal selection state
//!
//! `MealStore` owns the meals of the latest fetch and the id of the meal
//! currently being viewed. It is single-writer: the UI event loop replaces the
//! batch and resolves lookups on the same thread.

use crate::types::Meal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealStore {
    meals: Vec<Meal>,
    viewing: Option<String>,
}

impl MealStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store already holding `meals`
    pub fn with_meals(meals: Vec<Meal>) -> Self {
        Self {
            meals,
            viewing: None,
        }
    }

    /// Replace the held collection wholesale
    ///
    /// The viewed id is kept; it may no longer resolve after the swap.
    pub fn set_meals(&mut self, meals: Vec<Meal>) {
        tracing::debug!(count = meals.len(), "Replacing meal batch");
        self.meals = meals;
    }

    /// First meal whose id equals `id`, by linear scan
    pub fn find_by_id(&self, id: &str) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Record `id` as the meal being viewed
    pub fn view(&mut self, id: impl Into<String>) {
        self.viewing = Some(id.into());
    }

    pub fn clear_view(&mut self) {
        self.viewing = None;
    }

    pub fn viewing(&self) -> Option<&str> {
        self.viewing.as_deref()
    }

    /// The viewed meal, if its id is present in the current batch
    pub fn viewed(&self) -> Option<&Meal> {
        self.viewing.as_deref().and_then(|id| self.find_by_id(id))
    }
}
