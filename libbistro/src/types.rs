//! Core types for Bistro

use serde::{Deserialize, Deserializer, Serialize};

/// A recipe record as served by TheMealDB.
///
/// Field names on the wire follow the API (`idMeal`, `strMeal`, ...). Text
/// fields that the API sends as `null` or omits become empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,

    #[serde(rename = "strMeal", default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(rename = "strMealThumb", default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,

    #[serde(rename = "strCategory", default, deserialize_with = "null_as_empty")]
    pub category: String,

    #[serde(rename = "strInstructions", default, deserialize_with = "null_as_empty")]
    pub instructions: String,
}

impl Meal {
    /// Create a meal with only an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            thumbnail: String::new(),
            category: String::new(),
            instructions: String::new(),
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}

/// Response envelope of `search.php`: `{"meals": [...]}` or `{"meals": null}`
#[derive(Debug, Clone, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl MealsEnvelope {
    /// Unwrap into a batch; `null` is an empty batch
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
