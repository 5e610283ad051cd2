use serde::{Deserialize, Serialize, Serializer};

/// Quantity of an ingredient.
///
/// Clean numbers (integers, decimals, fractions, mixed numbers) are stored
/// as `Number`; everything else, ranges included, keeps its original text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Amount::Number(n) => Some(*n),
            Amount::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Amount::Number(_) => None,
            Amount::Text(t) => Some(t),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // whole numbers go out as JSON integers: 500, not 500.0
            Amount::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            Amount::Number(n) => serializer.serialize_f64(*n),
            Amount::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

/// One parsed ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Option<Amount>,
    #[serde(rename = "units", alias = "unit")]
    pub unit: Option<String>,
}

impl Ingredient {
    /// An ingredient with no quantity information.
    pub fn named(name: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            amount: None,
            unit: None,
        }
    }
}

/// Everything extracted from one HTML document.
///
/// Every key is always serialized; fields that could not be located are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub dish_name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<String>,
    pub category: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<String>,
    pub image_urls: Option<String>,
    pub nutrition_info: Option<String>,
}

impl RecipeRecord {
    /// Serialized keys, in output order.
    pub const KEYS: [&'static str; 12] = [
        "dish_name",
        "description",
        "ingredients",
        "instructions",
        "category",
        "prep_time",
        "cook_time",
        "total_time",
        "notes",
        "tags",
        "image_urls",
        "nutrition_info",
    ];
}
