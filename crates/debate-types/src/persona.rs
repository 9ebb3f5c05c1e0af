use serde::{Deserialize, Serialize};

/// A selectable simulated participant, as served by the persona catalog.
/// Referenced by `id` everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub speaking_style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Persona {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            is_premium: false,
            slug: String::new(),
            description: String::new(),
            speaking_style: String::new(),
            avatar_url: None,
        }
    }
}

/// Body of the catalog endpoint: `{ "personas": [...], "total": n }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaCatalog {
    pub personas: Vec<Persona>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}
