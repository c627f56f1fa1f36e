use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Course {
    #[default]
    Starters,
    Mains,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starters, Course::Mains, Course::Dessert];

    pub fn as_str(&self) -> &str {
        match self {
            Course::Starters => "Starters",
            Course::Mains => "Mains",
            Course::Dessert => "Dessert",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Course::Starters => 0,
            Course::Mains => 1,
            Course::Dessert => 2,
        }
    }

    /// Next course in selector order, wrapping after Dessert
    pub fn next(&self) -> Course {
        Course::ALL[(self.index() + 1) % Course::ALL.len()]
    }

    pub fn previous(&self) -> Course {
        Course::ALL[(self.index() + Course::ALL.len() - 1) % Course::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starters" | "starter" => Ok(Course::Starters),
            "mains" | "main" => Ok(Course::Mains),
            "dessert" | "desserts" => Ok(Course::Dessert),
            other => Err(anyhow::anyhow!(
                "Unknown course: {}. Supported courses: Starters, Mains, Dessert",
                other
            )),
        }
    }
}

/// One dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl MenuItem {
    /// Copy of this item under a different id
    pub fn with_id(&self, id: String) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }
}

/// Raw form values, untrimmed, as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl MenuDraft {
    pub fn new(dish_name: &str, description: &str, course: Course, price: &str) -> Self {
        Self {
            dish_name: dish_name.to_string(),
            description: description.to_string(),
            course,
            price: price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_cycle_wraps() {
        assert_eq!(Course::Starters.next(), Course::Mains);
        assert_eq!(Course::Dessert.next(), Course::Starters);
        assert_eq!(Course::Starters.previous(), Course::Dessert);
        assert_eq!(Course::default(), Course::Starters);
    }

    #[test]
    fn test_course_parse() {
        assert_eq!("mains".parse::<Course>().unwrap(), Course::Mains);
        assert_eq!(" Dessert ".parse::<Course>().unwrap(), Course::Dessert);
        assert!("soup".parse::<Course>().is_err());
    }

    #[test]
    fn test_menu_item_json_omits_missing_image() {
        let item = MenuItem {
            id: "1".to_string(),
            dish_name: "Garlic Shrimp".to_string(),
            description: "Shrimp".to_string(),
            course: Course::Starters,
            price: "12.50".to_string(),
            image_url: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("image_url"));
        assert!(json.contains("\"course\":\"Starters\""));
    }
}
