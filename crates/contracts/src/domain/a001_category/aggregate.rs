use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

/// Максимальная длина наименования категории
pub const NAME_MAX_LEN: usize = 255;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор категории (целочисленный ключ, задаётся пользователем)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i32);

impl CategoryId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Разобрать ID из текста поля ввода.
    ///
    /// Пустой, нечисловой, нулевой или отрицательный ввод отклоняется.
    pub fn parse_input(text: &str) -> Result<Self, String> {
        let id = text
            .trim()
            .parse::<i32>()
            .map_err(|_| format!("ID must be a positive integer, got '{}'", text))?;
        if id <= 0 {
            return Err(format!("ID must be a positive integer, got {}", id));
        }
        Ok(Self(id))
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i32>()
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid category ID: {}", e))
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория товаров
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "ID")]
    pub id: CategoryId,

    #[serde(rename = "Name")]
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Обновить данные из DTO (ID не меняется)
    pub fn update(&mut self, other: &Category) {
        self.name = other.name.clone();
    }

    /// Привести поля к каноническому виду перед записью
    pub fn before_write(&mut self) {
        self.name = self.name.trim().to_string();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.id.value() <= 0 {
            return Err("ID must be a positive integer".into());
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name must not be empty".into());
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(format!("Name must not exceed {} characters", NAME_MAX_LEN));
        }
        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn collection_name() -> &'static str {
        "Categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let c = Category::new(CategoryId(42), "Beverages");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"ID":42,"Name":"Beverages"}"#);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(CategoryId::parse_input("42"), Ok(CategoryId(42)));
        assert_eq!(CategoryId::parse_input(" 7 "), Ok(CategoryId(7)));
        assert!(CategoryId::parse_input("").is_err());
        assert!(CategoryId::parse_input("0").is_err());
        assert!(CategoryId::parse_input("-3").is_err());
        assert!(CategoryId::parse_input("abc").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Category::new(CategoryId(1), "Dairy").validate().is_ok());
        assert!(Category::new(CategoryId(1), "   ").validate().is_err());
        assert!(Category::new(CategoryId(0), "Dairy").validate().is_err());
        let long = "x".repeat(NAME_MAX_LEN + 1);
        assert!(Category::new(CategoryId(1), long).validate().is_err());
    }

    #[test]
    fn test_key_path() {
        let c = Category::new(CategoryId(5), "Seafood");
        assert_eq!(Category::collection_path(), "/Categories");
        assert_eq!(c.key_path(), "/Categories(5)");
    }

    #[test]
    fn test_before_write_trims_name() {
        let mut c = Category::new(CategoryId(5), "  Seafood ");
        c.before_write();
        assert_eq!(c.name, "Seafood");
    }
}
