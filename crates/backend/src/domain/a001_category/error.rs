use contracts::domain::a001_category::aggregate::CategoryId;
use thiserror::Error;

/// Ошибки бизнес-логики категорий
///
/// Переносятся внутри `anyhow::Error`; обработчики HTTP
/// восстанавливают их через `downcast_ref` и выбирают статус ответа.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Category {0} not found")]
    NotFound(CategoryId),

    #[error("Category {0} already exists")]
    AlreadyExists(CategoryId),
}
