use super::{repository, CategoryError};
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::shared::filter::ListQuery;
use sea_orm::ConnectionTrait;

/// Создание новой категории
pub async fn create<C: ConnectionTrait>(db: &C, dto: Category) -> anyhow::Result<CategoryId> {
    let mut aggregate = dto;

    // Before write
    aggregate.before_write();

    // Валидация
    aggregate.validate().map_err(CategoryError::Validation)?;

    // Занятый ID отклоняется ограничением PRIMARY KEY при вставке
    let id = repository::insert(db, &aggregate).await?;
    tracing::info!("Category {} created", id);
    Ok(id)
}

/// Обновление существующей категории. ID в пути и в теле должны совпадать.
pub async fn update<C: ConnectionTrait>(db: &C, id: CategoryId, dto: Category) -> anyhow::Result<()> {
    if dto.id != id {
        return Err(CategoryError::Validation(format!(
            "ID in path ({}) differs from ID in body ({})",
            id, dto.id
        ))
        .into());
    }

    let mut aggregate = repository::get_by_id(db, id)
        .await?
        .ok_or(CategoryError::NotFound(id))?;

    aggregate.update(&dto);
    aggregate.before_write();
    aggregate.validate().map_err(CategoryError::Validation)?;

    repository::update(db, &aggregate).await?;
    tracing::info!("Category {} updated", id);
    Ok(())
}

/// Удаление категории
pub async fn delete<C: ConnectionTrait>(db: &C, id: CategoryId) -> anyhow::Result<()> {
    if !repository::delete(db, id).await? {
        return Err(CategoryError::NotFound(id).into());
    }
    tracing::info!("Category {} deleted", id);
    Ok(())
}

/// Получение категории по ID
pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: CategoryId) -> anyhow::Result<Option<Category>> {
    repository::get_by_id(db, id).await
}

/// Получение списка категорий с фильтрами
pub async fn list<C: ConnectionTrait>(db: &C, query: &ListQuery) -> anyhow::Result<Vec<Category>> {
    repository::list(db, query).await
}

/// Вставка тестовых данных (существующие ID пропускаются)
pub async fn insert_test_data<C: ConnectionTrait>(db: &C) -> anyhow::Result<usize> {
    let data = [
        (1, "Beverages"),
        (2, "Condiments"),
        (3, "Confections"),
        (4, "Dairy Products"),
        (5, "Grains/Cereals"),
        (6, "Meat/Poultry"),
        (7, "Produce"),
        (8, "Seafood"),
    ];

    let mut inserted = 0;
    for (id, name) in data {
        let id = CategoryId::new(id);
        if repository::get_by_id(db, id).await?.is_some() {
            continue;
        }
        create(db, Category::new(id, name)).await?;
        inserted += 1;
    }

    Ok(inserted)
}
