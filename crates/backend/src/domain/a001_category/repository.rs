use super::CategoryError;
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::shared::filter::ListQuery;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category::new(CategoryId::new(m.id), m.name)
    }
}

fn active_model(aggregate: &Category) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.value()),
        name: Set(aggregate.name.clone()),
    }
}

const LIKE_ESCAPE: char = '\\';

/// Шаблон LIKE для поиска подстроки: `%` и `_` в тексте ищутся буквально
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Список категорий по ID с фильтрами запроса.
///
/// Нечисловой фильтр по ID не может совпасть ни с одной записью.
pub async fn list<C: ConnectionTrait>(db: &C, query: &ListQuery) -> anyhow::Result<Vec<Category>> {
    let mut select = Entity::find().order_by_asc(Column::Id);
    if let Some(id) = &query.id {
        match id.trim().parse::<i32>() {
            Ok(id) => select = select.filter(Column::Id.eq(id)),
            Err(_) => return Ok(Vec::new()),
        }
    }
    if let Some(name) = &query.name_contains {
        let pattern = LikeExpr::new(contains_pattern(name)).escape(LIKE_ESCAPE);
        select = select.filter(Expr::col((Entity, Column::Name)).like(pattern));
    }
    if let Some(top) = query.top {
        select = select.limit(top);
    }
    let items = select.all(db).await?.into_iter().map(Into::into).collect();
    Ok(items)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: CategoryId) -> anyhow::Result<Option<Category>> {
    let result = Entity::find_by_id(id.value()).one(db).await?;
    Ok(result.map(Into::into))
}

/// Вставка новой записи; занятый ID даёт `CategoryError::AlreadyExists`
pub async fn insert<C: ConnectionTrait>(db: &C, aggregate: &Category) -> anyhow::Result<CategoryId> {
    match active_model(aggregate).insert(db).await {
        Ok(_) => Ok(aggregate.id),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(CategoryError::AlreadyExists(aggregate.id).into())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update<C: ConnectionTrait>(db: &C, aggregate: &Category) -> anyhow::Result<()> {
    active_model(aggregate).update(db).await?;
    Ok(())
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: CategoryId) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.value()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_database;

    #[tokio::test]
    async fn test_insert_and_list_ordered() {
        let db = memory_database().await;
        insert(&db, &Category::new(CategoryId(3), "Confections")).await.unwrap();
        insert(&db, &Category::new(CategoryId(1), "Beverages")).await.unwrap();

        let items = list(&db, &ListQuery::default()).await.unwrap();
        let ids: Vec<i32> = items.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_list_filters_and_top() {
        let db = memory_database().await;
        for (id, name) in [(1, "Beverages"), (2, "Condiments"), (3, "Confections")] {
            insert(&db, &Category::new(CategoryId(id), name)).await.unwrap();
        }

        let by_name = ListQuery {
            name_contains: Some("Con".into()),
            ..Default::default()
        };
        assert_eq!(list(&db, &by_name).await.unwrap().len(), 2);

        let by_id = ListQuery {
            id: Some("3".into()),
            ..Default::default()
        };
        assert_eq!(
            list(&db, &by_id).await.unwrap(),
            vec![Category::new(CategoryId(3), "Confections")]
        );

        let bad_id = ListQuery {
            id: Some("abc".into()),
            ..Default::default()
        };
        assert!(list(&db, &bad_id).await.unwrap().is_empty());

        let top = ListQuery {
            top: Some(1),
            ..Default::default()
        };
        assert_eq!(list(&db, &top).await.unwrap().len(), 1);
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Sea"), "%Sea%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }

    #[tokio::test]
    async fn test_name_search_treats_wildcards_literally() {
        let db = memory_database().await;
        for (id, name) in [(1, "Beverages"), (2, "100% Juice"), (3, "Fresh_Fish")] {
            insert(&db, &Category::new(CategoryId(id), name)).await.unwrap();
        }

        let names = |items: Vec<Category>| items.into_iter().map(|c| c.name).collect::<Vec<_>>();
        let search = |text: &str| ListQuery {
            name_contains: Some(text.into()),
            ..Default::default()
        };

        assert_eq!(names(list(&db, &search("_")).await.unwrap()), vec!["Fresh_Fish"]);
        assert_eq!(names(list(&db, &search("%")).await.unwrap()), vec!["100% Juice"]);
        assert_eq!(names(list(&db, &search("0% J")).await.unwrap()), vec!["100% Juice"]);
        assert!(list(&db, &search("\\")).await.unwrap().is_empty());
        assert_eq!(list(&db, &search("juice")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_already_exists() {
        let db = memory_database().await;
        insert(&db, &Category::new(CategoryId(4), "Dairy")).await.unwrap();

        let err = insert(&db, &Category::new(CategoryId(4), "Cheese")).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<CategoryError>(),
            Some(&CategoryError::AlreadyExists(CategoryId(4)))
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = memory_database().await;
        insert(&db, &Category::new(CategoryId(7), "Produce")).await.unwrap();

        update(&db, &Category::new(CategoryId(7), "Fresh Produce")).await.unwrap();
        let found = get_by_id(&db, CategoryId(7)).await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Fresh Produce".to_string()));

        assert!(delete(&db, CategoryId(7)).await.unwrap());
        assert!(!delete(&db, CategoryId(7)).await.unwrap());
        assert!(get_by_id(&db, CategoryId(7)).await.unwrap().is_none());
    }
}
