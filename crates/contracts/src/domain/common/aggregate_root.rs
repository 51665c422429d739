/// Трейт для корня агрегата
///
/// Определяет ключ записи и статические метаданные коллекции
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: super::AggregateId;

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Имя коллекции на удалённом сервисе (например, "Categories")
    fn collection_name() -> &'static str;

    /// Путь коллекции, например "/Categories"
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Путь к конкретной записи, например "/Categories(42)"
    fn key_path(&self) -> String {
        super::create_key(&Self::collection_path(), &self.id())
    }
}
