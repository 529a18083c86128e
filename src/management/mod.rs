mod collection;

pub use collection::DEFAULT_PAGE_SIZE;
pub use collection::FavoritesCollection;
pub use collection::collect_favorites;
