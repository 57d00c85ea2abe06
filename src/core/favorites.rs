use crate::core::session::SessionContext;
use crate::services::{KeyValueStore, StoreError};

/// Durable-store key for favorites when no user is known
pub const GLOBAL_FAVORITES_KEY: &str = "dogFavorites";

/// Add `id` if absent, remove it if present
///
/// The relative order of the remaining ids is kept; new ids go last.
pub fn toggle_favorite(current: &[String], id: &str) -> Vec<String> {
    if current.iter().any(|f| f == id) {
        current.iter().filter(|f| *f != id).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(id.to_string());
        next
    }
}

/// Storage key for a user's favorites, `dogFavorites_<email>`
pub fn favorites_key_for(email: &str) -> String {
    format!("{}_{}", GLOBAL_FAVORITES_KEY, email)
}

pub fn favorites_key(context: Option<&SessionContext>) -> String {
    match context {
        Some(ctx) => favorites_key_for(&ctx.email),
        None => GLOBAL_FAVORITES_KEY.to_string(),
    }
}

pub fn load_favorites<S: KeyValueStore>(
    store: &S,
    context: Option<&SessionContext>,
) -> Vec<String> {
    store
        .get_json(&favorites_key(context))
        .unwrap_or_default()
}

pub fn save_favorites<S: KeyValueStore>(
    store: &mut S,
    context: Option<&SessionContext>,
    favorites: &[String],
) -> Result<(), StoreError> {
    store.set_json(&favorites_key(context), favorites)
}

/// Toggle one id and persist the result before returning it
pub fn toggle_and_save<S: KeyValueStore>(
    store: &mut S,
    context: Option<&SessionContext>,
    id: &str,
) -> Result<Vec<String>, StoreError> {
    let current = load_favorites(store, context);
    let next = toggle_favorite(&current, id);
    save_favorites(store, context, &next)?;

    tracing::debug!("Favorites now hold {} dogs", next.len());

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStore;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_toggle_adds_to_empty() {
        assert_eq!(toggle_favorite(&[], "d1"), ids(&["d1"]));
    }

    #[test]
    fn test_toggle_removes_and_keeps_order() {
        assert_eq!(toggle_favorite(&ids(&["d1", "d2"]), "d1"), ids(&["d2"]));
        assert_eq!(toggle_favorite(&ids(&["d1", "d2", "d3"]), "d2"), ids(&["d1", "d3"]));
    }

    #[test]
    fn test_toggle_appends() {
        assert_eq!(toggle_favorite(&ids(&["d1"]), "d2"), ids(&["d1", "d2"]));
    }

    #[test]
    fn test_favorites_scoped_by_user() {
        let mut store = MemoryStore::new();
        let ctx = SessionContext::new("Jo", "jo@example.com", false);

        toggle_and_save(&mut store, Some(&ctx), "d1").unwrap();
        toggle_and_save(&mut store, None, "d9").unwrap();

        assert_eq!(load_favorites(&store, Some(&ctx)), ids(&["d1"]));
        assert_eq!(load_favorites(&store, None), ids(&["d9"]));
        assert_eq!(
            store.get("dogFavorites_jo@example.com").as_deref(),
            Some(r#"["d1"]"#)
        );
    }
}
