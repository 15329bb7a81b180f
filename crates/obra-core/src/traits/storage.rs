use crate::errors::ObraResult;

/// Persistent string key-value store scoped to one client profile.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> ObraResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ObraResult<()>;

    fn remove(&self, key: &str) -> ObraResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> ObraResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ObraResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ObraResult<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> ObraResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ObraResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ObraResult<()> {
        (**self).remove(key)
    }
}
