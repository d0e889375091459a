use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("kuro_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is not an error, it only means nothing was stored yet
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("kuro_{}", key);

    stored_value(&key, LocalStorage::get(key.clone()))
}

fn stored_value<T>(key: &str, result: Result<T, StorageError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            Err(anyhow::Error::msg("Local storage failure, see console log"))
        }
    }
}

// preferences that survive a reload
//
// anything stored this way falls back to a default when the key is missing
// or unreadable, so callers never have to handle the storage error
pub trait StoredPreference
where
    Self: Serialize,
    Self: for<'a> Deserialize<'a>,
{
    const KEY: &'static str;

    fn store(&self) -> ();

    fn fetch_or(default: Self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_not_a_failure() {
        let result: Result<u8, StorageError> = Err(StorageError::KeyNotFound(String::from("kuro_theme")));
        assert_eq!(stored_value("kuro_theme", result).unwrap(), None);
    }

    #[test]
    fn stored_value_is_returned() {
        assert_eq!(stored_value("kuro_theme", Ok(7u8)).unwrap(), Some(7));
    }
}
