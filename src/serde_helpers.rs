//! Response decoding.
//!
//! With the `tracing` feature enabled, fields the SDK does not model are logged as warnings, and
//! decode failures are logged with the path of the offending field, which helps spot PlayFab API
//! changes before they break a title.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes the `data` member of a PlayFab envelope into `T`.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "decoding PlayFab data");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let json = original.to_string();
        let jd = &mut serde_json::Deserializer::from_str(&json);
        let decoded: Result<T, _> = serde_path_to_error::deserialize(jd);
        if let Err(path_err) = decoded {
            let path = path_err.path().to_string();
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %describe(lookup_value(&original, &path)),
                error = %path_err.inner(),
                "failed to decode PlayFab data"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %describe(lookup_value(&original, &path)),
            "unmodelled field in PlayFab data"
        );
    }

    Ok(result)
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Follows a `serde_ignored` or `serde_path_to_error` path, e.g. `Data.motd.Value` or
/// `Statistics[1].Value`. `?` segments mark `Option` layers and are skipped.
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty() && *segment != "?")
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

#[cfg(feature = "tracing")]
fn describe(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
