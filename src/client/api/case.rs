//! Key casing between the panel's snake_case wire format and the camelCase the client
//! models deserialize from.
//!
//! Only mapping keys are rewritten. Keys that are not a well-formed identifier in the
//! source convention (environment variable names such as `SERVER_JARFILE`, header-like
//! keys such as `g-recaptcha-response`, numeric keys) are left exactly as they are, which
//! also makes both directions idempotent.

use serde_json::{Map, Value};

/// `serverId` -> `server_id`. Keys that are not lower camelCase are returned unchanged.
pub fn to_snake_case(key: &str) -> String {
    if !is_camel_case(key) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `server_id` -> `serverId`. Keys that are not lower snake_case are returned unchanged.
pub fn to_camel_case(key: &str) -> String {
    if !is_snake_case(key) {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrites every mapping key in `value` to snake_case, recursing through nested
/// mappings and sequences.
pub fn snake_case_keys(value: Value) -> Value {
    transform_keys(value, &to_snake_case)
}

/// Rewrites every mapping key in `value` to camelCase, recursing through nested
/// mappings and sequences.
pub fn camel_case_keys(value: Value) -> Value {
    transform_keys(value, &to_camel_case)
}

fn transform_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (rename(&key), transform_keys(value, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform_keys(item, rename))
                .collect(),
        ),
        scalar => scalar,
    }
}

/// `^[a-z][a-zA-Z0-9]*$`
fn is_camel_case(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^[a-z][a-z0-9]*(_[a-z0-9]+)*$`
fn is_snake_case(key: &str) -> bool {
    let mut chars = key.chars();
    if !matches!(chars.next(), Some(c) if c.is_ascii_lowercase()) {
        return false;
    }

    key.split('_')
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests single key conversion in both directions.
    ///
    /// Expected: camelCase and snake_case map onto each other
    #[test]
    fn converts_single_keys() {
        assert_eq!(to_snake_case("serverId"), "server_id");
        assert_eq!(to_snake_case("isTransferring"), "is_transferring");
        assert_eq!(to_snake_case("ipv4Address"), "ipv4_address");
        assert_eq!(to_camel_case("server_id"), "serverId");
        assert_eq!(to_camel_case("is_transferring"), "isTransferring");
        assert_eq!(to_camel_case("ipv4_address"), "ipv4Address");
    }

    /// Tests that malformed keys pass through untouched.
    ///
    /// Verifies environment variable names, header-like keys, numeric keys and keys
    /// with leading/double underscores are not rewritten.
    ///
    /// Expected: every key returned as given
    #[test]
    fn leaves_malformed_keys_alone() {
        for key in ["SERVER_JARFILE", "g-recaptcha-response", "0", "", "_private", "a__b", "trailing_"] {
            assert_eq!(to_snake_case(key), key);
            assert_eq!(to_camel_case(key), key);
        }
    }

    /// Tests recursion through nested mappings and sequences of mappings.
    ///
    /// Expected: all keys rewritten, scalars and order untouched
    #[test]
    fn transforms_nested_values() {
        let wire = json!({
            "server_owner": true,
            "feature_limits": { "backup_count": 3, "allocation_limit": null },
            "relationships": [
                { "ip_alias": "node.example.com", "port": 25565 },
                { "ip_alias": null, "port": 25566 }
            ],
            "environment": { "SERVER_JARFILE": "server.jar" },
            "tags": ["first_tag", "second_tag"]
        });

        let client = camel_case_keys(wire);

        assert_eq!(
            client,
            json!({
                "serverOwner": true,
                "featureLimits": { "backupCount": 3, "allocationLimit": null },
                "relationships": [
                    { "ipAlias": "node.example.com", "port": 25565 },
                    { "ipAlias": null, "port": 25566 }
                ],
                "environment": { "SERVER_JARFILE": "server.jar" },
                "tags": ["first_tag", "second_tag"]
            })
        );
    }

    /// Tests that scalars are returned unchanged.
    ///
    /// Expected: strings, numbers, booleans and null pass through
    #[test]
    fn passes_scalars_through() {
        for value in [json!("some_value"), json!(12.5), json!(false), Value::Null] {
            assert_eq!(snake_case_keys(value.clone()), value);
            assert_eq!(camel_case_keys(value.clone()), value);
        }
    }

    /// Tests that camelCase input survives a trip through snake_case.
    ///
    /// Expected: the original value
    #[test]
    fn camel_round_trip_restores_value() {
        let value = json!({
            "name": "Survival",
            "dockerImage": "ghcr.io/yolks:java_17",
            "limits": { "memory": 1024, "oomDisabled": true, "ioWeight": 500 },
            "allocations": [{ "isDefault": true, "notes": null }],
            "serverUUID": "abc"
        });

        assert_eq!(camel_case_keys(snake_case_keys(value.clone())), value);
    }

    /// Tests idempotence of each direction.
    ///
    /// Expected: applying a direction twice equals applying it once
    #[test]
    fn transforms_are_idempotent() {
        let value = json!({
            "camelKey": { "nested_key": [{ "innerKey": 1 }] },
            "snake_key": "valueWithCaps",
            "SERVER_PORT": "25565"
        });

        let snake = snake_case_keys(value.clone());
        assert_eq!(snake_case_keys(snake.clone()), snake);

        let camel = camel_case_keys(value);
        assert_eq!(camel_case_keys(camel.clone()), camel);
    }
}
