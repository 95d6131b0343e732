//! Input checks used before building list-selector URLs.

use crate::error::Error;

/// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff`, and Cisco dotted
/// `aabb.ccdd.eeff`, case-insensitively.
pub fn is_valid_mac(mac: &str) -> bool {
    mac_digits(mac).is_some()
}

/// Normalise a MAC address to lower-case colon form.
pub fn normalize_mac(mac: &str) -> Result<String, Error> {
    let digits = mac_digits(mac).ok_or_else(|| Error::Validation {
        field: "mac".into(),
        reason: format!("'{mac}' is not a MAC address"),
    })?;
    let pairs: Vec<&str> = digits
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect();
    Ok(pairs.join(":"))
}

/// Reject empty or whitespace-only values.
pub fn ensure_not_empty(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            reason: "cannot be empty".into(),
        });
    }
    Ok(())
}

/// The twelve hex digits of a MAC, lower-cased, if `mac` is well-formed.
fn mac_digits(mac: &str) -> Option<String> {
    let groups: Vec<&str> = if mac.contains(':') {
        mac.split(':').collect()
    } else if mac.contains('-') {
        mac.split('-').collect()
    } else {
        mac.split('.').collect()
    };

    let width = match groups.len() {
        6 => 2,
        3 if mac.contains('.') => 4,
        _ => return None,
    };

    if !groups
        .iter()
        .all(|g| g.len() == width && g.chars().all(|c| c.is_ascii_hexdigit()))
    {
        return None;
    }

    Some(groups.concat().to_ascii_lowercase())
}
