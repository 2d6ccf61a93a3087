const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Human readable size using binary units, e.g. `1.50 KiB`.
pub fn bytes_to_string(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, UNITS[unit])
}

pub fn megabytes_to_bytes(megabytes: u64) -> u64 {
    megabytes.saturating_mul(1024 * 1024)
}

/// IPv6 literals are wrapped in brackets so a port can be appended.
pub fn format_ip(ip: &str) -> String {
    if ip.contains(':') && !ip.starts_with('[') {
        format!("[{}]", ip)
    } else {
        ip.to_string()
    }
}

/// Memory/disk limits of `0` mean unlimited.
pub fn format_limit(megabytes: u64) -> String {
    if megabytes == 0 {
        "Unlimited".to_string()
    } else {
        bytes_to_string(megabytes_to_bytes(megabytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests size formatting across units.
    ///
    /// Expected: bytes shown raw, larger sizes with two decimals
    #[test]
    fn formats_bytes() {
        assert_eq!(bytes_to_string(0), "0 B");
        assert_eq!(bytes_to_string(1023), "1023 B");
        assert_eq!(bytes_to_string(1536), "1.50 KiB");
        assert_eq!(bytes_to_string(megabytes_to_bytes(1024)), "1.00 GiB");
        assert_eq!(bytes_to_string(u64::MAX), "16777216.00 TiB");
    }

    /// Tests IP formatting.
    ///
    /// Expected: only bare IPv6 addresses are bracketed
    #[test]
    fn formats_ips() {
        assert_eq!(format_ip("10.0.0.1"), "10.0.0.1");
        assert_eq!(format_ip("2001:db8::1"), "[2001:db8::1]");
        assert_eq!(format_ip("[::1]"), "[::1]");
    }

    /// Tests unlimited resource display.
    ///
    /// Expected: zero is unlimited, anything else a size
    #[test]
    fn formats_limits() {
        assert_eq!(format_limit(0), "Unlimited");
        assert_eq!(format_limit(512), "512.00 MiB");
    }
}
