use chrono::{DateTime, Local, Utc};

/// `15847` -> `15,847`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn clock_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(987), "987");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(15847), "15,847");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
