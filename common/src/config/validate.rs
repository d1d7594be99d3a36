pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Fails with `message` unless `value` lies in `range`.
pub fn ensure_in_range<T>(value: T, range: std::ops::RangeInclusive<T>, message: &str) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!("{} (got {})", message, value))
    }
}
