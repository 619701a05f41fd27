/// Clock port. Implementations report wall-clock time as Unix epoch
/// milliseconds.
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;
}
