pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_OFFSET_PX: i32 = 0;

pub const SCROLL_EVENT: &str = "scroll";
