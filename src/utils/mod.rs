mod time_utils;

pub use time_utils::{AppInstant, epoch_sec_to_label, format_elapsed};
