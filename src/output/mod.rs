pub mod formatter;

pub use formatter::{
    display_name, format_climbers, format_leaderboard, format_member, format_message,
    should_use_colors, DEFAULT_HEADER,
};
