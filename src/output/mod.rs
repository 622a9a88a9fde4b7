pub mod chart;
pub mod formatter;
pub mod showcase;

pub use chart::format_chart;
pub use formatter::{
    format_board, format_points, get_terminal_width, ordinal, should_use_colors, truncate_name,
};
pub use showcase::format_top;
