pub mod boundaries;
pub mod hit_test;
pub mod line;
pub mod line_index;
pub mod movement;
pub mod position;
pub mod selection;
pub mod wrap;

pub use boundaries::{WordRun, break_opportunities, word_runs};
pub use hit_test::{caret_rect, caret_x, position_at_point, selection_rects};
pub use line::WrappedLine;
pub use line_index::LineTable;
pub use position::Position;
pub use selection::SelectionModel;
pub use wrap::{CharMeasure, WrapMode, wrap_text};
