pub mod carousel;
pub mod scale;
pub mod series_store;
pub mod time_labels;
pub mod transform;
pub mod types;
pub mod windowing;

pub use carousel::{CarouselRole, CarouselSlot, LabelCarousel, ScaleShift};
pub use scale::{ScaleResult, compute_scale, format_scale_label};
pub use series_store::{ChartInput, ColumnType, Series, SeriesStore, TimeAxis};
pub use time_labels::{LabelStripPosition, TimeLabelStrip, format_date_label};
pub use transform::{
    TransformMemo, TransformUpdate, VerticalTransform, ViewBox, ViewTransform,
    compute_view_transform, master_view_box, master_width,
};
pub use types::{MIN_WIDTH_FRACTION, SampleRange, Window};
pub use windowing::{resolve_sample_range, viewed_time_bounds};
