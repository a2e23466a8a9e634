use common::Series;
use yew::AttrValue;

/// Fixed monthly values shown until real model output is wired in.
pub fn placeholder_series() -> Series {
    Series::new(
        ["January", "February", "March", "April", "May"],
        vec![65.0, 59.0, 80.0, 81.0, 56.0],
    )
}

pub fn placeholder_prediction() -> AttrValue {
    AttrValue::Static("Sample prediction")
}
