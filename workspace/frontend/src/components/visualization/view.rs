use common::Series;
use yew::prelude::*;

use super::chart::{ChartData, LineChart};

pub const INVALID_DATA_TEXT: &str = "Invalid data";

#[derive(Properties, PartialEq)]
pub struct VisualizationProps {
    pub series: Series,
    #[prop_or(AttrValue::Static("chart-predictions"))]
    pub element_id: AttrValue,
}

#[function_component(Visualization)]
pub fn visualization(props: &VisualizationProps) -> Html {
    let Some(data) = ChartData::from_series(&props.series) else {
        log::warn!("Refusing to draw series without labels or values");
        return html! { <div class="alert alert-warning">{INVALID_DATA_TEXT}</div> };
    };

    html! {
        <div>
            <h2 class="card-title">{"Visualization"}</h2>
            <LineChart data={data} element_id={props.element_id.clone()} />
        </div>
    }
}
