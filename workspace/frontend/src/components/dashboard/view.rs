use yew::prelude::*;

use crate::components::explanation::Explanation;
use crate::components::upload::DataUpload;
use crate::components::visualization::Visualization;
use crate::mock_data::{placeholder_prediction, placeholder_series};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let series = placeholder_series();

    html! {
        <div class="container mx-auto p-6 flex flex-col gap-6">
            <h1 class="text-3xl font-bold">{"Watchtower Dashboard"}</h1>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <Visualization series={series} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <Explanation prediction={placeholder_prediction()} />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataUpload />
                </div>
            </div>
        </div>
    }
}
