use common::Series;
use plotly::common::{Fill, Line, Mode};
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

pub const DATASET_LABEL: &str = "Predictions";
pub const LINE_COLOR: &str = "rgba(75,192,192,1)";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);

    #[wasm_bindgen(js_namespace = Plotly)]
    fn purge(div_id: &str);
}

/// A validated series ready to be drawn as a single line dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// `None` when either labels or values are missing.
    pub fn from_series(series: &Series) -> Option<Self> {
        series.parts().map(|(labels, values)| Self {
            labels: labels.to_vec(),
            values: values.to_vec(),
        })
    }

    /// Plotly trace JSON for the "Predictions" line
    pub fn trace(&self) -> Result<serde_json::Value, String> {
        let trace = Scatter::new(self.labels.clone(), self.values.clone())
            .mode(Mode::LinesMarkers)
            .name(DATASET_LABEL)
            .fill(Fill::None)
            .line(Line::new().color(LINE_COLOR).width(2.0));
        serde_json::to_value(&trace).map_err(|e| format!("Failed to serialize chart trace: {}", e))
    }

    pub fn layout(&self) -> Result<serde_json::Value, String> {
        let layout = Layout::new().height(300).show_legend(true);
        let mut layout = serde_json::to_value(&layout)
            .map_err(|e| format!("Failed to serialize chart layout: {}", e))?;
        layout["margin"] = serde_json::json!({"t": 10, "r": 10, "l": 40, "b": 30});
        Ok(layout)
    }
}

/// Draws into and releases a chart library's resources for one element.
pub trait ChartBackend {
    fn draw(&self, element_id: &str, chart: &ChartData) -> Result<(), String>;
    fn release(&self, element_id: &str);
}

/// The Plotly.js global loaded by index.html.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyBackend;

impl ChartBackend for PlotlyBackend {
    fn draw(&self, element_id: &str, chart: &ChartData) -> Result<(), String> {
        let data = serde_json::json!([chart.trace()?]);
        let config = serde_json::json!({"responsive": true, "displayModeBar": false});

        let to_js = |value: &serde_json::Value| {
            serde_wasm_bindgen::to_value(value).map_err(|e| format!("Failed to convert chart JSON: {}", e))
        };
        new_plot(element_id, to_js(&data)?, to_js(&chart.layout()?)?, to_js(&config)?);
        Ok(())
    }

    fn release(&self, element_id: &str) {
        purge(element_id);
    }
}

/// A chart drawn into an element. Releasing happens at most once, either
/// through [`ChartGuard::release`] or when the guard is dropped.
pub struct ChartGuard<B: ChartBackend> {
    backend: B,
    element_id: Option<String>,
}

impl<B: ChartBackend> ChartGuard<B> {
    pub fn mount(backend: B, element_id: &str, chart: &ChartData) -> Result<Self, String> {
        backend.draw(element_id, chart)?;
        log::debug!("Chart drawn into #{}", element_id);
        Ok(Self {
            backend,
            element_id: Some(element_id.to_string()),
        })
    }

    pub fn release(&mut self) {
        if let Some(element_id) = self.element_id.take() {
            log::debug!("Releasing chart in #{}", element_id);
            self.backend.release(&element_id);
        }
    }
}

impl<B: ChartBackend> Drop for ChartGuard<B> {
    fn drop(&mut self) {
        self.release();
    }
}

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub data: ChartData,
    pub element_id: AttrValue,
}

#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.data.clone(), props.element_id.clone()),
        move |(container_ref, data, element_id)| {
            let mut guard = None;
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(element_id);
                match ChartGuard::mount(PlotlyBackend, element_id, data) {
                    Ok(mounted) => guard = Some(mounted),
                    Err(e) => log::error!("Failed to draw chart: {}", e),
                }
            }
            // Runs on unmount and before every redraw
            move || drop(guard)
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:300px;"></div>
    }
}
