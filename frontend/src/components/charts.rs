use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::ChartData;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const BAR_COLOR: RGBColor = RGBColor(102, 126, 234);

const PIE_COLORS: [RGBColor; 8] = [
    RGBColor(255, 99, 132),
    RGBColor(54, 162, 235),
    RGBColor(255, 206, 86),
    RGBColor(75, 192, 192),
    RGBColor(153, 102, 255),
    RGBColor(255, 159, 64),
    RGBColor(102, 126, 234),
    RGBColor(201, 203, 207),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    fn canvas_size(&self) -> (u32, u32) {
        match self {
            ChartKind::Bar => (700, 350),
            ChartKind::Pie => (500, 400),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DatasetChartProps {
    pub title: AttrValue,
    pub kind: ChartKind,
    /// Chart payload exactly as received; `None` before the first fetch
    pub data: Option<ChartData>,
}

/// Draws a backend-provided dataset onto a canvas
pub struct DatasetChart {
    canvas_ref: NodeRef,
}

impl Component for DatasetChart {
    type Message = ();
    type Properties = DatasetChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(data) = &ctx.props().data {
            self.draw_chart(ctx.props().kind, data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (width, height) = props.kind.canvas_size();
        let has_data = props.data.as_ref().is_some_and(|data| !data.is_empty());

        html! {
            <div class="chart">
                <h2>{props.title.clone()}</h2>
                {if has_data {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width={width.to_string()}
                            height={height.to_string()}
                        ></canvas>
                    }
                } else {
                    html! { <p class="chart-empty">{"No chart data"}</p> }
                }}
            </div>
        }
    }
}

impl DatasetChart {
    fn draw_chart(&self, kind: ChartKind, data: &ChartData) {
        if let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() {
            paint_chart(canvas, kind, data);
        }
    }
}

/// Paint `data` onto `canvas`. Returns whether anything was drawn.
pub fn paint_chart(canvas: HtmlCanvasElement, kind: ChartKind, data: &ChartData) -> bool {
    let points = data.points();
    if points.is_empty() {
        return false;
    }

    let backend = match CanvasBackend::with_canvas_object(canvas) {
        Some(backend) => backend,
        None => return false,
    };

    let root = backend.into_drawing_area();
    if root.fill(&WHITE).is_err() {
        return false;
    }

    let dataset_label = data.dataset_label().unwrap_or_default();

    let drawn = match kind {
        ChartKind::Bar => draw_bars(&root, &points, dataset_label),
        ChartKind::Pie => draw_pie(&root, &points),
    };

    drawn.is_some() && root.present().is_ok()
}

fn draw_bars(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    points: &[(String, f64)],
    dataset_label: &str,
) -> Option<()> {
    let labels: Vec<&str> = points.iter().map(|(label, _)| label.as_str()).collect();
    let y_max = bar_axis_max(points);

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..points.len() as u32).into_segmented(), 0.0..y_max)
        .ok()?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(dataset_label)
        .x_labels(points.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => {
                labels.get(*index as usize).map(|label| label.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 11))
        .axis_style(&RGBColor(230, 230, 230))
        .draw()
        .ok()?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(points.iter().enumerate().map(|(index, (_, value))| (index as u32, *value))),
        )
        .ok()?;

    Some(())
}

fn draw_pie(
    root: &DrawingArea<CanvasBackend, plotters::coord::Shift>,
    points: &[(String, f64)],
) -> Option<()> {
    let (sizes, labels) = pie_slices(points);
    if sizes.is_empty() {
        return None;
    }

    let colors: Vec<RGBColor> = (0..sizes.len())
        .map(|index| PIE_COLORS[index % PIE_COLORS.len()])
        .collect();

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 13).into_font().color(&BLACK));
    root.draw(&pie).ok()?;

    Some(())
}

/// Upper bound of the bar chart's value axis, with headroom above the tallest bar
pub fn bar_axis_max(points: &[(String, f64)]) -> f64 {
    let max_value = points.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);
    (max_value * 1.1).max(1.0)
}

/// Pie slices with a positive share; zero and negative entries cannot be drawn
pub fn pie_slices(points: &[(String, f64)]) -> (Vec<f64>, Vec<String>) {
    points
        .iter()
        .filter(|(_, value)| *value > 0.0 && value.is_finite())
        .map(|(label, value)| (*value, label.clone()))
        .unzip()
}
