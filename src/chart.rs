//! Chart geometry
//!
//! Pure functions from a sample to the shapes of its two charts. All
//! coordinates are pixels inside the chart's inner area (margins already
//! removed); surfaces translate by the margin when they draw.

use crate::consts::dashboard_consts::{AXIS_TICK_COUNT, bar, bubble};
use crate::dataset::Sample;
use crate::scale::{self, BandScale, CATEGORY10, LinearScale, OrdinalScale, TickFormat};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Canvas size, margins and the inner plotting area they leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Viewport {
    /// Inner area is the plotting box minus the margins. The plotting box may
    /// be smaller than the canvas.
    fn new(canvas: (f64, f64), plot: (f64, f64), margin: Margin) -> Self {
        Self {
            width: canvas.0,
            height: canvas.1,
            margin,
            inner_width: plot.0 - margin.left - margin.right,
            inner_height: plot.1 - margin.top - margin.bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// Horizontal axis drawn along the bottom of the inner area.
    Bottom,
    /// Vertical axis drawn along the left edge of the inner area.
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis, in inner-area pixels.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    /// Axis line length.
    pub length: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    fn linear(side: AxisSide, length: f64, scale: &LinearScale, format: TickFormat) -> Self {
        let step = scale.tick_step(AXIS_TICK_COUNT);
        let ticks = scale
            .ticks(AXIS_TICK_COUNT)
            .into_iter()
            .map(|value| Tick {
                offset: scale.map(value),
                label: format.format(value, step),
            })
            .collect();
        Self {
            side,
            length,
            ticks,
        }
    }
}

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub otu_id: u32,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub viewport: Viewport,
    pub bars: Vec<Bar>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub fill: &'static str,
}

/// One bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub otu_id: u32,
    pub value: f64,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub color: &'static str,
    pub tooltip: String,
}

/// Free-standing text positioned in inner-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleChart {
    pub viewport: Viewport,
    pub circles: Vec<Circle>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_label: Label,
    pub opacity: f64,
}

/// Horizontal bars for the first `TOP_N` taxa, in input order.
///
/// Bar length is linear from zero to the largest shown value; each bar sits
/// in the band keyed by its OTU id.
pub fn bar_chart(sample: &Sample) -> BarChart {
    let viewport = Viewport::new(
        (bar::CANVAS_WIDTH, bar::CANVAS_HEIGHT),
        (bar::CANVAS_WIDTH, bar::CANVAS_HEIGHT),
        bar::MARGIN,
    );

    let n = sample.len().min(bar::TOP_N);
    let otu_ids = &sample.otu_ids[..n];
    let values = &sample.sample_values[..n];
    let labels = &sample.otu_labels[..n];

    let top = scale::max(values.iter().copied()).unwrap_or(0.0);
    let x = LinearScale::new((0.0, top), (0.0, viewport.inner_width));
    let y = BandScale::new(
        otu_ids.iter().copied(),
        (0.0, viewport.inner_height),
        bar::BAND_PADDING,
    );

    let bars = otu_ids
        .iter()
        .zip(values)
        .zip(labels)
        .filter_map(|((&otu_id, &value), label)| {
            Some(Bar {
                otu_id,
                value,
                x: 0.0,
                y: y.position(&otu_id)?,
                width: x.map(value),
                height: y.bandwidth(),
                tooltip: label.clone(),
            })
        })
        .collect();

    let y_axis = Axis {
        side: AxisSide::Left,
        length: viewport.inner_height,
        ticks: y
            .keys()
            .iter()
            .filter_map(|id| {
                Some(Tick {
                    offset: y.position(id)? + y.bandwidth() / 2.0,
                    label: format!("OTU {}", id),
                })
            })
            .collect(),
    };

    BarChart {
        viewport,
        bars,
        x_axis: Axis::linear(
            AxisSide::Bottom,
            viewport.inner_width,
            &x,
            TickFormat::Grouped,
        ),
        y_axis,
        fill: bar::FILL,
    }
}

/// Bubbles for every taxon: x by OTU id, y and radius by abundance, color
/// by OTU id.
pub fn bubble_chart(sample: &Sample) -> BubbleChart {
    let viewport = Viewport::new(
        (bubble::CANVAS_WIDTH, bubble::CANVAS_HEIGHT),
        (bubble::PLOT_WIDTH, bubble::PLOT_HEIGHT),
        bubble::MARGIN,
    );

    let id_extent =
        scale::extent(sample.otu_ids.iter().map(|&id| f64::from(id))).unwrap_or((0.0, 0.0));
    let value_extent = scale::extent(sample.sample_values.iter().copied()).unwrap_or((0.0, 0.0));

    let x = LinearScale::new(id_extent, (0.0, viewport.inner_width));
    let y = LinearScale::new((0.0, value_extent.1), (viewport.inner_height, 0.0));
    let size = LinearScale::new(value_extent, (bubble::MIN_RADIUS, bubble::MAX_RADIUS));
    let mut color = OrdinalScale::new(sample.otu_ids.iter().copied(), &CATEGORY10);

    let circles = sample
        .otu_ids
        .iter()
        .zip(&sample.sample_values)
        .zip(&sample.otu_labels)
        .map(|((&otu_id, &value), label)| Circle {
            otu_id,
            value,
            cx: x.map(f64::from(otu_id)),
            cy: y.map(value),
            r: size.map(value),
            color: color.color(&otu_id),
            tooltip: label.clone(),
        })
        .collect();

    BubbleChart {
        viewport,
        circles,
        x_axis: Axis::linear(
            AxisSide::Bottom,
            viewport.inner_width,
            &x,
            TickFormat::Integer,
        ),
        y_axis: Axis::linear(
            AxisSide::Left,
            viewport.inner_height,
            &y,
            TickFormat::Grouped,
        ),
        x_label: Label {
            x: viewport.inner_width / 2.0,
            y: viewport.inner_height + viewport.margin.bottom - 10.0,
            text: bubble::X_LABEL.to_string(),
        },
        opacity: bubble::OPACITY,
    }
}
