use std::collections::BTreeMap;
use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Stroke, Ui};
use egui_plot::{
    Bar, BarChart, GridMark, HLine, Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points,
    Text,
};

use sales_dashboard::color::{self, ColorMap};
use sales_dashboard::data::aggregate::{
    CategoryMonthPoint, GroupMargin, GroupShare, GroupTotal, HIGH_MARGIN_PCT, MonthlyPoint,
};
use sales_dashboard::format::{format_compact_currency, format_percent};

use super::{card, section_header};

const CHART_HEIGHT: f32 = 300.0;
/// Month axes label every n-th month to avoid crowding.
const MONTH_TICK_STEP: usize = 4;

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Label integer grid marks with `labels[i]`, keeping every `step`-th one.
fn index_formatter(
    labels: Vec<String>,
    step: usize,
) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark: GridMark, _range: &std::ops::RangeInclusive<f64>| {
        let v = mark.value;
        if v < 0.0 || v.fract() != 0.0 {
            return String::new();
        }
        let i = v as usize;
        match labels.get(i) {
            Some(label) if i % step.max(1) == 0 => label.clone(),
            _ => String::new(),
        }
    }
}

fn currency_axis(mark: GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    format_compact_currency(mark.value)
}

fn base_plot(id: &str) -> Plot {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid([false, true])
}

// ---------------------------------------------------------------------------
// Row 1
// ---------------------------------------------------------------------------

/// Revenue (filled, with markers) and sales (dotted) per month.
pub fn revenue_over_time(ui: &mut Ui, monthly: &[MonthlyPoint]) {
    section_header(ui, "Revenue Over Time");
    card(ui, |ui| {
        let months: Vec<String> = monthly.iter().map(|p| p.month.clone()).collect();
        let revenue: Vec<[f64; 2]> = monthly
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.revenue])
            .collect();
        let sales: PlotPoints = monthly
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.sales])
            .collect();

        base_plot("revenue_over_time")
            .legend(Legend::default().position(egui_plot::Corner::LeftTop))
            .x_axis_formatter(index_formatter(months, MONTH_TICK_STEP))
            .y_axis_formatter(currency_axis)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(revenue.clone()))
                        .name("Revenue")
                        .color(color::BLUE)
                        .width(2.5)
                        .fill(0.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(revenue))
                        .name("Revenue")
                        .color(color::BLUE)
                        .radius(2.5),
                );
                plot_ui.line(
                    Line::new(sales)
                        .name("Sales")
                        .color(color::PURPLE)
                        .width(2.0)
                        .style(LineStyle::dotted_dense()),
                );
            });
    });
}

/// Horizontal bars, smallest category at the bottom.
pub fn sales_by_category(ui: &mut Ui, groups: &[GroupTotal], colors: &ColorMap) {
    section_header(ui, "Sales by Category");
    card(ui, |ui| {
        let labels: Vec<String> = groups.iter().map(|g| g.key.clone()).collect();
        let bars: Vec<Bar> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| {
                Bar::new(i as f64, g.value)
                    .name(&g.key)
                    .fill(colors.color_for(&g.key))
                    .width(0.6)
            })
            .collect();
        let max = groups.iter().map(|g| g.value).fold(0.0, f64::max);

        base_plot("sales_by_category")
            .show_axes([false, true])
            .show_grid([false, false])
            .y_axis_formatter(index_formatter(labels, 1))
            .include_x(0.0)
            .include_x(max * 1.25)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal());
                for (i, g) in groups.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(g.value + max * 0.02, i as f64),
                            format_compact_currency(g.value),
                        )
                        .anchor(Align2::LEFT_CENTER),
                    );
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Row 2
// ---------------------------------------------------------------------------

pub fn sales_by_region(ui: &mut Ui, shares: &[GroupShare]) {
    section_header(ui, "Sales by Region");
    card(ui, |ui| {
        let total: f64 = shares.iter().map(|s| s.value).sum();
        let colors = color::series_colors(shares.len());
        donut(ui, shares, &colors, 0.52, Some(format_compact_currency(total)));
    });
}

/// One line per category across the months of the filtered set.
pub fn category_trends(ui: &mut Ui, points: &[CategoryMonthPoint], colors: &ColorMap) {
    section_header(ui, "Monthly Trends by Category");
    card(ui, |ui| {
        let mut months: Vec<String> = Vec::new();
        let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for p in points {
            if months.last() != Some(&p.month) {
                months.push(p.month.clone());
            }
            let x = (months.len() - 1) as f64;
            series.entry(p.category.as_str()).or_default().push([x, p.sales]);
        }

        base_plot("category_trends")
            .legend(Legend::default().position(egui_plot::Corner::LeftTop))
            .x_axis_formatter(index_formatter(months, MONTH_TICK_STEP))
            .y_axis_formatter(currency_axis)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                for (category, pts) in series {
                    let c = colors.color_for(category);
                    plot_ui.line(
                        Line::new(PlotPoints::from(pts.clone()))
                            .name(category)
                            .color(c)
                            .width(2.0),
                    );
                    plot_ui.points(Points::new(PlotPoints::from(pts)).name(category).color(c).radius(2.0));
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Row 3
// ---------------------------------------------------------------------------

/// Margin bars coloured by band, with the 20% target line.
pub fn margin_by_sub_category(ui: &mut Ui, margins: &[GroupMargin]) {
    section_header(ui, "Profit Margin by Sub-Category");
    card(ui, |ui| {
        let labels: Vec<String> = margins.iter().map(|m| m.key.clone()).collect();
        let bars: Vec<Bar> = margins
            .iter()
            .enumerate()
            .map(|(i, m)| {
                Bar::new(i as f64, m.margin_pct)
                    .name(&m.key)
                    .fill(color::band_color(m.band))
                    .width(0.6)
            })
            .collect();
        let top = margins.iter().map(|m| m.margin_pct).fold(HIGH_MARGIN_PCT, f64::max);

        base_plot("margin_by_sub_category")
            .x_axis_formatter(index_formatter(labels, 1))
            .y_axis_formatter(|mark, _| format!("{}%", mark.value))
            .y_axis_label("Margin %")
            .include_y(0.0)
            .include_y(top * 1.15)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
                plot_ui.hline(
                    HLine::new(HIGH_MARGIN_PCT)
                        .name("Target 20%")
                        .color(color::GREEN)
                        .style(LineStyle::dashed_loose()),
                );
                for (i, m) in margins.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, m.margin_pct + top * 0.02),
                            format!("{}%", m.margin_pct),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    });
}

pub fn revenue_by_segment(ui: &mut Ui, shares: &[GroupShare]) {
    section_header(ui, "Revenue by Segment");
    card(ui, |ui| {
        let colors = [color::BLUE, color::PURPLE, color::GREEN];
        donut(ui, shares, &colors, 0.45, None);
    });
}

// ---------------------------------------------------------------------------
// Donut chart (painter based; egui_plot has no pie)
// ---------------------------------------------------------------------------

/// Ring segments proportional to `pct`, labelled with key and share.
fn donut(ui: &mut Ui, shares: &[GroupShare], colors: &[Color32], hole: f32, center: Option<String>) {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();

    let c = rect.center();
    let outer = (rect.width().min(rect.height()) / 2.0 - 36.0).max(20.0);
    let inner = outer * hole;

    let total: f64 = shares.iter().map(|s| s.pct).sum();
    if total <= 0.0 {
        painter.circle_stroke(c, (outer + inner) / 2.0, Stroke::new(outer - inner, Color32::from_gray(235)));
        painter.text(c, Align2::CENTER_CENTER, "No data", FontId::proportional(13.0), color::MUTED);
        return;
    }

    let mut start = -TAU / 4.0;
    for (i, share) in shares.iter().enumerate() {
        let sweep = (share.pct / 100.0) as f32 * TAU;
        if sweep <= 0.0 {
            continue;
        }
        let fill = colors.get(i % colors.len().max(1)).copied().unwrap_or(Color32::GRAY);
        painter.add(Shape::mesh(ring_segment(c, inner, outer, start, sweep, fill)));

        let mid = start + sweep / 2.0;
        let label_pos = c + egui::vec2(mid.cos(), mid.sin()) * (outer + 18.0);
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{}\n{}", share.key, format_percent(share.pct)),
            FontId::proportional(11.0),
            text_color,
        );
        start += sweep;
    }

    if let Some(label) = center {
        painter.text(c, Align2::CENTER_CENTER, label, FontId::proportional(14.0), text_color);
    }
}

fn ring_segment(c: Pos2, inner: f32, outer: f32, start: f32, sweep: f32, fill: Color32) -> Mesh {
    let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as u32;
    let mut mesh = Mesh::default();
    for k in 0..=steps {
        let a = start + sweep * k as f32 / steps as f32;
        let dir = egui::vec2(a.cos(), a.sin());
        mesh.colored_vertex(c + dir * outer, fill);
        mesh.colored_vertex(c + dir * inner, fill);
    }
    for k in 0..steps {
        let o0 = 2 * k;
        let (i0, o1, i1) = (o0 + 1, o0 + 2, o0 + 3);
        mesh.add_triangle(o0, i0, o1);
        mesh.add_triangle(i0, i1, o1);
    }
    mesh
}
