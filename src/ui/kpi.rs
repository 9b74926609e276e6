use eframe::egui::{RichText, Ui};

use sales_dashboard::color;
use sales_dashboard::data::aggregate::Kpis;
use sales_dashboard::format::{format_compact_currency, format_count, format_percent};

use super::card;

/// One headline card. `delta` is the static comparison blurb under the value.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub delta: Option<(&'static str, bool)>,
}

pub fn kpi_cards(k: &Kpis) -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total Sales",
            value: format_compact_currency(k.total_sales),
            icon: "💰",
            delta: Some(("+12.4% vs last period", true)),
        },
        KpiCard {
            label: "Total Revenue",
            value: format_compact_currency(k.total_revenue),
            icon: "📈",
            delta: Some(("+8.7% vs last period", true)),
        },
        KpiCard {
            label: "Profit",
            value: format_compact_currency(k.total_profit),
            icon: "✅",
            delta: Some(("+5.2% vs last period", true)),
        },
        KpiCard {
            label: "Profit Margin",
            value: format_percent(k.profit_margin),
            icon: "🎯",
            delta: Some(("-1.1% vs last period", false)),
        },
        KpiCard {
            label: "Total Orders",
            value: format_count(k.record_count),
            icon: "🛒",
            delta: Some(("+18.3% vs last period", true)),
        },
        KpiCard {
            label: "Avg Order Value",
            value: format_compact_currency(k.avg_order_value),
            icon: "🧾",
            delta: None,
        },
    ]
}

/// Render the KPI row, one equal-width column per card.
pub fn kpi_row(ui: &mut Ui, k: &Kpis) {
    let cards = kpi_cards(k);
    ui.columns(cards.len(), |cols| {
        for (col, c) in cols.iter_mut().zip(&cards) {
            card(col, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(c.label.to_uppercase()).small().strong().color(color::MUTED));
                    ui.label(RichText::new(c.icon).weak());
                });
                ui.label(RichText::new(&c.value).size(26.0).strong());
                match c.delta {
                    Some((text, true)) => {
                        ui.label(RichText::new(format!("▲ {text}")).small().color(color::GREEN));
                    }
                    Some((text, false)) => {
                        ui.label(RichText::new(format!("▼ {text}")).small().color(color::RED));
                    }
                    None => {
                        ui.label(RichText::new("per filtered order").small().color(color::MUTED));
                    }
                }
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_cards_show_zeroes() {
        let cards = kpi_cards(&Kpis::default());
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["$0", "$0", "$0", "0.0%", "0", "$0"]);
    }

    #[test]
    fn cards_format_headline_figures() {
        let k = Kpis {
            total_sales: 1_534_000.0,
            total_revenue: 7_900_000.0,
            total_profit: 383_500.0,
            profit_margin: 4.854,
            record_count: 1000,
            avg_order_value: 1534.0,
        };
        let cards = kpi_cards(&k);
        assert_eq!(cards[0].value, "$1.53M");
        assert_eq!(cards[2].value, "$383.5K");
        assert_eq!(cards[3].value, "4.9%");
        assert_eq!(cards[4].value, "1,000");
        assert_eq!(cards[5].value, "$1.5K");
    }
}
