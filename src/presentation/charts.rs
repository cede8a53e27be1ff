// Chart figures (Plotly-style `data` + `layout`) for each dashboard panel
use crate::domain::metrics::{
    CategorySales, ChannelSales, CitySales, CustomerCohort, MonthlyTrendPoint, ProductMargin,
};
use serde_json::{json, Value};

const GROSS_COLOR: &str = "#60a5fa";
const NET_COLOR: &str = "#3b82f6";
const POSITIVE_COLOR: &str = "#10b981";
const NEGATIVE_COLOR: &str = "#ef4444";
const PRODUCT_COLOR: &str = "#8b5cf6";
const CATEGORY_PALETTE: [&str; 6] = ["#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a"];

/// Gross and net sales lines with month-over-month change bars on a second axis
pub fn monthly_trend(points: &[MonthlyTrendPoint]) -> Value {
    let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
    let changes: Vec<f64> = points.iter().map(|p| p.pct_change).collect();
    let change_colors: Vec<&str> = changes
        .iter()
        .map(|v| if *v >= 0.0 { POSITIVE_COLOR } else { NEGATIVE_COLOR })
        .collect();

    json!({
        "data": [
            {
                "x": months,
                "y": points.iter().map(|p| p.gross_sales).collect::<Vec<_>>(),
                "name": "Gross Sales",
                "type": "scatter",
                "mode": "lines+markers",
                "line": {"color": GROSS_COLOR, "width": 3},
                "marker": {"size": 8}
            },
            {
                "x": months,
                "y": points.iter().map(|p| p.net_sales).collect::<Vec<_>>(),
                "name": "Net Sales",
                "type": "scatter",
                "mode": "lines+markers",
                "line": {"color": NET_COLOR, "width": 3},
                "marker": {"size": 8}
            },
            {
                "x": months,
                "y": changes,
                "name": "% Change vs Previous Month",
                "type": "bar",
                "yaxis": "y2",
                "marker": {"color": change_colors, "opacity": 0.6}
            }
        ],
        "layout": {
            "title": "Monthly Sales Trend",
            "xaxis": {"title": "Month"},
            "yaxis": {"title": "Sales ($)", "tickformat": "$,.0f"},
            "yaxis2": {
                "title": "% Change",
                "overlaying": "y",
                "side": "right",
                "tickformat": ".1f",
                "showgrid": false
            },
            "showlegend": true,
            "legend": {"x": 0, "y": 1.1, "orientation": "h"},
            "hovermode": "x unified"
        }
    })
}

fn horizontal_bar(labels: Vec<&str>, values: Vec<f64>, color: &str, axis_title: &str) -> Value {
    json!({
        "data": [{
            "x": values,
            "y": labels,
            "type": "bar",
            "orientation": "h",
            "marker": {"color": color}
        }],
        "layout": {
            "xaxis": {"title": axis_title, "tickformat": "$,.0f"},
            "yaxis": {"title": "", "automargin": true}
        }
    })
}

pub fn sales_by_city(rows: &[CitySales]) -> Value {
    horizontal_bar(
        rows.iter().map(|r| r.city.as_str()).collect(),
        rows.iter().map(|r| r.net_sales).collect(),
        GROSS_COLOR,
        "Net Sales ($)",
    )
}

pub fn sales_by_channel(rows: &[ChannelSales]) -> Value {
    horizontal_bar(
        rows.iter().map(|r| r.channel.as_str()).collect(),
        rows.iter().map(|r| r.net_sales).collect(),
        NET_COLOR,
        "Net Sales ($)",
    )
}

/// Gross margin bars labelled with the margin percentage
pub fn top_products(rows: &[ProductMargin]) -> Value {
    let mut figure = horizontal_bar(
        rows.iter().map(|r| r.product_name.as_str()).collect(),
        rows.iter().map(|r| r.gross_margin).collect(),
        PRODUCT_COLOR,
        "Gross Margin ($)",
    );
    let labels: Vec<String> = rows
        .iter()
        .map(|r| format!("{:.1}%", r.gross_margin_pct))
        .collect();
    figure["data"][0]["text"] = json!(labels);
    figure["data"][0]["textposition"] = json!("auto");
    figure
}

pub fn category_mix(rows: &[CategorySales]) -> Value {
    json!({
        "data": [{
            "labels": rows.iter().map(|r| r.category.as_str()).collect::<Vec<_>>(),
            "values": rows.iter().map(|r| r.net_sales).collect::<Vec<_>>(),
            "type": "pie",
            "textinfo": "label+percent",
            "textposition": "inside",
            "marker": {"colors": CATEGORY_PALETTE}
        }],
        "layout": {}
    })
}

pub fn new_vs_returning(rows: &[CustomerCohort]) -> Value {
    let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
    json!({
        "data": [
            {
                "x": months,
                "y": rows.iter().map(|r| r.new_customers).collect::<Vec<_>>(),
                "name": "New Customers",
                "type": "bar",
                "marker": {"color": POSITIVE_COLOR}
            },
            {
                "x": months,
                "y": rows.iter().map(|r| r.returning_customers).collect::<Vec<_>>(),
                "name": "Returning Customers",
                "type": "bar",
                "marker": {"color": NET_COLOR}
            }
        ],
        "layout": {
            "barmode": "stack",
            "xaxis": {"title": "Month"},
            "yaxis": {"title": "Customers"},
            "showlegend": true,
            "legend": {"x": 0, "y": 1.1, "orientation": "h"}
        }
    })
}
