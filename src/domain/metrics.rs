// Sales metric records served by the aggregation API
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub net_sales_mtd: f64,
    pub net_sales_ytd: f64,
    pub gross_margin: f64,
    pub gross_margin_pct: f64,
    pub total_orders: f64,
    pub total_units: f64,
    pub aov: f64,
    pub return_rate: f64,
    pub total_returns: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    pub month: String,
    pub net_sales: f64,
    pub gross_sales: f64,
    #[serde(default)]
    pub pct_change: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySales {
    pub city: String,
    pub net_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSales {
    pub channel: String,
    pub net_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMargin {
    pub product_name: String,
    pub gross_margin: f64,
    pub gross_margin_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,
    pub net_sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCohort {
    pub month: String,
    pub new_customers: f64,
    pub returning_customers: f64,
}
