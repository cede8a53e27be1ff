// Dashboard layout - which endpoints feed which render targets on each page
use crate::application::refresh_operation::RefreshOperation;
use crate::application::render_surface::RenderSurface;
use crate::application::view_registry::ViewRegistry;
use crate::domain::metrics::{
    CategorySales, ChannelSales, CitySales, CustomerCohort, Kpis, MonthlyTrendPoint, ProductMargin,
};
use crate::domain::panel::Panel;
use crate::domain::view::ViewId;
use crate::presentation::charts;
use crate::presentation::format::{format_currency, format_number, format_percent};
use std::sync::Arc;

/// Text for each KPI tile, keyed by render target
pub fn kpi_tiles(kpis: &Kpis) -> Vec<(&'static str, String)> {
    vec![
        ("netSalesMTD", format_currency(kpis.net_sales_mtd)),
        ("netSalesYTD", format_currency(kpis.net_sales_ytd)),
        ("grossMargin", format_currency(kpis.gross_margin)),
        ("grossMarginPct", format_percent(kpis.gross_margin_pct, 1)),
        ("totalOrders", format_number(kpis.total_orders)),
        ("totalUnits", format_number(kpis.total_units)),
        ("aov", format_currency(kpis.aov)),
        ("returnRate", format_percent(kpis.return_rate, 2)),
        ("totalReturns", format_currency(kpis.total_returns)),
    ]
}

fn chart_operation<R, F>(
    surface: &Arc<dyn RenderSurface>,
    endpoint: &str,
    target: &'static str,
    figure: F,
) -> RefreshOperation
where
    R: serde::de::DeserializeOwned + Send + 'static,
    F: Fn(&R) -> serde_json::Value + Send + Sync + 'static,
{
    let surface = surface.clone();
    RefreshOperation::new(endpoint, move |records: R| {
        surface.draw(target, Panel::chart(figure(&records)));
    })
}

/// Executive: KPI tiles and the monthly trend. Drivers: five breakdown charts.
pub fn default_registry(surface: Arc<dyn RenderSurface>) -> ViewRegistry {
    let mut registry = ViewRegistry::new();

    let tiles = surface.clone();
    registry.register(
        ViewId::Executive,
        RefreshOperation::new("/api/kpis", move |kpis: Kpis| {
            for (target, text) in kpi_tiles(&kpis) {
                tiles.draw(target, Panel::tile(text));
            }
        }),
    );
    registry.register(
        ViewId::Executive,
        chart_operation(&surface, "/api/monthly-trend", "monthlyTrendChart", |p: &Vec<MonthlyTrendPoint>| {
            charts::monthly_trend(p)
        }),
    );

    registry.register(
        ViewId::Drivers,
        chart_operation(&surface, "/api/sales-by-city", "salesByCityChart", |r: &Vec<CitySales>| {
            charts::sales_by_city(r)
        }),
    );
    registry.register(
        ViewId::Drivers,
        chart_operation(&surface, "/api/sales-by-channel", "salesByChannelChart", |r: &Vec<ChannelSales>| {
            charts::sales_by_channel(r)
        }),
    );
    registry.register(
        ViewId::Drivers,
        chart_operation(&surface, "/api/top-products", "topProductsChart", |r: &Vec<ProductMargin>| {
            charts::top_products(r)
        }),
    );
    registry.register(
        ViewId::Drivers,
        chart_operation(&surface, "/api/sales-by-category", "categoryMixChart", |r: &Vec<CategorySales>| {
            charts::category_mix(r)
        }),
    );
    registry.register(
        ViewId::Drivers,
        chart_operation(&surface, "/api/new-vs-returning", "newVsReturningChart", |r: &Vec<CustomerCohort>| {
            charts::new_vs_returning(r)
        }),
    );

    registry
}
