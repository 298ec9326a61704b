use coin_market_sdk::{
    format_currency, format_number, format_percentage, MarketDashboard, TimeWindow,
    DEFAULT_PAGE_SIZE,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = MarketDashboard::new()?;
    let mut notices = dashboard.notices();
    tokio::spawn(async move {
        while let Ok(notice) = notices.recv().await {
            eprintln!("[notice] {notice}");
        }
    });

    // 1. First page of the market listing
    println!("Top cryptocurrencies (source: {})", dashboard.source_name());
    println!("-------------------------------------------");
    let coins = dashboard.coin_list(1, DEFAULT_PAGE_SIZE).await;
    for coin in coins.iter().take(10) {
        println!(
            "{:>3}  {:<12} {:>14}  {:>8}  mcap {}",
            coin.market_cap_rank.map_or("-".to_string(), |r| r.to_string()),
            coin.name,
            format_currency(coin.current_price),
            format_percentage(coin.price_change_percentage_24h),
            format_number(coin.market_cap),
        );
    }
    println!();

    // 2. Free-text search
    let query = std::env::args().nth(1).unwrap_or_else(|| "doge".to_string());
    println!("Search results for {query:?}:");
    for hit in dashboard.search(&query).await.iter().take(5) {
        println!("  {} ({})", hit.name, hit.symbol);
    }
    println!();

    // 3. Detail page data for the first listed coin
    if let Some(first) = coins.first() {
        if let Some(detail) = dashboard.coin_detail(&first.id).await {
            println!("{} ({})", detail.name, detail.symbol);
            println!(
                "  price {}  24h {}  7d {}",
                format_currency(detail.market_data.current_price.usd),
                format_percentage(detail.market_data.price_change_percentage_24h),
                format_percentage(detail.market_data.price_change_percentage_7d),
            );
        }

        if let Some(chart) = dashboard.historical_series(&first.id, TimeWindow::Week).await {
            let points = chart.chart_points();
            println!("  {} chart samples over 7d", points.len());
            if let (Some(first_point), Some(last_point)) = (points.first(), points.last()) {
                println!(
                    "  {}: {}  ->  {}: {}",
                    first_point.label,
                    format_currency(first_point.price),
                    last_point.label,
                    format_currency(last_point.price),
                );
            }
        }
    }

    Ok(())
}
