//! Stateless text rendering of single records, one function per card/row the
//! mobile screens used to draw.

use niftysync_core::domain::market::{IndexQuote, MarketAnalysis};
use niftysync_core::domain::notification::NotificationRecord;
use niftysync_core::domain::portfolio::{PortfolioHolding, PortfolioSummary};
use niftysync_core::domain::recommendation::Recommendation;

fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}

pub fn index_row(quote: &IndexQuote) -> String {
    format!(
        "{:<16} {:>12.2}  {} ({}%)",
        quote.name,
        quote.current_value,
        signed(quote.change_value),
        signed(quote.change_percent),
    )
}

pub fn recommendation_card(rec: &Recommendation) -> String {
    let mut card = format!(
        "{} [{}] {}\n  {} | ₹{:.2} → ₹{:.2} | confidence {:.0}% | {}",
        rec.ticker,
        rec.recommendation.as_str(),
        rec.company_name,
        rec.sector.as_deref().unwrap_or("—"),
        rec.current_price,
        rec.target_price,
        rec.confidence_score,
        rec.timeframe,
    );
    if let Some(reasons) = &rec.reasons {
        card.push_str("\n  ");
        card.push_str(reasons);
    }
    card
}

pub fn holding_row(holding: &PortfolioHolding) -> String {
    format!(
        "{:<10} qty {:>6}  buy ₹{:.2}  now ₹{:.2}  {} ({}%)",
        holding.ticker,
        holding.volume.unwrap_or(0),
        holding.buy_price,
        holding.current_price,
        signed(holding.change_value),
        signed(holding.change_percent),
    )
}

pub fn portfolio_totals(summary: &PortfolioSummary) -> String {
    format!(
        "invested ₹{:.2}  current ₹{:.2}  {} ({}%)",
        summary.total_invested,
        summary.total_current,
        signed(summary.total_change),
        signed(summary.total_change_percent),
    )
}

pub fn notification_row(record: &NotificationRecord) -> String {
    let marker = if record.read_at.is_none() { "*" } else { " " };
    format!(
        "{marker} [{}] {} — {}",
        record.sent_at.as_deref().unwrap_or("unknown"),
        record.title,
        record.message,
    )
}

pub fn analysis_summary(analysis: &MarketAnalysis) -> String {
    let mut out = format!(
        "trend {} | bullish {:.0}% / bearish {:.0}%",
        analysis.market_trend, analysis.bullish_sentiment, analysis.bearish_sentiment,
    );
    if let Some(levels) = &analysis.key_levels {
        if let (Some(support), Some(resistance)) = (levels.support, levels.resistance) {
            out.push_str(&format!(" | support {support:.2} / resistance {resistance:.2}"));
        }
    }
    for sector in &analysis.sectors {
        if let Some(performance) = sector.performance {
            out.push_str(&format!("\n  {:<20} {}%", sector.name, signed(performance)));
        }
    }
    out
}
