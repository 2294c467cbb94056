//! Plain-text output.

use std::fmt::Write;

use lotto::prelude::*;
use lotto_api::prelude::*;

use crate::config::AppConfig;

pub fn games(catalog: &Catalog, t: &Translator) -> String {
    let mut out = String::new();
    for game in catalog.games() {
        let _ = writeln!(out, "{} ({})", t.t(game.name_key(), &[]), game.id());
        let _ = writeln!(out, "  {}", t.t(game.description_key(), &[]));
        for pool in game.pools() {
            let _ = writeln!(
                out,
                "  {} [{}]: {}-{}",
                t.t(&pool.label_key, &[]),
                pool.id,
                pool.format_value(pool.start),
                pool.format_value(pool.end)
            );
        }
        for mode in game.modes() {
            let marker = if mode.id == game.default_mode_id() { "*" } else { " " };
            let _ = writeln!(
                out,
                "  {marker} {:<10} {} - {}",
                mode.id,
                t.t(&mode.label_key, &[]),
                t.t(&mode.helper_key, &[])
            );
        }
        out.push('\n');
    }
    out
}

/// One ticket's numbers, pools separated by " | ".
pub fn ticket(game: &Game, selections: &Selection) -> String {
    game.pools()
        .iter()
        .filter_map(|pool| {
            let values = selections.values(&pool.id);
            (!values.is_empty()).then(|| pool.format_values(values.iter()))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn order(catalog: &Catalog, t: &Translator, order: &Order) -> String {
    let mut out = String::new();
    for (index, batch) in order.batches().iter().enumerate() {
        let game = catalog.game(&batch.game_id);
        let mode = game.mode(&batch.mode_id);
        let _ = writeln!(
            out,
            "{} · {} · {}",
            t.t("purchase.preview.groupLabel", &[("index", &(index + 1))]),
            t.t(game.name_key(), &[]),
            t.t(&mode.label_key, &[])
        );
        let _ = writeln!(
            out,
            "  {}: {}",
            t.t("purchase.preview.numbersLabel", &[]),
            ticket(game, &batch.selections)
        );
        let _ = writeln!(
            out,
            "  {}",
            t.t("purchase.games.totalTickets", &[("count", &batch.combinations)])
        );
        for preview in &batch.preview {
            let _ = writeln!(out, "    {}  {}", preview.id, ticket(game, &preview.selections));
        }
        let summary = batch.preview_summary();
        if summary.truncated {
            let _ = writeln!(
                out,
                "    {}",
                t.t(
                    "purchase.games.preview.overflow",
                    &[("count", &summary.shown), ("total", &summary.total)]
                )
            );
        }
        out.push('\n');
    }

    let totals = order.totals();
    let _ = writeln!(
        out,
        "{}: {}",
        t.t("purchase.summary.groups", &[]),
        totals.batch_count
    );
    let _ = writeln!(
        out,
        "{}: {}",
        t.t("purchase.summary.quantity", &[]),
        totals.total_tickets
    );
    let _ = writeln!(
        out,
        "{}: {}",
        t.t("purchase.summary.totalUsd", &[]),
        totals.total_cost_usd
    );
    out
}

pub fn dashboard(
    t: &Translator,
    config: &AppConfig,
    stats: &Loaded<DashboardStats>,
    price: &Loaded<u128>,
    lotteries: &Loaded<Vec<Lottery>>,
    rates: &ConversionRates,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({})",
        t.t("dashboard.title", &[]),
        t.t(&stats.status.message_key("dashboard"), &[])
    );
    let rows = [
        ("dashboard.stat.jackpot.title", &stats.value.jackpot),
        ("dashboard.stat.ticketPrice.title", &stats.value.ticket_price),
        ("dashboard.stat.totalSold.title", &stats.value.total_sold),
    ];
    for (key, value) in rows {
        let _ = writeln!(out, "  {}: {value}", t.t(key, &[]));
    }
    let _ = writeln!(
        out,
        "  {}: {}",
        t.t("purchase.summary.ticketPrice", &[]),
        format_ether(price.value)
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        t.t("dashboard.config.contract", &[]),
        config.contract.address
    );

    out.push('\n');
    let _ = writeln!(out, "{}", t.t("lotteries.title", &[]));
    if lotteries.status == DataStatus::Fallback {
        let _ = writeln!(out, "  {}", t.t("lotteries.refresh.demo", &[]));
    }
    for lottery in &lotteries.value {
        let _ = writeln!(
            out,
            "  #{} {}  {}: {} ETH  {}: {} ETH  {}: {}",
            lottery.id,
            lottery.title,
            t.t("lotteries.card.jackpot", &[]),
            lottery.jackpot,
            t.t("lotteries.card.ticketPrice", &[]),
            lottery.ticket_price,
            t.t("lotteries.card.closes", &[]),
            lottery.closes_at
        );
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{} ({})",
        t.t("converter.title", &[]),
        t.t(&rates.status().message_key("converter"), &[])
    );
    for coin in Stablecoin::ALL {
        let _ = writeln!(out, "  1 ETH ≈ {:.2} {}", rates.rate(coin), coin.symbol());
    }
    out
}
