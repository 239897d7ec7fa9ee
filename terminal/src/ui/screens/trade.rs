//! # Trade Screen
//!
//! Pair selector, price chart, order book ladder, order entry form and the
//! open orders / trade history tables.

use egui;
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints};
use shared::dto::trade::{OrderSide, OrderType};
use shared::utils::format_number;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// Render trade screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    // Pair selector
    ui.horizontal(|ui| {
        ui.label("Pair:");
        for pair in &state.market.pairs {
            let selected = *pair == state.market.selected_pair;
            if ui.selectable_label(selected, pair).clicked() && !selected {
                app.handle_pair_change(pair.clone());
            }
        }
    });
    ui.add_space(8.0);

    ui.columns(3, |columns| {
        render_chart(&mut columns[0], state, &theme);
        render_order_book(&mut columns[1], state, &theme);
        render_order_form(&mut columns[2], state, app, &theme);
    });

    ui.add_space(12.0);
    ui.separator();

    ui.columns(2, |columns| {
        render_open_orders(&mut columns[0], state, &theme);
        render_trade_history(&mut columns[1], state, &theme);
    });
}

fn render_chart(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(egui::RichText::new("Price").strong());

    let close_points: Vec<[f64; 2]> = state
        .market
        .candles
        .iter()
        .enumerate()
        .map(|(idx, candle)| [idx as f64, candle.close])
        .collect();

    if close_points.is_empty() {
        ui.label("No chart data available");
        return;
    }

    Plot::new("price_chart")
        .height(260.0)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Close", PlotPoints::from(close_points))
                    .color(theme.selected)
                    .width(2.0),
            );
        });

    if let (Some(first), Some(last)) = (state.market.candles.first(), state.market.candles.last()) {
        let change = (last.close - first.open) / first.open * 100.0;
        let (text, color) = theme.format_price_change(change);
        ui.horizontal(|ui| {
            ui.label(format!("Last: {}", format_number(last.close, 2)));
            ui.colored_label(color, text);
        });
    }
}

fn render_order_book(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(egui::RichText::new("Order Book").strong());
    let book = &state.market.order_book;
    let max_total = book
        .bids
        .iter()
        .chain(book.asks.iter())
        .map(|l| l.total)
        .fold(0.0_f64, f64::max);

    // Asks top (highest first), bids below, depth bar behind each row
    for level in book.asks.iter().rev() {
        render_book_row(ui, level.price, level.size, level.total, max_total, theme.price_down);
    }
    if let Some(mid) = book.mid_price() {
        ui.colored_label(theme.selected, format!("-- {} --", format_number(mid, 2)));
    }
    for level in &book.bids {
        render_book_row(ui, level.price, level.size, level.total, max_total, theme.price_up);
    }
}

fn render_book_row(
    ui: &mut egui::Ui,
    price: f64,
    size: f64,
    total: f64,
    max_total: f64,
    color: egui::Color32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 16.0), egui::Sense::hover());
    let fraction = if max_total > 0.0 {
        (total / max_total) as f32
    } else {
        0.0
    };
    let depth_rect = egui::Rect::from_min_size(
        rect.min,
        egui::vec2(rect.width() * fraction, rect.height()),
    );
    ui.painter()
        .rect_filled(depth_rect, 0.0, color.gamma_multiply(0.15));
    ui.painter().text(
        rect.left_center(),
        egui::Align2::LEFT_CENTER,
        format_number(price, 2),
        egui::FontId::monospace(12.0),
        color,
    );
    ui.painter().text(
        rect.right_center(),
        egui::Align2::RIGHT_CENTER,
        format_number(size, 4),
        egui::FontId::monospace(12.0),
        ui.visuals().text_color(),
    );
}

fn render_order_form(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.label(egui::RichText::new("Place Order").strong());
    ui.add_space(4.0);

    // Side toggle
    ui.horizontal(|ui| {
        let buy = state.order_form.side == OrderSide::Buy;
        if ui
            .add(egui::SelectableLabel::new(
                buy,
                egui::RichText::new("Buy").color(theme.price_up),
            ))
            .clicked()
        {
            app.handle_side_change(OrderSide::Buy);
        }
        if ui
            .add(egui::SelectableLabel::new(
                !buy,
                egui::RichText::new("Sell").color(theme.price_down),
            ))
            .clicked()
        {
            app.handle_side_change(OrderSide::Sell);
        }
    });

    // Order type tabs
    ui.horizontal(|ui| {
        for order_type in OrderType::all() {
            let selected = state.order_form.order_type == *order_type;
            if ui.selectable_label(selected, order_type.label()).clicked() && !selected {
                app.handle_order_type_change(*order_type);
            }
        }
    });
    ui.add_space(6.0);

    let errors = &state.order_form.errors;

    // Amount with write-back
    let mut amount = state.order_form.amount.clone();
    forms::render_validated_input(
        ui,
        "Amount:",
        "amount",
        &mut amount,
        "0.00",
        [160.0, 24.0],
        errors,
        theme,
    );
    if amount != state.order_form.amount {
        app.state.write().order_form.amount = amount;
    }

    // Percentage buttons
    ui.horizontal(|ui| {
        for percent in [25u8, 50, 75, 100] {
            if ui.small_button(format!("{}%", percent)).clicked() {
                app.handle_amount_percent(percent);
            }
        }
    });
    ui.add_space(4.0);

    if state.order_form.order_type.uses_price() {
        let mut price = state.order_form.price.clone();
        forms::render_validated_input(
            ui,
            "Price:",
            "price",
            &mut price,
            "0.00",
            [160.0, 24.0],
            errors,
            theme,
        );
        if price != state.order_form.price {
            app.state.write().order_form.price = price;
        }
    }

    if state.order_form.order_type.uses_stop_price() {
        let mut stop = state.order_form.stop_price.clone();
        forms::render_validated_input(
            ui,
            "Stop price:",
            "stop_price",
            &mut stop,
            "0.00",
            [160.0, 24.0],
            errors,
            theme,
        );
        if stop != state.order_form.stop_price {
            app.state.write().order_form.stop_price = stop;
        }
    }

    ui.add_space(8.0);
    let submit_label = if state.order_form.is_submitting {
        "Placing..."
    } else {
        match state.order_form.side {
            OrderSide::Buy => "Place Buy Order",
            OrderSide::Sell => "Place Sell Order",
        }
    };
    let fill = match state.order_form.side {
        OrderSide::Buy => theme.price_up.gamma_multiply(0.4),
        OrderSide::Sell => theme.price_down.gamma_multiply(0.4),
    };
    let button = forms::render_button(
        ui,
        submit_label,
        Some(fill),
        Some(egui::vec2(160.0, 28.0)),
    );
    if button.clicked() && !state.order_form.is_submitting {
        app.handle_order_submit();
    }

    forms::render_hint(
        ui,
        &format!(
            "Available: {} USDT",
            format_number(state.order_form.available_balance, 2)
        ),
        theme,
    );
}

fn render_open_orders(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(egui::RichText::new("Open Orders").strong());
    if state.market.open_orders.is_empty() {
        crate::ui::widgets::tables::render_empty_state(ui, "No open orders", None, theme);
        return;
    }

    TableBuilder::new(ui)
        .id_salt("open_orders")
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            for title in ["Pair", "Side", "Type", "Amount", "Price", "Created"] {
                header.col(|ui| {
                    ui.colored_label(theme.selected, title);
                });
            }
        })
        .body(|mut body| {
            for order in &state.market.open_orders {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&order.pair);
                    });
                    row.col(|ui| {
                        let color = match order.side {
                            OrderSide::Buy => theme.price_up,
                            OrderSide::Sell => theme.price_down,
                        };
                        ui.colored_label(color, order.side.label());
                    });
                    row.col(|ui| {
                        ui.label(order.order_type.label());
                    });
                    row.col(|ui| {
                        ui.monospace(format_number(order.amount, 4));
                    });
                    row.col(|ui| {
                        match order.price {
                            Some(price) => ui.monospace(format_number(price, 2)),
                            None => ui.colored_label(theme.dim, "market"),
                        };
                    });
                    row.col(|ui| {
                        ui.colored_label(theme.dim, &order.created_at);
                    });
                });
            }
        });
}

fn render_trade_history(ui: &mut egui::Ui, state: &AppState, theme: &Theme) {
    ui.label(egui::RichText::new("Trade History").strong());
    if state.market.trade_history.is_empty() {
        crate::ui::widgets::tables::render_empty_state(ui, "No trades yet", None, theme);
        return;
    }

    TableBuilder::new(ui)
        .id_salt("trade_history")
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(18.0, |mut header| {
            for title in ["Pair", "Side", "Amount", "Price", "Executed"] {
                header.col(|ui| {
                    ui.colored_label(theme.selected, title);
                });
            }
        })
        .body(|mut body| {
            for fill in &state.market.trade_history {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&fill.pair);
                    });
                    row.col(|ui| {
                        let color = match fill.side {
                            OrderSide::Buy => theme.price_up,
                            OrderSide::Sell => theme.price_down,
                        };
                        ui.colored_label(color, fill.side.label());
                    });
                    row.col(|ui| {
                        ui.monospace(format_number(fill.amount, 4));
                    });
                    row.col(|ui| {
                        ui.monospace(format_number(fill.price, 2));
                    });
                    row.col(|ui| {
                        ui.colored_label(theme.dim, &fill.executed_at);
                    });
                });
            }
        });
}
