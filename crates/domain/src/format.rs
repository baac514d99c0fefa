// crates/domain/src/format.rs
//! Pure token construction: one accumulated entry in, display tokens out.
//! Metadata lookups happen before these functions are called; everything
//! here is deterministic given its arguments.

use crate::model::{CurrencyInfo, ItemInfo, Token};
use crate::options::{LinkStyle, RenderOptions};

/// Fixed visual width of one inline icon glyph, regardless of how many
/// characters its markup occupies.
pub const ICON_DISPLAY_WIDTH: usize = 2;

/// Marker appended to an uncollected set piece.
pub const NOT_COLLECTED_MARKUP: &str = "|t90%:90%:icons/collectible_locked.dds|t";

/// Inline markup for an icon glyph scaled to `size` percent.
fn icon_markup(path: &str, size: u32) -> String {
    format!("|t{size}%:{size}%:{path}|t")
}

/// Characters an icon markup string occupies beyond its visual width.
fn markup_surplus(markup: &str) -> usize {
    markup.chars().count().saturating_sub(ICON_DISPLAY_WIDTH)
}

/// Groups digits with `,` separators: 1234567 -> "1,234,567".
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats one item entry into display tokens, one per accumulated quantity
/// element. An entity below the minimum quality yields no tokens at all.
pub fn item_tokens(info: &ItemInfo, quantities: &[u64], opts: &RenderOptions) -> Vec<Token> {
    if info.quality < opts.min_quality {
        return Vec::new();
    }
    quantities
        .iter()
        .map(|&quantity| item_token(info, quantity, opts))
        .collect()
}

fn item_token(info: &ItemInfo, quantity: u64, opts: &RenderOptions) -> Token {
    let mut text = match opts.link_style {
        LinkStyle::Brackets => format!("[{}]", info.name),
        LinkStyle::Default => info.name.clone(),
    };
    let mut icon_surplus = 0;

    if opts.show_not_collected && info.set_piece && !info.collected {
        text.push(' ');
        text.push_str(NOT_COLLECTED_MARKUP);
        icon_surplus += markup_surplus(NOT_COLLECTED_MARKUP);
    }

    if opts.show_trait && info.equippable {
        if let Some(trait_name) = info.trait_name.as_deref() {
            text.push_str(&format!(" ({trait_name})"));
        }
    }

    push_count_suffix(&mut text, quantity, opts);

    if opts.show_icon {
        if let Some(icon) = info.icon.as_deref() {
            let markup = icon_markup(icon, opts.icon_size);
            icon_surplus += markup_surplus(&markup);
            text = format!("{markup} {text}");
        }
    }

    Token { text, icon_surplus }
}

/// Formats one currency entry. No trait or collection decoration applies;
/// a zero amount renders as a literal `x0` suffix.
pub fn currency_token(info: &CurrencyInfo, amount: u64, opts: &RenderOptions) -> Token {
    let mut text = if amount == 1 {
        info.singular.clone()
    } else {
        info.plural.clone()
    };
    let mut icon_surplus = 0;

    if amount == 0 {
        text.push_str(" x0");
    } else {
        push_count_suffix(&mut text, amount, opts);
    }

    if opts.show_icon {
        if let Some(icon) = info.icon.as_deref() {
            let markup = icon_markup(icon, opts.icon_size);
            icon_surplus += markup_surplus(&markup);
            text = format!("{markup} {text}");
        }
    }

    Token { text, icon_surplus }
}

fn push_count_suffix(text: &mut String, quantity: u64, opts: &RenderOptions) {
    if opts.hide_singular && quantity == 1 {
        return;
    }
    text.push_str(&format!(" x{}", group_digits(quantity)));
}

/// Discrete-event counter annotation, e.g. "3 drops".
pub fn counter_token(count: u64, noun: &str) -> Token {
    let suffix = if count == 1 { "" } else { "s" };
    Token::plain(format!("{} {noun}{suffix}", group_digits(count)))
}
