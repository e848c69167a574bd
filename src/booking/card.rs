use chrono::NaiveDate;
use yew::prelude::*;

use crate::cart::Cart;
use crate::models::ContactInfo;

const BARCODE_BARS: usize = 20;

/// Tall/short pattern for the decorative barcode. Seeded so the card looks
/// the same every time it is rendered for the same contact.
pub fn barcode_bars(seed: &str) -> Vec<bool> {
    // FNV-1a, then one bit per bar
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (0..BARCODE_BARS).map(|i| (hash >> (i * 3 % 64)) & 1 == 1).collect()
}

#[derive(Properties, PartialEq)]
pub struct ReservationCardProps {
    pub cart: Cart,
    pub contact: ContactInfo,
    pub issued: NaiveDate,
}

#[function_component(ReservationCard)]
pub fn reservation_card(props: &ReservationCardProps) -> Html {
    let ReservationCardProps { cart, contact, issued } = props;
    let seed = format!("{}{}", contact.phone, cart.levels());

    html! {
        <div class="reservation-card">
            <div class="reservation-card-stripe"></div>
            <div class="reservation-card-body">
                <div class="reservation-card-watermark">{"ORDER"}</div>

                <div class="reservation-card-header">
                    <div class="reservation-card-kicker">{"COURSE RESERVATION"}</div>
                    <h2>{"星川 AI 专业课预约单"}</h2>
                    <div class="reservation-card-date">{issued.format("%Y-%m-%d").to_string()}</div>
                </div>

                <div class="reservation-card-items">
                    <div class="muted small">{format!("已购课程 ({})", cart.len())}</div>
                    { for cart.items().iter().map(|item| html! {
                        <div class="reservation-card-item" key={item.course_id.clone()}>
                            <div class="row strong">
                                <span>{&item.course_title}</span>
                                <span>{format!("¥{}", item.price)}</span>
                            </div>
                            <div class="row muted small">
                                <span>{format!("{} | {}", item.class_type.label(), item.course_level)}</span>
                                <span>{item.schedule()}</span>
                            </div>
                        </div>
                    }) }
                    <div class="row reservation-card-total">
                        <span class="muted">{"总计"}</span>
                        <span class="accent strong">{format!("¥{}", cart.total())}</span>
                    </div>
                </div>

                <div class="reservation-card-contact">
                    <div class="row"><span class="muted">{"学员姓名"}</span><span>{&contact.name}</span></div>
                    <div class="row"><span class="muted">{"手机号码"}</span><span class="mono strong">{&contact.phone}</span></div>
                    <div class="row"><span class="muted">{"微信号"}</span><span>{&contact.wechat}</span></div>
                </div>

                <div class="barcode">
                    { for barcode_bars(&seed).into_iter().map(|tall| html! {
                        <div class={classes!("bar", tall.then(|| "tall"))}></div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barcode_is_stable_per_seed() {
        let a = barcode_bars("13800000000Level 1");
        assert_eq!(a.len(), BARCODE_BARS);
        assert_eq!(a, barcode_bars("13800000000Level 1"));
        assert_ne!(a, barcode_bars("13900000000Level 2"));
    }
}
