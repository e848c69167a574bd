use chrono::NaiveDate;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::card::ReservationCard;
use crate::booking::copy::CopyButton;
use crate::booking::wizard::{today, Step, Wizard};
use crate::cart::Cart;
use crate::config::SUPPORT_WECHAT;
use crate::error::BookingError;
use crate::models::{CartItem, ClassType, ContactInfo, Course, TimeSlot};

#[derive(Properties, PartialEq)]
pub struct CourseDetailPanelProps {
    pub course: &'static Course,
    pub cart: Cart,
    pub on_add: Callback<CartItem>,
    pub on_remove: Callback<String>,
    pub on_close: Callback<()>,
}

/// Applies `f` to a copy of the wizard and stores it only on success.
fn apply(
    wizard: &UseStateHandle<Wizard>,
    f: impl FnOnce(&mut Wizard) -> Result<(), BookingError>,
) -> bool {
    let mut next = (**wizard).clone();
    match f(&mut next) {
        Ok(()) => {
            wizard.set(next);
            true
        }
        Err(e) => {
            warn!("Booking step refused: {}", e);
            false
        }
    }
}

fn tone(class_type: ClassType) -> &'static str {
    match class_type {
        ClassType::Group => "group",
        ClassType::Private => "private",
    }
}

#[derive(Clone, Copy)]
enum ContactField {
    Name,
    Phone,
    Wechat,
}

impl ContactField {
    fn slot(self, contact: &mut ContactInfo) -> &mut String {
        match self {
            ContactField::Name => &mut contact.name,
            ContactField::Phone => &mut contact.phone,
            ContactField::Wechat => &mut contact.wechat,
        }
    }
}

#[function_component(CourseDetailPanel)]
pub fn course_detail_panel(props: &CourseDetailPanelProps) -> Html {
    let CourseDetailPanelProps { cart, on_add, on_remove, on_close, .. } = props;
    let course = props.course;
    let wizard = use_state(|| Wizard::open(course, cart));
    let existing = cart.get(course.id).cloned();
    let today = today();

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let select_class = |class_type: ClassType| {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            apply(&wizard, |w| {
                w.select_class(class_type);
                Ok(())
            });
        })
    };

    let on_date = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let date = if value.is_empty() {
                None
            } else {
                match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(_) => {
                        warn!("Ignoring unparseable date {:?}", value);
                        return;
                    }
                }
            };
            let mut next = (*wizard).clone();
            if let Err(e) = next.set_date(date, today) {
                warn!("Booking step refused: {}", e);
                input.set_value("");
            }
            wizard.set(next);
        })
    };

    let on_time = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            apply(&wizard, |w| w.set_time(&select.value()));
        })
    };

    let commit = {
        let wizard = wizard.clone();
        let on_add = on_add.clone();
        Callback::from(move |_: MouseEvent| match wizard.commit() {
            Ok(item) => on_add.emit(item),
            Err(e) => warn!("Booking step refused: {}", e),
        })
    };

    let checkout = {
        let wizard = wizard.clone();
        let cart = cart.clone();
        let on_add = on_add.clone();
        Callback::from(move |_: MouseEvent| {
            let mut pending = None;
            let moved = apply(&wizard, |w| {
                pending = w.checkout(&cart)?;
                Ok(())
            });
            if moved {
                if let Some(item) = pending {
                    on_add.emit(item);
                }
                info!("Booking: checkout");
            }
        })
    };

    let back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            apply(&wizard, Wizard::back);
        })
    };

    let generate_card = {
        let wizard = wizard.clone();
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| {
            if apply(&wizard, |w| w.generate_card(&cart)) {
                info!("Booking: reservation card for {} item(s)", cart.len());
            }
        })
    };

    let finish_card = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            apply(&wizard, Wizard::finish_card);
        })
    };

    let contact_input = |field: ContactField| {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply(&wizard, |w| {
                *field.slot(w.contact_mut()) = input.value();
                Ok(())
            });
        })
    };

    let remove = |course_id: String| {
        let on_remove = on_remove.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(course_id.clone()))
    };

    let step = wizard.step();
    let booking = wizard.booking();
    let contact = wizard.contact();

    let body = match step {
        Step::Booking => html! {
            <div class="panel-section">
                <div class="panel-block">
                    <h3 class="panel-label">{"课程概述"}</h3>
                    <p class="panel-summary">{course.summary}</p>
                </div>

                <div class="panel-block">
                    <h3 class="panel-label">{"详细内容"}</h3>
                    <ul class="detail-list">
                        { for course.details.iter().map(|detail| html! {
                            <li><span class="dot"></span><span>{*detail}</span></li>
                        }) }
                    </ul>
                </div>

                <div class="tag-row">
                    { for course.tags.iter().map(|tag| html! {
                        <span class="tag">{format!("#{}", tag)}</span>
                    }) }
                </div>

                <div class="config-box">
                    <div class="row">
                        <h3>{"✓ 课程配置"}</h3>
                        <div class="price-now">
                            <span class="muted small">{"本节价格"}</span>
                            <span class="accent big">{format!("¥{}", wizard.current_price())}</span>
                        </div>
                    </div>

                    <div class="class-type-grid">
                        { for ClassType::ALL.iter().map(|&class_type| html! {
                            <button
                                class={classes!(
                                    "class-type",
                                    (wizard.class_type() == class_type).then(|| "selected"),
                                    tone(class_type),
                                )}
                                onclick={select_class(class_type)}
                            >
                                <div class="strong">{class_type.label()}</div>
                                <div class="small">{format!("¥{} / 1-2小时", class_type.price())}</div>
                            </button>
                        }) }
                    </div>

                    <p class="muted small">{"请选择日期（仅限今日及以后）与时间（19:00-23:00）"}</p>
                    <div class="schedule-grid">
                        <label>
                            <span class="muted small">{"日期"}</span>
                            <input
                                type="date"
                                min={today.format("%Y-%m-%d").to_string()}
                                value={booking.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                                onchange={on_date}
                            />
                        </label>
                        <label>
                            <span class="muted small">{"时间段"}</span>
                            <select onchange={on_time}>
                                <option value="" selected={booking.time.is_none()}>{"请选择"}</option>
                                { for TimeSlot::all().map(|slot| html! {
                                    <option value={slot.to_string()} selected={booking.time == Some(slot)}>
                                        {slot.to_string()}
                                    </option>
                                }) }
                            </select>
                        </label>
                    </div>
                </div>
            </div>
        },
        Step::Form => html! {
            <div class="panel-section">
                <div class="row">
                    <h3>{"已选课程清单"}</h3>
                    <button class="link-button" onclick={back.clone()}>{"返回修改"}</button>
                </div>

                <div class="cart-list">
                    { for cart.items().iter().map(|item| html! {
                        <div class="cart-row" key={item.course_id.clone()}>
                            <div>
                                <div class="strong">{&item.course_title}</div>
                                <div class="muted small">
                                    <span class={classes!("chip", tone(item.class_type))}>
                                        {item.class_type.label()}
                                    </span>
                                    {" "}{item.schedule()}
                                </div>
                            </div>
                            <div class="right">
                                <div class="strong">{format!("¥{}", item.price)}</div>
                                <button class="remove-button" onclick={remove(item.course_id.clone())}>{"移除"}</button>
                            </div>
                        </div>
                    }) }
                    if cart.is_empty() {
                        <div class="muted empty">{"清单为空，请先添加课程"}</div>
                    }
                </div>

                <div class="row total-row">
                    <span class="muted">{"合计金额"}</span>
                    <span class="accent big">{format!("¥{}", cart.total())}</span>
                </div>

                <div class="divider"></div>

                <div class="center">
                    <h3>{"预留联系信息"}</h3>
                    <p class="muted small">{"用于生成预约凭证及助教联系"}</p>
                </div>

                <label class="field">
                    <span>{"您的称呼"}</span>
                    <input type="text" placeholder="例如：星川同学" value={contact.name.clone()} oninput={contact_input(ContactField::Name)} />
                </label>
                <label class="field">
                    <span>{"手机号码"}</span>
                    <input type="tel" placeholder="11位手机号" value={contact.phone.clone()} oninput={contact_input(ContactField::Phone)} />
                </label>
                <label class="field">
                    <span>{"微信号"}</span>
                    <input type="text" placeholder="用于添加助教" value={contact.wechat.clone()} oninput={contact_input(ContactField::Wechat)} />
                </label>
            </div>
        },
        Step::Card => html! {
            <div class="panel-section center">
                <h3>{"📷 请截图保存下方卡片"}</h3>
                <p class="muted small">{"截图后点击底部按钮进行下一步"}</p>
                <ReservationCard cart={cart.clone()} contact={contact.clone()} issued={today} />
            </div>
        },
        Step::Contact => html! {
            <div class="panel-section center">
                <div class="success-badge">{"✓"}</div>
                <h3 class="big">{"预约成功"}</h3>
                <p class="muted">
                    {"请添加小助理微信，并发送刚才的"}<br/>
                    <span class="strong">{"预约卡片截图"}</span>
                </p>
                <div class="support-box">
                    <div class="muted small">{"助教微信号"}</div>
                    <div class="support-handle">{SUPPORT_WECHAT}</div>
                    <CopyButton text={SUPPORT_WECHAT} label="复制微信号" />
                </div>
                <div class="muted small">{format!("添加时请备注：报名 {}", cart.levels())}</div>
            </div>
        },
    };

    let footer = match step {
        Step::Booking => {
            let count = wizard.checkout_count(cart);
            let checkout_label = if count > 0 {
                format!("🛒 去结算 ({})", count)
            } else {
                "🛒 去结算".to_string()
            };
            html! {
                <>
                    <div class="button-row">
                        <button class="secondary grow" disabled={!wizard.can_commit()} onclick={commit}>
                            { if existing.is_some() { "更新配置" } else { "加入预约单" } }
                        </button>
                        <button class="ghost" onclick={close.clone()}>{"继续选课"}</button>
                    </div>
                    <button class="primary wide" disabled={!wizard.can_checkout(cart)} onclick={checkout}>
                        {checkout_label}
                    </button>
                </>
            }
        }
        Step::Form => html! {
            <div class="button-row">
                <button class="secondary" onclick={back}>{"←"}</button>
                <button class="primary grow" disabled={!wizard.can_generate_card(cart)} onclick={generate_card}>
                    {"生成预约卡片"}
                </button>
            </div>
        },
        Step::Card => html! {
            <div class="button-row">
                <button class="secondary" onclick={back}>{"修改信息"}</button>
                <button class="light grow" onclick={finish_card}>{"✓ 已截图，下一步"}</button>
            </div>
        },
        Step::Contact => html! {
            <button class="secondary wide" onclick={close.clone()}>{"完成"}</button>
        },
    };

    html! {
        <div class="panel-overlay">
            <div class="panel-backdrop" onclick={close.clone()}></div>
            <aside class="panel">
                <header class="panel-header">
                    <div>
                        <div class="panel-badges">
                            <span class="level-badge">{course.level}</span>
                            if existing.is_some() && step == Step::Booking {
                                <span class="in-cart-badge">{"✓ 已在清单"}</span>
                            }
                        </div>
                        <h2>{course.title}</h2>
                    </div>
                    <button class="panel-close" onclick={close.clone()}>{"✕"}</button>
                </header>
                <div class="panel-body">{body}</div>
                <footer class="panel-footer">{footer}</footer>
            </aside>
        </div>
    }
}
